//! Product Repository
//!
//! Full-document CRUD over the products collection plus the live
//! subscription feeding the mirror. Writes are whole-record replaces; the
//! caller always supplies the complete desired state.

use futures::StreamExt;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::mpsc;

use shared::Product;

use super::{BaseRepository, CollectionSnapshot, RepoError, RepoResult};
use crate::db::models::{ProductRecord, ProductRow};
use crate::seed;

const TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All products, in stable id order
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let rows: Vec<ProductRow> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY id")
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let row: Option<ProductRow> = self.base.db().select((TABLE, id)).await?;
        Ok(row.map(Product::from))
    }

    /// Create a new product; an already-used id is rejected
    pub async fn create(&self, product: &Product) -> RepoResult<Product> {
        if self.find_by_id(&product.id).await?.is_some() {
            return Err(RepoError::Duplicate(format!("product '{}'", product.id)));
        }

        let created: Option<ProductRow> = self
            .base
            .db()
            .create((TABLE, product.id.as_str()))
            .content(ProductRecord::from(product))
            .await?;
        created
            .map(Product::from)
            .ok_or_else(|| RepoError::Database(format!("Failed to create product '{}'", product.id)))
    }

    /// Full-document replace keyed by `product.id`; creates when missing
    pub async fn upsert(&self, product: &Product) -> RepoResult<Product> {
        let updated: Option<ProductRow> = self
            .base
            .db()
            .upsert((TABLE, product.id.as_str()))
            .content(ProductRecord::from(product))
            .await?;
        updated
            .map(Product::from)
            .ok_or_else(|| RepoError::Database(format!("Failed to write product '{}'", product.id)))
    }

    /// Delete by id. Idempotent: a missing id is not an error.
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let _removed: Option<ProductRow> = self.base.db().delete((TABLE, id)).await?;
        Ok(())
    }

    /// Remove every product document (reset phase 1)
    pub async fn delete_all(&self) -> RepoResult<usize> {
        let removed: Vec<ProductRow> = self.base.db().delete(TABLE).await?;
        Ok(removed.len())
    }

    /// Write the predefined default dataset
    pub async fn seed_defaults(&self) -> RepoResult<usize> {
        let defaults = seed::default_products();
        let count = defaults.len();
        for product in &defaults {
            self.upsert(product).await?;
        }
        tracing::info!(count, "seeded default product catalog");
        Ok(count)
    }

    /// One authoritative full read of the collection
    pub async fn snapshot(&self) -> RepoResult<CollectionSnapshot<Product>> {
        Ok(CollectionSnapshot::authoritative(self.find_all().await?))
    }

    /// Standing subscription: one initial snapshot, then one full snapshot
    /// per observed change to the collection, from any writer.
    ///
    /// The collection is re-read wholesale on every change notification —
    /// the mirror's contract is list replacement, not incremental merge.
    pub async fn changes(
        &self,
        buffer: usize,
    ) -> RepoResult<mpsc::Receiver<CollectionSnapshot<Product>>> {
        let mut stream = self.base.db().select::<Vec<ProductRow>>(TABLE).live().await?;
        let initial = self.snapshot().await?;

        let (tx, rx) = mpsc::channel(buffer.max(1));
        let repo = self.clone();
        tokio::spawn(async move {
            if tx.send(initial).await.is_err() {
                return;
            }
            while let Some(event) = stream.next().await {
                if let Err(e) = event {
                    tracing::warn!(error = %e, "product live query notification failed");
                    continue;
                }
                match repo.snapshot().await {
                    Ok(snap) => {
                        if tx.send(snap).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "product snapshot re-read failed"),
                }
            }
            tracing::debug!("product subscription ended");
        });

        Ok(rx)
    }
}
