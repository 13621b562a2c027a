//! Catalog Data Facade
//!
//! The single entry point the admin panel uses to mutate catalog data.
//! Owns write ordering — image materialization always completes before the
//! document write begins — and error surfacing: every I/O failure is caught
//! here and reported, never re-thrown into the view layer.
//!
//! No operation retries and no client-side timeout is applied; a hung
//! backend call leaves the caller's busy state up to the caller.

use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::{Product, SettingsUpdate, SiteSettings};

use super::blob_store::BlobStore;
use super::materializer::ImageMaterializer;
use crate::common::error::{AppError, AppResult};
use crate::db::repository::{ProductRepository, SettingsRepository};

#[derive(Clone)]
pub struct CatalogService {
    products: ProductRepository,
    settings: SettingsRepository,
    materializer: ImageMaterializer,
}

impl CatalogService {
    pub fn new(db: Surreal<Db>, blob_store: Arc<dyn BlobStore>) -> Self {
        Self {
            products: ProductRepository::new(db.clone()),
            settings: SettingsRepository::new(db),
            materializer: ImageMaterializer::new(blob_store),
        }
    }

    pub fn products_repo(&self) -> &ProductRepository {
        &self.products
    }

    pub fn settings_repo(&self) -> &SettingsRepository {
        &self.settings
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Create a new product. Duplicate ids are rejected; the mirror picks up
    /// the new record through its subscription, not from this call.
    pub async fn add_product(&self, product: Product) -> AppResult<()> {
        product.validate().map_err(AppError::Validation)?;

        let product = self.materializer.materialize_product(product).await;
        let product = product.sanitized();

        self.products.create(&product).await?;
        tracing::info!(id = %product.id, "product created");
        Ok(())
    }

    /// Full-document replace. The caller supplies the complete desired
    /// state — editing one sub-product means sending the whole updated list.
    pub async fn update_product(&self, product: Product) -> AppResult<()> {
        product.validate().map_err(AppError::Validation)?;

        let product = self.materializer.materialize_product(product).await;
        let product = product.sanitized();

        self.products.upsert(&product).await?;
        tracing::info!(id = %product.id, "product updated");
        Ok(())
    }

    /// Idempotent: deleting an id that does not exist is not an error
    pub async fn delete_product(&self, id: &str) -> AppResult<()> {
        self.products.delete(id).await?;
        tracing::info!(id, "product deleted");
        Ok(())
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Merge-write the catalog URL, leaving the logo untouched
    pub async fn update_catalog_url(&self, url: &str) -> AppResult<SiteSettings> {
        Ok(self
            .settings
            .update(SettingsUpdate::catalog_url(url))
            .await?)
    }

    /// Merge-write the logo URL, leaving the catalog URL untouched
    pub async fn update_logo_url(&self, url: &str) -> AppResult<SiteSettings> {
        Ok(self.settings.update(SettingsUpdate::logo_url(url)).await?)
    }

    // =========================================================================
    // Reset
    // =========================================================================

    /// Factory reset: delete every product, re-seed the defaults, clear
    /// settings. The caller must have confirmed this with the operator.
    ///
    /// The three phases are not atomic. A failure aborts the remaining
    /// phases and reports which phase broke; the store is left in whatever
    /// state the last completed phase produced.
    pub async fn reset_data(&self) -> AppResult<()> {
        tracing::warn!("factory reset requested");

        let removed = self.products.delete_all().await.map_err(|e| {
            tracing::error!(error = %e, phase = "clear-products", "reset phase failed");
            AppError::from(e)
        })?;
        tracing::info!(removed, phase = "clear-products", "reset phase complete");

        self.products.seed_defaults().await.map_err(|e| {
            tracing::error!(error = %e, phase = "reseed-defaults", "reset phase failed");
            AppError::from(e)
        })?;
        tracing::info!(phase = "reseed-defaults", "reset phase complete");

        self.settings.clear().await.map_err(|e| {
            tracing::error!(error = %e, phase = "clear-settings", "reset phase failed");
            AppError::from(e)
        })?;
        tracing::info!(phase = "clear-settings", "reset phase complete");

        Ok(())
    }
}
