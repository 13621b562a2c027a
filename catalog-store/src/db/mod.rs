//! Database Module
//!
//! Owns the embedded SurrealDB instance. Production opens a RocksDB-backed
//! store under the work directory; tests use the in-memory engine.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::common::error::AppError;

const NAMESPACE: &str = "aavo";
const DATABASE: &str = "catalog";

/// Database service — owns the embedded SurrealDB connection
#[derive(Clone)]
pub struct DbService {
    db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database under `data_dir`
    pub async fn open(data_dir: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(data_dir)
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {e}")))?;
        Self::select_namespace(&db).await?;

        tracing::info!(path = %data_dir.display(), "database connection established");
        Ok(Self { db })
    }

    /// Open a fresh in-memory database (tests, ephemeral tooling)
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {e}")))?;
        Self::select_namespace(&db).await?;
        Ok(Self { db })
    }

    async fn select_namespace(db: &Surreal<Db>) -> Result<(), AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::Database(format!("Failed to select namespace: {e}")))
    }

    /// Handle to the underlying connection (cheap to clone)
    pub fn db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
