//! Repository Module
//!
//! Typed CRUD and subscription operations over the document store. The
//! domain logic above this layer never touches the storage SDK directly.

pub mod lead;
pub mod product;
pub mod settings;

// Re-exports
pub use lead::LeadRepository;
pub use product::ProductRepository;
pub use settings::SettingsRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// One full read of a collection, as delivered to the mirror.
///
/// `authoritative` distinguishes a confirmed server-state read from a
/// possibly-stale local cache read; only the former may trigger the
/// seed-on-empty path.
#[derive(Debug, Clone)]
pub struct CollectionSnapshot<T> {
    pub docs: Vec<T>,
    pub authoritative: bool,
}

impl<T> CollectionSnapshot<T> {
    pub fn authoritative(docs: Vec<T>) -> Self {
        Self {
            docs,
            authoritative: true,
        }
    }

    pub fn from_cache(docs: Vec<T>) -> Self {
        Self {
            docs,
            authoritative: false,
        }
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
