//! Catalog & product data management subsystem
//!
//! The storage-facing half of the Aavo wholesale site: an embedded document
//! database mirrored into memory, an image materialization pipeline that
//! turns inline payloads into durable URLs, a typed CRUD facade for the
//! admin panel, and the gated catalog-download lead flow.
//!
//! The view layer (markup, routing, translations) lives elsewhere and only
//! ever talks to [`CatalogStore`] for reads and [`CatalogService`] /
//! [`CatalogGate`] for writes.

pub mod common;
pub mod config;
pub mod db;
pub mod seed;
pub mod services;
pub mod store;

// Re-exports
pub use common::error::{AppError, AppResult};
pub use common::logger::init_logger;
pub use config::{AdminCredentials, Config};
pub use db::DbService;
pub use db::repository::{
    CollectionSnapshot, LeadRepository, ProductRepository, RepoError, RepoResult,
    SettingsRepository,
};
pub use services::{
    BlobStore, CatalogAccess, CatalogGate, CatalogService, FsBlobStore, GateError, GateState,
    ImageMaterializer,
};
pub use store::CatalogStore;

/// Load `.env`, create the working directories and initialize logging.
///
/// Returns the resolved [`Config`] so callers bootstrap in one call:
///
/// ```no_run
/// let config = catalog_store::setup_environment()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(config.data_dir())?;
    std::fs::create_dir_all(config.images_dir())?;

    let log_dir = config.log_to_file.then(|| config.log_dir());
    init_logger(&config.log_level, log_dir.as_deref())?;

    tracing::info!(work_dir = %config.work_dir, "environment ready");
    Ok(config)
}
