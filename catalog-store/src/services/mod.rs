//! Services
//!
//! Image materialization, the catalog data facade, and the lead-capture gate.

pub mod blob_store;
pub mod catalog_gate;
pub mod catalog_service;
pub mod materializer;

pub use blob_store::{BlobStore, FsBlobStore};
pub use catalog_gate::{CatalogAccess, CatalogGate, GateError, GateState};
pub use catalog_service::CatalogService;
pub use materializer::{ImageMaterializer, ImageSlot};
