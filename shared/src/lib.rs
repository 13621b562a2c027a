//! Shared types for the Aavo catalog subsystem
//!
//! Domain models used across the storage crate and any consuming surface:
//! bilingual product catalog entities, the settings singleton, and the
//! append-only lead records. No I/O lives here.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    Bilingual, CatalogRequest, CatalogRequestForm, ContactMessage, ContactMessageForm, LongSpec,
    Product, SettingsUpdate, SiteSettings, SpecSheet, SubProduct,
};
