//! Data models
//!
//! Shared between the storage crate and the site frontend (via JSON).
//! Wire format is camelCase with `{en, jp}` bilingual pairs, matching the
//! documents already in the remote collection.

pub mod lead;
pub mod product;
pub mod serde_helpers;
pub mod settings;

// Re-exports
pub use lead::*;
pub use product::*;
pub use settings::*;
