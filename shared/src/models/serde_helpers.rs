//! Common serde helpers for absorbing null values from the storage layer
//!
//! The admin UI (and JSON.stringify on sparse arrays in the original site)
//! can produce `null` entries inside list fields and `null` where a field
//! should simply be absent. The document store treats both as wire-format
//! errors or unwanted tombstones, so they are stripped at the serde boundary.

use serde::{Deserialize, Deserializer};

/// Deserialize a `Vec<T>` while dropping `null` entries.
///
/// A missing or `null` field deserializes to an empty list.
pub fn vec_skip_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .collect())
}

/// Deserialize an optional string, mapping `null` and `""` both to `None`.
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
