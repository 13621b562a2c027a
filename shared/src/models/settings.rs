//! Site Settings Model (singleton)

use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Site-wide settings, stored as a single named document.
///
/// A missing document means "nothing configured yet" and deserializes to
/// the default — never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    /// URL of the downloadable wholesale catalog; absent = not configured
    #[serde(
        default,
        deserialize_with = "serde_helpers::empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub catalog_url: Option<String>,
    /// URL of the site logo; absent = use the built-in default
    #[serde(
        default,
        deserialize_with = "serde_helpers::empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo_url: Option<String>,
}

/// Merge-write payload: only the fields present are touched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl SettingsUpdate {
    pub fn catalog_url(url: impl Into<String>) -> Self {
        Self {
            catalog_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn logo_url(url: impl Into<String>) -> Self {
        Self {
            logo_url: Some(url.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_serializes_only_present_fields() {
        let value = serde_json::to_value(SettingsUpdate::catalog_url("https://x/cat.pdf")).unwrap();
        assert_eq!(value["catalogUrl"], "https://x/cat.pdf");
        assert!(value.get("logoUrl").is_none());
    }

    #[test]
    fn empty_stored_url_reads_as_unconfigured() {
        let s: SiteSettings = serde_json::from_str(r#"{"catalogUrl": ""}"#).unwrap();
        assert_eq!(s.catalog_url, None);
    }
}
