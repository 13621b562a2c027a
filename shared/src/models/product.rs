//! Product (Category) Model

use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Required English/Japanese text pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    pub en: String,
    pub jp: String,
}

impl Bilingual {
    pub fn new(en: impl Into<String>, jp: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            jp: jp.into(),
        }
    }

    /// Both halves present and non-empty
    pub fn is_complete(&self) -> bool {
        !self.en.trim().is_empty() && !self.jp.trim().is_empty()
    }

    /// Neither half has any content
    pub fn is_blank(&self) -> bool {
        self.en.trim().is_empty() && self.jp.trim().is_empty()
    }
}

/// Structured spec attributes shown on the detail page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecSheet {
    pub origin: Bilingual,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub temp: Bilingual,
}

/// One row of the detailed specification table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongSpec {
    pub label: Bilingual,
    pub value: Bilingual,
}

/// Item nested within a Product (Category).
///
/// Sub-products carry no identity of their own; they are addressed by
/// position within the parent's `subProducts` list. The mirror replaces the
/// whole list on every remote change, so an index is only meaningful within
/// a single snapshot — consumers re-resolve by content (name + image) after
/// a refresh rather than assuming index stability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubProduct {
    pub name: Bilingual,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Bilingual>,
    /// Durable URL, or transiently an inline `data:image/...` payload
    #[serde(default)]
    pub image: String,
}

impl SubProduct {
    /// No content in any field — a leftover slot, not a draft entry
    pub fn is_empty(&self) -> bool {
        self.name.is_blank()
            && self.image.is_empty()
            && self.description.as_ref().is_none_or(Bilingual::is_blank)
    }
}

/// Top-level merchandise grouping (the site calls these categories)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Document key; immutable once created
    pub id: String,
    pub name: Bilingual,
    pub description: Bilingual,
    /// Primary image: durable URL, or inline payload before persistence
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub specs: SpecSheet,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub long_specs: Vec<LongSpec>,
    /// Display order is list order; preserved verbatim across edits
    #[serde(default, deserialize_with = "serde_helpers::vec_skip_null")]
    pub sub_products: Vec<SubProduct>,
}

impl Product {
    /// Drop tombstones the UI may hand us before the document is written:
    /// blank optional strings, fully-empty sub-product slots left behind by
    /// deleted rows, and blank description pairs. A partially-entered row
    /// (one language filled in, or an image but no name yet) is kept as-is;
    /// the list order of surviving entries is untouched.
    pub fn sanitized(mut self) -> Self {
        self.specs.grade = self.specs.grade.filter(|g| !g.trim().is_empty());
        self.sub_products.retain(|sp| !sp.is_empty());
        for sp in &mut self.sub_products {
            sp.description = sp.description.take().filter(|d| !d.is_blank());
        }
        self
    }

    /// Required-field check applied before any network call
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("product id is required".into());
        }
        if !self.name.is_complete() {
            return Err("both name languages are required".into());
        }
        if !self.description.is_complete() {
            return Err("both description languages are required".into());
        }
        Ok(())
    }
}
