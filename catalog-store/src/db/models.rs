//! Row types bridging SurrealDB records and domain models
//!
//! The storage engine owns the `id` field as a native `RecordId`, so rows
//! read from the database carry a `RecordId` while the domain `Product`
//! carries the plain string key, and write payloads omit `id` entirely —
//! the key travels in the resource part of the statement instead.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::serde_helpers;
use shared::{Bilingual, LongSpec, Product, SpecSheet, SubProduct};

/// Product row as stored (record id + document fields)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: RecordId,
    pub name: Bilingual,
    pub description: Bilingual,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub specs: SpecSheet,
    #[serde(default)]
    pub long_specs: Vec<LongSpec>,
    #[serde(default, deserialize_with = "serde_helpers::vec_skip_null")]
    pub sub_products: Vec<SubProduct>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id.key().to_string(),
            name: row.name,
            description: row.description,
            image: row.image,
            specs: row.specs,
            long_specs: row.long_specs,
            sub_products: row.sub_products,
        }
    }
}

/// Full-document write payload; `id` lives in the record key, not the body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: Bilingual,
    pub description: Bilingual,
    pub image: String,
    pub specs: SpecSheet,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub long_specs: Vec<LongSpec>,
    pub sub_products: Vec<SubProduct>,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        ProductRecord {
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            specs: product.specs.clone(),
            long_specs: product.long_specs.clone(),
            sub_products: product.sub_products.clone(),
        }
    }
}
