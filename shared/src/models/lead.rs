//! Lead Capture Models
//!
//! Append-only records written when a visitor unlocks the catalog or sends
//! a contact message. The subsystem never reads these back; the sales team
//! consumes them from the backend console.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Status marker stamped on every new lead record
pub const LEAD_STATUS_NEW: &str = "new";

/// Visitor-supplied form for the catalog gate
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CatalogRequestForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
}

/// Stored catalog request record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Millisecond UTC timestamp set at write time
    pub created_at: i64,
    pub status: String,
}

impl CatalogRequest {
    pub fn from_form(form: CatalogRequestForm, created_at: i64) -> Self {
        Self {
            name: form.name,
            phone: form.phone,
            email: form.email,
            created_at,
            status: LEAD_STATUS_NEW.to_string(),
        }
    }
}

/// Visitor-supplied contact form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactMessageForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub company: Option<String>,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

/// Stored contact message record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    pub created_at: i64,
    pub status: String,
}

impl ContactMessage {
    pub fn from_form(form: ContactMessageForm, created_at: i64) -> Self {
        Self {
            name: form.name,
            company: form.company.filter(|c| !c.is_empty()),
            email: form.email,
            phone: form.phone.filter(|p| !p.is_empty()),
            message: form.message,
            created_at,
            status: LEAD_STATUS_NEW.to_string(),
        }
    }
}
