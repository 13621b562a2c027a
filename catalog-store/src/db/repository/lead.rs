//! Lead Repository (append-only)
//!
//! Write-only sink for visitor contact records. The subsystem never reads
//! these collections back and performs no deduplication of repeat
//! submissions — both deliberate, matching the site's observed behavior.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::util::now_millis;
use shared::{CatalogRequest, CatalogRequestForm, ContactMessage, ContactMessageForm};

use super::{BaseRepository, RepoError, RepoResult};

const CATALOG_REQUESTS: &str = "catalog_request";
const CONTACT_MESSAGES: &str = "contact_message";

#[derive(Clone)]
pub struct LeadRepository {
    base: BaseRepository,
}

impl LeadRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Append one catalog-download request, stamped "new" at server time
    pub async fn add_catalog_request(&self, form: CatalogRequestForm) -> RepoResult<()> {
        let record = CatalogRequest::from_form(form, now_millis());
        let created: Option<CatalogRequest> = self
            .base
            .db()
            .create(CATALOG_REQUESTS)
            .content(record)
            .await?;
        created
            .map(|_| ())
            .ok_or_else(|| RepoError::Database("Failed to record catalog request".to_string()))
    }

    /// Append one contact-form message, stamped "new" at server time
    pub async fn add_contact_message(&self, form: ContactMessageForm) -> RepoResult<()> {
        let record = ContactMessage::from_form(form, now_millis());
        let created: Option<ContactMessage> = self
            .base
            .db()
            .create(CONTACT_MESSAGES)
            .content(record)
            .await?;
        created
            .map(|_| ())
            .ok_or_else(|| RepoError::Database("Failed to record contact message".to_string()))
    }
}
