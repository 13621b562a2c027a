//! Lead Capture Flow (Catalog Gate)
//!
//! Collects a prospective customer's contact details before revealing the
//! catalog download link. Writes go to a dedicated append-only collection,
//! independent of the catalog facade; the gate never reads leads back.

use shared::{CatalogRequestForm, ContactMessageForm};
use validator::Validate;

use crate::db::repository::{LeadRepository, RepoError};
use crate::store::CatalogStore;

/// Gate progression; unlocking is per-session and never partial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked,
}

#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// The human-verification token is missing; nothing was submitted
    #[error("please complete the verification challenge")]
    CaptchaRequired,

    #[error("invalid submission: {0}")]
    Invalid(String),

    /// The lead write failed; the gate stays locked and a retry is safe
    #[error("failed to record request: {0}")]
    Write(#[from] RepoError),
}

/// What an unlocked visitor gets to see
#[derive(Debug, Clone)]
pub struct CatalogAccess {
    /// `None` means the catalog document is not configured yet; the caller
    /// shows an explanatory message instead of a broken link.
    pub catalog_url: Option<String>,
}

pub struct CatalogGate {
    leads: LeadRepository,
    store: CatalogStore,
    state: GateState,
}

impl CatalogGate {
    pub fn new(leads: LeadRepository, store: CatalogStore) -> Self {
        Self {
            leads,
            store,
            state: GateState::Locked,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// Submit the gate form. The token is opaque — a present, non-empty
    /// value counts as verified; its authenticity is the challenge widget's
    /// problem, not ours. On success the gate unlocks and the current
    /// catalog URL (if configured) is returned.
    pub async fn submit(
        &mut self,
        form: CatalogRequestForm,
        captcha_token: Option<&str>,
    ) -> Result<CatalogAccess, GateError> {
        Self::require_token(captcha_token)?;
        form.validate()
            .map_err(|e| GateError::Invalid(e.to_string()))?;

        self.leads.add_catalog_request(form).await?;
        self.state = GateState::Unlocked;
        tracing::info!("catalog gate unlocked");

        Ok(self.access())
    }

    /// Current access for an already-unlocked session
    pub fn access(&self) -> CatalogAccess {
        CatalogAccess {
            catalog_url: self.store.settings().catalog_url,
        }
    }

    /// Submit the contact form. Fire-and-forget: success only means the
    /// record was written; no confirmation beyond that is available.
    pub async fn submit_contact(
        &self,
        form: ContactMessageForm,
        captcha_token: Option<&str>,
    ) -> Result<(), GateError> {
        Self::require_token(captcha_token)?;
        form.validate()
            .map_err(|e| GateError::Invalid(e.to_string()))?;

        self.leads.add_contact_message(form).await?;
        tracing::info!("contact message recorded");
        Ok(())
    }

    fn require_token(captcha_token: Option<&str>) -> Result<(), GateError> {
        match captcha_token {
            Some(token) if !token.trim().is_empty() => Ok(()),
            _ => Err(GateError::CaptchaRequired),
        }
    }
}
