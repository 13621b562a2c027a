//! Settings Repository (Singleton)
//!
//! The site settings live in a single named document. A missing document
//! reads as "nothing configured", and field updates are merge-writes that
//! leave the other fields untouched.

use futures::StreamExt;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::mpsc;

use shared::{SettingsUpdate, SiteSettings};

use super::{BaseRepository, RepoError, RepoResult};

const TABLE: &str = "settings";
const SINGLETON_ID: &str = "general";

#[derive(Clone)]
pub struct SettingsRepository {
    base: BaseRepository,
}

impl SettingsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Current settings; a missing document is the empty default, not an error
    pub async fn get(&self) -> RepoResult<SiteSettings> {
        let settings: Option<SiteSettings> =
            self.base.db().select((TABLE, SINGLETON_ID)).await?;
        Ok(settings.unwrap_or_default())
    }

    /// Ensure the singleton document exists, creating the empty default
    async fn get_or_create(&self) -> RepoResult<SiteSettings> {
        if let Some(existing) = self.base.db().select((TABLE, SINGLETON_ID)).await? {
            return Ok(existing);
        }

        let created: Option<SiteSettings> = self
            .base
            .db()
            .create((TABLE, SINGLETON_ID))
            .content(SiteSettings::default())
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create settings".to_string()))
    }

    /// Merge-write: only the fields present in `data` are touched
    pub async fn update(&self, data: SettingsUpdate) -> RepoResult<SiteSettings> {
        self.get_or_create().await?;

        let updated: Option<SiteSettings> = self
            .base
            .db()
            .update((TABLE, SINGLETON_ID))
            .merge(data)
            .await?;
        updated.ok_or_else(|| RepoError::Database("Failed to update settings".to_string()))
    }

    /// Reset every setting to unconfigured (reset phase 3)
    pub async fn clear(&self) -> RepoResult<()> {
        let _cleared: Option<SiteSettings> = self
            .base
            .db()
            .upsert((TABLE, SINGLETON_ID))
            .content(SiteSettings::default())
            .await?;
        Ok(())
    }

    /// Standing subscription to the singleton: current value first, then a
    /// re-read after every observed change.
    pub async fn changes(&self, buffer: usize) -> RepoResult<mpsc::Receiver<SiteSettings>> {
        let mut stream = self
            .base
            .db()
            .select::<Vec<SiteSettings>>(TABLE)
            .live()
            .await?;
        let initial = self.get().await?;

        let (tx, rx) = mpsc::channel(buffer.max(1));
        let repo = self.clone();
        tokio::spawn(async move {
            if tx.send(initial).await.is_err() {
                return;
            }
            while let Some(event) = stream.next().await {
                if let Err(e) = event {
                    tracing::warn!(error = %e, "settings live query notification failed");
                    continue;
                }
                match repo.get().await {
                    Ok(settings) => {
                        if tx.send(settings).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "settings re-read failed"),
                }
            }
            tracing::debug!("settings subscription ended");
        });

        Ok(rx)
    }
}
