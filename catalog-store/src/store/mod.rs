//! Remote Collection Mirror
//!
//! [`CatalogStore`] keeps a live, read-mostly copy of the products
//! collection and the settings singleton. The subscription callback is the
//! only writer of the local list — UI-triggered mutations always go through
//! the facade to the remote store first and come back through the
//! subscription, so the view always reflects the last known server state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tokio::sync::watch;

use shared::{Product, SiteSettings};

use crate::db::repository::{CollectionSnapshot, ProductRepository, SettingsRepository};
use crate::seed;

/// Injectable store owning the mirrored catalog state
#[derive(Clone)]
pub struct CatalogStore {
    products: Arc<RwLock<Vec<Product>>>,
    settings: Arc<RwLock<SiteSettings>>,
    /// Bumped after every local replacement; receivers re-read via accessors
    changed: Arc<watch::Sender<()>>,
    settings_changed: Arc<watch::Sender<()>>,
    seeded: Arc<AtomicBool>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        let (changed, _) = watch::channel(());
        let (settings_changed, _) = watch::channel(());
        Self {
            products: Arc::new(RwLock::new(Vec::new())),
            settings: Arc::new(RwLock::new(SiteSettings::default())),
            changed: Arc::new(changed),
            settings_changed: Arc::new(settings_changed),
            seeded: Arc::new(AtomicBool::new(false)),
        }
    }

    // =========================================================================
    // Read surface
    // =========================================================================

    pub fn products(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    pub fn product(&self, id: &str) -> Option<Product> {
        self.products.read().iter().find(|p| p.id == id).cloned()
    }

    pub fn settings(&self) -> SiteSettings {
        self.settings.read().clone()
    }

    /// Change signal for the product list; await `changed()` then re-read
    pub fn subscribe(&self) -> watch::Receiver<()> {
        self.changed.subscribe()
    }

    /// Change signal for the settings singleton
    pub fn subscribe_settings(&self) -> watch::Receiver<()> {
        self.settings_changed.subscribe()
    }

    // =========================================================================
    // Subscription pump
    // =========================================================================

    /// Establish both standing subscriptions and spawn the pump tasks.
    ///
    /// If the products subscription cannot be established (misconfigured
    /// backend, unreachable store), the mirror falls back to the built-in
    /// default dataset so the site stays populated in a read-only sense.
    pub async fn activate(
        &self,
        products_repo: ProductRepository,
        settings_repo: SettingsRepository,
    ) {
        match products_repo.changes(8).await {
            Ok(mut rx) => {
                let store = self.clone();
                tokio::spawn(async move {
                    while let Some(snapshot) = rx.recv().await {
                        store.apply_snapshot(snapshot, &products_repo).await;
                    }
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "product subscription failed; serving default dataset");
                self.replace_products(seed::default_products());
            }
        }

        match settings_repo.changes(8).await {
            Ok(mut rx) => {
                let store = self.clone();
                tokio::spawn(async move {
                    while let Some(settings) = rx.recv().await {
                        store.apply_settings(settings);
                    }
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "settings subscription failed; treating all settings as empty");
            }
        }
    }

    /// Replace the local list with one observed snapshot.
    ///
    /// Seed-on-empty guard: an empty snapshot triggers the one-time default
    /// seeding only when the snapshot is authoritative. A transient empty
    /// cache read is ignored entirely so momentary offline states are never
    /// mistaken for "all data was deleted".
    pub async fn apply_snapshot(
        &self,
        snapshot: CollectionSnapshot<Product>,
        repo: &ProductRepository,
    ) {
        if snapshot.docs.is_empty() {
            if !snapshot.authoritative {
                tracing::debug!("ignoring empty cache snapshot");
                return;
            }
            if !self.seeded.swap(true, Ordering::SeqCst) {
                tracing::info!("empty collection confirmed from server; seeding defaults");
                match repo.seed_defaults().await {
                    // The seeding writes come back through the subscription;
                    // populate immediately so readers never see a blank site.
                    Ok(_) => self.replace_products(seed::default_products()),
                    Err(e) => {
                        tracing::error!(error = %e, "seeding failed; serving defaults in memory only");
                        self.replace_products(seed::default_products());
                    }
                }
            }
            return;
        }

        self.replace_products(snapshot.docs);
    }

    pub fn apply_settings(&self, settings: SiteSettings) {
        *self.settings.write() = settings;
        self.settings_changed.send_replace(());
    }

    fn replace_products(&self, products: Vec<Product>) {
        let count = products.len();
        *self.products.write() = products;
        self.changed.send_replace(());
        tracing::debug!(count, "catalog mirror replaced");
    }
}
