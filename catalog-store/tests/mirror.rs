//! Remote collection mirror: seeding guard, fallback, live replication

use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use catalog_store::{
    CatalogStore, CollectionSnapshot, DbService, ProductRepository, SettingsRepository,
};
use shared::{Bilingual, Product, SettingsUpdate, SpecSheet};

fn sample_product(id: &str) -> Product {
    Product {
        id: id.into(),
        name: Bilingual::new("Tamarind", "タマリンド"),
        description: Bilingual::new("Sour pods.", "酸味のある果実。"),
        image: "https://example.com/tamarind.jpg".into(),
        specs: SpecSheet {
            origin: Bilingual::new("Thailand", "タイ"),
            grade: None,
            temp: Bilingual::new("Dry Storage", "常温保存"),
        },
        long_specs: vec![],
        sub_products: vec![],
    }
}

/// Poll until `check` passes or the deadline hits
async fn wait_for(mut check: impl FnMut() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        if check() {
            return;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "condition not reached within deadline"
        );
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

#[tokio::test]
async fn authoritative_empty_snapshot_seeds_defaults_exactly_once() {
    let db = DbService::memory().await.unwrap();
    let repo = ProductRepository::new(db.db());
    let store = CatalogStore::new();

    store
        .apply_snapshot(CollectionSnapshot::authoritative(vec![]), &repo)
        .await;

    assert_eq!(repo.find_all().await.unwrap().len(), 6);
    assert_eq!(store.products().len(), 6);

    // A later empty authoritative snapshot must not re-seed
    repo.delete_all().await.unwrap();
    store
        .apply_snapshot(CollectionSnapshot::authoritative(vec![]), &repo)
        .await;
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn cache_empty_snapshot_never_seeds() {
    let db = DbService::memory().await.unwrap();
    let repo = ProductRepository::new(db.db());
    let store = CatalogStore::new();

    store
        .apply_snapshot(CollectionSnapshot::from_cache(vec![]), &repo)
        .await;

    assert!(repo.find_all().await.unwrap().is_empty(), "no seeding from cache reads");
    assert!(store.products().is_empty());
}

#[tokio::test]
async fn snapshots_replace_the_list_wholesale() {
    let db = DbService::memory().await.unwrap();
    let repo = ProductRepository::new(db.db());
    let store = CatalogStore::new();

    store
        .apply_snapshot(
            CollectionSnapshot::authoritative(vec![sample_product("tamarind")]),
            &repo,
        )
        .await;
    assert_eq!(store.products().len(), 1);

    store
        .apply_snapshot(
            CollectionSnapshot::authoritative(vec![
                sample_product("jaggery"),
                sample_product("ghee"),
            ]),
            &repo,
        )
        .await;

    let products = store.products();
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.id != "tamarind"));
}

#[tokio::test]
async fn activation_mirrors_remote_writes() {
    let db = DbService::memory().await.unwrap();
    let repo = ProductRepository::new(db.db());
    let settings_repo = SettingsRepository::new(db.db());
    let store = CatalogStore::new();

    store.activate(repo.clone(), settings_repo.clone()).await;

    // Initial snapshot is authoritative-empty, so the defaults get seeded
    {
        let store = store.clone();
        wait_for(move || store.products().len() == 6).await;
    }

    // A write from "another admin" shows up without any local mutation
    repo.upsert(&sample_product("tamarind")).await.unwrap();
    {
        let store = store.clone();
        wait_for(move || store.product("tamarind").is_some()).await;
    }

    // Settings flow through their own subscription
    settings_repo
        .update(SettingsUpdate::catalog_url("https://example.com/cat.pdf"))
        .await
        .unwrap();
    {
        let store = store.clone();
        wait_for(move || {
            store.settings().catalog_url.as_deref() == Some("https://example.com/cat.pdf")
        })
        .await;
    }
}

#[tokio::test]
async fn failed_subscription_falls_back_to_default_dataset() {
    // An uninitialized connection: every operation fails, so the
    // subscription can never be established
    let dead: Surreal<Db> = Surreal::init();
    let repo = ProductRepository::new(dead.clone());
    let settings_repo = SettingsRepository::new(dead);
    let store = CatalogStore::new();

    store.activate(repo, settings_repo).await;

    let products = store.products();
    assert_eq!(products.len(), 6, "defaults served read-only");
    assert_eq!(store.settings(), Default::default());
}
