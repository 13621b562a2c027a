//! Facade CRUD behavior on the in-memory engine

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use catalog_store::{AppError, BlobStore, CatalogService, DbService};
use shared::{Bilingual, Product, SpecSheet, SubProduct};

/// Counts uploads so tests can assert the upload path was never taken
struct CountingStore {
    puts: AtomicUsize,
}

#[async_trait]
impl BlobStore for CountingStore {
    async fn put(&self, key: &str, _bytes: Vec<u8>, _content_type: &str) -> anyhow::Result<String> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        Ok(format!("https://cdn.example.com/images/{key}"))
    }
}

async fn setup() -> (DbService, CatalogService, Arc<CountingStore>) {
    let db = DbService::memory().await.unwrap();
    let store = Arc::new(CountingStore {
        puts: AtomicUsize::new(0),
    });
    let service = CatalogService::new(db.db(), store.clone());
    (db, service, store)
}

fn inline_png() -> String {
    use base64::Engine as _;

    let img = image::RgbImage::from_pixel(2, 2, image::Rgb([200, 30, 30]));
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

fn sub_product(en: &str, jp: &str, image: &str) -> SubProduct {
    SubProduct {
        name: Bilingual::new(en, jp),
        description: None,
        image: image.into(),
    }
}

fn sample_product(id: &str) -> Product {
    Product {
        id: id.into(),
        name: Bilingual::new("Basmati Rice", "バスマティライス"),
        description: Bilingual::new("Extra long grain.", "極長粒米。"),
        image: "https://example.com/rice.jpg".into(),
        specs: SpecSheet {
            origin: Bilingual::new("India / Pakistan", "インド / パキスタン"),
            grade: Some("1121 XXL".into()),
            temp: Bilingual::new("Dry Storage", "常温保存"),
        },
        long_specs: vec![],
        sub_products: vec![
            sub_product("India Gate Classic", "インディアゲート", "https://example.com/s0.jpg"),
            sub_product("Daawat", "ダワット", "https://example.com/s1.jpg"),
        ],
    }
}

#[tokio::test]
async fn url_only_save_round_trips_without_touching_upload_path() {
    let (_db, service, blob) = setup().await;
    let product = sample_product("rice");

    service.add_product(product.clone()).await.unwrap();

    let stored = service
        .products_repo()
        .find_by_id("rice")
        .await
        .unwrap()
        .expect("product should exist");
    assert_eq!(stored, product);
    assert_eq!(blob.puts.load(Ordering::SeqCst), 0, "no upload for URL images");
}

#[tokio::test]
async fn inline_images_are_materialized_before_the_document_write() {
    let (_db, service, blob) = setup().await;

    let mut product = sample_product("rice");
    product.image = inline_png();
    product.sub_products[0].image = inline_png();
    service.add_product(product).await.unwrap();

    let stored = service
        .products_repo()
        .find_by_id("rice")
        .await
        .unwrap()
        .unwrap();
    // The persisted document holds the uploaded URLs, never the payloads
    assert!(
        stored.image.starts_with("https://cdn.example.com/images/products/rice-main-"),
        "got: {}",
        stored.image
    );
    assert!(
        stored.sub_products[0]
            .image
            .starts_with("https://cdn.example.com/images/products/rice-sub-0-"),
        "got: {}",
        stored.sub_products[0].image
    );
    // The untouched URL sub-product passes through as-is
    assert_eq!(stored.sub_products[1].image, "https://example.com/s1.jpg");
    assert_eq!(blob.puts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn update_materializes_newly_added_inline_images() {
    let (_db, service, blob) = setup().await;
    let original = sample_product("rice");
    service.add_product(original.clone()).await.unwrap();
    assert_eq!(blob.puts.load(Ordering::SeqCst), 0);

    let mut updated = original;
    updated
        .sub_products
        .push(sub_product("Chef's Secret", "シェフズシークレット", &inline_png()));
    service.update_product(updated).await.unwrap();

    let stored = service
        .products_repo()
        .find_by_id("rice")
        .await
        .unwrap()
        .unwrap();
    assert!(
        stored.sub_products[2]
            .image
            .starts_with("https://cdn.example.com/images/products/rice-sub-2-"),
        "got: {}",
        stored.sub_products[2].image
    );
    assert_eq!(blob.puts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn duplicate_id_is_rejected() {
    let (_db, service, _blob) = setup().await;

    service.add_product(sample_product("rice")).await.unwrap();
    let err = service.add_product(sample_product("rice")).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)), "got: {err:?}");
}

#[tokio::test]
async fn incomplete_bilingual_fields_are_rejected_before_any_write() {
    let (_db, service, _blob) = setup().await;

    let mut product = sample_product("rice");
    product.name.jp.clear();
    let err = service.add_product(product).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(service.products_repo().find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (_db, service, _blob) = setup().await;
    service.add_product(sample_product("rice")).await.unwrap();

    service.delete_product("no-such-product").await.unwrap();
    assert_eq!(service.products_repo().find_all().await.unwrap().len(), 1);

    service.delete_product("rice").await.unwrap();
    service.delete_product("rice").await.unwrap();
    assert!(service.products_repo().find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_is_a_full_replace_preserving_existing_sub_products() {
    let (_db, service, _blob) = setup().await;
    let original = sample_product("rice");
    service.add_product(original.clone()).await.unwrap();

    // Full desired state: the existing list plus one appended entry
    let mut updated = original.clone();
    updated
        .sub_products
        .push(sub_product("Chef's Secret", "シェフズシークレット", "https://example.com/s2.jpg"));
    service.update_product(updated.clone()).await.unwrap();

    let stored = service
        .products_repo()
        .find_by_id("rice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.sub_products.len(), 3);
    assert_eq!(&stored.sub_products[..2], &original.sub_products[..]);
    assert_eq!(stored.sub_products[2].name.en, "Chef's Secret");
}

#[tokio::test]
async fn blank_optional_fields_are_stripped_before_persisting() {
    let (_db, service, _blob) = setup().await;

    let mut product = sample_product("rice");
    product.specs.grade = Some("   ".into());
    // A row the admin cleared but left in the list
    product.sub_products.push(SubProduct {
        name: Bilingual::default(),
        description: None,
        image: String::new(),
    });
    service.add_product(product).await.unwrap();

    let stored = service
        .products_repo()
        .find_by_id("rice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.specs.grade, None);
    assert_eq!(stored.sub_products.len(), 2);
}

#[tokio::test]
async fn settings_merge_writes_leave_the_other_field_untouched() {
    let (_db, service, _blob) = setup().await;

    service
        .update_catalog_url("https://example.com/cat.pdf")
        .await
        .unwrap();
    let settings = service
        .update_logo_url("https://example.com/logo.png")
        .await
        .unwrap();

    assert_eq!(settings.catalog_url.as_deref(), Some("https://example.com/cat.pdf"));
    assert_eq!(settings.logo_url.as_deref(), Some("https://example.com/logo.png"));

    // And the other direction
    let settings = service
        .update_catalog_url("https://example.com/cat-v2.pdf")
        .await
        .unwrap();
    assert_eq!(settings.logo_url.as_deref(), Some("https://example.com/logo.png"));
}

#[tokio::test]
async fn reset_restores_defaults_and_clears_settings() {
    let (_db, service, _blob) = setup().await;

    service.add_product(sample_product("tamarind")).await.unwrap();
    service
        .update_catalog_url("https://example.com/cat.pdf")
        .await
        .unwrap();

    service.reset_data().await.unwrap();

    let products = service.products_repo().find_all().await.unwrap();
    assert_eq!(products.len(), 6);
    assert!(products.iter().all(|p| p.id != "tamarind"));
    assert!(products.iter().any(|p| p.id == "rice"));

    let settings = service.settings_repo().get().await.unwrap();
    assert_eq!(settings.catalog_url, None);
    assert_eq!(settings.logo_url, None);
}
