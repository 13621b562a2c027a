//! Image Materialization Service
//!
//! Ensures no inline-encoded image payload is ever persisted inside a
//! product document: every `data:image/...` value is decoded, re-encoded
//! as JPEG and uploaded to blob storage before the write path runs. Images
//! that are already URLs pass through untouched. An upload failure degrades
//! to keeping the original inline payload rather than losing the image.

use std::io::Cursor;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use shared::Product;
use shared::util::now_millis;

use super::blob_store::BlobStore;

/// Recognizable prefix of an inline-encoded image payload
const INLINE_PREFIX: &str = "data:image/";

/// JPEG quality for stored images (keeps photos appealing at catalog sizes)
const JPEG_QUALITY: u8 = 85;

/// Which image field a payload came from; storage keys embed this so paths
/// never collide across fields and a stray file is traceable to its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot<'a> {
    Main { product_id: &'a str },
    Sub { product_id: &'a str, index: usize },
}

impl ImageSlot<'_> {
    /// Deterministic storage key: semantic prefix plus write timestamp
    pub fn storage_key(&self, ts: i64) -> String {
        match self {
            ImageSlot::Main { product_id } => format!("products/{product_id}-main-{ts}.jpg"),
            ImageSlot::Sub { product_id, index } => {
                format!("products/{product_id}-sub-{index}-{ts}.jpg")
            }
        }
    }
}

/// Resolves inline image payloads into durable URLs
#[derive(Clone)]
pub struct ImageMaterializer {
    store: Arc<dyn BlobStore>,
}

impl ImageMaterializer {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// True if the value is an inline payload rather than a URL
    pub fn is_inline(value: &str) -> bool {
        value.starts_with(INLINE_PREFIX)
    }

    /// Resolve one image field. URLs pass through without touching storage;
    /// inline payloads are uploaded and replaced by the returned URL. Any
    /// decode or upload failure returns the original value unchanged — the
    /// save proceeds and the write layer surfaces oversize documents.
    pub async fn resolve(&self, value: &str, slot: ImageSlot<'_>) -> String {
        if !Self::is_inline(value) {
            return value.to_string();
        }

        let bytes = match decode_data_url(value) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(?slot, error = %e, "inline image payload not decodable; keeping as-is");
                return value.to_string();
            }
        };

        let jpeg = match reencode_jpeg(&bytes) {
            Ok(jpeg) => jpeg,
            Err(e) => {
                tracing::warn!(?slot, error = %e, "inline image not a valid image; keeping as-is");
                return value.to_string();
            }
        };

        let key = slot.storage_key(now_millis());
        match self.store.put(&key, jpeg, "image/jpeg").await {
            Ok(url) => {
                tracing::info!(?slot, %key, "materialized inline image");
                url
            }
            Err(e) => {
                tracing::warn!(?slot, error = %e, "image upload failed; keeping inline payload");
                value.to_string()
            }
        }
    }

    /// Resolve the main image and every sub-product image, independently
    /// and concurrently. Completes before the caller may persist.
    pub async fn materialize_product(&self, mut product: Product) -> Product {
        let id = product.id.clone();

        let main = self.resolve(&product.image, ImageSlot::Main { product_id: &id });
        let subs = futures::future::join_all(product.sub_products.iter().enumerate().map(
            |(index, sp)| {
                self.resolve(
                    &sp.image,
                    ImageSlot::Sub {
                        product_id: &id,
                        index,
                    },
                )
            },
        ));
        let (main, subs) = futures::join!(main, subs);

        product.image = main;
        for (sp, url) in product.sub_products.iter_mut().zip(subs) {
            sp.image = url;
        }
        product
    }
}

/// Extract the raw bytes from a `data:image/...;base64,` URL
fn decode_data_url(value: &str) -> anyhow::Result<Vec<u8>> {
    let payload = value
        .split_once(";base64,")
        .map(|(_, payload)| payload)
        .ok_or_else(|| anyhow::anyhow!("missing base64 marker"))?;
    Ok(BASE64.decode(payload.trim())?)
}

/// Decode whatever format came in and re-encode as quality-controlled JPEG
fn reencode_jpeg(bytes: &[u8]) -> anyhow::Result<Vec<u8>> {
    let img = image::load_from_memory(bytes)?;
    let rgb = img.to_rgb8();

    let mut buffer = Vec::new();
    let encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(Cursor::new(&mut buffer), JPEG_QUALITY);
    rgb.write_with_encoder(encoder)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    /// Records every upload; returns a predictable URL
    struct RecordingStore {
        puts: AtomicUsize,
        keys: parking_lot::Mutex<Vec<String>>,
    }

    impl RecordingStore {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                puts: AtomicUsize::new(0),
                keys: parking_lot::Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl BlobStore for RecordingStore {
        async fn put(
            &self,
            key: &str,
            _bytes: Vec<u8>,
            _content_type: &str,
        ) -> anyhow::Result<String> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            self.keys.lock().push(key.to_string());
            Ok(format!("https://cdn.example.com/images/{key}"))
        }
    }

    struct FailingStore;

    #[async_trait]
    impl BlobStore for FailingStore {
        async fn put(&self, _: &str, _: Vec<u8>, _: &str) -> anyhow::Result<String> {
            anyhow::bail!("upload rejected")
        }
    }

    fn inline_png() -> String {
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([10, 120, 40]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        format!("data:image/png;base64,{}", BASE64.encode(bytes))
    }

    #[tokio::test]
    async fn url_values_pass_through_without_upload() {
        let store = RecordingStore::new();
        let m = ImageMaterializer::new(store.clone());

        let url = "https://example.com/rice.jpg";
        let out = m.resolve(url, ImageSlot::Main { product_id: "rice" }).await;

        assert_eq!(out, url);
        assert_eq!(store.puts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn inline_payload_is_uploaded_and_replaced() {
        let store = RecordingStore::new();
        let m = ImageMaterializer::new(store.clone());

        let out = m
            .resolve(&inline_png(), ImageSlot::Main { product_id: "rice" })
            .await;

        assert!(out.starts_with("https://cdn.example.com/images/products/rice-main-"));
        assert_eq!(store.puts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn slot_keys_encode_product_and_position() {
        let main = ImageSlot::Main { product_id: "rice" }.storage_key(42);
        let sub = ImageSlot::Sub {
            product_id: "rice",
            index: 2,
        }
        .storage_key(42);

        assert_eq!(main, "products/rice-main-42.jpg");
        assert_eq!(sub, "products/rice-sub-2-42.jpg");
        assert_ne!(main, sub);
    }

    #[tokio::test]
    async fn upload_failure_keeps_the_inline_payload() {
        let m = ImageMaterializer::new(Arc::new(FailingStore));
        let inline = inline_png();

        let out = m
            .resolve(&inline, ImageSlot::Sub { product_id: "rice", index: 0 })
            .await;

        assert_eq!(out, inline);
    }

    #[tokio::test]
    async fn garbage_payload_is_kept_as_is() {
        let store = RecordingStore::new();
        let m = ImageMaterializer::new(store.clone());

        let bogus = "data:image/png;base64,not-base64!!";
        let out = m.resolve(bogus, ImageSlot::Main { product_id: "x" }).await;

        assert_eq!(out, bogus);
        assert_eq!(store.puts.load(Ordering::SeqCst), 0);
    }
}
