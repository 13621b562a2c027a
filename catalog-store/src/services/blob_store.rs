//! Durable blob storage for materialized images
//!
//! Write path takes a generated storage key and raw bytes; read path is a
//! stable public URL. Once materialized, a URL is treated as immutable for
//! the life of the product record — there is no cache invalidation here.

use std::path::PathBuf;

use async_trait::async_trait;

/// Storage backend for image blobs
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `key` and return the durable download URL
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> anyhow::Result<String>;
}

/// Filesystem-backed blob store serving files under a public base URL.
///
/// Files land in `{root}/{key}`; the returned URL is
/// `{public_base_url}/images/{key}` and is expected to be served by the
/// site's static file host.
pub struct FsBlobStore {
    root: PathBuf,
    public_base_url: String,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, _content_type: &str) -> anyhow::Result<String> {
        // Keys are generated internally, but stay defensive about separators
        if key.is_empty() || key.contains("..") || key.starts_with('/') {
            anyhow::bail!("invalid storage key: {key:?}");
        }

        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &bytes).await?;

        let url = format!(
            "{}/images/{}",
            self.public_base_url.trim_end_matches('/'),
            key
        );
        tracing::debug!(key, size = bytes.len(), "stored image blob");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_writes_file_and_returns_public_url() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(tmp.path(), "https://cdn.example.com/");

        let url = store
            .put("products/rice-main-1.jpg", vec![1, 2, 3], "image/jpeg")
            .await
            .unwrap();

        assert_eq!(url, "https://cdn.example.com/images/products/rice-main-1.jpg");
        let written = std::fs::read(tmp.path().join("products/rice-main-1.jpg")).unwrap();
        assert_eq!(written, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn traversal_keys_are_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(tmp.path(), "https://cdn.example.com");
        assert!(store.put("../escape.jpg", vec![0], "image/jpeg").await.is_err());
    }
}
