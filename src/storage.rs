//! Photo blob storage.
//!
//! Uploaded chick photos are written outside the database; only their URLs
//! are stored. [`LocalBlobStore`] keeps blobs on the local filesystem and
//! serves them back under `/media`. The trait seam exists so an object
//! store can slot in without touching the handlers.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("unsupported image type {0:?}")]
    InvalidType(String),

    #[error("image exceeds {} bytes", MAX_PHOTO_BYTES)]
    TooLarge,

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// URLs of a stored photo, as persisted on the `chick_photos` row.
#[derive(Debug, Clone)]
pub struct StoredPhoto {
    pub image_url: String,
    pub thumbnail_url: String,
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Persist an uploaded photo and its thumbnail, returning their URLs.
    async fn store_photo(
        &self,
        chick_id: Uuid,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<StoredPhoto, StorageError>;

    /// Best-effort removal of previously stored blobs. Failures are
    /// logged, never surfaced; the database rows are already gone.
    async fn delete_blobs(&self, urls: &[String]);
}

/// Filesystem-backed store. Blobs live at
/// `<root>/chicks/<chick_id>/<timestamp>.<ext>` and are served under
/// `/media`.
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn extension_for(content_type: &str) -> Option<&'static str> {
        match content_type {
            "image/jpeg" => Some("jpg"),
            "image/png" => Some("png"),
            "image/webp" => Some("webp"),
            _ => None,
        }
    }

    /// Map a `/media/...` URL back to the path it was stored at. Rejects
    /// anything that does not look like one of our own URLs.
    fn path_for_url(&self, url: &str) -> Option<PathBuf> {
        let rel = url.strip_prefix("/media/")?;
        if rel.split('/').any(|seg| seg == ".." || seg.is_empty()) {
            return None;
        }
        Some(self.root.join(rel))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn store_photo(
        &self,
        chick_id: Uuid,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<StoredPhoto, StorageError> {
        let ext = Self::extension_for(content_type)
            .ok_or_else(|| StorageError::InvalidType(content_type.to_string()))?;
        if bytes.len() > MAX_PHOTO_BYTES {
            return Err(StorageError::TooLarge);
        }

        let dir = self.root.join("chicks").join(chick_id.to_string());
        tokio::fs::create_dir_all(&dir).await?;

        let stem = format!("{}", Utc::now().timestamp_millis());
        let image_name = format!("{stem}.{ext}");
        let thumb_name = format!("{stem}-thumb.{ext}");

        tokio::fs::write(dir.join(&image_name), bytes).await?;
        // The thumbnail is the original for now; clients size it with CSS.
        tokio::fs::write(dir.join(&thumb_name), bytes).await?;

        let prefix = format!("/media/chicks/{chick_id}");
        Ok(StoredPhoto {
            image_url: format!("{prefix}/{image_name}"),
            thumbnail_url: format!("{prefix}/{thumb_name}"),
        })
    }

    async fn delete_blobs(&self, urls: &[String]) {
        for url in urls {
            let Some(path) = self.path_for_url(url) else {
                tracing::warn!("skipping unrecognized blob url {}", url);
                continue;
            };
            if let Err(e) = tokio::fs::remove_file(&path).await {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("failed to delete blob {}: {}", path.display(), e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_and_deletes_a_photo() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path());
        let chick_id = Uuid::new_v4();

        let stored = store
            .store_photo(chick_id, b"not really a jpeg", "image/jpeg")
            .await
            .unwrap();
        assert!(stored.image_url.starts_with("/media/chicks/"));
        assert!(stored.thumbnail_url.contains("-thumb"));

        let image_path = store.path_for_url(&stored.image_url).unwrap();
        assert!(image_path.exists());

        store
            .delete_blobs(&[stored.image_url.clone(), stored.thumbnail_url.clone()])
            .await;
        assert!(!image_path.exists());
    }

    #[tokio::test]
    async fn rejects_unsupported_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path());

        let err = store
            .store_photo(Uuid::new_v4(), b"GIF89a", "image/gif")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidType(_)));
    }

    #[tokio::test]
    async fn rejects_oversized_upload() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path());

        let big = vec![0u8; MAX_PHOTO_BYTES + 1];
        let err = store
            .store_photo(Uuid::new_v4(), &big, "image/png")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::TooLarge));
    }

    #[test]
    fn refuses_traversal_urls() {
        let store = LocalBlobStore::new("/tmp/brooder-test");
        assert!(store.path_for_url("/media/../etc/passwd").is_none());
        assert!(store.path_for_url("/elsewhere/x.jpg").is_none());
    }
}
