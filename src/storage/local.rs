//! Local filesystem storage implementation.
//!
//! ## Storage Layout
//!
//! ```text
//! {root}/
//! ├── config.toml           # Updater configuration
//! └── streams.json          # The published catalog (name configurable)
//! ```
//!
//! Writes are atomic: content goes to a `.tmp` sibling first and is renamed
//! over the destination, so a reader never observes a partially written
//! document. An empty catalog is still written as `[]`, so downstream
//! consumers never have to distinguish "file missing" from "file empty".

use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::StreamEntry;

/// Local filesystem storage backend.
#[derive(Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Full path of the catalog file for a given output file name.
    pub fn catalog_path(&self, key: &str) -> PathBuf {
        self.path(key)
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        self.ensure_dir(&path).await?;

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Write JSON data.
    async fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(key, &bytes).await
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Read JSON data.
    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_bytes(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Write the catalog, fully replacing any previous file.
    ///
    /// Returns the number of entries written. An empty slice is written
    /// as a valid empty JSON array.
    pub async fn write_catalog(&self, key: &str, entries: &[StreamEntry]) -> Result<usize> {
        self.write_json(key, entries).await?;
        log::debug!("Catalog written to {}", self.path(key).display());
        Ok(entries.len())
    }

    /// Load the current catalog, or None if it has never been written.
    pub async fn read_catalog(&self, key: &str) -> Result<Option<Vec<StreamEntry>>> {
        self.read_json(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CaptureStamp;
    use tempfile::TempDir;

    fn entries_for(urls: &[&str]) -> Vec<StreamEntry> {
        let stamp = CaptureStamp::now();
        urls.iter()
            .map(|url| StreamEntry::from_url(url, &stamp))
            .collect()
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.write_bytes("test.txt", b"hello").await.unwrap();
        let data = storage.read_bytes("test.txt").await.unwrap();
        assert_eq!(data, Some(b"hello".to_vec()));
    }

    #[tokio::test]
    async fn test_read_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let data = storage.read_bytes("nope.txt").await.unwrap();
        assert!(data.is_none());
    }

    #[tokio::test]
    async fn test_empty_catalog_is_written_as_valid_json() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let count = storage.write_catalog("streams.json", &[]).await.unwrap();
        assert_eq!(count, 0);

        let raw = tokio::fs::read_to_string(tmp.path().join("streams.json"))
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_missing_parent_directories_are_created() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path().join("data").join("nested"));

        let entries = entries_for(&["http://a.com/x.m3u8"]);
        let count = storage.write_catalog("streams.json", &entries).await.unwrap();
        assert_eq!(count, 1);
        assert!(
            tmp.path()
                .join("data")
                .join("nested")
                .join("streams.json")
                .exists()
        );
    }

    #[tokio::test]
    async fn test_rewrite_fully_replaces_previous_content() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let first = entries_for(&["http://a.com/x.m3u8", "http://b.com/y.m3u8"]);
        storage.write_catalog("streams.json", &first).await.unwrap();

        let second = entries_for(&["http://c.com/z.m3u8"]);
        storage.write_catalog("streams.json", &second).await.unwrap();

        let loaded = storage
            .read_catalog("streams.json")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].url, "http://c.com/z.m3u8");
    }

    #[tokio::test]
    async fn test_catalog_round_trips_through_disk() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let entries = entries_for(&["https://cdn.example.com/live/news.m3u8?token=abc"]);
        storage.write_catalog("streams.json", &entries).await.unwrap();

        let loaded = storage
            .read_catalog("streams.json")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded, entries);
    }

    #[tokio::test]
    async fn test_no_tmp_file_left_behind() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.write_catalog("streams.json", &[]).await.unwrap();
        assert!(!tmp.path().join("streams.tmp").exists());
    }
}
