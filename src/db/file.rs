//! File-backed storage, one file per key

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::KeyValueStorage;
use crate::error::{StorageReadError, StorageWriteError};

/// Stores each key as `<root>/<key>.json`
///
/// Writes land in a sibling temp file that is synced and then renamed over
/// the target, so readers only ever see the old or the new value.
pub struct FileStorage {
    root: PathBuf,
    quota_bytes: Option<u64>,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            quota_bytes: None,
        }
    }

    /// Caps the size of any single stored value
    pub fn with_quota(mut self, quota_bytes: Option<u64>) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path for a key
    ///
    /// Bytes outside `[A-Za-z0-9@._-]` are written as `%XX`, so distinct
    /// keys never share a file and no key can leave `root`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut file_name = String::with_capacity(key.len());
        for byte in key.bytes() {
            match byte {
                b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'@' | b'-' | b'_' | b'.' => {
                    file_name.push(byte as char)
                }
                _ => file_name.push_str(&format!("%{:02X}", byte)),
            }
        }
        self.root.join(format!("{}.json", file_name))
    }

    async fn write_atomically(&self, path: &Path, value: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.root).await?;

        let tmp_path = path.with_extension("json.tmp");
        let result = Self::write_and_replace(&tmp_path, path, value).await;
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path).await;
        }
        result
    }

    async fn write_and_replace(tmp_path: &Path, path: &Path, value: &str) -> std::io::Result<()> {
        let mut file = fs::File::create(tmp_path).await?;
        file.write_all(value.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(tmp_path, path).await
    }
}

#[async_trait::async_trait]
impl KeyValueStorage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageReadError> {
        let path = self.path_for(key);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageReadError::Unavailable(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        };

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| StorageReadError::Corrupted {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageWriteError> {
        if let Some(limit) = self.quota_bytes {
            let needed = value.len() as u64;
            if needed > limit {
                return Err(StorageWriteError::QuotaExceeded { needed, limit });
            }
        }

        let path = self.path_for(key);
        self.write_atomically(&path, value).await.map_err(|e| {
            tracing::error!(error = %e, path = %path.display(), "Failed to write storage file");
            StorageWriteError::Unavailable(format!("{}: {}", path.display(), e))
        })
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
