use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::repository::{KeyValueStore, StorageError};

type Entries = BTreeMap<String, String>;

/// Key-value store kept in one JSON object file.
///
/// Every write rewrites the whole file through a sibling temp file and a
/// rename, so readers see either the old or the new contents. A missing or
/// empty file reads as an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    quota_bytes: Option<usize>,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            quota_bytes: None,
        }
    }

    /// Reject writes that would grow the file beyond `limit` bytes.
    #[must_use]
    pub fn with_quota(mut self, limit: usize) -> Self {
        self.quota_bytes = Some(limit);
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => return Err(StorageError::Unavailable(err.to_string())),
        };
        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&raw).map_err(|err| StorageError::Serialization(err.to_string()))
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        let body = serde_json::to_string_pretty(entries)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        if let Some(limit) = self.quota_bytes {
            if body.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    needed: body.len(),
                    limit,
                });
            }
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|err| StorageError::Unavailable(err.to_string()))?;
            }
        }

        let tmp = self.temp_path();
        fs::write(&tmp, body.as_bytes()).map_err(|err| StorageError::Unavailable(err.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|err| {
            let _ = fs::remove_file(&tmp);
            StorageError::Unavailable(err.to_string())
        })?;

        debug!(path = %self.path.display(), bytes = body.len(), "wrote key-value file");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}
