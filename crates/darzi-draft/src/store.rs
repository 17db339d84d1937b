//! Flat key-value persistence for drafts and settings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::{DraftRecord, DRAFT_KEY_PREFIX};

/// Errors from the draft store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying filesystem failure.
    #[error("store I/O error: {0}")]
    Io(#[from] io::Error),

    /// A stored record could not be parsed.
    #[error("corrupt record {key}: {source}")]
    Corrupt {
        /// Key of the unreadable record.
        key: String,
        /// Parse failure.
        source: serde_json::Error,
    },

    /// Record serialization failed.
    #[error("serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Flat namespaced key-value store for drafts and settings.
///
/// Draft keys carry the [`DRAFT_KEY_PREFIX`]; settings live in the
/// same namespace under their own names.
pub trait DraftStore {
    /// Save a record under its key, replacing any previous value.
    fn put(&self, record: &DraftRecord) -> Result<()>;

    /// All saved drafts (keys with the draft prefix), any order.
    fn list(&self) -> Result<Vec<DraftRecord>>;

    /// Fetch one draft by key.
    fn get(&self, key: &str) -> Result<Option<DraftRecord>>;

    /// Delete a draft by key. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;

    /// Read a setting (e.g. the units setting, "in" or "cm").
    fn get_setting(&self, name: &str) -> Result<Option<String>>;

    /// Write a setting.
    fn set_setting(&self, name: &str, value: &str) -> Result<()>;
}

/// A [`DraftStore`] keeping one JSON file per key in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn setting_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("setting_{name}.txt"))
    }
}

impl DraftStore for JsonFileStore {
    fn put(&self, record: &DraftRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.record_path(&record.key), json)?;
        debug!("saved draft {}", record.key);
        Ok(())
    }

    fn list(&self) -> Result<Vec<DraftRecord>> {
        let mut drafts = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !stem.starts_with(DRAFT_KEY_PREFIX)
                || path.extension().and_then(|e| e.to_str()) != Some("json")
            {
                continue;
            }
            let data = fs::read_to_string(&path)?;
            match serde_json::from_str(&data) {
                Ok(record) => drafts.push(record),
                Err(err) => {
                    // One unreadable file should not hide the rest.
                    warn!("skipping corrupt draft {stem}: {err}");
                }
            }
        }
        Ok(drafts)
    }

    fn get(&self, key: &str) -> Result<Option<DraftRecord>> {
        let path = self.record_path(key);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let record = serde_json::from_str(&data).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(record))
    }

    fn delete(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.record_path(key)) {
            Ok(()) => {
                debug!("deleted draft {key}");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn get_setting(&self, name: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.setting_path(name)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_setting(&self, name: &str, value: &str) -> Result<()> {
        fs::write(self.setting_path(name), value)?;
        Ok(())
    }
}
