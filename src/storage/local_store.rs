use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};

const STORE_DIR: &str = ".archstudio";

/// Key-value storage backing the content store: one file per key inside the
/// `.archstudio/` workspace directory, value = file contents. Mirrors the
/// behavior of browser-local storage: reads never fail, writes can.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Initialize a new workspace.
    pub fn init(root: &Path) -> Result<Self> {
        let dir = root.join(STORE_DIR);

        if dir.exists() {
            return Err(StoreError::AlreadyInitialized);
        }

        fs::create_dir_all(&dir)?;

        Ok(Self { dir })
    }

    /// Open an existing workspace.
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join(STORE_DIR);

        if !dir.is_dir() {
            return Err(StoreError::NotInitialized);
        }

        Ok(Self { dir })
    }

    /// Get the workspace storage directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read the stored value for a key. Absent keys are None; unreadable
    /// values are logged and treated as absent, so a broken file never stops
    /// a read path.
    pub fn read(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.dir.join(key)) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read stored value, treating as absent");
                None
            }
        }
    }

    /// Write a value under a key, replacing any previous value.
    pub fn write(&self, key: &str, value: &str) -> Result<()> {
        tracing::debug!(key, bytes = value.len(), "writing stored value");
        fs::write(self.dir.join(key), value).map_err(|source| StoreError::StorageWrite {
            key: key.to_string(),
            source,
        })
    }

    /// Remove a key. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.dir.join(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::StorageWrite {
                key: key.to_string(),
                source,
            }),
        }
    }
}
