use log::{debug, error};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use termfolio_core::errors::{DecodeError, Result};
use termfolio_core::snapshot::{AccountSnapshot, SnapshotRepositoryTrait};

use crate::config::StoreConfig;
use crate::errors::{IntoCore, StorageError};

/// Repository keeping one account snapshot in a JSON file.
pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn read_contents(&self) -> std::result::Result<String, StorageError> {
        fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(self.display_path()),
            _ => StorageError::ReadFailed {
                path: self.display_path(),
                source: e,
            },
        })
    }

    /// Writes to a sibling temp file, then renames it over the target so a
    /// reader never sees a half-written snapshot.
    fn write_atomically(&self, contents: &str) -> std::result::Result<(), StorageError> {
        let write_failed = |source: io::Error| StorageError::WriteFailed {
            path: self.display_path(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(write_failed)?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, contents).map_err(write_failed)?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(write_failed(e));
        }
        Ok(())
    }
}

impl SnapshotRepositoryTrait for JsonSnapshotRepository {
    fn load(&self) -> Result<AccountSnapshot> {
        let contents = self.read_contents().into_core()?;
        let snapshot: AccountSnapshot =
            serde_json::from_str(&contents).map_err(DecodeError::from)?;
        debug!("Loaded snapshot from {}", self.display_path());
        Ok(snapshot)
    }

    fn save(&self, snapshot: &AccountSnapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StorageError::SerializationError(e.to_string()))
            .into_core()?;

        self.write_atomically(&json)
            .map_err(|e| {
                error!("Failed to save snapshot: {}", e);
                e
            })
            .into_core()?;
        debug!("Saved snapshot to {}", self.display_path());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }
}
