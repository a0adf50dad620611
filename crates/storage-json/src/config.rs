//! Location of the snapshot file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use termfolio_core::errors::{Error, Result};

/// Environment variable overriding [`StoreConfig::data_dir`].
pub const DATA_DIR_ENV: &str = "TERMFOLIO_DATA_DIR";

/// Environment variable overriding [`StoreConfig::file_name`].
pub const STORE_FILE_ENV: &str = "TERMFOLIO_STORE_FILE";

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_STORE_FILE: &str = "account.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_name: DEFAULT_STORE_FILE.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir.trim());
        }
        if let Some(file) = lookup(STORE_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.file_name = file.trim().to_string();
        }
        config.validate()?;
        Ok(config)
    }

    /// The file name must be a bare name, not a path.
    pub fn validate(&self) -> Result<()> {
        let name = Path::new(&self.file_name);
        if self.file_name.is_empty() || name.file_name() != Some(name.as_os_str()) {
            return Err(Error::invalid_input(format!(
                "Store file name must be a plain file name, got '{}'",
                self.file_name
            )));
        }
        Ok(())
    }

    /// Full path of the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}
