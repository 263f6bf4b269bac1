//! Token source adapters
//!
//! The gate only depends on the [`TokenSource`] capability; these adapters
//! cover the common backends: an in-process store and TOML file
//! persistence under the platform config directory.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

use crate::tokens::{TokenRecord, TokenSource};

/// Errors from the file-backed token store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("token file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse token file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize token file: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// In-process token store, usable as a test double and for embedding.
#[derive(Debug, Default)]
pub struct MemoryTokenSource {
    record: Mutex<Option<TokenRecord>>,
}

impl MemoryTokenSource {
    pub fn new(record: Option<TokenRecord>) -> Self {
        Self {
            record: Mutex::new(record),
        }
    }

    /// Replace the stored record.
    pub fn set(&self, record: TokenRecord) {
        *self.record.lock().unwrap_or_else(|e| e.into_inner()) = Some(record);
    }

    /// Drop the stored record.
    pub fn clear(&self) {
        *self.record.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

impl TokenSource for MemoryTokenSource {
    fn get(&self) -> Option<TokenRecord> {
        self.record.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// TOML-backed token persistence under the platform config directory.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TokenFile {
    record: Option<TokenRecord>,
}

impl TokenFile {
    /// Config directory path for the default location.
    fn config_dir() -> Result<PathBuf, StoreError> {
        let proj_dirs =
            ProjectDirs::from("com", "route-gate", "route-gate").ok_or(StoreError::NoConfigDir)?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }

    /// Default token file path.
    fn default_path() -> Result<PathBuf, StoreError> {
        Ok(Self::config_dir()?.join("token.toml"))
    }

    /// Load from the default location. A missing file is an empty store.
    pub fn load() -> Result<Self, StoreError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from an explicit path. A missing file is an empty store.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save to the default location, creating the config directory.
    pub fn save(&self) -> Result<(), StoreError> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)?;
        self.save_to(&dir.join("token.toml"))
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        // Restrictive permissions: the file contains a credential
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    pub fn record(&self) -> Option<&TokenRecord> {
        self.record.as_ref()
    }

    pub fn set(&mut self, record: TokenRecord) {
        self.record = Some(record);
    }

    pub fn clear(&mut self) {
        self.record = None;
    }
}

impl TokenSource for TokenFile {
    fn get(&self) -> Option<TokenRecord> {
        self.record.clone()
    }
}
