//! Configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration for the task list core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Key under which the serialized task sequence is stored
    pub storage_key: String,

    /// Storage backend type
    pub backend: Backend,

    /// Root directory for the file backend
    pub data_dir: Option<PathBuf>,
}

/// Storage backend types supported by the task list core
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// In-memory storage (non-persistent)
    Memory,
    /// File-backed storage (one file per key under `data_dir`)
    File,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: "tasks".to_string(),
            backend: Backend::Memory,
            data_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from a config file, or fall back to defaults
    pub fn load() -> crate::Result<Self> {
        let default_paths = vec![
            "config.yaml",
            "config.toml",
            "config/config.yaml",
            "config/config.toml",
        ];

        for path in default_paths {
            if Path::new(path).exists() {
                info!("Loading config from: {}", path);
                return Self::from_file(path);
            }
        }

        warn!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .map_err(|e| {
                crate::TaskListError::Config(format!("Failed to load config file: {}", e))
            })?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| crate::TaskListError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(crate::TaskListError::Config(
                "Storage key must not be empty".to_string(),
            ));
        }

        if self.backend == Backend::File && self.data_dir.is_none() {
            return Err(crate::TaskListError::Config(
                "File backend requires data_dir".to_string(),
            ));
        }

        Ok(())
    }
}
