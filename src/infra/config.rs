// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::infra::errors::{IndexerError, Result};
use crate::infra::paths;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexerConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub mining: MiningConfig,

    #[serde(default)]
    pub index: IndexConfig,
}

/// Where daily logs are read from and where the index is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub root: PathBuf,
    /// Daily logs directory, relative to `root`
    pub events_dir: PathBuf,
    /// Index file, relative to `root`
    pub index_file: PathBuf,
    /// Extension of daily log files, without the dot
    pub event_extension: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(paths::DEFAULT_ROOT),
            events_dir: PathBuf::from("events"),
            index_file: PathBuf::from("pattern-index.json"),
            event_extension: "jsonl".into(),
        }
    }
}

impl StorageConfig {
    pub fn events_path(&self) -> PathBuf {
        self.root.join(&self.events_dir)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index_file)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Lookback window in calendar days, today included
    pub days_back: u32,
    /// n-gram length
    pub window_size: usize,
    pub min_occurrences: u32,
    /// Record field holding the action name
    pub action_field: String,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            days_back: 30,
            window_size: 3,
            min_occurrences: 3,
            action_field: "tool_name".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub max_patterns: usize,
    pub max_recommendations: usize,
    /// Patterns must score strictly above this to be recommended
    pub recommendation_threshold: f64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_patterns: 20,
            max_recommendations: 3,
            recommendation_threshold: 0.5,
        }
    }
}

impl IndexerConfig {
    /// Load `indexer.toml` from the storage root, falling back to defaults.
    /// The returned config always points at `root`.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_file_path(root);
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.storage.root = root.to_path_buf();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IndexerError::io(path, e))?;
        let config: IndexerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.mining.window_size == 0 {
            return Err(IndexerError::Config(
                "mining.window_size must be at least 1".into(),
            ));
        }
        if self.storage.event_extension.is_empty() {
            return Err(IndexerError::Config(
                "storage.event_extension must not be empty".into(),
            ));
        }
        Ok(())
    }
}
