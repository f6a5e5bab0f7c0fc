// src/infra/errors.rs — Error types for the indexer

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IndexerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexerError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for IndexerError {
    fn from(e: toml::de::Error) -> Self {
        IndexerError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IndexerError>;
