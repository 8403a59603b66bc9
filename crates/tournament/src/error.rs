use std::path::PathBuf;

use bracket_core::BracketError;
use thiserror::Error;

/// Errors from loading tournament data or running its stages
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Region {0} has no champion")]
    MissingRegion(String),

    #[error(transparent)]
    Bracket(#[from] BracketError),
}

pub type Result<T> = std::result::Result<T, TournamentError>;
