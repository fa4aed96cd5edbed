use std::path::PathBuf;

use thiserror::Error;

pub use crate::core::domain::InvalidMarketError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors reading or interpreting a market description.
#[derive(Error, Debug)]
pub enum MarketFileError {
    #[error("failed to read market file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse market file as TOML: {0}")]
    ParseToml(#[source] toml::de::Error),

    #[error("failed to parse market file as JSON: {0}")]
    ParseJson(#[source] serde_json::Error),

    #[error("unsupported market file extension: {extension} (expected .toml or .json)")]
    UnknownFormat { extension: String },

    #[error("market defines both match_type and outcomes")]
    ConflictingOutcomes,

    #[error("market has no quotes: provide a market file or --bookmaker arguments")]
    MissingQuotes,

    #[error("invalid argument {argument}: {reason}")]
    BadArgument { argument: String, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Market(#[from] InvalidMarketError),

    #[error(transparent)]
    MarketFile(#[from] MarketFileError),

    /// An `init` command refused to replace an existing file.
    #[error("{} already exists (use --force to overwrite)", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
