//! Error type for the comparison drivers and the `asian` binary.

use thiserror::Error;

/// Errors surfaced by the command line layer.
#[derive(Debug, Error)]
pub enum CliError {
    /// A pricing engine rejected its inputs or failed.
    #[error(transparent)]
    Pricing(#[from] asian_core::Error),

    /// A command line value is unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration file could not be read.
    #[error("cannot read config file {path}: {source}")]
    ConfigRead {
        /// Path as given on the command line.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for a sweep.
    #[error("invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// JSON serialisation failed.
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialisation failed.
    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the rendered output failed.
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for the command line layer.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
