//! Error types for guess-core.
//!
//! Normalization, distance and tolerance are total; only loading settings can fail.

use thiserror::Error;

/// Result type alias using SettingsError.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors that can occur while loading matching settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}
