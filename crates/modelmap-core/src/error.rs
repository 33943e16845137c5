//! Error types for Modelmap Core.
//!
//! The core transforms themselves are total: normalization substitutes
//! defaults for anything malformed, and graph building and layout cannot
//! fail on a canonical config. Errors only arise at the boundary where raw
//! bytes become a JSON value.

use thiserror::Error;

/// Result type alias for Modelmap operations.
pub type Result<T> = std::result::Result<T, ModelmapError>;

/// Errors that can occur at the Modelmap boundary.
#[derive(Error, Debug)]
pub enum ModelmapError {
    /// Config text was not valid JSON.
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading a config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
