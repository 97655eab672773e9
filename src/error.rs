//! Error types for option-tree
//!
//! The tree operations themselves are total and never fail. Errors only come
//! from the edges that parse external input: JSON option data, textual option
//! paths and configuration files. TOML problems in a config file surface as
//! [`OptionTreeError::InvalidConfig`] naming the file.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fallible option-tree operations
pub type OptionTreeResult<T> = Result<T, OptionTreeError>;

/// Main error type for option-tree
#[derive(Error, Debug)]
pub enum OptionTreeError {
    /// A dotted option path could not be parsed
    #[error("invalid option path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// A configuration file did not match the expected shape
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
