use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

use crate::services::network_manager::NetworkError;

/// Error types for the netdialogs crate.
///
/// Covers settings decoding, dialog construction from loaded settings,
/// and configuration loading.
#[derive(Error, Debug)]
pub enum NetDialogsError {
    /// A section the dialog variant depends on is absent from the settings
    #[error("settings are missing the '{section}' section")]
    MissingSection {
        /// Name of the missing section
        section: String,
    },

    /// A section exists but its fields cannot be read as the expected shape
    #[error("settings section '{section}' is malformed: {details}")]
    InvalidSection {
        /// Name of the malformed section
        section: String,
        /// Decoder error details
        details: String,
    },

    /// Settings could not be serialized or deserialized as JSON
    #[error("failed to (de)serialize settings: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The network service rejected or failed a request
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// I/O operation error with path context
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for netdialogs operations.
pub type Result<T> = result::Result<T, NetDialogsError>;

impl NetDialogsError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        NetDialogsError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    pub(crate) fn invalid_section(section: &str, error: impl fmt::Display) -> Self {
        NetDialogsError::InvalidSection {
            section: section.to_string(),
            details: error.to_string(),
        }
    }
}
