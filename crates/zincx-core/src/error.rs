//! Error types for the core crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::enums::ErrorCode;

/// Errors that can occur while loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for [`Config`](crate::Config).
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value parsed but is out of range.
    #[error("invalid config value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    /// The framework error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { .. } => ErrorCode::ResourceNotFound,
            Self::Parse(_) | Self::Serialize(_) | Self::InvalidValue { .. } => {
                ErrorCode::InvalidArgument
            }
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
