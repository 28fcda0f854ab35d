use thiserror::Error;

use crate::domain::FieldKind;

/// Error raised when a version or one of its fields fails validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid {field} version: '{value}'")]
    InvalidField { field: FieldKind, value: String },

    #[error("Invalid pre-release: '{0}'")]
    InvalidPreRelease(String),

    #[error("Invalid build metadata: '{0}'")]
    InvalidBuildMetadata(String),

    #[error("Invalid version: '{0}'")]
    InvalidVersion(String),
}

/// Convenience type alias for Results carrying a [`VersionError`]
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Create a numeric field error for the given field
    pub fn invalid_field(field: FieldKind, value: impl Into<String>) -> Self {
        VersionError::InvalidField {
            field,
            value: value.into(),
        }
    }

    /// Create a pre-release error with the rejected input
    pub fn invalid_pre_release(value: impl Into<String>) -> Self {
        VersionError::InvalidPreRelease(value.into())
    }

    /// Create a build metadata error with the rejected input
    pub fn invalid_build_metadata(value: impl Into<String>) -> Self {
        VersionError::InvalidBuildMetadata(value.into())
    }

    /// Create a version error with the rejected input
    pub fn invalid_version(value: impl Into<String>) -> Self {
        VersionError::InvalidVersion(value.into())
    }
}

/// Error raised while loading the CLI configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Parse(#[from] toml::de::Error),
}
