//! Build metadata (`+build.1`)
//!
//! Build metadata is informational only and never takes part in precedence,
//! so this type has no ordering.

use crate::domain::prerelease::is_identifier;
use crate::error::{Result, VersionError};
use std::fmt;
use std::str::FromStr;

/// Build metadata part of a version, possibly empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BuildMetadata {
    value: String,
}

impl BuildMetadata {
    pub fn empty() -> Self {
        BuildMetadata::default()
    }

    /// Parse build metadata
    ///
    /// Same identifier rules as a pre-release, except that numeric
    /// identifiers may have leading zeros (`build.007` is fine).
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.value.split('.').filter(|s| !s.is_empty())
    }
}

impl FromStr for BuildMetadata {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(BuildMetadata::empty());
        }

        if !s.split('.').all(is_identifier) {
            tracing::debug!(value = s, "rejected build metadata");
            return Err(VersionError::invalid_build_metadata(s));
        }

        Ok(BuildMetadata {
            value: s.to_string(),
        })
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
