pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{BuildMetadata, FieldKind, Major, Minor, Patch, PreRelease, Version, VersionBump};
pub use error::{ConfigError, Result, VersionError};
