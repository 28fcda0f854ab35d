//! Domain logic - SemVer value types and precedence rules

pub mod build;
pub mod numeric;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use build::BuildMetadata;
pub use numeric::{FieldKind, Major, Minor, Patch};
pub use prerelease::PreRelease;
pub use tag::Tag;
pub use version::{Version, VersionBump};
