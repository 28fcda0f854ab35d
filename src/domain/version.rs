use crate::domain::build::BuildMetadata;
use crate::domain::numeric::{Major, Minor, Patch};
use crate::domain::prerelease::PreRelease;
use crate::error::{Result, VersionError};
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// https://semver.org/#is-there-a-suggested-regular-expression-regex-to-check-a-semver-string
/// with `\d` spelled `[0-9]` so that only ASCII digits match.
const SEMVER_PATTERN: &str = concat!(
    r"^(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)",
    r"(?:-(?P<prerelease>(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
    r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
    r"(?:\+(?P<build>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
);

fn semver_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SEMVER_PATTERN).expect("semver pattern is valid"))
}

/// Semantic version representation
///
/// Immutable: every operation that "changes" a version returns a new one.
/// Equality is textual, so `1.0.0+a` and `1.0.0+b` are not equal even though
/// they have the same precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: Major,
    minor: Minor,
    patch: Patch,
    pre_release: PreRelease,
    build_metadata: BuildMetadata,
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionBump::Major => write!(f, "major"),
            VersionBump::Minor => write!(f, "minor"),
            VersionBump::Patch => write!(f, "patch"),
        }
    }
}

impl Version {
    /// Create a release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version::from_parts(
            Major::from(major),
            Minor::from(minor),
            Patch::from(patch),
            PreRelease::empty(),
            BuildMetadata::empty(),
        )
    }

    /// Assemble a version from already validated parts
    pub fn from_parts(
        major: Major,
        minor: Minor,
        patch: Patch,
        pre_release: PreRelease,
        build_metadata: BuildMetadata,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        }
    }

    /// Parse a full `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` string
    ///
    /// Any deviation from the grammar, including an invalid field, is reported
    /// as [`VersionError::InvalidVersion`] carrying the whole input.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn major(&self) -> &Major {
        &self.major
    }

    pub fn minor(&self) -> &Minor {
        &self.minor
    }

    pub fn patch(&self) -> &Patch {
        &self.patch
    }

    pub fn pre_release(&self) -> &PreRelease {
        &self.pre_release
    }

    pub fn build_metadata(&self) -> &BuildMetadata {
        &self.build_metadata
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Compare by SemVer precedence
    ///
    /// Major, minor and patch compare numerically, then pre-release. Build
    /// metadata is ignored.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.major
            .compare(&other.major)
            .then_with(|| self.minor.compare(&other.minor))
            .then_with(|| self.patch.compare(&other.patch))
            .then_with(|| self.pre_release.compare(&other.pre_release))
    }

    /// Textual equality, build metadata included
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    pub fn is_smaller_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn is_greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Bump version according to bump type
    ///
    /// The target field is incremented, lower fields reset to zero and the
    /// pre-release and build metadata are cleared:
    /// - **Major**: 1.2.3-rc.1 -> 2.0.0
    /// - **Minor**: 1.2.3-rc.1 -> 1.3.0
    /// - **Patch**: 1.2.3-rc.1 -> 1.2.4
    #[must_use]
    pub fn bump(&self, bump_type: VersionBump) -> Self {
        match bump_type {
            VersionBump::Major => Version::from_parts(
                self.major.bump(),
                Minor::zero(),
                Patch::zero(),
                PreRelease::empty(),
                BuildMetadata::empty(),
            ),
            VersionBump::Minor => Version::from_parts(
                self.major.clone(),
                self.minor.bump(),
                Patch::zero(),
                PreRelease::empty(),
                BuildMetadata::empty(),
            ),
            VersionBump::Patch => Version::from_parts(
                self.major.clone(),
                self.minor.clone(),
                self.patch.bump(),
                PreRelease::empty(),
                BuildMetadata::empty(),
            ),
        }
    }

    #[must_use]
    pub fn bump_major(&self) -> Self {
        self.bump(VersionBump::Major)
    }

    #[must_use]
    pub fn bump_minor(&self) -> Self {
        self.bump(VersionBump::Minor)
    }

    #[must_use]
    pub fn bump_patch(&self) -> Self {
        self.bump(VersionBump::Patch)
    }

    #[must_use]
    pub fn with_pre_release(&self, pre_release: PreRelease) -> Self {
        Version {
            pre_release,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn without_pre_release(&self) -> Self {
        self.with_pre_release(PreRelease::empty())
    }

    #[must_use]
    pub fn with_build_metadata(&self, build_metadata: BuildMetadata) -> Self {
        Version {
            build_metadata,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn without_build_metadata(&self) -> Self {
        self.with_build_metadata(BuildMetadata::empty())
    }

    /// Convert to a [`semver::Version`], or `None` if a numeric field does not
    /// fit in a `u64`
    pub fn to_semver(&self) -> Option<semver::Version> {
        let mut version = semver::Version::new(
            self.major.to_u64()?,
            self.minor.to_u64()?,
            self.patch.to_u64()?,
        );
        version.pre = semver::Prerelease::new(self.pre_release.as_str()).ok()?;
        version.build = semver::BuildMetadata::new(self.build_metadata.as_str()).ok()?;
        Some(version)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            tracing::debug!(value = s, "rejected version");
            VersionError::invalid_version(s)
        };

        let captures = semver_regex().captures(s).ok_or_else(invalid)?;
        let field = |name: &str| captures.name(name).map_or("", |m| m.as_str());

        Ok(Version {
            major: field("major").parse().map_err(|_| invalid())?,
            minor: field("minor").parse().map_err(|_| invalid())?,
            patch: field("patch").parse().map_err(|_| invalid())?,
            pre_release: field("prerelease").parse().map_err(|_| invalid())?,
            build_metadata: field("build").parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata)?;
        }
        Ok(())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Precedence first, then build metadata text so that the order agrees with
/// `Eq`. Use [`Version::compare`] when build metadata must be ignored.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other).then_with(|| {
            self.build_metadata
                .as_str()
                .cmp(other.build_metadata.as_str())
        })
    }
}

impl TryFrom<&semver::Version> for Version {
    type Error = VersionError;

    fn try_from(version: &semver::Version) -> Result<Self> {
        version.to_string().parse()
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
