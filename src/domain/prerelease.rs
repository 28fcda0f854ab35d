//! Pre-release version handling for semantic versioning
//!
//! A pre-release is a dot-separated list of identifiers such as `alpha.1` or
//! `rc.2`, or nothing at all. Precedence follows
//! https://semver.org/#spec-item-11

use crate::domain::numeric::compare_decimal;
use crate::error::{Result, VersionError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Whether `s` is a non-empty run of `[0-9A-Za-z-]`
pub(crate) fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_valid_pre_release_identifier(s: &str) -> bool {
    is_identifier(s) && !(is_numeric(s) && s.len() > 1 && s.starts_with('0'))
}

/// Numeric identifiers compare by magnitude and always rank below
/// alphanumeric ones; alphanumeric identifiers compare by ASCII.
fn compare_identifiers(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_decimal(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// Pre-release part of a version
///
/// # Examples
/// - "" -> no pre-release
/// - "alpha" -> one identifier
/// - "beta.1" -> identifiers "beta" and "1"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PreRelease {
    value: String,
}

impl PreRelease {
    /// The "no pre-release" value
    pub fn empty() -> Self {
        PreRelease::default()
    }

    /// Parse a pre-release from a string
    ///
    /// The empty string is accepted and means "no pre-release". Otherwise each
    /// dot-separated identifier must be non-empty, use only `[0-9A-Za-z-]`,
    /// and carry no leading zero if it is purely numeric.
    ///
    /// # Examples
    /// ```ignore
    /// let pr = PreRelease::parse("beta.1")?;
    /// assert_eq!(pr.identifiers().collect::<Vec<_>>(), ["beta", "1"]);
    /// assert!(PreRelease::parse("beta.01").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Iterate over the dot-separated identifiers
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.value.split('.').filter(|s| !s.is_empty())
    }

    /// Compare by SemVer precedence
    ///
    /// An empty pre-release ranks above any non-empty one, since a release
    /// outranks its own pre-releases. Otherwise identifiers are compared left
    /// to right and, when one list is a prefix of the other, the shorter list
    /// ranks lower.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let mut left = self.identifiers();
                let mut right = other.identifiers();
                loop {
                    match (left.next(), right.next()) {
                        (Some(a), Some(b)) => match compare_identifiers(a, b) {
                            Ordering::Equal => continue,
                            decided => return decided,
                        },
                        (Some(_), None) => return Ordering::Greater,
                        (None, Some(_)) => return Ordering::Less,
                        (None, None) => return Ordering::Equal,
                    }
                }
            }
        }
    }
}

impl FromStr for PreRelease {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(PreRelease::empty());
        }

        if !s.split('.').all(is_valid_pre_release_identifier) {
            tracing::debug!(value = s, "rejected pre-release");
            return Err(VersionError::invalid_pre_release(s));
        }

        Ok(PreRelease {
            value: s.to_string(),
        })
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
