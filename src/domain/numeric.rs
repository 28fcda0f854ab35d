//! Numeric version fields (major, minor, patch)
//!
//! SemVer places no upper bound on these fields, so each one stores its
//! canonical decimal string rather than a machine integer. Comparison and
//! increment work directly on the digits.

use crate::error::{Result, VersionError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Which numeric field a value or error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Major => write!(f, "major"),
            FieldKind::Minor => write!(f, "minor"),
            FieldKind::Patch => write!(f, "patch"),
        }
    }
}

fn numeric_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(0|[1-9][0-9]*)$").expect("numeric field pattern is valid"))
}

fn validate(field: FieldKind, value: &str) -> Result<String> {
    if numeric_regex().is_match(value) {
        Ok(value.to_string())
    } else {
        tracing::debug!(%field, value, "rejected numeric field");
        Err(VersionError::invalid_field(field, value))
    }
}

/// Compare two canonical non-negative decimal strings by magnitude.
///
/// Canonical strings carry no leading zeros, so a longer string is always the
/// larger number and equal lengths compare digit by digit.
pub(crate) fn compare_decimal(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Add one to a canonical decimal string without any width limit
pub(crate) fn increment_decimal(value: &str) -> String {
    let mut digits: Vec<char> = value.chars().collect();

    for digit in digits.iter_mut().rev() {
        if *digit == '9' {
            *digit = '0';
        } else {
            *digit = char::from(*digit as u8 + 1);
            return digits.into_iter().collect();
        }
    }

    // Every digit carried: 99..9 becomes 100..0
    tracing::trace!(value, "increment carried into a new digit");
    std::iter::once('1').chain(digits).collect()
}

macro_rules! numeric_field {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            value: String,
        }

        impl $name {
            /// The field this type represents
            pub const KIND: FieldKind = $kind;

            /// The zero value
            pub fn zero() -> Self {
                $name {
                    value: "0".to_string(),
                }
            }

            /// Parse from a decimal string with no sign and no leading zeros
            pub fn parse(s: &str) -> Result<Self> {
                s.parse()
            }

            /// The canonical decimal string
            pub fn as_str(&self) -> &str {
                &self.value
            }

            /// The value as a `u64`, or `None` if it does not fit
            pub fn to_u64(&self) -> Option<u64> {
                self.value.parse().ok()
            }

            /// Return a new field holding this value plus one
            #[must_use]
            pub fn bump(&self) -> Self {
                $name {
                    value: increment_decimal(&self.value),
                }
            }

            /// Compare by numeric magnitude
            pub fn compare(&self, other: &Self) -> Ordering {
                compare_decimal(&self.value, &other.value)
            }
        }

        impl FromStr for $name {
            type Err = VersionError;

            fn from_str(s: &str) -> Result<Self> {
                validate(Self::KIND, s).map(|value| $name { value })
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                $name {
                    value: value.to_string(),
                }
            }
        }

        impl TryFrom<i64> for $name {
            type Error = VersionError;

            fn try_from(value: i64) -> Result<Self> {
                if value < 0 {
                    tracing::debug!(field = %Self::KIND, value, "rejected negative numeric field");
                    return Err(VersionError::invalid_field(Self::KIND, value.to_string()));
                }
                Ok($name {
                    value: value.to_string(),
                })
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.compare(other)
            }
        }
    };
}

numeric_field!(
    /// Major version number
    Major,
    FieldKind::Major
);

numeric_field!(
    /// Minor version number
    Minor,
    FieldKind::Minor
);

numeric_field!(
    /// Patch version number
    Patch,
    FieldKind::Patch
);
