use crate::domain::Version;
use crate::error::Result;

/// A release tag name such as `v1.2.3` or `release-2.0.0-rc.1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Extract the version part of the tag (e.g., "v1.2.3" -> "1.2.3")
    ///
    /// The first prefix that matches and is directly followed by a digit is
    /// stripped. Tags without a known prefix are returned unchanged.
    pub fn version_part(&self, prefixes: &[String]) -> &str {
        prefixes
            .iter()
            .filter_map(|prefix| self.name.strip_prefix(prefix.as_str()))
            .find(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
            .unwrap_or(self.name.as_str())
    }

    /// Parse the version carried by this tag
    pub fn parse_version(&self, prefixes: &[String]) -> Result<Version> {
        Version::parse(self.version_part(prefixes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes() -> Vec<String> {
        vec!["v".to_string(), "V".to_string(), "release-".to_string()]
    }

    #[test]
    fn test_tag_new() {
        let tag = Tag::new("v1.2.3");
        assert_eq!(tag.name, "v1.2.3");
    }

    #[test]
    fn test_tag_version_part() {
        assert_eq!(Tag::new("v1.2.3").version_part(&prefixes()), "1.2.3");
        assert_eq!(Tag::new("V1.2.3").version_part(&prefixes()), "1.2.3");
        assert_eq!(
            Tag::new("release-2.0.0-rc.1").version_part(&prefixes()),
            "2.0.0-rc.1"
        );
    }

    #[test]
    fn test_tag_version_part_without_prefix() {
        assert_eq!(Tag::new("1.2.3").version_part(&prefixes()), "1.2.3");
        assert_eq!(Tag::new("vendor").version_part(&prefixes()), "vendor");
        assert_eq!(Tag::new("v1.2.3").version_part(&[]), "v1.2.3");
    }

    #[test]
    fn test_tag_parse_version() {
        let version = Tag::new("v1.2.3-beta.1").parse_version(&prefixes()).unwrap();
        assert_eq!(version, Version::parse("1.2.3-beta.1").unwrap());
        assert!(Tag::new("vv1.2.3").parse_version(&prefixes()).is_err());
    }
}
