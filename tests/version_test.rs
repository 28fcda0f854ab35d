// tests/version_test.rs
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strict_semver::{PreRelease, Version, VersionError};

// https://regex101.com/r/Ly7O1x/3/ test vectors
const VALID: &[&str] = &[
    "0.0.4",
    "1.2.3",
    "10.20.30",
    "1.1.2-prerelease+meta",
    "1.1.2+meta",
    "1.1.2+meta-valid",
    "1.0.0-alpha",
    "1.0.0-beta",
    "1.0.0-alpha.beta",
    "1.0.0-alpha.beta.1",
    "1.0.0-alpha.1",
    "1.0.0-alpha0.valid",
    "1.0.0-alpha.0valid",
    "1.0.0-alpha-a.b-c-somethinglong+build.1-aef.1-its-okay",
    "1.0.0-rc.1+build.1",
    "2.0.0-rc.1+build.123",
    "1.2.3-beta",
    "10.2.3-DEV-SNAPSHOT",
    "1.2.3-SNAPSHOT-123",
    "1.0.0",
    "2.0.0",
    "1.1.7",
    "2.0.0+build.1848",
    "2.0.1-alpha.1227",
    "1.0.0-alpha+beta",
    "1.2.3----RC-SNAPSHOT.12.9.1--.12+788",
    "1.2.3----R-S.12.9.1--.12+meta",
    "1.2.3----RC-SNAPSHOT.12.9.1--.12",
    "1.0.0+0.build.1-rc.10000aaa-kk-0.1",
    "99999999999999999999999.999999999999999999.99999999999999999",
    "1.0.0-0A.is.legal",
];

const INVALID: &[&str] = &[
    "1",
    "1.2",
    "1.2.3-0123",
    "1.2.3-0123.0123",
    "1.1.2+.123",
    "+invalid",
    "-invalid",
    "-invalid+invalid",
    "-invalid.01",
    "alpha",
    "alpha.beta",
    "alpha.beta.1",
    "alpha.1",
    "alpha+beta",
    "alpha_beta",
    "alpha.",
    "alpha..",
    "beta",
    "1.0.0-alpha_beta",
    "-alpha.",
    "1.0.0-alpha..",
    "1.0.0-alpha..1",
    "1.0.0-alpha...1",
    "1.0.0-alpha....1",
    "1.0.0-alpha.....1",
    "1.0.0-alpha......1",
    "1.0.0-alpha.......1",
    "01.1.1",
    "1.01.1",
    "1.1.01",
    "1.2.3.DEV",
    "1.2-SNAPSHOT",
    "1.2.31.2.3----RC-SNAPSHOT.12.09.1--..12+788",
    "1.2-RC-SNAPSHOT",
    "-1.0.3-gamma+b7718",
    "+justmeta",
    "9.8.7+meta+meta",
    "9.8.7-whatever+meta+meta",
    "99999999999999999999999.999999999999999999.99999999999999999----RC-SNAPSHOT.12.09.1--------------------------------..12",
];

fn v(s: &str) -> Version {
    Version::parse(s).unwrap()
}

#[test]
fn test_valid_versions_round_trip() {
    for value in VALID {
        let version = Version::parse(value)
            .unwrap_or_else(|e| panic!("'{}' should be valid, got: {}", value, e));
        assert_eq!(version.to_string(), *value);
    }
}

#[test]
fn test_invalid_versions_rejected() {
    for value in INVALID {
        assert_eq!(
            Version::parse(value),
            Err(VersionError::invalid_version(*value)),
            "'{}' should be rejected",
            value
        );
    }
}

#[test]
fn test_semver_org_precedence_chain() {
    // https://semver.org/#spec-item-11
    let chain = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
        "2.0.0",
        "2.1.0",
        "2.1.1",
    ];

    for (i, left) in chain.iter().enumerate() {
        for (j, right) in chain.iter().enumerate() {
            assert_eq!(
                v(left).compare(&v(right)),
                i.cmp(&j),
                "comparing '{}' with '{}'",
                left,
                right
            );
        }
    }
}

#[test]
fn test_pre_release_rules() {
    let pr = |s: &str| PreRelease::parse(s).unwrap();
    assert_eq!(pr("alpha.1").compare(&pr("alpha.2")), Ordering::Less);
    assert_eq!(pr("alpha.1").compare(&pr("alpha.beta")), Ordering::Less);
    assert_eq!(pr("alpha").compare(&pr("alpha.1")), Ordering::Less);
}

#[test]
fn test_release_beats_pre_release() {
    assert_eq!(v("1.0.0").compare(&v("1.0.0-alpha")), Ordering::Greater);
}

#[test]
fn test_build_metadata_ignored_in_ordering() {
    let a = v("1.0.0+a");
    let b = v("1.0.0+b");
    assert_eq!(a.compare(&b), Ordering::Equal);
    assert!(!a.equals(&b));
    assert_ne!(a, b);
}

#[test]
fn test_oversized_fields_compare_numerically() {
    assert!(v("99999999999999999999999.0.0").is_greater_than(&v("18446744073709551615.0.0")));
    assert!(v("1.99999999999999999999.0").is_smaller_than(&v("1.100000000000000000000.0")));
}

#[test]
fn test_bump_never_wraps() {
    let version = Version::new(0, u64::MAX, u64::MAX);
    assert_eq!(
        version.bump_patch().to_string(),
        "0.18446744073709551615.18446744073709551616"
    );
    assert_eq!(version.bump_minor().to_string(), "0.18446744073709551616.0");
    assert!(version.bump_minor().is_greater_than(&version));
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Release {
    version: Version,
}

#[test]
fn test_serde_as_string() {
    let release: Release = toml::from_str("version = \"1.2.3-rc.1+build.5\"").unwrap();
    assert_eq!(release.version, v("1.2.3-rc.1+build.5"));

    let rendered = toml::to_string(&release).unwrap();
    assert_eq!(rendered.trim(), "version = \"1.2.3-rc.1+build.5\"");
}

#[test]
fn test_serde_rejects_invalid() {
    let err = toml::from_str::<Release>("version = \"1.2\"").unwrap_err();
    assert!(err.to_string().contains("Invalid version"));
}
