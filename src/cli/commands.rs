use anyhow::{Context, Result};

use crate::config::Config;
use crate::domain::{Tag, Version, VersionBump};
use crate::error::VersionError;
use crate::ui;

/// Rendered output of a command that reports per-input results
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub text: String,
    /// False when at least one input was rejected
    pub success: bool,
}

fn parse_input(input: &str, config: &Config) -> std::result::Result<Version, VersionError> {
    Tag::new(input).parse_version(&config.parsing.tag_prefixes)
}

fn parse_input_with_context(input: &str, config: &Config) -> Result<Version> {
    parse_input(input, config).with_context(|| format!("cannot parse '{}'", input))
}

/// Validate each input, one line per input
pub fn validate(inputs: &[String], config: &Config) -> CommandOutput {
    let color = config.output.color;
    let mut success = true;

    let lines: Vec<String> = inputs
        .iter()
        .map(|input| match parse_input(input, config) {
            Ok(version) => ui::format_valid(&version, color),
            Err(e) => {
                success = false;
                ui::format_invalid(input, &e, color)
            }
        })
        .collect();

    CommandOutput {
        text: lines.join("\n"),
        success,
    }
}

/// Compare two versions by precedence
///
/// With `numeric` the result is printed as `-1`, `0` or `1`.
pub fn compare(left: &str, right: &str, numeric: bool, config: &Config) -> Result<String> {
    let left = parse_input_with_context(left, config)?;
    let right = parse_input_with_context(right, config)?;
    let ordering = left.compare(&right);

    if numeric {
        return Ok((ordering as i8).to_string());
    }
    Ok(ui::format_comparison(
        &left,
        ordering,
        &right,
        config.output.color,
    ))
}

/// Bump a version, falling back to the configured default level
pub fn bump(level: Option<VersionBump>, input: &str, config: &Config) -> Result<String> {
    let version = parse_input_with_context(input, config)?;
    let level = level.unwrap_or(config.bump.default);
    tracing::debug!(%version, %level, "bumping version");
    Ok(version.bump(level).to_string())
}

/// Sort versions in ascending order, or descending with `reverse`
///
/// Versions of equal precedence keep a deterministic order by build metadata.
pub fn sort(inputs: &[String], reverse: bool, config: &Config) -> Result<String> {
    let mut versions = inputs
        .iter()
        .map(|input| parse_input_with_context(input, config))
        .collect::<Result<Vec<_>>>()?;

    versions.sort();
    if reverse {
        versions.reverse();
    }

    Ok(versions
        .iter()
        .map(Version::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Show the individual fields of a version
pub fn inspect(input: &str, config: &Config) -> Result<String> {
    let version = parse_input_with_context(input, config)?;
    Ok(ui::format_fields(&version, config.output.color))
}
