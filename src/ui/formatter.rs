//! Pure formatting functions for UI output.
//!
//! Every function takes a `color` flag. When it is false the output is plain
//! text; when it is true `console` still decides based on whether the stream
//! is a terminal, so piped output stays plain.

use crate::domain::Version;
use console::{style, StyledObject};
use std::cmp::Ordering;
use std::fmt::Display;

/// Only ever force styling off; never force it on for non-terminals.
fn paint<D>(styled: StyledObject<D>, color: bool) -> StyledObject<D> {
    if color {
        styled
    } else {
        styled.force_styling(false)
    }
}

/// Format and print an error message in red.
pub fn display_error(message: &str, color: bool) {
    eprintln!("{} {}", paint(style("ERROR:").for_stderr().red(), color), message);
}

/// Format a successfully validated input with a green checkmark.
pub fn format_valid(version: &Version, color: bool) -> String {
    format!("{} {}", paint(style("✓").green(), color), version)
}

/// Format a rejected input with a red cross and the reason.
pub fn format_invalid(input: &str, reason: &impl Display, color: bool) -> String {
    format!(
        "{} {} ({})",
        paint(style("✗").red(), color),
        input,
        reason
    )
}

/// Format the result of a precedence comparison (e.g. "1.0.0 < 2.0.0").
pub fn format_comparison(
    left: &Version,
    ordering: Ordering,
    right: &Version,
    color: bool,
) -> String {
    let symbol = match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    };
    format!(
        "{} {} {}",
        left,
        paint(style(symbol).bold(), color),
        right
    )
}

/// Format the five fields of a version, one per line.
///
/// Empty pre-release or build metadata is shown as `-`.
pub fn format_fields(version: &Version, color: bool) -> String {
    let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
    let rows = [
        ("major", version.major().to_string()),
        ("minor", version.minor().to_string()),
        ("patch", version.patch().to_string()),
        ("pre-release", or_dash(version.pre_release().as_str())),
        ("build", or_dash(version.build_metadata().as_str())),
    ];

    rows.iter()
        .map(|(label, value)| {
            format!(
                "{} {}",
                paint(style(format!("{:<12}", format!("{}:", label))).bold(), color),
                value
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
