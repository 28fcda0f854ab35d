//! User interface module - output formatting for the CLI.
//!
//! Formatting is kept in `formatter` as pure functions returning strings so
//! command output can be asserted on directly.

pub mod formatter;

pub use formatter::{
    display_error, format_comparison, format_fields, format_invalid, format_valid,
};
