//! Command implementations for the strict-semver binary
//!
//! Commands are plain functions that return rendered output, which keeps
//! argument parsing in `main.rs` separate from the logic tested here.

pub mod commands;

pub use commands::{bump, compare, inspect, sort, validate, CommandOutput};
