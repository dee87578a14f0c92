//! Subcommand implementations.

pub mod clean;
pub mod providers;
