//! classweave - post-compilation class file processing pipeline
//!
//! This crate provides the orchestration core that runs after a build has
//! produced a directory of compiled class files:
//! - Validation of namespace paths and type reference lists
//! - An isolated loader and artifact index scoped to the target directory
//!   plus an auxiliary search path
//! - Discovery of pluggable cleanup providers and their sequential,
//!   fail-fast invocation

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod weave;

// Re-export commonly used types
pub use config::{Config, Properties};
pub use error::{Result, WeaveError};
pub use weave::{CleanProcessor, Cleaner, Finder, WeaveEnvironment};
