//! Pipeline core: validation, isolated loading, provider discovery and
//! orchestration.
//!
//! This module provides:
//! - Validation of namespace paths and type reference lists
//! - An artifact loader scoped to an explicit ordered set of roots
//! - A queryable index over the compiled artifacts of a target directory
//! - Discovery and sequential invocation of pluggable cleanup providers

pub mod cleaners;
mod env;
mod finder;
mod loader;
mod namespace;
mod processor;
mod registry;
mod types;

pub use env::WeaveEnvironment;
pub use finder::Finder;
pub use loader::{ArtifactLoader, ClassRef};
pub use namespace::validate_namespace;
pub use processor::{CleanProcessor, Processor};
pub use registry::{
    registered_cleaner_ids, Cleaner, CleanerRegistration, ProviderLookup, ProviderRegistry,
    RegisteredCleaners,
};
pub use types::parse_types;
