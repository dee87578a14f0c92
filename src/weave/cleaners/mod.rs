//! Built-in cleanup providers.

mod generated;

pub use generated::GeneratedClassCleaner;
