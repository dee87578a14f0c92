//! Cleaner for class files generated by earlier weaving passes.

use crate::weave::namespace::validate_namespace;
use crate::weave::registry::{Cleaner, CleanerRegistration};
use crate::weave::types::parse_types;
use crate::weave::{Finder, WeaveEnvironment};
use anyhow::Context;
use std::fs;

/// Property naming the substring that marks a class as generated.
pub const MARKER_PROPERTY: &str = "clean.marker";
/// Property restricting the sweep to one namespace and below.
pub const NAMESPACE_PROPERTY: &str = "clean.namespace";
/// Property listing types to preserve even when they carry the marker.
pub const KEEP_PROPERTY: &str = "clean.keep";

const DEFAULT_MARKER: &str = "$$";

/// Removes class files whose name carries a generated-class marker.
///
/// Weaving passes conventionally emit helper classes with a `$$` infix
/// (e.g. `Widget$$woven`); running this cleaner before a rebuild removes
/// stale helpers so the next pass starts from a clean slate.
pub struct GeneratedClassCleaner;

impl Cleaner for GeneratedClassCleaner {
    fn id(&self) -> &'static str {
        "generated"
    }

    fn clean(&self, env: &WeaveEnvironment, finder: &Finder) -> anyhow::Result<()> {
        let _guard = env.logger().enter();

        let marker = env.property(MARKER_PROPERTY).unwrap_or(DEFAULT_MARKER);
        let namespace = validate_namespace(env.property(NAMESPACE_PROPERTY).unwrap_or_default())?;
        let keep = match env.property(KEEP_PROPERTY) {
            Some(list) => parse_types(list, env.loader())?,
            None => Vec::new(),
        };

        // The index gives no re-scan guarantee, so snapshot the candidates
        // before deleting anything.
        let candidates: Vec<_> = finder
            .artifacts()
            .filter(|class| class.name().contains(marker))
            .filter(|class| class.in_namespace(&namespace))
            .filter(|class| !keep.contains(class))
            .collect();

        let mut removed = 0usize;
        for class in candidates {
            fs::remove_file(class.path())
                .with_context(|| format!("failed to remove {}", class.path().display()))?;
            tracing::info!(class = class.name(), "removed generated class");
            removed += 1;
        }
        tracing::debug!(removed, marker, "generated class sweep complete");
        Ok(())
    }
}

inventory::submit! {
    CleanerRegistration {
        id: "generated",
        construct: || Box::new(GeneratedClassCleaner),
    }
}
