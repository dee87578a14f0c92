//! Artifact index over the isolated loader.

use crate::error::Result;
use crate::weave::loader::{ArtifactLoader, ClassRef};
use crate::weave::namespace::validate_namespace;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// Queryable view over the compiled artifacts under the target directory.
///
/// Shared read-only across all providers in one run. Queries walk the
/// filesystem lazily and reflect its state at iteration time; there is no
/// guaranteed re-scan after a provider modifies artifacts, so callers that
/// delete entries should collect a query's results before acting on them.
pub struct Finder {
    loader: Arc<ArtifactLoader>,
    target: PathBuf,
}

impl Finder {
    /// Create an index rooted at `target`, resolving through `loader`.
    pub fn new(loader: Arc<ArtifactLoader>, target: PathBuf) -> Self {
        Self { loader, target }
    }

    /// The loader backing this index.
    pub fn loader(&self) -> &ArtifactLoader {
        &self.loader
    }

    /// The directory this index is rooted at.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Lazily enumerate every class artifact under the target directory.
    ///
    /// Each call starts a fresh walk. Unreadable entries and paths that are
    /// not valid UTF-8 are skipped.
    pub fn artifacts(&self) -> impl Iterator<Item = ClassRef> + '_ {
        let target = self.target.clone();
        WalkDir::new(&self.target)
            .into_iter()
            .filter_map(move |entry| {
                let entry = entry.ok()?;
                if !entry.file_type().is_file() {
                    return None;
                }
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some("class") {
                    return None;
                }
                let name = binary_name(&target, path)?;
                Some(ClassRef::new(name, path.to_path_buf()))
            })
    }

    /// Enumerate the class artifacts in `namespace` and below.
    ///
    /// The namespace is validated and normalized first, so dotted input is
    /// accepted.
    pub fn in_namespace<'a>(
        &'a self,
        namespace: &str,
    ) -> Result<impl Iterator<Item = ClassRef> + 'a> {
        let namespace = validate_namespace(namespace)?;
        Ok(self
            .artifacts()
            .filter(move |class| class.in_namespace(&namespace)))
    }
}

/// Derive the dotted binary name of a class file from its path relative to
/// the index root.
fn binary_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let mut name = String::new();
    for component in relative.components() {
        let part = component.as_os_str().to_str()?;
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(part);
    }
    Some(name)
}
