//! Isolated artifact loading.
//!
//! The loader resolves type names against an explicit, ordered set of root
//! directories. It never consults any ambient process state, so two runs
//! with different root sets see entirely independent views of the world.

use crate::error::{ResolveError, Result, WeaveError};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A resolved reference to a compiled class artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassRef {
    /// Dotted binary name, e.g. `com.example.Widget$Inner`.
    name: String,
    /// Path of the `.class` file this reference resolved to.
    path: PathBuf,
}

impl ClassRef {
    pub(crate) fn new(name: String, path: PathBuf) -> Self {
        Self { name, path }
    }

    /// Dotted binary name of the class.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Internal (slash-separated) name of the class.
    pub fn internal_name(&self) -> String {
        self.name.replace('.', "/")
    }

    /// Canonical slash-separated namespace, empty for the default namespace.
    pub fn namespace(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((namespace, _)) => namespace.replace('.', "/"),
            None => String::new(),
        }
    }

    /// Whether this class lives in `namespace` or any namespace below it.
    ///
    /// Expects the canonical slash-separated form; the empty string matches
    /// everything.
    pub fn in_namespace(&self, namespace: &str) -> bool {
        if namespace.is_empty() {
            return true;
        }
        let own = self.namespace();
        own == namespace || own.starts_with(&format!("{namespace}/"))
    }

    /// Path of the resolved `.class` file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw bytes of the artifact.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|source| WeaveError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Resolution scope over an explicit ordered set of root directories.
///
/// Roots are deduplicated preserving first occurrence; resolution probes
/// them in order, so earlier roots shadow later ones.
#[derive(Debug)]
pub struct ArtifactLoader {
    roots: Vec<PathBuf>,
}

impl ArtifactLoader {
    /// Create a loader over the given roots.
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut seen = HashSet::new();
        let roots = roots
            .into_iter()
            .filter(|root| seen.insert(root.clone()))
            .collect();
        Self { roots }
    }

    /// The deduplicated root set, in precedence order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Resolve a dotted or slash-separated type name to a class artifact.
    pub fn resolve(&self, name: &str) -> std::result::Result<ClassRef, ResolveError> {
        let name = name.trim().replace('/', ".");
        if name.is_empty() {
            return Err(ResolveError::EmptyName);
        }
        let relative = format!("{}.class", name.replace('.', "/"));
        for root in &self.roots {
            let candidate = root.join(&relative);
            if candidate.is_file() {
                return Ok(ClassRef::new(name, candidate));
            }
        }
        Err(ResolveError::NotFound(name))
    }
}
