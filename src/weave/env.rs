//! Per-provider execution environment.

use crate::config::Properties;
use crate::weave::loader::ArtifactLoader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Immutable bundle handed to each provider invocation.
///
/// A fresh environment is built per provider so logger scoping cannot leak
/// between providers; the loader and configuration are intentionally shared
/// across all environments of one run.
pub struct WeaveEnvironment {
    target: PathBuf,
    loader: Arc<ArtifactLoader>,
    config: Arc<Properties>,
    span: tracing::Span,
}

impl WeaveEnvironment {
    /// Create an environment scoped to the named provider.
    pub fn new(
        target: PathBuf,
        loader: Arc<ArtifactLoader>,
        config: Arc<Properties>,
        provider: &str,
    ) -> Self {
        let span = tracing::info_span!("cleaner", provider);
        Self {
            target,
            loader,
            config,
            span,
        }
    }

    /// The directory of compiled artifacts being processed.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// The run's isolated loader, for resolving further types.
    pub fn loader(&self) -> &ArtifactLoader {
        &self.loader
    }

    /// The run's configuration properties.
    pub fn config(&self) -> &Properties {
        &self.config
    }

    /// Look up a single configuration property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(String::as_str)
    }

    /// Logging span scoped to the active provider; enter it so log output is
    /// attributable.
    pub fn logger(&self) -> &tracing::Span {
        &self.span
    }
}
