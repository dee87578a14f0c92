//! Lifecycle processors: sequential orchestration of provider invocation.

use crate::config::Properties;
use crate::error::{Result, WeaveError};
use crate::weave::env::WeaveEnvironment;
use crate::weave::finder::Finder;
use crate::weave::loader::ArtifactLoader;
use crate::weave::registry::{Cleaner, ProviderRegistry, RegisteredCleaners};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// State shared by every lifecycle phase: the auxiliary search path, the
/// target directory, the configuration bag, and the discovered providers.
///
/// Target existence is checked lazily by the concrete phase, not here.
pub struct Processor<P: ?Sized> {
    classpath: Vec<PathBuf>,
    target: PathBuf,
    config: Arc<Properties>,
    providers: ProviderRegistry<P>,
}

impl<P: ?Sized> Processor<P> {
    /// Create a processor over the given paths, configuration and providers.
    pub fn new(
        classpath: Vec<PathBuf>,
        target: PathBuf,
        config: Properties,
        providers: ProviderRegistry<P>,
    ) -> Self {
        Self {
            classpath,
            target,
            config: Arc::new(config),
            providers,
        }
    }

    /// The auxiliary search path, in the order supplied.
    pub fn classpath(&self) -> &[PathBuf] {
        &self.classpath
    }

    /// The target artifact directory.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// The run's configuration properties.
    pub fn config(&self) -> &Properties {
        &self.config
    }

    /// The discovered provider collection for this phase.
    pub fn providers(&self) -> &ProviderRegistry<P> {
        &self.providers
    }

    /// Build the isolated loader for this run: target directory first, then
    /// the auxiliary search path, deduplicated. Target-first matters because
    /// resolution ambiguity must favor what is actually being processed.
    fn build_loader(&self) -> ArtifactLoader {
        let mut roots = Vec::with_capacity(self.classpath.len() + 1);
        roots.push(self.target.clone());
        roots.extend(self.classpath.iter().cloned());
        ArtifactLoader::new(roots)
    }
}

/// Orchestrator for the cleanup lifecycle phase.
///
/// Builds the loader and artifact index once, then invokes every discovered
/// [`Cleaner`] in sequence, each against a fresh [`WeaveEnvironment`].
pub struct CleanProcessor {
    base: Processor<dyn Cleaner>,
}

impl CleanProcessor {
    /// Create a processor whose cleaners come from link-time registration.
    pub fn new(classpath: Vec<PathBuf>, target: PathBuf, config: Properties) -> Self {
        Self {
            base: Processor::new(
                classpath,
                target,
                config,
                ProviderRegistry::discover(&RegisteredCleaners),
            ),
        }
    }

    /// Create a processor with an explicitly supplied cleaner collection.
    pub fn with_providers(
        classpath: Vec<PathBuf>,
        target: PathBuf,
        config: Properties,
        providers: Vec<Box<dyn Cleaner>>,
    ) -> Self {
        Self {
            base: Processor::new(
                classpath,
                target,
                config,
                ProviderRegistry::from_providers(providers),
            ),
        }
    }

    /// The discovered cleaner collection.
    pub fn providers(&self) -> &ProviderRegistry<dyn Cleaner> {
        self.base.providers()
    }

    /// Run the cleanup phase.
    ///
    /// A missing target directory is not an error: the run is logged as a
    /// no-op. A provider failure aborts the remaining providers immediately;
    /// there is no partial-completion bookkeeping and no rollback.
    pub fn clean(&self) -> Result<()> {
        if !self.base.target().exists() {
            tracing::warn!(
                directory = %self.base.target().display(),
                "target directory does not exist; nothing to do"
            );
            return Ok(());
        }

        let loader = Arc::new(self.base.build_loader());
        let finder = Finder::new(Arc::clone(&loader), self.base.target().to_path_buf());

        for cleaner in self.base.providers().iter() {
            tracing::debug!(provider = cleaner.id(), "invoking cleaner");
            let env = WeaveEnvironment::new(
                self.base.target().to_path_buf(),
                Arc::clone(&loader),
                Arc::clone(&self.base.config),
                cleaner.id(),
            );
            cleaner
                .clean(&env, &finder)
                .map_err(|source| WeaveError::Provider {
                    provider: cleaner.id().to_string(),
                    source: source.into(),
                })?;
        }
        Ok(())
    }
}
