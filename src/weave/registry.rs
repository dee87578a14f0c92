//! Provider capability and discovery.

use crate::weave::env::WeaveEnvironment;
use crate::weave::finder::Finder;

/// Cleanup capability: a pluggable provider invoked once per pipeline run.
///
/// Implementations remove artifacts left behind by earlier processing (for
/// example classes generated by a previous weaving pass). Errors are
/// implementation-defined; the orchestrator propagates them unmodified and
/// aborts the run.
pub trait Cleaner: Send + Sync {
    /// Stable identifier, used for logging and listing.
    fn id(&self) -> &'static str;

    /// Clean the target artifacts visible through `finder`.
    fn clean(&self, env: &WeaveEnvironment, finder: &Finder) -> anyhow::Result<()>;
}

/// Link-time registration record for a [`Cleaner`] implementation.
///
/// Third-party crates register their cleaners with
/// `inventory::submit! { CleanerRegistration { .. } }`; anything linked into
/// the final binary is discovered without compile-time coupling.
pub struct CleanerRegistration {
    pub id: &'static str,
    pub construct: fn() -> Box<dyn Cleaner>,
}

inventory::collect!(CleanerRegistration);

/// Pluggable lookup mechanism behind provider discovery.
pub trait ProviderLookup<P: ?Sized> {
    /// Produce all known implementations, in lookup order.
    fn providers(&self) -> Vec<Box<P>>;
}

/// Default lookup: every cleaner registered through [`inventory`].
///
/// Registration order is whatever the collector yields; it is stable within
/// one binary but not something correctness may depend on.
pub struct RegisteredCleaners;

impl ProviderLookup<dyn Cleaner> for RegisteredCleaners {
    fn providers(&self) -> Vec<Box<dyn Cleaner>> {
        let mut providers = Vec::new();
        for registration in inventory::iter::<CleanerRegistration> {
            providers.push((registration.construct)());
        }
        providers
    }
}

/// Identifiers of all registered cleaners, in registration order.
pub fn registered_cleaner_ids() -> Vec<&'static str> {
    inventory::iter::<CleanerRegistration>
        .into_iter()
        .map(|registration| registration.id)
        .collect()
}

/// Immutable collection of discovered providers for one lifecycle phase.
///
/// Populated once, by discovery or by explicit injection, and iterated in
/// that order. Empty is a valid state meaning the phase performs no work.
pub struct ProviderRegistry<P: ?Sized> {
    providers: Vec<Box<P>>,
}

impl<P: ?Sized> ProviderRegistry<P> {
    /// Discover providers through the given lookup mechanism.
    pub fn discover(lookup: &dyn ProviderLookup<P>) -> Self {
        Self {
            providers: lookup.providers(),
        }
    }

    /// Use an explicitly supplied provider collection instead of discovery.
    pub fn from_providers(providers: Vec<Box<P>>) -> Self {
        Self { providers }
    }

    /// Iterate providers in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.providers.iter().map(|provider| provider.as_ref())
    }

    /// Number of discovered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether discovery produced no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
