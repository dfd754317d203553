//! Marker resolution against an ordered chain of message backends.
//!
//! Resolution never fails: the worst case is that the caller gets its own
//! fallback text back.
//!
//! ## Order
//!
//! 1. Override plugins (`MessagePlugin`), in registration order.
//! 2. Locale-aware catalogs (`MessageSource`), in registration order.
//! 3. The fallback text.
//!
//! Empty messages and `LookupError::NotFound` are misses. Any other
//! `LookupError` is logged and treated as a miss.

mod backend;
mod chain;

pub use backend::*;
pub use chain::*;

use tracing::{debug, warn};

use crate::locale::Locale;
use crate::marker::extract_key;

/// What to do when a backend fails with something other than a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Fall through to the next backend, then to the fallback text.
    #[default]
    Fallback,
    /// Return the failure message as the resolved text.
    #[deprecated(note = "leaks diagnostic text into generated documentation; use `Fallback`")]
    EchoError,
}

/// Resolves marker keys through a [`ResolverChain`].
///
/// Stateless after construction. Safe to share across threads as long as
/// the backends are.
#[derive(Debug, Clone, Default)]
pub struct MessageResolver {
    chain: ResolverChain,
    locale: Locale,
    failure_policy: FailurePolicy,
}

enum Lookup {
    Resolved(String),
    Failed(LookupError),
    Missing,
}

impl MessageResolver {
    pub fn new(chain: ResolverChain, locale: Locale) -> Self {
        Self {
            chain,
            locale,
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn chain(&self) -> &ResolverChain {
        &self.chain
    }

    /// True if at least one backend is configured.
    pub fn supports(&self) -> bool {
        !self.chain.is_empty()
    }

    /// Resolve `key` in the configured locale, or return `fallback`.
    pub fn resolve(&self, key: &str, fallback: &str) -> String {
        self.resolve_in(key, &self.locale, fallback)
    }

    /// Resolve `key` in an explicit locale, or return `fallback`.
    ///
    /// An empty key short-circuits without touching any backend.
    #[allow(deprecated)]
    pub fn resolve_in(&self, key: &str, locale: &Locale, fallback: &str) -> String {
        if key.is_empty() {
            return fallback.to_string();
        }

        match self.lookup_in(key, locale) {
            Lookup::Resolved(message) => message,
            Lookup::Failed(err) if self.failure_policy == FailurePolicy::EchoError => {
                err.to_string()
            }
            Lookup::Failed(_) | Lookup::Missing => fallback.to_string(),
        }
    }

    /// Extract the marker key from `raw` and resolve it, falling back to `raw`.
    pub fn resolve_text(&self, raw: &str) -> String {
        match extract_key(raw) {
            Some(key) => self.resolve(key, raw),
            None => raw.to_string(),
        }
    }

    /// The first message any backend has for `key`, if there is one.
    pub fn lookup(&self, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }
        match self.lookup_in(key, &self.locale) {
            Lookup::Resolved(message) => Some(message),
            Lookup::Failed(_) | Lookup::Missing => None,
        }
    }

    #[allow(deprecated)]
    fn lookup_in(&self, key: &str, locale: &Locale) -> Lookup {
        let mut failure = None;

        for backend in self.chain.backends() {
            match backend.lookup(key, locale) {
                Ok(Some(message)) => {
                    debug!(key, backend = backend.name(), "resolved message");
                    return Lookup::Resolved(message);
                }
                Ok(None) => {
                    debug!(key, backend = backend.name(), "no message");
                }
                Err(err) if err.is_not_found() => {
                    debug!(key, backend = backend.name(), "{}", err);
                }
                Err(err) => {
                    warn!(key, backend = backend.name(), error = %err, "message lookup failed");
                    if self.failure_policy == FailurePolicy::EchoError {
                        return Lookup::Failed(err);
                    }
                    failure.get_or_insert(err);
                }
            }
        }

        match failure {
            Some(err) => Lookup::Failed(err),
            None => Lookup::Missing,
        }
    }
}
