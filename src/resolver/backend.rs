//! Message backends queried by the resolver.

use std::sync::Arc;

use thiserror::Error;

use crate::locale::Locale;

/// Failure reported by a backend lookup.
///
/// `NotFound` is an ordinary miss. Every other variant is a backend failure:
/// it is logged and the resolver moves on as if the backend had no entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No message found under code '{code}' for locale '{locale}'")]
    NotFound { code: String, locale: String },
    #[error("Message backend unavailable: {0}")]
    Unavailable(String),
    #[error("Malformed message for code '{code}': {reason}")]
    Malformed { code: String, reason: String },
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }
}

pub type LookupResult = Result<Option<String>, LookupError>;

/// Custom override resolver registered by the host.
///
/// A non-empty message is authoritative; `None` or an empty string means
/// "try the next backend". Closures `Fn(&str) -> Option<String>` are plugins
/// as-is.
pub trait MessagePlugin: Send + Sync {
    fn message(&self, code: &str) -> LookupResult;

    fn name(&self) -> &str {
        "plugin"
    }
}

/// Generic locale-aware message catalog.
pub trait MessageSource: Send + Sync {
    fn message(&self, code: &str, locale: &Locale) -> LookupResult;

    fn name(&self) -> &str {
        "message-source"
    }
}

impl<F> MessagePlugin for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn message(&self, code: &str) -> LookupResult {
        Ok(self(code))
    }

    fn name(&self) -> &str {
        "closure"
    }
}

/// One entry of a resolver chain.
#[derive(Clone)]
pub enum Backend {
    Plugin(Arc<dyn MessagePlugin>),
    Source(Arc<dyn MessageSource>),
}

impl Backend {
    pub fn name(&self) -> &str {
        match self {
            Backend::Plugin(plugin) => plugin.name(),
            Backend::Source(source) => source.name(),
        }
    }

    /// Query the backend, normalizing empty messages to `None`.
    pub fn lookup(&self, code: &str, locale: &Locale) -> LookupResult {
        let message = match self {
            Backend::Plugin(plugin) => plugin.message(code)?,
            Backend::Source(source) => source.message(code, locale)?,
        };
        Ok(message.filter(|m| !m.is_empty()))
    }

    pub fn is_plugin(&self) -> bool {
        matches!(self, Backend::Plugin(_))
    }
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Plugin(_) => write!(f, "Plugin({})", self.name()),
            Backend::Source(_) => write!(f, "Source({})", self.name()),
        }
    }
}
