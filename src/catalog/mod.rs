//! Built-in message backends.
//!
//! - [`JsonCatalog`]: locale-aware catalog loaded from `<locale>.json` files.
//! - [`StaticMessages`]: in-memory override map, used for the config file's
//!   `overrides` section.

pub mod json;

use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use anyhow::Result;
use tracing::{debug, warn};

use crate::locale::Locale;
use crate::resolver::{LookupError, LookupResult, MessagePlugin, MessageSource};
use self::json::{MessageMap, scan_message_files};

/// Locale-aware message catalog.
///
/// Lookups try the requested locale's fallback chain (`fr-FR`, `fr`), then
/// the default locale's chain. A key found nowhere is `LookupError::NotFound`.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    bundles: HashMap<Locale, MessageMap>,
    default_locale: Locale,
    warnings: Vec<String>,
}

impl JsonCatalog {
    pub fn new(default_locale: Locale) -> Self {
        Self {
            bundles: HashMap::new(),
            default_locale,
            warnings: Vec::new(),
        }
    }

    /// Load every `<locale>.json` file in `dir`.
    ///
    /// Files that fail to parse are skipped and recorded in [`warnings`](Self::warnings).
    pub fn load_dir(dir: impl AsRef<Path>, default_locale: Locale) -> Result<Self> {
        let scanned = scan_message_files(dir.as_ref())?;
        for warning in &scanned.warnings {
            warn!("{}", warning);
        }
        debug!(
            locales = scanned.messages.len(),
            dir = %dir.as_ref().display(),
            "loaded message catalog"
        );

        Ok(Self {
            bundles: scanned.messages,
            default_locale,
            warnings: scanned.warnings,
        })
    }

    pub fn with_bundle(mut self, locale: Locale, messages: MessageMap) -> Self {
        self.insert_bundle(locale, messages);
        self
    }

    /// Add or extend the messages of one locale.
    pub fn insert_bundle(&mut self, locale: Locale, messages: MessageMap) {
        self.bundles.entry(locale).or_default().extend(messages);
    }

    /// Loaded locales, sorted.
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self.bundles.keys().collect();
        locales.sort();
        locales
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.values().all(|m| m.is_empty())
    }
}

impl MessageSource for JsonCatalog {
    fn message(&self, code: &str, locale: &Locale) -> LookupResult {
        let candidates = locale
            .fallbacks()
            .into_iter()
            .chain(self.default_locale.fallbacks());

        for candidate in candidates {
            if let Some(message) = self.bundles.get(&candidate).and_then(|m| m.get(code)) {
                return Ok(Some(message.clone()));
            }
        }

        Err(LookupError::NotFound {
            code: code.to_string(),
            locale: locale.to_string(),
        })
    }

    fn name(&self) -> &str {
        "json-catalog"
    }
}

/// Fixed `key -> text` overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticMessages {
    messages: BTreeMap<String, String>,
}

impl StaticMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticMessages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for StaticMessages {
    fn from(messages: BTreeMap<String, String>) -> Self {
        Self { messages }
    }
}

impl MessagePlugin for StaticMessages {
    fn message(&self, code: &str) -> LookupResult {
        Ok(self.messages.get(code).cloned())
    }

    fn name(&self) -> &str {
        "overrides"
    }
}
