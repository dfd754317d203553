//! Locale identifiers used for catalog lookups.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Vendor extension name used to stamp the documentation locale.
pub const LOCALE_EXTENSION_NAME: &str = "x-locale";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale identifier is empty")]
    Empty,
    #[error("invalid locale identifier '{0}'")]
    Invalid(String),
}

/// A normalized BCP-47 style locale tag (`en`, `fr-FR`, `zh-Hant-TW`).
///
/// Both `-` and `_` are accepted as separators on input; the canonical
/// form always uses `-`, a lowercase language, a titlecase script and an
/// uppercase region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// The default locale (English).
    pub fn english() -> Self {
        Self("en".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag, e.g. `fr` for `fr-FR`.
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Lookup order for this locale, most specific first.
    ///
    /// ```
    /// use apidoc_i18n::locale::Locale;
    ///
    /// let locale: Locale = "zh_Hant_TW".parse().unwrap();
    /// let chain: Vec<String> = locale.fallbacks().iter().map(|l| l.to_string()).collect();
    /// assert_eq!(chain, ["zh-Hant-TW", "zh-Hant", "zh"]);
    /// ```
    pub fn fallbacks(&self) -> Vec<Locale> {
        let parts: Vec<&str> = self.0.split('-').collect();
        (1..=parts.len())
            .rev()
            .map(|n| Locale(parts[..n].join("-")))
            .collect()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LocaleError::Empty);
        }

        // The long-standing default spelling of the config value.
        if s.eq_ignore_ascii_case("english") {
            return Ok(Self::english());
        }

        let invalid = || LocaleError::Invalid(s.to_string());
        let mut normalized = Vec::new();
        for (i, part) in s.split(['-', '_']).enumerate() {
            if part.is_empty() || part.len() > 8 || !part.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(invalid());
            }
            if i == 0 {
                if !(2..=3).contains(&part.len()) || !part.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(invalid());
                }
                normalized.push(part.to_ascii_lowercase());
            } else if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                // Script subtag: Hant, Latn
                let lower = part.to_ascii_lowercase();
                let mut chars = lower.chars();
                let first = chars.next().map(|c| c.to_ascii_uppercase());
                normalized.push(first.into_iter().chain(chars).collect());
            } else if part.len() == 2 || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
            {
                normalized.push(part.to_ascii_uppercase());
            } else {
                normalized.push(part.to_ascii_lowercase());
            }
        }

        Ok(Self(normalized.join("-")))
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named vendor extension carrying a locale, written into generated
/// documentation so consumers know which language it was rendered in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleExtension {
    name: String,
    value: Locale,
}

impl LocaleExtension {
    pub fn new(name: impl Into<String>, value: Locale) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Locale {
        &self.value
    }
}

impl From<Locale> for LocaleExtension {
    fn from(locale: Locale) -> Self {
        Self::new(LOCALE_EXTENSION_NAME, locale)
    }
}

impl fmt::Display for LocaleExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocaleExtension{{name: {}, value: {}}}", self.name, self.value)
    }
}
