use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

pub const CONFIG_FILE_NAME: &str = ".apidoc-i18n.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Locale identifier used for catalog lookups (`en`, `fr_FR`, `zh-CN`).
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Include every documentation section. Carried into generated output
    /// for the documentation UI; resolution does not look at it.
    /// Last-resort catalog locale, tried after the lookup locale's chain.
    #[serde(default = "default_locale")]
    pub fallback_locale: String,
    #[serde(default = "default_select_definitions")]
    pub select_definitions: bool,
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    /// Fixed key -> text overrides, queried before the catalog.
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_select_definitions() -> bool {
    true
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            fallback_locale: default_locale(),
            select_definitions: default_select_definitions(),
            messages_root: default_messages_root(),
            overrides: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `locale` or `fallbackLocale` is not a well-formed
    /// locale identifier or an override key is blank.
    pub fn validate(&self) -> Result<()> {
        self.parsed_locale()?;
        self.parsed_fallback_locale()?;

        for key in self.overrides.keys() {
            if key.trim().is_empty() {
                anyhow::bail!("Invalid key in 'overrides': keys must not be blank");
            }
        }

        Ok(())
    }

    pub fn parsed_locale(&self) -> Result<Locale> {
        self.locale
            .parse::<Locale>()
            .with_context(|| format!("Invalid locale in 'locale': \"{}\"", self.locale))
    }

    pub fn parsed_fallback_locale(&self) -> Result<Locale> {
        self.fallback_locale.parse::<Locale>().with_context(|| {
            format!(
                "Invalid locale in 'fallbackLocale': \"{}\"",
                self.fallback_locale
            )
        })
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory of the config file, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
