use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::locale::Locale;

/// Flattened `key -> message` map of one locale file.
pub type MessageMap = HashMap<String, String>;

#[derive(Debug, Default)]
pub struct ScanMessagesResult {
    pub messages: HashMap<Locale, MessageMap>,
    pub warnings: Vec<String>,
}

pub fn parse_json_str(content: &str) -> Result<MessageMap> {
    let json: Value = serde_json::from_str(content).context("Failed to parse message JSON")?;
    let mut message_map = MessageMap::new();
    flatten_json(&json, String::new(), &mut message_map);
    Ok(message_map)
}

pub fn parse_json_file(path: &Path) -> Result<MessageMap> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    parse_json_str(&content).with_context(|| format!("Failed to parse JSON file: {:?}", path))
}

/// Nested objects become dot-separated keys. Non-string leaves are skipped.
fn flatten_json(value: &Value, prefix: String, result: &mut MessageMap) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, result);
            }
        }
        Value::String(s) => {
            result.insert(prefix, s.clone());
        }
        _ => {}
    }
}

/// Extracts the locale from a message file name.
///
/// Examples:
/// - "en.json" -> Some(en)
/// - "zh_CN.json" -> Some(zh-CN)
/// - "README.json" -> None
pub fn extract_locale(path: impl AsRef<Path>) -> Option<Locale> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.parse().ok())
}

pub fn scan_message_files(message_dir: impl AsRef<Path>) -> Result<ScanMessagesResult> {
    let message_dir = message_dir.as_ref();
    let mut result = ScanMessagesResult::default();

    if !message_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .apidoc-i18n.json 'messagesRoot' setting.",
            message_dir.display()
        );
    }

    if !message_dir.is_dir() {
        bail!("'{}' is not a directory.", message_dir.display());
    }

    for entry in fs::read_dir(message_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let Some(locale) = extract_locale(&path) else {
            result
                .warnings
                .push(format!("Skipping {:?}: file name is not a locale", path));
            continue;
        };

        match parse_json_file(&path) {
            Ok(messages) => {
                result.messages.insert(locale, messages);
            }
            Err(e) => {
                result
                    .warnings
                    .push(format!("Failed to parse {:?}: {:#}", path, e));
            }
        }
    }

    Ok(result)
}
