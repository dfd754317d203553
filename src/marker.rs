//! Indirection marker parsing.
//!
//! Documentation text of the form `#{some.key}` is an indirection into a
//! message catalog. Everything else is literal text and is never altered.

/// Opening delimiter of an indirection marker.
pub const MARKER_PREFIX: &str = "#{";

/// Closing delimiter of an indirection marker.
pub const MARKER_SUFFIX: &str = "}";

/// Extracts the lookup key from a marker.
///
/// Returns the text strictly between the first `#{` and the first `}` after it,
/// with leading and trailing whitespace removed. Returns `None` when either
/// delimiter is missing or the key is blank.
///
/// # Examples
///
/// ```
/// use apidoc_i18n::marker::extract_key;
///
/// assert_eq!(extract_key("#{greeting.hello}"), Some("greeting.hello"));
/// assert_eq!(extract_key("#{  spaced.key  }"), Some("spaced.key"));
/// assert_eq!(extract_key("Just text"), None);
/// assert_eq!(extract_key("#{   }"), None);
/// ```
pub fn extract_key(raw: &str) -> Option<&str> {
    let start = raw.find(MARKER_PREFIX)? + MARKER_PREFIX.len();
    let rest = &raw[start..];
    let end = rest.find(MARKER_SUFFIX)?;
    let key = rest[..end].trim();
    if key.is_empty() { None } else { Some(key) }
}

/// Returns true if the text starts with the marker prefix.
///
/// This is the gate used by field kinds that only resolve marked text.
pub fn is_marked(raw: &str) -> bool {
    raw.starts_with(MARKER_PREFIX)
}
