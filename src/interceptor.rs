//! Writes resolved text back into documentation fields.
//!
//! Each field kind has a [`ResolvePolicy`] deciding whether resolution is
//! attempted at all:
//!
//! | Field kind | Policy |
//! |---|---|
//! | operation summary / notes | `RequirePrefix` |
//! | listing description | `RequirePrefix` |
//! | parameter description | `Always` |
//! | tag name / description | `Always` |
//! | model / model property description | `NonBlank` |

use std::{collections::BTreeSet, fmt};

use serde_json::Value;
use tracing::debug;

use crate::document::{ApiDocument, Listing, Tag};
use crate::locale::{Locale, LocaleExtension};
use crate::marker::{extract_key, is_marked};
use crate::resolver::MessageResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    OperationSummary,
    OperationNotes,
    ParameterDescription,
    ModelDescription,
    ModelPropertyDescription,
    ListingDescription,
    TagName,
    TagDescription,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvePolicy {
    /// Resolve only text starting with `#{`.
    RequirePrefix,
    /// Always resolve; text without a marker passes through unchanged.
    Always,
    /// Resolve only non-blank text.
    NonBlank,
}

impl ResolvePolicy {
    pub fn admits(self, raw: &str) -> bool {
        match self {
            ResolvePolicy::RequirePrefix => is_marked(raw),
            ResolvePolicy::Always => true,
            ResolvePolicy::NonBlank => !raw.trim().is_empty(),
        }
    }
}

impl FieldKind {
    pub fn policy(self) -> ResolvePolicy {
        match self {
            FieldKind::OperationSummary
            | FieldKind::OperationNotes
            | FieldKind::ListingDescription => ResolvePolicy::RequirePrefix,
            FieldKind::ParameterDescription | FieldKind::TagName | FieldKind::TagDescription => {
                ResolvePolicy::Always
            }
            FieldKind::ModelDescription | FieldKind::ModelPropertyDescription => {
                ResolvePolicy::NonBlank
            }
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::OperationSummary => write!(f, "operation summary"),
            FieldKind::OperationNotes => write!(f, "operation notes"),
            FieldKind::ParameterDescription => write!(f, "parameter description"),
            FieldKind::ModelDescription => write!(f, "model description"),
            FieldKind::ModelPropertyDescription => write!(f, "model property description"),
            FieldKind::ListingDescription => write!(f, "listing description"),
            FieldKind::TagName => write!(f, "tag name"),
            FieldKind::TagDescription => write!(f, "tag description"),
        }
    }
}

/// Counts from one pass over a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalizeSummary {
    /// Fields the policy admitted for resolution.
    pub visited: usize,
    /// Fields whose text changed.
    pub rewritten: usize,
}

impl LocalizeSummary {
    fn record(&mut self, changed: bool) {
        self.visited += 1;
        if changed {
            self.rewritten += 1;
        }
    }
}

/// A marker in a document that no backend could resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedMarker {
    pub kind: FieldKind,
    pub location: String,
    pub key: String,
}

/// Applies a [`MessageResolver`] to documentation fields.
#[derive(Debug, Clone, Default)]
pub struct TextInterceptor {
    resolver: MessageResolver,
}

impl TextInterceptor {
    pub fn new(resolver: MessageResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &MessageResolver {
        &self.resolver
    }

    pub fn locale(&self) -> &Locale {
        self.resolver.locale()
    }

    /// Resolved text for a field, or `None` if the field must be left as is.
    pub fn resolve_field(&self, kind: FieldKind, raw: &str) -> Option<String> {
        kind.policy()
            .admits(raw)
            .then(|| self.resolver.resolve_text(raw))
    }

    /// Rewrite `value` in place. Returns true if the text changed.
    pub fn intercept(&self, kind: FieldKind, value: &mut String) -> bool {
        match self.resolve_field(kind, value) {
            Some(resolved) if resolved != *value => {
                *value = resolved;
                true
            }
            _ => false,
        }
    }

    /// Description of a listing: the description attribute, or the value
    /// attribute when it is blank, resolved only if it carries the prefix.
    pub fn listing_description(&self, description: &str, value: &str) -> String {
        let derived = if description.trim().is_empty() {
            value
        } else {
            description
        };
        self.resolve_field(FieldKind::ListingDescription, derived)
            .unwrap_or_else(|| derived.to_string())
    }

    /// Tags of a listing.
    ///
    /// Declared tags are resolved one by one and keep their order. Without
    /// declared tags, the resolved legacy tag names are used, de-duplicated
    /// and sorted. Without either, a single tag named after the controller.
    pub fn resolve_tags(&self, declared: &[Tag], legacy: &[String], controller: &str) -> Vec<Tag> {
        if !declared.is_empty() {
            return declared
                .iter()
                .map(|tag| {
                    let mut tag = tag.clone();
                    self.intercept(FieldKind::TagName, &mut tag.name);
                    if !tag.description.is_empty() {
                        self.intercept(FieldKind::TagDescription, &mut tag.description);
                    }
                    tag
                })
                .collect();
        }

        let mut names: BTreeSet<String> = legacy
            .iter()
            .filter_map(|name| self.resolve_field(FieldKind::TagName, name))
            .filter(|name| !name.trim().is_empty())
            .collect();

        if names.is_empty() {
            names.insert(default_tag_name(controller));
        }

        names.into_iter().map(|name| Tag::new(name, "")).collect()
    }

    /// Rewrite every field of `doc` and stamp the locale extension.
    pub fn apply(&self, doc: &mut ApiDocument) -> LocalizeSummary {
        let mut summary = LocalizeSummary::default();

        for listing in &mut doc.listings {
            self.apply_listing(listing, &mut summary);
        }

        for model in &mut doc.models {
            if FieldKind::ModelDescription.policy().admits(&model.description) {
                let changed = self.intercept(FieldKind::ModelDescription, &mut model.description);
                summary.record(changed);
            }
            for property in &mut model.properties {
                if FieldKind::ModelPropertyDescription
                    .policy()
                    .admits(&property.description)
                {
                    let changed = self.intercept(
                        FieldKind::ModelPropertyDescription,
                        &mut property.description,
                    );
                    summary.record(changed);
                }
            }
        }

        let extension = LocaleExtension::from(self.locale().clone());
        doc.extensions.insert(
            extension.name().to_string(),
            Value::String(extension.value().to_string()),
        );

        debug!(
            visited = summary.visited,
            rewritten = summary.rewritten,
            locale = %self.locale(),
            "localized document"
        );
        summary
    }

    fn apply_listing(&self, listing: &mut Listing, summary: &mut LocalizeSummary) {
        let derived = listing.derived_description().to_string();
        let description = self.listing_description(&listing.description, &listing.value);
        if is_marked(&derived) {
            summary.record(description != derived);
        }
        listing.description = description;

        let tags = self.resolve_tags(&listing.tags, &listing.legacy_tags, &listing.controller);
        if !listing.tags.is_empty() {
            for (before, after) in listing.tags.iter().zip(&tags) {
                summary.record(before.name != after.name);
                if !before.description.is_empty() {
                    summary.record(before.description != after.description);
                }
            }
        } else {
            // Blank legacy names are dropped and a synthesized default tag
            // is not a rewrite of anything.
            for name in listing.legacy_tags.iter().filter(|n| !n.trim().is_empty()) {
                if let Some(resolved) = self.resolve_field(FieldKind::TagName, name) {
                    summary.record(resolved != *name);
                }
            }
        }
        listing.tags = tags;

        for operation in &mut listing.operations {
            for (kind, field) in [
                (FieldKind::OperationSummary, &mut operation.summary),
                (FieldKind::OperationNotes, &mut operation.notes),
            ] {
                if let Some(text) = field
                    && kind.policy().admits(text)
                {
                    let changed = self.intercept(kind, text);
                    summary.record(changed);
                }
            }
            for parameter in &mut operation.parameters {
                if let Some(description) = &mut parameter.description {
                    let changed = self.intercept(FieldKind::ParameterDescription, description);
                    summary.record(changed);
                }
            }
        }
    }

    /// Markers the policy would resolve but no backend has a message for.
    pub fn unresolved(&self, doc: &ApiDocument) -> Vec<UnresolvedMarker> {
        doc.fields()
            .into_iter()
            .filter(|field| field.kind.policy().admits(field.value))
            .filter_map(|field| {
                let key = extract_key(field.value)?;
                if self.resolver.lookup(key).is_some() {
                    return None;
                }
                Some(UnresolvedMarker {
                    kind: field.kind,
                    location: field.location,
                    key: key.to_string(),
                })
            })
            .collect()
    }
}

/// Default tag name for a controller: `UserController` -> `user-controller`.
///
/// ```
/// use apidoc_i18n::interceptor::default_tag_name;
///
/// assert_eq!(default_tag_name("UserController"), "user-controller");
/// assert_eq!(default_tag_name("HTTPApi"), "http-api");
/// ```
pub fn default_tag_name(controller: &str) -> String {
    let chars: Vec<char> = controller.chars().collect();
    let mut name = String::with_capacity(controller.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let prev_upper = i > 0 && chars[i - 1].is_uppercase();
            if prev_lower || (prev_upper && next_lower) {
                name.push('-');
            }
            name.extend(c.to_lowercase());
        } else if c == '_' || c == ' ' {
            name.push('-');
        } else {
            name.push(c);
        }
    }

    name
}
