//! Documentation model the interceptor rewrites.
//!
//! This is the subset of a generated API document that carries
//! human-readable text: controller listings with their tags and operations,
//! and schema models with their properties. Keys the model does not name are
//! kept in each struct's `rest` map and written back unchanged.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::interceptor::FieldKind;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocument {
    #[serde(default)]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub models: Vec<Model>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extensions: Map<String, Value>,
    /// Unmodelled keys, written back as they were read.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A controller-level listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Controller name, used to synthesize a default tag.
    pub controller: String,
    #[serde(default)]
    pub description: String,
    /// Legacy value attribute, used when `description` is blank.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Legacy tag names, used when no tags are declared.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legacy_tags: Vec<String>,
    #[serde(default)]
    pub operations: Vec<Operation>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Tag {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            rest: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub operation_id: String,
    /// `None` when the operation carries no annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Parameter {
    pub name: String,
    /// `None` when the parameter carries no annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub properties: Vec<ModelProperty>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ModelProperty {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A text field of a document, with a readable location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef<'a> {
    pub kind: FieldKind,
    pub location: String,
    pub value: &'a str,
}

impl Operation {
    fn label(&self, index: usize) -> String {
        if self.operation_id.is_empty() {
            format!("operations[{}]", index)
        } else {
            self.operation_id.clone()
        }
    }
}

impl ApiDocument {
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse documentation JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read documentation file: {:?}", path))?;
        Self::from_json_str(&content).with_context(|| format!("Invalid document: {:?}", path))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize documentation")
    }

    /// Every text field present in the document, in document order.
    ///
    /// Absent annotations (`None`) are not listed. Listing descriptions are
    /// reported as derived (description, else value). Legacy tags are
    /// reported only when no tags are declared; an empty tag description
    /// counts as absent.
    pub fn fields(&self) -> Vec<FieldRef<'_>> {
        let mut fields = Vec::new();

        for listing in &self.listings {
            let controller = &listing.controller;
            fields.push(FieldRef {
                kind: FieldKind::ListingDescription,
                location: format!("{}.description", controller),
                value: listing.derived_description(),
            });

            if listing.tags.is_empty() {
                for (i, name) in listing.legacy_tags.iter().enumerate() {
                    fields.push(FieldRef {
                        kind: FieldKind::TagName,
                        location: format!("{}.legacyTags[{}]", controller, i),
                        value: name,
                    });
                }
            }
            for (i, tag) in listing.tags.iter().enumerate() {
                fields.push(FieldRef {
                    kind: FieldKind::TagName,
                    location: format!("{}.tags[{}].name", controller, i),
                    value: &tag.name,
                });
                if !tag.description.is_empty() {
                    fields.push(FieldRef {
                        kind: FieldKind::TagDescription,
                        location: format!("{}.tags[{}].description", controller, i),
                        value: &tag.description,
                    });
                }
            }

            for (i, operation) in listing.operations.iter().enumerate() {
                let prefix = format!("{}.{}", controller, operation.label(i));
                if let Some(summary) = &operation.summary {
                    fields.push(FieldRef {
                        kind: FieldKind::OperationSummary,
                        location: format!("{}.summary", prefix),
                        value: summary,
                    });
                }
                if let Some(notes) = &operation.notes {
                    fields.push(FieldRef {
                        kind: FieldKind::OperationNotes,
                        location: format!("{}.notes", prefix),
                        value: notes,
                    });
                }
                for parameter in &operation.parameters {
                    if let Some(description) = &parameter.description {
                        fields.push(FieldRef {
                            kind: FieldKind::ParameterDescription,
                            location: format!("{}.{}.description", prefix, parameter.name),
                            value: description,
                        });
                    }
                }
            }
        }

        for model in &self.models {
            fields.push(FieldRef {
                kind: FieldKind::ModelDescription,
                location: format!("{}.description", model.name),
                value: &model.description,
            });
            for property in &model.properties {
                fields.push(FieldRef {
                    kind: FieldKind::ModelPropertyDescription,
                    location: format!("{}.{}.description", model.name, property.name),
                    value: &property.description,
                });
            }
        }

        fields
    }
}

impl Listing {
    /// The description attribute, or the value attribute when it is blank.
    pub fn derived_description(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.value
        } else {
            &self.description
        }
    }
}
