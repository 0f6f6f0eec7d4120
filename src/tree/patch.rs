//! Shallow patches for node updates.
//!
//! Patches can only name editable fields, so `id`, kind, and a container's
//! children survive every update untouched.

use super::{ContainerEntry, ContentEntry};
use crate::node::{FormatSpec, SourceRef};
use serde::Deserialize;

/// Fields of a content node that may be replaced.
///
/// `source_ref: Some(None)` clears the provenance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentPatch {
    pub content: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub source_ref: Option<Option<SourceRef>>,
}

impl ContentPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.source_ref.is_none()
    }

    pub(crate) fn apply(self, entry: &mut ContentEntry) {
        if let Some(content) = self.content {
            entry.content = content;
        }
        if let Some(source_ref) = self.source_ref {
            entry.source_ref = source_ref;
        }
    }
}

/// Fields of a container node that may be replaced.
///
/// `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContainerPatch {
    pub format: Option<FormatSpec>,
    pub name: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl ContainerPatch {
    pub fn is_empty(&self) -> bool {
        self.format.is_none() && self.name.is_none() && self.description.is_none()
    }

    pub(crate) fn apply(self, entry: &mut ContainerEntry) {
        if let Some(format) = self.format {
            entry.format = format;
        }
        if let Some(name) = self.name {
            entry.name = name;
        }
        if let Some(description) = self.description {
            entry.description = description;
        }
    }
}

// Distinguishes an absent field (no change) from an explicit null (clear).
fn double_option<'de, T, D>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
