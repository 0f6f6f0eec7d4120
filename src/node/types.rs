//! Node model types.

use crate::error::{PromptError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use super::ids::IdGenerator;

/// Identifier of a node, unique within one tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Concrete rendering strategy of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Format {
    Xml,
    Markdown,
    Numbered,
    #[default]
    Raw,
}

impl Format {
    /// All concrete formats, in declaration order.
    pub const ALL: [Format; 4] = [Format::Xml, Format::Markdown, Format::Numbered, Format::Raw];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Markdown => "markdown",
            Format::Numbered => "numbered",
            Format::Raw => "raw",
        }
    }

    /// Parse a format name, accepting the legacy `md` and `numbered-md`
    /// spellings found in older documents.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "xml" => Some(Self::Xml),
            "markdown" | "md" => Some(Self::Markdown),
            "numbered" | "numbered-md" => Some(Self::Numbered),
            "raw" => Some(Self::Raw),
            _ => None,
        }
    }

    /// Comma-separated names of [`Format::ALL`], for error messages.
    fn names() -> String {
        Format::ALL.map(|format| format.as_str()).join(", ")
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| {
            PromptError::UserError(format!(
                "unknown format '{}' (expected one of: {})",
                s,
                Format::names()
            ))
        })
    }
}

// Documents may carry format names this build does not know; they render as raw.
impl From<String> for Format {
    fn from(s: String) -> Self {
        Self::parse(&s).unwrap_or(Self::Raw)
    }
}

impl From<Format> for String {
    fn from(format: Format) -> Self {
        format.as_str().to_string()
    }
}

/// Format as stored on a container: concrete, or inherited from ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FormatSpec {
    #[default]
    Inherit,
    Concrete(Format),
}

impl FormatSpec {
    pub fn concrete(&self) -> Option<Format> {
        match self {
            FormatSpec::Inherit => None,
            FormatSpec::Concrete(format) => Some(*format),
        }
    }

    pub fn is_inherit(&self) -> bool {
        matches!(self, FormatSpec::Inherit)
    }

    /// Resolve against the format in effect for the parent.
    pub fn resolve(&self, inherited: Format) -> Format {
        self.concrete().unwrap_or(inherited)
    }
}

impl From<Format> for FormatSpec {
    fn from(format: Format) -> Self {
        FormatSpec::Concrete(format)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatSpec::Inherit => f.write_str("inherit"),
            FormatSpec::Concrete(format) => format.fmt(f),
        }
    }
}

impl FromStr for FormatSpec {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "inherit" {
            return Ok(FormatSpec::Inherit);
        }
        Format::from_str(s).map(FormatSpec::Concrete).map_err(|_| {
            PromptError::UserError(format!(
                "unknown format '{}' (expected one of: inherit, {})",
                s,
                Format::names()
            ))
        })
    }
}

impl From<String> for FormatSpec {
    fn from(s: String) -> Self {
        if s == "inherit" {
            FormatSpec::Inherit
        } else {
            FormatSpec::Concrete(Format::from(s))
        }
    }
}

impl From<FormatSpec> for String {
    fn from(spec: FormatSpec) -> Self {
        spec.to_string()
    }
}

/// The two node variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Content,
    Container,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Content => f.write_str("content"),
            NodeKind::Container => f.write_str("container"),
        }
    }
}

/// Provenance of a content node that was seeded from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRef {
    pub path: String,
    pub media_type: String,
}

/// Leaf node holding literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    pub id: NodeId,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<SourceRef>,
}

/// Named, formatted grouping of child nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerNode {
    pub id: NodeId,
    pub format: FormatSpec,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub children: Vec<Node>,
}

/// An owned node together with its whole subtree.
///
/// This is the shape fragments, snapshots, and serialized documents take.
/// Inside a [`Tree`](crate::tree::Tree) nodes live in an arena instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    #[serde(alias = "text", alias = "file")]
    Content(ContentNode),
    Container(ContainerNode),
}

impl Node {
    /// New content node with a fresh id.
    pub fn content(ids: &mut dyn IdGenerator, content: impl Into<String>) -> Self {
        ContentDraft::text(content).build(ids)
    }

    /// New empty container with a fresh id.
    pub fn container(
        ids: &mut dyn IdGenerator,
        name: impl Into<String>,
        format: impl Into<FormatSpec>,
    ) -> Self {
        ContainerDraft {
            name: name.into(),
            format: format.into(),
            description: None,
        }
        .build(ids)
    }

    pub fn id(&self) -> &NodeId {
        match self {
            Node::Content(node) => &node.id,
            Node::Container(node) => &node.id,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Content(_) => NodeKind::Content,
            Node::Container(_) => NodeKind::Container,
        }
    }

    pub fn as_content(&self) -> Option<&ContentNode> {
        match self {
            Node::Content(node) => Some(node),
            Node::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&ContainerNode> {
        match self {
            Node::Container(node) => Some(node),
            Node::Content(_) => None,
        }
    }

    /// Ids of this node and every descendant, depth-first.
    pub fn subtree_ids(&self) -> Vec<&NodeId> {
        let mut ids = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            ids.push(node.id());
            if let Node::Container(container) = node {
                stack.extend(container.children.iter().rev());
            }
        }
        ids
    }
}

/// Caller-supplied fields for a new content node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentDraft {
    pub content: String,
    pub source_ref: Option<SourceRef>,
}

impl ContentDraft {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source_ref: None,
        }
    }

    /// Stamp a fresh id and produce the node.
    pub fn build(self, ids: &mut dyn IdGenerator) -> Node {
        Node::Content(ContentNode {
            id: ids.next_id(),
            content: self.content,
            source_ref: self.source_ref,
        })
    }
}

/// Default name given to containers created without one.
pub const DEFAULT_CONTAINER_NAME: &str = "new-container";

/// Caller-supplied fields for a new container node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerDraft {
    pub format: FormatSpec,
    pub name: String,
    pub description: Option<String>,
}

impl Default for ContainerDraft {
    fn default() -> Self {
        Self {
            format: FormatSpec::Inherit,
            name: DEFAULT_CONTAINER_NAME.to_string(),
            description: None,
        }
    }
}

impl ContainerDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<FormatSpec>) -> Self {
        self.format = format.into();
        self
    }

    /// Stamp a fresh id and produce an empty container.
    pub fn build(self, ids: &mut dyn IdGenerator) -> Node {
        Node::Container(ContainerNode {
            id: ids.next_id(),
            format: self.format,
            name: self.name,
            description: self.description,
            children: Vec::new(),
        })
    }
}
