//! JSON persistence for prompt trees.
//!
//! A rooted tree is stored as its root container object; a forest as an
//! array of top-level nodes. Both mirror the [`Node`] wire shape exactly.

use crate::error::{PromptError, Result};
use crate::node::{Format, Node};
use crate::tree::Tree;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Pretty-printed JSON (two-space indent).
pub fn serialize(tree: &Tree) -> Result<String> {
    serde_json::to_string_pretty(&document(tree))
        .map_err(|e| PromptError::InvalidFormat(format!("failed to serialize tree: {}", e)))
}

/// Single-line JSON.
pub fn serialize_compact(tree: &Tree) -> Result<String> {
    serde_json::to_string(&document(tree))
        .map_err(|e| PromptError::InvalidFormat(format!("failed to serialize tree: {}", e)))
}

/// Parse a tree using [`Format::Raw`] as the fallback base format.
pub fn deserialize(text: &str) -> Result<Tree> {
    deserialize_with_base(text, Format::default())
}

/// Parse a tree, falling back to `base` when the document does not fix one.
///
/// An object must be a container and yields a rooted tree whose base format
/// is the root's own concrete format. An array yields a forest.
pub fn deserialize_with_base(text: &str, base: Format) -> Result<Tree> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| PromptError::InvalidFormat(format!("invalid JSON: {}", e)))?;

    let tree = match value {
        Value::Object(_) => {
            let node: Node = serde_json::from_value(value)
                .map_err(|e| PromptError::InvalidFormat(format!("malformed root node: {}", e)))?;
            match node {
                Node::Container(root) => Tree::from_root(base, root),
                Node::Content(content) => {
                    return Err(PromptError::InvalidFormat(format!(
                        "root node '{}' must be a container",
                        content.id
                    )));
                }
            }
        }
        Value::Array(_) => {
            let nodes: Vec<Node> = serde_json::from_value(value)
                .map_err(|e| PromptError::InvalidFormat(format!("malformed node list: {}", e)))?;
            Tree::from_forest(base, nodes)
        }
        other => {
            return Err(PromptError::InvalidFormat(format!(
                "expected a container object or an array of nodes, found {}",
                json_type(&other)
            )));
        }
    };

    tree.map_err(|e| match e {
        PromptError::DuplicateId(id) => {
            PromptError::InvalidFormat(format!("node id '{}' appears more than once", id))
        }
        other => other,
    })
}

enum Document {
    Root(Node),
    Forest(Vec<Node>),
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Document::Root(node) => node.serialize(serializer),
            Document::Forest(nodes) => nodes.serialize(serializer),
        }
    }
}

fn document(tree: &Tree) -> Document {
    match tree.root().and_then(|root| tree.snapshot(root)) {
        Some(root) => Document::Root(root),
        None => Document::Forest(tree.to_nodes()),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
