//! Prompt tree storage.
//!
//! A [`Tree`] keeps its nodes in an arena keyed by [`NodeId`]. Each entry
//! records its parent, and containers store an ordered list of child ids.
//! Mutations replace an entry and patch its parent's child list, so there is
//! no recursive rebuilding of owned subtrees.
//!
//! Two layouts are supported:
//!
//! - **Rooted**: a single engine-owned root container that can never be
//!   deleted or moved. Everything else lives below it.
//! - **Forest**: a bare ordered list of top-level nodes.
//!
//! Owned [`Node`] values are the exchange format: fragments go in through
//! [`Tree::insert`], and [`Tree::snapshot`] copies a subtree back out.

mod locate;
mod mutate;
mod patch;
mod target;


pub use locate::Located;
pub use patch::{ContainerPatch, ContentPatch};
pub use target::{InsertTarget, Position};

use crate::error::{PromptError, Result};
use crate::node::{
    ContainerNode, ContentNode, Format, FormatSpec, Node, NodeId, NodeKind, SourceRef,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Which embedding a tree uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Rooted,
    Forest,
}

/// Arena entry for a content node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    pub content: String,
    pub source_ref: Option<SourceRef>,
}

/// Arena entry for a container node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerEntry {
    pub format: FormatSpec,
    pub name: String,
    pub description: Option<String>,
    children: Vec<NodeId>,
}

impl ContainerEntry {
    /// Child ids in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryBody {
    Content(ContentEntry),
    Container(ContainerEntry),
}

/// One node in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: NodeId,
    parent: Option<NodeId>,
    body: EntryBody,
}

impl Entry {
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Parent container, `None` for top-level nodes.
    pub fn parent(&self) -> Option<&NodeId> {
        self.parent.as_ref()
    }

    pub fn body(&self) -> &EntryBody {
        &self.body
    }

    pub fn kind(&self) -> NodeKind {
        match self.body {
            EntryBody::Content(_) => NodeKind::Content,
            EntryBody::Container(_) => NodeKind::Container,
        }
    }

    pub fn as_content(&self) -> Option<&ContentEntry> {
        match &self.body {
            EntryBody::Content(content) => Some(content),
            EntryBody::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&ContainerEntry> {
        match &self.body {
            EntryBody::Container(container) => Some(container),
            EntryBody::Content(_) => None,
        }
    }
}

/// An ordered forest of prompt nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<NodeId, Entry>,
    top_level: Vec<NodeId>,
    root: Option<NodeId>,
    base_format: Format,
}

impl Tree {
    /// Empty forest.
    pub fn forest(base_format: Format) -> Self {
        Self {
            entries: BTreeMap::new(),
            top_level: Vec::new(),
            root: None,
            base_format,
        }
    }

    /// Tree with a single, empty root container rendered in `format`.
    pub fn rooted(root_id: NodeId, root_name: impl Into<String>, format: Format) -> Self {
        let root = Node::Container(ContainerNode {
            id: root_id,
            format: FormatSpec::Concrete(format),
            name: root_name.into(),
            description: None,
            children: Vec::new(),
        });
        let mut tree = Self::forest(format);
        let id = tree.attach_subtree(root, None);
        tree.top_level.push(id.clone());
        tree.root = Some(id);
        tree
    }

    /// Forest built from owned top-level nodes.
    pub fn from_forest(base_format: Format, nodes: Vec<Node>) -> Result<Self> {
        let mut tree = Self::forest(base_format);
        tree.check_new_ids(&nodes)?;
        for node in nodes {
            let id = tree.attach_subtree(node, None);
            tree.top_level.push(id);
        }
        Ok(tree)
    }

    /// Rooted tree adopting an existing container as its root.
    ///
    /// A root that stores `inherit` renders with `base_format`.
    pub fn from_root(base_format: Format, root: ContainerNode) -> Result<Self> {
        let base_format = root.format.resolve(base_format);
        let mut tree = Self::forest(base_format);
        let root = Node::Container(root);
        tree.check_new_ids(std::slice::from_ref(&root))?;
        let id = tree.attach_subtree(root, None);
        tree.top_level.push(id.clone());
        tree.root = Some(id);
        Ok(tree)
    }

    pub fn layout(&self) -> Layout {
        if self.root.is_some() {
            Layout::Rooted
        } else {
            Layout::Forest
        }
    }

    /// The distinguished root container, if the tree is rooted.
    pub fn root(&self) -> Option<&NodeId> {
        self.root.as_ref()
    }

    pub fn is_root(&self, id: &NodeId) -> bool {
        self.root.as_ref() == Some(id)
    }

    /// Format used when no ancestor resolves one.
    pub fn base_format(&self) -> Format {
        self.base_format
    }

    pub fn set_base_format(&mut self, format: Format) {
        self.base_format = format;
    }

    /// Top-level node ids in document order.
    pub fn top_level(&self) -> &[NodeId] {
        &self.top_level
    }

    pub fn get(&self, id: &NodeId) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject fragments whose ids collide with the tree or with each other.
    fn check_new_ids(&self, nodes: &[Node]) -> Result<()> {
        let mut seen = HashSet::new();
        for node in nodes {
            for id in node.subtree_ids() {
                if self.entries.contains_key(id) || !seen.insert(id) {
                    return Err(PromptError::DuplicateId(id.clone()));
                }
            }
        }
        Ok(())
    }

    /// Move an owned subtree into the arena. Ids must already be checked.
    fn attach_subtree(&mut self, node: Node, parent: Option<NodeId>) -> NodeId {
        match node {
            Node::Content(ContentNode {
                id,
                content,
                source_ref,
            }) => {
                self.entries.insert(
                    id.clone(),
                    Entry {
                        id: id.clone(),
                        parent,
                        body: EntryBody::Content(ContentEntry {
                            content,
                            source_ref,
                        }),
                    },
                );
                id
            }
            Node::Container(ContainerNode {
                id,
                format,
                name,
                description,
                children,
            }) => {
                let child_ids = children
                    .into_iter()
                    .map(|child| self.attach_subtree(child, Some(id.clone())))
                    .collect();
                self.entries.insert(
                    id.clone(),
                    Entry {
                        id: id.clone(),
                        parent,
                        body: EntryBody::Container(ContainerEntry {
                            format,
                            name,
                            description,
                            children: child_ids,
                        }),
                    },
                );
                id
            }
        }
    }

    /// Drop `id` and its descendants from the arena (not from sibling lists).
    fn remove_subtree(&mut self, id: &NodeId) {
        let mut stack = vec![id.clone()];
        while let Some(next) = stack.pop() {
            if let Some(entry) = self.entries.remove(&next)
                && let EntryBody::Container(container) = entry.body
            {
                stack.extend(container.children);
            }
        }
    }

    /// The child list holding `parent`'s children, or the top-level list.
    fn siblings(&self, parent: Option<&NodeId>) -> &[NodeId] {
        match parent.and_then(|id| self.entries.get(id)) {
            Some(Entry {
                body: EntryBody::Container(container),
                ..
            }) => &container.children,
            _ => &self.top_level,
        }
    }

    fn siblings_mut(&mut self, parent: Option<&NodeId>) -> &mut Vec<NodeId> {
        match parent.and_then(|id| self.entries.get_mut(id)) {
            Some(Entry {
                body: EntryBody::Container(container),
                ..
            }) => &mut container.children,
            _ => &mut self.top_level,
        }
    }
}
