//! Read-only traversal: lookup, parents, ancestor paths, snapshots.

use super::{ContainerEntry, Entry, EntryBody, Tree};
use crate::node::{ContainerNode, ContentNode, Node, NodeId};

/// A node found in the tree together with its ancestor path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<'a> {
    pub entry: &'a Entry,
    /// Ancestor ids from the top level down to the immediate parent.
    pub ancestors: Vec<&'a NodeId>,
}

impl Tree {
    /// Find a node and the ancestors leading to it.
    pub fn find(&self, id: &NodeId) -> Option<Located<'_>> {
        let entry = self.entries.get(id)?;
        Some(Located {
            entry,
            ancestors: self.ancestors(id),
        })
    }

    /// Parent container of `id`.
    ///
    /// `None` both for top-level nodes and for ids not in the tree; use
    /// [`Tree::find`] first to tell the two apart.
    pub fn find_parent(&self, id: &NodeId) -> Option<&Entry> {
        let parent_id = self.entries.get(id)?.parent.as_ref()?;
        self.entries.get(parent_id)
    }

    /// Container fields of `id`, if it is a container.
    pub fn container(&self, id: &NodeId) -> Option<&ContainerEntry> {
        self.entries.get(id)?.as_container()
    }

    /// Ancestor ids of `id`, outermost first. Empty for top-level or missing nodes.
    pub fn ancestors(&self, id: &NodeId) -> Vec<&NodeId> {
        let mut path = Vec::new();
        let mut current = self.entries.get(id).and_then(|entry| entry.parent.as_ref());
        while let Some(parent_id) = current {
            path.push(parent_id);
            current = self
                .entries
                .get(parent_id)
                .and_then(|entry| entry.parent.as_ref());
        }
        path.reverse();
        path
    }

    /// Whether `ancestor` lies strictly above `id`.
    pub fn is_ancestor(&self, ancestor: &NodeId, id: &NodeId) -> bool {
        let mut current = self.entries.get(id).and_then(|entry| entry.parent.as_ref());
        while let Some(parent_id) = current {
            if parent_id == ancestor {
                return true;
            }
            current = self
                .entries
                .get(parent_id)
                .and_then(|entry| entry.parent.as_ref());
        }
        false
    }

    /// Every entry in document order (depth-first, children in stored order).
    pub fn depth_first(&self) -> Vec<&Entry> {
        let mut order = Vec::with_capacity(self.entries.len());
        let mut stack: Vec<&NodeId> = self.top_level.iter().rev().collect();
        while let Some(id) = stack.pop() {
            let Some(entry) = self.entries.get(id) else {
                continue;
            };
            order.push(entry);
            if let EntryBody::Container(container) = &entry.body {
                stack.extend(container.children.iter().rev());
            }
        }
        order
    }

    /// Owned copy of the subtree rooted at `id`.
    pub fn snapshot(&self, id: &NodeId) -> Option<Node> {
        let entry = self.entries.get(id)?;
        let node = match &entry.body {
            EntryBody::Content(content) => Node::Content(ContentNode {
                id: entry.id.clone(),
                content: content.content.clone(),
                source_ref: content.source_ref.clone(),
            }),
            EntryBody::Container(container) => Node::Container(ContainerNode {
                id: entry.id.clone(),
                format: container.format,
                name: container.name.clone(),
                description: container.description.clone(),
                children: container
                    .children
                    .iter()
                    .filter_map(|child| self.snapshot(child))
                    .collect(),
            }),
        };
        Some(node)
    }

    /// Owned copies of all top-level subtrees.
    pub fn to_nodes(&self) -> Vec<Node> {
        self.top_level
            .iter()
            .filter_map(|id| self.snapshot(id))
            .collect()
    }
}
