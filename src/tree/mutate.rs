//! Structural mutations: insert, delete, move, update.
//!
//! Every operation validates fully before touching the arena, so a failed
//! call leaves the tree exactly as it was.

use super::{ContainerPatch, ContentPatch, EntryBody, InsertTarget, Position, Tree};
use crate::error::{PromptError, Result};
use crate::node::{
    ContainerDraft, ContainerNode, ContentDraft, ContentNode, FormatSpec, IdGenerator, Node,
    NodeId, NodeKind, SourceRef,
};

impl Tree {
    /// Attach `node` (with its subtree) at `target`. Returns the node's id.
    pub fn insert(&mut self, target: &InsertTarget, node: Node) -> Result<NodeId> {
        self.check_new_ids(std::slice::from_ref(&node))?;
        let (parent, index) = self.resolve_slot(target)?;
        Ok(self.link(node, parent, index))
    }

    /// Attach several fragments at `target`, keeping their relative order.
    pub fn insert_all(&mut self, target: &InsertTarget, nodes: Vec<Node>) -> Result<Vec<NodeId>> {
        self.check_new_ids(&nodes)?;
        let (parent, index) = self.resolve_slot(target)?;
        let mut inserted = Vec::with_capacity(nodes.len());
        for (offset, node) in nodes.into_iter().enumerate() {
            inserted.push(self.link(node, parent.clone(), index + offset));
        }
        Ok(inserted)
    }

    /// Create a content node with a fresh id and attach it.
    pub fn create_content(
        &mut self,
        ids: &mut dyn IdGenerator,
        target: &InsertTarget,
        draft: ContentDraft,
    ) -> Result<NodeId> {
        let node = draft.build(ids);
        self.insert(target, node)
    }

    /// Create an empty container with a fresh id and attach it.
    pub fn create_container(
        &mut self,
        ids: &mut dyn IdGenerator,
        target: &InsertTarget,
        draft: ContainerDraft,
    ) -> Result<NodeId> {
        let node = draft.build(ids);
        self.insert(target, node)
    }

    /// Attach file text as an inheriting container named after the path,
    /// holding one content node that records the file as its source.
    ///
    /// Returns the container id.
    pub fn insert_source(
        &mut self,
        ids: &mut dyn IdGenerator,
        target: &InsertTarget,
        source_ref: SourceRef,
        text: String,
    ) -> Result<NodeId> {
        let container_id = ids.next_id();
        let content_id = ids.next_id();
        let node = Node::Container(ContainerNode {
            id: container_id,
            format: FormatSpec::Inherit,
            name: source_ref.path.clone(),
            description: None,
            children: vec![Node::Content(ContentNode {
                id: content_id,
                content: text,
                source_ref: Some(source_ref),
            })],
        });
        self.insert(target, node)
    }

    /// Remove `id` and its whole subtree, returning the removed nodes.
    pub fn delete(&mut self, id: &NodeId) -> Result<Node> {
        let entry = self
            .entries
            .get(id)
            .ok_or_else(|| PromptError::NotFound(id.clone()))?;
        if self.is_root(id) {
            return Err(PromptError::ProtectedRoot(id.clone()));
        }
        let parent = entry.parent.clone();
        let removed = self
            .snapshot(id)
            .ok_or_else(|| PromptError::NotFound(id.clone()))?;

        self.siblings_mut(parent.as_ref()).retain(|sibling| sibling != id);
        self.remove_subtree(id);
        Ok(removed)
    }

    /// Relocate `id` to `target`. The node keeps its id and contents.
    pub fn move_node(&mut self, id: &NodeId, target: &InsertTarget) -> Result<()> {
        let old_parent = self
            .entries
            .get(id)
            .ok_or_else(|| PromptError::NotFound(id.clone()))?
            .parent
            .clone();
        if self.is_root(id) {
            return Err(PromptError::ProtectedRoot(id.clone()));
        }
        if let Some(target_id) = &target.id {
            if !self.contains(target_id) {
                return Err(PromptError::NotFound(target_id.clone()));
            }
            if target_id == id || self.is_ancestor(id, target_id) {
                return Err(PromptError::CycleDetected {
                    node: id.clone(),
                    target: target_id.clone(),
                });
            }
        }

        let (new_parent, mut index) = self.resolve_slot(target)?;
        let old_index = self
            .siblings(old_parent.as_ref())
            .iter()
            .position(|sibling| sibling == id)
            .ok_or_else(|| PromptError::NotFound(id.clone()))?;
        // The slot was computed with the node still in place.
        if old_parent == new_parent && old_index < index {
            index -= 1;
        }

        self.siblings_mut(old_parent.as_ref()).remove(old_index);
        self.siblings_mut(new_parent.as_ref())
            .insert(index, id.clone());
        if let Some(entry) = self.entries.get_mut(id) {
            entry.parent = new_parent;
        }
        Ok(())
    }

    /// Shallow-merge `patch` into a content node.
    pub fn update_content(&mut self, id: &NodeId, patch: ContentPatch) -> Result<()> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| PromptError::NotFound(id.clone()))?;
        match &mut entry.body {
            EntryBody::Content(content) => {
                patch.apply(content);
                Ok(())
            }
            EntryBody::Container(_) => Err(PromptError::TypeMismatch {
                id: id.clone(),
                expected: NodeKind::Content,
                actual: NodeKind::Container,
            }),
        }
    }

    /// Shallow-merge `patch` into a container node. Children are untouched.
    ///
    /// The root of a rooted tree always keeps a concrete format, and that
    /// format is also the tree's base format.
    pub fn update_container(&mut self, id: &NodeId, patch: ContainerPatch) -> Result<()> {
        if self.is_root(id) {
            match patch.format {
                Some(FormatSpec::Inherit) => {
                    return Err(PromptError::InvalidTarget(format!(
                        "root container '{}' must keep a concrete format",
                        id
                    )));
                }
                Some(FormatSpec::Concrete(format)) => self.base_format = format,
                None => {}
            }
        }
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| PromptError::NotFound(id.clone()))?;
        match &mut entry.body {
            EntryBody::Container(container) => {
                patch.apply(container);
                Ok(())
            }
            EntryBody::Content(_) => Err(PromptError::TypeMismatch {
                id: id.clone(),
                expected: NodeKind::Container,
                actual: NodeKind::Content,
            }),
        }
    }

    /// Replace `id` with a fresh default node of `kind` at the same position.
    ///
    /// Kinds never change in place: the replacement gets a new id and the old
    /// subtree is discarded. Asking for the node's current kind is a no-op
    /// that returns the existing id.
    pub fn replace_kind(
        &mut self,
        ids: &mut dyn IdGenerator,
        id: &NodeId,
        kind: NodeKind,
    ) -> Result<NodeId> {
        let entry = self
            .entries
            .get(id)
            .ok_or_else(|| PromptError::NotFound(id.clone()))?;
        if entry.kind() == kind {
            return Ok(id.clone());
        }
        if self.is_root(id) {
            return Err(PromptError::ProtectedRoot(id.clone()));
        }
        let parent = entry.parent.clone();
        let index = self
            .siblings(parent.as_ref())
            .iter()
            .position(|sibling| sibling == id)
            .ok_or_else(|| PromptError::NotFound(id.clone()))?;

        let replacement = match kind {
            NodeKind::Content => ContentDraft::default().build(ids),
            NodeKind::Container => ContainerDraft::default().build(ids),
        };
        self.check_new_ids(std::slice::from_ref(&replacement))?;

        self.siblings_mut(parent.as_ref()).remove(index);
        self.remove_subtree(id);
        Ok(self.link(replacement, parent, index))
    }

    /// Parent and child index a target refers to.
    fn resolve_slot(&self, target: &InsertTarget) -> Result<(Option<NodeId>, usize)> {
        let Some(target_id) = &target.id else {
            // Top level of a rooted tree is the inside of its root.
            let parent = self.root.clone();
            let index = match target.position {
                Position::Before => 0,
                Position::After | Position::Inside => self.siblings(parent.as_ref()).len(),
            };
            return Ok((parent, index));
        };

        let entry = self
            .entries
            .get(target_id)
            .ok_or_else(|| PromptError::NotFound(target_id.clone()))?;

        match target.position {
            Position::Inside => match &entry.body {
                EntryBody::Container(container) => {
                    Ok((Some(target_id.clone()), container.children.len()))
                }
                EntryBody::Content(_) => Err(PromptError::InvalidTarget(format!(
                    "cannot insert inside content node '{}'",
                    target_id
                ))),
            },
            Position::Before | Position::After => {
                if self.is_root(target_id) {
                    return Err(PromptError::InvalidTarget(format!(
                        "cannot insert {} the root container '{}'",
                        target.position, target_id
                    )));
                }
                let parent = entry.parent.clone();
                let offset = self
                    .siblings(parent.as_ref())
                    .iter()
                    .position(|sibling| sibling == target_id)
                    .ok_or_else(|| PromptError::NotFound(target_id.clone()))?;
                let index = if target.position == Position::Before {
                    offset
                } else {
                    offset + 1
                };
                Ok((parent, index))
            }
        }
    }

    fn link(&mut self, node: Node, parent: Option<NodeId>, index: usize) -> NodeId {
        let id = self.attach_subtree(node, parent.clone());
        self.siblings_mut(parent.as_ref()).insert(index, id.clone());
        id
    }
}
