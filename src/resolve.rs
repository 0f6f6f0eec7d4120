//! Effective-format resolution.
//!
//! A container storing `inherit` uses the nearest ancestor with a concrete
//! format, or the tree's base format when no ancestor has one. Nothing is
//! cached, so edits to an ancestor's format are visible immediately.

use crate::error::{PromptError, Result};
use crate::node::{Format, NodeId};
use crate::tree::Tree;

/// The concrete format container `id` renders with.
pub fn effective_format(tree: &Tree, id: &NodeId) -> Result<Format> {
    effective_format_with_base(tree, id, tree.base_format())
}

/// Like [`effective_format`], falling back to `base` instead of the tree's
/// own base format.
pub fn effective_format_with_base(tree: &Tree, id: &NodeId, base: Format) -> Result<Format> {
    let container = tree
        .get(id)
        .ok_or_else(|| PromptError::NotFound(id.clone()))?
        .as_container()
        .ok_or_else(|| PromptError::NotAContainer(id.clone()))?;

    if let Some(format) = container.format.concrete() {
        return Ok(format);
    }
    let mut current = tree.find_parent(id);
    while let Some(parent) = current {
        if let Some(format) = parent.as_container().and_then(|c| c.format.concrete()) {
            return Ok(format);
        }
        current = tree.find_parent(parent.id());
    }
    Ok(base)
}
