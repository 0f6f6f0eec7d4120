//! Tree-to-string rendering.
//!
//! Rendering is depth-first and left to right. Content nodes are emitted
//! verbatim; containers wrap their rendered children according to their
//! effective format:
//!
//! | format     | output                                                 |
//! |------------|--------------------------------------------------------|
//! | `xml`      | `<name>` + children concatenated + `</name>`           |
//! | `markdown` | `#`×depth + ` name`, newline, children joined by `\n`  |
//! | `numbered` | `1. child`, `2. child`, ... joined by `\n`             |
//! | `raw`      | children concatenated                                  |
//!
//! Markdown depth comes from a level path that restarts at `[1]` whenever a
//! container's format differs from its parent's, and grows by one entry per
//! nested container of the same format.

mod frame;


use crate::error::{PromptError, Result};
use crate::node::{Format, Node, NodeId};
use crate::resolve::effective_format_with_base;
use crate::tree::{ContainerEntry, EntryBody, Tree};
use frame::frame;

/// Render the whole tree with `base` as the top-level format.
///
/// Top-level nodes are joined with newlines; top-level content nodes are
/// additionally preceded by a newline.
pub fn render(tree: &Tree, base: Format) -> String {
    let renderer = Renderer { tree };
    let mut parts = Vec::with_capacity(tree.top_level().len());
    let mut position = 0;
    for id in tree.top_level() {
        let Some(entry) = tree.get(id) else {
            continue;
        };
        match entry.body() {
            EntryBody::Content(content) => parts.push(format!("\n{}", content.content)),
            EntryBody::Container(container) => {
                position += 1;
                parts.push(renderer.container(container, base, vec![position]));
            }
        }
    }
    parts.join("\n")
}

/// Render a single node and its subtree.
///
/// An inheriting container picks up its ancestors' format, so rendering a
/// subtree matches how it appears inside the full render.
pub fn render_node(tree: &Tree, id: &NodeId, base: Format) -> Result<String> {
    let entry = tree
        .get(id)
        .ok_or_else(|| PromptError::NotFound(id.clone()))?;
    match entry.body() {
        EntryBody::Content(content) => Ok(content.content.clone()),
        EntryBody::Container(container) => {
            let inherited = match entry.parent() {
                Some(parent) => effective_format_with_base(tree, parent, base)?,
                None => base,
            };
            Ok(Renderer { tree }.container(container, inherited, vec![1]))
        }
    }
}

/// Render a forest of detached nodes, such as tokenizer output.
///
/// Fails with `DuplicateId` if the nodes reuse ids.
pub fn render_nodes(nodes: &[Node], base: Format) -> Result<String> {
    let tree = Tree::from_forest(base, nodes.to_vec())?;
    Ok(render(&tree, base))
}

impl Tree {
    /// Render with the tree's own base format.
    pub fn render(&self) -> String {
        render(self, self.base_format())
    }
}

struct Renderer<'a> {
    tree: &'a Tree,
}

impl Renderer<'_> {
    fn container(&self, container: &ContainerEntry, parent_format: Format, level: Vec<usize>) -> String {
        let format = container.format.resolve(parent_format);
        let level = if format != parent_format { vec![1] } else { level };

        let mut sublevel = 0;
        let children = container
            .children()
            .iter()
            .filter_map(|child| self.tree.get(child))
            .map(|child| match child.body() {
                EntryBody::Content(content) => content.content.clone(),
                EntryBody::Container(inner) => {
                    sublevel += 1;
                    let mut child_level = level.clone();
                    child_level.push(sublevel);
                    self.container(inner, format, child_level)
                }
            })
            .collect();

        frame(format, &container.name, level.len()).wrap(children)
    }
}
