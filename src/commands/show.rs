//! Implementation of the `promptree show` command.
//!
//! Without an id, prints an indented outline of the whole tree followed by
//! the open template placeholders. With an id, prints that node's fields,
//! its ancestor path, and the format it renders with.

use super::open_tree;
use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::{PromptError, Result};
use crate::node::NodeId;
use crate::resolve::effective_format;
use crate::template::placeholders;
use crate::tree::{EntryBody, Layout, Tree};

/// Longest content preview shown in the outline, in characters.
const PREVIEW_CHARS: usize = 40;

/// Execute the `promptree show` command.
pub fn cmd_show(config: &Config, args: ShowArgs) -> Result<()> {
    let tree = open_tree(config, &args.file)?;
    let text = match args.id {
        Some(id) => describe(&tree, &NodeId::from(id))?,
        None => outline(&tree),
    };
    print!("{}", text);
    Ok(())
}

/// Indented outline, one node per line.
pub(crate) fn outline(tree: &Tree) -> String {
    let mut out = String::new();
    let layout = match tree.layout() {
        Layout::Rooted => "rooted",
        Layout::Forest => "forest",
    };
    out.push_str(&format!(
        "{} tree, {} node{}, base format {}\n",
        layout,
        tree.len(),
        if tree.len() == 1 { "" } else { "s" },
        tree.base_format()
    ));

    for entry in tree.depth_first() {
        let indent = "  ".repeat(tree.ancestors(entry.id()).len());
        match entry.body() {
            EntryBody::Content(content) => {
                out.push_str(&format!(
                    "{}{} content \"{}\"\n",
                    indent,
                    entry.id(),
                    preview(&content.content)
                ));
            }
            EntryBody::Container(container) => {
                let format = match effective_format(tree, entry.id()) {
                    Ok(effective) if container.format.is_inherit() => {
                        format!("inherit -> {}", effective)
                    }
                    _ => container.format.to_string(),
                };
                out.push_str(&format!(
                    "{}{} container '{}' [{}]\n",
                    indent,
                    entry.id(),
                    container.name,
                    format
                ));
            }
        }
    }

    let open = placeholders(tree);
    if !open.is_empty() {
        let names: Vec<String> = open
            .iter()
            .filter_map(|id| tree.container(id).map(|c| format!("{} ({})", c.name, id)))
            .collect();
        out.push_str(&format!("\nOpen placeholders: {}\n", names.join(", ")));
    }
    out
}

/// Fields of one node.
pub(crate) fn describe(tree: &Tree, id: &NodeId) -> Result<String> {
    let located = tree
        .find(id)
        .ok_or_else(|| PromptError::NotFound(id.clone()))?;
    let entry = located.entry;

    let mut out = format!("Id:         {}\n", entry.id());
    out.push_str(&format!("Kind:       {}\n", entry.kind()));

    let path: Vec<&str> = located.ancestors.iter().map(|a| a.as_str()).collect();
    if path.is_empty() {
        out.push_str("Parent:     (top level)\n");
    } else {
        out.push_str(&format!("Path:       {}\n", path.join(" > ")));
    }

    match entry.body() {
        EntryBody::Content(content) => {
            if let Some(source) = &content.source_ref {
                out.push_str(&format!("Source:     {} ({})\n", source.path, source.media_type));
            }
            out.push('\n');
            out.push_str(&content.content);
            out.push('\n');
        }
        EntryBody::Container(container) => {
            if tree.is_root(id) {
                out.push_str("Root:       yes\n");
            }
            out.push_str(&format!("Name:       {}\n", container.name));
            out.push_str(&format!("Format:     {}\n", container.format));
            out.push_str(&format!("Renders as: {}\n", effective_format(tree, id)?));
            if let Some(description) = &container.description {
                out.push_str(&format!("About:      {}\n", description));
            }
            out.push_str(&format!("Children:   {}\n", container.children().len()));
        }
    }
    Ok(out)
}

/// First line of `text`, cut to [`PREVIEW_CHARS`] characters.
fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or("");
    let mut short: String = line.chars().take(PREVIEW_CHARS).collect();
    if short.len() < line.len() || text.lines().nth(1).is_some() {
        short.push_str("...");
    }
    short
}
