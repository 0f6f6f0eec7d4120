//! Implementation of the `render` and `tokenize` commands.

use super::open_tree;
use crate::cli::{RenderArgs, TokenizeArgs};
use crate::config::Config;
use crate::error::{PromptError, Result};
use crate::fs::atomic_write_file;
use crate::node::NodeId;
use crate::render::{render, render_node};
use crate::template::tokenize;
use crate::tree::Tree;
use tracing::info;

/// Execute the `promptree render` command.
///
/// Writes the rendered text to `--output` when given, otherwise to stdout.
pub fn cmd_render(config: &Config, args: RenderArgs) -> Result<()> {
    let tree = open_tree(config, &args.file)?;
    let text = render_text(&tree, &args)?;

    match &args.output {
        Some(output) => {
            atomic_write_file(output, &text)?;
            info!(path = %output.display(), bytes = text.len(), "wrote rendered prompt");
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn render_text(tree: &Tree, args: &RenderArgs) -> Result<String> {
    let base = args.format.unwrap_or(tree.base_format());
    match &args.node {
        Some(id) => render_node(tree, &NodeId::from(id.as_str()), base),
        None => Ok(render(tree, base)),
    }
}

/// Execute the `promptree tokenize` command.
///
/// Prints the fragments as a JSON array of nodes without touching any file.
pub fn cmd_tokenize(config: &Config, args: TokenizeArgs) -> Result<()> {
    let mut ids = config.id_generator(&Tree::forest(config.default_format));
    let fragments = tokenize(&args.template, ids.as_mut());
    let json = serde_json::to_string_pretty(&fragments)
        .map_err(|e| PromptError::InvalidFormat(format!("failed to encode fragments: {}", e)))?;
    println!("{}", json);
    Ok(())
}
