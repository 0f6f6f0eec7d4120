//! Command implementations for promptree.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command that edits a tree follows the same cycle:
//! load the file, apply one engine operation, write the file back atomically.
//! A failed operation leaves the file untouched.

mod add;
mod edit;
mod new;
mod render;
mod show;

use crate::cli::{Command, TargetArgs};
use crate::config::Config;
use crate::error::Result;
use crate::fs::{load_tree, save_tree};
use crate::node::{IdGenerator, NodeId};
use crate::tree::{InsertTarget, Tree};
use std::path::Path;
use tracing::debug;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(config: &Config, command: Command) -> Result<()> {
    match command {
        Command::New(args) => new::cmd_new(config, args),
        Command::AddText(args) => add::cmd_add_text(config, args),
        Command::AddContainer(args) => add::cmd_add_container(config, args),
        Command::AddTemplate(args) => add::cmd_add_template(config, args),
        Command::AddFile(args) => add::cmd_add_file(config, args),
        Command::Move(args) => edit::cmd_move(config, args),
        Command::Delete(args) => edit::cmd_delete(config, args),
        Command::Update(args) => edit::cmd_update(config, args),
        Command::Show(args) => show::cmd_show(config, args),
        Command::Render(args) => render::cmd_render(config, args),
        Command::Tokenize(args) => render::cmd_tokenize(config, args),
    }
}

/// Load a tree file with the configured base format.
fn open_tree(config: &Config, path: &Path) -> Result<Tree> {
    let tree = load_tree(path, config.default_format)?;
    debug!(
        path = %path.display(),
        nodes = tree.len(),
        layout = ?tree.layout(),
        "loaded tree"
    );
    Ok(tree)
}

/// Apply `edit` to the tree stored at `path` and save it.
///
/// Nothing is written when `edit` fails.
fn edit_tree<T>(
    config: &Config,
    path: &Path,
    edit: impl FnOnce(&mut Tree, &mut dyn IdGenerator) -> Result<T>,
) -> Result<T> {
    let mut tree = open_tree(config, path)?;
    let mut ids = config.id_generator(&tree);
    let outcome = edit(&mut tree, ids.as_mut())?;
    save_tree(path, &tree, config.pretty_json)?;
    debug!(path = %path.display(), nodes = tree.len(), "saved tree");
    Ok(outcome)
}

fn insert_target(args: &TargetArgs) -> InsertTarget {
    InsertTarget {
        id: args.target.as_deref().map(NodeId::from),
        position: args.position,
    }
}
