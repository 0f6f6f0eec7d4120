//! Implementation of the `move`, `delete`, and `update` commands.

use super::{edit_tree, insert_target};
use crate::cli::{DeleteArgs, MoveArgs, UpdateArgs};
use crate::config::Config;
use crate::error::{PromptError, Result};
use crate::node::NodeId;
use crate::tree::{ContainerPatch, ContentPatch};
use tracing::info;

/// Execute the `promptree move` command.
pub fn cmd_move(config: &Config, args: MoveArgs) -> Result<()> {
    let id = NodeId::from(args.id);
    let target = insert_target(&args.target);

    edit_tree(config, &args.file, |tree, _| tree.move_node(&id, &target))?;

    info!(%id, target = ?target.id, position = %target.position, "moved node");
    println!("Moved {}", id);
    Ok(())
}

/// Execute the `promptree delete` command.
pub fn cmd_delete(config: &Config, args: DeleteArgs) -> Result<()> {
    let id = NodeId::from(args.id);

    let removed = edit_tree(config, &args.file, |tree, _| tree.delete(&id))?;

    let count = removed.subtree_ids().len();
    info!(%id, count, "deleted node");
    println!("Deleted {} ({} node{})", id, count, if count == 1 { "" } else { "s" });
    Ok(())
}

/// Execute the `promptree update` command.
///
/// With `--kind`, the node is replaced by a fresh node of that kind and the
/// new id is printed. Otherwise the given fields are merged into the node;
/// content fields on a container (or the reverse) are a type mismatch.
/// Mixing content and container fields is rejected before the file is read.
pub fn cmd_update(config: &Config, args: UpdateArgs) -> Result<()> {
    let id = NodeId::from(args.id.clone());

    if let Some(kind) = args.kind {
        let new_id = edit_tree(config, &args.file, |tree, ids| {
            tree.replace_kind(ids, &id, kind)
        })?;
        info!(old = %id, new = %new_id, %kind, "replaced node kind");
        println!("{}", new_id);
        return Ok(());
    }

    let edit = Edit::from_args(&args)?;
    edit_tree(config, &args.file, |tree, _| match edit {
        Edit::Content(patch) => tree.update_content(&id, patch),
        Edit::Container(patch) => tree.update_container(&id, patch),
    })?;

    info!(%id, "updated node");
    println!("Updated {}", id);
    Ok(())
}

enum Edit {
    Content(ContentPatch),
    Container(ContainerPatch),
}

impl Edit {
    fn from_args(args: &UpdateArgs) -> Result<Self> {
        let description = match (&args.description, args.clear_description) {
            (Some(text), _) => Some(Some(text.clone())),
            (None, true) => Some(None),
            (None, false) => None,
        };
        let container = ContainerPatch {
            format: args.format,
            name: args.name.clone(),
            description,
        };

        match (&args.content, container.is_empty()) {
            (None, true) => Err(PromptError::UserError(
                "nothing to update (give --content, --name, --format, --description, or --kind)"
                    .to_string(),
            )),
            (Some(content), true) => Ok(Edit::Content(ContentPatch::content(content.clone()))),
            (None, false) => Ok(Edit::Container(container)),
            (Some(_), false) => Err(PromptError::UserError(
                "--content applies to content nodes and cannot be combined with container fields"
                    .to_string(),
            )),
        }
    }
}
