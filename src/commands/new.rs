//! Implementation of the `promptree new` command.

use crate::cli::NewArgs;
use crate::config::Config;
use crate::error::{PromptError, Result};
use crate::fs::save_tree;
use crate::node::IdGenerator;
use crate::tree::{Layout, Tree};
use tracing::info;

/// Execute the `promptree new` command.
///
/// Refuses to overwrite an existing file unless `--force` is given.
pub fn cmd_new(config: &Config, args: NewArgs) -> Result<()> {
    if args.file.exists() && !args.force {
        return Err(PromptError::UserError(format!(
            "'{}' already exists (use --force to overwrite)",
            args.file.display()
        )));
    }

    let format = args.format.unwrap_or(config.default_format);
    let layout = if args.forest {
        Layout::Forest
    } else {
        config.layout
    };

    let tree = match layout {
        Layout::Forest => Tree::forest(format),
        Layout::Rooted => {
            let root_name = args.root_name.unwrap_or_else(|| config.root_name.clone());
            if root_name.trim().is_empty() {
                return Err(PromptError::UserError(
                    "root name must be non-empty".to_string(),
                ));
            }
            let root_id = config.id_generator(&Tree::forest(format)).next_id();
            Tree::rooted(root_id, root_name, format)
        }
    };

    save_tree(&args.file, &tree, config.pretty_json)?;
    info!(path = %args.file.display(), ?layout, %format, "created tree");

    match tree.root() {
        Some(root) => println!("Created {} (root {})", args.file.display(), root),
        None => println!("Created {} (empty forest)", args.file.display()),
    }
    Ok(())
}
