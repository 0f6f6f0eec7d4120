//! Tree documents on disk.

use super::atomic::atomic_write_file;
use crate::error::{PromptError, Result};
use crate::node::Format;
use crate::serialize::{deserialize_with_base, serialize, serialize_compact};
use crate::tree::Tree;
use std::path::Path;

/// Load a tree document. `base` applies where the document does not fix a
/// format (forests and inheriting roots).
pub fn load_tree<P: AsRef<Path>>(path: P, base: Format) -> Result<Tree> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        PromptError::UserError(format!(
            "failed to read tree file '{}': {}",
            path.display(),
            e
        ))
    })?;
    deserialize_with_base(&text, base).map_err(|e| match e {
        PromptError::InvalidFormat(msg) => {
            PromptError::InvalidFormat(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Atomically write a tree document, newline-terminated.
pub fn save_tree<P: AsRef<Path>>(path: P, tree: &Tree, pretty: bool) -> Result<()> {
    let mut text = if pretty {
        serialize(tree)?
    } else {
        serialize_compact(tree)?
    };
    text.push('\n');
    atomic_write_file(path, &text)
}
