//! Reading files that seed content nodes.

use crate::error::{PromptError, Result};
use crate::node::SourceRef;
use std::path::Path;

/// Text of a source file together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub text: String,
    pub source_ref: SourceRef,
}

/// Read a UTF-8 file no larger than `max_bytes`.
///
/// The recorded path is the one given, unresolved.
pub fn read_source<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<SourceFile> {
    let path = path.as_ref();

    let metadata = std::fs::metadata(path).map_err(|e| {
        PromptError::UserError(format!(
            "failed to read source file '{}': {}",
            path.display(),
            e
        ))
    })?;
    if !metadata.is_file() {
        return Err(PromptError::UserError(format!(
            "source '{}' is not a regular file",
            path.display()
        )));
    }
    if metadata.len() > max_bytes {
        return Err(PromptError::UserError(format!(
            "source file '{}' is {} bytes, larger than the {} byte limit",
            path.display(),
            metadata.len(),
            max_bytes
        )));
    }

    let bytes = std::fs::read(path).map_err(|e| {
        PromptError::UserError(format!(
            "failed to read source file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let text = String::from_utf8(bytes).map_err(|_| {
        PromptError::UserError(format!(
            "source file '{}' is not valid UTF-8 text",
            path.display()
        ))
    })?;

    Ok(SourceFile {
        text,
        source_ref: SourceRef {
            path: path.to_string_lossy().into_owned(),
            media_type: media_type(path).to_string(),
        },
    })
}

/// Media type guessed from the file extension, `text/plain` when unknown.
pub fn media_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "md" | "markdown" => "text/markdown",
        "json" => "application/json",
        "yaml" | "yml" => "application/yaml",
        "toml" => "application/toml",
        "xml" => "application/xml",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "js" | "mjs" | "cjs" => "text/javascript",
        "ts" | "tsx" => "text/typescript",
        "rs" => "text/x-rust",
        "py" => "text/x-python",
        "go" => "text/x-go",
        "sh" => "application/x-sh",
        _ => "text/plain",
    }
}
