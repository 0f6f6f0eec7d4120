//! Filesystem utilities for promptree.
//!
//! The engine itself performs no I/O. This module holds what the CLI needs
//! around it: atomic writes for tree documents, loading and saving those
//! documents, and reading files that seed content nodes.

pub mod atomic;
mod document;
mod source;

pub use atomic::{atomic_write, atomic_write_file};
pub use document::{load_tree, save_tree};
pub use source::{SourceFile, media_type, read_source};
