//! promptree: a node-tree engine for assembling and rendering LLM prompts.
//!
//! A prompt is a tree of two node kinds. Content nodes hold literal text;
//! container nodes group children under a name and a format (`xml`,
//! `markdown`, `numbered`, `raw`, or `inherit` from the nearest ancestor).
//! The [`tree::Tree`] arena supports insertion, moves, deletion, and
//! patches; [`render`] turns it into text and [`serialize`] into JSON.
//!
//! The `promptree` binary wraps the engine in a CLI that edits a tree file
//! in place.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod node;
pub mod render;
pub mod resolve;
pub mod serialize;
pub mod template;
pub mod tree;

#[cfg(test)]
mod test_support;
