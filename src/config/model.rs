//! Config struct definition and default implementation.

use super::types::*;
use crate::node::Format;
use crate::tree::Layout;
use serde::{Deserialize, Serialize};

/// Configuration for the promptree CLI.
///
/// This struct represents the contents of `.promptree.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Tree settings
    // =========================================================================
    /// Base format for new trees and for rendering forests.
    #[serde(default)]
    pub default_format: Format,

    /// Layout used by `new` unless `--forest` is given.
    #[serde(default)]
    pub layout: Layout,

    /// Name given to the root container of new rooted trees.
    #[serde(default = "default_root_name")]
    pub root_name: String,

    // =========================================================================
    // Id settings
    // =========================================================================
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Prefix for sequential ids.
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// Write tree files as indented JSON.
    #[serde(default = "default_true")]
    pub pretty_json: bool,

    /// Largest file `--source`/`add-file` will read, in bytes.
    #[serde(default = "default_max_source_bytes")]
    pub max_source_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: Format::default(),
            layout: Layout::default(),
            root_name: default_root_name(),
            id_strategy: IdStrategy::default(),
            id_prefix: default_id_prefix(),
            pretty_json: default_true(),
            max_source_bytes: default_max_source_bytes(),
        }
    }
}
