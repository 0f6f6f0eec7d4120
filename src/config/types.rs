//! Configuration types and defaults for promptree.

use serde::{Deserialize, Serialize};

/// How new node ids are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Random v4 UUIDs (default).
    #[default]
    Uuid,
    /// `<id_prefix>-1`, `<id_prefix>-2`, ... continuing after the ids already
    /// in the tree.
    Sequential,
}

/// Default name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".promptree.yaml";

pub fn default_root_name() -> String {
    "root".to_string()
}

pub fn default_id_prefix() -> String {
    "node".to_string()
}

/// 1 MiB.
pub fn default_max_source_bytes() -> u64 {
    1024 * 1024
}

pub fn default_true() -> bool {
    true
}
