//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{CONFIG_FILE_NAME, IdStrategy};
use crate::error::{PromptError, Result};
use crate::node::{IdGenerator, SequentialIds, UuidIds};
use crate::tree::Tree;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptError::UserError)` - Read or parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for one CLI invocation.
    ///
    /// An explicit path must exist. Otherwise `.promptree.yaml` in `dir` is
    /// used when present, and the defaults when it is not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `max_source_bytes` must be positive
    /// - `id_prefix` and `root_name` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.max_source_bytes == 0 {
            return Err(PromptError::UserError(
                "config validation failed: max_source_bytes must be greater than 0".to_string(),
            ));
        }

        if self.id_prefix.trim().is_empty() {
            return Err(PromptError::UserError(
                "config validation failed: id_prefix must be non-empty".to_string(),
            ));
        }

        if self.root_name.trim().is_empty() {
            return Err(PromptError::UserError(
                "config validation failed: root_name must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Id generator for new nodes in `tree`.
    ///
    /// Sequential ids continue after the highest `<id_prefix>-N` already
    /// present, so repeated CLI invocations never reuse an id. A suffix of
    /// `u64::MAX` has no successor and is ignored.
    pub fn id_generator(&self, tree: &Tree) -> Box<dyn IdGenerator> {
        match self.id_strategy {
            IdStrategy::Uuid => Box::new(UuidIds),
            IdStrategy::Sequential => {
                let used = tree
                    .depth_first()
                    .into_iter()
                    .filter_map(|entry| sequence_number(&self.id_prefix, entry.id().as_str()))
                    .filter(|&n| n < u64::MAX)
                    .max()
                    .unwrap_or(0);
                Box::new(SequentialIds::starting_after(self.id_prefix.clone(), used))
            }
        }
    }
}

fn sequence_number(prefix: &str, id: &str) -> Option<u64> {
    id.strip_prefix(prefix)?.strip_prefix('-')?.parse().ok()
}
