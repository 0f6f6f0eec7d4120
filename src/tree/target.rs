//! Insert targets: where a new or moved node attaches.

use crate::error::{PromptError, Result};
use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position relative to the target node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Before,
    After,
    #[default]
    Inside,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Before => f.write_str("before"),
            Position::After => f.write_str("after"),
            Position::Inside => f.write_str("inside"),
        }
    }
}

impl FromStr for Position {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "before" => Ok(Position::Before),
            "after" => Ok(Position::After),
            "inside" => Ok(Position::Inside),
            _ => Err(PromptError::UserError(format!(
                "unknown position '{}' (expected one of: before, after, inside)",
                s
            ))),
        }
    }
}

/// `{ id?, position }`. A missing id addresses the top level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InsertTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,
    pub position: Position,
}

impl InsertTarget {
    /// Top level: prepend for `Before`, append otherwise.
    pub fn top(position: Position) -> Self {
        Self { id: None, position }
    }

    pub fn inside(id: impl Into<NodeId>) -> Self {
        Self {
            id: Some(id.into()),
            position: Position::Inside,
        }
    }

    pub fn before(id: impl Into<NodeId>) -> Self {
        Self {
            id: Some(id.into()),
            position: Position::Before,
        }
    }

    pub fn after(id: impl Into<NodeId>) -> Self {
        Self {
            id: Some(id.into()),
            position: Position::After,
        }
    }
}
