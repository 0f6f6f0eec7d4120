//! Error types for promptree.
//!
//! Uses thiserror for derive macros. Engine operations report one of the
//! structural variants; the CLI layer adds `UserError` for I/O and argument
//! problems.

use crate::exit_codes;
use crate::node::{NodeId, NodeKind};
use thiserror::Error;

/// Main error type for promptree operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// Referenced node id does not exist in the tree.
    #[error("node '{0}' not found")]
    NotFound(NodeId),

    /// The insert target is structurally nonsensical.
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// A move would place a node inside its own subtree.
    #[error("cannot move node '{node}' into its own subtree (target '{target}')")]
    CycleDetected { node: NodeId, target: NodeId },

    /// The distinguished root container cannot be deleted or relocated.
    #[error("node '{0}' is the root container and cannot be deleted or moved")]
    ProtectedRoot(NodeId),

    /// An update was applied to a node of the wrong kind.
    #[error("node '{id}' is a {actual} node, expected a {expected} node")]
    TypeMismatch {
        id: NodeId,
        expected: NodeKind,
        actual: NodeKind,
    },

    /// A format query was made against a content node.
    #[error("node '{0}' is not a container")]
    NotAContainer(NodeId),

    /// An inserted node reuses an id already present in the tree.
    #[error("node id '{0}' is already in use")]
    DuplicateId(NodeId),

    /// Input is not a well-formed tree document.
    #[error("invalid tree document: {0}")]
    InvalidFormat(String),

    /// User provided invalid arguments or a file could not be used.
    #[error("{0}")]
    UserError(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::UserError(_) => exit_codes::USER_ERROR,
            PromptError::InvalidFormat(_) => exit_codes::FORMAT_FAILURE,
            PromptError::NotFound(_)
            | PromptError::InvalidTarget(_)
            | PromptError::CycleDetected { .. }
            | PromptError::ProtectedRoot(_)
            | PromptError::TypeMismatch { .. }
            | PromptError::NotAContainer(_)
            | PromptError::DuplicateId(_) => exit_codes::TREE_FAILURE,
        }
    }
}

/// Result type alias for promptree operations.
pub type Result<T> = std::result::Result<T, PromptError>;
