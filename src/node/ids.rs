//! Id generation for new nodes.
//!
//! The engine never invents ids on its own; every constructor takes an
//! [`IdGenerator`] so tests can use predictable ids while the CLI uses UUIDs.

use super::NodeId;
use uuid::Uuid;

/// Source of fresh node ids, collision-free for the lifetime of a session.
pub trait IdGenerator {
    fn next_id(&mut self) -> NodeId;
}

/// Yields `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Continue numbering after `count` ids have already been handed out.
    ///
    /// Numbering saturates at `u64::MAX`; past that point the same id repeats
    /// and insertion reports `DuplicateId`.
    pub fn starting_after(prefix: impl Into<String>, count: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: count.saturating_add(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> NodeId {
        let id = NodeId::new(format!("{}-{}", self.prefix, self.next));
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> NodeId {
        NodeId::new(Uuid::new_v4().to_string())
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> NodeId {
        (**self).next_id()
    }
}
