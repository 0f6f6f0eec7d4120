//! Node model for prompt trees.
//!
//! A node is either a content node (a leaf holding literal text) or a
//! container node (a named group of children rendered in one of the
//! [`Format`]s). Containers may store [`FormatSpec::Inherit`] to pick up the
//! nearest ancestor's format at render time.
//!
//! # Wire format
//!
//! ```text
//! {
//!   "kind": "container",
//!   "id": "n-1",
//!   "format": "xml",
//!   "name": "system",
//!   "children": [
//!     { "kind": "content", "id": "n-2", "content": "Hello World" }
//!   ]
//! }
//! ```

mod ids;
mod types;


pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use types::{
    ContainerDraft, ContainerNode, ContentDraft, ContentNode, DEFAULT_CONTAINER_NAME, Format,
    FormatSpec, Node, NodeId, NodeKind, SourceRef,
};
