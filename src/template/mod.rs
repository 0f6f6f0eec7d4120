//! Template tokenizer.
//!
//! Splits template text into detached tree fragments: literal runs become
//! content nodes and every `{{name}}` becomes an empty, inheriting container
//! called `name`. Those containers are placeholders waiting to be filled.
//!
//! # Syntax
//!
//! - `{{name}}` - placeholder; surrounding whitespace in `name` is trimmed
//! - `{{` with no later `}}` - literal text starting a new content fragment
//!
//! Nothing is attached to a tree here; callers splice the fragments in with
//! [`Tree::insert_all`](crate::tree::Tree::insert_all).


use crate::node::{ContainerDraft, ContentDraft, FormatSpec, IdGenerator, Node, NodeId};
use crate::tree::Tree;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Tokenize `text` into fragments in document order.
///
/// # Examples
///
/// ```
/// use promptree::node::SequentialIds;
/// use promptree::template::tokenize;
///
/// let fragments = tokenize("Hello {{name}}!", &mut SequentialIds::new("t"));
/// assert_eq!(fragments.len(), 3);
/// assert_eq!(fragments[1].as_container().unwrap().name, "name");
/// ```
pub fn tokenize(text: &str, ids: &mut dyn IdGenerator) -> Vec<Node> {
    let mut fragments = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(open) = rest.find(OPEN) {
        literal.push_str(&rest[..open]);
        flush(&mut literal, &mut fragments, ids);

        let after_open = &rest[open + OPEN.len()..];
        match after_open.find(CLOSE) {
            Some(close) => {
                let name = after_open[..close].trim();
                fragments
                    .push(ContainerDraft::named(name).with_format(FormatSpec::Inherit).build(ids));
                rest = &after_open[close + CLOSE.len()..];
            }
            None => {
                // Unclosed: the braces open a new literal run.
                literal.push_str(OPEN);
                rest = after_open;
            }
        }
    }

    literal.push_str(rest);
    flush(&mut literal, &mut fragments, ids);
    fragments
}

fn flush(literal: &mut String, fragments: &mut Vec<Node>, ids: &mut dyn IdGenerator) {
    if !literal.is_empty() {
        fragments.push(ContentDraft::text(std::mem::take(literal)).build(ids));
    }
}

/// Ids of empty inheriting containers, depth-first.
///
/// These are the slots a tokenized template leaves open until someone
/// inserts content into them.
pub fn placeholders(tree: &Tree) -> Vec<&NodeId> {
    tree.depth_first()
        .into_iter()
        .filter(|entry| {
            entry
                .as_container()
                .is_some_and(|c| c.format.is_inherit() && c.children().is_empty())
        })
        .map(|entry| entry.id())
        .collect()
}
