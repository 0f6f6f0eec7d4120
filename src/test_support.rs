use crate::node::{ContainerDraft, ContentDraft, Format, NodeId, SequentialIds};
use crate::tree::{InsertTarget, Tree};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Switches the working directory for the guard's lifetime.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; hold the lock even if a
        // #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub(crate) fn test_ids() -> SequentialIds {
    SequentialIds::new("n")
}

/// Rooted tree used across tests:
///
/// ```text
/// root (raw)
/// ├── system (xml)
/// │   └── "You are a reviewer."
/// └── task (markdown)
///     ├── details (inherit)
///     │   └── "Check errors."
///     └── "Be brief."
/// ```
pub(crate) struct SampleTree {
    pub tree: Tree,
    pub root: NodeId,
    pub system: NodeId,
    pub system_text: NodeId,
    pub task: NodeId,
    pub details: NodeId,
    pub details_text: NodeId,
    pub brief: NodeId,
}

pub(crate) fn sample_tree() -> SampleTree {
    let mut ids = test_ids();
    let root = NodeId::from("root");
    let mut tree = Tree::rooted(root.clone(), "root", Format::Raw);

    let system = tree
        .create_container(
            &mut ids,
            &InsertTarget::inside(root.clone()),
            ContainerDraft::named("system").with_format(Format::Xml),
        )
        .unwrap();
    let system_text = tree
        .create_content(
            &mut ids,
            &InsertTarget::inside(system.clone()),
            ContentDraft::text("You are a reviewer."),
        )
        .unwrap();
    let task = tree
        .create_container(
            &mut ids,
            &InsertTarget::inside(root.clone()),
            ContainerDraft::named("task").with_format(Format::Markdown),
        )
        .unwrap();
    let details = tree
        .create_container(
            &mut ids,
            &InsertTarget::inside(task.clone()),
            ContainerDraft::named("details"),
        )
        .unwrap();
    let details_text = tree
        .create_content(
            &mut ids,
            &InsertTarget::inside(details.clone()),
            ContentDraft::text("Check errors."),
        )
        .unwrap();
    let brief = tree
        .create_content(
            &mut ids,
            &InsertTarget::inside(task.clone()),
            ContentDraft::text("Be brief."),
        )
        .unwrap();

    SampleTree {
        tree,
        root,
        system,
        system_text,
        task,
        details,
        details_text,
        brief,
    }
}

/// Assert the arena is internally consistent: every id reachable exactly once,
/// parent links agree with child lists, and no node is its own ancestor.
pub(crate) fn assert_well_formed(tree: &Tree) {
    let order = tree.depth_first();
    assert_eq!(order.len(), tree.len(), "unreachable or duplicated entries");

    let mut seen = HashSet::new();
    for entry in &order {
        assert!(seen.insert(entry.id().clone()), "duplicate id {}", entry.id());
        assert!(
            !tree.is_ancestor(entry.id(), entry.id()),
            "{} is its own ancestor",
            entry.id()
        );
        if let Some(container) = entry.as_container() {
            for child in container.children() {
                let child_entry = tree.get(child).expect("child entry missing");
                assert_eq!(child_entry.parent(), Some(entry.id()));
            }
        }
    }
    for id in tree.top_level() {
        assert_eq!(tree.get(id).and_then(|entry| entry.parent()), None);
    }
}
