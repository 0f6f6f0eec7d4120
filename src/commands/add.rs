//! Implementation of the `add-*` commands.
//!
//! Each command builds fresh nodes and attaches them at the requested
//! target, then prints the new ids (one per line) so scripts can chain
//! further edits.

use super::{edit_tree, insert_target};
use crate::cli::{AddContainerArgs, AddFileArgs, AddTemplateArgs, AddTextArgs};
use crate::config::Config;
use crate::error::Result;
use crate::fs::read_source;
use crate::node::{ContainerDraft, ContentDraft, NodeId};
use crate::template::tokenize;
use tracing::info;

/// Execute the `promptree add-text` command.
pub fn cmd_add_text(config: &Config, args: AddTextArgs) -> Result<()> {
    let draft = match (args.text, &args.source) {
        (_, Some(source)) => {
            let file = read_source(source, config.max_source_bytes)?;
            ContentDraft {
                content: file.text,
                source_ref: Some(file.source_ref),
            }
        }
        (Some(text), None) => ContentDraft::text(text),
        (None, None) => ContentDraft::default(),
    };
    let target = insert_target(&args.target);

    let id = edit_tree(config, &args.file, |tree, ids| {
        tree.create_content(ids, &target, draft)
    })?;

    info!(%id, position = %target.position, "added content node");
    print_ids(&[id]);
    Ok(())
}

/// Execute the `promptree add-container` command.
pub fn cmd_add_container(config: &Config, args: AddContainerArgs) -> Result<()> {
    let draft = ContainerDraft {
        format: args.format,
        name: args.name,
        description: args.description,
    };
    let target = insert_target(&args.target);

    let id = edit_tree(config, &args.file, |tree, ids| {
        tree.create_container(ids, &target, draft)
    })?;

    info!(%id, position = %target.position, "added container node");
    print_ids(&[id]);
    Ok(())
}

/// Execute the `promptree add-template` command.
///
/// Fragments are inserted together and keep their template order.
pub fn cmd_add_template(config: &Config, args: AddTemplateArgs) -> Result<()> {
    let target = insert_target(&args.target);

    let inserted = edit_tree(config, &args.file, |tree, ids| {
        let fragments = tokenize(&args.template, ids);
        tree.insert_all(&target, fragments)
    })?;

    info!(count = inserted.len(), "added template fragments");
    print_ids(&inserted);
    Ok(())
}

/// Execute the `promptree add-file` command.
///
/// The file becomes an inheriting container named after the path with a
/// single content node that records the file as its source.
pub fn cmd_add_file(config: &Config, args: AddFileArgs) -> Result<()> {
    let file = read_source(&args.source, config.max_source_bytes)?;
    let target = insert_target(&args.target);

    let id = edit_tree(config, &args.file, |tree, ids| {
        tree.insert_source(ids, &target, file.source_ref, file.text)
    })?;

    info!(%id, source = %args.source.display(), "added file");
    print_ids(&[id]);
    Ok(())
}

fn print_ids(ids: &[NodeId]) {
    for id in ids {
        println!("{}", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TargetArgs;
    use crate::config::IdStrategy;
    use crate::error::PromptError;
    use crate::fs::{load_tree, save_tree};
    use crate::node::{Format, FormatSpec, SourceRef};
    use crate::template::placeholders;
    use crate::tree::{Position, Tree};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn sequential() -> Config {
        Config {
            id_strategy: IdStrategy::Sequential,
            id_prefix: "n".to_string(),
            ..Config::default()
        }
    }

    /// Rooted xml tree named "prompt" with root id "r".
    fn setup(temp_dir: &TempDir) -> PathBuf {
        let path = temp_dir.path().join("p.json");
        let tree = Tree::rooted(NodeId::from("r"), "prompt", Format::Xml);
        save_tree(&path, &tree, true).unwrap();
        path
    }

    fn target(id: Option<&str>, position: Position) -> TargetArgs {
        TargetArgs {
            target: id.map(str::to_string),
            position,
        }
    }

    fn add_text(config: &Config, path: &Path, text: &str, at: TargetArgs) -> Result<()> {
        cmd_add_text(
            config,
            AddTextArgs {
                file: path.to_path_buf(),
                target: at,
                text: Some(text.to_string()),
                source: None,
            },
        )
    }

    #[test]
    fn test_add_text_into_root() {
        let temp_dir = TempDir::new().unwrap();
        let path = setup(&temp_dir);

        add_text(&sequential(), &path, "Hello", target(None, Position::Inside)).unwrap();
        add_text(&sequential(), &path, "Hi. ", target(None, Position::Before)).unwrap();

        let tree = load_tree(&path, Format::Raw).unwrap();
        assert_eq!(tree.render(), "<prompt>Hi. Hello</prompt>");
        assert!(tree.contains(&NodeId::from("n-1")));
        assert!(tree.contains(&NodeId::from("n-2")));
    }

    #[test]
    fn test_add_text_from_source_records_provenance() {
        let temp_dir = TempDir::new().unwrap();
        let path = setup(&temp_dir);
        let source = temp_dir.path().join("rules.md");
        std::fs::write(&source, "- be kind").unwrap();

        cmd_add_text(
            &sequential(),
            AddTextArgs {
                file: path.clone(),
                target: target(None, Position::Inside),
                text: None,
                source: Some(source.clone()),
            },
        )
        .unwrap();

        let tree = load_tree(&path, Format::Raw).unwrap();
        let entry = tree.get(&NodeId::from("n-1")).unwrap().as_content().unwrap();
        assert_eq!(entry.content, "- be kind");
        assert_eq!(
            entry.source_ref,
            Some(SourceRef {
                path: source.to_string_lossy().into_owned(),
                media_type: "text/markdown".to_string(),
            })
        );
    }

    #[test]
    fn test_add_text_source_over_limit_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = setup(&temp_dir);
        let source = temp_dir.path().join("big.txt");
        std::fs::write(&source, "0123456789").unwrap();
        let config = Config {
            max_source_bytes: 4,
            ..sequential()
        };

        let err = cmd_add_text(
            &config,
            AddTextArgs {
                file: path.clone(),
                target: target(None, Position::Inside),
                text: None,
                source: Some(source),
            },
        )
        .unwrap_err();

        assert!(matches!(err, PromptError::UserError(_)));
        assert_eq!(load_tree(&path, Format::Raw).unwrap().len(), 1);
    }

    #[test]
    fn test_add_inside_content_is_invalid_target() {
        let temp_dir = TempDir::new().unwrap();
        let path = setup(&temp_dir);
        add_text(&sequential(), &path, "leaf", target(None, Position::Inside)).unwrap();

        let err = cmd_add_container(
            &sequential(),
            AddContainerArgs {
                file: path.clone(),
                name: "box".to_string(),
                format: FormatSpec::Inherit,
                description: None,
                target: target(Some("n-1"), Position::Inside),
            },
        )
        .unwrap_err();

        assert!(matches!(err, PromptError::InvalidTarget(_)));
        assert_eq!(err.exit_code(), crate::exit_codes::TREE_FAILURE);
    }

    #[test]
    fn test_add_container_with_description() {
        let temp_dir = TempDir::new().unwrap();
        let path = setup(&temp_dir);

        cmd_add_container(
            &sequential(),
            AddContainerArgs {
                file: path.clone(),
                name: "rules".to_string(),
                format: Format::Numbered.into(),
                description: Some("House rules".to_string()),
                target: target(None, Position::Inside),
            },
        )
        .unwrap();
        add_text(&sequential(), &path, "One", target(Some("n-1"), Position::Inside)).unwrap();
        add_text(&sequential(), &path, "Two", target(Some("n-1"), Position::Inside)).unwrap();

        let tree = load_tree(&path, Format::Raw).unwrap();
        let rules = tree.container(&NodeId::from("n-1")).unwrap();
        assert_eq!(rules.description.as_deref(), Some("House rules"));
        assert_eq!(tree.render(), "<prompt>1. One\n2. Two</prompt>");
    }

    #[test]
    fn test_add_template_then_fill_placeholder() {
        let temp_dir = TempDir::new().unwrap();
        let path = setup(&temp_dir);

        cmd_add_template(
            &sequential(),
            AddTemplateArgs {
                file: path.clone(),
                template: "Hello {{name}}!".to_string(),
                target: target(None, Position::Inside),
            },
        )
        .unwrap();

        let tree = load_tree(&path, Format::Raw).unwrap();
        let open: Vec<&str> = placeholders(&tree).into_iter().map(NodeId::as_str).collect();
        assert_eq!(open, vec!["n-2"]);

        add_text(&sequential(), &path, "Ada", target(Some("n-2"), Position::Inside)).unwrap();
        let tree = load_tree(&path, Format::Raw).unwrap();
        assert_eq!(tree.render(), "<prompt>Hello <name>Ada</name>!</prompt>");
        assert!(placeholders(&tree).is_empty());
    }

    #[test]
    fn test_add_file_wraps_text_in_named_container() {
        let temp_dir = TempDir::new().unwrap();
        let path = setup(&temp_dir);
        let source = temp_dir.path().join("main.rs");
        std::fs::write(&source, "fn main() {}").unwrap();

        cmd_add_file(
            &sequential(),
            AddFileArgs {
                file: path.clone(),
                source: source.clone(),
                target: target(None, Position::Inside),
            },
        )
        .unwrap();

        let tree = load_tree(&path, Format::Raw).unwrap();
        let container = tree.container(&NodeId::from("n-1")).unwrap();
        assert_eq!(container.name, source.to_string_lossy());
        assert_eq!(container.format, FormatSpec::Inherit);
        let text = tree.get(&NodeId::from("n-2")).unwrap().as_content().unwrap();
        assert_eq!(text.content, "fn main() {}");
        assert_eq!(text.source_ref.as_ref().unwrap().media_type, "text/x-rust");
    }

    #[test]
    fn test_add_to_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");

        let err = add_text(&sequential(), &missing, "x", target(None, Position::Inside)).unwrap_err();
        assert!(matches!(err, PromptError::UserError(_)));
        assert!(!missing.exists());
    }
}
