//! CLI argument parsing for promptree.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use crate::node::{Format, FormatSpec, NodeKind};
use crate::tree::Position;
use std::path::PathBuf;

/// Promptree: build LLM prompts as trees of text and formatted containers.
///
/// A prompt is stored as a JSON tree file:
/// - Content nodes hold literal text
/// - Container nodes group children and render them as XML tags, Markdown
///   headings, a numbered list, or plain concatenation
#[derive(Parser, Debug)]
#[command(name = "promptree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: .promptree.yaml in the working directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for promptree.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty tree file.
    ///
    /// Rooted trees get a root container named after `root_name`; forests
    /// start as an empty list.
    New(NewArgs),

    /// Add a content node with literal text or the contents of a file.
    AddText(AddTextArgs),

    /// Add an empty container.
    AddContainer(AddContainerArgs),

    /// Tokenize a template and insert the resulting fragments.
    ///
    /// Every `{{name}}` becomes an empty inheriting container.
    AddTemplate(AddTemplateArgs),

    /// Add a file as a container named after its path holding its text.
    AddFile(AddFileArgs),

    /// Move a node (and its subtree) to a new position.
    Move(MoveArgs),

    /// Delete a node and its subtree.
    Delete(DeleteArgs),

    /// Edit fields of a node, or replace it with a node of another kind.
    Update(UpdateArgs),

    /// Show one node, or an outline of the whole tree.
    Show(ShowArgs),

    /// Render the tree (or one node) to text.
    Render(RenderArgs),

    /// Print the fragments a template tokenizes into, as JSON.
    Tokenize(TokenizeArgs),
}

/// Where to attach a node.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Reference node (default: the top level or the root container).
    #[arg(long, value_name = "ID")]
    pub target: Option<String>,

    /// Position relative to the target: before, after, or inside.
    #[arg(long, default_value = "inside")]
    pub position: Position,
}

/// Arguments for the `new` command.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Tree file to create.
    pub file: PathBuf,

    /// Create a forest instead of a rooted tree.
    #[arg(long)]
    pub forest: bool,

    /// Format of the root container (default: config `default_format`).
    #[arg(long, value_parser = parse_format)]
    pub format: Option<Format>,

    /// Name of the root container (default: config `root_name`).
    #[arg(long)]
    pub root_name: Option<String>,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add-text` command.
#[derive(Args, Debug)]
pub struct AddTextArgs {
    /// Tree file to edit.
    pub file: PathBuf,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Literal text of the node.
    #[arg(long, conflicts_with = "source", required_unless_present = "source")]
    pub text: Option<String>,

    /// Read the text from a file and record it as the node's source.
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,
}

/// Arguments for the `add-container` command.
#[derive(Args, Debug)]
pub struct AddContainerArgs {
    /// Tree file to edit.
    pub file: PathBuf,

    /// Tag name or heading text.
    #[arg(long)]
    pub name: String,

    /// xml, markdown, numbered, raw, or inherit.
    #[arg(long, default_value = "inherit", value_parser = parse_format_spec)]
    pub format: FormatSpec,

    #[arg(long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for the `add-template` command.
#[derive(Args, Debug)]
pub struct AddTemplateArgs {
    /// Tree file to edit.
    pub file: PathBuf,

    /// Template text, e.g. "Hello {{name}}!".
    pub template: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for the `add-file` command.
#[derive(Args, Debug)]
pub struct AddFileArgs {
    /// Tree file to edit.
    pub file: PathBuf,

    /// File whose text is added.
    pub source: PathBuf,

    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for the `move` command.
#[derive(Args, Debug)]
pub struct MoveArgs {
    /// Tree file to edit.
    pub file: PathBuf,

    /// Node to move.
    pub id: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for the `delete` command.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Tree file to edit.
    pub file: PathBuf,

    /// Node to delete.
    pub id: String,
}

/// Arguments for the `update` command.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Tree file to edit.
    pub file: PathBuf,

    /// Node to update.
    pub id: String,

    /// New text (content nodes).
    #[arg(long)]
    pub content: Option<String>,

    /// New name (containers).
    #[arg(long)]
    pub name: Option<String>,

    /// New format (containers).
    #[arg(long, value_parser = parse_format_spec)]
    pub format: Option<FormatSpec>,

    /// New description (containers).
    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,

    /// Remove the description (containers).
    #[arg(long)]
    pub clear_description: bool,

    /// Replace the node with a fresh node of this kind (content or container).
    #[arg(
        long,
        value_parser = parse_kind,
        conflicts_with_all = ["content", "name", "format", "description", "clear_description"]
    )]
    pub kind: Option<NodeKind>,
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Tree file to inspect.
    pub file: PathBuf,

    /// Node to describe (default: outline of the whole tree).
    pub id: Option<String>,
}

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Tree file to render.
    pub file: PathBuf,

    /// Base format (default: the tree's own).
    #[arg(long, value_parser = parse_format)]
    pub format: Option<Format>,

    /// Render only this node and its subtree.
    #[arg(long, value_name = "ID")]
    pub node: Option<String>,

    /// Write to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `tokenize` command.
#[derive(Args, Debug)]
pub struct TokenizeArgs {
    /// Template text.
    pub template: String,
}

// Explicit parsers: the serde `From<String>` impls are lenient and would
// otherwise be picked up by clap.
fn parse_format(s: &str) -> Result<Format, String> {
    s.parse().map_err(|e: crate::error::PromptError| e.to_string())
}

fn parse_format_spec(s: &str) -> Result<FormatSpec, String> {
    s.parse().map_err(|e: crate::error::PromptError| e.to_string())
}

fn parse_kind(s: &str) -> Result<NodeKind, String> {
    match s {
        "content" => Ok(NodeKind::Content),
        "container" => Ok(NodeKind::Container),
        _ => Err(format!(
            "unknown node kind '{}' (expected content or container)",
            s
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_defaults() {
        let cli = Cli::try_parse_from(["promptree", "new", "p.json"]).unwrap();
        if let Command::New(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("p.json"));
            assert!(!args.forest);
            assert_eq!(args.format, None);
            assert_eq!(args.root_name, None);
        } else {
            panic!("Expected New command");
        }
    }

    #[test]
    fn parse_new_full() {
        let cli = Cli::try_parse_from([
            "promptree",
            "new",
            "p.json",
            "--format",
            "xml",
            "--root-name",
            "prompt",
        ])
        .unwrap();
        if let Command::New(args) = cli.command {
            assert_eq!(args.format, Some(Format::Xml));
            assert_eq!(args.root_name.as_deref(), Some("prompt"));
        } else {
            panic!("Expected New command");
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["promptree", "show", "p.json", "-vv", "--config", "c.yaml"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("c.yaml")));
    }

    #[test]
    fn parse_add_text() {
        let cli = Cli::try_parse_from([
            "promptree",
            "add-text",
            "p.json",
            "--text",
            "Hello",
            "--target",
            "n-1",
            "--position",
            "after",
        ])
        .unwrap();
        if let Command::AddText(args) = cli.command {
            assert_eq!(args.text.as_deref(), Some("Hello"));
            assert_eq!(args.target.target.as_deref(), Some("n-1"));
            assert_eq!(args.target.position, Position::After);
        } else {
            panic!("Expected AddText command");
        }
    }

    #[test]
    fn parse_add_text_requires_text_or_source() {
        assert!(Cli::try_parse_from(["promptree", "add-text", "p.json"]).is_err());
        assert!(
            Cli::try_parse_from([
                "promptree", "add-text", "p.json", "--text", "a", "--source", "b.md"
            ])
            .is_err()
        );
    }

    #[test]
    fn parse_add_container_defaults_to_inherit() {
        let cli = Cli::try_parse_from(["promptree", "add-container", "p.json", "--name", "rules"])
            .unwrap();
        if let Command::AddContainer(args) = cli.command {
            assert_eq!(args.format, FormatSpec::Inherit);
            assert_eq!(args.target.position, Position::Inside);
            assert_eq!(args.target.target, None);
        } else {
            panic!("Expected AddContainer command");
        }
    }

    #[test]
    fn parse_rejects_unknown_format() {
        assert!(
            Cli::try_parse_from([
                "promptree", "add-container", "p.json", "--name", "x", "--format", "html"
            ])
            .is_err()
        );
    }

    #[test]
    fn parse_rejects_unknown_position() {
        assert!(
            Cli::try_parse_from(["promptree", "move", "p.json", "n-1", "--position", "under"])
                .is_err()
        );
    }

    #[test]
    fn parse_update_kind_conflicts_with_fields() {
        assert!(
            Cli::try_parse_from([
                "promptree", "update", "p.json", "n-1", "--kind", "content", "--name", "x"
            ])
            .is_err()
        );
        let cli = Cli::try_parse_from(["promptree", "update", "p.json", "n-1", "--kind", "container"])
            .unwrap();
        if let Command::Update(args) = cli.command {
            assert_eq!(args.kind, Some(NodeKind::Container));
        } else {
            panic!("Expected Update command");
        }
    }

    #[test]
    fn parse_render() {
        let cli = Cli::try_parse_from([
            "promptree", "render", "p.json", "--format", "markdown", "--node", "n-2", "-o",
            "out.txt",
        ])
        .unwrap();
        if let Command::Render(args) = cli.command {
            assert_eq!(args.format, Some(Format::Markdown));
            assert_eq!(args.node.as_deref(), Some("n-2"));
            assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        } else {
            panic!("Expected Render command");
        }
    }

    #[test]
    fn parse_tokenize() {
        let cli = Cli::try_parse_from(["promptree", "tokenize", "Hi {{who}}"]).unwrap();
        assert!(matches!(cli.command, Command::Tokenize(args) if args.template == "Hi {{who}}"));
    }
}
