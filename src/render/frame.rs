//! Per-format wrapping of a container's rendered children.

use crate::node::Format;

/// How one container wraps its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Frame {
    pub open: String,
    pub close: String,
    pub separator: &'static str,
    /// Prefix each child with its 1-based position.
    pub numbered: bool,
}

/// Frame for a container named `name` whose level path has `depth` entries.
pub(crate) fn frame(format: Format, name: &str, depth: usize) -> Frame {
    match format {
        Format::Xml => Frame {
            open: format!("<{}>", name),
            close: format!("</{}>", name),
            separator: "",
            numbered: false,
        },
        Format::Markdown => Frame {
            open: format!("{} {}\n", "#".repeat(depth.max(1)), name),
            close: String::new(),
            separator: "\n",
            numbered: false,
        },
        Format::Numbered => Frame {
            open: String::new(),
            close: String::new(),
            separator: "\n",
            numbered: true,
        },
        Format::Raw => Frame {
            open: String::new(),
            close: String::new(),
            separator: "",
            numbered: false,
        },
    }
}

impl Frame {
    pub(crate) fn wrap(&self, children: Vec<String>) -> String {
        let body = if self.numbered {
            children
                .iter()
                .enumerate()
                .map(|(index, child)| format!("{}. {}", index + 1, child))
                .collect::<Vec<_>>()
                .join(self.separator)
        } else {
            children.join(self.separator)
        };
        format!("{}{}{}", self.open, body, self.close)
    }
}
