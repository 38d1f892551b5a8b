//! Renderer - turns a finished scan into line records
//!
//! The renderer decides text and semantic kind only. Styling and the output
//! sink belong to the printers in `terminal` and `json`.

use serde::Serialize;

use crate::tree::{NodeKind, Scan, TreeNode};

use super::config::OutputConfig;
use super::utils::{connector, continuation_prefix};

/// Semantic kind of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Root,
    Directory,
    File,
    /// Directory and file counts
    Summary,
    /// Notice explaining why the tree was cut short
    Truncated,
}

impl From<NodeKind> for LineKind {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Root => LineKind::Root,
            NodeKind::Directory => LineKind::Directory,
            NodeKind::File => LineKind::File,
        }
    }
}

/// One output record. `prefix` is the branch drawing, kept apart from the
/// label so printers can style the label alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub prefix: String,
    pub label: String,
    pub kind: LineKind,
}

impl Line {
    pub fn new(prefix: impl Into<String>, label: impl Into<String>, kind: LineKind) -> Self {
        Self {
            prefix: prefix.into(),
            label: label.into(),
            kind,
        }
    }

    pub fn text(&self) -> String {
        format!("{}{}", self.prefix, self.label)
    }

    pub fn is_summary(&self) -> bool {
        matches!(self.kind, LineKind::Summary | LineKind::Truncated)
    }
}

/// Format the trailing counts line.
pub fn summary_text(dir_count: usize, file_count: usize) -> String {
    format!("{} directories, {} files", dir_count, file_count)
}

pub struct Renderer {
    branch_lines: bool,
}

impl Renderer {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            branch_lines: !config.suppress_branch_lines,
        }
    }

    /// Render the tree depth-first, then the summary and any truncation notice.
    pub fn render(&self, scan: &Scan) -> Vec<Line> {
        let mut lines = Vec::new();
        let root = scan.tree.root();

        lines.push(Line::new("", root.name.clone(), LineKind::Root));
        self.render_children(root, "", &mut lines);

        let state = &scan.state;
        lines.push(Line::new(
            "",
            summary_text(state.dir_count(), state.file_count()),
            LineKind::Summary,
        ));
        if let Some(notice) = state.notice() {
            lines.push(Line::new("", notice, LineKind::Truncated));
        }
        lines
    }

    fn render_children(&self, node: &TreeNode, prefix: &str, lines: &mut Vec<Line>) {
        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            let is_last = i == count - 1;

            let (own_prefix, child_prefix) = if self.branch_lines {
                (
                    format!("{}{}", prefix, connector(is_last)),
                    continuation_prefix(prefix, is_last),
                )
            } else {
                (String::new(), String::new())
            };

            lines.push(Line::new(own_prefix, child.name.clone(), child.kind.into()));
            self.render_children(child, &child_prefix, lines);
        }
    }
}
