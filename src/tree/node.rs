//! In-memory tree model
//!
//! Every admitted entry becomes a [`TreeNode`] owned by its parent. Children
//! are kept sorted by full path at insertion time, so the model is always in
//! render order and two scans of the same filesystem produce the same tree.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use super::utils::get_name;

/// Semantic kind of a node, used by formatters to pick a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    Directory,
    File,
}

#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    /// Display label: the base name, or the root-relative path
    pub name: String,
    pub path: PathBuf,
    pub kind: NodeKind,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(name: String, path: PathBuf, kind: NodeKind) -> Self {
        Self {
            name,
            path,
            kind,
            children: Vec::new(),
        }
    }

    /// Find a direct child by its label.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Count descendants (not including self) of the given kind.
    pub fn count(&self, kind: NodeKind) -> usize {
        self.children
            .iter()
            .map(|c| usize::from(c.kind == kind) + c.count(kind))
            .sum()
    }
}

/// Hierarchy of admitted entries rooted at the scan root.
#[derive(Debug, Clone)]
pub struct TreeModel {
    root: TreeNode,
    relative_labels: bool,
}

impl TreeModel {
    pub fn new(root: &Path, relative_labels: bool) -> Self {
        Self {
            root: TreeNode::new(get_name(root), root.to_path_buf(), NodeKind::Root),
            relative_labels,
        }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Insert an entry by walking its root-relative path one segment at a
    /// time, reusing existing nodes and creating missing ones as directories.
    pub fn insert(&mut self, relative: &Path, kind: NodeKind) {
        let segments: Vec<_> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part),
                _ => None,
            })
            .collect();
        let Some(last) = segments.len().checked_sub(1) else {
            return;
        };

        let relative_labels = self.relative_labels;
        let mut walked = PathBuf::new();
        let mut current = &mut self.root;

        for (i, segment) in segments.into_iter().enumerate() {
            walked.push(segment);
            let full_path = current.path.join(segment);

            let index = match current
                .children
                .binary_search_by(|c| c.path.as_path().cmp(&full_path))
            {
                Ok(index) => index,
                Err(index) => {
                    let name = if relative_labels {
                        walked.to_string_lossy().to_string()
                    } else {
                        segment.to_string_lossy().to_string()
                    };
                    let node_kind = if i == last { kind } else { NodeKind::Directory };
                    current
                        .children
                        .insert(index, TreeNode::new(name, full_path, node_kind));
                    index
                }
            };
            current = &mut current.children[index];
        }
    }
}
