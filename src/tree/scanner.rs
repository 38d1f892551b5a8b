//! Scanner - bounded, filtered depth-first walk that builds a TreeModel

use std::fs::{self, DirEntry};
use std::io;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, SproutError};

use super::config::ScanConfig;
use super::filter::EntryFilter;
use super::node::{NodeKind, TreeModel};
use super::state::ScanState;

/// Outcome of one scan: the admitted tree plus the counters that built it.
#[derive(Debug, Clone)]
pub struct Scan {
    pub tree: TreeModel,
    pub state: ScanState,
}

/// Walks a directory tree depth-first, admitting entries that pass every
/// filter until the tree is exhausted or a limit trips.
pub struct Scanner {
    config: ScanConfig,
    filter: EntryFilter,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        let filter = EntryFilter::new(&config);
        Self { config, filter }
    }

    /// Scan `root`, which must be an existing directory (see
    /// [`resolve_root`](crate::resolve_root)).
    pub fn scan(&self, root: &Path) -> Result<Scan> {
        let mut tree = TreeModel::new(root, self.config.relative_paths);
        let mut state = ScanState::new(self.config.limits);

        if self.filter.descends_into(0) {
            self.scan_dir(root, root, 0, &mut tree, &mut state)?;
        }

        debug!(
            root = %root.display(),
            directories = state.dir_count(),
            files = state.file_count(),
            examined = state.examined(),
            truncated = state.is_truncated(),
            "scan finished"
        );

        Ok(Scan { tree, state })
    }

    fn scan_dir(
        &self,
        root: &Path,
        dir: &Path,
        depth: usize,
        tree: &mut TreeModel,
        state: &mut ScanState,
    ) -> Result<()> {
        let Some(entries) = read_sorted_entries(dir)? else {
            return Ok(());
        };

        for entry in entries {
            if !state.examine() {
                break;
            }

            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    debug!(path = %path.display(), "permission denied, skipping entry");
                    continue;
                }
                Err(e) => return Err(SproutError::io(&path, e)),
            };
            // Symlinks are not followed: a link is a leaf, whatever it points to
            let is_dir = file_type.is_dir();

            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };

            if let Err(reason) = self.filter.check(relative, is_dir) {
                trace!(path = %relative.display(), ?reason, "rejected");
                continue;
            }

            let kind = if is_dir {
                NodeKind::Directory
            } else {
                NodeKind::File
            };
            if !state.admit(kind) {
                break;
            }
            tree.insert(relative, kind);

            if is_dir && self.filter.descends_into(depth + 1) {
                self.scan_dir(root, &path, depth + 1, tree, state)?;
                if state.is_truncated() {
                    break;
                }
            }
        }

        Ok(())
    }
}

/// Read a directory's entries sorted by name.
///
/// Returns `Ok(None)` when the listing is not permitted; the directory then
/// simply has no children. The handle is closed before returning.
fn read_sorted_entries(dir: &Path) -> Result<Option<Vec<DirEntry>>> {
    let read_dir = match fs::read_dir(dir) {
        Ok(r) => r,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            debug!(path = %dir.display(), "permission denied, not listing");
            return Ok(None);
        }
        Err(e) => return Err(SproutError::io(dir, e)),
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(e) => entries.push(e),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                debug!(path = %dir.display(), "permission denied reading entry");
            }
            Err(e) => return Err(SproutError::io(dir, e)),
        }
    }

    entries.sort_by_key(|e| e.file_name());
    Ok(Some(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;
    use crate::tree::{ScanLimits, TruncationCause};

    fn scan(tree: &TestTree, config: ScanConfig) -> Scan {
        Scanner::new(config).scan(tree.path()).unwrap()
    }

    fn child_names(node: &crate::tree::TreeNode) -> Vec<&str> {
        node.children.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_basic_scenario() {
        let t = TestTree::new();
        t.add_file("x.txt", "");
        t.add_file("y.txt", "");
        t.add_file("sub/z.txt", "");

        let result = scan(&t, ScanConfig::default());
        let root = result.tree.root();
        assert_eq!(root.kind, NodeKind::Root);
        assert_eq!(child_names(root), vec!["sub", "x.txt", "y.txt"]);
        assert_eq!(child_names(root.child("sub").unwrap()), vec!["z.txt"]);
        assert_eq!(result.state.file_count(), 3);
        assert_eq!(result.state.dir_count(), 1);
        assert!(!result.state.is_truncated());
    }

    #[test]
    fn test_max_depth_zero_admits_nothing() {
        let t = TestTree::new();
        t.add_file("a.txt", "");
        t.add_file("d/b.txt", "");

        let result = scan(
            &t,
            ScanConfig {
                max_depth: Some(0),
                ..Default::default()
            },
        );
        assert!(result.tree.root().children.is_empty());
        assert_eq!(result.state.admitted(), 0);
        assert_eq!(result.state.examined(), 0);
    }

    #[test]
    fn test_max_depth_one_keeps_direct_children_only() {
        let t = TestTree::new();
        t.add_file("a.txt", "");
        t.add_file("d/b.txt", "");

        let result = scan(
            &t,
            ScanConfig {
                max_depth: Some(1),
                ..Default::default()
            },
        );
        let root = result.tree.root();
        assert_eq!(child_names(root), vec!["a.txt", "d"]);
        assert!(root.child("d").unwrap().children.is_empty());
        assert_eq!(result.state.dir_count(), 1);
        assert_eq!(result.state.file_count(), 1);
    }

    #[test]
    fn test_hidden_entries_and_their_contents_skipped() {
        let t = TestTree::new();
        t.add_file(".git/config", "");
        t.add_file("__pycache__/mod.pyc", "");
        t.add_file("report.txt", "");

        let hidden_off = scan(&t, ScanConfig::default());
        assert_eq!(child_names(hidden_off.tree.root()), vec!["report.txt"]);

        let hidden_on = scan(
            &t,
            ScanConfig {
                show_all: true,
                ..Default::default()
            },
        );
        assert_eq!(
            child_names(hidden_on.tree.root()),
            vec![".git", "__pycache__", "report.txt"]
        );
        assert_eq!(hidden_on.state.file_count(), 3);
    }

    #[test]
    fn test_dirs_only_keeps_file_only_dirs_as_empty() {
        let t = TestTree::new();
        t.add_file("top.txt", "");
        t.add_file("leaf/only.txt", "");
        t.add_file("outer/inner/deep.txt", "");

        let result = scan(
            &t,
            ScanConfig {
                dirs_only: true,
                ..Default::default()
            },
        );
        let root = result.tree.root();
        assert_eq!(child_names(root), vec!["leaf", "outer"]);
        assert!(root.child("leaf").unwrap().children.is_empty());
        assert_eq!(child_names(root.child("outer").unwrap()), vec!["inner"]);
        assert_eq!(result.state.file_count(), 0);
        assert_eq!(result.state.dir_count(), 3);
    }

    #[test]
    fn test_entry_limit_truncates_at_cap() {
        let t = TestTree::new();
        for i in 0..10 {
            t.add_file(&format!("f{:02}.txt", i), "");
        }

        let result = scan(
            &t,
            ScanConfig {
                limits: ScanLimits {
                    max_entries: 4,
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        assert_eq!(result.state.truncation(), Some(TruncationCause::EntryLimit));
        assert_eq!(result.state.admitted(), 4);
        assert_eq!(
            child_names(result.tree.root()),
            vec!["f00.txt", "f01.txt", "f02.txt", "f03.txt"]
        );
    }

    #[test]
    fn test_default_entry_limit() {
        let t = TestTree::new();
        for i in 0..1005 {
            t.add_file(&format!("f{:04}", i), "");
        }

        let result = scan(&t, ScanConfig::default());
        assert!(result.state.is_truncated());
        assert_eq!(result.state.admitted(), 1000);
        assert_eq!(result.tree.root().children.len(), 1000);
    }

    #[test]
    fn test_exactly_cap_entries_is_not_truncated() {
        let t = TestTree::new();
        for i in 0..3 {
            t.add_file(&format!("f{}", i), "");
        }
        let result = scan(
            &t,
            ScanConfig {
                limits: ScanLimits {
                    max_entries: 3,
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        assert!(!result.state.is_truncated());
        assert_eq!(result.state.admitted(), 3);
    }

    #[test]
    fn test_truncation_stops_admission_everywhere() {
        let t = TestTree::new();
        t.add_file("a/1", "");
        t.add_file("a/2", "");
        t.add_file("b/3", "");

        let result = scan(
            &t,
            ScanConfig {
                limits: ScanLimits {
                    max_entries: 2,
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        let root = result.tree.root();
        assert_eq!(child_names(root), vec!["a"]);
        assert_eq!(child_names(root.child("a").unwrap()), vec!["1"]);
        assert_eq!(result.state.truncation(), Some(TruncationCause::EntryLimit));
    }

    #[test]
    fn test_scan_budget_counts_rejected_entries() {
        let t = TestTree::new();
        for i in 0..20 {
            t.add_file(&format!(".hidden{:02}", i), "");
        }
        t.add_file("visible.txt", "");

        let result = scan(
            &t,
            ScanConfig {
                limits: ScanLimits {
                    scan_budget: 10,
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        assert_eq!(result.state.truncation(), Some(TruncationCause::ScanBudget));
        assert_eq!(result.state.examined(), 10);
        assert_eq!(result.state.admitted(), 0);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let t = TestTree::new();
        t.add_file("b/c.txt", "");
        t.add_file("a.txt", "");
        t.add_file("b/a/d.txt", "");

        let first = scan(&t, ScanConfig::default());
        let second = scan(&t, ScanConfig::default());
        let first = serde_json::to_string(first.tree.root()).unwrap();
        let second = serde_json::to_string(second.tree.root()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_vanished_root_is_an_io_error() {
        let t = TestTree::new();
        let root = t.add_dir("gone");
        std::fs::remove_dir(&root).unwrap();

        let err = Scanner::new(ScanConfig::default()).scan(&root).unwrap_err();
        match err {
            SproutError::Io { path, source } => {
                assert_eq!(path, root);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_listing_a_file_is_an_io_error() {
        let t = TestTree::new();
        let file = t.add_file("plain.txt", "");

        let result = Scanner::new(ScanConfig::default()).scan(&file);
        assert!(matches!(result, Err(SproutError::Io { .. })));
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinks_are_leaves() {
        let t = TestTree::new();
        t.add_file("real/file.txt", "");
        std::os::unix::fs::symlink(t.path().join("real"), t.path().join("link"))
            .expect("Failed to create symlink");
        std::os::unix::fs::symlink("..", t.path().join("real/parent"))
            .expect("Failed to create symlink");

        let result = scan(&t, ScanConfig::default());
        let link = result.tree.root().child("link").unwrap();
        assert_eq!(link.kind, NodeKind::File);
        assert!(link.children.is_empty());
        let parent = result.tree.root().child("real").unwrap().child("parent");
        assert_eq!(parent.map(|p| p.kind), Some(NodeKind::File));
    }
}
