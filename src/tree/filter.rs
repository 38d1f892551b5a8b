//! Admission filters for scanned entries

use std::path::Path;

use super::config::ScanConfig;
use super::utils::{depth_of, get_name, is_hidden, should_ignore_name};

/// Why an entry was kept out of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooDeep,
    Hidden,
    Ignored,
    NotADirectory,
}

/// Filters applied, in order, to every examined entry.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    show_all: bool,
    dirs_only: bool,
    max_depth: Option<usize>,
    ignore_patterns: Vec<String>,
}

impl EntryFilter {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            show_all: config.show_all,
            dirs_only: config.dirs_only,
            max_depth: config.max_depth,
            ignore_patterns: config.ignore_patterns.clone(),
        }
    }

    /// Check an entry given its path relative to the scan root.
    pub fn check(&self, relative: &Path, is_dir: bool) -> Result<(), Rejection> {
        if self.max_depth.is_some_and(|max| depth_of(relative) > max) {
            return Err(Rejection::TooDeep);
        }
        if !self.show_all && is_hidden(relative) {
            return Err(Rejection::Hidden);
        }
        if should_ignore_name(&get_name(relative), &self.ignore_patterns) {
            return Err(Rejection::Ignored);
        }
        if self.dirs_only && !is_dir {
            return Err(Rejection::NotADirectory);
        }
        Ok(())
    }

    /// Whether the children of a directory at `depth` should be listed.
    pub fn descends_into(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}
