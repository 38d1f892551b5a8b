//! Shared utility functions for tree scanning

use std::io;
use std::path::{Component, Path, PathBuf};

use glob::Pattern;

use crate::error::{Result, SproutError};

/// Name prefixes that mark an entry as hidden: dotfiles, and `__`-prefixed
/// generated directories such as `__pycache__`.
pub const HIDDEN_PREFIXES: [&str; 2] = [".", "__"];

/// Resolve a user-supplied root to an absolute directory path.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let resolved = match path.canonicalize() {
        Ok(p) => p,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SproutError::RootNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(SproutError::io(path, e)),
    };

    if !resolved.is_dir() {
        return Err(SproutError::RootNotDirectory(path.to_path_buf()));
    }

    Ok(resolved)
}

/// Get the name of a path, falling back to the full path for `/` and friends.
pub fn get_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Check whether a single name starts with a hidden marker.
pub fn is_hidden_name(name: &str) -> bool {
    HIDDEN_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// Check whether any component of a root-relative path is hidden.
pub fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| match c {
        Component::Normal(part) => is_hidden_name(&part.to_string_lossy()),
        _ => false,
    })
}

/// Number of path segments between the scan root and `relative`.
pub fn depth_of(relative: &Path) -> usize {
    relative
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count()
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Check if a name should be ignored based on ignore patterns.
pub fn should_ignore_name(name: &str, ignore_patterns: &[String]) -> bool {
    ignore_patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}
