//! Error types for sprout
//!
//! Only the root lookup and unexpected I/O failures surface as errors.
//! Permission problems inside the tree and truncation are handled during the
//! scan and never reach the caller as failures.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SproutError>;

#[derive(Debug, Error)]
pub enum SproutError {
    /// The requested root does not exist
    #[error("cannot access '{}': No such file or directory", .0.display())]
    RootNotFound(PathBuf),

    /// The requested root exists but cannot be listed as a directory
    #[error("'{}' is not a directory", .0.display())]
    RootNotDirectory(PathBuf),

    /// Any other filesystem failure, tagged with the path being read
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SproutError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
