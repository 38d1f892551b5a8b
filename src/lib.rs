//! Sprout - draw directory trees with hidden-file, depth and size guards

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, SproutError};
pub use output::{
    Line, LineKind, OutputConfig, Renderer, format_lines, print_json, print_lines, to_json,
    write_lines,
};
pub use tree::{
    NodeKind, Scan, ScanConfig, ScanLimits, ScanState, Scanner, TreeModel, TreeNode,
    TruncationCause, resolve_root,
};
