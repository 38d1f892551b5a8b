//! JSON output formatting

use std::io;

use serde::Serialize;

use crate::tree::{Scan, ScanLimits, TreeNode, TruncationCause};

/// Serialized form of a whole scan.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    tree: &'a TreeNode,
    directories: usize,
    files: usize,
    limits: &'a ScanLimits,
    truncated: Option<TruncationCause>,
    notice: Option<String>,
}

/// Serialize a scan as pretty-printed JSON.
pub fn to_json(scan: &Scan) -> serde_json::Result<String> {
    let report = JsonReport {
        tree: scan.tree.root(),
        directories: scan.state.dir_count(),
        files: scan.state.file_count(),
        limits: scan.state.limits(),
        truncated: scan.state.truncation(),
        notice: scan.state.notice(),
    };
    serde_json::to_string_pretty(&report)
}

/// Print a scan as pretty-printed JSON to stdout.
pub fn print_json(scan: &Scan) -> io::Result<()> {
    let json = to_json(scan).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
