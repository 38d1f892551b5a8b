//! Configuration types for the scanner

use serde::Serialize;

/// Number of entries admitted into one tree before output is truncated.
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Number of directory entries examined (admitted or not) before the scan
/// gives up. Guards against huge trees that filter down to almost nothing.
pub const DEFAULT_SCAN_BUDGET: usize = 100_000;

/// Hard caps enforced while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanLimits {
    pub max_entries: usize,
    pub scan_budget: usize,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            scan_budget: DEFAULT_SCAN_BUDGET,
        }
    }
}

/// Configuration for scanning behavior.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Include hidden entries (`.`-prefixed and `__`-prefixed names)
    pub show_all: bool,
    /// Deepest level admitted. The root's children are level 1, so `Some(0)`
    /// admits nothing below the root.
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
    /// Label entries with their path relative to the root instead of the bare name
    pub relative_paths: bool,
    pub ignore_patterns: Vec<String>,
    pub limits: ScanLimits,
}
