//! Directory scanning and the in-memory tree model
//!
//! A [`Scanner`] walks the filesystem depth-first, applies the admission
//! filters, and inserts each admitted entry into a [`TreeModel`]. A shared
//! [`ScanState`] enforces the entry cap and the scan budget.

mod config;
mod filter;
mod node;
mod scanner;
mod state;
mod utils;

// Re-export public types
pub use config::{DEFAULT_MAX_ENTRIES, DEFAULT_SCAN_BUDGET, ScanConfig, ScanLimits};
pub use filter::{EntryFilter, Rejection};
pub use node::{NodeKind, TreeModel, TreeNode};
pub use scanner::{Scan, Scanner};
pub use state::{ScanState, TruncationCause};
pub use utils::{HIDDEN_PREFIXES, is_hidden, resolve_root};
