//! Output configuration types

use termcolor::ColorChoice;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Passed straight to termcolor; `Always` colors even without a `TERM`
    pub color: ColorChoice,
    /// Omit the branch drawing and print one label per line
    pub suppress_branch_lines: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            suppress_branch_lines: false,
        }
    }
}
