//! Tree formatting and display
//!
//! - `render` - turns a scan into line records tagged with a semantic kind
//! - `terminal` - writes line records, colored per kind
//! - `json` - structured output of the whole scan

mod config;
mod json;
mod render;
mod terminal;
mod utils;

pub use config::OutputConfig;
pub use json::{print_json, to_json};
pub use render::{Line, LineKind, Renderer, summary_text};
pub use terminal::{format_lines, print_lines, write_lines};
pub use utils::{connector, continuation_prefix};
