//! Branch drawing helpers

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
pub const PIPE: &str = "│   ";
pub const SPACE: &str = "    ";

/// Connector drawn in front of a node's own label.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix handed down to a node's children.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, SPACE)
    } else {
        format!("{}{}", prefix, PIPE)
    }
}
