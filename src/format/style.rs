//! CSS formatter
//!
//! Breaks lines after `{` and `;` and puts every `}` on its own line, then
//! lays rules out on two levels: selector lines and closing braces at column
//! zero, everything else indented once. Nested rules are flattened to the
//! same two levels.

use super::indent::Indenter;
use super::{significant_lines, FormatError};

/// Re-indent CSS as flat rule blocks
pub fn format_style(text: &str, indent: &str) -> Result<String, FormatError> {
    let expanded = text
        .replace('{', "{\n")
        .replace(';', ";\n")
        .replace('}', "\n}\n");

    let mut out = Indenter::new(indent);
    for line in significant_lines(&expanded) {
        let depth = if line.contains('{') || line == "}" { 0 } else { 1 };
        out.emit_at(depth, line);
    }

    Ok(out.finish())
}
