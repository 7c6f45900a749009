//! JavaScript formatter
//!
//! Breaks lines after every `{`, `;` and `}`, collapses whitespace after
//! commas, then indents by brace depth the same way the markup formatter
//! indents by tag depth.
//!
//! Braces and semicolons are matched textually, so ones inside strings,
//! comments, regex literals or `for (;;)` headers also break lines and move
//! the depth.

use once_cell::sync::OnceCell;
use regex::Regex;

use super::indent::Indenter;
use super::{pattern, significant_lines, FormatError};

static COMMA_SPACING: OnceCell<Regex> = OnceCell::new();

/// Re-indent JavaScript by brace depth
pub fn format_script(text: &str, indent: &str) -> Result<String, FormatError> {
    let comma_spacing = pattern(&COMMA_SPACING, r",\s+")?;

    let expanded = text
        .replace('{', "{\n")
        .replace(';', ";\n")
        .replace('}', "}\n");
    let expanded = comma_spacing.replace_all(&expanded, ", ");

    let mut out = Indenter::new(indent);
    for line in significant_lines(&expanded) {
        if line.contains('}') {
            out.dedent();
        }
        out.emit(line);
        if line.contains('{') {
            out.indent();
        }
    }

    Ok(out.finish())
}
