//! HTML formatter
//!
//! Lines are kept as-is (trimmed); only their indentation changes. For each
//! line, in order:
//!
//! 1. a closing tag anywhere on the line closes one level before the line is
//!    emitted
//! 2. the line is emitted at the current depth
//! 3. an opening tag that is not self-closing opens one level after it
//!
//! A line such as `<h1>Hi</h1>` therefore closes then reopens a level. Depth
//! after the line is unchanged and the line itself sits one level out.

use once_cell::sync::OnceCell;
use regex::Regex;

use super::indent::Indenter;
use super::{pattern, significant_lines, FormatError};

static CLOSING_TAG: OnceCell<Regex> = OnceCell::new();
static OPENING_TAG: OnceCell<Regex> = OnceCell::new();

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Re-indent HTML by tag depth
pub fn format_markup(text: &str, indent: &str) -> Result<String, FormatError> {
    let closing = pattern(&CLOSING_TAG, r"</[A-Za-z][^>]*>")?;
    let opening = pattern(&OPENING_TAG, r"<([A-Za-z][A-Za-z0-9-]*)\b[^>]*>")?;

    let mut out = Indenter::new(indent);
    for line in significant_lines(text) {
        if closing.is_match(line) {
            out.dedent();
        }
        out.emit(line);
        if opens_element(opening, line) {
            out.indent();
        }
    }

    Ok(out.finish())
}

/// Whether the line has an opening tag that expects a matching close
fn opens_element(opening: &Regex, line: &str) -> bool {
    opening.captures_iter(line).any(|caps| {
        let self_closing = caps[0].ends_with("/>");
        !self_closing && !is_void_element(&caps[1])
    })
}

fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|void| void.eq_ignore_ascii_case(name))
}
