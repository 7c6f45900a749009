//! Source formatter
//!
//! Re-indents and normalizes whitespace for the three fragment kinds. The
//! formatters are line and token heuristics, not parsers: they never validate
//! or repair input, and they only ever change whitespace.
//!
//! # Module Structure
//!
//! - `indent`: shared line emitter that tracks indentation depth
//! - `markup`: tag-depth heuristic for HTML
//! - `style`: two-level rule/declaration layout for CSS
//! - `script`: brace-depth heuristic for JavaScript
//!
//! `format` is total: if a routine fails, the original text is returned and
//! a warning is logged.

pub mod indent;
pub mod markup;
pub mod script;
pub mod style;

use once_cell::sync::OnceCell;
use regex::Regex;
use thiserror::Error;

use crate::models::FragmentKind;

pub use indent::Indenter;
pub use markup::format_markup;
pub use script::format_script;
pub use style::format_style;

/// Indent unit used when no configuration overrides it
pub const DEFAULT_INDENT: &str = "  ";

/// Internal formatter failure
#[derive(Debug, Clone, Error)]
pub enum FormatError {
    /// A formatter pattern failed to compile
    #[error("Formatter pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

/// Format a fragment with the default indent unit
///
/// Never fails. On any internal error the input is returned unchanged.
pub fn format(text: &str, kind: FragmentKind) -> String {
    format_with(text, kind, DEFAULT_INDENT)
}

/// Format a fragment with a custom indent unit
pub fn format_with(text: &str, kind: FragmentKind, indent: &str) -> String {
    recover(text, kind, try_format(text, kind, indent))
}

/// Fall back to the original text when a routine failed
fn recover(text: &str, kind: FragmentKind, result: Result<String, FormatError>) -> String {
    match result {
        Ok(formatted) => formatted,
        Err(e) => {
            log::warn!("Formatting {} failed, keeping original text: {}", kind, e);
            text.to_string()
        }
    }
}

/// Format a fragment, surfacing internal errors instead of recovering
pub fn try_format(text: &str, kind: FragmentKind, indent: &str) -> Result<String, FormatError> {
    match kind {
        FragmentKind::Markup => format_markup(text, indent),
        FragmentKind::Style => format_style(text, indent),
        FragmentKind::Script => format_script(text, indent),
    }
}

/// Compile a formatter pattern once and reuse it
pub(crate) fn pattern(
    cell: &'static OnceCell<Regex>,
    source: &str,
) -> Result<&'static Regex, FormatError> {
    cell.get_or_try_init(|| Regex::new(source)).map_err(FormatError::from)
}

/// Trimmed, non-empty lines of a text
pub(crate) fn significant_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}
