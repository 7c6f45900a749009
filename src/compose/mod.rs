//! Preview document composer
//!
//! Combines the three buffers into one document for the sandboxed preview.
//! The order is fixed: styles first so they apply before the markup paints,
//! then the markup as the body, then the script so it runs once the markup
//! exists. Buffers are embedded verbatim; nothing is escaped.

use crate::models::Sources;

/// Sandbox capability the preview frame must run with: scripts enabled,
/// everything else isolated from the parent page
pub const SANDBOX_POLICY: &str = "allow-scripts";

/// A composed, renderable document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedDocument(String);

impl ComposedDocument {
    /// Compose a document from all three buffers
    pub fn from_sources(sources: &Sources) -> Self {
        Self(compose(&sources.markup, &sources.style, &sources.script))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compose markup, style and script into one document string
pub fn compose(markup: &str, style: &str, script: &str) -> String {
    let mut doc = String::with_capacity(markup.len() + style.len() + script.len() + 96);
    doc.push_str("<html>\n");
    doc.push_str("  <style>");
    doc.push_str(style);
    doc.push_str("</style>\n");
    doc.push_str("  <body>");
    doc.push_str(markup);
    doc.push_str("</body>\n");
    doc.push_str("  <script>");
    doc.push_str(script);
    doc.push_str("</script>\n");
    doc.push_str("</html>\n");
    doc
}
