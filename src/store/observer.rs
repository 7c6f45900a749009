//! Change notifications from the session
//!
//! Every buffer mutation publishes one `SourceChange` to each subscribed
//! observer, in subscription order. Persistence and live preview are both
//! observers and know nothing about each other.

use once_cell::unsync::OnceCell;

use crate::compose::ComposedDocument;
use crate::models::{FragmentKind, Sources};

/// A buffer was replaced
pub struct SourceChange<'a> {
    /// Which buffer changed
    pub kind: FragmentKind,
    /// All buffers after the change
    pub sources: &'a Sources,
    composed: &'a OnceCell<ComposedDocument>,
}

impl<'a> SourceChange<'a> {
    pub(crate) fn new(
        kind: FragmentKind,
        sources: &'a Sources,
        composed: &'a OnceCell<ComposedDocument>,
    ) -> Self {
        Self { kind, sources, composed }
    }

    /// Text of the changed buffer
    pub fn text(&self) -> &'a str {
        let sources: &'a Sources = self.sources;
        sources.get(self.kind)
    }

    /// Composed document for the new buffers, computed at most once per change
    pub fn composed(&self) -> &'a ComposedDocument {
        let sources: &'a Sources = self.sources;
        let cell: &'a OnceCell<ComposedDocument> = self.composed;
        cell.get_or_init(|| ComposedDocument::from_sources(sources))
    }
}

/// Subscriber to buffer changes
pub trait SourceObserver {
    fn sources_changed(&mut self, change: &SourceChange<'_>);
}
