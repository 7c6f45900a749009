//! Live preview subscriber
//!
//! Hands every freshly composed document to a `PreviewSink`. The handoff is
//! one-way: the sink owns its render lifecycle and reports nothing back.

use crate::compose::ComposedDocument;
use super::observer::{SourceChange, SourceObserver};

/// Sandboxed render surface that accepts whole documents
pub trait PreviewSink {
    /// Replace the rendered document, reloading the render context
    fn replace_document(&mut self, document: &ComposedDocument);
}

/// Session observer that re-renders the preview on every change
pub struct LivePreview<S: PreviewSink> {
    sink: S,
    renders: usize,
}

impl<S: PreviewSink> LivePreview<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, renders: 0 }
    }

    /// Render the current document right away, before any change arrives
    pub fn prime(&mut self, document: &ComposedDocument) {
        self.render(document);
    }

    /// Documents handed to the sink so far
    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn render(&mut self, document: &ComposedDocument) {
        self.sink.replace_document(document);
        self.renders += 1;
        log::debug!("Preview render #{} ({} bytes)", self.renders, document.as_str().len());
    }
}

impl<S: PreviewSink> SourceObserver for LivePreview<S> {
    fn sources_changed(&mut self, change: &SourceChange<'_>) {
        self.render(change.composed());
    }
}
