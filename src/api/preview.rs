//! `<iframe srcdoc>` preview sink

use wasm_bindgen::prelude::*;
use web_sys::HtmlIFrameElement;

use crate::compose::ComposedDocument;
use crate::store::PreviewSink;

/// Sandboxed iframe that renders each composed document
pub struct IframeSink {
    frame: HtmlIFrameElement,
}

impl IframeSink {
    /// Wrap a frame, applying the sandbox policy before anything is rendered
    pub fn new(frame: HtmlIFrameElement, sandbox: &str) -> Result<Self, JsValue> {
        frame.set_attribute("sandbox", sandbox)?;
        Ok(Self { frame })
    }
}

impl PreviewSink for IframeSink {
    fn replace_document(&mut self, document: &ComposedDocument) {
        // Replacing srcdoc reloads the frame with a fresh browsing context.
        self.frame.set_srcdoc(document.as_str());
    }
}
