//! Playground WASM API
//!
//! This module provides the JavaScript-facing API for the playground.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, deserialization and error conversion
//! - `playground`: the `Playground` class owning a session
//! - `storage`: `localStorage` backend for persisted buffers
//! - `preview`: sandboxed `<iframe srcdoc>` preview sink
//!
//! Stateless helpers (`formatSource`, `composeDocument`, `fragmentKinds`)
//! live here.

pub mod helpers;
pub mod playground;
pub mod preview;
pub mod storage;

use wasm_bindgen::prelude::*;

use crate::compose::compose;
use crate::format::format;
use crate::models::FragmentKind;
use helpers::parse_kind;

pub use playground::Playground;
pub use preview::IframeSink;
pub use storage::LocalStorage;

/// Format source text without touching any session
#[wasm_bindgen(js_name = formatSource)]
pub fn format_source(text: &str, kind: &str) -> Result<String, JsValue> {
    Ok(format(text, parse_kind(kind)?))
}

/// Compose a preview document from raw fragments
#[wasm_bindgen(js_name = composeDocument)]
pub fn compose_document(markup: &str, style: &str, script: &str) -> String {
    compose(markup, style, script)
}

/// Tab ids in display order
#[wasm_bindgen(js_name = fragmentKinds)]
pub fn fragment_kinds() -> js_sys::Array {
    FragmentKind::ALL
        .iter()
        .map(|kind| JsValue::from_str(kind.tab_id()))
        .collect()
}
