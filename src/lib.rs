//! Live Code Playground WASM Module
//!
//! Core of an in-browser HTML/CSS/JS playground: heuristic source
//! formatters, the composer that turns three fragments into one previewable
//! document, and the persisted session that ties them together.

pub mod api;
pub mod compose;
pub mod config;
pub mod export;
pub mod format;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use compose::{compose, ComposedDocument};
pub use config::PlaygroundConfig;
pub use export::ExportBundle;
pub use format::format;
pub use models::{FragmentKind, Sources};
pub use store::{EraseConfirmation, Session};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        crate::wasm_warn!("Logger already initialized");
    }

    log::info!("Playground WASM module initialized");
}
