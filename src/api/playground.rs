//! The `Playground` class exposed to JavaScript
//!
//! One instance per page. It owns a `Session`, restores it from
//! `localStorage`, keeps storage and the preview iframe in sync through the
//! session's observers, and exposes tab-name based accessors to the UI.

use wasm_bindgen::prelude::*;
use web_sys::HtmlIFrameElement;

use crate::api::helpers::{deserialize, js_error_text, parse_kind, validation_error};
use crate::api::preview::IframeSink;
use crate::api::storage::LocalStorage;
use crate::config::PlaygroundConfig;
use crate::export::ExportBundle;
use crate::models::Sources;
use crate::store::{EraseConfirmation, LivePreview, Session};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

#[wasm_bindgen]
pub struct Playground {
    session: Session,
    config: PlaygroundConfig,
}

#[wasm_bindgen]
impl Playground {
    /// Create a playground
    ///
    /// # Parameters
    /// - `config`: optional configuration object (see `PlaygroundConfig`);
    ///   `undefined` or `null` for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Playground, JsValue> {
        let config: PlaygroundConfig = if config.is_undefined() || config.is_null() {
            PlaygroundConfig::default()
        } else {
            deserialize(config, "Invalid playground config")?
        };
        config.validate().map_err(|e| validation_error(e.to_string()))?;

        let session = if config.persist {
            match LocalStorage::open() {
                Ok(store) => Session::open(store, &config),
                Err(e) => {
                    wasm_warn!("{}; edits will not be saved", e);
                    Session::with_config(Sources::default(), &config)
                }
            }
        } else {
            Session::with_config(Sources::default(), &config)
        };

        wasm_info!("Playground created (persist={}, prefix='{}')", config.persist, config.storage_prefix);
        Ok(Playground { session, config })
    }

    /// Render into a sandboxed iframe, now and after every change
    ///
    /// Attaching again replaces the previous frame.
    #[wasm_bindgen(js_name = attachPreview)]
    pub fn attach_preview(&mut self, frame: HtmlIFrameElement) -> Result<(), JsValue> {
        let sink = IframeSink::new(frame, &self.config.sandbox).map_err(|e| {
            wasm_error!("Could not sandbox preview frame: {}", js_error_text(&e));
            e
        })?;

        let mut preview = LivePreview::new(sink);
        preview.prime(self.session.composed());
        if self.session.attach_preview(Box::new(preview)) {
            wasm_log!("Previous preview frame detached");
        }

        wasm_log!("Preview attached with sandbox='{}'", self.config.sandbox);
        Ok(())
    }

    /// Current text of a buffer (`html`, `css` or `javascript`)
    pub fn get(&self, kind: &str) -> Result<String, JsValue> {
        Ok(self.session.get(parse_kind(kind)?).to_string())
    }

    /// Replace a buffer
    pub fn set(&mut self, kind: &str, text: String) -> Result<(), JsValue> {
        self.session.set(parse_kind(kind)?, text);
        Ok(())
    }

    /// Editor on-change hook: replace the active buffer
    #[wasm_bindgen(js_name = editActive)]
    pub fn edit_active(&mut self, text: String) {
        self.session.edit_active(text);
    }

    /// Switch tabs
    #[wasm_bindgen(js_name = selectActive)]
    pub fn select_active(&mut self, kind: &str) -> Result<(), JsValue> {
        self.session.select_active(parse_kind(kind)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = activeKind)]
    pub fn active_kind(&self) -> String {
        self.session.active().tab_id().to_string()
    }

    #[wasm_bindgen(js_name = activeLabel)]
    pub fn active_label(&self) -> String {
        self.session.active().label().to_string()
    }

    #[wasm_bindgen(js_name = activeText)]
    pub fn active_text(&self) -> String {
        self.session.active_text().to_string()
    }

    /// Highlighting mode for the active buffer
    #[wasm_bindgen(js_name = languageMode)]
    pub fn language_mode(&self) -> String {
        self.session.active_view().language_mode.to_string()
    }

    /// Reformat the active buffer; returns whether its text changed
    #[wasm_bindgen(js_name = formatActive)]
    pub fn format_active(&mut self) -> bool {
        let changed = self.session.format_active();
        wasm_log!("Formatted {} (changed={})", self.session.active(), changed);
        changed
    }

    /// Ask the user, then clear the active buffer
    ///
    /// Returns whether the buffer was cleared. A failing confirm dialog
    /// counts as "no".
    #[wasm_bindgen(js_name = eraseActive)]
    pub fn erase_active(&mut self) -> Result<bool, JsValue> {
        let window = web_sys::window().ok_or_else(|| validation_error("No window available"))?;
        let prompt = format!(
            "Erase all {} code? This cannot be undone.",
            self.session.active().label()
        );

        let confirmed = window.confirm_with_message(&prompt).unwrap_or_else(|e| {
            wasm_warn!("Confirm dialog failed: {}", js_error_text(&e));
            false
        });

        Ok(self.session.erase_active(EraseConfirmation::from(confirmed)))
    }

    /// The document currently shown in the preview
    pub fn composed(&self) -> String {
        self.session.composed().as_str().to_string()
    }

    /// `{ html, css, javascript }` as pretty JSON
    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsValue> {
        self.session
            .export_bundle()
            .to_json()
            .map_err(|e| validation_error(format!("Export failed: {}", e)))
    }

    /// Load all three buffers from exported JSON
    #[wasm_bindgen(js_name = importJson)]
    pub fn import_json(&mut self, json: &str) -> Result<(), JsValue> {
        let bundle = ExportBundle::from_json(json)
            .map_err(|e| validation_error(format!("Import failed: {}", e)))?;
        self.session.apply_bundle(bundle);
        wasm_info!("Imported playground JSON ({} bytes)", json.len());
        Ok(())
    }

    #[wasm_bindgen(js_name = exportFilename)]
    pub fn export_filename(&self) -> String {
        self.config.export_filename.clone()
    }
}
