//! JSON export format
//!
//! `{ "html": ..., "css": ..., "javascript": ... }` with the raw buffer
//! values. Used for downloads and for importing a saved playground.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Sources;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid export JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The three buffers under their export field names
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExportBundle {
    pub html: String,
    pub css: String,
    pub javascript: String,
}

impl ExportBundle {
    pub fn from_sources(sources: &Sources) -> Self {
        Self {
            html: sources.markup.clone(),
            css: sources.style.clone(),
            javascript: sources.script.clone(),
        }
    }

    pub fn into_sources(self) -> Sources {
        Sources::new(self.html, self.css, self.javascript)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a previously exported bundle; all three fields are required
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }
}
