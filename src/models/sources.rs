//! The three source buffers
//!
//! `Sources` is a fixed record with one field per `FragmentKind`, so a buffer
//! can never be missing. An empty string is a valid buffer value.

use serde::{Deserialize, Serialize};
use super::fragment::FragmentKind;

/// Current text of every fragment
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Sources {
    pub markup: String,
    pub style: String,
    pub script: String,
}

impl Sources {
    /// Create sources from explicit fragment texts
    pub fn new(markup: impl Into<String>, style: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            style: style.into(),
            script: script.into(),
        }
    }

    /// Sources with all three buffers empty
    pub fn empty() -> Self {
        Self::new("", "", "")
    }

    /// Get the buffer for a fragment kind
    pub fn get(&self, kind: FragmentKind) -> &str {
        match kind {
            FragmentKind::Markup => &self.markup,
            FragmentKind::Style => &self.style,
            FragmentKind::Script => &self.script,
        }
    }

    /// Mutable access to the buffer for a fragment kind
    pub fn get_mut(&mut self, kind: FragmentKind) -> &mut String {
        match kind {
            FragmentKind::Markup => &mut self.markup,
            FragmentKind::Style => &mut self.style,
            FragmentKind::Script => &mut self.script,
        }
    }

    /// Replace a buffer, returning the previous text
    pub fn replace(&mut self, kind: FragmentKind, text: String) -> String {
        std::mem::replace(self.get_mut(kind), text)
    }
}

impl Default for Sources {
    /// The built-in playground content
    fn default() -> Self {
        Self::new(
            FragmentKind::Markup.default_source(),
            FragmentKind::Style.default_source(),
            FragmentKind::Script.default_source(),
        )
    }
}
