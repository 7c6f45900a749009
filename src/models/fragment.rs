//! Fragment kinds
//!
//! A playground document is made of exactly three source fragments. The
//! `FragmentKind` decides which formatter runs, which language mode the
//! editing widget uses, and under which key the fragment is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three source fragments
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    /// HTML body content
    #[default]
    Markup,
    /// CSS rules
    Style,
    /// JavaScript executed after the markup
    Script,
}

impl FragmentKind {
    /// All kinds, in tab order
    pub const ALL: [FragmentKind; 3] = [FragmentKind::Markup, FragmentKind::Style, FragmentKind::Script];

    /// Tab id, also used as the persisted key suffix and export field name
    pub fn tab_id(self) -> &'static str {
        match self {
            FragmentKind::Markup => "html",
            FragmentKind::Style => "css",
            FragmentKind::Script => "javascript",
        }
    }

    /// Label shown on the tab button
    pub fn label(self) -> &'static str {
        match self {
            FragmentKind::Markup => "HTML",
            FragmentKind::Style => "CSS",
            FragmentKind::Script => "JAVASCRIPT",
        }
    }

    /// Syntax-highlighting mode for the editing widget
    pub fn language_mode(self) -> &'static str {
        match self {
            FragmentKind::Markup => "html",
            FragmentKind::Style => "css",
            FragmentKind::Script => "javascript",
        }
    }

    /// Built-in fragment used when nothing was persisted
    pub fn default_source(self) -> &'static str {
        match self {
            FragmentKind::Markup => DEFAULT_MARKUP,
            FragmentKind::Style => DEFAULT_STYLE,
            FragmentKind::Script => DEFAULT_SCRIPT,
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tab_id())
    }
}

/// Returned when a tab name does not name any fragment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown fragment kind: '{0}' (expected html, css or javascript)")]
pub struct ParseFragmentKindError(pub String);

impl FromStr for FragmentKind {
    type Err = ParseFragmentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" | "markup" => Ok(FragmentKind::Markup),
            "css" | "style" => Ok(FragmentKind::Style),
            "javascript" | "js" | "script" => Ok(FragmentKind::Script),
            _ => Err(ParseFragmentKindError(s.to_string())),
        }
    }
}

pub const DEFAULT_MARKUP: &str = r#"<div class="hello">
  <h1>Hello World!</h1>
  <p>Start editing to see changes in real-time</p>
</div>"#;

pub const DEFAULT_STYLE: &str = r#"body {
  margin: 0;
  font-family: system-ui, sans-serif;
}

.hello {
  padding: 2rem;
  text-align: center;
}

h1 {
  color: #2563eb;
}"#;

pub const DEFAULT_SCRIPT: &str = r#"// Your JavaScript code here
document.querySelector('h1').addEventListener('click', () => {
  alert('Hello from JavaScript!');
});"#;
