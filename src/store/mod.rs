//! Session state
//!
//! A `Session` owns the three buffers and the active selection. It is an
//! explicit value: independent sessions never share state, which is what lets
//! tests run several of them side by side.
//!
//! ## Modules
//!
//! - `observer`: change notification seam
//! - `persist`: key-value persistence and the `Persister` observer
//! - `preview`: the `LivePreview` observer feeding a `PreviewSink`

pub mod observer;
pub mod persist;
pub mod preview;

use std::fmt;

use once_cell::unsync::OnceCell;

use crate::compose::ComposedDocument;
use crate::config::PlaygroundConfig;
use crate::export::ExportBundle;
use crate::format;
use crate::models::{FragmentKind, Sources};

pub use observer::{SourceChange, SourceObserver};
pub use persist::{load_sources, KeyValueStore, MemoryStore, Persister, StorageError};
pub use preview::{LivePreview, PreviewSink};

/// Answer to the "erase this buffer?" prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EraseConfirmation {
    Confirmed,
    Declined,
}

impl From<bool> for EraseConfirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            EraseConfirmation::Confirmed
        } else {
            EraseConfirmation::Declined
        }
    }
}

/// What the editing widget needs to render the active buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveView<'a> {
    pub kind: FragmentKind,
    pub text: &'a str,
    pub language_mode: &'static str,
}

/// Buffers, active selection and change subscribers for one playground
pub struct Session {
    sources: Sources,
    active: FragmentKind,
    indent_unit: String,
    composed: OnceCell<ComposedDocument>,
    observers: Vec<Box<dyn SourceObserver>>,
    /// At most one preview; notified after the other observers
    preview: Option<Box<dyn SourceObserver>>,
}

impl Session {
    /// Create a session over explicit buffers with default settings
    pub fn new(sources: Sources) -> Self {
        Self::with_config(sources, &PlaygroundConfig::default())
    }

    /// Create a session over explicit buffers
    pub fn with_config(sources: Sources, config: &PlaygroundConfig) -> Self {
        Self {
            sources,
            active: FragmentKind::default(),
            indent_unit: config.indent_unit.clone(),
            composed: OnceCell::new(),
            observers: Vec::new(),
            preview: None,
        }
    }

    /// Start a session from persisted storage
    ///
    /// Buffers are read once from `store`; when persistence is enabled the
    /// store is then kept by a `Persister` that writes every later change.
    pub fn open<K: KeyValueStore + 'static>(store: K, config: &PlaygroundConfig) -> Self {
        if !config.persist {
            log::debug!("Persistence disabled, starting from built-in defaults");
            return Self::with_config(Sources::default(), config);
        }

        let sources = load_sources(&store, &config.storage_prefix);
        let mut session = Self::with_config(sources, config);
        session.subscribe(Box::new(Persister::new(store, config.storage_prefix.clone())));
        session
    }

    /// Add a change observer; observers are notified in subscription order
    pub fn subscribe(&mut self, observer: Box<dyn SourceObserver>) {
        self.observers.push(observer);
    }

    /// Install the preview observer, replacing any previous one
    ///
    /// Returns whether a preview was replaced.
    pub fn attach_preview(&mut self, preview: Box<dyn SourceObserver>) -> bool {
        let replaced = self.preview.replace(preview).is_some();
        if replaced {
            log::debug!("Previous preview detached");
        }
        replaced
    }

    /// Current text of a buffer
    pub fn get(&self, kind: FragmentKind) -> &str {
        self.sources.get(kind)
    }

    pub fn sources(&self) -> &Sources {
        &self.sources
    }

    /// Replace a buffer and notify observers
    pub fn set(&mut self, kind: FragmentKind, text: impl Into<String>) {
        let text = text.into();
        log::debug!("Set {} ({} bytes)", kind, text.len());

        self.sources.replace(kind, text);
        self.composed = OnceCell::new();

        let change = SourceChange::new(kind, &self.sources, &self.composed);
        for observer in self.observers.iter_mut().chain(self.preview.iter_mut()) {
            observer.sources_changed(&change);
        }
    }

    pub fn active(&self) -> FragmentKind {
        self.active
    }

    /// Switch the buffer being edited; no buffer changes
    pub fn select_active(&mut self, kind: FragmentKind) {
        self.active = kind;
    }

    pub fn active_text(&self) -> &str {
        self.get(self.active)
    }

    /// Active buffer with its language mode, for the editing widget
    pub fn active_view(&self) -> ActiveView<'_> {
        ActiveView {
            kind: self.active,
            text: self.active_text(),
            language_mode: self.active.language_mode(),
        }
    }

    /// Replace the active buffer (editor on-change hook)
    pub fn edit_active(&mut self, text: impl Into<String>) {
        self.set(self.active, text);
    }

    /// Reformat the active buffer in place
    ///
    /// Returns whether the text changed. The buffer is written back either
    /// way.
    pub fn format_active(&mut self) -> bool {
        let kind = self.active;
        let original = self.get(kind);
        let formatted = format::format_with(original, kind, &self.indent_unit);
        let changed = formatted != original;

        self.set(kind, formatted);
        changed
    }

    /// Clear the active buffer if the user confirmed
    ///
    /// Returns whether the buffer was cleared.
    pub fn erase_active(&mut self, confirmation: EraseConfirmation) -> bool {
        match confirmation {
            EraseConfirmation::Confirmed => {
                self.set(self.active, String::new());
                true
            }
            EraseConfirmation::Declined => {
                log::warn!("Erase of {} declined", self.active);
                false
            }
        }
    }

    /// Document combining the current buffers, recomputed after each change
    pub fn composed(&self) -> &ComposedDocument {
        self.composed
            .get_or_init(|| ComposedDocument::from_sources(&self.sources))
    }

    /// Raw buffers in export form
    pub fn export_bundle(&self) -> ExportBundle {
        ExportBundle::from_sources(&self.sources)
    }

    /// Replace all three buffers from an imported bundle
    pub fn apply_bundle(&mut self, bundle: ExportBundle) {
        let sources = bundle.into_sources();
        for kind in FragmentKind::ALL {
            self.set(kind, sources.get(kind));
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Sources::default())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("sources", &self.sources)
            .field("active", &self.active)
            .field("indent_unit", &self.indent_unit)
            .field("observers", &self.observers.len())
            .field("preview", &self.preview.is_some())
            .finish()
    }
}
