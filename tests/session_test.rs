// Session behavior: persistence, preview, erase gate and buffer invariants

use std::cell::RefCell;
use std::rc::Rc;

use playground_wasm::compose::{compose, ComposedDocument};
use playground_wasm::config::PlaygroundConfig;
use playground_wasm::models::{FragmentKind, Sources};
use playground_wasm::store::{
    EraseConfirmation, KeyValueStore, LivePreview, MemoryStore, PreviewSink, Session, StorageError,
};
use proptest::prelude::*;

/// Preview sink that keeps every document it receives
#[derive(Clone, Default)]
struct RecordingSink(Rc<RefCell<Vec<String>>>);

impl PreviewSink for RecordingSink {
    fn replace_document(&mut self, document: &ComposedDocument) {
        self.0.borrow_mut().push(document.as_str().to_string());
    }
}

/// Storage that is full: reads work, writes fail
#[derive(Clone, Default)]
struct FullStore {
    inner: MemoryStore,
    failed_writes: Rc<RefCell<usize>>,
}

impl KeyValueStore for FullStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        *self.failed_writes.borrow_mut() += 1;
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "QuotaExceededError".to_string(),
        })
    }
}

#[test]
fn test_persistence_round_trip() {
    let config = PlaygroundConfig::default();
    let store = MemoryStore::new();

    let mut first = Session::open(store.clone(), &config);
    first.set(FragmentKind::Markup, "<p>x</p>");
    drop(first);

    // Simulated reload against the same storage
    let second = Session::open(store.clone(), &config);
    assert_eq!(second.get(FragmentKind::Markup), "<p>x</p>");
    assert_eq!(second.get(FragmentKind::Style), FragmentKind::Style.default_source());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_erased_buffer_persists_as_empty_not_missing() {
    let config = PlaygroundConfig::default();
    let store = MemoryStore::new();

    let mut first = Session::open(store.clone(), &config);
    first.select_active(FragmentKind::Script);
    assert!(first.erase_active(EraseConfirmation::Confirmed));

    let second = Session::open(store, &config);
    assert_eq!(second.get(FragmentKind::Script), "");
}

#[test]
fn test_storage_prefix_separates_sessions() {
    let store = MemoryStore::new();
    let a = PlaygroundConfig { storage_prefix: "a".to_string(), ..PlaygroundConfig::default() };
    let b = PlaygroundConfig { storage_prefix: "b".to_string(), ..PlaygroundConfig::default() };

    Session::open(store.clone(), &a).set(FragmentKind::Style, "a{}");

    assert_eq!(Session::open(store.clone(), &a).get(FragmentKind::Style), "a{}");
    assert_eq!(
        Session::open(store, &b).get(FragmentKind::Style),
        FragmentKind::Style.default_source()
    );
}

#[test]
fn test_persistence_disabled_ignores_storage() {
    let mut store = MemoryStore::new();
    store.set_item("playground:html", "<p>saved</p>").unwrap();
    let config = PlaygroundConfig { persist: false, ..PlaygroundConfig::default() };

    let mut session = Session::open(store.clone(), &config);
    assert_eq!(session.get(FragmentKind::Markup), FragmentKind::Markup.default_source());

    session.set(FragmentKind::Markup, "<p>new</p>");
    assert_eq!(store.get_item("playground:html").unwrap(), Some("<p>saved</p>".to_string()));
}

#[test]
fn test_failed_writes_keep_in_memory_change() {
    let store = FullStore::default();
    let failed = store.failed_writes.clone();
    let mut session = Session::open(store, &PlaygroundConfig::default());

    session.set(FragmentKind::Style, "p{}");
    session.set(FragmentKind::Script, "go()");

    assert_eq!(*failed.borrow(), 2);
    assert_eq!(session.get(FragmentKind::Style), "p{}");
    assert_eq!(session.get(FragmentKind::Script), "go()");
}

#[test]
fn test_live_preview_renders_every_change() {
    let sink = RecordingSink::default();
    let rendered = sink.0.clone();
    let mut session = Session::new(Sources::empty());

    let mut preview = LivePreview::new(sink);
    preview.prime(session.composed());
    session.subscribe(Box::new(preview));

    session.set(FragmentKind::Markup, "<p>one</p>");
    session.set(FragmentKind::Style, "p{color:red}");

    let rendered = rendered.borrow();
    assert_eq!(rendered.len(), 3);
    assert_eq!(rendered[0], compose("", "", ""));
    assert_eq!(rendered[2], compose("<p>one</p>", "p{color:red}", ""));
    assert_eq!(rendered[2], session.composed().as_str());
}

#[test]
fn test_declined_erase_renders_nothing() {
    let sink = RecordingSink::default();
    let rendered = sink.0.clone();
    let mut session = Session::default();
    session.subscribe(Box::new(LivePreview::new(sink)));

    assert!(!session.erase_active(EraseConfirmation::Declined));
    assert_eq!(session.get(FragmentKind::Markup), FragmentKind::Markup.default_source());
    assert!(rendered.borrow().is_empty());

    assert!(session.erase_active(EraseConfirmation::Confirmed));
    assert_eq!(session.get(FragmentKind::Markup), "");
    assert_eq!(rendered.borrow().len(), 1);
}

#[test]
fn test_format_active_persists_and_renders() {
    let store = MemoryStore::new();
    let sink = RecordingSink::default();
    let rendered = sink.0.clone();

    let mut session = Session::open(store.clone(), &PlaygroundConfig::default());
    session.subscribe(Box::new(LivePreview::new(sink)));
    session.select_active(FragmentKind::Style);
    session.edit_active("body{margin:0;}");

    assert!(session.format_active());

    let formatted = "body{\n  margin:0;\n}";
    assert_eq!(session.get(FragmentKind::Style), formatted);
    assert_eq!(store.get_item("playground:css").unwrap().as_deref(), Some(formatted));
    assert!(rendered.borrow().last().unwrap().contains(formatted));
}

#[test]
fn test_sessions_are_independent() {
    let mut a = Session::new(Sources::empty());
    let b = Session::new(Sources::empty());

    a.set(FragmentKind::Markup, "only in a");

    assert_eq!(a.get(FragmentKind::Markup), "only in a");
    assert_eq!(b.get(FragmentKind::Markup), "");
}

#[test]
fn test_import_replaces_all_buffers_and_persists() {
    let store = MemoryStore::new();
    let mut session = Session::open(store.clone(), &PlaygroundConfig::default());

    let json = r#"{"html": "<b>i</b>", "css": "b{}", "javascript": ""}"#;
    session.apply_bundle(playground_wasm::ExportBundle::from_json(json).unwrap());

    assert_eq!(session.sources(), &Sources::new("<b>i</b>", "b{}", ""));
    assert_eq!(store.len(), 3);
    assert_eq!(store.get_item("playground:javascript").unwrap(), Some(String::new()));
}

#[derive(Debug, Clone)]
enum Op {
    Set(usize, String),
    Select(usize),
    Erase(bool),
    Format,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..3usize, "[a-z{};<>/ \n]{0,20}").prop_map(|(k, t)| Op::Set(k, t)),
        (0..3usize).prop_map(Op::Select),
        any::<bool>().prop_map(Op::Erase),
        Just(Op::Format),
    ]
}

proptest! {
    #[test]
    fn buffers_stay_defined_and_mirror_storage(ops in prop::collection::vec(op(), 0..30)) {
        let store = MemoryStore::new();
        let config = PlaygroundConfig::default();
        let mut session = Session::open(store.clone(), &config);

        for op in ops {
            match op {
                Op::Set(k, text) => session.set(FragmentKind::ALL[k], text),
                Op::Select(k) => session.select_active(FragmentKind::ALL[k]),
                Op::Erase(confirmed) => {
                    session.erase_active(confirmed.into());
                }
                Op::Format => {
                    session.format_active();
                }
            }
        }

        let reloaded = Session::open(store, &config);
        for kind in FragmentKind::ALL {
            prop_assert_eq!(reloaded.get(kind), session.get(kind));
        }
        prop_assert!(FragmentKind::ALL.contains(&session.active()));
        prop_assert_eq!(
            session.composed().as_str(),
            compose(
                session.get(FragmentKind::Markup),
                session.get(FragmentKind::Style),
                session.get(FragmentKind::Script),
            )
        );
    }
}
