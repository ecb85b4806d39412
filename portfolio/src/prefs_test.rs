use std::{cell::RefCell, collections::HashMap};

use super::*;

#[derive(Default)]
struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    writes: RefCell<Vec<(String, String)>>,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        self.writes.borrow_mut().push((key.to_owned(), value.to_owned()));
        Ok(())
    }
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(anyhow::Error::msg("storage disabled"))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(anyhow::Error::msg("quota exceeded"))
    }
}

struct Ambient(Option<bool>);

impl ColorSchemeProbe for Ambient {
    fn prefers_dark(&self) -> Result<Option<bool>> {
        Ok(self.0)
    }
}

struct BrokenProbe;

impl ColorSchemeProbe for BrokenProbe {
    fn prefers_dark(&self) -> Result<Option<bool>> {
        Err(anyhow::Error::msg("matchMedia missing"))
    }
}

// =============================================================
// PreferenceStore
// =============================================================

#[test]
fn read_returns_stored_value() {
    let prefs = PreferenceStore::new(Rc::new(MemoryStore::with(THEME_KEY, "dark")));
    assert_eq!(prefs.read(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(prefs.read("missing"), None);
}

#[test]
fn read_failure_is_swallowed() {
    let prefs = PreferenceStore::new(Rc::new(BrokenStore));
    assert_eq!(prefs.read(THEME_KEY), None);
    assert_eq!(prefs.stored_theme(), None);
}

#[test]
fn write_failure_is_swallowed() {
    let prefs = PreferenceStore::new(Rc::new(BrokenStore));
    prefs.write(THEME_KEY, "dark");
    prefs.store_theme(Theme::Light);
}

#[test]
fn store_theme_writes_theme_key() {
    let store = Rc::new(MemoryStore::default());
    let prefs = PreferenceStore::new(store.clone());

    prefs.store_theme(Theme::Dark);

    assert_eq!(
        *store.writes.borrow(),
        vec![(THEME_KEY.to_owned(), "dark".to_owned())]
    );
    assert_eq!(prefs.stored_theme(), Some(Theme::Dark));
}

#[test]
fn null_store_remembers_nothing() {
    let prefs = PreferenceStore::default();
    prefs.store_theme(Theme::Dark);
    assert_eq!(prefs.stored_theme(), None);
}

// =============================================================
// resolve_theme
// =============================================================

#[test]
fn stored_value_wins_over_ambient() {
    let prefs = PreferenceStore::new(Rc::new(MemoryStore::with(THEME_KEY, "light")));
    assert_eq!(resolve_theme(&prefs, &Ambient(Some(true))), Theme::Light);

    let prefs = PreferenceStore::new(Rc::new(MemoryStore::with(THEME_KEY, "dark")));
    assert_eq!(resolve_theme(&prefs, &Ambient(Some(false))), Theme::Dark);
}

#[test]
fn ambient_used_when_nothing_stored() {
    let prefs = PreferenceStore::new(Rc::new(MemoryStore::default()));
    assert_eq!(resolve_theme(&prefs, &Ambient(Some(true))), Theme::Dark);
    assert_eq!(resolve_theme(&prefs, &Ambient(Some(false))), Theme::Light);
}

#[test]
fn empty_stored_value_defers_to_ambient() {
    let prefs = PreferenceStore::new(Rc::new(MemoryStore::with(THEME_KEY, "")));
    assert_eq!(resolve_theme(&prefs, &Ambient(Some(true))), Theme::Dark);
}

#[test]
fn light_when_no_signal_at_all() {
    let prefs = PreferenceStore::default();
    assert_eq!(resolve_theme(&prefs, &NoColorScheme), Theme::Light);
}

#[test]
fn broken_store_falls_back_to_ambient_then_light() {
    let prefs = PreferenceStore::new(Rc::new(BrokenStore));
    assert_eq!(resolve_theme(&prefs, &Ambient(Some(true))), Theme::Dark);
    assert_eq!(resolve_theme(&prefs, &BrokenProbe), Theme::Light);
}

#[test]
fn resolving_never_writes() {
    let store = Rc::new(MemoryStore::default());
    let prefs = PreferenceStore::new(store.clone());

    let theme = resolve_theme(&prefs, &Ambient(Some(true)));

    assert_eq!(theme, Theme::Dark);
    assert!(store.writes.borrow().is_empty());
}
