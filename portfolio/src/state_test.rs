use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use anyhow::Result;

use super::*;
use crate::{
    host::Viewport,
    prefs::{ColorSchemeProbe, KeyValueStore, PreferenceStore, THEME_KEY},
};

#[derive(Default)]
struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    writes: RefCell<Vec<(String, String)>>,
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

struct ThrowingStore;

impl KeyValueStore for ThrowingStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(anyhow::Error::msg("SecurityError: localStorage is not available"))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(anyhow::Error::msg("SecurityError: localStorage is not available"))
    }
}

struct Ambient(Option<bool>);

impl ColorSchemeProbe for Ambient {
    fn prefers_dark(&self) -> Result<Option<bool>> {
        Ok(self.0)
    }
}

#[derive(Default)]
struct RecordingViewport {
    scrolls_to_top: Cell<usize>,
    sections: Vec<&'static str>,
}

impl Viewport for RecordingViewport {
    fn scroll_to_top(&self) -> Result<()> {
        self.scrolls_to_top.set(self.scrolls_to_top.get() + 1);
        Ok(())
    }

    fn scroll_to_section(&self, anchor: &str) -> Result<bool> {
        Ok(self.sections.iter().any(|s| *s == anchor))
    }
}

fn host_with(store: Rc<MemoryStore>, viewport: Rc<RecordingViewport>) -> Host {
    Host {
        prefs: PreferenceStore::new(store),
        viewport,
        ..Host::detached()
    }
}

// =============================================================
// startup
// =============================================================

#[test]
fn fresh_state_starts_on_home() {
    let state = ViewState::default();
    assert_eq!(state.current_page, Page::Home);
    assert!(!state.is_scrolled);
    assert!(!state.is_mobile_menu_open);
    assert!(!state.is_dark_mode);
}

#[test]
fn ambient_dark_without_stored_value_starts_dark_and_writes_nothing() {
    let store = Rc::new(MemoryStore::default());
    let host = Host {
        prefs: PreferenceStore::new(store.clone()),
        color_scheme: Rc::new(Ambient(Some(true))),
        ..Host::detached()
    };

    let state = ViewState::load(&host);

    assert!(state.is_dark_mode);
    assert!(store.writes.borrow().is_empty());
}

#[test]
fn throwing_store_falls_back_to_ambient_then_light() {
    let host = Host {
        prefs: PreferenceStore::new(Rc::new(ThrowingStore)),
        color_scheme: Rc::new(Ambient(Some(true))),
        ..Host::detached()
    };
    assert!(ViewState::load(&host).is_dark_mode);

    let host = Host {
        prefs: PreferenceStore::new(Rc::new(ThrowingStore)),
        color_scheme: Rc::new(Ambient(None)),
        ..Host::detached()
    };
    assert!(!ViewState::load(&host).is_dark_mode);
}

// =============================================================
// navigate
// =============================================================

#[test]
fn navigate_sets_page_and_closes_menu() {
    let viewport = Rc::new(RecordingViewport::default());
    let host = host_with(Rc::new(MemoryStore::default()), viewport.clone());

    for menu_open in [true, false] {
        let mut state = ViewState::default();
        state.is_mobile_menu_open = menu_open;

        state.navigate(Page::Work, &host);

        assert_eq!(state.current_page, Page::Work);
        assert!(!state.is_mobile_menu_open);
    }

    assert_eq!(viewport.scrolls_to_top.get(), 2);
}

#[test]
fn navigate_with_unknown_id_lands_on_home() {
    let mut state = ViewState::default();
    state.navigate(Page::Contact, &Host::detached());
    state.navigate(Page::from_id("resume"), &Host::detached());
    assert_eq!(state.current_page, Page::Home);
}

#[test]
fn active_page_tracks_current_page() {
    let mut state = ViewState::default();
    state.navigate(Page::Contact, &Host::detached());
    assert!(state.is_active(Page::Contact));
    assert!(!state.is_active(Page::Home));
}

// =============================================================
// toggles
// =============================================================

#[test]
fn toggle_mobile_menu_flips() {
    let mut state = ViewState::default();
    state.toggle_mobile_menu();
    assert!(state.is_mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.is_mobile_menu_open);
}

#[test]
fn toggle_theme_twice_restores_and_persists_both_steps() {
    let store = Rc::new(MemoryStore::default());
    let host = host_with(store.clone(), Rc::new(RecordingViewport::default()));
    let mut state = ViewState::default();

    state.toggle_theme(&host);
    assert!(state.is_dark_mode);
    state.toggle_theme(&host);
    assert!(!state.is_dark_mode);

    assert_eq!(
        *store.writes.borrow(),
        vec![
            (THEME_KEY.to_owned(), "dark".to_owned()),
            (THEME_KEY.to_owned(), "light".to_owned()),
        ]
    );
}

#[test]
fn toggle_theme_survives_write_failure() {
    let host = Host {
        prefs: PreferenceStore::new(Rc::new(ThrowingStore)),
        ..Host::detached()
    };
    let mut state = ViewState::default();

    state.toggle_theme(&host);

    assert!(state.is_dark_mode);
}

#[test]
fn classes_follow_dark_mode() {
    let mut state = ViewState::default();
    assert_eq!(state.classes().primary, "surface-primary");

    state.toggle_theme(&Host::detached());
    assert_eq!(state.classes().primary, "surface-primary-dark");
}

// =============================================================
// scrolling
// =============================================================

#[test]
fn scroll_threshold_is_exclusive_at_fifty() {
    let mut state = ViewState::default();

    state.on_scroll(51.0);
    assert!(state.is_scrolled);

    state.on_scroll(50.0);
    assert!(!state.is_scrolled);

    state.on_scroll(0.0);
    assert!(!state.is_scrolled);
}

#[test]
fn on_scroll_reports_only_flips() {
    let mut state = ViewState::default();

    assert!(!state.on_scroll(10.0));
    assert!(state.on_scroll(120.0));
    assert!(!state.on_scroll(400.0));
    assert!(state.on_scroll(50.0));
}

#[test]
fn scroll_to_missing_section_is_a_no_op() {
    let viewport = Rc::new(RecordingViewport {
        sections: vec![ABOUT_ANCHOR],
        ..RecordingViewport::default()
    });
    let host = host_with(Rc::new(MemoryStore::default()), viewport);
    let state = ViewState::default();

    assert!(state.scroll_to_section(ABOUT_ANCHOR, &host));
    assert!(!state.scroll_to_section("skills-section", &host));
}
