use std::rc::Rc;

use anyhow::Result;
use gloo_console::warn as console_warn;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window, window};

use portfolio::{
    host::{DARK_CLASS, Host, ThemeTarget, Viewport},
    prefs::{ColorSchemeProbe, KeyValueStore, NullStore, PreferenceStore},
    theme::Theme,
};

use super::storage::BrowserStorage;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn browser_window() -> Result<Window> {
    window().ok_or_else(|| anyhow::Error::msg("no global window exists"))
}

fn scroll_offset() -> Result<f64> {
    browser_window()?.scroll_y().map_err(js_error)
}

// browser_host
//
// wires the web adapters into the capability bundle the view state works against.
// storage that is unavailable at startup is swapped for the no-op store up front
pub fn browser_host() -> Host {
    let store: Rc<dyn KeyValueStore> = if BrowserStorage::available() {
        Rc::new(BrowserStorage)
    } else {
        Rc::new(NullStore)
    };

    Host {
        prefs: PreferenceStore::new(store),
        color_scheme: Rc::new(MediaColorScheme),
        document: Rc::new(DocumentTheme),
        viewport: Rc::new(WindowViewport),
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MediaColorScheme;

impl ColorSchemeProbe for MediaColorScheme {
    fn prefers_dark(&self) -> Result<Option<bool>> {
        let query = browser_window()?
            .match_media(DARK_SCHEME_QUERY)
            .map_err(js_error)?;

        Ok(query.map(|q| q.matches()))
    }
}

// toggles the dark class on <html>
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTheme;

impl ThemeTarget for DocumentTheme {
    fn apply(&self, theme: Theme) -> Result<()> {
        let root = browser_window()?
            .document()
            .and_then(|doc| doc.document_element())
            .ok_or_else(|| anyhow::Error::msg("no document element"))?;

        root.class_list()
            .toggle_with_force(DARK_CLASS, theme.is_dark())
            .map_err(js_error)?;

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to_top(&self) -> Result<()> {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);

        browser_window()?.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }

    fn scroll_to_section(&self, anchor: &str) -> Result<bool> {
        let document = browser_window()?
            .document()
            .ok_or_else(|| anyhow::Error::msg("no document"))?;

        let Some(section) = document.get_element_by_id(anchor) else {
            return Ok(false);
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);

        Ok(true)
    }
}

// ScrollListener
//
// keeps a window scroll handler registered for as long as it is alive.  the handler
// receives the current vertical offset; the listener is removed again on drop
pub struct ScrollListener {
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Result<Self> {
        let callback = Closure::<dyn FnMut()>::new(move || match scroll_offset() {
            Ok(offset) => on_scroll(offset),
            Err(err) => console_warn!(format!("failed to read scroll offset: {err}")),
        });

        browser_window()?
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(js_error)?;

        Ok(ScrollListener { callback })
    }

    pub fn current_offset() -> Result<f64> {
        scroll_offset()
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}
