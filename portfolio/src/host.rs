use std::rc::Rc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::{
    prefs::{ColorSchemeProbe, NoColorScheme, PreferenceStore, resolve_theme},
    theme::Theme,
};

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

// the class toggled on the document root so the stylesheet can switch palettes
pub const DARK_CLASS: &str = "dark";

// applies the active theme to the rendered document
pub trait ThemeTarget {
    fn apply(&self, theme: Theme) -> Result<()>;
}

// smooth scrolling of the rendered document.  scroll_to_section reports whether a
// section with that anchor existed
pub trait Viewport {
    fn scroll_to_top(&self) -> Result<()>;

    fn scroll_to_section(&self, anchor: &str) -> Result<bool>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Detached;

impl ThemeTarget for Detached {
    fn apply(&self, _theme: Theme) -> Result<()> {
        Ok(())
    }
}

impl Viewport for Detached {
    fn scroll_to_top(&self) -> Result<()> {
        Ok(())
    }

    fn scroll_to_section(&self, _anchor: &str) -> Result<bool> {
        Ok(false)
    }
}

// Host
//
// every environment side effect the view state needs, injected as one bundle.  the
// browser build fills it with web adapters; tests fill it with stubs.  all of the
// methods here fail safe: errors are logged and the caller carries on with defaults
#[derive(Clone)]
pub struct Host {
    pub prefs: PreferenceStore,
    pub color_scheme: Rc<dyn ColorSchemeProbe>,
    pub document: Rc<dyn ThemeTarget>,
    pub viewport: Rc<dyn Viewport>,
}

impl Host {
    pub fn detached() -> Self {
        Host {
            prefs: PreferenceStore::default(),
            color_scheme: Rc::new(NoColorScheme),
            document: Rc::new(Detached),
            viewport: Rc::new(Detached),
        }
    }

    pub fn initial_theme(&self) -> Theme {
        resolve_theme(&self.prefs, self.color_scheme.as_ref())
    }

    pub fn apply_theme(&self, theme: Theme) {
        if let Err(err) = self.document.apply(theme) {
            warn!("failed to apply {theme} theme to document: {err}");
        }
    }

    pub fn scroll_to_top(&self) {
        if let Err(err) = self.viewport.scroll_to_top() {
            warn!("failed to scroll to top: {err}");
        }
    }

    pub fn scroll_to_section(&self, anchor: &str) -> bool {
        match self.viewport.scroll_to_section(anchor) {
            Ok(true) => true,
            Ok(false) => {
                debug!("no section #{anchor} to scroll to");
                false
            }
            Err(err) => {
                warn!("failed to scroll to #{anchor}: {err}");
                false
            }
        }
    }
}
