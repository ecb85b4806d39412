use std::rc::Rc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::theme::Theme;

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

pub const THEME_KEY: &str = "theme";

// KeyValueStore
//
// a persistent string store offered by the host (localStorage in the browser).  it is
// allowed to fail in any way it likes; PreferenceStore is what turns those failures into
// silent fallbacks
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

// the host's ambient light/dark signal.  Ok(None) means the host has no such signal
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> Result<Option<bool>>;
}

// fallback used when the host has no persistent storage at all
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStore;

impl KeyValueStore for NullStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoColorScheme;

impl ColorSchemeProbe for NoColorScheme {
    fn prefers_dark(&self) -> Result<Option<bool>> {
        Ok(None)
    }
}

#[derive(Clone)]
pub struct PreferenceStore {
    backend: Rc<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        PreferenceStore { backend }
    }

    pub fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to read preference {key}: {err}");
                None
            }
        }
    }

    pub fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.backend.set(key, value) {
            warn!("failed to write preference {key}: {err}");
        }
    }

    pub fn stored_theme(&self) -> Option<Theme> {
        self.read(THEME_KEY)
            .as_deref()
            .and_then(Theme::from_stored)
    }

    pub fn store_theme(&self, theme: Theme) {
        self.write(THEME_KEY, theme.as_str());
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new(Rc::new(NullStore))
    }
}

// resolve_theme
//
// startup ordering is stored value, then the ambient color scheme, then light.
// nothing is written here; the store only changes when the user toggles
pub fn resolve_theme(prefs: &PreferenceStore, probe: &dyn ColorSchemeProbe) -> Theme {
    if let Some(theme) = prefs.stored_theme() {
        debug!("using stored theme {theme}");
        return theme;
    }

    match probe.prefers_dark() {
        Ok(Some(is_dark)) => {
            debug!("using ambient color scheme, dark: {is_dark}");
            Theme::from_dark_mode(is_dark)
        }
        Ok(None) => Theme::Light,
        Err(err) => {
            warn!("color scheme lookup failed: {err}");
            Theme::Light
        }
    }
}
