use anyhow::Result;

use gloo_console::warn as console_warn;
use gloo_storage::{LocalStorage, Storage};
use web_sys::window;

use portfolio::prefs::KeyValueStore;

use super::browser::js_error;

// localStorage-backed preferences
//
// values are stored as bare strings rather than through gloo's json helpers, so that
// the theme key holds exactly "dark" or "light"
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    // LocalStorage::raw() throws when storage is blocked (privacy mode, sandboxed
    // frames), so every access goes through this check first
    pub fn available() -> bool {
        match window().map(|w| w.local_storage()) {
            Some(Ok(Some(_))) => true,
            Some(Err(err)) => {
                console_warn!(format!("localStorage not available: {err:?}"));
                false
            }
            _ => false,
        }
    }

    fn raw() -> Result<web_sys::Storage> {
        if Self::available() {
            Ok(LocalStorage::raw())
        } else {
            Err(anyhow::Error::msg("localStorage not available"))
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::raw()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::raw()?.set_item(key, value).map_err(js_error)
    }
}
