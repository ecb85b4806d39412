use tracing::debug;

use crate::{
    host::Host,
    page::Page,
    theme::{Theme, ThemeClasses},
};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

// offsets strictly greater than this switch the navbar to its solid background
pub const SCROLL_THRESHOLD: f64 = 50.0;

// anchor of the section the hero chevron scrolls to
pub const ABOUT_ANCHOR: &str = "about-section";

// ViewState
//
// all of the ui state the portfolio has.  it is owned by the root component (inside a
// signal) and handed down to the views; the only writers are the actions below, each
// triggered by a single user event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub current_page: Page,
    pub is_scrolled: bool,
    pub is_mobile_menu_open: bool,
    pub is_dark_mode: bool,
}

impl ViewState {
    pub fn new(theme: Theme) -> Self {
        ViewState {
            current_page: Page::Home,
            is_scrolled: false,
            is_mobile_menu_open: false,
            is_dark_mode: theme.is_dark(),
        }
    }

    pub fn load(host: &Host) -> Self {
        Self::new(host.initial_theme())
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.is_dark_mode)
    }

    pub fn classes(&self) -> &'static ThemeClasses {
        ThemeClasses::for_theme(self.theme())
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.current_page == page
    }

    pub fn navigate(&mut self, page: Page, host: &Host) {
        debug!("navigating to {page}");

        self.current_page = page;
        self.is_mobile_menu_open = false;
        host.scroll_to_top();
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.is_mobile_menu_open = !self.is_mobile_menu_open;
    }

    pub fn toggle_theme(&mut self, host: &Host) {
        let theme = self.theme().toggled();
        debug!("switching to {theme} theme");

        self.is_dark_mode = theme.is_dark();
        host.prefs.store_theme(theme);
    }

    // returns true only when the flag actually flipped, so callers can skip the
    // re-render for the vast majority of scroll events
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.is_scrolled;

        self.is_scrolled = scrolled;
        changed
    }

    pub fn scroll_to_section(&self, anchor: &str, host: &Host) -> bool {
        host.scroll_to_section(anchor)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Theme::Light)
    }
}
