use dioxus::prelude::*;

use portfolio::{page::Page, state::ViewState};

pub mod breadcrumb;
pub mod footer;
pub mod navigation;

// glyphs standing in for an icon set
pub const SUN: &str = "\u{2600}";
pub const MOON: &str = "\u{263E}";
pub const MENU: &str = "\u{2630}";
pub const CLOSE: &str = "\u{2715}";
pub const CHEVRON_DOWN: &str = "\u{2304}";

pub fn page_glyph(page: Page) -> &'static str {
    match page {
        Page::Home => "\u{2302}",
        Page::Work => "\u{25A4}",
        Page::Contact => "\u{27A4}",
    }
}

// every page view and chrome component receives the root's view state signal
#[derive(Clone, PartialEq, Props)]
pub struct PageProps {
    pub state: Signal<ViewState>,
}
