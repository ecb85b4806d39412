#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;
use tracing::{Level, warn};

use portfolio::{content, page::Page, state::ViewState};

mod common;
use common::browser::{ScrollListener, browser_host};

mod components;
use components::{footer::Footer, navigation::NavBar};

mod home;
use home::HomePage;

mod work;
use work::WorkPage;

mod contact;
use contact::ContactPage;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// App
//
// the root composer.  it owns the single ViewState signal and hands it to the navbar,
// the selected page, and the footer.  the host adapters and the parsed content are
// provided as context so that leaf components can reach them without extra props
#[component]
pub fn App() -> Element {
    let host = use_context_provider(browser_host);
    use_context_provider(|| Rc::new(content::load()));

    let mut state = use_signal(|| ViewState::load(&host));

    // re-apply the document class only when the theme itself changes
    let theme = use_memo(move || state.read().theme());
    let theme_host = host.clone();
    use_effect(move || theme_host.apply_theme(theme()));

    // scroll events arrive from a raw window listener; they are funneled through a
    // coroutine so the signal is only written from inside the dioxus runtime, and only
    // when the threshold flag actually flips
    let scroll_events = use_coroutine(move |mut offsets: UnboundedReceiver<f64>| async move {
        while let Some(offset) = offsets.next().await {
            let mut next = *state.peek();
            if next.on_scroll(offset) {
                state.set(next);
            }
        }
    });

    use_hook(move || {
        if let Ok(offset) = ScrollListener::current_offset() {
            scroll_events.send(offset);
        }

        let listener = ScrollListener::attach(move |offset| scroll_events.send(offset))
            .inspect_err(|err| warn!("scroll tracking disabled: {err}"))
            .ok();

        Rc::new(listener)
    });

    let view = state();
    let classes = view.classes();

    rsx! {
        style { "{common::style::PORTFOLIO_STYLES}" }
        div { class: "page {classes.primary}",
            NavBar { state }
            match view.current_page {
                Page::Home => rsx! { HomePage { state } },
                Page::Work => rsx! { WorkPage { state } },
                Page::Contact => rsx! { ContactPage { state } },
            }
            Footer { state }
        }
    }
}
