use dioxus::prelude::*;

use portfolio::{host::Host, page::Page, state::ViewState};

#[derive(Clone, PartialEq, Props)]
pub struct BreadcrumbProps {
    state: Signal<ViewState>,
    current: Page,
}

// "Home / <current page>" strip shown at the top of the inner pages
#[component]
pub fn Breadcrumb(props: BreadcrumbProps) -> Element {
    let mut state = props.state;
    let host = use_context::<Host>();
    let classes = state.read().classes();

    rsx! {
        div { class: "breadcrumb {classes.secondary}",
            div { class: "container {classes.text_secondary}",
                button { onclick: move |_| state.write().navigate(Page::Home, &host), "Home" }
                span { "/" }
                span { class: "here", "{props.current.label()}" }
            }
        }
    }
}
