use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::{content::Content, host::Host, page::Page, state::ViewState};

use super::{CLOSE, MENU, MOON, PageProps, SUN, page_glyph};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    page: Page,
    state: Signal<ViewState>,
    #[props(default)]
    drawer: bool,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let page = props.page;
    let mut state = props.state;
    let host = use_context::<Host>();

    let mut class = String::from("nav-link");
    if props.drawer {
        class.push_str(" drawer-link");
    }
    if state.read().is_active(page) {
        class.push_str(" active");
    }

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| state.write().navigate(page, &host),
            span { "{page_glyph(page)}" }
            span { "{page.label()}" }
        }
    }
}

#[component]
fn ThemeToggle(props: PageProps) -> Element {
    let mut state = props.state;
    let host = use_context::<Host>();

    let (title, glyph) = if state.read().is_dark_mode {
        ("Switch to Light Mode", SUN)
    } else {
        ("Switch to Dark Mode", MOON)
    };

    rsx! {
        button {
            class: "icon-button",
            title: "{title}",
            onclick: move |_| state.write().toggle_theme(&host),
            "{glyph}"
        }
    }
}

// NavBar
//
// fixed header over every page.  it stays transparent over the hero until the page has
// scrolled past the threshold, then switches to the blurred nav surface of the active
// theme.  below the md breakpoint the links collapse into a drawer
#[component]
pub fn NavBar(props: PageProps) -> Element {
    let mut state = props.state;
    let host = use_context::<Host>();
    let content = use_context::<Rc<Content>>();

    let view = state();
    let classes = view.classes();

    let header_class = if view.is_scrolled {
        format!("app-header scrolled {}", classes.nav)
    } else {
        format!("app-header {}", classes.nav_transparent)
    };

    rsx! {
        header { class: "{header_class}",
            div { class: "nav-container",
                button {
                    class: "brand",
                    onclick: move |_| state.write().navigate(Page::Home, &host),
                    "{content.profile.name}"
                }

                nav { class: "nav-links desktop-only",
                    ThemeToggle { state }
                    for page in Page::ALL {
                        NavBarButton { key: "{page}", page, state }
                    }
                }

                div { class: "nav-mobile mobile-only",
                    ThemeToggle { state }
                    button {
                        class: "icon-button",
                        onclick: move |_| state.write().toggle_mobile_menu(),
                        if view.is_mobile_menu_open {
                            "{CLOSE}"
                        } else {
                            "{MENU}"
                        }
                    }
                }
            }

            if view.is_mobile_menu_open {
                div { class: "mobile-drawer mobile-only {classes.nav} {classes.border}",
                    for page in Page::ALL {
                        NavBarButton {
                            key: "{page}",
                            page,
                            state,
                            drawer: true,
                        }
                    }
                }
            }
        }
    }
}
