use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::{content::Content, host::Host, page::Page, state::ViewState};

use super::PageProps;

#[derive(Clone, PartialEq, Props)]
struct FooterButtonProps {
    page: Page,
    state: Signal<ViewState>,
}

#[component]
fn FooterButton(props: FooterButtonProps) -> Element {
    let page = props.page;
    let mut state = props.state;
    let host = use_context::<Host>();

    rsx! {
        button {
            class: if state.read().is_active(page) { "footer-button active" } else { "footer-button" },
            onclick: move |_| state.write().navigate(page, &host),
            "{page.label()}"
        }
    }
}

// Footer
//
// repeats the three navigation actions and the outbound contact links from the
// contact page
#[component]
pub fn Footer(props: PageProps) -> Element {
    let state = props.state;
    let content = use_context::<Rc<Content>>();
    let classes = state.read().classes();
    let profile = &content.profile;

    rsx! {
        footer { class: "app-footer {classes.footer}",
            div { class: "container",
                div { class: "footer-main",
                    div {
                        h3 { class: "footer-name",
                            span { "{profile.name}" }
                            span { class: "pulse" }
                        }
                        p { class: "footer-title", "{profile.footer_title}" }
                        p { class: "footer-motto", "{profile.footer_motto}" }
                        div { class: "footer-icons",
                            for link in content.footer_links() {
                                a {
                                    key: "{link.href}",
                                    href: "{link.href}",
                                    title: "{link.title}",
                                    target: link.is_external().then_some("_blank"),
                                    rel: link.is_external().then_some("noopener noreferrer"),
                                    "{link.kind.glyph()}"
                                }
                            }
                        }
                    }
                    div { class: "footer-nav",
                        for page in Page::ALL {
                            FooterButton { key: "{page}", page, state }
                        }
                    }
                }
                div { class: "footer-legal",
                    p { "{profile.copyright} | Designed with ❤" }
                }
            }
        }
    }
}
