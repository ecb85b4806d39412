use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::{
    content::{Certification, ContactLink, Content, Education, InfoSection},
    page::Page,
    theme::ThemeClasses,
};

use crate::components::{PageProps, breadcrumb::Breadcrumb};

#[derive(Clone, PartialEq, Props)]
struct ContactCardProps {
    link: ContactLink,
}

#[component]
fn ContactCard(props: ContactCardProps) -> Element {
    let link = props.link;
    let external = link.is_external();

    rsx! {
        a {
            class: "contact-card",
            href: "{link.href}",
            target: external.then_some("_blank"),
            rel: external.then_some("noopener noreferrer"),
            div { class: "contact-icon", "{link.kind.glyph()}" }
            h3 { "{link.title}" }
            p { class: "contact-info", "{link.info}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct EducationEntryProps {
    entry: Education,
    classes: &'static ThemeClasses,
}

#[component]
fn EducationEntry(props: EducationEntryProps) -> Element {
    let entry = props.entry;
    let classes = props.classes;

    rsx! {
        div { class: "entry {classes.secondary}",
            div {
                h4 { class: "{classes.text}", "{entry.degree}" }
                p { class: "organization", "{entry.school}" }
                if let Some(university) = &entry.university {
                    p { class: "{classes.text_secondary}", "{university}" }
                }
                if let Some(subjects) = &entry.subjects {
                    p { class: "{classes.text_secondary}", "{subjects}" }
                }
            }
            div { class: "badge period", "{entry.period}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CertificationEntryProps {
    cert: Certification,
    classes: &'static ThemeClasses,
}

#[component]
fn CertificationEntry(props: CertificationEntryProps) -> Element {
    let cert = props.cert;
    let classes = props.classes;

    rsx! {
        div { class: "entry {classes.secondary}",
            div {
                h4 { class: "{classes.text}",
                    span {
                        class: "accent-dot",
                        background_color: "{cert.accent.to_css_color()}",
                    }
                    "{cert.title}"
                }
                p { class: "{classes.text_secondary}", "{cert.description}" }
            }
            div { class: "badge year", "{cert.year}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct InfoCardProps {
    section: InfoSection,
    classes: &'static ThemeClasses,
}

#[component]
fn InfoCard(props: InfoCardProps) -> Element {
    let section = props.section;
    let classes = props.classes;

    rsx! {
        div { class: "card {classes.card}",
            div {
                class: "skill-icon",
                background_color: "{section.accent.to_css_color()}",
                "≡"
            }
            h3 { class: "{classes.text}", "{section.title}" }
            ul { class: "info-list",
                for item in section.items.iter() {
                    li { key: "{item}", class: "{classes.text_secondary}",
                        span { class: "dot {classes.bullet}" }
                        "{item}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ContactPage(props: PageProps) -> Element {
    let state = props.state;
    let content = use_context::<Rc<Content>>();
    let classes = state.read().classes();

    rsx! {
        div { class: "page offset {classes.primary}",
            Breadcrumb { state, current: Page::Contact }

            section { class: "section {classes.gradient_hero}",
                div { class: "container narrow",
                    h2 { class: "section-title", color: "#FFFFFF", "Get In Touch" }
                    p { class: "contact-intro", color: "#FFFFFF", "{content.profile.contact_blurb}" }
                    div { class: "grid-4",
                        for link in content.contacts.iter() {
                            ContactCard { key: "{link.title}", link: link.clone() }
                        }
                    }
                }
            }

            section { class: "section {classes.primary}",
                div { class: "container",
                    h2 { class: "section-title {classes.text}", "Education & Certifications" }
                    div { class: "grid-2",
                        div {
                            h3 { class: "section-subtitle {classes.text}", "Education" }
                            div { class: "about-cards",
                                for entry in content.education.iter() {
                                    EducationEntry { key: "{entry.degree}", entry: entry.clone(), classes }
                                }
                            }
                        }
                        div {
                            h3 { class: "section-subtitle {classes.text}", "Certifications" }
                            div { class: "about-cards",
                                for cert in content.certifications.iter() {
                                    CertificationEntry { key: "{cert.title}", cert: cert.clone(), classes }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section {classes.secondary}",
                div { class: "container narrow",
                    h2 { class: "section-title {classes.text}", "Additional Information" }
                    div { class: "grid-3",
                        for info in content.additional.iter() {
                            InfoCard { key: "{info.title}", section: info.clone(), classes }
                        }
                    }
                }
            }
        }
    }
}
