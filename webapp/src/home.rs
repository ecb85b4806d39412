use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::{
    content::{AboutCard, Content, SkillCategory, Stat},
    host::Host,
    page::Page,
    state::ABOUT_ANCHOR,
    theme::ThemeClasses,
};

use crate::components::{CHEVRON_DOWN, PageProps};

#[derive(Clone, PartialEq, Props)]
struct AboutCardProps {
    card: AboutCard,
    classes: &'static ThemeClasses,
}

#[component]
fn AboutCardView(props: AboutCardProps) -> Element {
    let card = props.card;
    let classes = props.classes;

    rsx! {
        div { class: "card {classes.card}",
            div { class: "about-icon", color: "{card.accent.to_css_color()}", "◆" }
            h3 { class: "{classes.text}", "{card.title}" }
            p { class: "leading {classes.text_secondary}", "{card.body}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct StatCardProps {
    stat: Stat,
    classes: &'static ThemeClasses,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    let stat = props.stat;
    let classes = props.classes;

    rsx! {
        div { class: "card lift stat-card {classes.card}",
            div {
                class: "stat-value",
                background_color: "{stat.accent.to_css_color()}",
                "{stat.value}"
            }
            p { class: "{classes.text_secondary}", "{stat.label}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SkillCardProps {
    category: SkillCategory,
    classes: &'static ThemeClasses,
}

#[component]
fn SkillCard(props: SkillCardProps) -> Element {
    let category = props.category;
    let classes = props.classes;

    rsx! {
        div { class: "card {classes.secondary}",
            div {
                class: "skill-icon",
                background_color: "{category.accent.to_css_color()}",
                "</>"
            }
            h3 { class: "{classes.text}", "{category.title}" }
            div {
                for skill in category.skills.iter() {
                    span {
                        key: "{skill}",
                        class: "chip {classes.card} {classes.text_secondary} {classes.hover}",
                        "{skill}"
                    }
                }
            }
        }
    }
}

// HomePage
//
// hero, about, and skills.  the hero's chevron scrolls down to the about section,
// which carries the anchor id
#[component]
pub fn HomePage(props: PageProps) -> Element {
    let mut state = props.state;
    let host = use_context::<Host>();
    let content = use_context::<Rc<Content>>();

    let classes = state.read().classes();
    let profile = &content.profile;

    let work_host = host.clone();
    let contact_host = host.clone();

    rsx! {
        div { class: "page {classes.primary}",
            section { class: "hero {classes.gradient_hero}",
                div { class: "hero-overlay" }
                div { class: "container hero-content",
                    h1 { class: "hero-title", "{profile.name}" }
                    p { class: "hero-subtitle", "{profile.headline}" }
                    p { class: "hero-summary", "{profile.summary}" }
                    div { class: "hero-actions",
                        button {
                            class: "btn btn-glass",
                            onclick: move |_| state.write().navigate(Page::Work, &work_host),
                            "View My Work"
                        }
                        button {
                            class: "btn btn-light",
                            onclick: move |_| state.write().navigate(Page::Contact, &contact_host),
                            "Get In Touch"
                        }
                    }
                }
                button {
                    class: "scroll-hint",
                    onclick: move |_| {
                        state.peek().scroll_to_section(ABOUT_ANCHOR, &host);
                    },
                    "{CHEVRON_DOWN}"
                }
            }

            section { id: ABOUT_ANCHOR, class: "section {classes.secondary}",
                div { class: "container",
                    h2 { class: "section-title {classes.text}", "About Me" }
                    div { class: "about-grid",
                        div { class: "about-cards",
                            for card in profile.about.iter() {
                                AboutCardView { key: "{card.title}", card: card.clone(), classes }
                            }
                        }
                        div { class: "stats-grid",
                            for stat in content.stats.iter() {
                                StatCard { key: "{stat.label}", stat: stat.clone(), classes }
                            }
                        }
                    }
                }
            }

            section { class: "section {classes.primary}",
                div { class: "container",
                    h2 { class: "section-title {classes.text}", "Technical Skills" }
                    div { class: "grid-3",
                        for category in content.skills.iter() {
                            SkillCard {
                                key: "{category.title}",
                                category: category.clone(),
                                classes,
                            }
                        }
                    }
                }
            }
        }
    }
}
