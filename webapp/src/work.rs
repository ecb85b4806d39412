use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::{
    content::{Content, Job, Project, Volunteer},
    page::Page,
    theme::ThemeClasses,
};

use crate::components::{PageProps, breadcrumb::Breadcrumb};

#[derive(Clone, PartialEq, Props)]
struct BulletsProps {
    items: Vec<String>,
    classes: &'static ThemeClasses,
}

#[component]
fn Bullets(props: BulletsProps) -> Element {
    let classes = props.classes;

    rsx! {
        div {
            for item in props.items.iter() {
                div { key: "{item}", class: "bullet-row",
                    div { class: "dot" }
                    p { class: "leading {classes.text_secondary}", "{item}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct JobCardProps {
    job: Job,
    classes: &'static ThemeClasses,
}

#[component]
fn JobCard(props: JobCardProps) -> Element {
    let job = props.job;
    let classes = props.classes;

    // the ongoing position gets the green badge, past ones blend into the card
    let badge = if job.current {
        String::from("badge current")
    } else {
        format!("badge {} {}", classes.secondary, classes.text_secondary)
    };

    rsx! {
        div { class: "card lift {classes.card}",
            div { class: "job-header",
                div {
                    h3 { class: "{classes.text}", "{job.title}" }
                    p { class: "company", "{job.company}" }
                    p { class: "{classes.text_secondary}", "⌖ {job.location}" }
                }
                div { class: "{badge}", "{job.period}" }
            }
            Bullets { items: job.achievements.clone(), classes }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
    classes: &'static ThemeClasses,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let classes = props.classes;

    rsx! {
        div { class: "card lift project-card {classes.card}",
            div { class: "project-banner", background: "{project.banner()}", "</>" }
            div { class: "project-body",
                h3 { class: "{classes.text}", "{project.title}" }
                p { class: "leading {classes.text_secondary}", "{project.description}" }
                h4 { class: "{classes.text}", "Technologies:" }
                div {
                    for tech in project.technologies.iter() {
                        span {
                            key: "{tech}",
                            class: "chip {classes.secondary} {classes.text_secondary}",
                            "{tech}"
                        }
                    }
                }
                p { class: "achievement", "★ {project.achievement}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct VolunteerCardProps {
    role: Volunteer,
    classes: &'static ThemeClasses,
}

#[component]
fn VolunteerCard(props: VolunteerCardProps) -> Element {
    let role = props.role;
    let classes = props.classes;

    rsx! {
        div { class: "card {classes.card}",
            h3 { class: "{classes.text}", "{role.title}" }
            p { class: "organization", "{role.organization}" }
            p { class: "{classes.text_secondary}", "{role.period}" }
            Bullets { items: role.achievements.clone(), classes }
        }
    }
}

#[component]
pub fn WorkPage(props: PageProps) -> Element {
    let state = props.state;
    let content = use_context::<Rc<Content>>();
    let classes = state.read().classes();

    rsx! {
        div { class: "page offset {classes.primary}",
            Breadcrumb { state, current: Page::Work }

            section { class: "section {classes.gradient_section}",
                div { class: "container narrow",
                    h2 { class: "section-title {classes.text}", "Work Experience" }
                    div { class: "about-cards",
                        for job in content.jobs.iter() {
                            JobCard { key: "{job.title}", job: job.clone(), classes }
                        }
                    }
                }
            }

            section { class: "section {classes.primary}",
                div { class: "container",
                    h2 { class: "section-title {classes.text}", "Personal Projects" }
                    div { class: "grid-2",
                        for project in content.projects.iter() {
                            ProjectCard { key: "{project.title}", project: project.clone(), classes }
                        }
                    }
                }
            }

            section { class: "section {classes.secondary}",
                div { class: "container narrow",
                    h2 { class: "section-title {classes.text}", "Volunteer Experience" }
                    div { class: "grid-2",
                        for role in content.volunteering.iter() {
                            VolunteerCard { key: "{role.title}", role: role.clone(), classes }
                        }
                    }
                }
            }
        }
    }
}
