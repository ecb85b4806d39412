use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::colors::Accent;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

const CONTENT_TOML: &str = include_str!("../content.toml");

// portfolio content
//
// everything the views display that is not chrome: the resume itself.  it is compiled
// into the binary from content.toml and parsed once at startup, so the rendering code
// only ever iterates over these structs
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub volunteering: Vec<Volunteer>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
    #[serde(default)]
    pub additional: Vec<InfoSection>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub contact_blurb: String,
    pub footer_title: String,
    pub footer_motto: String,
    pub copyright: String,
    #[serde(default)]
    pub about: Vec<AboutCard>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AboutCard {
    pub title: String,
    pub body: String,
    pub accent: Accent,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub accent: Accent,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
    pub accent: Accent,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub current: bool,
    pub achievements: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub achievement: String,
    pub gradient: [Accent; 2],
}

impl Project {
    pub fn banner(&self) -> String {
        let [from, to] = self.gradient;
        Accent::gradient(from, to)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Volunteer {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub university: Option<String>,
    pub subjects: Option<String>,
    pub period: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Certification {
    pub title: String,
    pub description: String,
    pub year: String,
    pub accent: Accent,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum ContactKind {
    #[default]
    Email,
    Phone,
    Location,
    LinkedIn,
    GitHub,
}

impl ContactKind {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Email => "\u{2709}",
            Self::Phone => "\u{260E}",
            Self::Location => "\u{2316}",
            Self::LinkedIn => "in",
            Self::GitHub => "\u{2325}",
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub title: String,
    pub info: String,
    pub href: String,
}

// placeholder target for entries that are informational only
pub const NO_TARGET: &str = "#";

impl ContactLink {
    pub fn has_target(&self) -> bool {
        !self.href.is_empty() && self.href != NO_TARGET
    }

    pub fn is_external(&self) -> bool {
        self.href.starts_with("https://") || self.href.starts_with("http://")
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct InfoSection {
    pub title: String,
    pub items: Vec<String>,
    pub accent: Accent,
}

impl Content {
    // the contact links the footer repeats; entries without a real target are skipped
    pub fn footer_links(&self) -> impl Iterator<Item = &ContactLink> {
        self.contacts.iter().filter(|c| c.has_target())
    }
}

// the content lives in a [content] subtable so the file can grow other tables later
#[derive(Debug, Deserialize, Serialize)]
struct TomlContentFile {
    content: Content,
}

pub fn parse(doc: &str) -> Result<Content> {
    let data: TomlContentFile = toml::from_str(doc)?;
    Ok(data.content)
}

pub fn load() -> Content {
    match parse(CONTENT_TOML) {
        Ok(content) => {
            debug!("loaded portfolio content for {}", content.profile.name);
            content
        }
        Err(err) => {
            error!("failed to parse portfolio content: {err}");
            Content::default()
        }
    }
}
