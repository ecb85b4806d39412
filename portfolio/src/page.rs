use std::fmt;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

// Page
//
// the closed set of views the root composer can select.  identifiers coming from
// anywhere else (event payloads, links) are resolved through from_id(), which folds
// anything unknown into Home so that rendering never has to handle a bad value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Work,
    Contact,
}

impl Page {
    // navigation order, shared by the navbar, the mobile drawer, and the footer
    pub const ALL: [Page; 3] = [Page::Home, Page::Work, Page::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Work => "Work & Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Self {
        match id {
            "work" => Self::Work,
            "contact" => Self::Contact,
            _ => Self::Home,
        }
    }
}

impl From<&str> for Page {
    fn from(value: &str) -> Self {
        Self::from_id(value)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
