use std::fmt;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const DARK_VALUE: &str = "dark";
pub const LIGHT_VALUE: &str = "light";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => LIGHT_VALUE,
            Self::Dark => DARK_VALUE,
        }
    }

    // stored values are interpreted loosely: an empty value counts as "nothing stored",
    // "dark" is dark, and anything else that was written there is treated as light
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "" => None,
            DARK_VALUE => Some(Self::Dark),
            _ => Some(Self::Light),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ThemeClasses
//
// maps each semantic slot used by the views onto a concrete class from the stylesheet
// bundle.  the two tables are static, so selecting one is a plain match with nothing
// to cache or invalidate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeClasses {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub card: &'static str,
    pub nav: &'static str,
    pub nav_transparent: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub hover: &'static str,
    pub gradient_hero: &'static str,
    pub gradient_section: &'static str,
    pub footer: &'static str,
    pub bullet: &'static str,
}

pub const LIGHT_CLASSES: ThemeClasses = ThemeClasses {
    primary: "surface-primary",
    secondary: "surface-secondary",
    card: "surface-card",
    nav: "nav-solid",
    nav_transparent: "nav-clear",
    text: "text-main",
    text_secondary: "text-soft",
    text_muted: "text-muted",
    border: "border-soft",
    hover: "hover-soft",
    gradient_hero: "gradient-hero",
    gradient_section: "gradient-section",
    footer: "footer-gradient",
    bullet: "bullet",
};

pub const DARK_CLASSES: ThemeClasses = ThemeClasses {
    primary: "surface-primary-dark",
    secondary: "surface-secondary-dark",
    card: "surface-card-dark",
    nav: "nav-solid-dark",
    nav_transparent: "nav-clear",
    text: "text-main-dark",
    text_secondary: "text-soft-dark",
    text_muted: "text-muted-dark",
    border: "border-soft-dark",
    hover: "hover-soft-dark",
    gradient_hero: "gradient-hero-dark",
    gradient_section: "gradient-section-dark",
    footer: "footer-gradient-dark",
    bullet: "bullet-dark",
};

impl ThemeClasses {
    pub fn for_theme(theme: Theme) -> &'static ThemeClasses {
        match theme {
            Theme::Light => &LIGHT_CLASSES,
            Theme::Dark => &DARK_CLASSES,
        }
    }
}
