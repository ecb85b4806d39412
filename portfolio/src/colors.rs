use serde::{Deserialize, Serialize};

// accent colors used by the content file to tint badges, icons, and project banners
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accent {
    #[default]
    Blue,
    Green,
    Purple,
    Pink,
    Indigo,
    Orange,
    Gray,
}

impl Accent {
    pub fn to_css_color(self) -> &'static str {
        match self {
            Self::Blue => "#3B82F6",
            Self::Green => "#22C55E",
            Self::Purple => "#8B5CF6",
            Self::Pink => "#EC4899",
            Self::Indigo => "#6366F1",
            Self::Orange => "#F97316",
            Self::Gray => "#6B7280",
        }
    }

    // two-stop banner gradient, as used on project cards
    pub fn gradient(from: Self, to: Self) -> String {
        format!(
            "linear-gradient(to right, {}, {})",
            from.to_css_color(),
            to.to_css_color()
        )
    }
}
