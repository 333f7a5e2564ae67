use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Standard,
    Death,
    Puppy,
}

const STANDARD_COLORS: [&str; 6] = [
    "#f97316", // Orange
    "#06b6d4", // Cyan
    "#8b5cf6", // Violet
    "#ec4899", // Pink
    "#22c55e", // Green
    "#eab308", // Yellow
];

const DEATH_COLORS: [&str; 6] = [
    "#dc2626", // Red 600
    "#b91c1c", // Red 700
    "#991b1b", // Red 800
    "#7f1d1d", // Red 900
    "#450a0a", // Red 950
    "#000000", // Black
];

const PUPPY_COLORS: [&str; 6] = [
    "#fbcfe8", "#fde68a", "#bae6fd", "#c7d2fe", "#bbf7d0", "#fed7aa",
];

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Standard, Theme::Death, Theme::Puppy];

    pub fn palette(&self) -> &'static [&'static str] {
        match self {
            Theme::Standard => &STANDARD_COLORS,
            Theme::Death => &DEATH_COLORS,
            Theme::Puppy => &PUPPY_COLORS,
        }
    }

    pub fn segment_color(&self, index: usize) -> &'static str {
        let palette = self.palette();
        palette[index % palette.len()]
    }

    pub fn spin_label(&self, is_spinning: bool) -> &'static str {
        match (is_spinning, self) {
            (true, _) => "Spinning...",
            (false, Theme::Death) => "SACRIFICE",
            (false, _) => "SPIN!",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Standard => "Standard",
            Theme::Death => "Death Mode",
            Theme::Puppy => "Puppy Mode",
        }
    }

    /// Text colour drawn on top of this theme's segments.
    pub fn label_color(&self) -> &'static str {
        match self {
            Theme::Puppy => "#1f2937",
            _ => "#ffffff",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_colors_wrap() {
        let theme = Theme::Death;
        assert_eq!(theme.segment_color(0), "#dc2626");
        assert_eq!(theme.segment_color(6), theme.segment_color(0));
        assert_eq!(theme.segment_color(11), "#000000");
    }

    #[test]
    fn test_spin_label() {
        assert_eq!(Theme::Standard.spin_label(false), "SPIN!");
        assert_eq!(Theme::Death.spin_label(false), "SACRIFICE");
        assert_eq!(Theme::Puppy.spin_label(true), "Spinning...");
    }
}
