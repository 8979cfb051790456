//! Terminal styling and color detection.

use campus_route_lib::Category;

/// Raw ANSI escape sequences.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";

    // Bold reverse video badges.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    pub const TAG_STEP: &str = "\x1b[1;7;36m";
    pub const TAG_GOAL: &str = "\x1b[1;7;35m";

    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    pub const GRAY: &str = "\x1b[90m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const ORANGE: &str = "\x1b[38;5;208m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color is
/// disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_start: &'static str,
    pub tag_step: &'static str,
    pub tag_goal: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub blue: &'static str,
    pub yellow: &'static str,
    pub orange: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_start: colors::TAG_START,
            tag_step: colors::TAG_STEP,
            tag_goal: colors::TAG_GOAL,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            blue: colors::BLUE,
            yellow: colors::YELLOW,
            orange: colors::ORANGE,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            tag_step: "",
            tag_goal: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            blue: "",
            yellow: "",
            orange: "",
        }
    }

    /// `colored()` when the terminal accepts ANSI codes, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Palette honouring an explicit `--no-color` flag before detection.
    #[must_use]
    pub fn for_flags(no_color: bool) -> Self {
        if no_color {
            Self::plain()
        } else {
            Self::detect()
        }
    }

    /// Accent used for a node category in listings.
    #[must_use]
    pub fn category(&self, category: Category) -> &'static str {
        match category {
            Category::Academic => self.blue,
            Category::Administrative => self.yellow,
            Category::Residential => self.green,
            Category::Amenity => self.orange,
            Category::Gate => self.cyan,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Whether ANSI colors should be written.
///
/// Respects `NO_COLOR` (https://no-color.org/) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    color_enabled(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("TERM").ok().as_deref(),
    )
}

fn color_enabled(no_color: bool, term: Option<&str>) -> bool {
    if no_color {
        return false;
    }
    !matches!(term, Some(term) if term.eq_ignore_ascii_case("dumb"))
}
