//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and color detection for the enhanced output
//! format.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold reverse green for completed-leg tags.
    pub const TAG_DONE: &str = "\x1b[1;7;32m";
    /// Bold reverse yellow for the leg currently being sailed.
    pub const TAG_SAILING: &str = "\x1b[1;7;33m";
    /// Bold reverse cyan for legs not yet started.
    pub const TAG_AHEAD: &str = "\x1b[1;7;36m";
    /// Bright bold white for port names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for labels.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for the progress bar fill.
    pub const GREEN: &str = "\x1b[32m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_done: &'static str,
    pub tag_sailing: &'static str,
    pub tag_ahead: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_done: colors::TAG_DONE,
            tag_sailing: colors::TAG_SAILING,
            tag_ahead: colors::TAG_AHEAD,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_done: "",
            tag_sailing: "",
            tag_ahead: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/) and
/// the `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Fixed-width text progress bar, e.g. `[#####-----]` for 50%.
#[must_use]
pub fn progress_bar(percent: f64, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
