//! Terminal styles.

use colored::{Color, Colorize};
use strum_macros::EnumIter as EnumIterMacro;

/// Semantic styles used in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Style {
    /// Headers, bullets and success markers (bright green)
    Success,
    /// Version line (bright yellow)
    Warning,
    /// Progress lines (bright blue)
    Info,
    /// Errors (bright red)
    Error,
}

impl Style {
    pub fn color(self) -> Color {
        match self {
            Style::Success => Color::BrightGreen,
            Style::Warning => Color::BrightYellow,
            Style::Info => Color::BrightBlue,
            Style::Error => Color::BrightRed,
        }
    }
}

/// Applies styles, or leaves text untouched when disabled.
///
/// Even when enabled, `colored` drops escape codes if stdout is not a
/// terminal or `NO_COLOR` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn colored() -> Self {
        Self { enabled: true }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.color(style.color()).to_string()
        } else {
            text.to_string()
        }
    }

    /// `[-]` for errors (all red), `[+]` otherwise (green brackets, styled sign).
    pub fn marker(&self, style: Style) -> String {
        match style {
            Style::Error => self.paint("[-]", Style::Error),
            other => format!(
                "{}{}{}",
                self.paint("[", Style::Success),
                self.paint("+", other),
                self.paint("]", Style::Success)
            ),
        }
    }

    /// List bullet, followed by a space.
    pub fn bullet(&self) -> String {
        format!("{} ", self.paint(" * ", Style::Success))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        for style in Style::iter() {
            assert_eq!(palette.paint("text", style), "text");
        }
    }

    #[test]
    fn test_plain_markers() {
        let palette = Palette::plain();
        assert_eq!(palette.marker(Style::Error), "[-]");
        assert_eq!(palette.marker(Style::Info), "[+]");
        assert_eq!(palette.marker(Style::Success), "[+]");
        assert_eq!(palette.bullet(), " *  ");
    }

    #[test]
    fn test_styles_have_distinct_colors() {
        let colors: Vec<Color> = Style::iter().map(Style::color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
