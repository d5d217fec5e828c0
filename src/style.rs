//! Style types for text rendering
//!
//! Used for match highlighting, capturing-group marks, badges and the
//! chrome around the tabs.

use crossterm::style::Color as TermColor;
use serde::Deserialize;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Crossterm color, `None` for the terminal default
    pub fn to_term(self) -> Option<TermColor> {
        let color = match self {
            Color::Default => return None,
            Color::Black => TermColor::Black,
            Color::Red => TermColor::DarkRed,
            Color::Green => TermColor::DarkGreen,
            Color::Yellow => TermColor::DarkYellow,
            Color::Blue => TermColor::DarkBlue,
            Color::Magenta => TermColor::DarkMagenta,
            Color::Cyan => TermColor::DarkCyan,
            Color::White => TermColor::Grey,
            Color::BrightBlack => TermColor::DarkGrey,
            Color::BrightRed => TermColor::Red,
            Color::BrightGreen => TermColor::Green,
            Color::BrightYellow => TermColor::Yellow,
            Color::BrightBlue => TermColor::Blue,
            Color::BrightMagenta => TermColor::Magenta,
            Color::BrightCyan => TermColor::Cyan,
            Color::BrightWhite => TermColor::White,
        };
        Some(color)
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Underlined text
    pub underline: bool,
    /// Dim/faint text
    pub dim: bool,
    /// Reverse video (swap fg/bg)
    pub reverse: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Create a style with just background color
    pub fn bg(color: Color) -> Self {
        Self {
            bg: color,
            ..Default::default()
        }
    }

    /// Create a reverse video style (for the active tab and field)
    pub fn reverse() -> Self {
        Self {
            reverse: true,
            ..Default::default()
        }
    }

    /// Create a dim style (for hints and placeholders)
    pub fn dim() -> Self {
        Self {
            dim: true,
            ..Default::default()
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Palette cycled through for capturing groups 1, 2, 3, ...
const GROUP_COLORS: [Color; 4] = [Color::Blue, Color::Magenta, Color::Cyan, Color::Green];

/// Style for the whole-match highlight
pub fn match_style(background: Color) -> Style {
    Style::bg(background).with_fg(Color::Black)
}

/// Style for text inside capturing group `group` of a match
pub fn group_style(background: Color, group: usize) -> Style {
    let fg = GROUP_COLORS[group.saturating_sub(1) % GROUP_COLORS.len()];
    Style::bg(background).with_fg(fg).with_underline()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, Color::Default);
        assert_eq!(style.bg, Color::Default);
        assert!(!style.bold);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::Red).with_bold().with_underline();
        assert_eq!(style.fg, Color::Red);
        assert!(style.bold);
        assert!(style.underline);
        assert!(!style.is_default());
    }

    #[test]
    fn test_default_color_has_no_term_color() {
        assert_eq!(Color::Default.to_term(), None);
        assert_eq!(Color::BrightRed.to_term(), Some(TermColor::Red));
    }

    #[test]
    fn test_group_palette_cycles() {
        assert_eq!(group_style(Color::Yellow, 1), group_style(Color::Yellow, 5));
        assert_ne!(group_style(Color::Yellow, 1), group_style(Color::Yellow, 2));
        assert_eq!(match_style(Color::Cyan).bg, Color::Cyan);
    }
}
