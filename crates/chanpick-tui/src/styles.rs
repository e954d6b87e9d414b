//! Picker styles.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the picker. Colors mirror the classic white-on-blue
/// cursor bar with green checked rows.
pub struct ColorTheme {
    pub cursor_fg: Color,
    pub cursor_bg: Color,
    pub checked: Color,
    pub header: Color,
    pub warning: Color,
    pub category: Color,
    pub text: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            cursor_fg: Color::White,
            cursor_bg: Color::Blue,
            checked: Color::Green,
            header: Color::Yellow,
            warning: Color::Red,
            category: Color::Cyan,
            text: Color::White,
        }
    }
}

impl ColorTheme {
    /// Style for the row under the cursor.
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor_fg)
            .bg(self.cursor_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a checked row.
    #[must_use]
    pub fn checked_style(&self) -> Style {
        Style::default().fg(self.checked)
    }

    /// Style for the title and page information.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a category header with no checked members.
    #[must_use]
    pub fn category_style(&self) -> Style {
        Style::default()
            .fg(self.category)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the empty-selection notice.
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for plain rows.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }
}
