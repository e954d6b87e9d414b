//! Picker footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the status line and, when set, the validation notice.
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    checked: usize,
    has_prev: bool,
    has_next: bool,
    notice: Option<&str>,
) {
    let theme = ColorTheme::default();

    let mut status = format!("Selected: {checked} channels");
    if has_next {
        status.push_str(" | next page: \u{2192}");
    }
    if has_prev {
        status.push_str(" | prev page: \u{2190}");
    }

    let notice_line = match notice {
        Some(text) => Line::from(Span::styled(text.to_owned(), theme.warning_style())),
        None => Line::from(""),
    };
    let text = vec![
        notice_line,
        Line::from(Span::styled(status, theme.header_style())),
    ];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
