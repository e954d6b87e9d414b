//! Picker header panel.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the title, page position, and key help.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    page: usize,
    total_pages: usize,
    checked: usize,
    total: usize,
) {
    let theme = ColorTheme::default();
    let text = vec![
        Line::from(Span::styled("Channel Selection", theme.header_style())),
        Line::from(Span::styled(
            format!("Page {page}/{total_pages} | Selected: {checked}/{total}"),
            theme.header_style(),
        )),
        Line::from(Span::raw(
            "\u{2191}\u{2193}/jk: move | SPACE: toggle | a: all | ENTER: confirm | q: cancel | \u{2190}\u{2192}/hl: page",
        )),
    ];

    let block = Block::default().borders(Borders::BOTTOM);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
