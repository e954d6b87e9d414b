//! Picker entry list panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use chanpick_core::{Aggregate, Category, Channel, DisplayEntry, SelectionState};

use crate::styles::ColorTheme;

const CHECKED: &str = "\u{2611}";
const UNCHECKED: &str = "\u{2610}";
const PARTIAL: &str = "\u{25A3}";

/// Everything the list panel needs for one frame.
pub struct ListView<'a> {
    /// Full catalog, for channel names and weights.
    pub channels: &'a [Channel],
    /// Display entries on the current page.
    pub entries: &'a [DisplayEntry],
    /// Category views for header aggregate counts.
    pub categories: &'a [Category],
    /// Selection flags.
    pub selection: &'a SelectionState,
    /// Whether this is page 0 (which carries the "All" pseudo-entry).
    pub first_page: bool,
    /// In-page cursor position.
    pub cursor: usize,
}

/// Render the current page: the "All" pseudo-entry on page 0, then the
/// page's headers and channels. Pure read of the view.
pub fn render_list(frame: &mut Frame, area: Rect, view: &ListView<'_>) {
    let theme = ColorTheme::default();
    let mut lines = Vec::with_capacity(view.entries.len() + 2);

    if view.first_page {
        let symbol = if view.selection.all_checked() {
            CHECKED
        } else {
            UNCHECKED
        };
        let text = format!("{symbol} All ({} channels)", view.channels.len());
        let style = if view.cursor == 0 {
            theme.cursor_style()
        } else if view.selection.all_checked() {
            theme.checked_style()
        } else {
            theme.text_style()
        };
        lines.push(Line::from(Span::styled(text, style)));
        lines.push(Line::from(Span::raw(
            "-".repeat(40.min(usize::from(area.width))),
        )));
    }

    let cursor_entry = if view.first_page {
        view.cursor.checked_sub(1)
    } else {
        Some(view.cursor)
    };

    for (offset, entry) in view.entries.iter().enumerate() {
        let under_cursor = cursor_entry == Some(offset);
        lines.push(match entry {
            DisplayEntry::CategoryHeader { label } => {
                category_line(view, label, under_cursor, &theme)
            }
            DisplayEntry::Channel { channel_index } => {
                channel_line(view, *channel_index, under_cursor, &theme)
            }
        });
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn category_line(
    view: &ListView<'_>,
    label: &str,
    under_cursor: bool,
    theme: &ColorTheme,
) -> Line<'static> {
    let (aggregate, checked, total) = view
        .categories
        .iter()
        .find(|c| c.label == label)
        .map_or((Aggregate::None, 0, 0), |c| {
            let checked = c
                .members
                .iter()
                .filter(|&&i| view.selection.is_checked(i))
                .count();
            (view.selection.aggregate(&c.members), checked, c.members.len())
        });
    let symbol = match aggregate {
        Aggregate::All => CHECKED,
        Aggregate::Some => PARTIAL,
        Aggregate::None => UNCHECKED,
    };

    let text = format!("{symbol} {label} ({checked}/{total})");
    let style = if under_cursor {
        theme.cursor_style()
    } else if checked > 0 {
        theme.checked_style()
    } else {
        theme.category_style()
    };
    Line::from(Span::styled(text, style))
}

fn channel_line(
    view: &ListView<'_>,
    channel_index: usize,
    under_cursor: bool,
    theme: &ColorTheme,
) -> Line<'static> {
    let channel = &view.channels[channel_index];
    let checked = view.selection.is_checked(channel_index);
    let symbol = if checked { CHECKED } else { UNCHECKED };
    let text = format!(
        "  {symbol} #{} ({})",
        channel.channel_name,
        thousands(channel.estimated_messages)
    );
    let style = if under_cursor {
        theme.cursor_style()
    } else if checked {
        theme.checked_style()
    } else {
        theme.text_style()
    };
    Line::from(Span::styled(text, style))
}

fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chanpick_core::display::group_by_category;
    use chanpick_core::DisplayList;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn catalog() -> Vec<Channel> {
        vec![
            Channel {
                channel_id: 1,
                channel_name: "general".into(),
                guild_id: 1,
                guild_name: "G".into(),
                category_name: Some("Main".into()),
                estimated_messages: 1234,
            },
            Channel {
                channel_id: 2,
                channel_name: "random".into(),
                guild_id: 1,
                guild_name: "G".into(),
                category_name: Some("Main".into()),
                estimated_messages: 7,
            },
        ]
    }

    fn draw(selection: &SelectionState, cursor: usize) -> String {
        let channels = catalog();
        let display = DisplayList::build(&channels);
        let categories = group_by_category(&channels);
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let view = ListView {
                    channels: &channels,
                    entries: display.entries(),
                    categories: &categories,
                    selection,
                    first_page: true,
                    cursor,
                };
                render_list(frame, frame.area(), &view);
            })
            .unwrap();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_all_pseudo_entry_and_channels() {
        let selection = SelectionState::new(2);
        let content = draw(&selection, 0);
        assert!(content.contains("All (2 channels)"));
        assert!(content.contains("#general"));
        assert!(content.contains("1,234"));
    }

    #[test]
    fn header_shows_member_counts() {
        let mut selection = SelectionState::new(2);
        selection.toggle_channel(0);
        let content = draw(&selection, 0);
        assert!(content.contains("Main (1/2)"));
        assert!(content.contains(PARTIAL));
    }

    #[test]
    fn fully_checked_category_uses_checked_symbol() {
        let mut selection = SelectionState::new(2);
        selection.toggle_category(&[0, 1]);
        let content = draw(&selection, 0);
        assert!(content.contains("Main (2/2)"));
        assert!(!content.contains(PARTIAL));
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }
}
