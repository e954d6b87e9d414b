//! Picker application model (Elm architecture).

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use chanpick_core::display::group_by_category;
use chanpick_core::{
    Category, Channel, ChannelSelector, DisplayEntry, DisplayList, Pages, PickError,
    SelectionOutcome, SelectionState,
};

use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::list::{render_list, ListView};

/// Session status of the picker state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Navigating and toggling.
    Browsing,
    /// Confirm pressed with a non-empty selection (terminal).
    Confirmed,
    /// Cancel pressed (terminal).
    Cancelled,
}

/// Picker application state (Elm Model).
///
/// The display list, category views, and page layout are built once per
/// session over an immutable catalog snapshot; only the selection flags,
/// the cursor, and the session status change afterwards.
pub struct PickerApp<'a> {
    channels: &'a [Channel],
    display: DisplayList,
    categories: Vec<Category>,
    pages: Pages,
    selection: SelectionState,
    /// Current page index.
    page: usize,
    /// Cursor position within the page. On page 0, position 0 is the
    /// global "All" pseudo-entry and entries start at position 1.
    pos: usize,
    status: SessionStatus,
    notice: Option<String>,
}

impl<'a> PickerApp<'a> {
    /// Create a picker session over the catalog snapshot.
    #[must_use]
    pub fn new(channels: &'a [Channel]) -> Self {
        let display = DisplayList::build(channels);
        let pages = Pages::new(display.len());
        Self {
            channels,
            display,
            categories: group_by_category(channels),
            pages,
            selection: SelectionState::new(channels.len()),
            page: 0,
            pos: 0,
            status: SessionStatus::Browsing,
            notice: None,
        }
    }

    /// Current session status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Current cursor as (page, position-within-page).
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.page, self.pos)
    }

    /// Current selection flags.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Validation notice to display, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Checked channels in original catalog order.
    #[must_use]
    pub fn selected_channels(&self) -> Vec<Channel> {
        self.selection
            .selected_indices()
            .into_iter()
            .map(|i| self.channels[i].clone())
            .collect()
    }

    /// Apply one input action to the model (Elm Update). Pure state
    /// transition; no rendering happens here.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        self.notice = None;
        match action {
            KeyAction::Cancel => {
                tracing::debug!("selection cancelled");
                self.status = SessionStatus::Cancelled;
            }
            KeyAction::Confirm => {
                if self.selection.count_checked() == 0 {
                    self.notice = Some("Select at least one channel".into());
                } else {
                    tracing::debug!(count = self.selection.count_checked(), "selection confirmed");
                    self.status = SessionStatus::Confirmed;
                }
            }
            KeyAction::Toggle => self.toggle_at_cursor(),
            KeyAction::ToggleAll => self.selection.toggle_global(),
            KeyAction::MoveUp => self.move_up(),
            KeyAction::MoveDown => self.move_down(),
            KeyAction::PrevPage => {
                if self.page > 0 {
                    self.page -= 1;
                    self.pos = 0;
                }
            }
            KeyAction::NextPage => {
                if self.page + 1 < self.pages.total() {
                    self.page += 1;
                    self.pos = 0;
                }
            }
            KeyAction::None => {}
        }
    }

    /// Display-entry index under the cursor, or `None` on the "All"
    /// pseudo-entry.
    fn cursor_entry(&self) -> Option<usize> {
        let bounds = self.pages.bounds(self.page);
        if self.page == 0 {
            if self.pos == 0 {
                None
            } else {
                Some(bounds.start + self.pos - 1)
            }
        } else {
            Some(bounds.start + self.pos)
        }
    }

    fn toggle_at_cursor(&mut self) {
        let Some(entry_index) = self.cursor_entry() else {
            self.selection.toggle_global();
            return;
        };
        match self.display.entries()[entry_index].clone() {
            DisplayEntry::CategoryHeader { label } => {
                if let Some(category) = self.categories.iter().find(|c| c.label == label) {
                    self.selection.toggle_category(&category.members);
                }
            }
            DisplayEntry::Channel { channel_index } => {
                self.selection.toggle_channel(channel_index);
            }
        }
    }

    fn move_up(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
        } else if self.page > 0 {
            self.page -= 1;
            let count = self.pages.entry_count(self.page);
            // Land on the previous page's last slot; the "All" pseudo-entry
            // gives page 0 one extra slot.
            self.pos = if self.page == 0 { count } else { count - 1 };
        }
    }

    fn move_down(&mut self) {
        let count = self.pages.entry_count(self.page);
        let slots = if self.page == 0 { count + 1 } else { count };
        if self.pos + 1 < slots {
            self.pos += 1;
        } else if self.page + 1 < self.pages.total() {
            self.page += 1;
            self.pos = 0;
        }
    }

    /// Compute the vertical layout: header, list, footer.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // title, page info, key help
                Constraint::Min(5),    // entry list
                Constraint::Length(3), // notice + status line
            ])
            .split(area);
        (outer[0], outer[1], outer[2])
    }

    /// Render the full picker view (Elm View). Pure read of the model.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, list_area, footer_area) = Self::compute_layout(frame.area());

        render_header(
            frame,
            header_area,
            self.page + 1,
            self.pages.total(),
            self.selection.count_checked(),
            self.channels.len(),
        );

        let bounds = self.pages.bounds(self.page);
        let view = ListView {
            channels: self.channels,
            entries: &self.display.entries()[bounds],
            categories: &self.categories,
            selection: &self.selection,
            first_page: self.page == 0,
            cursor: self.pos,
        };
        render_list(frame, list_area, &view);

        render_footer(
            frame,
            footer_area,
            self.selection.count_checked(),
            self.page > 0,
            !self.pages.is_last(self.page),
            self.notice.as_deref(),
        );
    }

    /// Set up the terminal for full-screen mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the picker session: set up the terminal, loop on
    /// read-input / update / render, and tear down on every exit path.
    pub fn run(&mut self) -> io::Result<SelectionOutcome> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        let restore = Self::teardown_terminal(&mut terminal);
        let outcome = result?;
        restore?;
        Ok(outcome)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<SelectionOutcome> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            // One blocking read per cycle; resize events fall through to
            // the redraw.
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_action(map_key(key));
                }
            }

            match self.status {
                SessionStatus::Confirmed => {
                    return Ok(SelectionOutcome::Confirmed(self.selected_channels()));
                }
                SessionStatus::Cancelled => return Ok(SelectionOutcome::Cancelled),
                SessionStatus::Browsing => {}
            }
        }
    }
}

/// Full-screen picker front end.
///
/// Terminal failures surface as `PickError::Terminal` so the caller can
/// fall back to the line-oriented selector.
pub struct TuiPicker;

impl ChannelSelector for TuiPicker {
    fn select(&mut self, channels: &[Channel]) -> Result<SelectionOutcome, PickError> {
        let mut app = PickerApp::new(channels);
        app.run().map_err(|err| PickError::Terminal(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chanpick_core::{Aggregate, FIRST_PAGE_CAPACITY};

    fn channel(name: &str, category: Option<&str>) -> Channel {
        Channel {
            channel_id: 0,
            channel_name: name.into(),
            guild_id: 1,
            guild_name: "G".into(),
            category_name: category.map(String::from),
            estimated_messages: 100,
        }
    }

    /// Two categories plus one uncategorized channel; display list is
    /// General header, 1 channel, News header, 2 channels, Uncategorized
    /// header, 1 channel (7 entries).
    fn small_catalog() -> Vec<Channel> {
        vec![
            channel("updates", Some("News")),
            channel("general", Some("General")),
            channel("offtopic", None),
            channel("releases", Some("News")),
        ]
    }

    /// Enough uncategorized channels to spill onto a second page.
    fn paged_catalog() -> Vec<Channel> {
        (0..FIRST_PAGE_CAPACITY + 5)
            .map(|i| channel(&format!("ch{i}"), None))
            .collect()
    }

    #[test]
    fn starts_browsing_at_origin() {
        let channels = small_catalog();
        let app = PickerApp::new(&channels);
        assert_eq!(app.status(), SessionStatus::Browsing);
        assert_eq!(app.cursor(), (0, 0));
        assert_eq!(app.selection().count_checked(), 0);
    }

    #[test]
    fn toggle_on_all_pseudo_entry_checks_everything() {
        let channels = small_catalog();
        let mut app = PickerApp::new(&channels);
        app.handle_key_action(KeyAction::Toggle);
        assert!(app.selection().all_checked());
        app.handle_key_action(KeyAction::Toggle);
        assert_eq!(app.selection().count_checked(), 0);
    }

    #[test]
    fn global_shortcut_works_from_any_cursor() {
        let channels = small_catalog();
        let mut app = PickerApp::new(&channels);
        app.handle_key_action(KeyAction::MoveDown);
        app.handle_key_action(KeyAction::ToggleAll);
        assert!(app.selection().all_checked());
    }

    #[test]
    fn toggle_on_category_header_checks_members() {
        let channels = small_catalog();
        let mut app = PickerApp::new(&channels);
        // Position 1 is the "General" header.
        app.handle_key_action(KeyAction::MoveDown);
        app.handle_key_action(KeyAction::Toggle);
        assert!(app.selection().is_checked(1));
        assert!(!app.selection().is_checked(0));
    }

    #[test]
    fn toggle_on_channel_entry_checks_one() {
        let channels = small_catalog();
        let mut app = PickerApp::new(&channels);
        // Position 2 is #general under the "General" header.
        app.handle_key_action(KeyAction::MoveDown);
        app.handle_key_action(KeyAction::MoveDown);
        app.handle_key_action(KeyAction::Toggle);
        assert_eq!(app.selection().count_checked(), 1);
        assert!(app.selection().is_checked(1));
    }

    #[test]
    fn cursor_stops_at_top_and_bottom() {
        let channels = small_catalog();
        let mut app = PickerApp::new(&channels);
        app.handle_key_action(KeyAction::MoveUp);
        assert_eq!(app.cursor(), (0, 0));
        // 7 entries + All = 8 slots (0..=7) on the single page.
        for _ in 0..20 {
            app.handle_key_action(KeyAction::MoveDown);
        }
        assert_eq!(app.cursor(), (0, 7));
    }

    #[test]
    fn moving_down_crosses_page_boundary() {
        let channels = paged_catalog();
        let mut app = PickerApp::new(&channels);
        // Page 0 holds the header plus 11 channels, plus the All slot.
        for _ in 0..FIRST_PAGE_CAPACITY {
            app.handle_key_action(KeyAction::MoveDown);
        }
        assert_eq!(app.cursor(), (0, FIRST_PAGE_CAPACITY));
        app.handle_key_action(KeyAction::MoveDown);
        assert_eq!(app.cursor(), (1, 0));
    }

    #[test]
    fn moving_up_crosses_back_to_last_slot() {
        let channels = paged_catalog();
        let mut app = PickerApp::new(&channels);
        app.handle_key_action(KeyAction::NextPage);
        assert_eq!(app.cursor(), (1, 0));
        app.handle_key_action(KeyAction::MoveUp);
        assert_eq!(app.cursor(), (0, FIRST_PAGE_CAPACITY));
    }

    #[test]
    fn page_navigation_resets_position_and_stops_at_ends() {
        let channels = paged_catalog();
        let mut app = PickerApp::new(&channels);
        app.handle_key_action(KeyAction::MoveDown);
        app.handle_key_action(KeyAction::NextPage);
        assert_eq!(app.cursor(), (1, 0));
        app.handle_key_action(KeyAction::NextPage);
        assert_eq!(app.cursor(), (1, 0));
        app.handle_key_action(KeyAction::PrevPage);
        assert_eq!(app.cursor(), (0, 0));
        app.handle_key_action(KeyAction::PrevPage);
        assert_eq!(app.cursor(), (0, 0));
    }

    #[test]
    fn confirm_with_empty_selection_stays_browsing() {
        let channels = small_catalog();
        let mut app = PickerApp::new(&channels);
        app.handle_key_action(KeyAction::Confirm);
        assert_eq!(app.status(), SessionStatus::Browsing);
        assert!(app.notice().is_some());
        // The notice clears on the next input.
        app.handle_key_action(KeyAction::MoveDown);
        assert!(app.notice().is_none());
    }

    #[test]
    fn confirm_with_selection_terminates() {
        let channels = small_catalog();
        let mut app = PickerApp::new(&channels);
        app.handle_key_action(KeyAction::ToggleAll);
        app.handle_key_action(KeyAction::Confirm);
        assert_eq!(app.status(), SessionStatus::Confirmed);
    }

    #[test]
    fn cancel_terminates_immediately() {
        let channels = small_catalog();
        let mut app = PickerApp::new(&channels);
        app.handle_key_action(KeyAction::Cancel);
        assert_eq!(app.status(), SessionStatus::Cancelled);
    }

    #[test]
    fn selected_channels_in_catalog_order() {
        let channels = small_catalog();
        let mut app = PickerApp::new(&channels);
        app.handle_key_action(KeyAction::ToggleAll);
        let selected = app.selected_channels();
        let names: Vec<&str> = selected.iter().map(|c| c.channel_name.as_str()).collect();
        assert_eq!(names, ["updates", "general", "offtopic", "releases"]);
    }

    #[test]
    fn category_aggregate_after_partial_uncheck() {
        let channels = small_catalog();
        let mut app = PickerApp::new(&channels);
        app.handle_key_action(KeyAction::ToggleAll);
        // Entry 4 is #updates, the first channel under "News".
        app.handle_key_action(KeyAction::MoveDown); // General header
        app.handle_key_action(KeyAction::MoveDown); // #general
        app.handle_key_action(KeyAction::MoveDown); // News header
        app.handle_key_action(KeyAction::MoveDown); // #updates
        app.handle_key_action(KeyAction::Toggle);
        let news: Vec<usize> = vec![0, 3];
        assert_eq!(app.selection().aggregate(&news), Aggregate::Some);
        assert!(!app.selection().all_checked());
    }

    #[test]
    fn render_smoke_test() {
        use ratatui::backend::TestBackend;

        let channels = small_catalog();
        let app = PickerApp::new(&channels);
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
    }
}
