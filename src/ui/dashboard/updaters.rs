//! Dashboard state update logic
//!
//! Applies loader messages and keyboard input to the dashboard state

use super::state::{DashboardState, FocusedControl};

use crate::consts::cli_consts::ui::PAGE_SCROLL_ROWS;
use crate::dates::{format_date, parse_date};
use crate::events::Event;
use crate::workers::core::LoaderMessage;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the UI loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

impl DashboardState {
    /// Advance the tick and process all queued loader messages.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(message) = self.pending_messages.pop_front() {
            match message {
                LoaderMessage::Event(event) => {
                    if event.should_display() {
                        self.add_to_activity_log(event);
                    }
                }
                LoaderMessage::Data(update) => self.apply_update(update),
            }
        }

        self.clamp_table_offset();
    }

    /// Translate a key press into setter calls.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return KeyOutcome::Quit;
        }

        match key.code {
            KeyCode::Tab => self.move_focus(self.focus().next()),
            KeyCode::BackTab => self.move_focus(self.focus().previous()),
            KeyCode::Up => self.scroll_table(-1),
            KeyCode::Down => self.scroll_table(1),
            KeyCode::PageUp => self.scroll_table(-(PAGE_SCROLL_ROWS as isize)),
            KeyCode::PageDown => self.scroll_table(PAGE_SCROLL_ROWS as isize),
            KeyCode::Left if self.focus() == FocusedControl::Category => self.cycle_category(-1),
            KeyCode::Right if self.focus() == FocusedControl::Category => self.cycle_category(1),
            KeyCode::Enter => self.commit_date_input(),
            KeyCode::Backspace => self.edit_focused(|text| {
                text.pop();
            }),
            KeyCode::Char('q') if !self.focus().is_text_input() => return KeyOutcome::Quit,
            KeyCode::Char(c) => self.insert_char(c),
            _ => {}
        }
        KeyOutcome::Continue
    }

    /// Step through the category set, wrapping at both ends.
    pub fn cycle_category(&mut self, step: isize) {
        let categories = self.categories();
        let current = categories
            .iter()
            .position(|c| *c == self.filters().selected_category)
            .unwrap_or(0) as isize;
        let len = categories.len() as isize;
        let next = (current + step).rem_euclid(len) as usize;
        self.set_selected_category(categories[next].clone());
    }

    fn move_focus(&mut self, focus: FocusedControl) {
        self.commit_date_input();
        self.set_focus(focus);
    }

    fn insert_char(&mut self, c: char) {
        match self.focus() {
            FocusedControl::Search => self.edit_focused(|text| text.push(c)),
            FocusedControl::StartDate | FocusedControl::EndDate => {
                if c.is_ascii_digit() || c == '-' {
                    self.edit_focused(|text| text.push(c));
                }
            }
            FocusedControl::Category => {}
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        match self.focus() {
            FocusedControl::Search => {
                let mut query = self.filters().search_query.clone();
                edit(&mut query);
                self.set_search_query(query);
            }
            FocusedControl::StartDate => edit(self.start_input_mut()),
            FocusedControl::EndDate => edit(self.end_input_mut()),
            FocusedControl::Category => {}
        }
    }

    /// Parse the focused date buffer into the filter.
    ///
    /// Invalid input is rejected, logged, and the buffer reverts to the current date.
    fn commit_date_input(&mut self) {
        let (input, current) = match self.focus() {
            FocusedControl::StartDate => (self.start_input().to_string(), self.filters().start_date),
            FocusedControl::EndDate => (self.end_input().to_string(), self.filters().end_date),
            _ => return,
        };
        if input == format_date(current) {
            return;
        }

        let date = match parse_date(&input) {
            Ok(date) => date,
            Err(e) => {
                let event = Event::dashboard_warning(format!("{} date rejected: {}", self.focus(), e));
                event.log();
                self.add_to_activity_log(event);
                current
            }
        };
        if self.focus() == FocusedControl::StartDate {
            self.set_start_date(date);
        } else {
            self.set_end_date(date);
        }
    }

    fn scroll_table(&mut self, delta: isize) {
        let offset = self.table_offset().saturating_add_signed(delta);
        self.set_table_offset(offset);
        self.clamp_table_offset();
    }

    fn clamp_table_offset(&mut self) {
        let max = self.filtered_events().len().saturating_sub(1);
        if self.table_offset() > max {
            self.set_table_offset(max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::model::MarketEvent;
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::state::FilterState;
    use crate::workers::core::DataUpdate;
    use std::time::Instant;

    fn new_state() -> DashboardState {
        let mut state = DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(false, FilterState::default()),
        );
        state.add_message(LoaderMessage::Data(DataUpdate::Events(vec![
            MarketEvent::new("2016-01-12", "OPEC cut", "Policy"),
            MarketEvent::new("2014-11-27", "OPEC no cut", "Supply"),
            MarketEvent::new("2020-04-20", "WTI negative", "Demand"),
        ])));
        state.update();
        state
    }

    fn press(state: &mut DashboardState, code: KeyCode) -> KeyOutcome {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(state: &mut DashboardState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_update_drains_queue() {
        let state = new_state();
        assert!(state.pending_messages.is_empty());
        assert_eq!(state.events().len(), 3);
        assert_eq!(state.tick, 1);
    }

    #[test]
    fn test_typing_updates_search() {
        let mut state = new_state();
        type_text(&mut state, "quit");
        assert_eq!(state.filters().search_query, "quit");
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.filters().search_query, "qui");
    }

    #[test]
    fn test_quit_keys() {
        let mut state = new_state();
        assert_eq!(press(&mut state, KeyCode::Esc), KeyOutcome::Quit);
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus(), FocusedControl::Category);
        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyOutcome::Quit);
        assert_eq!(
            state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyOutcome::Quit
        );
    }

    #[test]
    fn test_category_cycles_and_wraps() {
        let mut state = new_state();
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.filters().selected_category, "Demand");
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.filters().selected_category, "Supply");
        assert_eq!(state.filtered_events().len(), 1);
    }

    #[test]
    fn test_date_entry_commits_valid_dates() {
        let mut state = new_state();
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus(), FocusedControl::StartDate);

        for _ in 0..10 {
            press(&mut state, KeyCode::Backspace);
        }
        type_text(&mut state, "2015-06-01");
        press(&mut state, KeyCode::Enter);
        assert_eq!(format_date(state.filters().start_date), "2015-06-01");
    }

    #[test]
    fn test_invalid_date_is_rejected_and_logged() {
        let mut state = new_state();
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.focus(), FocusedControl::EndDate);

        type_text(&mut state, "99");
        press(&mut state, KeyCode::Tab);

        assert_eq!(format_date(state.filters().end_date), "2022-12-31");
        assert_eq!(state.end_input(), "2022-12-31");
        assert!(
            state
                .activity_logs
                .back()
                .unwrap()
                .msg
                .starts_with("End date rejected")
        );
    }

    #[test]
    fn test_date_fields_ignore_letters() {
        let mut state = new_state();
        press(&mut state, KeyCode::BackTab);
        type_text(&mut state, "abc");
        assert_eq!(state.end_input(), "2022-12-31");
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = new_state();
        press(&mut state, KeyCode::PageDown);
        assert_eq!(state.table_offset(), 2);
        press(&mut state, KeyCode::Up);
        assert_eq!(state.table_offset(), 1);
        press(&mut state, KeyCode::PageUp);
        assert_eq!(state.table_offset(), 0);
    }
}
