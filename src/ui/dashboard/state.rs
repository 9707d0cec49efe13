//! Dashboard state management
//!
//! Contains the dashboard state struct, the filter state and related enums.
//! All mutation goes through the named setters below; derived views are
//! recomputed from scratch on every call.

use crate::consts::cli_consts::{
    ALL_CATEGORIES, DEFAULT_END_DATE, DEFAULT_START_DATE, MAX_ACTIVITY_LOGS,
};
use crate::dates::{format_date, parse_date};
use crate::environment::Environment;
use crate::events::{Event, Worker};
use crate::filters::{categories_of, count_unparsable_prices, filter_events, filter_prices_in_range};
use crate::model::{ChangePoint, MarketEvent, PriceRecord};
use crate::ui::app::UIConfig;
use crate::workers::core::{DataUpdate, LoaderMessage};

use chrono::NaiveDate;
use std::collections::VecDeque;
use std::time::Instant;

/// Load state of one dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Loadable<T> {
    /// Request still in flight.
    #[default]
    Pending,
    Loaded(T),
    /// Request failed; nothing was ever loaded.
    Failed,
}

impl<T> Loadable<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// True once the load has either succeeded or failed.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Loadable::Pending)
    }

    pub fn status_label(&self) -> &'static str {
        match self {
            Loadable::Pending => "loading",
            Loadable::Loaded(_) => "ready",
            Loadable::Failed => "unavailable",
        }
    }
}

/// User-controlled filters, seeded from the command line or saved defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    pub selected_category: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            start_date: default_date(DEFAULT_START_DATE, NaiveDate::MIN),
            end_date: default_date(DEFAULT_END_DATE, NaiveDate::MAX),
        }
    }
}

fn default_date(text: &str, fallback: NaiveDate) -> NaiveDate {
    parse_date(text).unwrap_or(fallback)
}

/// The control receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum FocusedControl {
    Search,
    Category,
    #[strum(to_string = "Start")]
    StartDate,
    #[strum(to_string = "End")]
    EndDate,
}

impl FocusedControl {
    pub fn next(self) -> Self {
        match self {
            FocusedControl::Search => FocusedControl::Category,
            FocusedControl::Category => FocusedControl::StartDate,
            FocusedControl::StartDate => FocusedControl::EndDate,
            FocusedControl::EndDate => FocusedControl::Search,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FocusedControl::Search => FocusedControl::EndDate,
            FocusedControl::Category => FocusedControl::Search,
            FocusedControl::StartDate => FocusedControl::Category,
            FocusedControl::EndDate => FocusedControl::StartDate,
        }
    }

    /// Whether printable keys are captured as text.
    pub fn is_text_input(self) -> bool {
        !matches!(self, FocusedControl::Category)
    }
}

/// Dashboard state: loaded datasets, filters and UI bookkeeping.
#[derive(Debug)]
pub struct DashboardState {
    /// The data server the datasets come from.
    pub environment: Environment,
    /// The start time of the application.
    pub start_time: Instant,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Queue of loader messages waiting to be processed
    pub pending_messages: VecDeque<LoaderMessage>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter
    pub tick: usize,

    prices: Loadable<Vec<PriceRecord>>,
    events: Loadable<Vec<MarketEvent>>,
    change_point: Loadable<Option<ChangePoint>>,
    filters: FilterState,
    focus: FocusedControl,
    /// Edit buffers for the two date fields
    start_input: String,
    end_input: String,
    /// First visible row of the event table
    table_offset: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        let filters = ui_config.filters;
        Self {
            environment,
            start_time,
            with_background_color: ui_config.with_background_color,
            pending_messages: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            prices: Loadable::Pending,
            events: Loadable::Pending,
            change_point: Loadable::Pending,
            start_input: format_date(filters.start_date),
            end_input: format_date(filters.end_date),
            filters,
            focus: FocusedControl::Search,
            table_offset: 0,
        }
    }

    // Getter methods for private fields

    pub fn prices_state(&self) -> &Loadable<Vec<PriceRecord>> {
        &self.prices
    }

    pub fn events_state(&self) -> &Loadable<Vec<MarketEvent>> {
        &self.events
    }

    pub fn change_point_state(&self) -> &Loadable<Option<ChangePoint>> {
        &self.change_point
    }

    /// Loaded prices, empty until the load succeeds.
    pub fn prices(&self) -> &[PriceRecord] {
        self.prices.loaded().map(Vec::as_slice).unwrap_or_default()
    }

    /// Loaded events, empty until the load succeeds.
    pub fn events(&self) -> &[MarketEvent] {
        self.events.loaded().map(Vec::as_slice).unwrap_or_default()
    }

    /// The change point, if one has been loaded.
    pub fn change_point(&self) -> Option<&ChangePoint> {
        self.change_point.loaded().and_then(Option::as_ref)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn focus(&self) -> FocusedControl {
        self.focus
    }

    pub fn start_input(&self) -> &str {
        &self.start_input
    }

    pub fn end_input(&self) -> &str {
        &self.end_input
    }

    pub fn table_offset(&self) -> usize {
        self.table_offset
    }

    /// True once every dataset has either loaded or failed.
    pub fn all_settled(&self) -> bool {
        self.prices.is_settled() && self.events.is_settled() && self.change_point.is_settled()
    }

    // Derived views

    pub fn categories(&self) -> Vec<String> {
        categories_of(self.events())
    }

    pub fn filtered_events(&self) -> Vec<&MarketEvent> {
        filter_events(
            self.events(),
            &self.filters.selected_category,
            &self.filters.search_query,
        )
    }

    pub fn prices_in_range(&self) -> Vec<&PriceRecord> {
        filter_prices_in_range(self.prices(), self.filters.start_date, self.filters.end_date)
    }

    pub fn unparsable_price_count(&self) -> usize {
        count_unparsable_prices(self.prices())
    }

    // Setter methods

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filters.search_query = query.into();
        self.table_offset = 0;
    }

    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.filters.selected_category = category.into();
        self.table_offset = 0;
    }

    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.filters.start_date = date;
        self.start_input = format_date(date);
    }

    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.filters.end_date = date;
        self.end_input = format_date(date);
    }

    pub fn set_focus(&mut self, focus: FocusedControl) {
        self.focus = focus;
    }

    pub(super) fn start_input_mut(&mut self) -> &mut String {
        &mut self.start_input
    }

    pub(super) fn end_input_mut(&mut self) -> &mut String {
        &mut self.end_input
    }

    pub(super) fn set_table_offset(&mut self, offset: usize) {
        self.table_offset = offset;
    }

    /// Applies a finished load. A failure leaves previously loaded data untouched.
    pub fn apply_update(&mut self, update: DataUpdate) {
        match update {
            DataUpdate::Prices(prices) => self.prices = Loadable::Loaded(prices),
            DataUpdate::Events(events) => self.events = Loadable::Loaded(events),
            DataUpdate::ChangePoint(cp) => self.change_point = Loadable::Loaded(cp),
            DataUpdate::Failed(worker) => self.mark_failed(worker),
        }
    }

    fn mark_failed(&mut self, worker: Worker) {
        match worker {
            Worker::PriceLoader if !self.prices.is_settled() => self.prices = Loadable::Failed,
            Worker::EventLoader if !self.events.is_settled() => self.events = Loadable::Failed,
            Worker::ChangePointLoader if !self.change_point.is_settled() => {
                self.change_point = Loadable::Failed
            }
            _ => {}
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add a loader message to the processing queue
    pub fn add_message(&mut self, message: LoaderMessage) {
        self.pending_messages.push_back(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(false, FilterState::default()),
        )
    }

    #[test]
    fn test_defaults() {
        let state = new_state();
        let filters = state.filters();
        assert_eq!(filters.search_query, "");
        assert_eq!(filters.selected_category, "All");
        assert_eq!(format_date(filters.start_date), "2014-01-01");
        assert_eq!(format_date(filters.end_date), "2022-12-31");
        assert!(state.prices().is_empty());
        assert!(state.change_point().is_none());
        assert!(!state.all_settled());
    }

    #[test]
    fn test_partial_availability() {
        let mut state = new_state();
        state.apply_update(DataUpdate::Events(vec![MarketEvent::new(
            "2014-11-27",
            "OPEC no cut",
            "Supply",
        )]));

        assert_eq!(state.events().len(), 1);
        assert_eq!(state.categories(), vec!["All", "Supply"]);
        assert!(state.prices_in_range().is_empty());
        assert_eq!(state.prices_state(), &Loadable::Pending);
    }

    #[test]
    fn test_failure_keeps_previous_value() {
        let mut state = new_state();
        state.apply_update(DataUpdate::Prices(vec![PriceRecord::new("2015-01-01", 50.0)]));
        state.apply_update(DataUpdate::Failed(Worker::PriceLoader));
        assert_eq!(state.prices().len(), 1);

        state.apply_update(DataUpdate::Failed(Worker::EventLoader));
        assert_eq!(state.events_state(), &Loadable::Failed);
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_loaded_but_empty_change_point_differs_from_pending() {
        let mut state = new_state();
        assert_eq!(state.change_point_state(), &Loadable::Pending);
        state.apply_update(DataUpdate::ChangePoint(None));
        assert_eq!(state.change_point_state(), &Loadable::Loaded(None));
        assert!(state.change_point().is_none());
    }

    #[test]
    fn test_setters_drive_derived_views() {
        let mut state = new_state();
        state.apply_update(DataUpdate::Prices(vec![
            PriceRecord::new("2010-06-01", 75.0),
            PriceRecord::new("2015-06-01", 62.0),
        ]));
        state.apply_update(DataUpdate::Events(vec![
            MarketEvent::new("2016-01-12", "OPEC cut", "Policy"),
            MarketEvent::new("2014-11-27", "OPEC no cut", "Supply"),
        ]));

        assert_eq!(state.prices_in_range().len(), 1);
        state.set_start_date(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
        assert_eq!(state.prices_in_range().len(), 2);
        assert_eq!(state.start_input(), "2010-01-01");

        state.set_selected_category("Policy");
        assert_eq!(state.filtered_events().len(), 1);
        state.set_selected_category("All");
        state.set_search_query("no cut");
        assert_eq!(state.filtered_events()[0].event_name, "OPEC no cut");
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = new_state();
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            state.add_to_activity_log(Event::success(Worker::PriceLoader, format!("{}", i)));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "5");
    }

    #[test]
    fn test_focus_cycle() {
        let mut focus = FocusedControl::Search;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, FocusedControl::Search);
        assert_eq!(FocusedControl::Search.previous(), FocusedControl::EndDate);
        assert!(!FocusedControl::Category.is_text_input());
    }
}
