//! Plain-text rendering of the dashboard for headless runs

use super::components::explorer::NO_MATCHES;
use super::components::header::change_point_display;
use super::components::summary::kpis;
use super::state::DashboardState;
use crate::consts::cli_consts::PLACEHOLDER;
use crate::dates::format_date;
use std::fmt::Write;

/// Renders the same projection as the TUI as plain text.
pub fn render_report(state: &DashboardState) -> String {
    let mut out = String::new();
    let filters = state.filters();

    let (tau_date, note) = change_point_display(state);
    let _ = writeln!(out, "Detected change point: {}", tau_date);
    if !note.is_empty() {
        let _ = writeln!(out, "  {}", note);
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Date range: {} to {}",
        format_date(filters.start_date),
        format_date(filters.end_date)
    );
    for (label, value) in kpis(state) {
        let _ = writeln!(out, "{:<22}{}", format!("{}:", label), value);
    }
    let unparsable = state.unparsable_price_count();
    if unparsable > 0 {
        let _ = writeln!(out, "{:<22}{}", "Unreadable dates:", unparsable);
    }
    let _ = writeln!(out);

    let query = filters.search_query.trim();
    let _ = writeln!(
        out,
        "Events (category: {}, search: {})",
        filters.selected_category,
        if query.is_empty() { PLACEHOLDER } else { query }
    );
    let _ = writeln!(
        out,
        "{:<12}{:<40}{:<18}{}",
        "Date", "Event", "Category", "Market channel"
    );

    let filtered = state.filtered_events();
    if filtered.is_empty() {
        let _ = writeln!(out, "{}", NO_MATCHES);
    }
    for event in filtered {
        let _ = writeln!(
            out,
            "{:<12}{:<40}{:<18}{}",
            event.event_date,
            event.event_name,
            event.category,
            event
                .expected_market_channel
                .as_deref()
                .unwrap_or(PLACEHOLDER)
        );
        if let Some(description) = &event.description {
            let _ = writeln!(out, "{:<12}{}", "", description);
        }
    }

    out
}
