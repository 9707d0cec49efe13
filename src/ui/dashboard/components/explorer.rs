//! Event explorer card
//!
//! Renders the search box, the category selector and the event table

use super::super::state::{DashboardState, FocusedControl};
use super::super::utils::control_style;
use crate::consts::cli_consts::PLACEHOLDER;
use crate::model::MarketEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

/// Message shown in place of rows when nothing matches.
pub const NO_MATCHES: &str = "No events match your filters.";

/// Render the event explorer card.
pub fn render_explorer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    render_filter_controls(f, chunks[0], state);
    render_event_table(f, chunks[1], state);
}

fn render_filter_controls(f: &mut Frame, area: Rect, state: &DashboardState) {
    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(28)])
        .split(area);

    let query = &state.filters().search_query;
    let search_text = if query.is_empty() && state.focus() != FocusedControl::Search {
        Span::styled(
            "Search event name, description, channel…",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(query.clone())
    };
    let search = Paragraph::new(Line::from(search_text)).block(
        Block::default()
            .title("Search")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(control_style(state, FocusedControl::Search)),
    );
    f.render_widget(search, controls[0]);

    let category = Paragraph::new(format!("◀ {} ▶", state.filters().selected_category)).block(
        Block::default()
            .title("Category")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(control_style(state, FocusedControl::Category)),
    );
    f.render_widget(category, controls[1]);
}

fn event_row(event: &MarketEvent) -> Row<'_> {
    let mut details = vec![Line::from(Span::styled(
        event.event_name.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(description) = &event.description {
        details.push(Line::from(Span::styled(
            description.as_str(),
            Style::default().fg(Color::Gray),
        )));
    }
    let height = details.len() as u16;

    Row::new(vec![
        Cell::from(event.event_date.as_str()).style(Style::default().fg(Color::LightBlue)),
        Cell::from(Text::from(details)),
        Cell::from(event.category.as_str()),
        Cell::from(
            event
                .expected_market_channel
                .as_deref()
                .unwrap_or(PLACEHOLDER),
        ),
    ])
    .height(height)
}

fn render_event_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let filtered = state.filtered_events();

    let rows: Vec<Row> = if filtered.is_empty() {
        vec![
            Row::new(vec![Cell::from(""), Cell::from(NO_MATCHES)])
                .style(Style::default().fg(Color::DarkGray)),
        ]
    } else {
        filtered
            .iter()
            .skip(state.table_offset())
            .map(|event| event_row(event))
            .collect()
    };

    let header = Row::new(vec!["Date", "Event", "Category", "Market channel"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let title = format!(
        "EVENT EXPLORER ({} of {})",
        filtered.len(),
        state.events().len()
    );
    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Fill(1),
            Constraint::Length(18),
            Constraint::Length(26),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(table, area);
}
