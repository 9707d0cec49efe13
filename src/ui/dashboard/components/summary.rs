//! Data summary card
//!
//! Renders the KPI tiles and the date range controls

use super::super::state::{DashboardState, FocusedControl};
use super::super::utils::control_style;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// KPI label/value pairs in display order.
pub fn kpis(state: &DashboardState) -> [(&'static str, usize); 3] {
    [
        ("Total price records", state.prices().len()),
        ("Records in range", state.prices_in_range().len()),
        ("Key events", state.events().len()),
    ]
}

/// Render the data summary card.
pub fn render_summary(f: &mut Frame, area: Rect, state: &DashboardState) {
    let card = Block::default()
        .title("DATA SUMMARY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = card.inner(area);
    f.render_widget(card, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // KPI tiles
            Constraint::Length(3), // date fields
            Constraint::Fill(1),   // status and hint
        ])
        .split(inner);

    render_kpis(f, chunks[0], state);
    render_date_fields(f, chunks[1], state);
    render_status(f, chunks[2], state);
}

fn render_kpis(f: &mut Frame, area: Rect, state: &DashboardState) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (tile, (label, value)) in tiles.iter().zip(kpis(state)) {
        let kpi = Paragraph::new(vec![
            Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                value.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(kpi, *tile);
    }
}

fn render_date_fields(f: &mut Frame, area: Rect, state: &DashboardState) {
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let controls = [
        (FocusedControl::StartDate, state.start_input()),
        (FocusedControl::EndDate, state.end_input()),
    ];
    for (field, (control, text)) in fields.iter().zip(controls) {
        let input = Paragraph::new(text.to_string()).block(
            Block::default()
                .title(control.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(control_style(state, control)),
        );
        f.render_widget(input, *field);
    }
}

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

fn render_status(f: &mut Frame, area: Rect, state: &DashboardState) {
    let mut status = vec![Span::styled(
        format!(
            "Prices: {} | Events: {} | Change point: {}",
            state.prices_state().status_label(),
            state.events_state().status_label(),
            state.change_point_state().status_label(),
        ),
        Style::default().fg(Color::LightBlue),
    )];
    if !state.all_settled() {
        status.push(Span::styled(
            format!(" {}", SPINNER[state.tick % SPINNER.len()]),
            Style::default().fg(Color::LightYellow),
        ));
    }
    let mut lines = vec![Line::from(status)];

    let unparsable = state.unparsable_price_count();
    if unparsable > 0 {
        lines.push(Line::from(Span::styled(
            format!("{} records with unreadable dates excluded", unparsable),
            Style::default().fg(Color::LightRed),
        )));
    }

    lines.push(Line::from(Span::styled(
        "Tip: the date range filters price records locally.",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
