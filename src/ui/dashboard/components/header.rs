//! Dashboard header component
//!
//! Renders the title and the detected change-point badge

use super::super::state::DashboardState;
use crate::consts::cli_consts::PLACEHOLDER;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Change-point date and note as displayed, with placeholders for absent values.
pub fn change_point_display(state: &DashboardState) -> (String, String) {
    let change_point = state.change_point();
    let tau_date = change_point
        .and_then(|cp| cp.tau_date.clone())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let note = change_point
        .and_then(|cp| cp.note.clone())
        .unwrap_or_default();
    (tau_date, note)
}

/// Render header with title and change-point badge.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "BRENT OIL DASHBOARD",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Track historical prices, key events, and detected change points.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Left)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let (tau_date, note) = change_point_display(state);
    let badge = Paragraph::new(vec![
        Line::from(Span::styled(
            tau_date,
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(note, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title("Detected Change Point")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(badge, header_chunks[1]);
}
