//! Dashboard main renderer

use super::components::{explorer, footer, header, logs, summary};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(16), Constraint::Fill(1)])
        .split(content_chunks[0]);

    summary::render_summary(f, left_chunks[0], state);
    logs::render_logs_panel(f, left_chunks[1], state);
    explorer::render_explorer(f, content_chunks[1], state);
    footer::render_footer(f, main_chunks[2], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::model::{ChangePoint, MarketEvent, PriceRecord};
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::components::explorer::NO_MATCHES;
    use crate::ui::dashboard::state::FilterState;
    use crate::workers::core::DataUpdate;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn new_state() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(true, FilterState::default()),
        )
    }

    /// Renders the dashboard and returns the screen one line per row.
    fn render_lines(state: &DashboardState) -> Vec<String> {
        let backend = TestBackend::new(160, 48);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn screen_contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }

    #[test]
    fn test_renders_placeholders_before_any_data() {
        let lines = render_lines(&new_state());
        assert!(screen_contains(&lines, "Detected Change Point"));
        assert!(screen_contains(&lines, "—"));
        assert!(screen_contains(&lines, "Total price records"));
        assert!(screen_contains(&lines, NO_MATCHES));
        assert!(screen_contains(&lines, "Prices: loading"));
    }

    #[test]
    fn test_missing_change_point_renders_placeholder() {
        let mut state = new_state();
        state.apply_update(DataUpdate::ChangePoint(None));
        let lines = render_lines(&state);
        assert!(screen_contains(&lines, "Change point: ready"));
        assert!(screen_contains(&lines, "—"));
    }

    #[test]
    fn test_renders_loaded_data() {
        let mut state = new_state();
        state.apply_update(DataUpdate::ChangePoint(Some(ChangePoint {
            tau_date: Some("2020-04-01".to_string()),
            note: Some("COVID-19 oil market shock".to_string()),
        })));
        state.apply_update(DataUpdate::Prices(vec![
            PriceRecord::new("2013-12-31", 110.0),
            PriceRecord::new("2015-06-01", 62.0),
        ]));
        state.apply_update(DataUpdate::Events(vec![
            MarketEvent::new("2016-01-12", "OPEC cut", "Policy")
                .with_description("Production quotas lowered"),
            MarketEvent::new("2014-11-27", "OPEC no cut", "Supply"),
        ]));

        let lines = render_lines(&state);
        assert!(screen_contains(&lines, "2020-04-01"));
        assert!(screen_contains(&lines, "COVID-19 oil market shock"));
        assert!(screen_contains(&lines, "Production quotas lowered"));
        assert!(screen_contains(&lines, "EVENT EXPLORER (2 of 2)"));
        assert!(!screen_contains(&lines, NO_MATCHES));

        let first = lines.iter().position(|l| l.contains("2014-11-27")).unwrap();
        let second = lines.iter().position(|l| l.contains("2016-01-12")).unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_no_matches_row_when_filter_excludes_everything() {
        let mut state = new_state();
        state.apply_update(DataUpdate::Events(vec![MarketEvent::new(
            "2014-11-27",
            "OPEC no cut",
            "Supply",
        )]));
        state.set_search_query("hurricane");
        let lines = render_lines(&state);
        assert!(screen_contains(&lines, NO_MATCHES));
        assert!(screen_contains(&lines, "EVENT EXPLORER (0 of 1)"));
    }
}
