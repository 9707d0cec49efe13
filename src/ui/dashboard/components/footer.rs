//! Dashboard footer component
//!
//! Renders footer with key bindings and the API location

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let uptime = state.start_time.elapsed().as_secs();
    let footer_text = format!(
        "[Esc] Quit | [Tab] Next field | [←/→] Category | [↑/↓] Scroll | API: {} | Up {:02}:{:02}:{:02}",
        state.environment.api_url(),
        uptime / 3600,
        (uptime % 3600) / 60,
        uptime % 60
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
