//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use crate::ui::dashboard::state::{DashboardState, FocusedControl};
use ratatui::prelude::{Color, Modifier, Style};

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::PriceLoader => Color::Cyan,
        Worker::EventLoader => Color::Yellow,
        Worker::ChangePointLoader => Color::Green,
        Worker::Dashboard => Color::Magenta,
    }
}

/// Border style for an input control, highlighted when focused
pub fn control_style(state: &DashboardState, control: FocusedControl) -> Style {
    if state.focus() == control {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min_sec) = time_part.get(0..8) {
                    return format!("{} {}", month_day, hour_min_sec);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose HTTP error patterns with cleaner messages
    if msg.contains("Reqwest error") && msg.contains("error sending request") {
        if let Some((prefix, _)) = msg.split_once(": Reqwest error") {
            return format!("{}: server unreachable", prefix);
        }
        return "Server unreachable".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("operation timed out") {
        return "Request timed out".to_string();
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2026-10-16 09:05:33"), "10-16 09:05:33");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message() {
        let raw = "Failed to load prices: Reqwest error: error sending request for url (http://127.0.0.1:5000/api/prices)";
        assert_eq!(
            clean_http_error_message(raw),
            "Failed to load prices: server unreachable"
        );
        assert_eq!(clean_http_error_message("Loaded 3 key events"), "Loaded 3 key events");
    }
}
