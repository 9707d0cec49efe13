//! Event System
//!
//! Types and implementations for loader events and the activity log

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Worker {
    /// Loads the historical price series.
    #[strum(to_string = "prices")]
    PriceLoader,
    /// Loads the annotated market events.
    #[strum(to_string = "events")]
    EventLoader,
    /// Loads the detected change point.
    #[strum(to_string = "change-point")]
    ChangePointLoader,
    /// Messages raised by the dashboard itself, e.g. rejected input.
    #[strum(to_string = "dashboard")]
    Dashboard,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn loading(worker: Worker) -> Self {
        Self::new(
            worker,
            format!("Loading {}...", worker),
            EventType::Refresh,
            LogLevel::Info,
        )
    }

    pub fn success(worker: Worker, msg: String) -> Self {
        Self::new(worker, msg, EventType::Success, LogLevel::Info)
    }

    pub fn error(worker: Worker, msg: String, log_level: LogLevel) -> Self {
        Self::new(worker, msg, EventType::Error, log_level)
    }

    pub fn dashboard_warning(msg: String) -> Self {
        Self::new(Worker::Dashboard, msg, EventType::Error, LogLevel::Warn)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }

    /// Forwards the event to the `log` facade.
    pub fn log(&self) {
        let level: log::Level = self.log_level.into();
        log::log!(level, "[{}] {}", self.worker, self.msg);
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.worker, self.msg
        )
    }
}
