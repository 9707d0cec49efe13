//! CLI command messaging
//!
//! Tagged one-line messages for `config` and `start`. Warnings and errors go
//! to stderr so a headless report on stdout stays clean.

use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum CmdLevel {
    Info,
    Warn,
    Error,
    Success,
}

impl CmdLevel {
    fn color(self) -> &'static str {
        match self {
            CmdLevel::Info => "\x1b[1;33m",
            CmdLevel::Warn => "\x1b[1;91m",
            CmdLevel::Error => "\x1b[1;31m",
            CmdLevel::Success => "\x1b[1;32m",
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, CmdLevel::Warn | CmdLevel::Error)
    }
}

/// `[LEVEL] title`, followed by a tab and the details when there are any.
pub fn format_message(level: CmdLevel, title: &str, details: &str) -> String {
    let mut line = format!("{}[{}]\x1b[0m {}", level.color(), level, title);
    if !details.is_empty() {
        line.push_str("\t ");
        line.push_str(details);
    }
    line
}

pub fn print_message(level: CmdLevel, title: &str, details: &str) {
    let line = format_message(level, title, details);
    if level.to_stderr() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::CmdLevel::Info, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::CmdLevel::Warn, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::CmdLevel::Error, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::CmdLevel::Success, $title, &format!($($details)*))
    };
}
