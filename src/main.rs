// Copyright (c) 2026 Brent Dashboard contributors. All rights reserved.

mod api;
mod cli_messages;
mod config;
mod consts;
mod dates;
mod environment;
mod events;
mod filters;
mod logging;
mod model;
mod runtime;
mod session;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::dates::{format_date, parse_date};
use crate::environment::Environment;
use crate::logging::init_headless_logger;
use crate::session::{SessionData, run_headless_mode, run_tui_mode, setup_session};
use crate::ui::dashboard::FilterState;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::error::Error;

/// Environment variable selecting the data server (`local` or a URL).
const ENVIRONMENT_VAR: &str = "DASHBOARD_ENVIRONMENT";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dashboard
    Start {
        /// Print the dashboard once all data has loaded instead of opening the TUI
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Base URL of the data API
        #[arg(long, value_name = "URL", value_parser = parse_environment)]
        api_url: Option<Environment>,

        /// First day of the price range (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", value_parser = parse_cli_date)]
        start_date: Option<NaiveDate>,

        /// Last day of the price range (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", value_parser = parse_cli_date)]
        end_date: Option<NaiveDate>,

        /// Only show events of this category
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,

        /// Only show events whose name, description or channel contain this text
        #[arg(long, value_name = "TEXT")]
        query: Option<String>,

        /// Paint the dashboard background
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Manage the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Save the API URL and/or the default date range
    Set {
        /// Base URL of the data API, or "local"
        #[arg(long, value_name = "URL", value_parser = parse_environment)]
        api_url: Option<Environment>,

        /// Default first day of the price range
        #[arg(long, value_name = "DATE", value_parser = parse_cli_date)]
        start_date: Option<NaiveDate>,

        /// Default last day of the price range
        #[arg(long, value_name = "DATE", value_parser = parse_cli_date)]
        end_date: Option<NaiveDate>,
    },
    /// Remove the saved configuration
    Clear,
}

fn parse_environment(s: &str) -> Result<Environment, String> {
    s.parse()
}

fn parse_cli_date(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            headless,
            api_url,
            start_date,
            end_date,
            category,
            query,
            with_background,
        } => {
            let config = Config::load_or_default(&config_path)
                .map_err(|e| format!("Failed to load config: {}", e))?;
            let environment = resolve_environment(
                api_url,
                std::env::var(ENVIRONMENT_VAR).ok(),
                &config,
            )?;
            let filters = initial_filters(start_date, end_date, category, query, &config)?;
            start(environment, filters, headless, with_background).await
        }
        Command::Config { action } => match action {
            ConfigAction::Set {
                api_url,
                start_date,
                end_date,
            } => {
                if api_url.is_none() && start_date.is_none() && end_date.is_none() {
                    return Err(Box::from(
                        "Nothing to save. Pass --api-url, --start-date or --end-date.",
                    ));
                }
                let mut config = Config::load_or_default(&config_path)?;
                if let Some(environment) = api_url {
                    print_cmd_info!("API URL", "{}", environment.api_url());
                    config.api_url = Some(environment.api_url());
                }
                if let Some(date) = start_date {
                    print_cmd_info!("Default start date", "{}", format_date(date));
                    config.start_date = Some(format_date(date));
                }
                if let Some(date) = end_date {
                    print_cmd_info!("Default end date", "{}", format_date(date));
                    config.end_date = Some(format_date(date));
                }
                config
                    .save(&config_path)
                    .map_err(|e| format!("Failed to save config: {}", e))?;
                print_cmd_success!("Configuration saved", "{}", config_path.display());
                Ok(())
            }
            ConfigAction::Clear => {
                Config::clear(&config_path)?;
                print_cmd_success!("Configuration cleared", "");
                Ok(())
            }
        },
    }
}

/// Picks the data server: CLI flag, then environment variable, then config
/// file, then the local server.
fn resolve_environment(
    flag: Option<Environment>,
    env_var: Option<String>,
    config: &Config,
) -> Result<Environment, Box<dyn Error>> {
    if let Some(environment) = flag {
        return Ok(environment);
    }
    if let Some(value) = env_var.filter(|v| !v.trim().is_empty()) {
        match value.parse::<Environment>() {
            Ok(environment) => return Ok(environment),
            Err(e) => print_cmd_warn!("Ignoring environment variable", "{}: {}", ENVIRONMENT_VAR, e),
        }
    }
    Ok(config.environment()?.unwrap_or_default())
}

/// Builds the starting filters from CLI arguments, falling back to the saved defaults.
fn initial_filters(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    category: Option<String>,
    query: Option<String>,
    config: &Config,
) -> Result<FilterState, Box<dyn Error>> {
    let mut filters = FilterState::default();
    // Saved dates are only parsed when no flag overrides them.
    let start_date = match start_date {
        Some(date) => Some(date),
        None => config.start_date()?,
    };
    if let Some(date) = start_date {
        filters.start_date = date;
    }
    let end_date = match end_date {
        Some(date) => Some(date),
        None => config.end_date()?,
    };
    if let Some(date) = end_date {
        filters.end_date = date;
    }
    if let Some(category) = category {
        let category = category.trim();
        if category.is_empty() {
            return Err(Box::from("--category must not be empty"));
        }
        filters.selected_category = category.to_string();
    }
    if let Some(query) = query {
        filters.search_query = query;
    }
    if filters.start_date > filters.end_date {
        print_cmd_warn!(
            "Empty date range",
            "{} is after {}, no price records will be in range",
            format_date(filters.start_date),
            format_date(filters.end_date)
        );
    }
    Ok(filters)
}

/// Sets up the session. Headless runs get their logger first so the loaders'
/// earliest records are not lost.
fn prepare_session(
    environment: Environment,
    filters: FilterState,
    headless: bool,
) -> Result<SessionData, Box<dyn Error>> {
    if headless {
        init_headless_logger();
    }
    setup_session(environment, filters)
}

/// Starts the dashboard.
///
/// # Arguments
/// * `environment` - The data server to read from.
/// * `filters` - Initial filter values.
/// * `headless` - Print a text report instead of opening the TUI.
/// * `with_background` - Paint the TUI background.
async fn start(
    environment: Environment,
    filters: FilterState,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    let session = prepare_session(environment, filters, headless).map_err(|e| {
        print_cmd_error!("Failed to start session", "{}", e);
        e
    })?;

    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, with_background).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::ALL_CATEGORIES;

    fn custom(url: &str) -> Environment {
        Environment::Custom {
            api_url: url.to_string(),
        }
    }

    #[test]
    fn test_environment_resolution_order() {
        let config = Config::new("http://config:5000".to_string());

        let env = resolve_environment(
            Some(custom("http://flag:5000")),
            Some("http://var:5000".to_string()),
            &config,
        )
        .unwrap();
        assert_eq!(env, custom("http://flag:5000"));

        let env = resolve_environment(None, Some("http://var:5000".to_string()), &config).unwrap();
        assert_eq!(env, custom("http://var:5000"));

        let env = resolve_environment(None, None, &config).unwrap();
        assert_eq!(env, custom("http://config:5000"));

        let env = resolve_environment(None, None, &Config::default()).unwrap();
        assert_eq!(env, Environment::Local);
    }

    #[test]
    fn test_invalid_environment_variable_falls_through() {
        let env = resolve_environment(None, Some("ftp://nope".to_string()), &Config::default())
            .unwrap();
        assert_eq!(env, Environment::Local);

        let env = resolve_environment(None, Some("  ".to_string()), &Config::default()).unwrap();
        assert_eq!(env, Environment::Local);
    }

    #[test]
    fn test_invalid_config_url_is_an_error() {
        let config = Config::new("not a url".to_string());
        assert!(resolve_environment(None, None, &config).is_err());
    }

    #[test]
    fn test_initial_filters_defaults() {
        let filters = initial_filters(None, None, None, None, &Config::default()).unwrap();
        assert_eq!(filters, FilterState::default());
        assert_eq!(filters.selected_category, ALL_CATEGORIES);
    }

    #[test]
    fn test_initial_filters_prefer_cli_over_config() {
        let config = Config {
            start_date: Some("2016-01-01".to_string()),
            end_date: Some("2018-12-31".to_string()),
            ..Config::default()
        };
        let cli_start = parse_date("2015-01-01").unwrap();
        let filters = initial_filters(
            Some(cli_start),
            None,
            Some(" Policy ".to_string()),
            Some("opec".to_string()),
            &config,
        )
        .unwrap();

        assert_eq!(filters.start_date, cli_start);
        assert_eq!(format_date(filters.end_date), "2018-12-31");
        assert_eq!(filters.selected_category, "Policy");
        assert_eq!(filters.search_query, "opec");
    }

    #[test]
    fn test_flags_bypass_corrupt_saved_dates() {
        let config = Config {
            start_date: Some("garbage".to_string()),
            end_date: Some("also garbage".to_string()),
            ..Config::default()
        };
        let start = parse_date("2015-01-01").unwrap();
        let end = parse_date("2016-01-01").unwrap();
        let filters = initial_filters(Some(start), Some(end), None, None, &config).unwrap();
        assert_eq!(filters.start_date, start);
        assert_eq!(filters.end_date, end);

        assert!(initial_filters(None, Some(end), None, None, &config).is_err());
    }

    #[tokio::test]
    async fn test_headless_logger_is_installed_before_loaders_start() {
        let session = prepare_session(
            Environment::Custom {
                api_url: "http://127.0.0.1:9".to_string(),
            },
            FilterState::default(),
            true,
        )
        .unwrap();
        assert_ne!(log::max_level(), log::LevelFilter::Off);
        crate::session::setup::shutdown_loaders(&session.cancel, session.join_handles).await;
    }

    #[test]
    fn test_initial_filters_reject_empty_category() {
        assert!(initial_filters(None, None, Some("  ".to_string()), None, &Config::default()).is_err());
    }

    #[test]
    fn test_cli_parses_start_options() {
        let args = Args::try_parse_from([
            "brent-dashboard",
            "start",
            "--headless",
            "--api-url",
            "http://localhost:8000/",
            "--start-date",
            "2015-06-01T00:00:00Z",
        ])
        .unwrap();
        match args.command {
            Command::Start {
                headless,
                api_url,
                start_date,
                ..
            } => {
                assert!(headless);
                assert_eq!(api_url, Some(custom("http://localhost:8000")));
                assert_eq!(start_date.map(format_date).as_deref(), Some("2015-06-01"));
            }
            Command::Config { .. } => panic!("expected start"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        assert!(Args::try_parse_from(["brent-dashboard", "start", "--end-date", "N/A"]).is_err());
    }
}
