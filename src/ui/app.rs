//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::{poll_interval, splash_duration};
use crate::environment::Environment;
use crate::ui::dashboard::{DashboardState, FilterState, KeyOutcome, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::core::LoaderMessage;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// Initial filter values, from the command line or the saved config.
    pub filters: FilterState,
}

impl UIConfig {
    pub fn new(with_background_color: bool, filters: FilterState) -> Self {
        Self {
            with_background_color,
            filters,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with the KPIs and the event explorer.
    Dashboard,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state. Exists from the start so loads that finish during
    /// the splash are not lost.
    state: DashboardState,

    /// Receives progress events and data from the loaders.
    loader_receiver: mpsc::Receiver<LoaderMessage>,

    /// Cancels the loaders when the dashboard is torn down.
    cancel: CancellationToken,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        loader_receiver: mpsc::Receiver<LoaderMessage>,
        cancel: CancellationToken,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            state: DashboardState::new(environment, Instant::now(), ui_config),
            loader_receiver,
            cancel,
        }
    }

    /// Moves queued loader messages into the dashboard and applies them.
    fn pump_messages(&mut self) {
        while let Ok(message) = self.loader_receiver.try_recv() {
            self.state.add_message(message);
        }
        self.state.update();
    }

    fn quit(&self) {
        self.cancel.cancel();
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        if app.cancel.is_cancelled() {
            return Ok(());
        }

        app.pump_messages();
        terminal.draw(|f| render(f, &app))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration() {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match app.current_screen {
                    Screen::Splash => {
                        let ctrl_c = key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL);
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) || ctrl_c {
                            app.quit();
                            return Ok(());
                        }
                        // Any other key skips the splash screen
                        app.current_screen = Screen::Dashboard;
                    }
                    Screen::Dashboard => {
                        if app.state.handle_key(key) == KeyOutcome::Quit {
                            app.quit();
                            return Ok(());
                        }
                    }
                }
            }
        }

        // Let the loader tasks make progress between frames.
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, &app.state),
    }
}
