//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::ui::UIConfig;
use crate::ui::dashboard::{DashboardState, render_report};
use futures::future::join_all;
use std::error::Error;
use std::time::Instant;

/// Runs the application in headless mode
///
/// Waits for every loader to settle, then prints the dashboard as plain text.
/// Ctrl+C cancels the loads that are still in flight and prints what arrived.
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    let SessionData {
        mut loader_receiver,
        join_handles,
        cancel,
        environment,
        filters,
    } = session;
    print_session_starting("headless", &environment);

    // Trigger cancellation on Ctrl+C
    let interrupt = cancel.clone();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Interrupted, cancelling pending requests");
            interrupt.cancel();
        }
    });

    for result in join_all(join_handles).await {
        if let Err(e) = result {
            log::error!("Loader task failed: {}", e);
        }
    }
    ctrl_c.abort();

    let mut state = DashboardState::new(environment, Instant::now(), UIConfig::new(false, filters));
    // The loaders have exited, so every message they sent is already queued.
    while let Ok(message) = loader_receiver.try_recv() {
        state.add_message(message);
    }
    state.update();

    print!("{}", render_report(&state));

    print_session_exit_success();
    Ok(())
}
