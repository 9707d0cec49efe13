//! Session setup and initialization

use crate::api::ApiClient;
use crate::environment::Environment;
use crate::runtime::start_loaders;
use crate::ui::dashboard::FilterState;
use crate::workers::core::LoaderMessage;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Receives loader progress events and data
    pub loader_receiver: mpsc::Receiver<LoaderMessage>,
    /// Join handles for loader tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Cancels every loader bound to this session
    pub cancel: CancellationToken,
    /// Environment the data is fetched from
    pub environment: Environment,
    /// Initial filter values
    pub filters: FilterState,
}

/// Cancel the loaders and wait for them to stop.
pub async fn shutdown_loaders(cancel: &CancellationToken, join_handles: Vec<JoinHandle<()>>) {
    cancel.cancel();
    for handle in join_handles {
        let _ = handle.await;
    }
}

/// Sets up a dashboard session
///
/// Builds the API client and starts one loader per dataset. The loaders are
/// already running when this returns.
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub fn setup_session(
    environment: Environment,
    filters: FilterState,
) -> Result<SessionData, Box<dyn Error>> {
    let client = ApiClient::new(environment.clone())?;
    let cancel = CancellationToken::new();
    let (loader_receiver, join_handles) = start_loaders(Arc::new(client), cancel.clone());

    Ok(SessionData {
        loader_receiver,
        join_handles,
        cancel,
        environment,
        filters,
    })
}
