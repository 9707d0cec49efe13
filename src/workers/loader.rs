//! Dataset loaders
//!
//! Each dataset is fetched once by its own task. The tasks are independent,
//! may finish in any order, and stop as soon as the session is cancelled.

use super::core::{DataUpdate, UpdateSender};
use crate::api::DataProvider;
use crate::api::error::ApiError;
use crate::events::{Event, Worker};
use crate::logging::LogLevel;
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Spawns one loader per dataset and returns their handles.
pub fn spawn_loaders(
    provider: Arc<dyn DataProvider>,
    sender: UpdateSender,
    cancel: CancellationToken,
) -> Vec<JoinHandle<()>> {
    vec![
        spawn_loader(
            Worker::PriceLoader,
            provider.clone(),
            sender.clone(),
            cancel.clone(),
            |p| async move { p.get_prices().await },
            DataUpdate::Prices,
        ),
        spawn_loader(
            Worker::EventLoader,
            provider.clone(),
            sender.clone(),
            cancel.clone(),
            |p| async move { p.get_events().await },
            DataUpdate::Events,
        ),
        spawn_loader(
            Worker::ChangePointLoader,
            provider,
            sender,
            cancel,
            |p| async move { p.get_change_point().await },
            DataUpdate::ChangePoint,
        ),
    ]
}

fn spawn_loader<T, F, Fut>(
    worker: Worker,
    provider: Arc<dyn DataProvider>,
    sender: UpdateSender,
    cancel: CancellationToken,
    fetch: F,
    into_update: fn(T) -> DataUpdate,
) -> JoinHandle<()>
where
    T: Send + 'static,
    F: FnOnce(Arc<dyn DataProvider>) -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
{
    tokio::spawn(async move {
        sender.send_event(Event::loading(worker)).await;
        log::debug!(
            "{} loader fetching from {}",
            worker,
            provider.environment().api_url()
        );

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("{} loader cancelled before completion", worker);
                return;
            }
            result = fetch(provider) => result,
        };

        // A result that lands after teardown must not reach the state.
        if cancel.is_cancelled() {
            return;
        }

        match result {
            Ok(data) => {
                let update = into_update(data);
                if let Some(warning) = update.ingest_warning() {
                    sender
                        .send_event(Event::error(worker, warning, LogLevel::Warn))
                        .await;
                }
                sender.send_event(Event::success(worker, update.summary())).await;
                sender.send_update(update).await;
            }
            Err(e) => {
                sender
                    .send_event(Event::error(
                        worker,
                        format!("Failed to load {}: {}", worker, e),
                        e.log_level(),
                    ))
                    .await;
                sender.send_update(DataUpdate::Failed(worker)).await;
            }
        }
    })
}
