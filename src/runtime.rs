//! Runtime for coordinating the dataset loaders

use crate::api::DataProvider;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::workers::core::{LoaderMessage, UpdateSender};
use crate::workers::loader::spawn_loaders;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Start the three loaders bound to `cancel`
pub fn start_loaders(
    provider: Arc<dyn DataProvider>,
    cancel: CancellationToken,
) -> (mpsc::Receiver<LoaderMessage>, Vec<JoinHandle<()>>) {
    let (sender, receiver) = mpsc::channel::<LoaderMessage>(EVENT_QUEUE_SIZE);
    let join_handles = spawn_loaders(provider, UpdateSender::new(sender), cancel);
    (receiver, join_handles)
}
