//! Core worker utilities

use crate::events::{Event, Worker};
use crate::filters::count_unparsable_prices;
use crate::model::{ChangePoint, MarketEvent, PriceRecord};
use tokio::sync::mpsc;

/// A finished load, applied to the dashboard state by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum DataUpdate {
    Prices(Vec<PriceRecord>),
    Events(Vec<MarketEvent>),
    ChangePoint(Option<ChangePoint>),
    /// The load for this dataset failed; its collection keeps its previous value.
    Failed(Worker),
}

impl DataUpdate {
    /// One-line description for the activity log.
    pub fn summary(&self) -> String {
        match self {
            DataUpdate::Prices(prices) => format!("Loaded {} price records", prices.len()),
            DataUpdate::Events(events) => format!("Loaded {} key events", events.len()),
            DataUpdate::ChangePoint(Some(cp)) => format!(
                "Loaded change point {}",
                cp.tau_date.as_deref().unwrap_or("(no date)")
            ),
            DataUpdate::ChangePoint(None) => "No change point available".to_string(),
            DataUpdate::Failed(worker) => format!("Failed to load {}", worker),
        }
    }

    /// Data-quality warning raised at ingestion, if any.
    pub fn ingest_warning(&self) -> Option<String> {
        match self {
            DataUpdate::Prices(prices) => {
                let unparsable = count_unparsable_prices(prices);
                (unparsable > 0).then(|| {
                    format!(
                        "{} price records have unparsable dates and are excluded from range counts",
                        unparsable
                    )
                })
            }
            _ => None,
        }
    }
}

/// Messages flowing from the loaders to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum LoaderMessage {
    Event(Event),
    Data(DataUpdate),
}

/// Common sending utilities for loaders.
///
/// Sends are best effort: once the UI has gone away the results are dropped.
#[derive(Clone)]
pub struct UpdateSender {
    sender: mpsc::Sender<LoaderMessage>,
}

impl UpdateSender {
    pub fn new(sender: mpsc::Sender<LoaderMessage>) -> Self {
        Self { sender }
    }

    /// Send an activity-log event, mirroring it to the `log` facade
    pub async fn send_event(&self, event: Event) {
        event.log();
        let _ = self.sender.send(LoaderMessage::Event(event)).await;
    }

    /// Send a finished load
    pub async fn send_update(&self, update: DataUpdate) {
        let _ = self.sender.send(LoaderMessage::Data(update)).await;
    }
}
