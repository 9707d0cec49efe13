use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::model::{ChangePoint, MarketEvent, PriceRecord};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Read access to the dashboard datasets.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DataProvider: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Historical prices, in server order.
    async fn get_prices(&self) -> Result<Vec<PriceRecord>, ApiError>;

    /// Annotated market events with normalized dates.
    async fn get_events(&self) -> Result<Vec<MarketEvent>, ApiError>;

    /// The detected change point; `None` when the server has none.
    async fn get_change_point(&self) -> Result<Option<ChangePoint>, ApiError>;
}
