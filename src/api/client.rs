//! Data API Client
//!
//! A reqwest client for the three read-only dashboard endpoints.

use crate::api::DataProvider;
use crate::api::error::ApiError;
use crate::consts::cli_consts::api::{
    CHANGE_POINT_ENDPOINT, EVENTS_ENDPOINT, PRICES_ENDPOINT, connect_timeout, request_timeout,
};
use crate::environment::Environment;
use crate::model::{ChangePoint, MarketEvent, PriceRecord};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("brent-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(connect_timeout())
            .timeout(request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

#[async_trait::async_trait]
impl DataProvider for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_prices(&self) -> Result<Vec<PriceRecord>, ApiError> {
        let prices: Option<Vec<PriceRecord>> = self.get_json(PRICES_ENDPOINT).await?;
        Ok(prices.unwrap_or_default())
    }

    async fn get_events(&self) -> Result<Vec<MarketEvent>, ApiError> {
        let events: Option<Vec<MarketEvent>> = self.get_json(EVENTS_ENDPOINT).await?;
        Ok(events.unwrap_or_default())
    }

    async fn get_change_point(&self) -> Result<Option<ChangePoint>, ApiError> {
        self.get_json(CHANGE_POINT_ENDPOINT).await
    }
}
