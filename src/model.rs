//! Dashboard data model
//!
//! Wire types for the three API resources. Key names follow the JSON emitted
//! by the data server, field names follow Rust conventions.

use crate::dates::normalize_date_value;
use serde::{Deserialize, Deserializer, Serialize};

/// A single historical price observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Date as received, epoch milliseconds rewritten to `YYYY-MM-DD`.
    /// Parsed on demand by the range filter.
    #[serde(rename = "Date", default, deserialize_with = "date_as_text")]
    pub date: String,
    /// `None` when the server sent null or something that is not a number.
    #[serde(rename = "Price", default, deserialize_with = "lenient_price")]
    pub price: Option<f64>,
}

#[cfg(test)]
impl PriceRecord {
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price: Some(price),
        }
    }
}

/// An annotated market event.
///
/// `event_date` is normalized to `YYYY-MM-DD` during deserialization. Input that
/// cannot be parsed is kept verbatim, a missing date becomes the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketEvent {
    #[serde(default, deserialize_with = "normalized_event_date")]
    pub event_date: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub event_name: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub expected_market_channel: Option<String>,
}

#[cfg(test)]
impl MarketEvent {
    pub fn new(
        event_date: impl Into<String>,
        event_name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            event_date: event_date.into(),
            event_name: event_name.into(),
            description: None,
            category: category.into(),
            expected_market_channel: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.expected_market_channel = Some(channel.into());
        self
    }
}

/// The detected change point in the price series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePoint {
    #[serde(default, deserialize_with = "optional_text")]
    pub tau_date: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub note: Option<String>,
}

fn normalized_event_date<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(normalize_date_value(&value))
}

fn date_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        other => normalize_date_value(&other),
    })
}

/// Numbers and numeric strings; anything else becomes `None`.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|p| p.is_finite()))
}

/// Accepts strings and numbers; `null` and empty strings become `None`.
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) if s.is_empty() => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}
