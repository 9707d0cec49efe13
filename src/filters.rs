//! Derived views over the loaded collections
//!
//! Pure projections recomputed on every render: the category set, the
//! filtered and sorted event list, and the price records inside the date range.

use crate::consts::cli_consts::ALL_CATEGORIES;
use crate::dates::parse_date;
use crate::model::{MarketEvent, PriceRecord};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Distinct non-empty categories in ascending order, prefixed with the "All" sentinel.
pub fn categories_of(events: &[MarketEvent]) -> Vec<String> {
    let distinct: BTreeSet<&str> = events
        .iter()
        .map(|e| e.category.as_str())
        .filter(|c| !c.is_empty())
        .collect();

    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(distinct.into_iter().map(str::to_string))
        .collect()
}

/// Case-insensitive substring match against name, description and channel.
///
/// `needle` must already be trimmed and lowercased.
fn matches_query(event: &MarketEvent, needle: &str) -> bool {
    [
        Some(event.event_name.as_str()),
        event.description.as_deref(),
        event.expected_market_channel.as_deref(),
    ]
    .into_iter()
    .any(|field| field.unwrap_or_default().to_lowercase().contains(needle))
}

/// Filters events by category and search text, sorted ascending by date.
///
/// Normalized dates sort chronologically as strings.
pub fn filter_events<'a>(
    events: &'a [MarketEvent],
    category: &str,
    query: &str,
) -> Vec<&'a MarketEvent> {
    let needle = query.trim().to_lowercase();

    let mut filtered: Vec<&MarketEvent> = events
        .iter()
        .filter(|e| category == ALL_CATEGORIES || e.category == category)
        .filter(|e| needle.is_empty() || matches_query(e, &needle))
        .collect();

    filtered.sort_by(|a, b| a.event_date.cmp(&b.event_date));
    filtered
}

/// Price records whose date falls within `[start, end]`, inclusive.
///
/// Records with unparsable dates are excluded; see [`count_unparsable_prices`].
pub fn filter_prices_in_range(
    prices: &[PriceRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&PriceRecord> {
    prices
        .iter()
        .filter(|p| {
            parse_date(&p.date)
                .map(|d| start <= d && d <= end)
                .unwrap_or(false)
        })
        .collect()
}

/// Number of price records whose date cannot be parsed.
pub fn count_unparsable_prices(prices: &[PriceRecord]) -> usize {
    prices.iter().filter(|p| parse_date(&p.date).is_err()).count()
}
