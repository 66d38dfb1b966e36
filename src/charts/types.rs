//! Market chart types and data structures

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Quote currency every series is priced in
pub const QUOTE_CURRENCY: &str = "eur";

/// Display symbol for [`QUOTE_CURRENCY`]
pub const QUOTE_SYMBOL: &str = "€";

/// Single point of a price or volume series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimePoint {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Price or volume in the quote currency
    pub value: f64,
}

impl TimePoint {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// UTC calendar date of the point
    pub fn date(&self) -> Option<NaiveDate> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp).map(|dt| dt.date_naive())
    }
}

/// Chronologically ascending sequence of points
pub type Series = Vec<TimePoint>;

/// Put a decoded series into chronological order.
///
/// Sorting is stable, so for repeated timestamps the point the provider sent
/// first is the one kept.
pub fn into_chronological(mut points: Series) -> Series {
    points.sort_by_key(|p| p.timestamp);
    points.dedup_by_key(|p| p.timestamp);
    points
}

/// Parallel price and volume series for one currency
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSeries {
    pub prices: Series,
    pub volumes: Series,
}

impl MarketSeries {
    pub fn new(prices: Series, volumes: Series) -> Self {
        Self {
            prices: into_chronological(prices),
            volumes: into_chronological(volumes),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty() && self.volumes.is_empty()
    }
}

/// Decoded provider response
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Both series were present
    Series(MarketSeries),
    /// The named field was absent, which is how the provider answers for
    /// currencies it has no market data for
    MissingField(&'static str),
}
