//! Historical market chart data
//!
//! Provides:
//! - Price and volume series types
//! - The [`SeriesFetcher`] seam between the pipeline and a data provider
//! - CoinGecko `market_chart/range` client

pub mod types;
pub mod coingecko;

pub use types::*;
pub use coingecko::*;

use crate::error::AnalyzerResult;

/// Source of parallel price/volume series for a currency over a time window
pub trait SeriesFetcher {
    /// Fetch both series between two unix timestamps in seconds.
    ///
    /// A provider that has no data for `currency` answers
    /// `Ok(FetchOutcome::MissingField(..))`; `Err` is reserved for transport
    /// and decoding failures.
    fn fetch_range(&self, currency: &str, from_secs: i64, to_secs: i64) -> AnalyzerResult<FetchOutcome>;
}
