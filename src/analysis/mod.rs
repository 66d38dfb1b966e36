//! Statistics over a price/volume window
//!
//! The three analyzers are independent pure functions over read-only slices.

pub mod profit;
pub mod trend;
pub mod volume;

pub use profit::{best_profit, best_profit_exhaustive, ProfitResult};
pub use trend::longest_decreasing_run;
pub use volume::{peak_volume, VolumeResult};

use serde::Serialize;

use crate::charts::TimePoint;
use crate::error::AnalyzerResult;

/// Results of all three analyzers for one window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub longest_decrease_days: usize,
    pub peak_volume: VolumeResult,
    pub best_trade: Option<ProfitResult>,
}

/// Run every analyzer. Fails only when `volumes` is empty.
pub fn analyze(prices: &[TimePoint], volumes: &[TimePoint]) -> AnalyzerResult<Analysis> {
    Ok(Analysis {
        longest_decrease_days: longest_decreasing_run(prices),
        peak_volume: peak_volume(volumes)?,
        best_trade: best_profit(prices),
    })
}
