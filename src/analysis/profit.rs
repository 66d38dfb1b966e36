//! Best single buy/sell pair
//!
//! [`best_profit`] is the production single-pass scan. [`best_profit_exhaustive`]
//! checks every pair and is kept as the reference the fast scan is tested
//! against.
//!
//! Both pick the same pair when several share the best difference: the
//! earliest sell point, and for that sell the earliest buy point. Non-finite
//! prices are skipped by both.

use serde::Serialize;

use crate::charts::TimePoint;

/// Buy at `buy_timestamp`, sell at `sell_timestamp`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfitResult {
    pub buy_timestamp: i64,
    pub sell_timestamp: i64,
    pub buy_price: f64,
    pub sell_price: f64,
    pub difference: f64,
}

impl ProfitResult {
    fn between(buy: &TimePoint, sell: &TimePoint) -> Self {
        Self {
            buy_timestamp: buy.timestamp,
            sell_timestamp: sell.timestamp,
            buy_price: buy.value,
            sell_price: sell.value,
            difference: sell.value - buy.value,
        }
    }
}

/// Most profitable buy-then-sell pair, or `None` if prices never rise.
///
/// O(n): carries the lowest price seen so far as the buy candidate.
pub fn best_profit(prices: &[TimePoint]) -> Option<ProfitResult> {
    let mut lowest: Option<usize> = None;
    let mut best: Option<(usize, usize, f64)> = None;

    for (sell, point) in prices.iter().enumerate() {
        if !point.value.is_finite() {
            continue;
        }

        let buy = match lowest {
            Some(low) if prices[low].value <= point.value => low,
            _ => {
                lowest = Some(sell);
                sell
            }
        };

        let difference = point.value - prices[buy].value;
        if difference > 0.0 && best.map_or(true, |(_, _, d)| difference > d) {
            best = Some((buy, sell, difference));
        }
    }

    best.map(|(buy, sell, _)| ProfitResult::between(&prices[buy], &prices[sell]))
}

/// Same answer as [`best_profit`] by trying every pair. O(n²).
pub fn best_profit_exhaustive(prices: &[TimePoint]) -> Option<ProfitResult> {
    let mut best: Option<(usize, usize, f64)> = None;

    for sell in 0..prices.len() {
        if !prices[sell].value.is_finite() {
            continue;
        }
        for buy in 0..=sell {
            if !prices[buy].value.is_finite() {
                continue;
            }
            let difference = prices[sell].value - prices[buy].value;
            if difference > 0.0 && best.map_or(true, |(_, _, d)| difference > d) {
                best = Some((buy, sell, difference));
            }
        }
    }

    best.map(|(buy, sell, _)| ProfitResult::between(&prices[buy], &prices[sell]))
}
