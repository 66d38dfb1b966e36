//! Human-readable and JSON rendering of an analysis

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::analysis::Analysis;
use crate::charts::{QUOTE_CURRENCY, QUOTE_SYMBOL};
use crate::error::AnalyzerResult;
use crate::range::DateRange;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub currency: String,
    pub quote_currency: &'static str,
    pub range: DateRange,
    #[serde(flatten)]
    pub analysis: Analysis,
}

impl Report {
    pub fn new(currency: impl Into<String>, range: DateRange, analysis: Analysis) -> Self {
        Self {
            currency: currency.into(),
            quote_currency: QUOTE_CURRENCY,
            range,
            analysis,
        }
    }

    /// The three report lines, in order: trend, volume, trade
    pub fn lines(&self) -> Vec<String> {
        let name = title_case(&self.currency);
        let volume = &self.analysis.peak_volume;

        let trade = match &self.analysis.best_trade {
            Some(trade) => format!(
                "Buy {} on {} and sell on {} to maximize profits.",
                name,
                format_date(trade.buy_timestamp),
                format_date(trade.sell_timestamp)
            ),
            None => format!("You shouldn't buy or sell {} on the selected time period.", name),
        };

        vec![
            format!(
                "{}'s price decreased {} days in a row for the selected time range.",
                name, self.analysis.longest_decrease_days
            ),
            format!(
                "{}'s highest trading volume was {:.2}{} on {}.",
                name,
                volume.value,
                QUOTE_SYMBOL,
                format_date(volume.timestamp)
            ),
            trade,
        ]
    }

    pub fn to_json(&self) -> AnalyzerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// UTC calendar date of a millisecond timestamp
pub fn format_date(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.date_naive().to_string())
        .unwrap_or_else(|| format!("@{}ms", timestamp_ms))
}

/// Capitalize each alphabetic word: `bitcoin-cash` -> `Bitcoin-Cash`
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}
