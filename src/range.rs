//! Requested date range normalization
//!
//! CoinGecko only returns daily granularity for windows of at least
//! [`MIN_DAILY_SPAN_DAYS`]; shorter windows come back hourly or finer. Short
//! requests are therefore widened before the fetch and the padding is cut off
//! again afterwards with [`EffectiveRange::truncate`].
//!
//! The cut assumes one point per calendar day, starting at `from`. If the
//! provider ever samples irregularly inside a widened window the count no
//! longer lines up with "the requested days"; see
//! [`EffectiveRange::expected_daily_points`].

use chrono::{Days, NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::debug;

use crate::charts::TimePoint;
use crate::error::{AnalyzerError, AnalyzerResult};

/// Shortest window the provider serves at daily granularity
pub const MIN_DAILY_SPAN_DAYS: i64 = 90;

/// Inclusive calendar date range, `from <= to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> AnalyzerResult<Self> {
        if to < from {
            return Err(AnalyzerError::invalid_range(
                "Parameter 'date_to' is before 'date_from'. Check your inputs and try again.",
            )
            .with_details(format!("{} < {}", to, from)));
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Whole days between `from` and `to`
    pub fn span_days(&self) -> i64 {
        (self.to - self.from).num_days()
    }
}

/// Window actually requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveRange {
    pub requested: DateRange,
    pub fetch_from: NaiveDate,
    pub fetch_to: NaiveDate,
    truncate_to: Option<usize>,
}

impl EffectiveRange {
    pub fn is_widened(&self) -> bool {
        self.truncate_to.is_some()
    }

    /// Leading points to keep after the fetch; 0 means "keep everything"
    pub fn truncate_count(&self) -> usize {
        self.truncate_to.unwrap_or(0)
    }

    pub fn fetch_span_days(&self) -> i64 {
        (self.fetch_to - self.fetch_from).num_days()
    }

    /// Fetch window as unix seconds at UTC midnight
    pub fn fetch_bounds(&self) -> (i64, i64) {
        (midnight_utc_secs(self.fetch_from), midnight_utc_secs(self.fetch_to))
    }

    /// Points a daily-sampled answer for the fetch window should contain
    pub fn expected_daily_points(&self) -> usize {
        self.fetch_span_days() as usize + 1
    }

    /// Drop the padding added by widening. Series shorter than the keep count
    /// are returned whole.
    pub fn truncate<'a>(&self, series: &'a [TimePoint]) -> &'a [TimePoint] {
        match self.truncate_to {
            Some(keep) => &series[..keep.min(series.len())],
            None => series,
        }
    }
}

fn midnight_utc_secs(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Decide the fetch window for a requested `[from, to]`.
pub fn normalize(from: NaiveDate, to: NaiveDate) -> AnalyzerResult<EffectiveRange> {
    let requested = DateRange::new(from, to)?;

    if requested.span_days() >= MIN_DAILY_SPAN_DAYS {
        debug!(%from, %to, "range already daily-granular");
        return Ok(EffectiveRange {
            requested,
            fetch_from: from,
            fetch_to: to,
            truncate_to: None,
        });
    }

    let fetch_to = to
        .checked_add_days(Days::new(MIN_DAILY_SPAN_DAYS as u64))
        .ok_or_else(|| AnalyzerError::invalid_range(format!("Date {} is out of range", to)))?;

    // One daily point per calendar day of the requested window, both ends
    // included.
    let keep = (fetch_to - from).num_days() - MIN_DAILY_SPAN_DAYS + 1;

    debug!(%from, %to, %fetch_to, keep, "widened range for daily granularity");
    Ok(EffectiveRange {
        requested,
        fetch_from: from,
        fetch_to,
        truncate_to: Some(keep as usize),
    })
}
