//! Request → normalize → fetch → truncate → analyze → report

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::analysis;
use crate::charts::{FetchOutcome, KnownTokenIds, SeriesFetcher};
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::range;
use crate::report::Report;
use crate::utils::sanitize::sanitize_currency_id;

/// Everything one run needs, fixed up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub currency: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl AnalysisRequest {
    /// Validates the currency id. The date order is checked by [`run`] so a
    /// request can be built before it is known to be usable.
    pub fn new(currency: &str, from: NaiveDate, to: NaiveDate) -> AnalyzerResult<Self> {
        Ok(Self {
            currency: sanitize_currency_id(currency)?,
            from,
            to,
        })
    }
}

/// Run one analysis. Any error ends the run; there are no partial reports.
pub fn run<F>(request: &AnalysisRequest, fetcher: &F) -> AnalyzerResult<Report>
where
    F: SeriesFetcher + ?Sized,
{
    let window = range::normalize(request.from, request.to)?;
    let (from_secs, to_secs) = window.fetch_bounds();

    info!(
        currency = %request.currency,
        from = %window.fetch_from,
        to = %window.fetch_to,
        widened = window.is_widened(),
        "requesting series"
    );

    let series = match fetcher.fetch_range(&request.currency, from_secs, to_secs)? {
        FetchOutcome::Series(series) => series,
        FetchOutcome::MissingField(field) => {
            warn!(currency = %request.currency, field, "provider returned no series");
            return Err(no_data_error(&request.currency));
        }
    };

    if window.is_widened() && series.prices.len() > window.expected_daily_points() {
        warn!(
            points = series.prices.len(),
            expected = window.expected_daily_points(),
            "provider returned finer than daily sampling; truncation may not match the requested days"
        );
    }

    let prices = window.truncate(&series.prices);
    let volumes = window.truncate(&series.volumes);
    info!(prices = prices.len(), volumes = volumes.len(), "analyzing window");

    let analysis = analysis::analyze(prices, volumes)?;
    Ok(Report::new(request.currency.clone(), window.requested, analysis))
}

fn no_data_error(currency: &str) -> AnalyzerError {
    let err = AnalyzerError::no_data("There are no prices available for that currency.");
    match KnownTokenIds::from_symbol(currency) {
        Some(id) => err.with_details(format!("'{}' looks like a ticker; try '{}'", currency, id)),
        None => err.with_details(currency.to_string()),
    }
}
