//! Unified error types for the chart analyzer
//!
//! Every failure in the fetch → truncate → analyze pipeline is reported as an
//! [`AnalyzerError`] carrying an [`ErrorCode`] so the binary can pick the
//! user-facing message without string matching.

use thiserror::Error;

/// Main error type for all analyzer operations
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[{code:?}] {message}{}", .details.as_ref().map(|d| format!(" ({})", d)).unwrap_or_default())]
pub struct AnalyzerError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl AnalyzerError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRange, msg)
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkError, msg)
    }

    pub fn rate_limited(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::RateLimited, msg)
    }

    pub fn no_data(currency: impl Into<String>) -> Self {
        Self::new(ErrorCode::NoDataForCurrency, currency)
    }

    pub fn empty_series(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::EmptySeries, msg)
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseError, msg)
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, msg)
    }

    /// Transport-level failures: the provider could not be reached or refused us.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::NetworkError | ErrorCode::Timeout | ErrorCode::RateLimited
        )
    }
}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Input errors
    InvalidInput,
    InvalidRange,

    // Transport errors
    NetworkError,
    RateLimited,
    Timeout,

    // Provider data errors
    NoDataForCurrency,
    EmptySeries,

    // Parse errors
    ParseError,
    JsonError,

    // Setup
    ConfigError,
}

/// Result type alias for analyzer operations
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

// Conversions from common error types

impl From<serde_json::Error> for AnalyzerError {
    fn from(e: serde_json::Error) -> Self {
        AnalyzerError::new(ErrorCode::JsonError, e.to_string())
    }
}

impl From<toml::de::Error> for AnalyzerError {
    fn from(e: toml::de::Error) -> Self {
        AnalyzerError::new(ErrorCode::ConfigError, e.to_string())
    }
}

impl From<reqwest::Error> for AnalyzerError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AnalyzerError::new(ErrorCode::Timeout, "Request timed out")
        } else if e.is_connect() {
            AnalyzerError::new(ErrorCode::NetworkError, "Connection failed")
                .with_details(e.to_string())
        } else {
            AnalyzerError::new(ErrorCode::NetworkError, e.to_string())
        }
    }
}
