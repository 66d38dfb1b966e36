//! Input Sanitization
//!
//! User input that ends up inside provider URLs is validated here:
//! - currency identifiers (URL path segment)
//! - provider base URLs from config

use crate::error::{AnalyzerError, AnalyzerResult};

/// Maximum length for various input types
pub mod limits {
    /// CoinGecko ids are short slugs; the longest listed ones are under 60
    pub const MAX_CURRENCY_ID_LENGTH: usize = 64;
    /// Maximum URL length
    pub const MAX_URL_LENGTH: usize = 2048;
}

/// Normalize a currency identifier: trim, lowercase, and restrict to the
/// slug alphabet `[a-z0-9-]`.
pub fn sanitize_currency_id(currency: &str) -> AnalyzerResult<String> {
    let sanitized = currency.trim().to_lowercase();

    if sanitized.is_empty() {
        return Err(AnalyzerError::invalid_input("Currency cannot be empty"));
    }

    if sanitized.len() > limits::MAX_CURRENCY_ID_LENGTH {
        return Err(AnalyzerError::invalid_input(format!(
            "Currency id exceeds {} characters",
            limits::MAX_CURRENCY_ID_LENGTH
        )));
    }

    let is_valid_chars = sanitized
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if !is_valid_chars {
        return Err(AnalyzerError::invalid_input(format!(
            "Currency '{}' contains invalid characters",
            currency.trim()
        )));
    }

    Ok(sanitized)
}

/// Validate a provider base URL and strip any trailing slash
pub fn validate_base_url(url: &str) -> AnalyzerResult<String> {
    let trimmed = url.trim();

    if trimmed.len() > limits::MAX_URL_LENGTH {
        return Err(AnalyzerError::invalid_input("URL too long"));
    }

    let parsed = url::Url::parse(trimmed)
        .map_err(|e| AnalyzerError::invalid_input(format!("Invalid URL: {}", e)))?;

    let scheme = parsed.scheme();
    if !["http", "https"].contains(&scheme) {
        return Err(AnalyzerError::invalid_input(format!(
            "URL scheme '{}' is not allowed",
            scheme
        )));
    }

    if !parsed.username().is_empty() || parsed.password().is_some() {
        return Err(AnalyzerError::invalid_input(
            "URLs with embedded credentials are not allowed",
        ));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
