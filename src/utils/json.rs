//! JSON Parsing Utilities
//!
//! Safe JSON parsing with proper error handling.

use crate::error::{AnalyzerError, AnalyzerResult};
use serde::de::DeserializeOwned;

/// Longest body excerpt quoted back in a parse error
const EXCERPT_LEN: usize = 120;

/// Safely parse JSON string into a type
pub fn parse_json<T: DeserializeOwned>(json_str: &str) -> AnalyzerResult<T> {
    serde_json::from_str(json_str).map_err(|e| {
        AnalyzerError::parse_error(format!("JSON parse error: {}", e))
            .with_details(excerpt(json_str))
    })
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
