//! Structured logging setup and log-safe redaction
//!
//! Logs go to stderr through `tracing-subscriber` so stdout carries only the
//! report. Provider URLs may embed API keys as query parameters; use
//! [`redact_url`] before logging one.

use tracing_subscriber::EnvFilter;
use url::Url;

/// Query parameters that carry credentials
const SENSITIVE_PARAMS: &[&str] = &["x_cg_pro_api_key", "x_cg_demo_api_key", "api_key", "key"];

/// Map `-v` occurrences to a default filter directive
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbosity` when set.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Fully redact a sensitive value
pub fn redact_value(value: &str) -> String {
    if value.is_empty() {
        return "[EMPTY]".to_string();
    }

    let len = value.chars().count();
    if len <= 4 {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED:{}chars]", len)
    }
}

/// Replace credential query parameters of `raw` with a redaction marker
pub fn redact_url(raw: &str) -> String {
    let mut url = match Url::parse(raw) {
        Ok(url) => url,
        Err(_) => return raw.to_string(),
    };

    if !url
        .query_pairs()
        .any(|(k, _)| SENSITIVE_PARAMS.contains(&k.as_ref()))
    {
        return raw.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if SENSITIVE_PARAMS.contains(&k.as_ref()) {
                redact_value(&v)
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();

    url.query_pairs_mut().clear().extend_pairs(pairs);
    url.to_string()
}
