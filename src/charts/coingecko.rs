//! CoinGecko API client for historical market charts
//!
//! API Endpoint used:
//! - /coins/{id}/market_chart/range - Historical price/volume between two
//!   unix timestamps (seconds)

use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::types::*;
use super::SeriesFetcher;
use crate::config::ProviderConfig;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::utils::logging::redact_url;
use crate::utils::sanitize::validate_base_url;
use crate::utils::{parse_json, HttpClient, HttpResponse};

/// CoinGecko API base URL
pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com/api/v3";
pub const COINGECKO_PRO_API_BASE: &str = "https://pro-api.coingecko.com/api/v3";

/// `market_chart/range` body. Only the two series we analyze are decoded;
/// `market_caps` is ignored.
#[derive(Debug, Deserialize)]
struct MarketChartRangeResponse {
    prices: Option<Vec<(f64, f64)>>,
    total_volumes: Option<Vec<(f64, f64)>>,
}

fn to_series(raw: Vec<(f64, f64)>) -> Series {
    raw.into_iter()
        .map(|(timestamp, value)| TimePoint::new(timestamp as i64, value))
        .collect()
}

/// CoinGecko API client
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    /// API base URL
    pub base_url: String,
    /// Optional API key for pro tier
    pub api_key: Option<String>,
    http: HttpClient,
}

impl CoinGeckoClient {
    /// Create client with free tier
    pub fn new(http: HttpClient) -> Self {
        Self {
            base_url: COINGECKO_API_BASE.to_string(),
            api_key: None,
            http,
        }
    }

    /// Create client with pro API key
    pub fn with_api_key(http: HttpClient, api_key: String) -> Self {
        Self {
            base_url: COINGECKO_PRO_API_BASE.to_string(),
            api_key: Some(api_key),
            http,
        }
    }

    /// Build a client from provider settings. An explicit base URL wins over
    /// the free/pro choice implied by the key.
    pub fn from_config(cfg: &ProviderConfig) -> AnalyzerResult<Self> {
        let http = HttpClient::new(Duration::from_secs(cfg.timeout_secs), &cfg.user_agent)?;

        let mut client = match &cfg.api_key {
            Some(key) => Self::with_api_key(http, key.clone()),
            None => Self::new(http),
        };

        if let Some(url) = &cfg.base_url {
            client.base_url = validate_base_url(url)?;
        }

        Ok(client)
    }

    /// Build market chart range URL
    /// GET /coins/{id}/market_chart/range?vs_currency={currency}&from={secs}&to={secs}
    pub fn market_chart_range_url(&self, token_id: &str, from_secs: i64, to_secs: i64) -> String {
        let mut url = format!(
            "{}/coins/{}/market_chart/range?vs_currency={}&from={}&to={}",
            self.base_url, token_id, QUOTE_CURRENCY, from_secs, to_secs
        );

        if let Some(ref key) = self.api_key {
            url.push_str(&format!("&x_cg_pro_api_key={}", key));
        }

        url
    }

    /// Parse a market chart range body into typed series.
    ///
    /// CoinGecko answers unknown coins with an error object instead of the
    /// series, which decodes to [`FetchOutcome::MissingField`].
    pub fn parse_market_chart_range(&self, json: &str) -> AnalyzerResult<FetchOutcome> {
        let parsed: MarketChartRangeResponse = parse_json(json)?;

        let prices = match parsed.prices {
            Some(prices) => prices,
            None => return Ok(FetchOutcome::MissingField("prices")),
        };
        let volumes = match parsed.total_volumes {
            Some(volumes) => volumes,
            None => return Ok(FetchOutcome::MissingField("total_volumes")),
        };

        Ok(FetchOutcome::Series(MarketSeries::new(
            to_series(prices),
            to_series(volumes),
        )))
    }
}

impl SeriesFetcher for CoinGeckoClient {
    fn fetch_range(&self, currency: &str, from_secs: i64, to_secs: i64) -> AnalyzerResult<FetchOutcome> {
        let url = self.market_chart_range_url(currency, from_secs, to_secs);
        info!(currency, from_secs, to_secs, "fetching market chart");

        let response = self.http.get(&url)?;
        check_status(&response, &url)?;

        let outcome = self.parse_market_chart_range(&response.body)?;
        if let FetchOutcome::Series(ref series) = outcome {
            debug!(
                prices = series.prices.len(),
                volumes = series.volumes.len(),
                "decoded market chart"
            );
        }
        Ok(outcome)
    }
}

/// Decide whether a response body is worth decoding.
///
/// 404 carries `{"error": "coin not found"}`, which the decoder reports as a
/// missing series. 429 is the rate limiter; any other non-2xx is a failure.
fn check_status(response: &HttpResponse, url: &str) -> AnalyzerResult<()> {
    if response.is_success() || response.status == 404 {
        return Ok(());
    }

    if response.status == 429 {
        return Err(AnalyzerError::rate_limited("CoinGecko rate limit exceeded")
            .with_details(redact_url(url)));
    }

    warn!(status = response.status, url = %redact_url(url), "provider request failed");
    Err(AnalyzerError::network(format!(
        "CoinGecko request failed with status {}",
        response.status
    )))
}

/// Known CoinGecko ids for common ticker symbols
pub struct KnownTokenIds;

impl KnownTokenIds {
    pub const BITCOIN: &'static str = "bitcoin";
    pub const ETHEREUM: &'static str = "ethereum";
    pub const TETHER: &'static str = "tether";
    pub const BNB: &'static str = "binancecoin";
    pub const SOLANA: &'static str = "solana";
    pub const XRP: &'static str = "ripple";
    pub const CARDANO: &'static str = "cardano";
    pub const AVALANCHE: &'static str = "avalanche-2";
    pub const DOGECOIN: &'static str = "dogecoin";
    pub const POLKADOT: &'static str = "polkadot";
    pub const LITECOIN: &'static str = "litecoin";

    /// Get token ID from symbol
    pub fn from_symbol(symbol: &str) -> Option<&'static str> {
        match symbol.to_uppercase().as_str() {
            "BTC" => Some(Self::BITCOIN),
            "ETH" => Some(Self::ETHEREUM),
            "USDT" => Some(Self::TETHER),
            "BNB" => Some(Self::BNB),
            "SOL" => Some(Self::SOLANA),
            "XRP" => Some(Self::XRP),
            "ADA" => Some(Self::CARDANO),
            "AVAX" => Some(Self::AVALANCHE),
            "DOGE" => Some(Self::DOGECOIN),
            "DOT" => Some(Self::POLKADOT),
            "LTC" => Some(Self::LITECOIN),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn client() -> CoinGeckoClient {
        let http = HttpClient::new(Duration::from_secs(5), "test").unwrap();
        CoinGeckoClient::new(http)
    }

    #[test]
    fn test_market_chart_range_url() {
        let url = client().market_chart_range_url("bitcoin", 1_577_836_800, 1_609_459_200);
        assert_eq!(
            url,
            "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart/range?vs_currency=eur&from=1577836800&to=1609459200"
        );
    }

    #[test]
    fn test_client_with_api_key() {
        let http = HttpClient::new(Duration::from_secs(5), "test").unwrap();
        let client = CoinGeckoClient::with_api_key(http, "test-key".into());
        let url = client.market_chart_range_url("bitcoin", 0, 1);
        assert!(url.contains("pro-api.coingecko.com"));
        assert!(url.contains("x_cg_pro_api_key=test-key"));
    }

    #[test]
    fn test_from_config_base_url_override() {
        let cfg = ProviderConfig {
            base_url: Some("http://localhost:8080/api/v3/".into()),
            api_key: Some("k".into()),
            ..ProviderConfig::default()
        };
        let client = CoinGeckoClient::from_config(&cfg).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080/api/v3");
        assert_eq!(client.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_parse_market_chart_range() {
        let json = r#"{
            "prices": [[1704153600000, 43500.75], [1704067200000, 42000.5]],
            "market_caps": [[1704067200000, 820000000000], [1704153600000, 850000000000]],
            "total_volumes": [[1704067200000, 25000000000], [1704153600000, 28000000000]]
        }"#;

        let outcome = client().parse_market_chart_range(json).unwrap();
        let series = match outcome {
            FetchOutcome::Series(series) => series,
            other => panic!("unexpected outcome {:?}", other),
        };

        assert_eq!(series.prices.len(), 2);
        assert_eq!(series.prices[0], TimePoint::new(1_704_067_200_000, 42000.5));
        assert_eq!(series.volumes[1].value, 28_000_000_000.0);
    }

    #[test]
    fn test_parse_unknown_coin() {
        let outcome = client()
            .parse_market_chart_range(r#"{"error": "coin not found"}"#)
            .unwrap();
        assert_eq!(outcome, FetchOutcome::MissingField("prices"));
    }

    #[test]
    fn test_parse_missing_volumes() {
        let outcome = client()
            .parse_market_chart_range(r#"{"prices": [[1, 2.0]]}"#)
            .unwrap();
        assert_eq!(outcome, FetchOutcome::MissingField("total_volumes"));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(client().parse_market_chart_range("<html>").is_err());
    }

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn test_status_success_and_not_found_are_decoded() {
        let url = "https://api.coingecko.com/api/v3/coins/x/market_chart/range";
        assert!(check_status(&response(200), url).is_ok());
        assert!(check_status(&response(204), url).is_ok());
        assert!(check_status(&response(404), url).is_ok());
    }

    #[test]
    fn test_status_rate_limited() {
        let url = "https://pro-api.coingecko.com/api/v3/coins/bitcoin/market_chart/range?x_cg_pro_api_key=CG-secret-key";
        let err = check_status(&response(429), url).unwrap_err();

        assert_eq!(err.code, ErrorCode::RateLimited);
        let details = err.details.unwrap();
        assert!(details.contains("/coins/bitcoin/"));
        assert!(!details.contains("CG-secret-key"));
    }

    #[test]
    fn test_status_server_error_is_network_failure() {
        for status in [301, 401, 500, 503] {
            let err = check_status(&response(status), "https://example.test").unwrap_err();
            assert_eq!(err.code, ErrorCode::NetworkError, "status {}", status);
            assert!(err.message.contains(&status.to_string()));
        }
    }

    #[test]
    fn test_not_found_body_becomes_missing_field() {
        let body = r#"{"error": "coin not found"}"#;
        assert!(check_status(&HttpResponse { status: 404, body: body.into() }, "https://example.test").is_ok());
        assert_eq!(
            client().parse_market_chart_range(body).unwrap(),
            FetchOutcome::MissingField("prices")
        );
    }

    #[test]
    fn test_known_token_ids() {
        assert_eq!(KnownTokenIds::from_symbol("BTC"), Some("bitcoin"));
        assert_eq!(KnownTokenIds::from_symbol("eth"), Some("ethereum"));
        assert_eq!(KnownTokenIds::from_symbol("UNKNOWN"), None);
    }
}
