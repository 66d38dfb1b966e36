//! Blocking HTTP client shared by provider clients

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::utils::logging::redact_url;

/// Raw response handed back to provider clients, which decide how to read
/// the status code
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Thin wrapper over a configured `reqwest` blocking client
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration, user_agent: &str) -> AnalyzerResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .tcp_nodelay(true)
            .user_agent(user_agent)
            .build()
            .map_err(|e| AnalyzerError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// GET `url` and read the whole body. Only transport failures are errors
    /// here; non-2xx statuses are returned to the caller.
    pub fn get(&self, url: &str) -> AnalyzerResult<HttpResponse> {
        debug!(url = %redact_url(url), "GET");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        debug!(status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}
