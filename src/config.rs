//! Configuration loaded from an optional TOML file
//!
//! Every field has a default, so an empty file (or no file) is valid.
//! Command-line flags are applied on top by the binary.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::utils::sanitize::{sanitize_currency_id, validate_base_url};

pub const DEFAULT_CURRENCY: &str = "bitcoin";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    /// Overrides the public/pro endpoint choice
    pub base_url: Option<String>,
    /// CoinGecko pro key; switches to the pro endpoint when set
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("chart-analyzer/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub default_currency: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> AnalyzerResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AnalyzerError::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> AnalyzerResult<Self> {
        let cfg: Self = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AnalyzerResult<()> {
        if self.provider.timeout_secs == 0 {
            return Err(AnalyzerError::config("provider.timeout_secs must be positive"));
        }
        if let Some(url) = &self.provider.base_url {
            validate_base_url(url).map_err(|e| AnalyzerError::config(e.message))?;
        }
        if matches!(&self.provider.api_key, Some(key) if key.trim().is_empty()) {
            return Err(AnalyzerError::config("provider.api_key is empty"));
        }
        sanitize_currency_id(&self.analysis.default_currency)
            .map_err(|e| AnalyzerError::config(e.message))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.analysis.default_currency, "bitcoin");
        assert_eq!(cfg.provider.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(cfg.provider.api_key.is_none());
        assert!(cfg.provider.user_agent.starts_with("chart-analyzer/"));
    }

    #[test]
    fn test_full_config() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [provider]
            base_url = "https://example.test/api/v3"
            api_key = "CG-test"
            timeout_secs = 5
            user_agent = "tester"

            [analysis]
            default_currency = "ethereum"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.provider.base_url.as_deref(), Some("https://example.test/api/v3"));
        assert_eq!(cfg.provider.api_key.as_deref(), Some("CG-test"));
        assert_eq!(cfg.provider.timeout_secs, 5);
        assert_eq!(cfg.analysis.default_currency, "ethereum");
    }

    #[test]
    fn test_invalid_values_rejected() {
        for toml in [
            "[provider]\ntimeout_secs = 0",
            "[provider]\nbase_url = \"ftp://nope\"",
            "[provider]\napi_key = \"  \"",
            "[analysis]\ndefault_currency = \"bit coin\"",
            "[provider]\nunknown = 1",
        ] {
            let err = AppConfig::from_toml_str(toml).unwrap_err();
            assert_eq!(err.code, ErrorCode::ConfigError, "config {:?}", toml);
        }
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }
}
