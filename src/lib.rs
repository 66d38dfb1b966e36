//! Chart Analyzer Core Library
//!
//! Fetches a coin's historical EUR prices and trading volumes from CoinGecko
//! and reports three statistics over a calendar-date range.
//!
//! # Architecture
//!
//! This crate provides:
//! - **range**: Date range validation and the 90-day widening rule
//! - **charts**: Market chart types and the CoinGecko client
//! - **analysis**: Decreasing run, peak volume and best trade
//! - **report**: Text and JSON rendering
//! - **pipeline**: Glue from request to report
//! - **config**: Optional TOML configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use chart_analyzer::{charts::CoinGeckoClient, config::AppConfig, pipeline};
//!
//! let cfg = AppConfig::default();
//! let client = CoinGeckoClient::from_config(&cfg.provider)?;
//! let request = pipeline::AnalysisRequest::new("bitcoin", from, to)?;
//! let report = pipeline::run(&request, &client)?;
//! print!("{}", report);
//! ```

pub mod analysis;
pub mod charts;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod range;
pub mod report;
pub mod utils;

// Re-export key types for convenience
pub use error::{AnalyzerError, AnalyzerResult, ErrorCode};
pub use pipeline::{run, AnalysisRequest};
pub use report::Report;
