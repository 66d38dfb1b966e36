//! Utilities Module
//!
//! Common utilities used across the crate.

mod http;
mod json;
pub mod logging;
pub mod sanitize;

pub use http::*;
pub use json::*;
