//! Backtest API gateway: the four fixed requests against the analytics backend.
//!
//! The `BacktestApi` trait abstracts the transport so the dashboard worker can
//! run against the real HTTP backend or an in-process fake in tests. Every
//! operation is exactly one round trip: no retries, no caching, no streaming.

pub mod http;
pub mod wire;

use thiserror::Error;

use crate::domain::{BacktestResult, ComparisonResult, PricePoint};

pub use http::HttpApiClient;

/// The backend's fixed endpoints, relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Strategies,
    StockData,
    Backtest,
    CompareStrategies,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Strategies => "/strategies",
            Endpoint::StockData => "/stock-data",
            Endpoint::Backtest => "/backtest",
            Endpoint::CompareStrategies => "/compare-strategies",
        }
    }

    /// HTTP verb the backend expects on this endpoint.
    pub fn method(self) -> &'static str {
        match self {
            Endpoint::Strategies | Endpoint::StockData => "GET",
            Endpoint::Backtest | Endpoint::CompareStrategies => "POST",
        }
    }
}

/// Transport and parse failures at the gateway boundary.
///
/// Every variant means "the request produced no usable data"; callers keep
/// whatever they held before.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("request to {path} failed: {message}")]
    Transport { path: &'static str, message: String },

    #[error("{path} returned HTTP {status}")]
    Status { path: &'static str, status: u16 },

    #[error("could not decode {path} response: {message}")]
    Decode { path: &'static str, message: String },
}

/// Abstraction over the analytics backend.
pub trait BacktestApi: Send + Sync {
    /// `GET /strategies`: the strategy catalog, in backend order.
    fn list_strategies(&self) -> Result<Vec<String>, ApiError>;

    /// `GET /stock-data`: the full price history. Callers truncate.
    fn fetch_price_history(&self) -> Result<Vec<PricePoint>, ApiError>;

    /// `POST /backtest`. Callers must not pass an empty strategy.
    fn run_backtest(&self, strategy: &str, initial_capital: f64)
        -> Result<BacktestResult, ApiError>;

    /// `POST /compare-strategies`: one request covers every listed strategy.
    fn compare_strategies(
        &self,
        strategies: &[String],
        initial_capital: f64,
    ) -> Result<ComparisonResult, ApiError>;
}
