//! Request and response envelopes for the backend's JSON bodies.

use serde::{Deserialize, Serialize};

use crate::domain::PricePoint;

/// `GET /strategies` response.
#[derive(Debug, Deserialize)]
pub struct StrategiesEnvelope {
    pub strategies: Vec<String>,
}

/// `GET /stock-data` response.
#[derive(Debug, Deserialize)]
pub struct StockDataEnvelope {
    pub data: Vec<PricePoint>,
}

/// `POST /backtest` body.
///
/// A non-finite capital serializes as JSON `null`; the backend decides what
/// that means.
#[derive(Debug, Serialize)]
pub struct BacktestRequest<'a> {
    pub strategy: &'a str,
    pub initial_capital: f64,
}

/// `POST /compare-strategies` body.
#[derive(Debug, Serialize)]
pub struct CompareRequest<'a> {
    pub strategies: &'a [String],
    pub initial_capital: f64,
}
