//! Blocking HTTP implementation of [`BacktestApi`].

use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::wire::{BacktestRequest, CompareRequest, StockDataEnvelope, StrategiesEnvelope};
use super::{ApiError, BacktestApi, Endpoint};
use crate::config::DashboardConfig;
use crate::domain::{BacktestResult, ComparisonResult, PricePoint};

/// Talks JSON to the analytics backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    /// Client with the transport's default timeout.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.clone(),
            message: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self, ApiError> {
        Self::with_timeout(&config.api_base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        debug!("{} {url}", endpoint.method());
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| transport_error(endpoint, e))?;
        decode(endpoint, resp)
    }

    fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        debug!("{} {url}", endpoint.method());
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| transport_error(endpoint, e))?;
        decode(endpoint, resp)
    }
}

impl BacktestApi for HttpApiClient {
    fn list_strategies(&self) -> Result<Vec<String>, ApiError> {
        let envelope: StrategiesEnvelope = self.get(Endpoint::Strategies)?;
        Ok(envelope.strategies)
    }

    fn fetch_price_history(&self) -> Result<Vec<PricePoint>, ApiError> {
        let envelope: StockDataEnvelope = self.get(Endpoint::StockData)?;
        Ok(envelope.data)
    }

    fn run_backtest(
        &self,
        strategy: &str,
        initial_capital: f64,
    ) -> Result<BacktestResult, ApiError> {
        self.post(
            Endpoint::Backtest,
            &BacktestRequest {
                strategy,
                initial_capital,
            },
        )
    }

    fn compare_strategies(
        &self,
        strategies: &[String],
        initial_capital: f64,
    ) -> Result<ComparisonResult, ApiError> {
        self.post(
            Endpoint::CompareStrategies,
            &CompareRequest {
                strategies,
                initial_capital,
            },
        )
    }
}

/// Validate the base URL and strip any trailing slash so endpoint paths join cleanly.
fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ApiError::InvalidBaseUrl {
            url: raw.to_string(),
            message: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn transport_error(endpoint: Endpoint, e: reqwest::Error) -> ApiError {
    ApiError::Transport {
        path: endpoint.path(),
        message: e.to_string(),
    }
}

fn decode<T: DeserializeOwned>(endpoint: Endpoint, resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            path: endpoint.path(),
            status: status.as_u16(),
        });
    }

    let body = resp.text().map_err(|e| transport_error(endpoint, e))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode {
        path: endpoint.path(),
        message: e.to_string(),
    })
}
