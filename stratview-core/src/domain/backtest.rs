//! Backtest and comparison results as returned by the analytics backend.
//!
//! The dashboard never computes metrics itself. It requires four named metrics
//! to be present and treats their absence as a contract violation
//! ([`MissingMetric`]) rather than substituting a value.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TOTAL_RETURN: &str = "Total Return";
pub const ANNUALIZED_RETURN: &str = "Annualized Return";
pub const MAX_DRAWDOWN: &str = "Max Drawdown";
pub const SHARPE_RATIO: &str = "Sharpe Ratio";

/// Metric keys the display layer reads from every run.
pub const REQUIRED_METRICS: [&str; 4] = [TOTAL_RETURN, ANNUALIZED_RETURN, MAX_DRAWDOWN, SHARPE_RATIO];

/// A required metric key was absent from a backend payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("backend response is missing required metric '{0}'")]
pub struct MissingMetric(pub String);

/// One point of simulated account value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    #[serde(with = "super::dates")]
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// A simulated fill. Buys carry `cost`, sells carry `revenue`; the other is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    #[serde(with = "super::dates")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub shares: i64,
    pub price: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub revenue: f64,
}

/// The four required metrics, extracted together for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSummary {
    pub total_return: f64,
    pub annualized_return: f64,
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
}

/// Outcome of running one strategy: the body shared by `/backtest` and each
/// entry of `/compare-strategies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRun {
    pub final_value: f64,
    pub metrics: BTreeMap<String, f64>,
    /// Absent from comparison entries.
    #[serde(default)]
    pub trade_history: Vec<TradeRecord>,
    pub portfolio_history: Vec<ValuePoint>,
}

impl StrategyRun {
    /// Look up a named metric, failing if the backend did not supply it.
    pub fn metric(&self, name: &str) -> Result<f64, MissingMetric> {
        self.metrics
            .get(name)
            .copied()
            .ok_or_else(|| MissingMetric(name.to_string()))
    }

    pub fn total_return(&self) -> Result<f64, MissingMetric> {
        self.metric(TOTAL_RETURN)
    }

    pub fn sharpe_ratio(&self) -> Result<f64, MissingMetric> {
        self.metric(SHARPE_RATIO)
    }

    /// All four required metrics, or the first one missing.
    pub fn summary(&self) -> Result<MetricSummary, MissingMetric> {
        Ok(MetricSummary {
            total_return: self.metric(TOTAL_RETURN)?,
            annualized_return: self.metric(ANNUALIZED_RETURN)?,
            max_drawdown: self.metric(MAX_DRAWDOWN)?,
            sharpe_ratio: self.metric(SHARPE_RATIO)?,
        })
    }

    pub fn trade_count(&self) -> usize {
        self.trade_history.len()
    }
}

/// Response of `/backtest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    pub strategy: String,
    #[serde(flatten)]
    pub run: StrategyRun,
}

/// Response of `/compare-strategies`: strategy id → run, iterated in key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonResult {
    pub runs: BTreeMap<String, StrategyRun>,
}

impl ComparisonResult {
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn get(&self, strategy: &str) -> Option<&StrategyRun> {
        self.runs.get(strategy)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StrategyRun)> {
        self.runs.iter().map(|(name, run)| (name.as_str(), run))
    }
}

impl FromIterator<(String, StrategyRun)> for ComparisonResult {
    fn from_iter<I: IntoIterator<Item = (String, StrategyRun)>>(iter: I) -> Self {
        Self {
            runs: iter.into_iter().collect(),
        }
    }
}
