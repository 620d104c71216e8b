//! StratView Core: everything the dashboard needs that is not drawing.
//!
//! - Domain types for strategies, price points, backtest and comparison results
//! - Display formatters (currency, percentage, ratio)
//! - The `BacktestApi` gateway trait and its blocking HTTP implementation
//! - Dashboard configuration (TOML file + environment override)
//!
//! All financial logic lives behind the remote analytics backend; this crate
//! only describes the wire contract and reshapes what comes back.

pub mod api;
pub mod config;
pub mod domain;
pub mod format;

pub use api::{ApiError, BacktestApi, HttpApiClient};
pub use config::{ConfigError, DashboardConfig};
pub use domain::{
    BacktestResult, ComparisonResult, MissingMetric, PricePoint, StrategyRun, TradeRecord,
    TradeSide, ValuePoint,
};
