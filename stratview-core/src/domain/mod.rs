//! Domain types for StratView

pub mod backtest;
pub mod dates;
pub mod price;

pub use backtest::{
    BacktestResult, ComparisonResult, MetricSummary, MissingMetric, StrategyRun, TradeRecord,
    TradeSide, ValuePoint, ANNUALIZED_RETURN, MAX_DRAWDOWN, REQUIRED_METRICS, SHARPE_RATIO,
    TOTAL_RETURN,
};
pub use price::{recent_window, PricePoint, DEFAULT_PRICE_WINDOW};

/// Strategy identifier as named by the backend (e.g. `"RSI"`).
pub type StrategyId = String;
