//! StratView TUI: terminal dashboard for the strategy backtest backend.
//!
//! One screen: strategy and capital controls on top, then one of three
//! chart views, then a status bar.
//! 1. Prices: recent closing prices
//! 2. Backtest: metrics card and portfolio curve for the selected strategy
//! 3. Compare: one card per strategy and an overlay of their curves

pub mod app;
pub mod input;
pub mod series;
pub mod theme;
pub mod ui;
pub mod worker;

pub use app::AppState;
pub use worker::{spawn_worker, WorkerCommand, WorkerResponse};
