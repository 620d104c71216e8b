//! Price history points and the display window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of most recent closes the dashboard charts by default.
pub const DEFAULT_PRICE_WINDOW: usize = 30;

/// One daily close from `/stock-data`.
///
/// The backend sends full OHLCV rows; only the date and close are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(with = "super::dates")]
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// The last `window` points of `series`, in their original order.
pub fn recent_window(series: &[PricePoint], window: usize) -> Vec<PricePoint> {
    let start = series.len().saturating_sub(window);
    series[start..].to_vec()
}
