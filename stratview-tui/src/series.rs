//! Chart data adapter: state in, plottable line series out.
//!
//! Everything here is a pure function of already-fetched data. Dates become
//! x values via their day number so every chart shares one axis convention.

use chrono::{Datelike, NaiveDate};
use ratatui::style::Color;

use stratview_core::{ComparisonResult, PricePoint, ValuePoint};

/// Comparison overlay colours, assigned by iteration index and repeating.
pub const PALETTE: [Color; 4] = [
    Color::Rgb(37, 99, 235),
    Color::Rgb(16, 185, 129),
    Color::Rgb(245, 158, 11),
    Color::Rgb(239, 68, 68),
];

pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// One named, coloured line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: Color,
    pub points: Vec<(NaiveDate, f64)>,
}

impl LineSeries {
    /// Points as `(day number, y)` for ratatui datasets.
    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|(date, y)| (date_to_x(*date), *y))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub fn date_to_x(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

pub fn date_from_x(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

/// Closing prices, in the order they are held.
pub fn price_series(prices: &[PricePoint], color: Color) -> LineSeries {
    LineSeries {
        name: "Close".to_string(),
        color,
        points: prices.iter().map(|p| (p.date, p.close)).collect(),
    }
}

/// Account value over time for a single backtest.
pub fn portfolio_series(name: &str, history: &[ValuePoint], color: Color) -> LineSeries {
    LineSeries {
        name: name.to_string(),
        color,
        points: history.iter().map(|v| (v.date, v.value)).collect(),
    }
}

/// One series per comparison entry, each drawn only from its own history.
/// No alignment across strategies.
pub fn comparison_series(cmp: &ComparisonResult) -> Vec<LineSeries> {
    cmp.iter()
        .enumerate()
        .map(|(i, (name, run))| portfolio_series(name, &run.portfolio_history, palette_color(i)))
        .collect()
}

/// Axis ranges covering a set of series, with 5% headroom on y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Bounds {
    /// `None` when there is no finite point to plot.
    pub fn of(series: &[LineSeries]) -> Option<Bounds> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for (date, y) in series.iter().flat_map(|s| s.points.iter()) {
            if !y.is_finite() {
                continue;
            }
            let x = date_to_x(*date);
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(*y);
            y_max = y_max.max(*y);
        }

        if !x_min.is_finite() {
            return None;
        }

        let mut padding = (y_max - y_min).abs() * 0.05;
        if padding == 0.0 {
            // Flat line: give it some room.
            padding = (y_max.abs() * 0.05).max(1.0);
        }
        if x_max == x_min {
            x_max = x_min + 1.0;
        }

        Some(Bounds {
            x: [x_min, x_max],
            y: [y_min - padding, y_max + padding],
        })
    }
}
