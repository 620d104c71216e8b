//! Metric cards for the single backtest and for each compared strategy.
//!
//! Card contents are built as plain rows first so a missing metric surfaces
//! as a [`MissingMetric`] before anything is drawn. A card whose payload
//! broke the contract is replaced by a notice, never by a made-up number.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use stratview_core::format::{format_currency, format_percentage, format_ratio};
use stratview_core::{BacktestResult, ComparisonResult, MissingMetric, StrategyRun};

use crate::theme;

/// One `label: value` line of a card.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: &'static str,
    pub value: String,
    pub style: Style,
}

impl MetricRow {
    fn new(label: &'static str, value: String, style: Style) -> Self {
        Self { label, value, style }
    }
}

pub fn backtest_rows(result: &BacktestResult) -> Result<Vec<MetricRow>, MissingMetric> {
    let run = &result.run;
    let m = run.summary()?;
    Ok(vec![
        MetricRow::new("Final Value", format_currency(run.final_value), theme::positive()),
        MetricRow::new("Total Return", format_percentage(m.total_return), theme::accent()),
        MetricRow::new(
            "Annualized Return",
            format_percentage(m.annualized_return),
            theme::metric_color(m.annualized_return),
        ),
        MetricRow::new("Max Drawdown", format_percentage(m.max_drawdown), theme::negative()),
        MetricRow::new(
            "Sharpe Ratio",
            format_ratio(m.sharpe_ratio, 4),
            theme::sharpe_color(m.sharpe_ratio),
        ),
        MetricRow::new("Total Trades", run.trade_count().to_string(), theme::neutral()),
    ])
}

pub fn comparison_rows(run: &StrategyRun) -> Result<Vec<MetricRow>, MissingMetric> {
    let total_return = run.total_return()?;
    let sharpe = run.sharpe_ratio()?;
    Ok(vec![
        MetricRow::new("Final Value", format_currency(run.final_value), theme::accent()),
        MetricRow::new(
            "Return",
            format_percentage(total_return),
            theme::metric_color(total_return),
        ),
        MetricRow::new("Sharpe", format_ratio(sharpe, 2), theme::sharpe_color(sharpe)),
    ])
}

pub fn render_backtest_card(f: &mut Frame, area: Rect, result: &BacktestResult) {
    let block = card_block(format!(" {} Strategy Results ", result.strategy));
    let body = card_body(backtest_rows(result), 18);
    f.render_widget(body.block(block), area);
}

/// One card per strategy, side by side, in comparison order.
pub fn render_comparison_cards(f: &mut Frame, area: Rect, cmp: &ComparisonResult) {
    let n = cmp.len() as u32;
    if n == 0 {
        return;
    }
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(area);

    for ((name, run), col) in cmp.iter().zip(cols.iter()) {
        let block = card_block(format!(" {name} "));
        let body = card_body(comparison_rows(run), 12);
        f.render_widget(body.block(block), *col);
    }
}

fn card_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(title)
        .title_style(theme::accent_bold())
}

fn card_body(rows: Result<Vec<MetricRow>, MissingMetric>, label_width: usize) -> Paragraph<'static> {
    match rows {
        Ok(rows) => {
            let lines: Vec<Line> = rows
                .into_iter()
                .map(|row| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:<width$}", format!("{}:", row.label), width = label_width),
                            theme::muted(),
                        ),
                        Span::styled(row.value, row.style),
                    ])
                })
                .collect();
            Paragraph::new(lines)
        }
        Err(e) => Paragraph::new(vec![
            Line::from(Span::styled("Contract violation", theme::negative())),
            Line::from(Span::styled(e.to_string(), theme::muted())),
        ])
        .wrap(Wrap { trim: true }),
    }
}
