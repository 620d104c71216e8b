//! Date-indexed line charts shared by all three panels.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, LegendPosition, Paragraph};
use ratatui::Frame;

use stratview_core::format::format_currency;

use crate::series::{date_from_x, Bounds, LineSeries};
use crate::theme;

pub fn price_label(value: f64) -> String {
    format!("{value:.2}")
}

pub fn currency_label(value: f64) -> String {
    format_currency(value.round())
}

fn date_label(x: f64) -> String {
    date_from_x(x)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Plot `series` on one pair of axes. Each series keeps its own points.
pub fn render_lines(
    f: &mut Frame,
    area: Rect,
    series: &[LineSeries],
    y_title: &str,
    y_label: fn(f64) -> String,
    legend: bool,
) {
    let Some(bounds) = Bounds::of(series) else {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled("No data points.", theme::muted()))),
            area,
        );
        return;
    };

    let data: Vec<Vec<(f64, f64)>> = series.iter().map(LineSeries::xy).collect();
    let datasets: Vec<Dataset> = series
        .iter()
        .zip(&data)
        .map(|(s, points)| {
            Dataset::default()
                .name(s.name.clone())
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(s.color))
                .graph_type(GraphType::Line)
                .data(points)
        })
        .collect();

    let [x_min, x_max] = bounds.x;
    let [y_min, y_max] = bounds.y;
    let x_mid = (x_min + x_max) / 2.0;
    let y_mid = (y_min + y_max) / 2.0;

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds(bounds.x)
                .labels(vec![
                    Span::styled(date_label(x_min), theme::muted()),
                    Span::styled(date_label(x_mid), theme::muted()),
                    Span::styled(date_label(x_max), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(y_title.to_string(), theme::muted()))
                .style(theme::muted())
                .bounds(bounds.y)
                .labels(vec![
                    Span::styled(y_label(y_min), theme::muted()),
                    Span::styled(y_label(y_mid), theme::muted()),
                    Span::styled(y_label(y_max), theme::muted()),
                ]),
        )
        .legend_position(legend.then_some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Percentage(60), Constraint::Percentage(60)));

    f.render_widget(chart, area);
}
