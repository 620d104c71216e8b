//! Top-level UI layout: controls header above one chart view.

pub mod chart;
pub mod controls;
pub mod overlays;
pub mod results;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Panel};
use crate::series::{self, PALETTE};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(f.area());

    controls::render(f, chunks[0], app);
    draw_panel(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    match app.overlay {
        Overlay::Help => overlays::render_help(f, chunks[1]),
        Overlay::ErrorHistory => overlays::render_error_history(f, chunks[1], app),
        Overlay::None => {}
    }
}

fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(panel_tabs(panel))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Prices => draw_prices(f, inner, app),
        Panel::Backtest => draw_backtest(f, inner, app),
        Panel::Compare => draw_compare(f, inner, app),
    }
}

fn panel_tabs(active: Panel) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for panel in [Panel::Prices, Panel::Backtest, Panel::Compare] {
        let style = if panel == active {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(
            format!("{} [{}] ", panel.label(), panel.index() + 1),
            style,
        ));
    }
    Line::from(spans)
}

fn draw_prices(f: &mut Frame, area: Rect, app: &AppState) {
    if app.prices.is_empty() {
        render_empty(f, area, "No price data loaded. Press R to retry.");
        return;
    }
    let line = series::price_series(&app.prices, PALETTE[0]);
    let title = format!("Close (last {} sessions)", app.prices.len());
    chart::render_lines(f, area, &[line], &title, chart::price_label, false);
}

fn draw_backtest(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(result) = &app.backtest else {
        render_empty(f, area, "No backtest yet. Pick a strategy with j/k and press r.");
        return;
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(20)])
        .split(area);

    results::render_backtest_card(f, cols[0], result);

    let line = series::portfolio_series(
        "Portfolio Value",
        &result.run.portfolio_history,
        PALETTE[1],
    );
    chart::render_lines(
        f,
        cols[1],
        &[line],
        "Portfolio Value",
        chart::currency_label,
        false,
    );
}

fn draw_compare(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(cmp) = &app.comparison else {
        render_empty(f, area, "No comparison yet. Press a to compare every strategy.");
        return;
    };
    if cmp.is_empty() {
        render_empty(f, area, "The backend returned no strategies to compare.");
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(area);

    results::render_comparison_cards(f, rows[0], cmp);
    let lines = series::comparison_series(cmp);
    chart::render_lines(
        f,
        rows[1],
        &lines,
        "Portfolio Value",
        chart::currency_label,
        true,
    );
}

fn render_empty(f: &mut Frame, area: Rect, hint: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(hint.to_string(), theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
