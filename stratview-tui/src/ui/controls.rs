//! Header: strategy selector, capital field and the two run buttons.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use stratview_core::format::format_currency;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(" Trading Configuration ")
        .title_style(theme::panel_title(false));

    let lines = vec![strategy_line(app), capital_line(app)];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn strategy_line(app: &AppState) -> Line<'static> {
    let mut spans = vec![Span::styled("Strategy  ", theme::muted())];

    if app.strategies.is_empty() {
        spans.push(Span::styled("(no strategies loaded)", theme::muted()));
        return Line::from(spans);
    }

    for name in &app.strategies {
        if app.selected_strategy.as_ref() == Some(name) {
            spans.push(Span::styled(format!("▸ {name}  "), theme::accent_bold()));
        } else {
            spans.push(Span::styled(format!("  {name}  "), theme::muted()));
        }
    }
    spans.push(Span::styled("[j/k]", theme::neutral()));
    Line::from(spans)
}

fn capital_line(app: &AppState) -> Line<'static> {
    let mut spans = vec![Span::styled("Capital   ", theme::muted())];

    match &app.capital_input {
        Some(text) => {
            spans.push(Span::styled("> ", theme::accent()));
            spans.push(Span::styled(text.clone(), theme::accent_bold()));
            spans.push(Span::styled("_", theme::accent()));
            spans.push(Span::styled("  [Enter]set [Esc]cancel", theme::muted()));
        }
        None => {
            spans.push(Span::styled(
                format_currency(app.initial_capital),
                theme::accent(),
            ));
            spans.push(Span::styled(" [c]", theme::neutral()));
        }
    }

    spans.push(Span::raw("    "));
    spans.push(Span::styled(
        run_button_label(app.is_busy()),
        theme::button(app.can_run_backtest()),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        " Compare All [a] ",
        theme::button(app.can_run_compare()),
    ));
    Line::from(spans)
}

/// Only the backtest button announces an in-flight request.
pub fn run_button_label(busy: bool) -> &'static str {
    if busy {
        " Running... "
    } else {
        " Run Backtest [r] "
    }
}
