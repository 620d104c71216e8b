//! Overlay widgets: help and error history.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, ErrorCategory};
use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys [any key]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Strategy & capital");
    key(&mut lines, "j / k, ↓ / ↑", "Select next / previous strategy");
    key(&mut lines, "c", "Edit initial capital");
    key(&mut lines, "Enter / Esc", "Commit / cancel capital edit");
    lines.push(Line::from(""));

    section(&mut lines, "Runs");
    key(&mut lines, "r / Enter", "Run backtest for the selected strategy");
    key(&mut lines, "a", "Compare every strategy");
    key(&mut lines, "R", "Reload strategies and prices");
    lines.push(Line::from(""));

    section(&mut lines, "Views");
    key(&mut lines, "1-3", "Prices / Backtest / Compare");
    key(&mut lines, "Tab / Shift+Tab", "Cycle views");
    key(&mut lines, "e", "Error history");
    key(&mut lines, "q", "Quit");

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}

/// Failed requests, newest first. A tally per backend operation heads the
/// list; each entry shows its request line above the error text.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(format!(
            " Error History ({}) [Esc]close [j/k]scroll ",
            app.error_history.len()
        ))
        .title_style(theme::negative());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        let text = Paragraph::new(Span::styled("No failed requests.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    let mut lines = vec![tally_line(app), Line::from("")];
    for (offset, err) in app.error_history.iter().skip(app.error_scroll).enumerate() {
        if lines.len() + 2 > inner.height as usize {
            break;
        }
        let (marker, message_style) = if offset == 0 {
            ("▸ ", theme::negative().add_modifier(Modifier::BOLD))
        } else {
            ("  ", theme::muted())
        };
        lines.push(Line::from(vec![
            Span::styled(marker, theme::negative()),
            Span::styled(err.timestamp.format("%H:%M:%S ").to_string(), theme::muted()),
            Span::styled(err.category.operation(), theme::warning()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", err.message),
            message_style,
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn tally_line(app: &AppState) -> Line<'static> {
    let mut spans = Vec::new();
    for category in ErrorCategory::ALL {
        let count = app
            .error_history
            .iter()
            .filter(|e| e.category == category)
            .count();
        if count > 0 {
            spans.push(Span::styled(
                format!("{} x{count}   ", category.operation()),
                theme::warning(),
            ));
        }
    }
    Line::from(spans)
}
