//! Style tokens for the StratView TUI.
//!
//! Dark terminal background with a blue accent. Gains are green, losses red,
//! anything inert is rendered muted.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(96, 165, 250);
pub const POSITIVE: Color = Color::Rgb(52, 211, 153);
pub const NEGATIVE: Color = Color::Rgb(248, 113, 113);
pub const WARNING: Color = Color::Rgb(251, 191, 36);
pub const NEUTRAL: Color = Color::Rgb(167, 139, 250);
pub const MUTED: Color = Color::Rgb(120, 130, 150);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Button style: live buttons are highlighted, inert ones greyed out.
pub fn button(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        muted().add_modifier(Modifier::DIM)
    }
}

/// Green for gains (zero included), red for losses. NaN reads as neutral.
pub fn metric_color(value: f64) -> Style {
    if value.is_nan() {
        neutral()
    } else if value >= 0.0 {
        positive()
    } else {
        negative()
    }
}

/// Sharpe gradient.
pub fn sharpe_color(sharpe: f64) -> Style {
    match sharpe {
        s if s >= 1.0 => positive(),
        s if s >= 0.5 => accent(),
        s if s >= 0.0 => neutral(),
        s if s < 0.0 => negative(),
        _ => muted(),
    }
}
