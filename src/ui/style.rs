//! Colors for the page.
//!
//! Semantic ANSI colors only, so the page follows the terminal's palette.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Green;
pub const MUTED: Color = Color::Indexed(245);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Section titles.
pub fn section_heading() -> Style {
    accent_bold().add_modifier(Modifier::UNDERLINED)
}

/// Card titles inside a section.
pub fn title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn body() -> Style {
    Style::default()
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn link() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
}

pub fn tag() -> Style {
    Style::default().fg(ACCENT).bg(Color::Indexed(236))
}

/// Highlight for the focused panel or form field.
pub fn focused(style: Style) -> Style {
    style.add_modifier(Modifier::REVERSED)
}

pub fn nav_active() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn nav_bar() -> Style {
    Style::default().bg(Color::Indexed(235)).fg(Color::White)
}

pub fn status_bar() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

pub fn success() -> Style {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}
