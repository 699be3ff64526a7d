use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

use super::style;

pub fn status_text(model: &Model) -> String {
    let source = model.content_path.as_ref().map_or_else(
        || "built-in".to_string(),
        |path| {
            path.file_name()
                .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().to_string())
        },
    );
    let section = model.current_section().title();
    let percent = model.viewport.scroll_percent();
    let watch_indicator = if model.watch_enabled {
        " [watching]"
    } else {
        ""
    };
    let form_indicator = if model.submitting {
        " [sending]"
    } else if model.form_active {
        " [form]"
    } else {
        ""
    };
    format!(" {source}  {section}  [{percent}%]{watch_indicator}{form_indicator}  ?:help")
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let status_bar = Paragraph::new(status_text(model)).style(style::status_bar());
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
