use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

pub fn help_lines(model: &Model) -> Vec<Line<'static>> {
    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());
    let endpoint = model
        .endpoint
        .clone()
        .unwrap_or_else(|| "<none>".to_string());
    let content = model
        .content_path
        .as_ref()
        .map_or_else(|| "<built-in>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    vec![
        Line::styled("Navigation", section_style),
        Line::raw("  j/k or Up/Down      Scroll"),
        Line::raw("  Space/PageDown      Page down"),
        Line::raw("  b/PageUp            Page up"),
        Line::raw("  Ctrl-d / Ctrl-u     Half page"),
        Line::raw("  g / G               Top / bottom"),
        Line::raw("  1-7, click navbar   Jump to section"),
        Line::raw("  n / p               Next / previous section"),
        Line::raw(""),
        Line::styled("Tech Stack", section_style),
        Line::raw("  ] / [               Focus next / previous panel"),
        Line::raw("  Enter, click        Expand / collapse panel"),
        Line::raw(""),
        Line::styled("Contact", section_style),
        Line::raw("  c                   Fill in the form"),
        Line::raw("  Tab / Shift-Tab     Next / previous field"),
        Line::raw("  Ctrl-s              Send"),
        Line::raw("  Esc                 Leave the form"),
        Line::raw(format!("  Endpoint: {endpoint}")),
        Line::raw(""),
        Line::styled("Other", section_style),
        Line::raw("  w                   Toggle watch"),
        Line::raw("  r                   Reload content"),
        Line::raw("  q / Ctrl-c          Quit"),
        Line::raw("  ? / F1              Toggle help"),
        Line::raw(""),
        Line::styled("Files", section_style),
        Line::raw(format!("  Content: {content}")),
        Line::raw(format!("  Global config: {global_cfg}")),
        Line::raw(format!("  Local override: {local_cfg}")),
    ]
}

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    let inner = block.inner(popup);

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // Last row is the footer hint.
    let content_height = inner.height.saturating_sub(1);
    let content_area = Rect::new(inner.x, inner.y, inner.width, content_height);
    frame.render_widget(Paragraph::new(help_lines(model)), content_area);

    let footer_area = Rect::new(inner.x, inner.y + content_height, inner.width, 1);
    let footer = Line::styled(
        "any key closes",
        Style::default().fg(super::style::MUTED),
    );
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
