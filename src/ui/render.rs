use std::ops::Range;

use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::Model;

use super::page::Section;
use super::{overlays, status, style};

/// Screen rows above the page.
pub const PAGE_TOP: u16 = 1;

/// Column spans of the navbar links, left to right.
pub fn nav_tabs(brand: &str) -> Vec<(Range<u16>, Section)> {
    let mut column = u16::try_from(brand_text(brand).width()).unwrap_or(u16::MAX);
    Section::NAV
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let width = u16::try_from(tab_text(i, *section).width()).unwrap_or(u16::MAX);
            let span = column..column.saturating_add(width);
            column = span.end.saturating_add(1);
            (span, *section)
        })
        .collect()
}

/// Navbar link under `column`, if any.
pub fn nav_tab_at(brand: &str, column: u16) -> Option<Section> {
    nav_tabs(brand)
        .into_iter()
        .find(|(span, _)| span.contains(&column))
        .map(|(_, section)| section)
}

fn brand_text(brand: &str) -> String {
    format!(" {brand}  ")
}

fn tab_text(index: usize, section: Section) -> String {
    format!(" {} {} ", index + 1, section.nav_label())
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let _scope = crate::perf::scope("render.frame");

    let nav_area = Rect { height: 1, ..area };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };
    let toast_active = model.active_toast().is_some();
    let page_area = Rect {
        y: area.y + PAGE_TOP,
        height: area
            .height
            .saturating_sub(PAGE_TOP + 1 + u16::from(toast_active)),
        ..area
    };
    let toast_area = Rect {
        y: area.y + area.height.saturating_sub(2),
        height: 1,
        ..area
    };

    render_navbar(model, frame, nav_area);
    render_page(model, frame, page_area);
    if toast_active {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, status_area);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_navbar(model: &Model, frame: &mut Frame, area: Rect) {
    let current = model.current_section();
    let mut spans = vec![Span::styled(
        brand_text(&model.portfolio.profile.name),
        style::nav_bar().add_modifier(Modifier::BOLD),
    )];
    for (i, section) in Section::NAV.iter().enumerate() {
        let tab_style = if *section == current {
            style::nav_active()
        } else {
            style::nav_bar()
        };
        spans.push(Span::styled(tab_text(i, *section), tab_style));
        spans.push(Span::styled(" ", style::nav_bar()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(style::nav_bar()), area);
}

fn render_page(model: &Model, frame: &mut Frame, area: Rect) {
    let range = model.viewport.visible_range();
    let lines = model.page.lines.get(range).unwrap_or_default().to_vec();
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines), area);
}
