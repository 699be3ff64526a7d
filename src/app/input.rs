use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, Message, Model};
use crate::ui::page::Section;

use super::event_loop::ResizeDebouncer;

/// Lines moved per mouse wheel notch.
const WHEEL_LINES: usize = 3;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => {
                crate::perf::log_event("event.resize.queue", format!("width={w} height={h}"));
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
            return Some(Message::Quit);
        }
        if ctrl && key.code == KeyCode::Char('s') {
            return Some(Message::SubmitForm);
        }

        if model.form_active {
            return match key.code {
                KeyCode::Esc => Some(Message::CloseForm),
                KeyCode::Tab => Some(Message::FormNextField),
                KeyCode::BackTab => Some(Message::FormPrevField),
                KeyCode::Enter if model.form.focus == crate::contact::Field::Message => {
                    Some(Message::FormInput('\n'))
                }
                KeyCode::Enter => Some(Message::FormNextField),
                KeyCode::Backspace => Some(Message::FormBackspace),
                KeyCode::Up => Some(Message::ScrollUp(1)),
                KeyCode::Down => Some(Message::ScrollDown(1)),
                KeyCode::PageUp => Some(Message::PageUp),
                KeyCode::PageDown => Some(Message::PageDown),
                KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                    Some(Message::FormInput(c))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollDown(1)),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollUp(1)),
            KeyCode::Char('d') if ctrl => Some(Message::HalfPageDown),
            KeyCode::Char('u') if ctrl => Some(Message::HalfPageUp),
            KeyCode::Char(' ') | KeyCode::PageDown => Some(Message::PageDown),
            KeyCode::Char('b') | KeyCode::PageUp => Some(Message::PageUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Message::GoToTop),
            KeyCode::Char('G') | KeyCode::End => Some(Message::GoToBottom),
            KeyCode::Char(c @ '1'..='7') => {
                let idx = (c as usize) - ('1' as usize);
                Section::NAV.get(idx).copied().map(Message::JumpTo)
            }
            KeyCode::Char('n') | KeyCode::Tab => Some(Message::NextSection),
            KeyCode::Char('p') | KeyCode::BackTab => Some(Message::PrevSection),
            KeyCode::Char(']') => Some(Message::NextPanel),
            KeyCode::Char('[') => Some(Message::PrevPanel),
            KeyCode::Enter | KeyCode::Char('x') => Some(Message::ToggleFocusedPanel),
            KeyCode::Char('c' | 'i') => Some(Message::OpenForm),
            KeyCode::Char('w') => Some(Message::ToggleWatch),
            KeyCode::Char('r' | 'R') => Some(Message::ReloadContent),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('l') if ctrl => Some(Message::Redraw),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left))
                .then_some(Message::HideHelp);
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => Some(Message::ScrollDown(WHEEL_LINES)),
            MouseEventKind::ScrollUp => Some(Message::ScrollUp(WHEEL_LINES)),
            MouseEventKind::Up(MouseButton::Left) => {
                if mouse.row < crate::ui::PAGE_TOP {
                    return crate::ui::nav_tab_at(&model.portfolio.profile.name, mouse.column)
                        .map(Message::JumpTo);
                }
                let line = page_line_for_row(model, mouse.row)?;
                model.page.panel_at(line).map(Message::TogglePanel)
            }
            _ => None,
        }
    }
}

/// Page line shown on screen row `row`, if the row is inside the page.
pub(super) fn page_line_for_row(model: &Model, row: u16) -> Option<usize> {
    let rel = row.checked_sub(crate::ui::PAGE_TOP)?;
    if rel >= model.viewport.height() {
        return None;
    }
    let line = model.viewport.offset() + rel as usize;
    (line < model.viewport.total_lines()).then_some(line)
}
