use crate::app::{Model, ToastLevel};
use crate::contact::{ContactError, Field, SubmitStatus};
use crate::content::TechCategory;
use crate::ui::page::Section;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    /// Scroll up by n lines
    ScrollUp(usize),
    /// Scroll down by n lines
    ScrollDown(usize),
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    GoToTop,
    GoToBottom,
    /// Smooth scroll to a section
    JumpTo(Section),
    NextSection,
    PrevSection,

    // Tech stack panels
    /// Move panel focus down
    NextPanel,
    /// Move panel focus up
    PrevPanel,
    /// Expand or collapse one category
    TogglePanel(TechCategory),
    /// Expand or collapse the focused category
    ToggleFocusedPanel,

    // Contact form
    /// Start editing the form
    OpenForm,
    /// Stop editing the form
    CloseForm,
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    /// Validate and queue the form for sending
    SubmitForm,
    /// Result of a queued submission
    SubmitFinished(Result<(), String>),

    // Content
    /// Toggle content file watching
    ToggleWatch,
    /// Reload the content file on request
    ReloadContent,
    /// Content file changed on disk
    ContentChanged,

    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// All state transitions happen here. Loading files, watching, and sending
/// the contact form happen in the side-effect handler afterwards.
pub fn update(mut model: Model, msg: Message) -> Model {
    if matches!(
        msg,
        Message::ScrollUp(_)
            | Message::ScrollDown(_)
            | Message::PageUp
            | Message::PageDown
            | Message::HalfPageUp
            | Message::HalfPageDown
            | Message::GoToTop
            | Message::GoToBottom
    ) {
        // Manual scrolling wins over a smooth scroll in flight.
        model.scroll_target = None;
    }
    let mut layout_changed = false;

    match msg {
        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::PageUp => model.viewport.page_up(),
        Message::PageDown => model.viewport.page_down(),
        Message::HalfPageUp => model.viewport.half_page_up(),
        Message::HalfPageDown => model.viewport.half_page_down(),
        Message::GoToTop => model.viewport.go_to_top(),
        Message::GoToBottom => model.viewport.go_to_bottom(),
        Message::JumpTo(section) => {
            let anchor = model.page.anchors.get(section);
            model.scroll_to(anchor);
        }
        Message::NextSection => {
            let from = model.scroll_target.unwrap_or_else(|| model.viewport.offset());
            let current = model.page.anchors.section_at(from);
            if let Some(next) = Section::ALL.get(current.index() + 1) {
                let anchor = model.page.anchors.get(*next);
                model.scroll_to(anchor);
            }
        }
        Message::PrevSection => {
            let from = model.scroll_target.unwrap_or_else(|| model.viewport.offset());
            let current = model.page.anchors.section_at(from);
            let anchor = model.page.anchors.get(current);
            if from > anchor {
                model.scroll_to(anchor);
            } else if let Some(prev) = current.index().checked_sub(1) {
                let anchor = model.page.anchors.get(Section::ALL[prev]);
                model.scroll_to(anchor);
            }
        }

        Message::NextPanel => {
            cycle_panel(&mut model, true);
            layout_changed = true;
        }
        Message::PrevPanel => {
            cycle_panel(&mut model, false);
            layout_changed = true;
        }
        Message::TogglePanel(category) => {
            model.expanded[category.index()] = !model.expanded[category.index()];
            model.panel_focus = Some(category);
            layout_changed = true;
        }
        Message::ToggleFocusedPanel => {
            if let Some(category) = model.panel_focus {
                model.expanded[category.index()] = !model.expanded[category.index()];
                layout_changed = true;
            }
        }

        Message::OpenForm => {
            model.form_active = true;
            layout_changed = true;
            let anchor = model.page.anchors.get(Section::Contact);
            model.scroll_to(anchor);
        }
        Message::CloseForm => {
            model.form_active = false;
            layout_changed = true;
        }
        Message::FormInput(c) => {
            model.form.insert(c);
            model.submit_status = None;
            layout_changed = true;
        }
        Message::FormBackspace => {
            model.form.backspace();
            layout_changed = true;
        }
        Message::FormNextField => {
            model.form.focus_next();
            layout_changed = true;
        }
        Message::FormPrevField => {
            model.form.focus_prev();
            layout_changed = true;
        }
        Message::SubmitForm => {
            submit_form(&mut model);
            layout_changed = true;
        }
        Message::SubmitFinished(result) => {
            model.submitting = false;
            match result {
                Ok(()) => {
                    model.submit_status = Some(SubmitStatus::Success);
                    model.form.clear();
                    model.show_toast(ToastLevel::Info, "Message sent");
                }
                Err(err) => {
                    model.submit_status = Some(SubmitStatus::Error);
                    model.show_toast(ToastLevel::Error, format!("Send failed: {err}"));
                }
            }
            layout_changed = true;
        }

        Message::ToggleWatch => model.watch_enabled = !model.watch_enabled,
        Message::ReloadContent | Message::ContentChanged | Message::Redraw => {}
        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,
        Message::Resize(width, height) => {
            model
                .viewport
                .resize(width, height.saturating_sub(super::model::CHROME_ROWS));
            layout_changed = true;
        }
        Message::Quit => model.should_quit = true,
    }

    if layout_changed {
        model.relayout();
        if let Some(target) = model.scroll_target {
            model.scroll_target = Some(model.viewport.clamp_target(target));
        }
    }
    model
}

fn submit_form(model: &mut Model) {
    if model.submitting {
        model.show_toast(ToastLevel::Info, "Already sending");
        return;
    }
    let submission = match model.form.validate() {
        Ok(submission) => submission,
        Err(err) => {
            model.form.focus = match &err {
                ContactError::MissingField(field) => *field,
                _ => Field::Email,
            };
            model.form_active = true;
            model.show_toast(ToastLevel::Warning, err.to_string());
            return;
        }
    };
    if model.endpoint.is_none() {
        model.show_toast(ToastLevel::Warning, ContactError::NoEndpoint.to_string());
        return;
    }
    model.pending_submission = Some(submission);
    model.submitting = true;
    model.submit_status = None;
    model.show_toast(ToastLevel::Info, "Sending message…");
}

fn cycle_panel(model: &mut Model, forward: bool) {
    let len = TechCategory::ALL.len();
    let next = match (model.panel_focus, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(c), true) => (c.index() + 1) % len,
        (Some(c), false) => (c.index() + len - 1) % len,
    };
    let category = TechCategory::ALL[next];
    model.panel_focus = Some(category);
    reveal_panel(model, category);
}

/// Scroll just enough to bring a panel header into view.
fn reveal_panel(model: &mut Model, category: TechCategory) {
    let Some(line) = model.page.panel_header_line(category) else {
        return;
    };
    let visible = model.viewport.visible_range();
    if !visible.contains(&line) {
        model.scroll_to(line.saturating_sub(2));
    }
}
