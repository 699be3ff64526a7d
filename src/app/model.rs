use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::contact::{ContactForm, ContactSubmission, SubmitStatus};
use crate::content::{Portfolio, TechCategory};
use crate::typewriter::{Blink, Typewriter, TypewriterConfig};
use crate::ui::page::{self, Page, PageView, Section};
use crate::ui::viewport::Viewport;

/// Rows taken by the navbar and the status bar.
pub(super) const CHROME_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// Content shown on the page
    pub portfolio: Portfolio,
    /// Content file, when not using the built-in content
    pub content_path: Option<PathBuf>,
    /// Rotating headline text
    pub typewriter: Typewriter,
    /// Headline cursor
    pub cursor: Blink,
    /// Scroll position over the composed page
    pub viewport: Viewport,
    /// Composed page for the current state and width
    pub page: Page,
    /// Expanded flag per tech category, in `TechCategory::ALL` order
    pub expanded: [bool; 4],
    /// Panel that Enter toggles
    pub panel_focus: Option<TechCategory>,
    /// Offset a smooth scroll is heading for
    pub scroll_target: Option<usize>,
    /// Contact form contents
    pub form: ContactForm,
    /// Whether keys edit the form
    pub form_active: bool,
    /// Outcome of the last submission
    pub submit_status: Option<SubmitStatus>,
    /// Whether a submission is in flight
    pub submitting: bool,
    /// Validated submission waiting to be dispatched
    pub(super) pending_submission: Option<ContactSubmission>,
    /// Contact form endpoint
    pub endpoint: Option<String>,
    /// Whether content file watching is enabled
    pub watch_enabled: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("content_path", &self.content_path)
            .field("typed", &self.typewriter.text())
            .field("offset", &self.viewport.offset())
            .field("form_active", &self.form_active)
            .field("watch_enabled", &self.watch_enabled)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model for `portfolio` in a terminal of `terminal_size`.
    pub fn new(portfolio: Portfolio, config: TypewriterConfig, terminal_size: (u16, u16)) -> Self {
        let mut model = Self::unlaid(portfolio, config, terminal_size);
        model.relayout();
        model
    }

    /// Model with an empty page; [`Self::relayout`] fills it in.
    fn unlaid(portfolio: Portfolio, config: TypewriterConfig, terminal_size: (u16, u16)) -> Self {
        Self {
            portfolio,
            content_path: None,
            typewriter: Typewriter::new(config),
            cursor: Blink::default(),
            viewport: Viewport::new(
                terminal_size.0,
                terminal_size.1.saturating_sub(CHROME_ROWS),
                0,
            ),
            page: Page::default(),
            expanded: [false; 4],
            panel_focus: None,
            scroll_target: None,
            form: ContactForm::default(),
            form_active: false,
            submit_status: None,
            submitting: false,
            pending_submission: None,
            endpoint: None,
            watch_enabled: false,
            config_global_path: None,
            config_local_path: None,
            help_visible: false,
            toast: None,
            should_quit: false,
        }
    }

    pub fn page_view(&self) -> PageView<'_> {
        PageView {
            portfolio: &self.portfolio,
            typed: self.typewriter.text(),
            cursor_visible: self.cursor.visible(),
            expanded: self.expanded,
            panel_focus: self.panel_focus,
            form: &self.form,
            form_active: self.form_active,
            submitting: self.submitting,
            submit_status: self.submit_status,
        }
    }

    /// Recompose the page for the current state and width.
    pub fn relayout(&mut self) {
        let page = page::compose(&self.page_view(), self.viewport.width());
        self.viewport.set_total_lines(page.len());
        self.page = page;
    }

    /// Redraw only the headline after a typewriter or cursor tick.
    pub fn refresh_hero(&mut self) {
        let line = page::hero_line(&self.page_view());
        if let Some(slot) = self.page.lines.get_mut(self.page.hero_line) {
            *slot = line;
        }
    }

    /// Section at the top of the window.
    pub fn current_section(&self) -> Section {
        self.page.anchors.section_at(self.viewport.offset())
    }

    /// Start a smooth scroll so `line` ends up at the top of the window.
    pub(super) fn scroll_to(&mut self, line: usize) {
        let target = self.viewport.clamp_target(line);
        self.scroll_target = (target != self.viewport.offset()).then_some(target);
    }

    /// Advance an in-flight smooth scroll by one step. False once there is
    /// nothing left to do.
    pub fn step_scroll(&mut self) -> bool {
        let Some(target) = self.scroll_target else {
            return false;
        };
        if self.viewport.step_toward(target) {
            true
        } else {
            self.scroll_target = None;
            false
        }
    }

    /// Swap in new content and point the typewriter at its words.
    ///
    /// # Errors
    ///
    /// Fails without changing anything when the new content has no words.
    pub fn apply_portfolio(&mut self, portfolio: Portfolio, now_ms: u64) -> Result<()> {
        let current = self.typewriter.config();
        let config = portfolio.typewriter_config(
            current.typing_speed(),
            current.deleting_speed(),
            current.delay_between_words(),
        )?;
        self.typewriter.reconfigure(config, now_ms);
        self.portfolio = portfolio;
        self.relayout();
        Ok(())
    }

    /// Reload the content file, if there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or has no words.
    pub(super) fn reload_content(&mut self, now_ms: u64) -> Result<bool> {
        let Some(path) = self.content_path.clone() else {
            return Ok(false);
        };
        let portfolio = Portfolio::load(&path)?;
        self.apply_portfolio(portfolio, now_ms)?;
        tracing::info!(path = %path.display(), "content reloaded");
        Ok(true)
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

/// Placeholder left behind by `std::mem::take` while `update` runs: no
/// content and no composed page.
impl Default for Model {
    fn default() -> Self {
        Self::unlaid(Portfolio::empty(), TypewriterConfig::default(), (80, 24))
    }
}
