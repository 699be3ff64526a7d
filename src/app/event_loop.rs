use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, ToastLevel, update};
use crate::typewriter::Timer;
use crate::watcher::ContentWatcher;

use super::effects::{Submissions, make_content_watcher};

/// Longest the loop sleeps waiting for input.
pub(super) const MAX_POLL_MS: u64 = 250;
/// Interval between smooth scroll steps.
pub(super) const SCROLL_STEP_MS: u64 = 15;
/// How often to look for a finished submission while one is in flight.
const SUBMIT_POLL_MS: u64 = 50;
const RESIZE_POLL_MS: u64 = 10;

pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Milliseconds until the earliest of `deadlines`, capped at [`MAX_POLL_MS`].
pub(super) fn poll_timeout_ms(now_ms: u64, deadlines: impl IntoIterator<Item = Option<u64>>) -> u64 {
    deadlines
        .into_iter()
        .flatten()
        .map(|due| due.saturating_sub(now_ms))
        .min()
        .unwrap_or(MAX_POLL_MS)
        .min(MAX_POLL_MS)
}

/// Drive a smooth scroll one step per [`SCROLL_STEP_MS`]. True when the
/// viewport moved.
pub(super) fn step_smooth_scroll(model: &mut Model, timer: &mut Timer<()>, now_ms: u64) -> bool {
    if model.scroll_target.is_none() {
        if timer.is_pending() {
            timer.cancel();
        }
        return false;
    }
    if !timer.is_pending() {
        timer.schedule((), 0, now_ms);
    }
    if timer.take_ready(now_ms).is_none() {
        return false;
    }
    let moved = model.step_scroll();
    if moved {
        timer.schedule((), SCROLL_STEP_MS, now_ms);
    }
    moved
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be loaded, the terminal cannot
    /// be initialized, or terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");

        // Content and endpoint problems are reported before the terminal is
        // taken over.
        let load_scope = crate::perf::scope("app.load_content");
        let model = self.build_model((80, 24))?;
        let backend = self.form_backend()?;
        drop(load_scope);

        let init_scope = crate::perf::scope("app.ratatui_init");
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal: folio requires an interactive terminal")?;
        let size = terminal.size()?;
        execute!(stdout(), EnableMouseCapture)?;
        drop(init_scope);
        crate::perf::log_event(
            "init.layout",
            format!("terminal={}x{}", size.width, size.height),
        );

        let mut model = update(model, Message::Resize(size.width, size.height));
        let submissions = Submissions::new(backend);
        let result = Self::event_loop(&mut terminal, &mut model, &submissions);

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn event_loop(
        terminal: &mut DefaultTerminal,
        model: &mut Model,
        submissions: &Submissions,
    ) -> Result<()> {
        let start = Instant::now();
        let elapsed_ms = || u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut scroll_timer: Timer<()> = Timer::new();
        let mut content_watcher = if model.watch_enabled {
            Self::initial_watcher(model)
        } else {
            None
        };
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        model.typewriter.start(0);
        model.cursor.start(0);

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let now_ms = elapsed_ms();

            let ticks = model.typewriter.poll(now_ms);
            let blinked = model.cursor.poll(now_ms);
            if ticks > 0 || blinked {
                model.refresh_hero();
                needs_render = true;
            }
            if ticks > 0 {
                crate::perf::log_event(
                    "typewriter.tick",
                    format!("ticks={ticks} text={:?}", model.typewriter.text()),
                );
            }

            if step_smooth_scroll(model, &mut scroll_timer, now_ms) {
                needs_render = true;
            }

            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                crate::perf::log_event(
                    "event.resize.apply",
                    format!("frame={frame_idx} width={width} height={height}"),
                );
                *model = update(std::mem::take(model), Message::Resize(width, height));
                needs_render = true;
            }

            if model.watch_enabled
                && content_watcher
                    .as_mut()
                    .is_some_and(ContentWatcher::take_change_ready)
            {
                Self::dispatch(
                    model,
                    Message::ContentChanged,
                    &mut content_watcher,
                    submissions,
                    now_ms,
                );
                needs_render = true;
            }

            while let Some(result) = submissions.take_finished() {
                Self::dispatch(
                    model,
                    Message::SubmitFinished(result),
                    &mut content_watcher,
                    submissions,
                    now_ms,
                );
                needs_render = true;
            }

            let poll_ms = if needs_render {
                0
            } else {
                poll_timeout_ms(
                    now_ms,
                    [
                        model.typewriter.next_deadline(),
                        model.cursor.next_deadline(),
                        scroll_timer.deadline(),
                        resize_debouncer
                            .is_pending()
                            .then(|| now_ms + RESIZE_POLL_MS),
                        model.submitting.then(|| now_ms + SUBMIT_POLL_MS),
                    ],
                )
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Refresh timestamp after poll wait so debouncers use accurate times.
                let event_ms = elapsed_ms();
                let msg =
                    Self::handle_event(&event::read()?, model, event_ms, &mut resize_debouncer);
                if let Some(msg) = msg {
                    crate::perf::log_event(
                        "event.message",
                        format!("frame={frame_idx} msg={msg:?}"),
                    );
                    Self::dispatch(model, msg, &mut content_watcher, submissions, event_ms);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                let mut drained = 0_u32;
                while event::poll(Duration::from_millis(0))? {
                    let drain_ms = elapsed_ms();
                    let msg =
                        Self::handle_event(&event::read()?, model, drain_ms, &mut resize_debouncer);
                    if let Some(msg) = msg {
                        drained += 1;
                        Self::dispatch(model, msg, &mut content_watcher, submissions, drain_ms);
                        needs_render = true;
                    }
                }
                if drained > 0 {
                    crate::perf::log_event(
                        "event.drain",
                        format!("frame={frame_idx} drained={drained}"),
                    );
                }
            }

            if needs_render {
                frame_idx += 1;
                let draw_start = Instant::now();
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                crate::perf::log_event(
                    "frame.draw",
                    format!(
                        "frame={} draw_ms={:.3}",
                        frame_idx,
                        draw_start.elapsed().as_secs_f64() * 1000.0
                    ),
                );
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }

        model.typewriter.stop();
        model.cursor.stop();
        Ok(())
    }

    /// Apply `msg` and run its side effects.
    pub(super) fn dispatch(
        model: &mut Model,
        msg: Message,
        content_watcher: &mut Option<ContentWatcher>,
        submissions: &Submissions,
        now_ms: u64,
    ) {
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, content_watcher, submissions, &side_msg, now_ms);
    }

    fn initial_watcher(model: &mut Model) -> Option<ContentWatcher> {
        let Some(path) = model.content_path.clone() else {
            model.watch_enabled = false;
            model.show_toast(ToastLevel::Warning, "Nothing to watch: using built-in content");
            return None;
        };
        match make_content_watcher(&path) {
            Ok(watcher) => Some(watcher),
            Err(err) => {
                model.watch_enabled = false;
                model.show_toast(ToastLevel::Warning, format!("Watch unavailable: {err}"));
                crate::perf::log_event(
                    "watcher.error",
                    format!("failed path={} err={err}", path.display()),
                );
                None
            }
        }
    }
}
