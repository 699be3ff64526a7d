use super::TypewriterConfig;
use super::timer::{Fired, Timer, TimerToken};

/// Whether the displayed prefix is growing or shrinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    TypeChar,
    DeleteChar,
    BeginDeleting,
}

/// The typewriter state machine.
///
/// `text` is always a prefix of the active word, and at most one timer entry
/// is pending at any time. Nothing changes between ticks.
#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypewriterConfig,
    text: String,
    index: usize,
    mode: Mode,
    timer: Timer<Step>,
    running: bool,
    ticks_fired: u64,
}

impl Typewriter {
    /// Create an idle engine: empty text, first word, typing.
    pub const fn new(config: TypewriterConfig) -> Self {
        Self {
            config,
            text: String::new(),
            index: 0,
            mode: Mode::Typing,
            timer: Timer::new(),
            running: false,
            ticks_fired: 0,
        }
    }

    /// The string to display right now.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn active_index(&self) -> usize {
        self.index
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub fn words(&self) -> &[String] {
        self.config.words()
    }

    pub const fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Number of timer entries applied since creation.
    pub const fn ticks_fired(&self) -> u64 {
        self.ticks_fired
    }

    /// The word the engine is typing toward.
    pub fn target(&self) -> &str {
        &self.config.words()[self.index]
    }

    /// Token and deadline of the pending tick.
    pub fn pending(&self) -> Option<(TimerToken, u64)> {
        Some((self.timer.token()?, self.timer.deadline()?))
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.timer.deadline()
    }

    /// Mount: cancel anything pending and schedule from the current state.
    pub fn start(&mut self, now_ms: u64) {
        self.timer.cancel();
        self.running = true;
        self.schedule_from(now_ms);
        tracing::debug!(
            words = self.config.words().len(),
            index = self.index,
            "typewriter started"
        );
    }

    /// Unmount: cancel the pending tick. No state changes after this until
    /// the next [`start`](Self::start).
    pub fn stop(&mut self) {
        if let Some(token) = self.timer.cancel() {
            tracing::debug!(?token, "typewriter stopped with pending tick");
        }
        self.running = false;
    }

    /// Swap in a new configuration.
    ///
    /// The current text and index survive only when the text is still a
    /// prefix of the word at the same index; otherwise the engine restarts
    /// from the first word. A running engine is rescheduled from `now_ms`.
    pub fn reconfigure(&mut self, config: TypewriterConfig, now_ms: u64) {
        self.timer.cancel();
        let words_changed = config.words() != self.config.words();
        self.config = config;
        if words_changed {
            let consistent = self
                .config
                .words()
                .get(self.index)
                .is_some_and(|word| word.starts_with(self.text.as_str()));
            if !consistent {
                self.text.clear();
                self.index = 0;
                self.mode = Mode::Typing;
            }
            tracing::debug!(consistent, index = self.index, "typewriter words replaced");
        }
        if self.running {
            self.schedule_from(now_ms);
        }
    }

    /// Apply the pending tick if `token` still identifies it.
    ///
    /// Returns false for stale tokens (cancelled, already fired, or issued
    /// before a restart) and when the engine is stopped.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if !self.running {
            return false;
        }
        match self.timer.take_if_current(token) {
            Some(fired) => {
                self.apply(fired);
                true
            }
            None => false,
        }
    }

    /// Apply every tick due at or before `now_ms`. Each follow-up tick is
    /// scheduled from the deadline of the one that fired, so a late poll
    /// catches up without drifting. Returns the number of ticks applied.
    pub fn poll(&mut self, now_ms: u64) -> usize {
        if !self.running {
            return 0;
        }
        let mut applied = 0;
        while let Some(fired) = self.timer.take_ready(now_ms) {
            self.apply(fired);
            applied += 1;
        }
        applied
    }

    /// Jump straight to the next deadline and fire it. Returns the deadline.
    pub fn fire_next(&mut self) -> Option<u64> {
        if !self.running {
            return None;
        }
        let due = self.timer.deadline()?;
        let fired = self.timer.take_ready(due)?;
        self.apply(fired);
        Some(due)
    }

    fn apply(&mut self, fired: Fired<Step>) {
        match fired.action {
            Step::TypeChar => {
                let typed = self.text.chars().count();
                if let Some(c) = self.target().chars().nth(typed) {
                    self.text.push(c);
                }
            }
            Step::DeleteChar => {
                self.text.pop();
            }
            Step::BeginDeleting => self.mode = Mode::Deleting,
        }
        self.ticks_fired += 1;
        self.schedule_from(fired.due_ms);
    }

    fn schedule_from(&mut self, now_ms: u64) {
        if self.mode == Mode::Deleting && self.text.is_empty() {
            self.mode = Mode::Typing;
            self.index = (self.index + 1) % self.config.words().len();
        }
        let (step, delay) = match self.mode {
            Mode::Typing if self.text == self.target() => {
                (Step::BeginDeleting, self.config.delay_between_words())
            }
            Mode::Typing => (Step::TypeChar, self.config.typing_speed()),
            Mode::Deleting => (Step::DeleteChar, self.config.deleting_speed()),
        };
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.timer.schedule(step, delay_ms, now_ms);
    }
}
