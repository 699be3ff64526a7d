use std::time::Duration;

use super::{TypewriterError, positive_millis};
use super::timer::Timer;

/// Cursor blink that flips visibility every `period`.
#[derive(Debug, Clone)]
pub struct Blink {
    period_ms: u64,
    visible: bool,
    timer: Timer<()>,
}

impl Default for Blink {
    fn default() -> Self {
        Self {
            period_ms: 500,
            visible: true,
            timer: Timer::new(),
        }
    }
}

impl Blink {
    /// # Errors
    ///
    /// Returns [`TypewriterError::InvalidConfiguration`] for a zero period or
    /// one that is not a whole number of milliseconds.
    pub fn new(period: Duration) -> Result<Self, TypewriterError> {
        let period_ms = positive_millis(period, "blink period must be positive")?;
        Ok(Self {
            period_ms,
            ..Self::default()
        })
    }

    pub const fn visible(&self) -> bool {
        self.visible
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.timer.deadline()
    }

    pub fn start(&mut self, now_ms: u64) {
        self.visible = true;
        self.timer.schedule((), self.period_ms, now_ms);
    }

    /// Cancel the pending flip and leave the cursor showing.
    pub fn stop(&mut self) {
        self.timer.cancel();
        self.visible = true;
    }

    /// Returns true when visibility changed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let before = self.visible;
        while let Some(fired) = self.timer.take_ready(now_ms) {
            self.visible = !self.visible;
            self.timer.schedule((), self.period_ms, fired.due_ms);
        }
        before != self.visible
    }
}
