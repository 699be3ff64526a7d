//! Single-slot one-shot timer on a millisecond clock.
//!
//! A [`Timer`] holds at most one pending action. Scheduling replaces whatever
//! was pending, and every schedule or cancel bumps a generation counter so a
//! [`TimerToken`] handed out earlier can never match a later entry.

/// Identifies one scheduling act on a [`Timer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone)]
struct Pending<A> {
    action: A,
    due_ms: u64,
    generation: u64,
}

/// A fired timer entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<A> {
    pub action: A,
    /// Deadline the entry was scheduled for (not the time it was observed).
    pub due_ms: u64,
    pub token: TimerToken,
}

#[derive(Debug, Clone)]
pub struct Timer<A> {
    pending: Option<Pending<A>>,
    generation: u64,
}

impl<A> Default for Timer<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Timer<A> {
    pub const fn new() -> Self {
        Self {
            pending: None,
            generation: 0,
        }
    }

    /// Schedule `action` to fire `delay_ms` after `now_ms`, replacing any
    /// pending entry.
    pub fn schedule(&mut self, action: A, delay_ms: u64, now_ms: u64) -> TimerToken {
        self.generation += 1;
        self.pending = Some(Pending {
            action,
            due_ms: now_ms.saturating_add(delay_ms),
            generation: self.generation,
        });
        TimerToken(self.generation)
    }

    /// Drop the pending entry, if any. Returns its token.
    pub fn cancel(&mut self) -> Option<TimerToken> {
        let cancelled = self.pending.take().map(|p| TimerToken(p.generation));
        self.generation += 1;
        cancelled
    }

    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_ms)
    }

    pub fn token(&self) -> Option<TimerToken> {
        self.pending.as_ref().map(|p| TimerToken(p.generation))
    }

    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Milliseconds until the pending entry is due, 0 if overdue.
    pub fn remaining(&self, now_ms: u64) -> Option<u64> {
        self.deadline().map(|due| due.saturating_sub(now_ms))
    }

    /// Take the pending entry if its deadline has passed.
    pub fn take_ready(&mut self, now_ms: u64) -> Option<Fired<A>> {
        if self.deadline()? > now_ms {
            return None;
        }
        self.take_pending()
    }

    /// Take the pending entry regardless of its deadline, but only if
    /// `token` still identifies it.
    pub fn take_if_current(&mut self, token: TimerToken) -> Option<Fired<A>> {
        if self.token()? != token {
            return None;
        }
        self.take_pending()
    }

    fn take_pending(&mut self) -> Option<Fired<A>> {
        let pending = self.pending.take()?;
        Some(Fired {
            action: pending.action,
            due_ms: pending.due_ms,
            token: TimerToken(pending.generation),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_ready_waits_for_deadline() {
        let mut timer = Timer::new();
        timer.schedule("tick", 100, 1_000);
        assert!(timer.take_ready(1_099).is_none());
        let fired = timer.take_ready(1_100).unwrap();
        assert_eq!(fired.action, "tick");
        assert_eq!(fired.due_ms, 1_100);
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_late_poll_reports_scheduled_deadline() {
        let mut timer = Timer::new();
        timer.schedule((), 10, 0);
        let fired = timer.take_ready(250).unwrap();
        assert_eq!(fired.due_ms, 10);
    }

    #[test]
    fn test_schedule_replaces_pending_entry() {
        let mut timer = Timer::new();
        let first = timer.schedule(1, 50, 0);
        let second = timer.schedule(2, 80, 0);
        assert_ne!(first, second);
        assert_eq!(timer.deadline(), Some(80));
        assert!(timer.take_if_current(first).is_none());
        assert_eq!(timer.take_if_current(second).unwrap().action, 2);
    }

    #[test]
    fn test_cancel_invalidates_token() {
        let mut timer = Timer::new();
        let token = timer.schedule((), 5, 0);
        assert_eq!(timer.cancel(), Some(token));
        assert!(timer.take_ready(u64::MAX).is_none());
        assert!(timer.take_if_current(token).is_none());
        assert_eq!(timer.cancel(), None);
    }

    #[test]
    fn test_tokens_never_repeat_after_fire() {
        let mut timer = Timer::new();
        let first = timer.schedule((), 1, 0);
        timer.take_ready(1).unwrap();
        let second = timer.schedule((), 1, 1);
        assert_ne!(first, second);
        assert!(timer.take_if_current(first).is_none());
    }

    #[test]
    fn test_remaining_saturates_when_overdue() {
        let mut timer = Timer::new();
        assert_eq!(timer.remaining(0), None);
        timer.schedule((), 30, 100);
        assert_eq!(timer.remaining(110), Some(20));
        assert_eq!(timer.remaining(500), Some(0));
    }
}
