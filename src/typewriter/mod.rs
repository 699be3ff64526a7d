//! Typewriter text rotation.
//!
//! The hero headline cycles through a list of words: each word is typed one
//! character at a time, held for a pause, deleted one character at a time,
//! and then the next word starts. The engine is a plain state machine with a
//! single pending [`Timer`] entry; whoever owns it (the event loop) calls
//! [`Typewriter::start`] on mount, [`Typewriter::poll`] as time passes and
//! [`Typewriter::stop`] on teardown.
//!
//! ```
//! use std::time::Duration;
//! use folio::typewriter::{Typewriter, TypewriterConfig};
//!
//! let config = TypewriterConfig::new(
//!     ["Cat", "Dog"],
//!     Duration::from_millis(10),
//!     Duration::from_millis(5),
//!     Duration::from_millis(100),
//! )
//! .unwrap();
//! let mut tw = Typewriter::new(config);
//! tw.start(0);
//! tw.poll(30);
//! assert_eq!(tw.text(), "Cat");
//! ```

mod blink;
mod engine;
mod timer;

pub use blink::Blink;
pub use engine::{Mode, Typewriter};
pub use timer::{Fired, Timer, TimerToken};

use std::time::Duration;

/// Errors raised when building a typewriter or its cursor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypewriterError {
    #[error("invalid typewriter configuration: {0}")]
    InvalidConfiguration(&'static str),
}

pub const DEFAULT_TYPING_MS: u64 = 100;
pub const DEFAULT_DELETING_MS: u64 = 50;
pub const DEFAULT_PAUSE_MS: u64 = 2000;

/// Validated word list and tick durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterConfig {
    words: Vec<String>,
    typing_ms: u64,
    deleting_ms: u64,
    pause_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            words: vec![" Developer".to_string(), " Designer".to_string()],
            typing_ms: DEFAULT_TYPING_MS,
            deleting_ms: DEFAULT_DELETING_MS,
            pause_ms: DEFAULT_PAUSE_MS,
        }
    }
}

impl TypewriterConfig {
    /// Build a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TypewriterError::InvalidConfiguration`] when `words` is empty,
    /// any duration is zero, or a duration is not a whole number of
    /// milliseconds.
    pub fn new<I, S>(
        words: I,
        typing_speed: Duration,
        deleting_speed: Duration,
        delay_between_words: Duration,
    ) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(TypewriterError::InvalidConfiguration("word list is empty"));
        }
        Ok(Self {
            words,
            typing_ms: positive_millis(typing_speed, "typing speed must be positive")?,
            deleting_ms: positive_millis(deleting_speed, "deleting speed must be positive")?,
            pause_ms: positive_millis(
                delay_between_words,
                "delay between words must be positive",
            )?,
        })
    }

    /// Same durations, different words.
    ///
    /// # Errors
    ///
    /// Returns [`TypewriterError::InvalidConfiguration`] when `words` is empty.
    pub fn with_words<I, S>(&self, words: I) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            words,
            self.typing_speed(),
            self.deleting_speed(),
            self.delay_between_words(),
        )
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub const fn typing_speed(&self) -> Duration {
        Duration::from_millis(self.typing_ms)
    }

    pub const fn deleting_speed(&self) -> Duration {
        Duration::from_millis(self.deleting_ms)
    }

    pub const fn delay_between_words(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

pub(super) fn positive_millis(
    duration: Duration,
    reason: &'static str,
) -> Result<u64, TypewriterError> {
    if duration.is_zero() {
        return Err(TypewriterError::InvalidConfiguration(reason));
    }
    if duration.subsec_nanos() % 1_000_000 != 0 {
        return Err(TypewriterError::InvalidConfiguration(
            "durations must be whole milliseconds",
        ));
    }
    Ok(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_word_list_is_rejected() {
        let err = TypewriterConfig::new(
            Vec::<String>::new(),
            Duration::from_millis(10),
            Duration::from_millis(10),
            Duration::from_millis(10),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TypewriterError::InvalidConfiguration("word list is empty")
        );
    }

    #[test]
    fn test_zero_durations_are_rejected() {
        let ms = Duration::from_millis;
        assert!(TypewriterConfig::new(["a"], ms(0), ms(1), ms(1)).is_err());
        assert!(TypewriterConfig::new(["a"], ms(1), ms(0), ms(1)).is_err());
        assert!(TypewriterConfig::new(["a"], ms(1), ms(1), ms(0)).is_err());
    }

    #[test]
    fn test_fractional_milliseconds_are_rejected_not_truncated() {
        let ms = Duration::from_millis;
        for fractional in [Duration::from_micros(500), Duration::from_micros(1500)] {
            let err = TypewriterConfig::new(["a"], fractional, ms(1), ms(1)).unwrap_err();
            assert_eq!(
                err,
                TypewriterError::InvalidConfiguration("durations must be whole milliseconds")
            );
            assert!(TypewriterConfig::new(["a"], ms(1), ms(1), fractional).is_err());
        }
    }

    #[test]
    fn test_whole_millisecond_durations_are_kept_exactly() {
        let config = TypewriterConfig::new(
            ["a"],
            Duration::from_micros(2000),
            Duration::from_millis(1),
            Duration::from_secs(3),
        )
        .unwrap();
        assert_eq!(config.typing_speed(), Duration::from_millis(2));
        assert_eq!(config.deleting_speed(), Duration::from_millis(1));
        assert_eq!(config.delay_between_words(), Duration::from_secs(3));
    }

    #[test]
    fn test_default_matches_hero_headline() {
        let config = TypewriterConfig::default();
        assert_eq!(config.words(), [" Developer", " Designer"]);
        assert_eq!(config.typing_speed(), Duration::from_millis(100));
        assert_eq!(config.deleting_speed(), Duration::from_millis(50));
        assert_eq!(config.delay_between_words(), Duration::from_millis(2000));
    }

    #[test]
    fn test_with_words_keeps_durations() {
        let config = TypewriterConfig::default().with_words(["Rust"]).unwrap();
        assert_eq!(config.words(), ["Rust"]);
        assert_eq!(config.typing_speed(), Duration::from_millis(100));
        assert!(TypewriterConfig::default().with_words(Vec::<&str>::new()).is_err());
    }

    #[test]
    fn test_error_message_names_reason() {
        let err = TypewriterError::InvalidConfiguration("word list is empty");
        assert_eq!(
            err.to_string(),
            "invalid typewriter configuration: word list is empty"
        );
    }
}
