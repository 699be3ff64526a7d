use std::time::Duration;

use folio::content::Portfolio;
use folio::typewriter::{Mode, Typewriter, TypewriterConfig};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Poll once per millisecond and record every change of the displayed text.
fn observe(tw: &mut Typewriter, until_ms: u64) -> Vec<(u64, String)> {
    let mut seen = vec![(0, tw.text().to_string())];
    for now in 1..=until_ms {
        if tw.poll(now) > 0 && seen.last().is_some_and(|(_, text)| text != tw.text()) {
            seen.push((now, tw.text().to_string()));
        }
    }
    seen
}

#[test]
fn test_builtin_headline_cycles_developer_and_designer() {
    let portfolio = Portfolio::builtin();
    let config = portfolio
        .typewriter_config(ms(100), ms(50), ms(2000))
        .unwrap();
    let mut tw = Typewriter::new(config);
    tw.start(0);

    // " Developer" is ten characters.
    tw.poll(1000);
    assert_eq!(tw.text(), " Developer");
    assert_eq!(tw.mode(), Mode::Typing);

    // Held for the pause, then deleting starts.
    tw.poll(2999);
    assert_eq!(tw.text(), " Developer");
    tw.poll(3000);
    assert_eq!(tw.mode(), Mode::Deleting);
    assert_eq!(tw.text(), " Developer");

    tw.poll(3500);
    assert_eq!(tw.text(), "");
    tw.poll(3600);
    assert_eq!(tw.text(), " ");
    assert_eq!(tw.target(), " Designer");
}

#[test]
fn test_polling_every_millisecond_matches_the_schedule() {
    let config = TypewriterConfig::new(["Hi", "Yo"], ms(10), ms(5), ms(50)).unwrap();
    let mut tw = Typewriter::new(config);
    tw.start(0);
    let seen = observe(&mut tw, 110);
    let expected: Vec<(u64, String)> = [
        (0, ""),
        (10, "H"),
        (20, "Hi"),
        (75, "H"),
        (80, ""),
        (90, "Y"),
        (100, "Yo"),
    ]
    .into_iter()
    .map(|(at, text)| (at, text.to_string()))
    .collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_late_poll_lands_on_the_same_state() {
    let config = TypewriterConfig::new(["Hi", "Yo"], ms(10), ms(5), ms(50)).unwrap();
    let mut steady = Typewriter::new(config.clone());
    let mut late = Typewriter::new(config);
    steady.start(0);
    late.start(0);

    observe(&mut steady, 95);
    late.poll(95);
    assert_eq!(late.text(), steady.text());
    assert_eq!(late.active_index(), steady.active_index());
    assert_eq!(late.next_deadline(), steady.next_deadline());
}

#[test]
fn test_stopped_engine_never_changes() {
    let config = TypewriterConfig::new(["Hi"], ms(10), ms(5), ms(50)).unwrap();
    let mut tw = Typewriter::new(config);
    tw.start(0);
    tw.poll(10);
    tw.stop();
    assert_eq!(tw.poll(10_000), 0);
    assert_eq!(tw.text(), "H");
    assert_eq!(tw.next_deadline(), None);
}

#[test]
fn test_restart_resumes_from_current_state() {
    let config = TypewriterConfig::new(["Hi"], ms(10), ms(5), ms(50)).unwrap();
    let mut tw = Typewriter::new(config);
    tw.start(0);
    tw.poll(10);
    tw.stop();
    tw.start(500);
    assert_eq!(tw.next_deadline(), Some(510));
    tw.poll(510);
    assert_eq!(tw.text(), "Hi");
}

#[test]
fn test_content_words_drive_the_headline() {
    let json = r#"{ "profile": { "words": ["Rust", "Go"] } }"#;
    let portfolio = Portfolio::from_json(json).unwrap();
    let config = portfolio.typewriter_config(ms(10), ms(5), ms(50)).unwrap();
    let mut tw = Typewriter::new(config);
    tw.start(0);
    tw.poll(40);
    assert_eq!(tw.text(), "Rust");
}
