//! Benchmarks for the typewriter engine.

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use folio::typewriter::{Typewriter, TypewriterConfig};

fn bench_fire_full_cycle(c: &mut Criterion) {
    let config = TypewriterConfig::new(
        [" Developer", " Designer"],
        Duration::from_millis(100),
        Duration::from_millis(50),
        Duration::from_millis(2000),
    )
    .unwrap();
    c.bench_function("fire_full_cycle", |b| {
        b.iter(|| {
            let mut tw = Typewriter::new(config.clone());
            tw.start(0);
            for _ in 0..42 {
                black_box(tw.fire_next());
            }
        });
    });
}

fn bench_late_poll(c: &mut Criterion) {
    let config = TypewriterConfig::default();
    c.bench_function("late_poll_one_minute", |b| {
        b.iter(|| {
            let mut tw = Typewriter::new(config.clone());
            tw.start(0);
            tw.poll(black_box(60_000))
        });
    });
}

criterion_group!(benches, bench_fire_full_cycle, bench_late_poll);
criterion_main!(benches);
