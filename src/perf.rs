//! Startup timing and the optional debug event log.
//!
//! `--perf` prints [`scope`] timings to stderr. `--render-debug-log PATH`
//! appends every [`log_event`] to a file with a millisecond timestamp, which
//! is the only way to see what the loop does while the terminal is in raw
//! mode.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);
static DEBUG_LOG: LazyLock<Mutex<DebugLog>> = LazyLock::new(|| Mutex::new(DebugLog::new()));

#[derive(Debug)]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        log_event("perf.scope", format!("{} {elapsed_ms:.2} ms", self.name));
        if is_enabled() {
            eprintln!("[perf] {}: {:.2} ms", self.name, elapsed_ms);
        }
    }
}

#[derive(Debug)]
struct DebugLog {
    start: Instant,
    writer: Option<BufWriter<File>>,
}

impl DebugLog {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            writer: None,
        }
    }
}

pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

/// Start (or with `None`, stop) writing debug events to `path`.
pub fn set_debug_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let mut log = DEBUG_LOG.lock().expect("debug log lock poisoned");
    log.writer = None;
    if let Some(path) = path {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "folio debug log start")?;
        writer.flush()?;
        log.start = Instant::now();
        log.writer = Some(writer);
    }
    Ok(())
}

pub fn is_debug_log_enabled() -> bool {
    DEBUG_LOG
        .lock()
        .expect("debug log lock poisoned")
        .writer
        .is_some()
}

pub fn log_event(name: &str, detail: impl AsRef<str>) {
    let mut log = DEBUG_LOG.lock().expect("debug log lock poisoned");
    let elapsed_ms = log.start.elapsed().as_secs_f64() * 1000.0;
    if let Some(writer) = log.writer.as_mut() {
        let _ = writeln!(writer, "[{elapsed_ms:>10.3} ms] {name}: {}", detail.as_ref());
        let _ = writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_set_enabled_toggles_runtime_flag() {
        set_enabled(true);
        assert!(is_enabled());

        set_enabled(false);
        assert!(!is_enabled());
    }

    #[test]
    fn test_debug_log_records_events_and_scopes() {
        let temp_file = NamedTempFile::new().unwrap();
        set_debug_log_path(Some(temp_file.path())).unwrap();
        assert!(is_debug_log_enabled());
        log_event("typewriter.tick", "text=Dev");
        drop(scope("startup"));
        set_debug_log_path(None).unwrap();
        assert!(!is_debug_log_enabled());

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.starts_with("folio debug log start"));
        assert!(content.contains("typewriter.tick: text=Dev"));
        assert!(content.contains("perf.scope: startup"));
    }
}
