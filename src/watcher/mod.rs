//! Live reload of the portfolio content file.
//!
//! The parent directory is watched (editors often replace files instead of
//! writing in place) and events are filtered down to the content file, then
//! debounced so a burst of writes produces one reload.
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

pub struct ContentWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    watch_root: PathBuf,
    target_path: PathBuf,
    target_name: Option<OsString>,
    debounce: Duration,
    pending_since: Option<Instant>,
}

impl ContentWatcher {
    /// Watch `path` for changes.
    ///
    /// # Errors
    /// Returns an error if the platform watcher cannot be created or the
    /// parent directory cannot be watched.
    pub fn new(path: impl AsRef<Path>, debounce: Duration) -> notify::Result<Self> {
        // OS events carry canonical paths.
        let target_path = path
            .as_ref()
            .canonicalize()
            .unwrap_or_else(|_| path.as_ref().to_path_buf());
        let target_name = target_path.file_name().map(std::ffi::OsStr::to_os_string);
        let watch_root = watch_root_for(&target_path);

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;
        watcher.watch(&watch_root, RecursiveMode::NonRecursive)?;
        tracing::debug!(path = %target_path.display(), "watching content file");

        Ok(Self {
            _watcher: watcher,
            rx,
            watch_root,
            target_path,
            target_name,
            debounce,
            pending_since: None,
        })
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Drain pending events; true once a change has settled for the
    /// debounce interval.
    pub fn take_change_ready(&mut self) -> bool {
        let mut relevant = 0u32;
        while let Ok(event) = self.rx.try_recv() {
            match event {
                Ok(ev) if self.is_relevant(&ev) => relevant += 1,
                Ok(_) => {}
                Err(err) => crate::perf::log_event("watcher.error", err.to_string()),
            }
        }
        if relevant > 0 {
            crate::perf::log_event(
                "watcher.change",
                format!("events={relevant} path={}", self.target_path.display()),
            );
            self.pending_since = Some(Instant::now());
        }

        match self.pending_since {
            Some(since) if since.elapsed() >= self.debounce => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }

    fn is_relevant(&self, event: &Event) -> bool {
        event.paths.iter().any(|path| {
            path == &self.watch_root
                || path == &self.target_path
                || self
                    .target_name
                    .as_ref()
                    .is_some_and(|name| path.file_name().is_some_and(|f| f == name))
        })
    }
}

fn watch_root_for(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::EventKind;
    use tempfile::tempdir;

    fn event(paths: Vec<PathBuf>) -> Event {
        Event {
            kind: EventKind::Any,
            paths,
            attrs: notify::event::EventAttributes::new(),
        }
    }

    #[test]
    fn test_sibling_file_events_are_ignored() {
        let dir = tempdir().expect("tempdir");
        let root = dir.path().canonicalize().expect("canonicalize");
        let path = root.join("content.json");
        std::fs::write(&path, "{}").expect("write");
        let watcher = ContentWatcher::new(&path, Duration::from_millis(10)).expect("watcher");

        assert!(watcher.is_relevant(&event(vec![path.clone()])));
        assert!(watcher.is_relevant(&event(vec![root.clone()])));
        assert!(!watcher.is_relevant(&event(vec![root.join("notes.txt")])));
    }

    #[test]
    fn test_watch_root_for_bare_file_name_is_dot() {
        assert_eq!(watch_root_for(Path::new("content.json")), PathBuf::from("."));
    }

    #[test]
    fn test_content_rewrite_is_detected() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().canonicalize().expect("canonicalize").join("content.json");
        std::fs::write(&path, "{}").expect("write");
        let mut watcher = ContentWatcher::new(&path, Duration::from_millis(50)).expect("watcher");

        // Let the backend register the watch.
        std::thread::sleep(Duration::from_millis(500));
        std::fs::write(&path, r#"{"profile": {"words": ["Writer"]}}"#).expect("write");

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut detected = false;
        while Instant::now() < deadline {
            if watcher.take_change_ready() {
                detected = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        assert!(detected, "content rewrite should be reported within 5 seconds");
    }
}
