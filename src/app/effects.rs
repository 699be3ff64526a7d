use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use crate::app::{App, Message, Model, ToastLevel};
use crate::contact::{ContactError, ContactSubmission, FormBackend};
use crate::watcher::ContentWatcher;

/// Sends contact submissions on worker threads and collects their results.
pub(super) struct Submissions {
    backend: Option<Arc<dyn FormBackend>>,
    tx: Sender<Result<(), String>>,
    rx: Receiver<Result<(), String>>,
}

impl Submissions {
    pub(super) fn new(backend: Option<Arc<dyn FormBackend>>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { backend, tx, rx }
    }

    /// Hand `submission` to a worker thread. The outcome arrives through
    /// [`Self::take_finished`].
    pub(super) fn dispatch(&self, submission: ContactSubmission) -> std::io::Result<()> {
        let Some(backend) = self.backend.clone() else {
            let _ = self.tx.send(Err(ContactError::NoEndpoint.to_string()));
            return Ok(());
        };
        let tx = self.tx.clone();
        std::thread::Builder::new()
            .name("contact-submit".to_string())
            .spawn(move || {
                let result = backend.submit(&submission).map_err(|err| err.to_string());
                match &result {
                    Ok(()) => tracing::info!("contact message delivered"),
                    Err(err) => tracing::info!(%err, "contact message failed"),
                }
                let _ = tx.send(result);
            })?;
        crate::perf::log_event("contact.dispatch", "worker spawned");
        Ok(())
    }

    pub(super) fn take_finished(&self) -> Option<Result<(), String>> {
        self.rx.try_recv().ok()
    }
}

pub(super) fn make_content_watcher(path: &Path) -> notify::Result<ContentWatcher> {
    ContentWatcher::new(path, Duration::from_millis(200))
}

impl App {
    pub(super) fn handle_message_side_effects(
        model: &mut Model,
        content_watcher: &mut Option<ContentWatcher>,
        submissions: &Submissions,
        msg: &Message,
        now_ms: u64,
    ) {
        match msg {
            Message::ToggleWatch => {
                if model.watch_enabled {
                    let Some(path) = model.content_path.clone() else {
                        model.watch_enabled = false;
                        model.show_toast(
                            ToastLevel::Warning,
                            "Nothing to watch: using built-in content",
                        );
                        return;
                    };
                    match make_content_watcher(&path) {
                        Ok(watcher) => {
                            *content_watcher = Some(watcher);
                            model.show_toast(ToastLevel::Info, "Watching content file");
                        }
                        Err(err) => {
                            model.watch_enabled = false;
                            *content_watcher = None;
                            model.show_toast(
                                ToastLevel::Warning,
                                format!("Watch unavailable: {err}"),
                            );
                            crate::perf::log_event(
                                "watcher.error",
                                format!("failed path={} err={err}", path.display()),
                            );
                        }
                    }
                } else {
                    *content_watcher = None;
                    model.show_toast(ToastLevel::Info, "Watch disabled");
                }
            }
            Message::ReloadContent | Message::ContentChanged => {
                match model.reload_content(now_ms) {
                    Ok(true) => {
                        if matches!(msg, Message::ReloadContent) {
                            model.show_toast(ToastLevel::Info, "Reloaded");
                        }
                    }
                    Ok(false) => {
                        model.show_toast(ToastLevel::Info, "Using built-in content");
                    }
                    Err(err) => {
                        tracing::info!(error = %err, "content reload failed");
                        model.show_toast(ToastLevel::Error, format!("Reload failed: {err:#}"));
                        crate::perf::log_event("reload.error", format!("{err:#}"));
                    }
                }
            }
            Message::SubmitForm => {
                if let Some(submission) = model.pending_submission.take()
                    && let Err(err) = submissions.dispatch(submission)
                {
                    model.submitting = false;
                    model.show_toast(ToastLevel::Error, format!("Send failed: {err}"));
                    model.relayout();
                }
            }
            _ => {}
        }
    }
}
