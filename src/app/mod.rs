//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::contact::{FormBackend, HttpFormBackend};
use crate::content::Portfolio;
use crate::typewriter::{DEFAULT_DELETING_MS, DEFAULT_PAUSE_MS, DEFAULT_TYPING_MS};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    content_path: Option<PathBuf>,
    watch_enabled: bool,
    typing_speed: Duration,
    deleting_speed: Duration,
    delay_between_words: Duration,
    endpoint: Option<String>,
    backend: Option<Arc<dyn FormBackend>>,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create an application showing the built-in content.
    pub const fn new() -> Self {
        Self {
            content_path: None,
            watch_enabled: false,
            typing_speed: Duration::from_millis(DEFAULT_TYPING_MS),
            deleting_speed: Duration::from_millis(DEFAULT_DELETING_MS),
            delay_between_words: Duration::from_millis(DEFAULT_PAUSE_MS),
            endpoint: None,
            backend: None,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Load content from a JSON file instead of the built-in content.
    #[must_use]
    pub fn with_content(mut self, path: Option<PathBuf>) -> Self {
        self.content_path = path;
        self
    }

    /// Enable or disable content file watching.
    #[must_use]
    pub const fn with_watch(mut self, enabled: bool) -> Self {
        self.watch_enabled = enabled;
        self
    }

    /// Set the typewriter timings.
    #[must_use]
    pub const fn with_timings(
        mut self,
        typing_speed: Duration,
        deleting_speed: Duration,
        delay_between_words: Duration,
    ) -> Self {
        self.typing_speed = typing_speed;
        self.deleting_speed = deleting_speed;
        self.delay_between_words = delay_between_words;
        self
    }

    /// Post contact form submissions to `endpoint`.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Deliver contact form submissions through `backend` instead of HTTP.
    #[must_use]
    pub fn with_backend(mut self, backend: Arc<dyn FormBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set config paths to show in help.
    #[must_use]
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }

    /// Load the content and build the initial model.
    ///
    /// # Errors
    ///
    /// Returns an error if the content file cannot be loaded or the timings
    /// or words are invalid.
    pub fn build_model(&self, terminal_size: (u16, u16)) -> Result<Model> {
        let portfolio = match &self.content_path {
            Some(path) => Portfolio::load(path)?,
            None => Portfolio::builtin(),
        };
        let config = portfolio
            .typewriter_config(
                self.typing_speed,
                self.deleting_speed,
                self.delay_between_words,
            )
            .context("Invalid typewriter settings")?;

        let mut model = Model::new(portfolio, config, terminal_size);
        model.content_path.clone_from(&self.content_path);
        model.watch_enabled = self.watch_enabled;
        model.endpoint = self
            .endpoint
            .clone()
            .or_else(|| self.backend.as_ref().map(|_| "<custom>".to_string()));
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        Ok(model)
    }

    fn form_backend(&self) -> Result<Option<Arc<dyn FormBackend>>> {
        if let Some(backend) = &self.backend {
            return Ok(Some(Arc::clone(backend)));
        }
        let Some(endpoint) = &self.endpoint else {
            return Ok(None);
        };
        let backend = HttpFormBackend::new(endpoint.clone())
            .context("Failed to set up the contact form client")?;
        Ok(Some(Arc::new(backend)))
    }
}
