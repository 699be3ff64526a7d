// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. typewriter::TypewriterConfig)
    clippy::module_name_repetitions
)]

//! # Folio
//!
//! A personal portfolio that lives in the terminal.
//!
//! Folio renders a single scrolling page with:
//! - A hero headline that types, pauses on, and deletes a rotating list of roles
//! - About, services, projects, blog and news sections
//! - Expandable tech stack panels
//! - A contact form posted to a hosted form endpoint
//! - File watching for live content editing
//!
//! ## Architecture
//!
//! Folio uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`typewriter`]: Text rotation engine and cursor blink
//! - [`content`]: Portfolio content model and loading
//! - [`contact`]: Contact form state, validation and delivery
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved default flags
//! - [`watcher`]: Content file watching
//! - [`perf`]: Startup timing and render debug log

pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod perf;
pub mod typewriter;
pub mod ui;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::content::Portfolio;
    pub use crate::typewriter::{Typewriter, TypewriterConfig};
    pub use crate::ui::viewport::Viewport;
}
