//! Terminal UI components.
//!
//! - [`page`]: Composition of the portfolio into one scrollable page
//! - [`viewport`]: Scroll position and visible range management
//! - [`style`]: Colors

pub mod page;
pub mod style;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use render::{PAGE_TOP, nav_tab_at, nav_tabs, render};
