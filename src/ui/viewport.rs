//! The visible window onto the page.
//!
//! ```
//! use folio::ui::viewport::Viewport;
//!
//! let mut vp = Viewport::new(80, 20, 100);
//! assert_eq!(vp.visible_range(), 0..20);
//!
//! // Smooth scrolling covers a quarter of the remaining distance per step.
//! assert!(vp.step_toward(40));
//! assert_eq!(vp.offset(), 10);
//! ```

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24, 0)
    }
}

impl Viewport {
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_lines,
        }
    }

    /// First visible page line.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.height as usize).min(self.total_lines);
        self.offset.min(end)..end
    }

    /// How far down the page we are, 0-100. A page that fits counts as 100.
    pub fn scroll_percent(&self) -> u8 {
        let max_offset = self.max_offset();
        if max_offset == 0 {
            return 100;
        }
        // Bounded by 0..=100
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        {
            ((self.offset as f64 / max_offset as f64) * 100.0).round() as u8
        }
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub const fn page_up(&mut self) {
        self.scroll_up(self.height as usize);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height as usize);
    }

    pub const fn half_page_up(&mut self) {
        self.scroll_up(self.height as usize / 2);
    }

    pub fn half_page_down(&mut self) {
        self.scroll_down(self.height as usize / 2);
    }

    pub const fn go_to_top(&mut self) {
        self.offset = 0;
    }

    pub const fn go_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Put `line` at the top of the window, as far as the page allows.
    pub fn go_to_line(&mut self, line: usize) {
        self.offset = line.min(self.max_offset());
    }

    /// Offset that `go_to_line(line)` would land on.
    pub fn clamp_target(&self, line: usize) -> usize {
        line.min(self.max_offset())
    }

    /// Move one smooth-scroll step toward `target`: a quarter of the remaining
    /// distance, at least one line. Returns false once the offset has arrived.
    pub fn step_toward(&mut self, target: usize) -> bool {
        let target = self.clamp_target(target);
        let remaining = target.abs_diff(self.offset);
        if remaining == 0 {
            return false;
        }
        let step = (remaining / 4).max(1);
        if target > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        true
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the page length after a relayout.
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}
