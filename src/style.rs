//! ANSI color styling
//!
//! Styling can be switched off process-wide (for pipes, `NO_COLOR`, dumb
//! terminals). Code that needs deterministic output can carry its own
//! [`Styler`] instead of reading the process-wide toggle.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::canvas::Color;

static COLORS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Enable or disable styling for the whole process
pub fn set_colors_enabled(enabled: bool) {
    COLORS_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether styling is enabled for the process
pub fn colors_enabled() -> bool {
    COLORS_ENABLED.load(Ordering::Relaxed)
}

/// Wrap `text` in the escape for `color`, honoring the process-wide toggle
pub fn style(text: &str, color: Option<Color>) -> String {
    Styler::current().paint(text, color)
}

/// Styling decision captured as a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Styler that never emits escapes
    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// Snapshot of the process-wide toggle
    pub fn current() -> Self {
        Self::new(colors_enabled())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wrap `text` with the escape for `color` and a reset
    pub fn paint(&self, text: &str, color: Option<Color>) -> String {
        match color {
            Some(color) if self.enabled => color.to_ansi().paint(text).to_string(),
            _ => text.to_string(),
        }
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::current()
    }
}
