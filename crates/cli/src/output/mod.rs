//! Output formatting utilities
//!
//! This module provides the formatter used for all user-facing lines and
//! the spinner shown while transfers run.

mod formatter;
mod progress;

pub use formatter::Formatter;
pub use progress::ProgressBar;

/// Output configuration derived from CLI flags and the config file
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Emit ANSI colours
    pub color: bool,
    /// Show spinners
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            progress: true,
        }
    }
}
