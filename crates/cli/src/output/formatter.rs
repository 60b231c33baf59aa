//! Output formatter for the interactive menu
//!
//! Ensures consistent success, error and warning lines across all actions.

use console::style;

use super::OutputConfig;

/// Formatter for CLI output
#[derive(Debug, Clone)]
pub struct Formatter {
    config: OutputConfig,
}

impl Formatter {
    /// Create a new formatter with the given configuration
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Check if colors are enabled
    pub fn colors_enabled(&self) -> bool {
        self.config.color
    }

    /// Get the output configuration
    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Output a success message
    pub fn success(&self, message: &str) {
        println!(
            "{} {message}",
            style("✓").green().force_styling(self.colors_enabled())
        );
    }

    /// Output an error message
    pub fn error(&self, message: &str) {
        eprintln!(
            "{} {message}",
            style("✗").red().force_styling(self.colors_enabled())
        );
    }

    /// Output a warning message
    pub fn warning(&self, message: &str) {
        eprintln!(
            "{} {message}",
            style("⚠").yellow().force_styling(self.colors_enabled())
        );
    }

    /// Output a bold heading line
    pub fn heading(&self, message: &str) {
        println!("{}", style(message).bold().force_styling(self.colors_enabled()));
    }

    /// Print a line of text
    pub fn println(&self, message: &str) {
        println!("{message}");
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(OutputConfig::default())
    }
}
