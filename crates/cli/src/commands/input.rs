//! Line input for the interactive menu
//!
//! The menu reads every answer through `LineReader`, so tests can feed it a
//! script instead of a terminal.

use std::io::{BufRead, Write};

/// Source of prompted input lines
pub trait LineReader {
    /// Show `prompt` and read one line, trimmed of surrounding whitespace
    ///
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Reads answers from the process's standard input
#[derive(Debug, Default)]
pub struct StdinReader;

impl LineReader for StdinReader {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let mut stdout = std::io::stdout();
        let _ = write!(stdout, "{prompt}");
        let _ = stdout.flush();

        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                tracing::warn!("Failed to read from stdin: {e}");
                None
            }
        }
    }
}
