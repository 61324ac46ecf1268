//! Application configuration
//!
//! Settings that come from the command line and the terminal rather than
//! from the analysis config file.

use crate::cli::Cli;
use std::path::PathBuf;

/// Box width when no terminal size can be determined.
pub const FALLBACK_WIDTH: usize = 80;
/// Boxes never grow wider than this.
pub const MAX_WIDTH: usize = 120;
/// Boxes never shrink below this.
pub const MIN_WIDTH: usize = 20;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Analysis config file
    pub config_path: PathBuf,
    /// History file given on the command line
    pub history_override: Option<PathBuf>,
    /// Width of rendered boxes
    pub terminal_width: usize,
}

impl AppConfig {
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            verbose: 0,
            config_path,
            history_override: None,
            terminal_width: detect_terminal_width(),
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose,
            history_override: cli.history_file.clone(),
            ..Self::new(cli.config.clone())
        }
    }

    pub fn with_terminal_width(mut self, width: usize) -> Self {
        self.terminal_width = clamp_width(width);
        self
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

pub fn clamp_width(columns: usize) -> usize {
    columns.clamp(MIN_WIDTH, MAX_WIDTH)
}

/// Current terminal width, or [`FALLBACK_WIDTH`] when stdout is not a terminal.
pub fn detect_terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((columns, _)) if columns > 0 => clamp_width(usize::from(columns)),
        _ => FALLBACK_WIDTH,
    }
}
