use rustyline::history::History;
use rustyline::Config;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Editor settings for an unbounded history that keeps repeated lines.
pub fn history_config() -> rustyline::Result<Config> {
    Ok(Config::builder()
        .max_history_size(usize::MAX)?
        .history_ignore_dups(false)?
        .build())
}

/// The on-disk command history. Failures to read or write it are logged and
/// never interrupt the session.
#[derive(Debug, Clone)]
pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load previous entries. A missing file is a fresh history.
    pub fn load<H: History>(&self, history: &mut H) {
        if !self.path.exists() {
            debug!("No history file at {}", self.path.display());
            return;
        }
        if let Err(e) = history.load(&self.path) {
            warn!("Could not read history file {}: {}", self.path.display(), e);
        }
    }

    /// Remember an accepted line and write the history back out.
    pub fn record<H: History>(&self, history: &mut H, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if let Err(e) = history.add(line) {
            warn!("Could not add history entry: {}", e);
            return;
        }
        self.persist(history);
    }

    pub fn persist<H: History>(&self, history: &mut H) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!("Could not create {}: {}", parent.display(), e);
                    return;
                }
            }
        }
        if let Err(e) = history.save(&self.path) {
            warn!("Could not write history file {}: {}", self.path.display(), e);
        }
    }
}
