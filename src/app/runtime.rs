//! Startup: load the analysis, build the session, run the shell.

use crate::app::config::AppConfig;
use crate::config::AnalysisConfig;
use crate::shell::{HistoryFile, NavigatorShell, Session};
use crate::subprocess::TokioShellExecutor;
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

pub async fn run(config: AppConfig) -> Result<()> {
    let analysis = AnalysisConfig::load(&config.config_path)?;

    let history_path = config
        .history_override
        .clone()
        .map(|path| crate::config::expand_home(&path))
        .unwrap_or_else(|| analysis.history_path());
    debug!("Using history file {}", history_path.display());

    let session = Session::new(
        analysis,
        Arc::new(TokioShellExecutor::default()),
        config.terminal_width,
    );
    let mut shell = NavigatorShell::new(session, HistoryFile::new(history_path))?;
    shell.run().await?;
    Ok(())
}
