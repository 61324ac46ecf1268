//! Testing utilities and fixtures
//!
//! Sessions wired to a [`MockShellExecutor`] so command dispatch can be
//! exercised without a terminal or real processes.

use crate::command::CommandTable;
use crate::config::{AnalysisConfig, STEP_CONFIG_FILE};
use crate::shell::{builtins, Session};
use crate::subprocess::MockShellExecutor;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Box width used by test sessions.
pub const TEST_WIDTH: usize = 80;

/// Step config written for the `qc` fixture step.
pub const QC_STEP_CONFIG: &str = r#"
description: Quality control checks.
step_commands:
  - name: run
    shellcommand: ./run.sh
    usage_args: [input]
  - name: broken
    usage_args: []
"#;

/// A table holding only the base commands.
pub fn base_table() -> CommandTable {
    CommandTable::new(builtins::base_commands())
}

/// Session over `analysis`, returning the mock its step commands run on.
pub fn session_for(analysis: AnalysisConfig) -> (Session, MockShellExecutor) {
    let executor = MockShellExecutor::new();
    let session = Session::new(analysis, Arc::new(executor.clone()), TEST_WIDTH);
    (session, executor)
}

/// Session over an analysis without any steps.
pub fn test_session() -> (Session, MockShellExecutor) {
    let analysis = AnalysisConfig::parse("name: Test analysis\n", Path::new("test.yml"))
        .expect("minimal analysis config");
    session_for(analysis)
}

/// Session over a two-level analysis in a temporary directory:
///
/// - `level1`: `qc` (implemented, with [`QC_STEP_CONFIG`]) and `raw` (no path)
/// - `level2`: `empty` (has a path but no step config file)
///
/// The directory lives as long as the returned [`TempDir`].
pub fn analysis_with_steps() -> (Session, MockShellExecutor, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let qc = dir.path().join("qc");
    let empty = dir.path().join("empty");
    std::fs::create_dir(&qc).expect("qc dir");
    std::fs::create_dir(&empty).expect("empty dir");
    std::fs::write(qc.join(STEP_CONFIG_FILE), QC_STEP_CONFIG).expect("qc step config");

    let yaml = format!(
        "name: Test analysis\n\
         analysis_steps:\n  \
           level1:\n    \
             - name: qc\n      \
               path: {}\n    \
             - name: raw\n  \
           level2:\n    \
             - name: empty\n      \
               path: {}\n",
        qc.display(),
        empty.display()
    );
    let analysis =
        AnalysisConfig::parse(&yaml, &dir.path().join("analysis.yml")).expect("analysis config");

    let (session, executor) = session_for(analysis);
    (session, executor, dir)
}
