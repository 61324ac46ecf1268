//! Analysis and step configuration files.
//!
//! The analysis config is read once at startup. Step config files are read
//! every time a step is entered.

use std::path::{Path, PathBuf};

pub mod analysis;
pub mod step;

pub use analysis::{AnalysisConfig, StepDescriptor};
pub use step::{StepCommandDescriptor, StepConfigFile, STEP_CONFIG_FILE};

/// History file used when the analysis config does not name one.
pub const DEFAULT_HISTORY_FILE: &str = "~/.navigator_history";

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or when no home directory can be determined,
/// are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
