use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{expand_home, DEFAULT_HISTORY_FILE};
use crate::error::{NavigatorError, Result};

/// One stage of the analysis pipeline as declared in the analysis config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDescriptor {
    pub name: String,
    /// Where the step's tooling lives. `None` means the step is not implemented yet.
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub description: Option<String>,
}

impl StepDescriptor {
    pub fn is_implemented(&self) -> bool {
        self.path.is_some()
    }

    /// The step directory with `~` expanded.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.as_deref().map(expand_home)
    }
}

/// The analysis config file, loaded once per process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub name: String,
    #[serde(default)]
    pub history_file: Option<PathBuf>,
    /// Level name to the ordered steps of that level.
    #[serde(default)]
    pub analysis_steps: IndexMap<String, Vec<StepDescriptor>>,
    /// The document as written, unknown keys included.
    #[serde(skip)]
    raw: serde_yaml::Value,
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| NavigatorError::ConfigLoad {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        let config = Self::parse(&content, path)?;
        tracing::debug!(
            "Loaded analysis '{}' with {} steps from {}",
            config.name,
            config.steps().count(),
            path.display()
        );
        Ok(config)
    }

    /// Parse a config document; `source` only feeds error messages.
    pub fn parse(content: &str, source: &Path) -> Result<Self> {
        let load_error = |e: serde_yaml::Error| NavigatorError::ConfigLoad {
            path: source.to_path_buf(),
            source: Box::new(e),
        };

        let raw: serde_yaml::Value = serde_yaml::from_str(content).map_err(load_error)?;
        let mut config: Self = serde_yaml::from_value(raw.clone()).map_err(load_error)?;
        config.raw = raw;
        Ok(config)
    }

    pub fn raw(&self) -> &serde_yaml::Value {
        &self.raw
    }

    pub fn history_path(&self) -> PathBuf {
        let path = self
            .history_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE));
        expand_home(&path)
    }

    /// All steps across all levels, in declaration order.
    pub fn steps(&self) -> impl Iterator<Item = &StepDescriptor> {
        self.analysis_steps.values().flatten()
    }

    /// First step with exactly this name. Duplicate names are not detected.
    pub fn find_step(&self, name: &str) -> Option<&StepDescriptor> {
        self.steps().find(|step| step.name == name)
    }

    pub fn step_names(&self) -> Vec<String> {
        self.steps().map(|step| step.name.clone()).collect()
    }
}
