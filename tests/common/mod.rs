//! Shared fixtures for integration tests
#![allow(dead_code)]

use navigator::config::{AnalysisConfig, STEP_CONFIG_FILE};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builds an analysis config and its step directories inside a temp dir.
pub struct PipelineFixture {
    pub dir: TempDir,
    levels: Vec<(String, Vec<String>)>,
}

impl PipelineFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
            levels: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn step_dir(&self, name: &str) -> PathBuf {
        self.dir.path().join("steps").join(name)
    }

    fn push(&mut self, level: &str, entry: String) {
        match self.levels.iter_mut().find(|(name, _)| name == level) {
            Some((_, entries)) => entries.push(entry),
            None => self.levels.push((level.to_string(), vec![entry])),
        }
    }

    /// A step with a directory holding `step_config` as its stepconfig.yml.
    pub fn step(mut self, level: &str, name: &str, step_config: &str) -> Self {
        let dir = self.step_dir(name);
        std::fs::create_dir_all(&dir).expect("step dir");
        std::fs::write(dir.join(STEP_CONFIG_FILE), step_config).expect("step config");
        self.push(
            level,
            format!("    - name: {name}\n      path: {}\n", dir.display()),
        );
        self
    }

    /// A step with a directory but no stepconfig.yml.
    pub fn step_without_config(mut self, level: &str, name: &str) -> Self {
        let dir = self.step_dir(name);
        std::fs::create_dir_all(&dir).expect("step dir");
        self.push(
            level,
            format!("    - name: {name}\n      path: {}\n", dir.display()),
        );
        self
    }

    /// A step without a path.
    pub fn unimplemented_step(mut self, level: &str, name: &str) -> Self {
        self.push(level, format!("    - name: {name}\n"));
        self
    }

    pub fn yaml(&self) -> String {
        let mut yaml = String::from("name: Fixture analysis\nanalysis_steps:\n");
        for (level, entries) in &self.levels {
            yaml.push_str(&format!("  {level}:\n"));
            for entry in entries {
                yaml.push_str(entry);
            }
        }
        yaml
    }

    /// Write the analysis config and return its path.
    pub fn write(&self) -> PathBuf {
        let path = self.dir.path().join("analysis.yml");
        std::fs::write(&path, self.yaml()).expect("analysis config");
        path
    }

    pub fn load(&self) -> AnalysisConfig {
        AnalysisConfig::load(&self.write()).expect("load analysis config")
    }
}

/// A step config with a single command.
pub fn single_command(name: &str, shellcommand: &str, usage_args: &[&str]) -> String {
    format!(
        "description: Generated step\nstep_commands:\n  - name: {name}\n    shellcommand: \"{shellcommand}\"\n    usage_args: [{}]\n",
        usage_args.join(", ")
    )
}
