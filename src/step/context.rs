use crate::command::{Command, CommandTable, StepCommand};
use crate::config::{AnalysisConfig, StepConfigFile, StepDescriptor};
use crate::error::{NavigatorError, Result};
use crate::subprocess::ShellExecutor;
use std::path::PathBuf;
use std::sync::Arc;

/// The step the shell is currently inside.
#[derive(Debug, Clone)]
pub struct ActiveStep {
    pub descriptor: StepDescriptor,
    pub directory: PathBuf,
    pub config: StepConfigFile,
}

impl ActiveStep {
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

#[derive(Debug, Clone, Default)]
enum StepState {
    #[default]
    Root,
    Active(ActiveStep),
}

/// Result of a successful [`StepContext::switch_step`].
#[derive(Debug)]
pub struct StepSwitch {
    pub step: String,
    /// Step commands that failed validation and were left out.
    pub skipped: Vec<NavigatorError>,
    /// Step commands hidden behind a base command of the same name.
    pub shadowed: Vec<String>,
}

/// Root or one active step. Only `switch_step` and `leave_step` change it.
#[derive(Debug, Default)]
pub struct StepContext {
    state: StepState,
}

impl StepContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        matches!(self.state, StepState::Root)
    }

    pub fn active(&self) -> Option<&ActiveStep> {
        match &self.state {
            StepState::Root => None,
            StepState::Active(step) => Some(step),
        }
    }

    pub fn current_name(&self) -> Option<&str> {
        self.active().map(ActiveStep::name)
    }

    /// Enter `target`, rebuilding the step layer of `table`.
    ///
    /// Nothing is mutated unless the whole switch succeeds: an unknown step,
    /// a step without a path, or an unreadable step config leaves both the
    /// context and the table as they were.
    pub fn switch_step(
        &mut self,
        analysis: &AnalysisConfig,
        target: &str,
        executor: &Arc<dyn ShellExecutor>,
        table: &mut CommandTable,
    ) -> Result<StepSwitch> {
        let descriptor = analysis
            .find_step(target)
            .ok_or_else(|| NavigatorError::UnknownStep(target.to_string()))?;

        let directory = descriptor
            .resolved_path()
            .ok_or_else(|| NavigatorError::StepNotImplemented(target.to_string()))?;

        let config = StepConfigFile::load(&descriptor.name, &directory)?;

        let (descriptors, skipped) = config.commands();
        for error in &skipped {
            tracing::warn!("Skipping step command in '{}': {}", descriptor.name, error);
        }

        let commands: Vec<Arc<dyn Command>> = descriptors
            .into_iter()
            .map(|command| {
                Arc::new(StepCommand::new(command, &directory, Arc::clone(executor)))
                    as Arc<dyn Command>
            })
            .collect();

        let shadowed = table.replace_step(commands);
        self.state = StepState::Active(ActiveStep {
            descriptor: descriptor.clone(),
            directory,
            config,
        });

        tracing::debug!(
            "Switched to step '{}' with {} step commands",
            target,
            table.step_names().len()
        );

        Ok(StepSwitch {
            step: target.to_string(),
            skipped,
            shadowed,
        })
    }

    /// Return to root. Returns `false` when already there, with nothing touched.
    pub fn leave_step(&mut self, table: &mut CommandTable) -> bool {
        let StepState::Active(step) = std::mem::take(&mut self.state) else {
            return false;
        };

        table.clear_step();
        tracing::debug!("Left step '{}'", step.name());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STEP_CONFIG_FILE;
    use crate::subprocess::MockShellExecutor;
    use crate::testing::base_table;
    use std::path::Path;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        analysis: AnalysisConfig,
        executor: Arc<dyn ShellExecutor>,
    }

    fn fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        let qc = dir.path().join("qc");
        std::fs::create_dir(&qc).unwrap();
        std::fs::write(
            qc.join(STEP_CONFIG_FILE),
            r#"
description: Quality control
step_commands:
  - name: run
    shellcommand: ./run.sh
    usage_args: [input]
  - name: broken
    usage_args: []
"#,
        )
        .unwrap();
        let empty = dir.path().join("empty");
        std::fs::create_dir(&empty).unwrap();

        let yaml = format!(
            r#"
name: Test
analysis_steps:
  level1:
    - name: qc
      path: {}
    - name: raw
  level2:
    - name: empty
      path: {}
"#,
            qc.display(),
            empty.display()
        );

        Fixture {
            analysis: AnalysisConfig::parse(&yaml, Path::new("test.yml")).unwrap(),
            _dir: dir,
            executor: Arc::new(MockShellExecutor::new()),
        }
    }

    #[test]
    fn test_initial_state_is_root() {
        let context = StepContext::new();
        assert!(context.is_root());
        assert!(context.current_name().is_none());
    }

    #[test]
    fn test_switch_step_builds_step_layer() {
        let fx = fixture();
        let mut context = StepContext::new();
        let mut table = base_table();

        let switch = context
            .switch_step(&fx.analysis, "qc", &fx.executor, &mut table)
            .unwrap();

        assert_eq!(switch.step, "qc");
        assert_eq!(switch.skipped.len(), 1);
        assert!(switch.shadowed.is_empty());
        assert_eq!(context.current_name(), Some("qc"));
        assert_eq!(context.active().unwrap().config.description, "Quality control");
        assert_eq!(table.step_names(), vec!["run"]);
    }

    #[test]
    fn test_unknown_step_changes_nothing() {
        let fx = fixture();
        let mut context = StepContext::new();
        let mut table = base_table();

        let err = context
            .switch_step(&fx.analysis, "nope", &fx.executor, &mut table)
            .unwrap_err();

        assert!(matches!(err, NavigatorError::UnknownStep(ref name) if name == "nope"));
        assert!(context.is_root());
        assert!(!table.has_step_commands());
    }

    #[test]
    fn test_step_without_path_is_not_implemented() {
        let fx = fixture();
        let mut context = StepContext::new();
        let mut table = base_table();
        context
            .switch_step(&fx.analysis, "qc", &fx.executor, &mut table)
            .unwrap();

        let err = context
            .switch_step(&fx.analysis, "raw", &fx.executor, &mut table)
            .unwrap_err();

        assert!(matches!(err, NavigatorError::StepNotImplemented(_)));
        assert_eq!(context.current_name(), Some("qc"));
        assert_eq!(table.step_names(), vec!["run"]);
    }

    #[test]
    fn test_missing_step_config_keeps_prior_context() {
        let fx = fixture();
        let mut context = StepContext::new();
        let mut table = base_table();
        context
            .switch_step(&fx.analysis, "qc", &fx.executor, &mut table)
            .unwrap();

        let err = context
            .switch_step(&fx.analysis, "empty", &fx.executor, &mut table)
            .unwrap_err();

        assert!(matches!(err, NavigatorError::StepConfigLoad { ref step, .. } if step == "empty"));
        assert_eq!(context.current_name(), Some("qc"));
        assert_eq!(table.step_names(), vec!["run"]);
    }

    #[test]
    fn test_leave_step() {
        let fx = fixture();
        let mut context = StepContext::new();
        let mut table = base_table();
        context
            .switch_step(&fx.analysis, "qc", &fx.executor, &mut table)
            .unwrap();

        assert!(context.leave_step(&mut table));
        assert!(context.is_root());
        assert!(!table.has_step_commands());

        let before = table.names().join(",");
        assert!(!context.leave_step(&mut table));
        assert!(!context.leave_step(&mut table));
        assert_eq!(table.names().join(","), before);
        assert!(context.is_root());
    }
}
