use super::builtins;
use super::render::{self, grey, orange, BoxLine};
use crate::command::{tokenize, CommandOutput, CommandTable, Notice, ParsedLine};
use crate::config::AnalysisConfig;
use crate::error::{NavigatorError, Result};
use crate::step::StepContext;
use crate::subprocess::ShellExecutor;
use colored::Colorize;
use std::sync::Arc;

/// Prompt label while no step is active.
pub const ROOT_PROMPT: &str = "navigator";

const COMMAND_HELP_HINT: &str =
    "If you need help with a specific command, type \"<command> help\".";

/// All mutable shell state: the loaded analysis, the step context and the
/// command table derived from it.
pub struct Session {
    analysis: AnalysisConfig,
    context: StepContext,
    commands: CommandTable,
    executor: Arc<dyn ShellExecutor>,
    width: usize,
}

impl Session {
    pub fn new(analysis: AnalysisConfig, executor: Arc<dyn ShellExecutor>, width: usize) -> Self {
        Self {
            analysis,
            context: StepContext::new(),
            commands: CommandTable::new(builtins::base_commands()),
            executor,
            width,
        }
    }

    pub fn analysis(&self) -> &AnalysisConfig {
        &self.analysis
    }

    pub fn context(&self) -> &StepContext {
        &self.context
    }

    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    pub fn prompt(&self) -> String {
        format!("{}> ", self.context.current_name().unwrap_or(ROOT_PROMPT))
    }

    /// Resolve one input line and run it to completion.
    pub async fn dispatch(&mut self, line: &str) -> Result<CommandOutput> {
        let (name, args) = match tokenize(line) {
            ParsedLine::Empty => return Ok(CommandOutput::none()),
            ParsedLine::Command { name, args } => (name, args),
        };

        let command = self
            .commands
            .resolve(&name)
            .ok_or_else(|| NavigatorError::UnknownCommand(name.clone()))?;

        command.execute(self, &args).await
    }

    pub fn switch_step(&mut self, target: &str) -> Result<CommandOutput> {
        let switch = self.context.switch_step(
            &self.analysis,
            target,
            &self.executor,
            &mut self.commands,
        )?;

        let mut output = CommandOutput::none();
        for skipped in &switch.skipped {
            output = output.with_notice(Notice::Warning(skipped.to_string()));
        }
        for name in &switch.shadowed {
            output = output.with_notice(Notice::Warning(format!(
                "Step command \"{name}\" is hidden by the navigator command of the same name"
            )));
        }
        Ok(output.with_notice(Notice::Info(format!(
            "Switched to step: {}",
            switch.step
        ))))
    }

    pub fn leave_step(&mut self) -> CommandOutput {
        if self.context.leave_step(&mut self.commands) {
            CommandOutput::info("Left the current step")
        } else {
            CommandOutput::info("No active step to leave.")
        }
    }

    fn step_overview(&self) -> Vec<BoxLine> {
        let mut lines = vec![BoxLine::left(
            "The analysis consists of the following steps:",
        )];

        for (level, steps) in &self.analysis.analysis_steps {
            let names: Vec<String> = steps
                .iter()
                .map(|step| {
                    if step.is_implemented() {
                        step.name.yellow().to_string()
                    } else {
                        grey(&step.name).to_string()
                    }
                })
                .collect();
            lines.push(BoxLine::left(format!("  {level}: {}", names.join("   "))));
        }
        lines
    }

    fn command_overview(&self) -> Vec<BoxLine> {
        let inner = self.width.saturating_sub(4);
        let mut lines = vec![BoxLine::left("Available commands:")];

        let step_names = self.commands.step_names().join("   ");
        if !step_names.is_empty() {
            for line in render::wrap_indented(&step_names, inner, "  ") {
                lines.push(BoxLine::left(line.yellow().to_string()));
            }
        }

        let base_names = self.commands.base_names().join("   ");
        for line in render::wrap_indented(&base_names, inner, "  ") {
            lines.push(BoxLine::left(orange(&line).to_string()));
        }
        lines
    }

    pub fn welcome_text(&self) -> String {
        let mut lines = vec![
            BoxLine::center("Welcome to the Navigator!"),
            BoxLine::center(format!("Analysis: {}", self.analysis.name)),
            BoxLine::blank(),
        ];
        lines.extend(self.step_overview());
        render::boxed(&lines, self.width)
    }

    pub fn help_text(&self) -> String {
        let mut lines = match self.context.active() {
            None => {
                let mut lines = vec![
                    BoxLine::center(format!("Analysis: {}", self.analysis.name)),
                    BoxLine::blank(),
                ];
                lines.extend(self.step_overview());
                lines
            }
            Some(step) => {
                let mut lines = vec![
                    BoxLine::center(format!("Step: {}", step.name())),
                    BoxLine::blank(),
                ];
                lines.extend(step.config.description.lines().map(BoxLine::left));
                lines
            }
        };

        lines.push(BoxLine::blank());
        lines.extend(self.command_overview());
        lines.push(BoxLine::blank());
        lines.push(BoxLine::left(COMMAND_HELP_HINT));
        render::boxed(&lines, self.width)
    }

    pub fn commands_text(&self) -> String {
        render::boxed(&self.command_overview(), self.width)
    }

    pub fn config_text(&self) -> String {
        render::yaml_tree(self.analysis.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::render::strip_ansi;
    use crate::testing::{analysis_with_steps, test_session};

    fn plain(text: &str) -> String {
        strip_ansi(text).into_owned()
    }

    #[test]
    fn test_prompt_tracks_step() {
        let (mut session, _executor, _dir) = analysis_with_steps();
        assert_eq!(session.prompt(), "navigator> ");

        session.switch_step("qc").unwrap();
        assert_eq!(session.prompt(), "qc> ");

        session.leave_step();
        assert_eq!(session.prompt(), "navigator> ");
    }

    #[tokio::test]
    async fn test_empty_line_is_noop() {
        let (mut session, _) = test_session();
        let before = session.commands().names().join(",");

        let output = session.dispatch("   ").await.unwrap();
        assert_eq!(output, CommandOutput::none());
        assert_eq!(session.commands().names().join(","), before);
    }

    #[tokio::test]
    async fn test_unknown_command_names_token() {
        let (mut session, _) = test_session();

        let err = session.dispatch("frobnicate now").await.unwrap_err();
        assert!(matches!(err, NavigatorError::UnknownCommand(ref name) if name == "frobnicate"));
        assert!(session.context().is_root());
    }

    #[tokio::test]
    async fn test_exit_requests_loop_exit() {
        let (mut session, _) = test_session();
        assert!(session.dispatch("exit").await.unwrap().is_exit());
        assert!(!session.dispatch("exit help").await.unwrap().is_exit());
    }

    #[tokio::test]
    async fn test_switch_step_reports_warnings_then_info() {
        let (mut session, _executor, _dir) = analysis_with_steps();

        let output = session.dispatch("switch_step qc").await.unwrap();
        assert_eq!(
            output.notices.last(),
            Some(&Notice::Info("Switched to step: qc".into()))
        );
        assert!(output
            .notices
            .iter()
            .any(|n| matches!(n, Notice::Warning(w) if w.contains("broken"))));
    }

    #[tokio::test]
    async fn test_switch_step_argument_count() {
        let (mut session, _executor, _dir) = analysis_with_steps();

        let err = session.dispatch("switch_step").await.unwrap_err();
        assert!(matches!(
            err,
            NavigatorError::ArgumentCount {
                expected: 1,
                actual: 0,
                ..
            }
        ));
        assert!(session.context().is_root());
    }

    #[tokio::test]
    async fn test_leave_step_at_root_is_informational() {
        let (mut session, _) = test_session();
        let output = session.dispatch("leave_step").await.unwrap();
        assert_eq!(output, CommandOutput::info("No active step to leave."));
    }

    #[test]
    fn test_root_help_lists_steps_and_commands() {
        let (session, _executor, _dir) = analysis_with_steps();
        let help = plain(&session.help_text());

        assert!(help.contains("Analysis: Test analysis"));
        assert!(help.contains("The analysis consists of the following steps:"));
        assert!(help.contains("  level1: qc   raw"));
        assert!(help.contains("config   exit   switch_step   leave_step   help   cmds"));
        assert!(help.contains("\"<command> help\""));
    }

    #[test]
    fn test_unimplemented_steps_render_differently() {
        colored::control::set_override(true);
        let (session, _executor, _dir) = analysis_with_steps();
        let overview: Vec<String> = session
            .step_overview()
            .into_iter()
            .map(|line| line.text)
            .collect();
        colored::control::unset_override();

        let level1 = overview
            .iter()
            .find(|line| strip_ansi(line).contains("level1"))
            .unwrap();
        assert!(level1.contains(&"qc".yellow().to_string()));
        assert!(level1.contains(&grey("raw").to_string()));
    }

    #[test]
    fn test_step_help_shows_description_and_step_commands() {
        let (mut session, _executor, _dir) = analysis_with_steps();
        session.switch_step("qc").unwrap();
        let help = plain(&session.help_text());

        assert!(help.contains("Step: qc"));
        assert!(help.contains("Quality control checks."));
        assert!(help.contains("  run"));
        assert!(!help.contains("The analysis consists of"));
    }

    #[test]
    fn test_config_text_dumps_document() {
        let (session, _executor, _dir) = analysis_with_steps();
        let text = session.config_text();
        assert!(text.starts_with("name: Test analysis\n"));
        assert!(text.contains("analysis_steps:\n"));
        assert!(text.contains("- name: raw\n"));
    }
}
