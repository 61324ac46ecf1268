use super::{Arity, Command, CommandOutput};
use crate::config::StepCommandDescriptor;
use crate::error::Result;
use crate::shell::Session;
use crate::subprocess::{ShellExecutor, ShellInvocation};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A command backed by a step's own shell tooling.
///
/// Arguments are appended verbatim to the configured shell command, which
/// then runs in the step directory. The declared `usage_args` only shape the
/// usage line; they are not enforced.
pub struct StepCommand {
    name: String,
    shellcommand: String,
    usage_args: Vec<String>,
    description: String,
    working_dir: PathBuf,
    executor: Arc<dyn ShellExecutor>,
}

impl StepCommand {
    pub fn new(
        descriptor: StepCommandDescriptor,
        working_dir: &Path,
        executor: Arc<dyn ShellExecutor>,
    ) -> Self {
        Self {
            name: descriptor.name,
            shellcommand: descriptor.shellcommand,
            usage_args: descriptor.usage_args,
            description: descriptor.description,
            working_dir: working_dir.to_path_buf(),
            executor,
        }
    }

    pub fn command_line(&self, args: &[String]) -> String {
        if args.is_empty() {
            self.shellcommand.clone()
        } else {
            format!("{} {}", self.shellcommand, args.join(" "))
        }
    }
}

#[async_trait]
impl Command for StepCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn usage(&self) -> String {
        std::iter::once(self.name.clone())
            .chain(self.usage_args.iter().map(|arg| format!("--{arg} <{arg}>")))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn arity(&self) -> Arity {
        Arity::Unchecked
    }

    async fn invoke(&self, _session: &mut Session, args: &[String]) -> Result<CommandOutput> {
        let invocation = ShellInvocation::new(self.command_line(args), &self.working_dir);
        let status = self.executor.run(invocation).await?;
        tracing::debug!("Step command '{}' finished: {:?}", self.name, status);
        Ok(CommandOutput::none())
    }
}
