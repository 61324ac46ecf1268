//! Commands the shell can resolve by name.
//!
//! Two kinds exist: [`InProcessCommand`] wraps a native handler, and
//! [`StepCommand`] forwards to a step's shell tooling. Both share the
//! [`Command::execute`] contract: a lone `help` argument prints usage, an
//! arity mismatch is reported without running anything, and only then is the
//! command invoked.

use crate::error::{NavigatorError, Result};
use crate::shell::Session;
use async_trait::async_trait;

pub mod builtin;
pub mod lexer;
pub mod registry;
pub mod step;

pub use builtin::{Handler, InProcessCommand};
pub use lexer::{tokenize, ParsedLine};
pub use registry::CommandTable;
pub use step::StepCommand;

/// The reserved pseudo-argument that asks a command to describe itself.
pub const HELP_ARG: &str = "help";

/// How many arguments a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    /// Arguments are passed through untouched.
    Unchecked,
}

#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn usage(&self) -> String;
    fn arity(&self) -> Arity;

    fn help(&self) -> String {
        format!(
            "\n\t{}\n\n\tUsage: {}\n\n",
            self.description(),
            self.usage()
        )
    }

    /// Run the command with already validated arguments.
    async fn invoke(&self, session: &mut Session, args: &[String]) -> Result<CommandOutput>;

    async fn execute(&self, session: &mut Session, args: &[String]) -> Result<CommandOutput> {
        if is_help_request(args) {
            return Ok(CommandOutput::help(self.help()));
        }

        if let Arity::Exact(expected) = self.arity() {
            if args.len() != expected {
                return Err(NavigatorError::ArgumentCount {
                    command: self.name().to_string(),
                    expected,
                    actual: args.len(),
                });
            }
        }

        tracing::debug!("Invoking '{}' with {:?}", self.name(), args);
        self.invoke(session, args).await
    }
}

pub fn is_help_request(args: &[String]) -> bool {
    matches!(args, [only] if only == HELP_ARG)
}

/// A user-facing message produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Help(String),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub notices: Vec<Notice>,
    pub control: LoopControl,
}

impl CommandOutput {
    pub fn none() -> Self {
        Self {
            notices: Vec::new(),
            control: LoopControl::Continue,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::none().with_notice(Notice::Info(message.into()))
    }

    pub fn help(text: impl Into<String>) -> Self {
        Self::none().with_notice(Notice::Help(text.into()))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::none().with_notice(Notice::Text(text.into()))
    }

    pub fn exit() -> Self {
        Self {
            notices: Vec::new(),
            control: LoopControl::Exit,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    pub fn is_exit(&self) -> bool {
        self.control == LoopControl::Exit
    }
}
