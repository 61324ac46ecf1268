use crate::subprocess::ProcessError;
use std::path::PathBuf;
use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can go wrong while navigating an analysis.
///
/// Only [`NavigatorError::ConfigLoad`] is fatal, and only at startup. Every
/// other variant is reported to the user and the shell keeps reading input.
#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error("Failed to load the analysis config file {}.", path.display())]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },

    #[error(
        "Failed to load the step config file for step {step}. Has to be called \"stepconfig.yml\" and placed in the top level folder of your step."
    )]
    StepConfigLoad {
        step: String,
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },

    #[error("Step {0} is not yet implemented.")]
    StepNotImplemented(String),

    #[error("Invalid step: {0}")]
    UnknownStep(String),

    #[error("Failed to load the step command \"{command}\": Missing argument '{field}'")]
    MissingCommandField {
        command: String,
        field: &'static str,
    },

    #[error("Failed to load the step command \"{command}\": malformed entry")]
    InvalidCommandEntry {
        command: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Expected {expected} arguments, but got {actual}")]
    ArgumentCount {
        command: String,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown command: {0}. Type help for a list of available commands.")]
    UnknownCommand(String),

    #[error("An unexpected error occurred.")]
    UnexpectedDispatch {
        #[source]
        source: Box<NavigatorError>,
    },

    #[error("Process error: {0}")]
    Process(#[from] ProcessError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] rustyline::error::ReadlineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl NavigatorError {
    /// True for the errors the shell reports as-is and recovers from.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::StepConfigLoad { .. }
                | Self::StepNotImplemented(_)
                | Self::UnknownStep(_)
                | Self::MissingCommandField { .. }
                | Self::InvalidCommandEntry { .. }
                | Self::ArgumentCount { .. }
                | Self::UnknownCommand(_)
                | Self::UnexpectedDispatch { .. }
        )
    }

    /// True when the user cancelled a running step command with Ctrl-C.
    pub fn is_interrupt(&self) -> bool {
        matches!(self, Self::Process(ProcessError::Interrupted { .. }))
    }

    /// Wraps anything outside the taxonomy so the loop can report it uniformly.
    pub fn into_reportable(self) -> Self {
        if self.is_recoverable() || self.is_interrupt() {
            self
        } else {
            Self::UnexpectedDispatch {
                source: Box::new(self),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NavigatorError>;
