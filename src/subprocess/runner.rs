use async_trait::async_trait;
use std::path::PathBuf;

use super::error::ProcessError;

/// A shell command line together with the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInvocation {
    pub command_line: String,
    pub working_dir: PathBuf,
}

impl ShellInvocation {
    pub fn new(command_line: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            command_line: command_line.into(),
            working_dir: working_dir.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error(i32),
    Signal(i32),
}

impl ExitStatus {
    pub fn success(&self) -> bool {
        matches!(self, ExitStatus::Success)
    }

    pub fn code(&self) -> Option<i32> {
        match self {
            ExitStatus::Success => Some(0),
            ExitStatus::Error(code) => Some(*code),
            ExitStatus::Signal(_) => None,
        }
    }
}

/// Runs a command line through the system shell.
///
/// The child inherits the controlling terminal, so whatever it prints goes
/// straight to the user. Callers only learn the exit status.
#[async_trait]
pub trait ShellExecutor: Send + Sync {
    async fn run(&self, invocation: ShellInvocation) -> Result<ExitStatus, ProcessError>;
}

pub struct TokioShellExecutor {
    shell: String,
}

impl Default for TokioShellExecutor {
    fn default() -> Self {
        Self {
            shell: "sh".to_string(),
        }
    }
}

impl TokioShellExecutor {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    fn configure_command(&self, invocation: &ShellInvocation) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.shell);
        cmd.arg("-c")
            .arg(&invocation.command_line)
            .current_dir(&invocation.working_dir)
            .stdin(std::process::Stdio::inherit())
            .stdout(std::process::Stdio::inherit())
            .stderr(std::process::Stdio::inherit());
        cmd
    }

    /// Convert process exit status to our ExitStatus enum
    fn parse_exit_status(status: std::process::ExitStatus) -> ExitStatus {
        if status.success() {
            ExitStatus::Success
        } else if let Some(code) = status.code() {
            ExitStatus::Error(code)
        } else {
            Self::parse_signal_status(status)
        }
    }

    #[cfg(unix)]
    fn parse_signal_status(status: std::process::ExitStatus) -> ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            ExitStatus::Signal(signal)
        } else {
            ExitStatus::Error(1)
        }
    }

    #[cfg(not(unix))]
    fn parse_signal_status(_status: std::process::ExitStatus) -> ExitStatus {
        ExitStatus::Error(1)
    }

    fn log_result(status: &ExitStatus, invocation: &ShellInvocation) {
        match status {
            ExitStatus::Success => {
                tracing::debug!("Step command completed: {}", invocation.command_line)
            }
            ExitStatus::Error(code) => tracing::debug!(
                "Step command exited with code {}: {}",
                code,
                invocation.command_line
            ),
            ExitStatus::Signal(signal) => tracing::warn!(
                "Step command terminated by signal {}: {}",
                signal,
                invocation.command_line
            ),
        }
    }
}

#[async_trait]
impl ShellExecutor for TokioShellExecutor {
    async fn run(&self, invocation: ShellInvocation) -> Result<ExitStatus, ProcessError> {
        tracing::debug!(
            "Executing `{}` in {}",
            invocation.command_line,
            invocation.working_dir.display()
        );

        let mut child = self
            .configure_command(&invocation)
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: invocation.command_line.clone(),
                source,
            })?;

        // Ctrl-C reaches the child through the shared process group. The
        // navigator must outlive it.
        let finished = tokio::select! {
            status = child.wait() => Some(status),
            Ok(()) = tokio::signal::ctrl_c() => None,
        };

        match finished {
            Some(status) => {
                let status = Self::parse_exit_status(status?);
                Self::log_result(&status, &invocation);
                Ok(status)
            }
            None => {
                let _ = child.wait().await;
                Err(ProcessError::Interrupted {
                    command: invocation.command_line,
                })
            }
        }
    }
}
