use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::error::ProcessError;
use super::runner::{ExitStatus, ShellExecutor, ShellInvocation};

/// Records invocations instead of spawning anything.
#[derive(Clone)]
pub struct MockShellExecutor {
    status: Arc<Mutex<ExitStatus>>,
    failure: Arc<Mutex<Option<String>>>,
    call_history: Arc<Mutex<Vec<ShellInvocation>>>,
}

impl MockShellExecutor {
    pub fn new() -> Self {
        Self {
            status: Arc::new(Mutex::new(ExitStatus::Success)),
            failure: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn returns_exit_code(self, code: i32) -> Self {
        *self.status.lock().unwrap() = if code == 0 {
            ExitStatus::Success
        } else {
            ExitStatus::Error(code)
        };
        self
    }

    /// Every subsequent run fails as if the shell could not be spawned.
    pub fn fails_to_spawn(self, reason: &str) -> Self {
        *self.failure.lock().unwrap() = Some(reason.to_string());
        self
    }

    pub fn get_call_history(&self) -> Vec<ShellInvocation> {
        self.call_history.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.call_history.lock().unwrap().len()
    }

    pub fn last_invocation(&self) -> Option<ShellInvocation> {
        self.call_history.lock().unwrap().last().cloned()
    }
}

impl Default for MockShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShellExecutor for MockShellExecutor {
    async fn run(&self, invocation: ShellInvocation) -> Result<ExitStatus, ProcessError> {
        self.call_history.lock().unwrap().push(invocation.clone());

        if let Some(reason) = self.failure.lock().unwrap().clone() {
            return Err(ProcessError::SpawnFailed {
                command: invocation.command_line,
                source: std::io::Error::other(reason),
            });
        }

        Ok(self.status.lock().unwrap().clone())
    }
}
