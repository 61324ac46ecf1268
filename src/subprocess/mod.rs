//! Shell executor boundary.
//!
//! Step commands never spawn processes themselves; they hand a
//! [`ShellInvocation`] to a [`ShellExecutor`]. Production code uses
//! [`TokioShellExecutor`], tests inject [`MockShellExecutor`].

pub mod error;
pub mod mock;
pub mod runner;


pub use error::ProcessError;
pub use mock::MockShellExecutor;
pub use runner::{ExitStatus, ShellExecutor, ShellInvocation, TokioShellExecutor};
