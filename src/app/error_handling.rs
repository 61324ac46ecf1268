//! Error handling utilities

use crate::error::NavigatorError;
use crate::shell::output::format_error;
use tracing::error;

/// Report a startup failure and exit with status 1.
///
/// Navigator errors print the same way they do inside the shell. The full
/// cause chain follows at `-v` and above.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    match error.downcast_ref::<NavigatorError>() {
        Some(navigator_err) => eprintln!("{}", format_error(navigator_err)),
        None => eprintln!("Error: {error}"),
    }

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(1)
}
