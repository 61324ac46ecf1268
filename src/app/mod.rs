//! Application module
//!
//! Process-level concerns around the shell:
//! - Configuration from the command line and the terminal
//! - Logging setup
//! - Fatal error reporting
//! - Starting the session

pub mod config;
pub mod error_handling;
pub mod logging;
pub mod runtime;

pub use config::AppConfig;
pub use error_handling::handle_fatal_error;
pub use logging::init_logging;
pub use runtime::run;
