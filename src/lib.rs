//! # Navigator
//!
//! An interactive shell that walks a user through a multi-step analysis
//! pipeline described in a YAML file.
//!
//! ## Usage
//!
//! ```bash
//! navigator analysis.yml [--history-file PATH] [-v]
//! ```
//!
//! ## Modules
//!
//! - `app` - Process-level setup: configuration, logging, fatal errors
//! - `cli` - Command-line argument structures
//! - `command` - The command contract, the lexer and the layered command table
//! - `config` - Analysis and step configuration files
//! - `shell` - The read-eval loop, built-in commands and terminal rendering
//! - `step` - The active step and transitions between steps
//! - `subprocess` - Shell executor abstraction for step commands
//! - `testing` - Fixtures for exercising sessions without a terminal
pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod shell;
pub mod step;
pub mod subprocess;

pub mod testing;

pub use error::{NavigatorError, Result};
