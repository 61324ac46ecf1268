//! User-facing messages. Logging goes through `tracing`; this is what the
//! person at the prompt reads.

use super::render::orange;
use crate::command::{CommandOutput, Notice};
use crate::error::NavigatorError;
use colored::Colorize;
use std::error::Error as _;

pub fn format_notice(notice: &Notice) -> String {
    match notice {
        Notice::Info(message) => format!("Info: {message}").green().to_string(),
        Notice::Warning(message) => orange(&format!("Warning: {message}")).to_string(),
        Notice::Help(text) => text.blue().to_string(),
        Notice::Text(text) => text.clone(),
    }
}

/// `Error: <message> <cause>`, the cause in a second color.
pub fn format_error(error: &NavigatorError) -> String {
    let message = format!("Error: {error}").red();
    match error.source() {
        Some(cause) => format!("{message} {}", orange(&cause.to_string())),
        None => message.to_string(),
    }
}

pub fn emit_notice(notice: &Notice) {
    println!("{}", format_notice(notice));
}

pub fn emit(output: &CommandOutput) {
    output.notices.iter().for_each(emit_notice);
}

pub fn report(error: &NavigatorError) {
    if error.is_interrupt() {
        println!("KeyboardInterrupt");
    } else {
        eprintln!("{}", format_error(error));
    }
}
