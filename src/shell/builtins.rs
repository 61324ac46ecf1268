//! The navigator's own commands, available in every context.

use super::render::rainbow;
use crate::command::{Command, CommandOutput, InProcessCommand, Notice};
use std::sync::Arc;

/// Base commands in the order they are listed to the user.
pub fn base_commands() -> Vec<Arc<dyn Command>> {
    vec![
        Arc::new(InProcessCommand::new(
            "config",
            &[],
            "Prints the loaded analysis config.",
            |session, _| Ok(CommandOutput::text(session.config_text())),
        )),
        Arc::new(InProcessCommand::new(
            "exit",
            &[],
            "Exits the navigator right away.",
            |_, _| Ok(CommandOutput::exit()),
        )),
        Arc::new(InProcessCommand::new(
            "switch_step",
            &["step_name"],
            "Switches to the specified step.",
            |session, args| session.switch_step(&args[0]),
        )),
        Arc::new(InProcessCommand::new(
            "leave_step",
            &[],
            "Leaves the current step and returns to the main navigator level.",
            |session, _| Ok(session.leave_step()),
        )),
        Arc::new(InProcessCommand::new(
            "help",
            &[],
            "Prints the help message.",
            |session, _| Ok(CommandOutput::text(session.help_text())),
        )),
        Arc::new(InProcessCommand::new(
            "cmds",
            &[],
            "Prints the available commands.",
            |session, _| Ok(CommandOutput::text(session.commands_text())),
        )),
    ]
}

/// Printed once the loop ends, however it ended.
pub fn farewell() -> Notice {
    Notice::Text(format!("Exiting... {} :)", rainbow("Goodbye")))
}
