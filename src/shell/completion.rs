//! Tab completion for the line editor.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Command that takes a step name as its only argument.
const STEP_ARGUMENT_COMMAND: &str = "switch_step";

/// Completes the first word from the effective command names, and the
/// argument of `switch_step` from the step names.
#[derive(Debug, Default)]
pub struct NavigatorHelper {
    commands: Vec<String>,
    steps: Vec<String>,
}

impl NavigatorHelper {
    pub fn new(commands: Vec<String>, steps: Vec<String>) -> Self {
        Self { commands, steps }
    }

    /// Replace the candidates after the command table changed.
    pub fn refresh(&mut self, commands: Vec<String>, steps: Vec<String>) {
        self.commands = commands;
        self.steps = steps;
    }

    fn candidates(items: &[String], prefix: &str) -> Vec<Pair> {
        items
            .iter()
            .filter(|item| item.starts_with(prefix))
            .map(|item| Pair {
                display: item.clone(),
                replacement: item.clone(),
            })
            .collect()
    }

    /// Start of the word under the cursor and its completions.
    pub fn candidates_at(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = line[..pos].rfind(' ').map(|i| i + 1).unwrap_or(0);
        let word = &line[start..pos];
        let before: Vec<&str> = line[..start].split(' ').filter(|t| !t.is_empty()).collect();

        match before.as_slice() {
            [] => (start, Self::candidates(&self.commands, word)),
            [command] if *command == STEP_ARGUMENT_COMMAND => {
                (start, Self::candidates(&self.steps, word))
            }
            _ => (start, Vec::new()),
        }
    }
}

impl Completer for NavigatorHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates_at(line, pos))
    }
}

impl Hinter for NavigatorHelper {
    type Hint = String;
}

impl Highlighter for NavigatorHelper {}

impl Validator for NavigatorHelper {}

impl Helper for NavigatorHelper {}
