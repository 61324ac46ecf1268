//! The interactive read-eval loop and everything it prints.
//!
//! [`Session`] holds the state and can be driven without a terminal, which is
//! how the tests exercise it. [`NavigatorShell`] wraps a session in a
//! `rustyline` editor with history and tab completion.

pub mod builtins;
pub mod completion;
pub mod history;
pub mod output;
pub mod render;
pub mod session;

pub use completion::NavigatorHelper;
pub use history::{history_config, HistoryFile};
pub use session::Session;

use crate::error::{NavigatorError, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing::{debug, trace};

pub struct NavigatorShell {
    session: Session,
    editor: Editor<NavigatorHelper, DefaultHistory>,
    history: HistoryFile,
}

impl NavigatorShell {
    pub fn new(session: Session, history: HistoryFile) -> Result<Self> {
        let mut editor: Editor<NavigatorHelper, DefaultHistory> =
            Editor::with_config(history_config()?)?;
        editor.set_helper(Some(NavigatorHelper::default()));
        history.load(editor.history_mut());

        Ok(Self {
            session,
            editor,
            history,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn refresh_completions(&mut self) {
        let commands = self
            .session
            .commands()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let steps = self.session.analysis().step_names();

        if let Some(helper) = self.editor.helper_mut() {
            helper.refresh(commands, steps);
        }
    }

    /// Run until `exit`, end of input, or a terminal failure.
    pub async fn run(&mut self) -> Result<()> {
        println!("{}", self.session.welcome_text());

        let result = self.read_eval_loop().await;

        output::emit_notice(&builtins::farewell());
        self.history.persist(self.editor.history_mut());
        result
    }

    async fn read_eval_loop(&mut self) -> Result<()> {
        loop {
            self.refresh_completions();

            let line = match self.editor.readline(&self.session.prompt()) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("KeyboardInterrupt");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("exit");
                    return Ok(());
                }
                Err(e) => return Err(NavigatorError::Terminal(e)),
            };
            trace!("Read line: {:?}", line);

            self.history.record(self.editor.history_mut(), &line);

            match self.session.dispatch(&line).await {
                Ok(result) => {
                    output::emit(&result);
                    if result.is_exit() {
                        debug!("Exit requested");
                        return Ok(());
                    }
                }
                Err(e) => output::report(&e.into_reportable()),
            }
        }
    }
}
