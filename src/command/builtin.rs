use super::{Arity, Command, CommandOutput};
use crate::error::Result;
use crate::shell::Session;
use async_trait::async_trait;
use std::sync::Arc;

/// Native handler behind an [`InProcessCommand`].
pub type Handler = Arc<dyn Fn(&mut Session, &[String]) -> Result<CommandOutput> + Send + Sync>;

/// A command implemented inside the navigator itself.
///
/// Arity is the number of declared argument names; the names only show up in
/// the usage line.
pub struct InProcessCommand {
    name: String,
    arg_names: Vec<String>,
    description: String,
    handler: Handler,
}

impl InProcessCommand {
    pub fn new<F>(name: &str, arg_names: &[&str], description: &str, handler: F) -> Self
    where
        F: Fn(&mut Session, &[String]) -> Result<CommandOutput> + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            arg_names: arg_names.iter().map(|s| s.to_string()).collect(),
            description: description.to_string(),
            handler: Arc::new(handler),
        }
    }
}

#[async_trait]
impl Command for InProcessCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn usage(&self) -> String {
        std::iter::once(self.name.clone())
            .chain(self.arg_names.iter().map(|arg| format!("<{arg}>")))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn arity(&self) -> Arity {
        Arity::Exact(self.arg_names.len())
    }

    async fn invoke(&self, session: &mut Session, args: &[String]) -> Result<CommandOutput> {
        (self.handler)(session, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavigatorError;
    use crate::testing::test_session;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_command(arg_names: &[&str]) -> (InProcessCommand, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let command = InProcessCommand::new("probe", arg_names, "Counts calls.", move |_, args| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(CommandOutput::info(args.join(",")))
        });
        (command, calls)
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_usage_lists_placeholders() {
        let (command, _) = counting_command(&["step_name", "mode"]);
        assert_eq!(command.usage(), "probe <step_name> <mode>");

        let (command, _) = counting_command(&[]);
        assert_eq!(command.usage(), "probe");
    }

    #[test]
    fn test_help_block_format() {
        let (command, _) = counting_command(&["step_name"]);
        assert_eq!(
            command.help(),
            "\n\tCounts calls.\n\n\tUsage: probe <step_name>\n\n"
        );
    }

    #[tokio::test]
    async fn test_exact_arity_invokes_handler_once() {
        let (mut session, _) = test_session();
        let (command, calls) = counting_command(&["a", "b"]);

        let output = command
            .execute(&mut session, &args(&["x", "y"]))
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(output, CommandOutput::info("x,y"));
    }

    #[tokio::test]
    async fn test_wrong_arity_never_invokes_handler() {
        let (mut session, _) = test_session();
        let (command, calls) = counting_command(&["a"]);

        for bad in [args(&[]), args(&["x", "y"]), args(&["x", "y", "z"])] {
            let err = command.execute(&mut session, &bad).await.unwrap_err();
            match err {
                NavigatorError::ArgumentCount {
                    expected, actual, ..
                } => {
                    assert_eq!(expected, 1);
                    assert_eq!(actual, bad.len());
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_help_argument_short_circuits() {
        let (mut session, _) = test_session();

        // One declared argument: "help" would otherwise be a valid call.
        let (command, calls) = counting_command(&["a"]);
        let output = command
            .execute(&mut session, &args(&["help"]))
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(output, CommandOutput::help(command.help()));

        // No declared arguments: help wins over the arity error.
        let (command, calls) = counting_command(&[]);
        let output = command
            .execute(&mut session, &args(&["help"]))
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(matches!(output.notices[0], super::super::Notice::Help(_)));
    }
}
