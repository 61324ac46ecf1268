/// A raw input line split into a command name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Blank or whitespace-only input; nothing to resolve.
    Empty,
    Command { name: String, args: Vec<String> },
}

/// Split an input line on single spaces.
///
/// There is no quoting or escaping. Empty tokens left by repeated spaces are
/// dropped, and `--flag` tokens are passed through verbatim for the command
/// to interpret.
pub fn tokenize(line: &str) -> ParsedLine {
    if line.trim().is_empty() {
        return ParsedLine::Empty;
    }

    let mut tokens = line
        .trim_end_matches(['\n', '\r'])
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    let Some(name) = tokens.next() else {
        return ParsedLine::Empty;
    };
    let args: Vec<String> = tokens.collect();

    tracing::trace!("Tokenized '{}' into {} {:?}", line, name, args);
    ParsedLine::Command { name, args }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(name: &str, args: &[&str]) -> ParsedLine {
        ParsedLine::Command {
            name: name.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_blank_lines_are_empty() {
        assert_eq!(tokenize(""), ParsedLine::Empty);
        assert_eq!(tokenize("   "), ParsedLine::Empty);
        assert_eq!(tokenize("\t \n"), ParsedLine::Empty);
    }

    #[test]
    fn test_command_without_args() {
        assert_eq!(tokenize("help"), command("help", &[]));
        assert_eq!(tokenize("leave_step "), command("leave_step", &[]));
    }

    #[test]
    fn test_flags_are_not_interpreted() {
        assert_eq!(
            tokenize("run --input x.txt --threads 4"),
            command("run", &["--input", "x.txt", "--threads", "4"])
        );
    }

    #[test]
    fn test_repeated_spaces_do_not_create_empty_args() {
        assert_eq!(
            tokenize("  switch_step   qc "),
            command("switch_step", &["qc"])
        );
    }

    #[test]
    fn test_no_quoting_support() {
        assert_eq!(
            tokenize("run --name \"two words\""),
            command("run", &["--name", "\"two", "words\""])
        );
    }

    #[test]
    fn test_tabs_stay_inside_tokens() {
        assert_eq!(tokenize("run a\tb"), command("run", &["a\tb"]));
    }
}
