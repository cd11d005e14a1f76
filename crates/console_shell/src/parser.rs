//! Line tokenization, single-command parsing, and `&&` chain splitting.

use console_shell_contract::{ParseError, ParsedCommand, ParsedInput};

/// Splits a raw line into word tokens.
///
/// Unquoted, unescaped whitespace runs delimit tokens. Single and double quotes
/// open literal regions closed by the matching quote; the quote characters are
/// dropped. A backslash inserts the next character literally. An unterminated
/// quote consumes to end of string without error; a trailing backslash is
/// dropped.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut escape = false;

    for ch in raw.chars() {
        if escape {
            current.push(ch);
            escape = false;
            continue;
        }
        match ch {
            '\\' => escape = true,
            '"' | '\'' if quote.is_none() => quote = Some(ch),
            ch if quote == Some(ch) => quote = None,
            ch if ch.is_whitespace() && quote.is_none() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            ch => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Parses one command string into a name plus arguments.
///
/// The first token is ASCII-lowercased (command names are case-insensitive);
/// arguments keep their original order and case. Empty input yields an empty
/// command name and no arguments.
pub fn parse_command(raw: &str) -> ParsedCommand {
    let mut tokens = tokenize(raw).into_iter();
    let command = tokens
        .next()
        .map(|token| token.to_ascii_lowercase())
        .unwrap_or_default();
    ParsedCommand {
        command,
        args: tokens.collect(),
    }
}

/// Whether `args` request the cross-cutting help rendering.
pub fn has_help_flag(args: &[String]) -> bool {
    args.iter().any(|arg| arg == "-h" || arg == "--help")
}

fn contains_lone_pipe(input: &str) -> bool {
    input.contains('|') && !input.contains("||")
}

fn contains_lone_ampersand(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    chars.iter().enumerate().any(|(index, ch)| {
        *ch == '&'
            && chars.get(index.wrapping_sub(1)).copied() != Some('&')
            && chars.get(index + 1).copied() != Some('&')
    })
}

/// Classifies a full input line as empty, a single command, or an `&&` chain.
///
/// Unsupported shell operators are rejected with a distinct [`ParseError`] per
/// operator, checked in order: a plain pipe, the `||` operator, then a lone
/// `&`. Only sequential AND-chaining is supported; everything else is rejected
/// rather than silently mishandled.
pub fn parse_input(raw: &str) -> Result<ParsedInput, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(ParsedInput::Empty);
    }

    if contains_lone_pipe(trimmed) {
        return Err(ParseError::PipesUnsupported);
    }
    if trimmed.contains("||") {
        return Err(ParseError::OrUnsupported);
    }
    if contains_lone_ampersand(trimmed) {
        return Err(ParseError::BackgroundUnsupported);
    }

    if trimmed.contains("&&") {
        let commands: Vec<ParsedCommand> = trimmed
            .split("&&")
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(parse_command)
            .collect();
        if commands.is_empty() {
            return Err(ParseError::EmptyChain);
        }
        return Ok(ParsedInput::Chain { commands });
    }

    Ok(ParsedInput::Single {
        command: parse_command(trimmed),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn words(raw: &str) -> Vec<String> {
        raw.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn plain_input_splits_like_whitespace() {
        for raw in ["ls", "cat about resume", "  theme   matrix  "] {
            assert_eq!(tokenize(raw), words(raw));
        }
    }

    #[test]
    fn double_quotes_keep_whitespace() {
        assert_eq!(tokenize("echo \"a b\""), vec!["echo", "a b"]);
    }

    #[test]
    fn single_quotes_keep_whitespace() {
        assert_eq!(tokenize("echo 'a b'"), vec!["echo", "a b"]);
    }

    #[test]
    fn backslash_escapes_whitespace() {
        assert_eq!(tokenize("echo a\\ b"), vec!["echo", "a b"]);
    }

    #[test]
    fn unterminated_quote_consumes_to_end() {
        assert_eq!(tokenize("echo \"a b"), vec!["echo", "a b"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("   "), Vec::<String>::new());
    }

    #[test]
    fn command_name_is_lowercased_but_args_are_not() {
        let parsed = parse_command("CAT About");
        assert_eq!(parsed.command, "cat");
        assert_eq!(parsed.args, vec!["About"]);
    }

    #[test]
    fn chain_input_is_split_in_order() {
        let parsed = parse_input("ls && pwd").expect("parse");
        assert!(parsed.is_chain());
        let commands = parsed.into_commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].command, "ls");
        assert!(commands[0].args.is_empty());
        assert_eq!(commands[1].command, "pwd");
    }

    #[test]
    fn chain_tolerates_surrounding_whitespace() {
        let commands = parse_input("ls&&pwd  &&  echo hi")
            .expect("parse")
            .into_commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[2].args, vec!["hi"]);
    }

    #[test]
    fn lone_pipe_is_rejected() {
        assert_eq!(parse_input("ls | grep a"), Err(ParseError::PipesUnsupported));
    }

    #[test]
    fn or_operator_is_rejected_distinctly() {
        assert_eq!(parse_input("ls || pwd"), Err(ParseError::OrUnsupported));
    }

    #[test]
    fn background_ampersand_is_rejected() {
        assert_eq!(
            parse_input("sleep 5 &"),
            Err(ParseError::BackgroundUnsupported)
        );
        assert_eq!(parse_input("&"), Err(ParseError::BackgroundUnsupported));
        assert_eq!(
            parse_input("a & b"),
            Err(ParseError::BackgroundUnsupported)
        );
    }

    #[test]
    fn double_ampersand_is_never_background() {
        assert!(parse_input("ls && pwd").is_ok());
    }

    #[test]
    fn bare_chain_operator_is_a_syntax_error() {
        assert_eq!(parse_input("&&"), Err(ParseError::EmptyChain));
        assert_eq!(parse_input(" && && "), Err(ParseError::EmptyChain));
    }

    #[test]
    fn whitespace_only_input_is_empty() {
        assert_eq!(parse_input("   "), Ok(ParsedInput::Empty));
    }

    #[test]
    fn trailing_chain_fragment_is_dropped() {
        let commands = parse_input("ls &&").expect("parse").into_commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].command, "ls");
    }
}
