//! Shared console command contracts used by the shell engine, session runtime, and hosts.
//!
//! This crate is intentionally host-agnostic. It defines serializable command metadata,
//! parse outcomes, command results, renderable output, transcript lines, and the error
//! taxonomy without depending on any presentation layer or async runtime.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named option or flag rendered in help output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOptionSpec {
    /// Flag synopsis such as `-l` or `-h, --help`.
    pub flag: String,
    /// Short description.
    pub description: String,
}

/// Immutable metadata for a registered command.
///
/// Descriptors are created once at registry construction and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Unique lowercase command name.
    pub name: String,
    /// One-line summary.
    pub description: String,
    /// Usage synopsis string.
    pub usage: String,
    /// Option metadata, possibly empty.
    pub options: Vec<CommandOptionSpec>,
}

/// One parsed command: a lowercase name plus its arguments in original order and case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    /// Lowercased command name; empty for blank input.
    pub command: String,
    /// Argument tokens, original case preserved.
    pub args: Vec<String>,
}

/// Classification of a full input line after chain parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ParsedInput {
    /// Whitespace-only input; nothing to execute.
    Empty,
    /// A single command.
    Single {
        /// The parsed command.
        command: ParsedCommand,
    },
    /// An ordered `&&` chain of commands.
    Chain {
        /// Chain members in execution order.
        commands: Vec<ParsedCommand>,
    },
}

impl ParsedInput {
    /// Returns the contained commands in execution order.
    pub fn into_commands(self) -> Vec<ParsedCommand> {
        match self {
            ParsedInput::Empty => Vec::new(),
            ParsedInput::Single { command } => vec![command],
            ParsedInput::Chain { commands } => commands,
        }
    }

    /// Whether this input was classified as an `&&` chain.
    pub fn is_chain(&self) -> bool {
        matches!(self, ParsedInput::Chain { .. })
    }
}

/// Rejection of an input line by the chain parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseError {
    /// A `|` that is not part of `||`.
    #[error("pipes are not supported in this terminal")]
    PipesUnsupported,
    /// The `||` operator, rejected distinctly from a plain pipe.
    #[error("the `||` operator is not supported in this terminal")]
    OrUnsupported,
    /// A `&` that is not part of `&&`.
    #[error("background execution is not supported")]
    BackgroundUnsupported,
    /// An `&&` chain with no commands on either side.
    #[error("syntax error near `&&`")]
    EmptyChain,
}

/// Error surfaced by command resolution or execution.
///
/// Every variant is recovered at the dispatch boundary and rendered as a single
/// error-type transcript line; none are fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CommandError {
    /// The command name did not resolve in the registry.
    #[error("command not found: {name}")]
    NotFound {
        /// The unresolved command name.
        name: String,
    },
    /// A handler intentionally rejected its arguments.
    #[error("{message}")]
    Domain {
        /// Human-readable message.
        message: String,
    },
    /// A handler failed unexpectedly.
    #[error("{command}: {message}")]
    Handler {
        /// Command that failed.
        command: String,
        /// Failure message.
        message: String,
    },
}

impl CommandError {
    /// Creates a domain error from a message.
    pub fn domain(message: impl Into<String>) -> Self {
        CommandError::Domain {
            message: message.into(),
        }
    }

    /// Creates a handler error for `command` from a message.
    pub fn handler(command: impl Into<String>, message: impl Into<String>) -> Self {
        CommandError::Handler {
            command: command.into(),
            message: message.into(),
        }
    }
}

/// Style class for a rendered text span.
///
/// Hosts map these to concrete colors through the active theme; the core never
/// references color values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    /// Body text.
    #[default]
    Default,
    /// Prompt and heading accents.
    Prompt,
    /// Secondary accent.
    Accent,
    /// Positive/confirmation text.
    Success,
    /// Error text.
    Error,
    /// Link-like identifiers.
    Link,
    /// De-emphasized text.
    Muted,
}

/// One styled run of text within a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    /// Style class.
    pub style: TextStyle,
    /// Text content.
    pub text: String,
}

impl TextSpan {
    /// Creates a span with the given style.
    pub fn styled(style: TextStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    /// Creates a default-styled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(TextStyle::Default, text)
    }
}

/// One line of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TextLine {
    /// Spans in display order.
    pub spans: Vec<TextSpan>,
}

impl TextLine {
    /// Creates a line from spans.
    pub fn new(spans: Vec<TextSpan>) -> Self {
        Self { spans }
    }

    /// Creates a line holding one default-styled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![TextSpan::plain(text)])
    }

    /// Creates a line holding one styled span.
    pub fn styled(style: TextStyle, text: impl Into<String>) -> Self {
        Self::new(vec![TextSpan::styled(style, text)])
    }

    /// Creates an empty spacer line.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// Renderable command output: plain text or a tree of styled lines.
///
/// Hosts decide how to present either variant; the core never assumes a
/// specific presentation representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Renderable {
    /// Unstyled text; may contain newlines.
    Text {
        /// Text content.
        text: String,
    },
    /// Styled lines of spans.
    Rich {
        /// Lines in display order.
        lines: Vec<TextLine>,
    },
}

impl Renderable {
    /// Creates a plain-text renderable.
    pub fn text(text: impl Into<String>) -> Self {
        Renderable::Text { text: text.into() }
    }

    /// Creates a styled renderable from lines.
    pub fn rich(lines: Vec<TextLine>) -> Self {
        Renderable::Rich { lines }
    }

    /// Flattens the content to unstyled text, one line per `\n`.
    pub fn plain_text(&self) -> String {
        match self {
            Renderable::Text { text } => text.clone(),
            Renderable::Rich { lines } => lines
                .iter()
                .map(TextLine::text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Normalized result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CommandResult {
    /// Renderable output; `None` emits no transcript line.
    pub output: Option<Renderable>,
    /// Whether the output is an error line. Errors stop an `&&` chain.
    pub is_error: bool,
    /// Instructs the session to wipe the transcript. Not an error; a chain
    /// continues past it, and any `output` is ignored.
    pub clear_screen: bool,
    /// Instructs the session to clear and re-persist the command history.
    pub clear_history: bool,
}

impl CommandResult {
    /// A result with plain-text output.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            output: Some(Renderable::text(text)),
            ..Self::default()
        }
    }

    /// A result with styled output.
    pub fn rich(lines: Vec<TextLine>) -> Self {
        Self {
            output: Some(Renderable::rich(lines)),
            ..Self::default()
        }
    }

    /// A result with no output at all.
    pub fn silent() -> Self {
        Self::default()
    }

    /// An error result with plain-text output.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            output: Some(Renderable::text(text)),
            is_error: true,
            ..Self::default()
        }
    }

    /// A clear-screen result.
    pub fn clear_screen() -> Self {
        Self {
            clear_screen: true,
            ..Self::default()
        }
    }
}

/// Role of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    /// Echo of a submitted input line.
    Command,
    /// Normal command output.
    Output,
    /// Error output.
    Error,
    /// Session-generated output such as the welcome banner.
    System,
}

/// One immutable transcript line owned by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    /// Session-unique identifier, assigned in insertion order.
    pub id: u64,
    /// Line role.
    pub kind: OutputKind,
    /// Renderable payload.
    pub content: Renderable,
    /// Prompt string, present only for [`OutputKind::Command`] lines.
    pub prompt: Option<String>,
}

/// Autocomplete outcome: the (possibly unchanged) completed input plus any
/// remaining candidates for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Completed input line; equals the request input when nothing applied.
    pub completed: String,
    /// Candidate list when the match was ambiguous.
    pub suggestions: Vec<String>,
}

impl Completion {
    /// A completion that leaves the input unchanged.
    pub fn unchanged(input: impl Into<String>) -> Self {
        Self {
            completed: input.into(),
            suggestions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_flattens_rich_lines() {
        let renderable = Renderable::rich(vec![
            TextLine::new(vec![
                TextSpan::styled(TextStyle::Prompt, "NAME"),
                TextSpan::plain(" ls"),
            ]),
            TextLine::blank(),
            TextLine::plain("SYNOPSIS"),
        ]);
        assert_eq!(renderable.plain_text(), "NAME ls\n\nSYNOPSIS");
    }

    #[test]
    fn parse_errors_render_distinct_messages() {
        assert_eq!(
            ParseError::PipesUnsupported.to_string(),
            "pipes are not supported in this terminal"
        );
        assert_eq!(
            ParseError::OrUnsupported.to_string(),
            "the `||` operator is not supported in this terminal"
        );
        assert_eq!(
            ParseError::BackgroundUnsupported.to_string(),
            "background execution is not supported"
        );
    }

    #[test]
    fn not_found_names_the_command() {
        let error = CommandError::NotFound {
            name: "zzzz".to_string(),
        };
        assert_eq!(error.to_string(), "command not found: zzzz");
    }

    #[test]
    fn chain_input_reports_kind_and_commands() {
        let parsed = ParsedInput::Chain {
            commands: vec![
                ParsedCommand {
                    command: "ls".to_string(),
                    args: vec![],
                },
                ParsedCommand {
                    command: "pwd".to_string(),
                    args: vec![],
                },
            ],
        };
        assert!(parsed.is_chain());
        assert_eq!(parsed.into_commands().len(), 2);
    }
}
