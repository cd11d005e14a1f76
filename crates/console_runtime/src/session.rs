//! The session driver: serializes submissions, runs chains, and executes effects.

use std::rc::Rc;

use console_shell::autocomplete::CompletionEngine;
use console_shell::commands::builtin_registry;
use console_shell::parser::parse_input;
use console_shell::{CommandEnv, Dispatcher};
use console_shell_contract::{Completion, OutputKind, Renderable};

use crate::persistence::HistoryStore;
use crate::reducer::{
    reduce_session, HistoryDirection, SessionAction, SessionEffect, SessionState,
};

/// One interactive console session.
///
/// Owns the session aggregate and the dispatcher; hosts feed it raw input
/// lines and keyboard-driven actions and render the resulting transcript.
pub struct ConsoleSession {
    state: SessionState,
    dispatcher: Dispatcher,
    completion: CompletionEngine,
    store: Rc<dyn HistoryStore>,
    prompt: String,
    welcome_shown: bool,
    in_flight: bool,
}

impl ConsoleSession {
    /// Creates a session over the builtin registry, loading persisted history
    /// best-effort from `store`.
    pub fn new(env: CommandEnv, store: Rc<dyn HistoryStore>) -> Self {
        let registry = Rc::new(builtin_registry());
        let completion = CompletionEngine::new(&registry);
        let prompt = format!("guest@{}:~$", env.config.hostname());
        let state = SessionState::with_history(store.load());
        Self {
            state,
            dispatcher: Dispatcher::new(registry, env),
            completion,
            store,
            prompt,
            welcome_shown: false,
            in_flight: false,
        }
    }

    /// Read-only view of the session aggregate.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The prompt string echoed on command lines.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Emits the welcome message exactly once per session.
    ///
    /// Guarded so a host that initializes twice does not duplicate it.
    pub async fn initialize(&mut self) {
        if self.welcome_shown {
            return;
        }
        self.welcome_shown = true;
        let result = self.dispatcher.execute("motd", &[], &[]).await;
        if let Some(output) = result.output {
            self.append(OutputKind::System, output, None);
        }
    }

    /// Parses and executes one submitted input line.
    ///
    /// Submissions are serialized: a submit arriving while another is in
    /// flight is refused with a system line instead of interleaving.
    pub async fn submit(&mut self, input: &str) {
        if self.in_flight {
            self.append(
                OutputKind::System,
                Renderable::text("another command is already running"),
                None,
            );
            return;
        }
        self.in_flight = true;
        self.run_submit(input).await;
        self.in_flight = false;
    }

    async fn run_submit(&mut self, input: &str) {
        let trimmed = input.trim().to_string();
        self.apply(SessionAction::AppendLine {
            kind: OutputKind::Command,
            content: Renderable::text(trimmed.clone()),
            prompt: Some(self.prompt.clone()),
        });
        self.apply(SessionAction::PushHistory(trimmed.clone()));
        self.apply(SessionAction::SetInput(String::new()));

        if trimmed.is_empty() {
            return;
        }

        let parsed = match parse_input(&trimmed) {
            Ok(parsed) => parsed,
            Err(error) => {
                self.append(OutputKind::Error, Renderable::text(error.to_string()), None);
                return;
            }
        };

        for command in parsed.into_commands() {
            let result = self
                .dispatcher
                .execute(&command.command, &command.args, &self.state.history)
                .await;

            // Clearing is not an error; the chain continues past it.
            if result.clear_screen {
                self.apply(SessionAction::Clear);
                continue;
            }
            if result.clear_history {
                self.apply(SessionAction::ClearHistory);
            }
            if let Some(output) = result.output {
                let kind = if result.is_error {
                    OutputKind::Error
                } else {
                    OutputKind::Output
                };
                self.append(kind, output, None);
            }
            if result.is_error {
                break;
            }
        }
    }

    /// Steps the history cursor and returns the new input buffer contents.
    pub fn navigate(&mut self, direction: HistoryDirection) -> String {
        self.apply(SessionAction::NavigateHistory(direction));
        self.state.input.clone()
    }

    /// Proposes an autocomplete for `input`.
    pub fn complete(&self, input: &str) -> Completion {
        self.completion.suggest(input)
    }

    /// Replaces the input buffer, resetting nothing else.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.apply(SessionAction::SetInput(value.into()));
    }

    /// Clears the transcript.
    pub fn clear(&mut self) {
        self.apply(SessionAction::Clear);
    }

    fn append(&mut self, kind: OutputKind, content: Renderable, prompt: Option<String>) {
        self.apply(SessionAction::AppendLine {
            kind,
            content,
            prompt,
        });
    }

    fn apply(&mut self, action: SessionAction) {
        for effect in reduce_session(&mut self.state, action) {
            match effect {
                SessionEffect::PersistHistory => {
                    if let Err(error) = self.store.save(&self.state.history) {
                        tracing::warn!("history persistence failed: {error}");
                    }
                }
            }
        }
    }
}
