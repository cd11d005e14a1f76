//! Pure state transitions for the console session aggregate.

use console_shell_contract::{OutputKind, OutputLine, Renderable};

/// Most recent entries kept in history, in memory and when persisted.
pub const HISTORY_LIMIT: usize = 100;

/// Direction of a history navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Toward older entries.
    Up,
    /// Toward newer entries and the fresh-input position.
    Down,
}

/// The session aggregate: transcript, history, cursor, and input buffer.
///
/// Owned exclusively by the session driver; everything else reads it and
/// mutates only through [`reduce_session`] actions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    /// Transcript lines in insertion order.
    pub lines: Vec<OutputLine>,
    /// Submitted non-empty commands, oldest first.
    pub history: Vec<String>,
    /// History cursor in `[0, history.len()]`; `history.len()` means
    /// "not browsing, editing fresh input".
    pub history_index: usize,
    /// Current input buffer.
    pub input: String,
    next_line_id: u64,
}

impl SessionState {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session seeded with previously persisted history.
    pub fn with_history(history: Vec<String>) -> Self {
        let history_index = history.len();
        Self {
            history,
            history_index,
            ..Self::default()
        }
    }

    /// Whether the cursor is currently browsing history.
    pub fn browsing(&self) -> bool {
        self.history_index < self.history.len()
    }
}

/// Actions accepted by [`reduce_session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Append one transcript line.
    AppendLine {
        /// Line role.
        kind: OutputKind,
        /// Renderable payload.
        content: Renderable,
        /// Prompt string for command-echo lines.
        prompt: Option<String>,
    },
    /// Empty the transcript. History is untouched.
    Clear,
    /// Replace the input buffer.
    SetInput(String),
    /// Record one submitted command and reset the cursor.
    PushHistory(String),
    /// Step the history cursor and load the entry into the input buffer.
    NavigateHistory(HistoryDirection),
    /// Empty the history and persist the empty list.
    ClearHistory,
}

/// Side-effect intents emitted by [`reduce_session`] for the driver to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    /// Persist the current history list.
    PersistHistory,
}

/// Applies one action to the session aggregate and collects side effects.
///
/// This function is the authoritative transition engine for the console
/// transcript and history; it performs no I/O.
pub fn reduce_session(state: &mut SessionState, action: SessionAction) -> Vec<SessionEffect> {
    let mut effects = Vec::new();
    match action {
        SessionAction::AppendLine {
            kind,
            content,
            prompt,
        } => {
            state.next_line_id = state.next_line_id.saturating_add(1);
            state.lines.push(OutputLine {
                id: state.next_line_id,
                kind,
                content,
                prompt,
            });
        }
        SessionAction::Clear => {
            state.lines.clear();
        }
        SessionAction::SetInput(value) => {
            state.input = value;
        }
        SessionAction::PushHistory(command) => {
            let trimmed = command.trim();
            if !trimmed.is_empty() && state.history.last().map(String::as_str) != Some(trimmed) {
                state.history.push(trimmed.to_string());
                if state.history.len() > HISTORY_LIMIT {
                    let overflow = state.history.len() - HISTORY_LIMIT;
                    state.history.drain(0..overflow);
                }
                effects.push(SessionEffect::PersistHistory);
            }
            state.history_index = state.history.len();
        }
        SessionAction::NavigateHistory(direction) => {
            if state.history.is_empty() {
                return effects;
            }
            state.history_index = match direction {
                HistoryDirection::Up => state.history_index.saturating_sub(1),
                HistoryDirection::Down => (state.history_index + 1).min(state.history.len()),
            };
            state.input = state
                .history
                .get(state.history_index)
                .cloned()
                .unwrap_or_default();
        }
        SessionAction::ClearHistory => {
            state.history.clear();
            state.history_index = 0;
            effects.push(SessionEffect::PersistHistory);
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn push(state: &mut SessionState, command: &str) -> Vec<SessionEffect> {
        reduce_session(state, SessionAction::PushHistory(command.to_string()))
    }

    fn navigate(state: &mut SessionState, direction: HistoryDirection) {
        reduce_session(state, SessionAction::NavigateHistory(direction));
    }

    #[test]
    fn append_assigns_increasing_ids() {
        let mut state = SessionState::new();
        for text in ["a", "b"] {
            reduce_session(
                &mut state,
                SessionAction::AppendLine {
                    kind: OutputKind::Output,
                    content: Renderable::text(text),
                    prompt: None,
                },
            );
        }
        assert_eq!(state.lines.len(), 2);
        assert!(state.lines[0].id < state.lines[1].id);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut state = SessionState::new();
        reduce_session(
            &mut state,
            SessionAction::AppendLine {
                kind: OutputKind::Output,
                content: Renderable::text("a"),
                prompt: None,
            },
        );
        reduce_session(&mut state, SessionAction::Clear);
        assert!(state.lines.is_empty());
        reduce_session(&mut state, SessionAction::Clear);
        assert!(state.lines.is_empty());
    }

    #[test]
    fn push_records_and_persists() {
        let mut state = SessionState::new();
        let effects = push(&mut state, "ls");
        assert_eq!(effects, vec![SessionEffect::PersistHistory]);
        assert_eq!(state.history, vec!["ls"]);
        assert_eq!(state.history_index, 1);
    }

    #[test]
    fn push_skips_empty_and_consecutive_duplicates() {
        let mut state = SessionState::new();
        push(&mut state, "ls");
        assert!(push(&mut state, "   ").is_empty());
        assert!(push(&mut state, "ls").is_empty());
        push(&mut state, "pwd");
        push(&mut state, "ls");
        assert_eq!(state.history, vec!["ls", "pwd", "ls"]);
    }

    #[test]
    fn history_is_capped_at_the_most_recent_hundred() {
        let mut state = SessionState::new();
        for index in 0..150 {
            push(&mut state, &format!("cmd-{index}"));
        }
        assert_eq!(state.history.len(), HISTORY_LIMIT);
        assert_eq!(state.history[0], "cmd-50");
        assert_eq!(state.history_index, HISTORY_LIMIT);
    }

    #[test]
    fn navigate_up_floors_at_zero() {
        let mut state = SessionState::new();
        push(&mut state, "one");
        push(&mut state, "two");
        navigate(&mut state, HistoryDirection::Up);
        assert_eq!(state.input, "two");
        navigate(&mut state, HistoryDirection::Up);
        assert_eq!(state.input, "one");
        navigate(&mut state, HistoryDirection::Up);
        assert_eq!(state.history_index, 0);
        assert_eq!(state.input, "one");
    }

    #[test]
    fn navigate_down_ceilings_at_fresh_input() {
        let mut state = SessionState::new();
        push(&mut state, "one");
        navigate(&mut state, HistoryDirection::Up);
        navigate(&mut state, HistoryDirection::Down);
        assert_eq!(state.history_index, state.history.len());
        assert_eq!(state.input, "");
        navigate(&mut state, HistoryDirection::Down);
        assert_eq!(state.history_index, state.history.len());
        assert_eq!(state.input, "");
    }

    #[test]
    fn navigate_on_empty_history_is_a_noop() {
        let mut state = SessionState::new();
        navigate(&mut state, HistoryDirection::Up);
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn clear_history_persists_the_empty_list() {
        let mut state = SessionState::new();
        push(&mut state, "ls");
        let effects = reduce_session(&mut state, SessionAction::ClearHistory);
        assert_eq!(effects, vec![SessionEffect::PersistHistory]);
        assert!(state.history.is_empty());
        assert_eq!(state.history_index, 0);
    }
}
