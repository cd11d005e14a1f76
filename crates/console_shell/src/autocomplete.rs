//! Prefix-based autocomplete over command names and context-specific candidates.

use console_shell_contract::Completion;
use site_content::{all_section_names, themes};

use crate::CommandRegistry;

const THEME_FLAGS: [&str; 3] = ["-l", "-h", "--help"];
const GENERIC_FLAGS: [&str; 2] = ["-h", "--help"];

/// Completion engine over a fixed registry snapshot.
pub struct CompletionEngine {
    command_names: Vec<String>,
    sections: Vec<String>,
    theme_ids: Vec<String>,
}

impl CompletionEngine {
    /// Builds an engine from the registry's command names plus the fixed
    /// section and theme identifier sets.
    pub fn new(registry: &CommandRegistry) -> Self {
        Self {
            command_names: registry.names(),
            sections: all_section_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            theme_ids: themes::theme_ids()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Proposes a completion for `input`.
    ///
    /// A unique match replaces the last token and appends a trailing space.
    /// Multiple matches extend the last token to their longest common prefix
    /// when that prefix is strictly longer; otherwise the candidates are
    /// returned as suggestions and the input is left unchanged.
    pub fn suggest(&self, input: &str) -> Completion {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Completion::unchanged(input);
        }

        let mut tokens: Vec<String> = trimmed.split_whitespace().map(str::to_string).collect();
        let ends_with_space = input
            .chars()
            .last()
            .map(char::is_whitespace)
            .unwrap_or(false);
        // A trailing space starts a fresh argument.
        if ends_with_space {
            tokens.push(String::new());
        }
        let Some(last) = tokens.last().cloned() else {
            return Completion::unchanged(input);
        };

        let candidates: Vec<String> = if tokens.len() == 1 {
            self.command_names.clone()
        } else {
            match tokens[0].to_ascii_lowercase().as_str() {
                "cat" | "cd" => self.sections.clone(),
                "theme" if last.starts_with('-') => {
                    THEME_FLAGS.iter().map(|flag| flag.to_string()).collect()
                }
                "theme" => self.theme_ids.clone(),
                "help" | "man" => self.command_names.clone(),
                _ if last.starts_with('-') => {
                    GENERIC_FLAGS.iter().map(|flag| flag.to_string()).collect()
                }
                _ => Vec::new(),
            }
        };

        let matches: Vec<String> = candidates
            .into_iter()
            .filter(|candidate| candidate.starts_with(&last))
            .collect();

        match matches.as_slice() {
            [] => Completion::unchanged(input),
            [only] => {
                replace_last(&mut tokens, only.clone());
                Completion {
                    completed: tokens.join(" ") + " ",
                    suggestions: Vec::new(),
                }
            }
            _ => {
                let prefix = common_prefix(&matches);
                if prefix.len() > last.len() {
                    replace_last(&mut tokens, prefix);
                    Completion {
                        completed: tokens.join(" "),
                        suggestions: Vec::new(),
                    }
                } else {
                    Completion {
                        completed: input.to_string(),
                        suggestions: matches,
                    }
                }
            }
        }
    }
}

fn replace_last(tokens: &mut [String], value: String) {
    if let Some(last) = tokens.last_mut() {
        *last = value;
    }
}

/// Longest common prefix of the candidates, case-sensitive; empty for an
/// empty candidate list.
fn common_prefix(candidates: &[String]) -> String {
    let Some(first) = candidates.first() else {
        return String::new();
    };
    let mut prefix: Vec<char> = first.chars().collect();
    for candidate in &candidates[1..] {
        let chars: Vec<char> = candidate.chars().collect();
        let mut shared = 0;
        while shared < prefix.len() && shared < chars.len() && prefix[shared] == chars[shared] {
            shared += 1;
        }
        prefix.truncate(shared);
        if prefix.is_empty() {
            break;
        }
    }
    prefix.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use console_shell_contract::CommandResult;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{commands, CommandRegistration, CommandRegistry};

    fn stub_registry(names: &[&str]) -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        for name in names {
            registry.register(CommandRegistration {
                descriptor: commands::descriptor(name, "stub", name, vec![]),
                handler: Rc::new(|_context| {
                    Box::pin(async { Ok(CommandResult::silent()) })
                }),
            });
        }
        registry
    }

    #[test]
    fn ambiguous_command_prefix_lists_candidates() {
        let engine = CompletionEngine::new(&stub_registry(&["cat", "cal", "cd", "clear"]));
        let completion = engine.suggest("c");
        assert_eq!(completion.completed, "c");
        assert_eq!(completion.suggestions, vec!["cal", "cat", "cd", "clear"]);
    }

    #[test]
    fn unique_command_match_appends_trailing_space() {
        let engine = CompletionEngine::new(&stub_registry(&["cat", "cal", "cd", "clear"]));
        let completion = engine.suggest("cl");
        assert_eq!(completion.completed, "clear ");
        assert!(completion.suggestions.is_empty());
    }

    #[test]
    fn common_prefix_extension_has_no_trailing_space() {
        let engine = CompletionEngine::new(&stub_registry(&["cat", "cal"]));
        let completion = engine.suggest("c");
        assert_eq!(completion.completed, "ca");
        assert!(completion.suggestions.is_empty());
    }

    #[test]
    fn cat_argument_completes_sections() {
        let engine = CompletionEngine::new(&stub_registry(&["cat"]));
        let completion = engine.suggest("cat ab");
        assert_eq!(completion.completed, "cat about ");
    }

    #[test]
    fn trailing_space_starts_a_new_argument() {
        let engine = CompletionEngine::new(&stub_registry(&["cat"]));
        let completion = engine.suggest("cat ");
        assert_eq!(completion.completed, "cat ");
        assert!(completion.suggestions.contains(&"about".to_string()));
        assert!(completion.suggestions.contains(&"resume".to_string()));
    }

    #[test]
    fn theme_argument_completes_theme_ids_and_flags() {
        let engine = CompletionEngine::new(&stub_registry(&["theme"]));
        assert_eq!(engine.suggest("theme ma").completed, "theme matrix ");
        assert_eq!(engine.suggest("theme -l").completed, "theme -l ");
    }

    #[test]
    fn man_argument_completes_command_names() {
        let engine = CompletionEngine::new(&stub_registry(&["man", "cat", "clear"]));
        let completion = engine.suggest("man cl");
        assert_eq!(completion.completed, "man clear ");
    }

    #[test]
    fn unknown_prefix_leaves_input_unchanged() {
        let engine = CompletionEngine::new(&stub_registry(&["cat"]));
        let completion = engine.suggest("zz");
        assert_eq!(completion.completed, "zz");
        assert!(completion.suggestions.is_empty());
    }

    #[test]
    fn flag_prefix_on_other_commands_offers_help_flags() {
        let engine = CompletionEngine::new(&stub_registry(&["echo"]));
        let completion = engine.suggest("echo --h");
        assert_eq!(completion.completed, "echo --help ");
    }

    #[test]
    fn common_prefix_of_empty_list_is_empty() {
        assert_eq!(common_prefix(&[]), "");
    }
}
