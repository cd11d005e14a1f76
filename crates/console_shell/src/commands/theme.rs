//! The `theme` command: report, list, and switch through the injected port.

use std::rc::Rc;

use console_shell_contract::{CommandError, CommandResult, TextLine, TextSpan, TextStyle};
use site_content::themes;

use super::descriptor;
use crate::ports::ThemePort;
use crate::CommandRegistration;

pub(super) fn theme_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "theme",
            "Show, list, or switch terminal themes",
            "theme [-l] [name]",
            vec![("-l, --list", "List available themes")],
        ),
        handler: Rc::new(|context| {
            Box::pin(async move {
                if context.has_flag("-l", "--list") {
                    return Ok(list_result(&context.theme.current()));
                }

                if let Some(flag) = context.args.iter().find(|arg| arg.starts_with('-')) {
                    return Err(CommandError::domain(format!(
                        "theme: invalid option '{flag}'"
                    )));
                }

                let Some(raw) = context.args.first() else {
                    return Ok(current_result(&context.theme.current()));
                };

                let requested = raw.to_ascii_lowercase();
                let Some(theme) = themes::find_theme(&requested) else {
                    return Err(CommandError::domain(format!(
                        "Unknown theme: {raw}\nAvailable: {}",
                        themes::theme_ids().join(", ")
                    )));
                };

                context
                    .theme
                    .request(&theme.id)
                    .map_err(|message| CommandError::handler("theme", message))?;
                Ok(CommandResult::text(format!(
                    "Theme switched to: {}",
                    theme.name
                )))
            })
        }),
    }
}

fn current_result(current: &str) -> CommandResult {
    let description = themes::find_theme(current)
        .map(|theme| theme.description.as_str())
        .unwrap_or("unregistered theme");
    CommandResult::rich(vec![TextLine::new(vec![
        TextSpan::styled(TextStyle::Prompt, "Current theme: "),
        TextSpan::styled(TextStyle::Success, current),
        TextSpan::styled(TextStyle::Muted, format!(" - {description}")),
    ])])
}

fn list_result(current: &str) -> CommandResult {
    let mut lines = vec![TextLine::styled(TextStyle::Prompt, "Available themes:")];
    for theme in themes::themes() {
        let is_current = theme.id == current;
        let marker = if is_current { "* " } else { "  " };
        let style = if is_current {
            TextStyle::Success
        } else {
            TextStyle::Link
        };
        lines.push(TextLine::new(vec![
            TextSpan::styled(style, format!("{marker}{:<14}", theme.id)),
            TextSpan::styled(TextStyle::Muted, format!("- {}", theme.description)),
        ]));
    }
    lines.push(TextLine::styled(
        TextStyle::Muted,
        "Use 'theme <name>' to switch themes",
    ));
    CommandResult::rich(lines)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::super::testing::{context, output_text, run};
    use super::*;

    #[test]
    fn bare_theme_reports_current() {
        let result = run(&theme_registration(), &[]).expect("theme");
        let text = output_text(&result);
        assert!(text.contains("Current theme: green"));
    }

    #[test]
    fn list_marks_the_current_theme() {
        let result = run(&theme_registration(), &["-l"]).expect("theme -l");
        let text = output_text(&result);
        assert!(text.contains("* green"));
        assert!(text.contains("matrix"));
    }

    #[test]
    fn switching_updates_the_port() {
        let registration = theme_registration();
        let context = context(&["matrix"]);
        let port = context.theme.clone();
        let result = block_on((registration.handler)(context)).expect("switch");
        assert_eq!(output_text(&result), "Theme switched to: Matrix");
        assert_eq!(port.current(), "matrix");
    }

    #[test]
    fn unknown_theme_is_a_domain_error() {
        let error = run(&theme_registration(), &["solarized"]).expect_err("unknown");
        assert!(error.to_string().contains("Unknown theme: solarized"));
    }

    #[test]
    fn invalid_option_is_rejected() {
        let error = run(&theme_registration(), &["-s", "green"]).expect_err("flag");
        assert!(error.to_string().contains("invalid option"));
    }
}
