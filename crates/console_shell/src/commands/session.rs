//! Session-facing commands: `help`, `man`, `clear`, `history`, `motd`, `export`.

use std::rc::Rc;

use console_shell_contract::{
    CommandError, CommandResult, TextLine, TextSpan, TextStyle,
};

use super::{builtin_descriptors, descriptor};
use crate::ports::ExportPort;
use crate::{render_help, CommandRegistration};

pub(super) fn help_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "help",
            "Show available commands",
            "help [command]",
            vec![],
        ),
        handler: Rc::new(|context| {
            Box::pin(async move {
                let descriptors = builtin_descriptors();

                if let Some(target) = context.args.first() {
                    let name = target.to_ascii_lowercase();
                    let Some(matched) = descriptors.iter().find(|d| d.name == name) else {
                        return Err(CommandError::domain(format!(
                            "help: no such command: {target}"
                        )));
                    };
                    return Ok(CommandResult {
                        output: Some(render_help(matched)),
                        ..CommandResult::default()
                    });
                }

                let mut lines = vec![TextLine::styled(TextStyle::Prompt, "Available Commands:")];
                for command in &descriptors {
                    lines.push(TextLine::new(vec![
                        TextSpan::styled(TextStyle::Success, format!("  {:<10}", command.name)),
                        TextSpan::styled(TextStyle::Muted, command.description.clone()),
                    ]));
                }
                lines.push(TextLine::blank());
                lines.push(TextLine::styled(
                    TextStyle::Muted,
                    "Tip: Use Tab for autocomplete, Up/Down for history",
                ));
                Ok(CommandResult::rich(lines))
            })
        }),
    }
}

pub(super) fn man_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "man",
            "Show the manual page for a command",
            "man <command>",
            vec![],
        ),
        handler: Rc::new(|context| {
            Box::pin(async move {
                let Some(target) = context.args.first() else {
                    return Err(CommandError::domain("man: what manual page do you want?"));
                };
                let name = target.to_ascii_lowercase();
                let descriptors = builtin_descriptors();
                let Some(matched) = descriptors.iter().find(|d| d.name == name) else {
                    return Err(CommandError::domain(format!(
                        "man: no manual entry for {target}"
                    )));
                };
                Ok(CommandResult {
                    output: Some(render_help(matched)),
                    ..CommandResult::default()
                })
            })
        }),
    }
}

pub(super) fn clear_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("clear", "Clear the terminal screen", "clear", vec![]),
        handler: Rc::new(|_context| Box::pin(async { Ok(CommandResult::clear_screen()) })),
    }
}

pub(super) fn history_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "history",
            "Show command history",
            "history [-c] [n]",
            vec![("-c", "Clear the command history")],
        ),
        handler: Rc::new(|context| {
            Box::pin(async move {
                if context.has_flag("-c", "--clear") {
                    return Ok(CommandResult {
                        output: Some(console_shell_contract::Renderable::text(
                            "history cleared",
                        )),
                        clear_history: true,
                        ..CommandResult::default()
                    });
                }

                if context.history.is_empty() {
                    return Ok(CommandResult::text("No commands in history"));
                }

                let limit = match context.operands().first() {
                    Some(raw) => raw.parse::<usize>().map_err(|_| {
                        CommandError::domain(format!("history: invalid count: {raw}"))
                    })?,
                    None => context.history.len(),
                };

                let start = context.history.len().saturating_sub(limit);
                let lines = context
                    .history
                    .iter()
                    .enumerate()
                    .skip(start)
                    .map(|(index, entry)| {
                        TextLine::new(vec![
                            TextSpan::styled(TextStyle::Muted, format!("{:>5}  ", index + 1)),
                            TextSpan::plain(entry.clone()),
                        ])
                    })
                    .collect();
                Ok(CommandResult::rich(lines))
            })
        }),
    }
}

const BANNER: [&str; 4] = [
    r"  ___  ___  _ __  ___  ___ | | ___ ",
    r" / __|/ _ \| '_ \/ __|/ _ \| |/ _ \",
    r"| (__| (_) | | | \__ \ (_) | |  __/",
    r" \___|\___/|_| |_|___/\___/|_|\___|",
];

pub(super) fn motd_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("motd", "Show welcome message", "motd", vec![]),
        handler: Rc::new(|context| {
            Box::pin(async move {
                let mut lines: Vec<TextLine> = BANNER
                    .iter()
                    .map(|row| TextLine::styled(TextStyle::Accent, *row))
                    .collect();
                lines.push(TextLine::blank());
                lines.push(TextLine::new(vec![
                    TextSpan::styled(TextStyle::Muted, "Welcome to the terminal portfolio of "),
                    TextSpan::styled(TextStyle::Prompt, context.config.personal.name.clone()),
                    TextSpan::styled(TextStyle::Muted, "."),
                ]));
                lines.push(TextLine::new(vec![
                    TextSpan::styled(TextStyle::Muted, "Type "),
                    TextSpan::styled(TextStyle::Success, "help"),
                    TextSpan::styled(TextStyle::Muted, " for available commands."),
                ]));
                Ok(CommandResult::rich(lines))
            })
        }),
    }
}

pub(super) fn export_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("export", "Download resume PDF", "export", vec![]),
        handler: Rc::new(|context| {
            Box::pin(async move {
                let filename = context.config.resume.filename.clone();
                context
                    .exporter
                    .request_download(&filename)
                    .map_err(|message| CommandError::handler("export", message))?;
                Ok(CommandResult::text(format!("Downloading {filename}...")))
            })
        }),
    }
}
