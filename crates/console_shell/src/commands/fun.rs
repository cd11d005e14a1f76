//! Decorative commands: `sudo`, `cowsay`, `fortune`, `matrix`, `cal`.

use std::rc::Rc;

use chrono::{Datelike, Local, NaiveDate, Utc};
use console_shell_contract::{CommandError, CommandResult, TextLine, TextStyle};

use super::descriptor;
use crate::CommandRegistration;

pub(super) fn sudo_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("sudo", "Execute a command as another user", "sudo <command>", vec![]),
        handler: Rc::new(|_context| {
            Box::pin(async {
                Ok(CommandResult::error(
                    "guest is not in the sudoers file. This incident will be reported.",
                ))
            })
        }),
    }
}

const BUBBLE_WIDTH: usize = 40;

fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn speech_bubble(text: &str) -> Vec<String> {
    let body = wrap_words(text, BUBBLE_WIDTH);
    let width = body.iter().map(String::len).max().unwrap_or(0);
    let mut out = vec![format!(" {}", "_".repeat(width + 2))];
    match body.as_slice() {
        [] => out.push("<  >".to_string()),
        [only] => out.push(format!("< {only} >")),
        [first, middle @ .., last] => {
            out.push(format!("/ {first:<width$} \\"));
            for line in middle {
                out.push(format!("| {line:<width$} |"));
            }
            out.push(format!("\\ {last:<width$} /"));
        }
    }
    out.push(format!(" {}", "-".repeat(width + 2)));
    out
}

const COW: [&str; 5] = [
    r"        \   ^__^",
    r"         \  (oo)\_______",
    r"            (__)\       )\/\",
    r"                ||----w |",
    r"                ||     ||",
];

pub(super) fn cowsay_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("cowsay", "A talking cow", "cowsay [message...]", vec![]),
        handler: Rc::new(|context| {
            Box::pin(async move {
                let message = if context.args.is_empty() {
                    "Moo! Try `cat projects`.".to_string()
                } else {
                    context.args.join(" ")
                };
                let mut rows = speech_bubble(&message);
                rows.extend(COW.iter().map(|row| row.to_string()));
                Ok(CommandResult::text(rows.join("\n")))
            })
        }),
    }
}

const FORTUNES: [&str; 6] = [
    "There are two hard things in computer science: cache invalidation, naming things, and off-by-one errors.",
    "A deployed prototype is production. A documented workaround is a feature.",
    "The best error message is the one that never shows up. The second best names the fix.",
    "Weeks of coding can save you hours of planning.",
    "It works on my machine. We ship your machine.",
    "Simplicity is prerequisite for reliability.",
];

pub(super) fn fortune_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("fortune", "Print a random adage", "fortune", vec![]),
        handler: Rc::new(|_context| {
            Box::pin(async {
                let index = Utc::now().timestamp_millis().rem_euclid(FORTUNES.len() as i64);
                Ok(CommandResult::text(FORTUNES[index as usize]))
            })
        }),
    }
}

const MATRIX_LINES: [&str; 4] = [
    "Wake up, Neo...",
    "The Matrix has you...",
    "Follow the white rabbit.",
    "Knock, knock, Neo.",
];

pub(super) fn matrix_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("matrix", "There is no spoon", "matrix", vec![]),
        handler: Rc::new(|_context| {
            Box::pin(async {
                let mut lines: Vec<TextLine> = MATRIX_LINES
                    .iter()
                    .map(|line| TextLine::styled(TextStyle::Success, *line))
                    .collect();
                lines.push(TextLine::styled(
                    TextStyle::Muted,
                    "(Try `theme matrix` for the full effect.)",
                ));
                Ok(CommandResult::rich(lines))
            })
        }),
    }
}

pub(super) fn cal_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("cal", "Display a calendar for the current month", "cal", vec![]),
        handler: Rc::new(|_context| {
            Box::pin(async {
                let today = Local::now().date_naive();
                let text = month_grid(today.year(), today.month())
                    .ok_or_else(|| CommandError::handler("cal", "calendar out of range"))?;
                Ok(CommandResult::text(text))
            })
        }),
    }
}

fn month_grid(year: i32, month: u32) -> Option<String> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()?
        .day();

    let mut rows = vec![
        format!("{:^20}", first.format("%B %Y")),
        "Su Mo Tu We Th Fr Sa".to_string(),
    ];
    let mut week = "   ".repeat(first.weekday().num_days_from_sunday() as usize);
    for day in 1..=last_day {
        week.push_str(&format!("{day:>2} "));
        let weekday = (first.weekday().num_days_from_sunday() + day - 1) % 7;
        if weekday == 6 {
            rows.push(week.trim_end().to_string());
            week = String::new();
        }
    }
    if !week.trim().is_empty() {
        rows.push(week.trim_end().to_string());
    }
    Some(rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::testing::{output_text, run};
    use super::*;

    #[test]
    fn sudo_is_denied_as_an_error() {
        let result = run(&sudo_registration(), &[]).expect("sudo");
        assert!(result.is_error);
        assert!(output_text(&result).contains("sudoers"));
    }

    #[test]
    fn cowsay_quotes_the_message() {
        let result = run(&cowsay_registration(), &["hello", "there"]).expect("cowsay");
        let text = output_text(&result);
        assert!(text.contains("< hello there >"));
        assert!(text.contains("(oo)"));
    }

    #[test]
    fn cowsay_wraps_long_messages() {
        let long = ["word"; 20];
        let result = run(&cowsay_registration(), &long).expect("cowsay");
        let text = output_text(&result);
        assert!(text.contains("/ "));
        assert!(text.contains("\\ "));
    }

    #[test]
    fn fortune_prints_a_known_adage() {
        let result = run(&fortune_registration(), &[]).expect("fortune");
        let text = output_text(&result);
        assert!(FORTUNES.contains(&text.as_str()));
    }

    #[test]
    fn matrix_quotes_the_film() {
        let result = run(&matrix_registration(), &[]).expect("matrix");
        assert!(output_text(&result).contains("white rabbit"));
    }

    #[test]
    fn month_grid_lays_out_known_month() {
        // August 2026 starts on a Saturday and has 31 days.
        let grid = month_grid(2026, 8).expect("grid");
        let lines: Vec<&str> = grid.lines().collect();
        assert!(lines[0].contains("August 2026"));
        assert_eq!(lines[1], "Su Mo Tu We Th Fr Sa");
        assert!(lines[2].ends_with(" 1"));
        assert!(grid.contains("31"));
    }

    #[test]
    fn month_grid_handles_december_rollover() {
        assert!(month_grid(2025, 12).is_some());
    }
}
