//! Section navigation commands: `ls`, `cat`, `cd`, `pwd`.

use std::rc::Rc;

use console_shell_contract::{
    CommandError, CommandResult, TextLine, TextSpan, TextStyle,
};
use site_content::{render, section_names, SectionId};

use super::descriptor;
use crate::CommandRegistration;

const VIRTUAL_CWD: &str = "/home/guest/portfolio";

fn available_sections() -> String {
    section_names().join(", ")
}

pub(super) fn ls_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "ls",
            "List available sections",
            "ls [-l] [-a] [section]",
            vec![
                ("-l", "Use long listing format"),
                ("-a", "Include hidden sections"),
            ],
        ),
        handler: Rc::new(|context| {
            Box::pin(async move {
                let long = context.has_flag("-l", "--long");
                let all = context.has_flag("-a", "--all");

                if let Some(raw) = context.operands().first() {
                    let name = raw.to_ascii_lowercase();
                    return match SectionId::parse(&name) {
                        Some(section) => Ok(CommandResult::text(format!(
                            "Use 'cat {}' to view contents",
                            section.as_str()
                        ))),
                        None => Err(CommandError::domain(format!(
                            "ls: cannot access '{raw}': No such file or directory\nAvailable: {}",
                            available_sections()
                        ))),
                    };
                }

                let sections: &[SectionId] = if all {
                    &SectionId::ALL
                } else {
                    &SectionId::VISIBLE
                };
                if long {
                    let lines = sections
                        .iter()
                        .map(|section| {
                            TextLine::new(vec![
                                TextSpan::styled(
                                    TextStyle::Link,
                                    format!("{:<16}", section.as_str()),
                                ),
                                TextSpan::styled(TextStyle::Muted, section.description()),
                            ])
                        })
                        .collect();
                    return Ok(CommandResult::rich(lines));
                }

                let mut spans = Vec::new();
                for (index, section) in sections.iter().enumerate() {
                    if index > 0 {
                        spans.push(TextSpan::plain("  "));
                    }
                    spans.push(TextSpan::styled(TextStyle::Link, section.as_str()));
                }
                Ok(CommandResult::rich(vec![TextLine::new(spans)]))
            })
        }),
    }
}

pub(super) fn cat_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "cat",
            "Display section content",
            "cat <section>... [-n]",
            vec![("-n", "Number output lines")],
        ),
        handler: Rc::new(|context| {
            Box::pin(async move {
                let number = context.has_flag("-n", "--number");
                let operands = context.operands();
                if operands.is_empty() {
                    return Err(CommandError::domain(format!(
                        "Usage: cat <section>\nAvailable sections: {}",
                        available_sections()
                    )));
                }

                let mut sections = Vec::new();
                for raw in &operands {
                    let name = raw.to_ascii_lowercase();
                    match SectionId::parse(&name) {
                        Some(section) => sections.push(section),
                        None => {
                            return Err(CommandError::domain(format!(
                                "Section not found: {raw}\nAvailable sections: {}",
                                available_sections()
                            )))
                        }
                    }
                }

                let mut lines = Vec::new();
                for (index, section) in sections.into_iter().enumerate() {
                    if index > 0 {
                        lines.push(TextLine::blank());
                    }
                    lines.extend(render::section_lines(&context.config, section));
                }
                if number {
                    lines = lines
                        .into_iter()
                        .enumerate()
                        .map(|(index, line)| {
                            let mut spans =
                                vec![TextSpan::styled(TextStyle::Muted, format!("{:>6}  ", index + 1))];
                            spans.extend(line.spans);
                            TextLine::new(spans)
                        })
                        .collect();
                }
                Ok(CommandResult::rich(lines))
            })
        }),
    }
}

pub(super) fn cd_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "cd",
            "Change directory (limited support)",
            "cd [section]",
            vec![],
        ),
        handler: Rc::new(|context| {
            Box::pin(async move {
                let Some(raw) = context.operands().first().cloned().cloned() else {
                    return Ok(CommandResult::text(format!(
                        "This is a flat file system. Use 'cat <section>' to view contents.\n\
                         Available sections: {}",
                        available_sections()
                    )));
                };
                let name = raw.to_ascii_lowercase();
                match SectionId::parse(&name) {
                    Some(section) => Ok(CommandResult::text(format!(
                        "Use 'cat {}' to view contents",
                        section.as_str()
                    ))),
                    None => Err(CommandError::domain(format!(
                        "cd: {raw}: No such file or directory"
                    ))),
                }
            })
        }),
    }
}

pub(super) fn pwd_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("pwd", "Print working directory", "pwd", vec![]),
        handler: Rc::new(|_context| {
            Box::pin(async { Ok(CommandResult::text(VIRTUAL_CWD)) })
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::testing::{output_text, run};
    use super::*;

    #[test]
    fn ls_lists_visible_sections() {
        let result = run(&ls_registration(), &[]).expect("ls");
        let text = output_text(&result);
        assert!(text.contains("about"));
        assert!(text.contains("resume"));
        assert!(!text.contains("certifications"));
    }

    #[test]
    fn ls_all_includes_hidden_sections() {
        let result = run(&ls_registration(), &["-a"]).expect("ls -a");
        assert!(output_text(&result).contains("certifications"));
    }

    #[test]
    fn ls_long_includes_descriptions() {
        let result = run(&ls_registration(), &["-l"]).expect("ls -l");
        assert!(output_text(&result).contains("Work history"));
    }

    #[test]
    fn ls_rejects_unknown_section() {
        let error = run(&ls_registration(), &["downloads"]).expect_err("bad section");
        assert!(error.to_string().contains("downloads"));
    }

    #[test]
    fn cat_renders_about_bio() {
        let result = run(&cat_registration(), &["about"]).expect("cat about");
        assert!(output_text(&result).contains("Staff software engineer"));
    }

    #[test]
    fn cat_is_case_insensitive_for_sections() {
        let result = run(&cat_registration(), &["About"]).expect("cat About");
        assert!(!result.is_error);
    }

    #[test]
    fn cat_numbers_lines_with_dash_n() {
        let result = run(&cat_registration(), &["contact", "-n"]).expect("cat -n");
        let text = output_text(&result);
        assert!(text.contains("1  "));
        assert!(text.contains("3  "));
    }

    #[test]
    fn cat_concatenates_multiple_sections() {
        let result = run(&cat_registration(), &["contact", "resume"]).expect("cat x y");
        let text = output_text(&result);
        assert!(text.contains("Email:"));
        assert!(text.contains("Download my resume"));
    }

    #[test]
    fn cat_without_operand_is_a_domain_error() {
        let error = run(&cat_registration(), &[]).expect_err("missing operand");
        assert!(error.to_string().contains("Usage: cat <section>"));
    }

    #[test]
    fn cd_reports_flat_filesystem() {
        let result = run(&cd_registration(), &[]).expect("cd");
        assert!(output_text(&result).contains("flat file system"));
    }

    #[test]
    fn cd_rejects_unknown_target() {
        let error = run(&cd_registration(), &["tmp"]).expect_err("cd tmp");
        assert_eq!(error.to_string(), "cd: tmp: No such file or directory");
    }

    #[test]
    fn pwd_prints_virtual_path() {
        let result = run(&pwd_registration(), &[]).expect("pwd");
        assert_eq!(output_text(&result), "/home/guest/portfolio");
    }
}
