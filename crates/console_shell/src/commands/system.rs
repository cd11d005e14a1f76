//! System-flavored commands: `echo`, `whoami`, `hostname`, `id`, `date`, `uname`.

use std::rc::Rc;

use chrono::{Local, Utc};
use console_shell_contract::{CommandResult, TextLine, TextSpan, TextStyle};

use super::descriptor;
use crate::{version, CommandRegistration};

pub(super) fn echo_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("echo", "Display a message", "echo [message...]", vec![]),
        handler: Rc::new(|context| {
            Box::pin(async move { Ok(CommandResult::text(context.args.join(" "))) })
        }),
    }
}

pub(super) fn whoami_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("whoami", "Display user identity", "whoami", vec![]),
        handler: Rc::new(|context| {
            Box::pin(async move {
                let lines = vec![
                    identity_line("username:", "guest"),
                    identity_line("host:", &context.config.hostname()),
                    identity_line("shell:", "/bin/portfolio"),
                    TextLine::blank(),
                    TextLine::styled(
                        TextStyle::Muted,
                        "\"Ask me about the retry loop that once took out a data center.\"",
                    ),
                ];
                Ok(CommandResult::rich(lines))
            })
        }),
    }
}

fn identity_line(label: &str, value: &str) -> TextLine {
    TextLine::new(vec![
        TextSpan::styled(TextStyle::Prompt, format!("{label:<10}")),
        TextSpan::plain(value),
    ])
}

pub(super) fn hostname_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("hostname", "Print the host name", "hostname", vec![]),
        handler: Rc::new(|context| {
            Box::pin(async move { Ok(CommandResult::text(context.config.hostname())) })
        }),
    }
}

pub(super) fn id_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("id", "Print user and group ids", "id", vec![]),
        handler: Rc::new(|_context| {
            Box::pin(async {
                Ok(CommandResult::text(
                    "uid=1000(guest) gid=1000(guest) groups=1000(guest)",
                ))
            })
        }),
    }
}

pub(super) fn date_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "date",
            "Display current date and time",
            "date [-u]",
            vec![("-u", "Print Coordinated Universal Time")],
        ),
        handler: Rc::new(|context| {
            Box::pin(async move {
                let text = if context.has_flag("-u", "--utc") {
                    Utc::now().format("%a %b %e %H:%M:%S UTC %Y").to_string()
                } else {
                    Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
                };
                Ok(CommandResult::text(text))
            })
        }),
    }
}

pub(super) fn uname_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "uname",
            "Display system information",
            "uname [-a] [-n]",
            vec![
                ("-a, --all", "Show all system information"),
                ("-n, --node", "Show host environment information"),
            ],
        ),
        handler: Rc::new(|context| {
            Box::pin(async move {
                if context.has_flag("-n", "--node") {
                    return Ok(CommandResult::rich(host_environment_lines().await));
                }

                let product = &context.config.product;
                if !context.has_flag("-a", "--all") {
                    return Ok(CommandResult::text(format!(
                        "{} v{}",
                        product.name, product.version
                    )));
                }

                let mut lines = vec![
                    TextLine::styled(TextStyle::Prompt, "System Information:"),
                    TextLine::new(vec![
                        TextSpan::styled(TextStyle::Link, format!("{:<14}", "Product:")),
                        TextSpan::plain(format!("{} v{}", product.name, product.version)),
                    ]),
                    TextLine::new(vec![
                        TextSpan::styled(TextStyle::Link, format!("{:<14}", "Platform:")),
                        TextSpan::plain(format!(
                            "{}/{}",
                            std::env::consts::OS,
                            std::env::consts::ARCH
                        )),
                    ]),
                    TextLine::blank(),
                    TextLine::styled(TextStyle::Prompt, "Core Dependencies:"),
                ];
                for (name, version) in version::DEPENDENCY_VERSIONS {
                    lines.push(TextLine::new(vec![
                        TextSpan::styled(TextStyle::Link, format!("{name:<14}")),
                        TextSpan::plain(*version),
                    ]));
                }
                Ok(CommandResult::rich(lines))
            })
        }),
    }
}

// Gathered behind an await point so slow host probes never block dispatch setup.
async fn host_environment_lines() -> Vec<TextLine> {
    let cpus = std::thread::available_parallelism()
        .map(|count| count.get().to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    let entries = [
        ("OS", std::env::consts::OS.to_string()),
        ("Architecture", std::env::consts::ARCH.to_string()),
        ("Family", std::env::consts::FAMILY.to_string()),
        ("CPU threads", cpus),
    ];
    let mut lines = vec![TextLine::styled(TextStyle::Prompt, "Host Environment:")];
    for (label, value) in entries {
        lines.push(TextLine::new(vec![
            TextSpan::styled(TextStyle::Link, format!("{:<14}", format!("{label}:"))),
            TextSpan::plain(value),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::testing::{output_text, run};
    use super::*;

    #[test]
    fn echo_joins_arguments() {
        let result = run(&echo_registration(), &["hello", "world"]).expect("echo");
        assert_eq!(output_text(&result), "hello world");
    }

    #[test]
    fn echo_without_arguments_is_an_empty_line() {
        let result = run(&echo_registration(), &[]).expect("echo");
        assert_eq!(output_text(&result), "");
    }

    #[test]
    fn whoami_reports_guest_identity() {
        let result = run(&whoami_registration(), &[]).expect("whoami");
        let text = output_text(&result);
        assert!(text.contains("guest"));
        assert!(text.contains("-portfolio"));
    }

    #[test]
    fn hostname_matches_config() {
        let result = run(&hostname_registration(), &[]).expect("hostname");
        assert!(output_text(&result).ends_with("-portfolio"));
    }

    #[test]
    fn date_utc_flag_is_labeled() {
        let result = run(&date_registration(), &["-u"]).expect("date -u");
        assert!(output_text(&result).contains("UTC"));
    }

    #[test]
    fn uname_defaults_to_product_and_version() {
        let result = run(&uname_registration(), &[]).expect("uname");
        assert!(output_text(&result).starts_with("console-portfolio v"));
    }

    #[test]
    fn uname_all_lists_dependency_catalog() {
        let result = run(&uname_registration(), &["-a"]).expect("uname -a");
        let text = output_text(&result);
        assert!(text.contains("Core Dependencies:"));
        assert!(text.contains("futures"));
    }

    #[test]
    fn uname_node_reports_host_environment() {
        let result = run(&uname_registration(), &["-n"]).expect("uname -n");
        assert!(output_text(&result).contains("Architecture"));
    }
}
