//! Builtin command registrations, grouped by concern.

mod fun;
mod sections;
mod session;
mod system;
mod theme;

use console_shell_contract::{CommandDescriptor, CommandOptionSpec};

use crate::{CommandRegistration, CommandRegistry};

/// Builds a descriptor, appending the uniform help option every command carries.
pub(crate) fn descriptor(
    name: &str,
    description: &str,
    usage: &str,
    options: Vec<(&str, &str)>,
) -> CommandDescriptor {
    let mut options: Vec<CommandOptionSpec> = options
        .into_iter()
        .map(|(flag, description)| CommandOptionSpec {
            flag: flag.to_string(),
            description: description.to_string(),
        })
        .collect();
    options.push(CommandOptionSpec {
        flag: "-h, --help".to_string(),
        description: "Show this help message".to_string(),
    });
    CommandDescriptor {
        name: name.to_string(),
        description: description.to_string(),
        usage: usage.to_string(),
        options,
    }
}

/// Every builtin registration, in help-listing order of concern.
pub fn builtin_registrations() -> Vec<CommandRegistration> {
    vec![
        session::help_registration(),
        session::man_registration(),
        sections::ls_registration(),
        sections::cat_registration(),
        sections::cd_registration(),
        sections::pwd_registration(),
        session::clear_registration(),
        session::history_registration(),
        system::echo_registration(),
        system::whoami_registration(),
        system::hostname_registration(),
        system::id_registration(),
        system::date_registration(),
        system::uname_registration(),
        theme::theme_registration(),
        session::motd_registration(),
        session::export_registration(),
        fun::sudo_registration(),
        fun::cowsay_registration(),
        fun::fortune_registration(),
        fun::matrix_registration(),
        fun::cal_registration(),
    ]
}

/// Descriptors for every builtin command.
pub fn builtin_descriptors() -> Vec<CommandDescriptor> {
    builtin_registrations()
        .into_iter()
        .map(|registration| registration.descriptor)
        .collect()
}

/// Builds the fixed builtin registry.
pub fn builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for registration in builtin_registrations() {
        registry.register(registration);
    }
    registry
}

#[cfg(test)]
pub(crate) mod testing {
    use std::rc::Rc;

    use console_shell_contract::{CommandError, CommandResult};
    use futures::executor::block_on;

    use crate::ports::{MemoryThemePort, NoopExportPort};
    use crate::{CommandContext, CommandRegistration};

    pub(crate) fn context(args: &[&str]) -> CommandContext {
        context_with_history(args, &[])
    }

    pub(crate) fn context_with_history(args: &[&str], history: &[&str]) -> CommandContext {
        CommandContext {
            args: args.iter().map(|arg| arg.to_string()).collect(),
            history: history.iter().map(|entry| entry.to_string()).collect(),
            config: Rc::new(site_content::default_site()),
            theme: Rc::new(MemoryThemePort::default()),
            exporter: Rc::new(NoopExportPort),
        }
    }

    pub(crate) fn run(
        registration: &CommandRegistration,
        args: &[&str],
    ) -> Result<CommandResult, CommandError> {
        block_on((registration.handler)(context(args)))
    }

    pub(crate) fn output_text(result: &CommandResult) -> String {
        result
            .output
            .as_ref()
            .map(|output| output.plain_text())
            .unwrap_or_default()
    }
}
