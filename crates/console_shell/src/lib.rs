//! Console interpreter engine: tokenizer and chain parser, command registry and
//! dispatcher, autocomplete, and the builtin command set for the terminal-portfolio
//! console.
//!
//! The engine is single-threaded and cooperative: handlers are `Rc` closures
//! returning local futures, and the dispatcher awaits them in place. Hosts supply
//! content and theme/export capabilities; the engine never touches a presentation
//! layer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod autocomplete;
pub mod commands;
pub mod parser;
pub mod ports;
pub mod version;

use std::collections::BTreeMap;
use std::rc::Rc;

use console_shell_contract::{
    CommandDescriptor, CommandError, CommandResult, Renderable, TextLine, TextSpan, TextStyle,
};
use futures::future::LocalBoxFuture;
use site_content::SiteConfig;

use crate::ports::{ExportPort, ThemePort};

/// Async command handler: arguments and session history in, normalized result out.
pub type CommandHandler =
    Rc<dyn Fn(CommandContext) -> LocalBoxFuture<'static, Result<CommandResult, CommandError>>>;

/// Execution context passed to one handler invocation.
#[derive(Clone)]
pub struct CommandContext {
    /// Argument tokens, original case.
    pub args: Vec<String>,
    /// Snapshot of the session's command history.
    pub history: Vec<String>,
    /// Static site content.
    pub config: Rc<SiteConfig>,
    /// Host theme port.
    pub theme: Rc<dyn ThemePort>,
    /// Host export port.
    pub exporter: Rc<dyn ExportPort>,
}

impl CommandContext {
    /// Whether `flag` (short) or `long` appears in the arguments.
    pub fn has_flag(&self, flag: &str, long: &str) -> bool {
        self.args.iter().any(|arg| arg == flag || arg == long)
    }

    /// Argument tokens that are not flags.
    pub fn operands(&self) -> Vec<&String> {
        self.args.iter().filter(|arg| !arg.starts_with('-')).collect()
    }
}

/// One registered command: immutable descriptor plus handler.
pub struct CommandRegistration {
    /// Command metadata.
    pub descriptor: CommandDescriptor,
    /// Command handler.
    pub handler: CommandHandler,
}

/// Fixed mapping from command name to registration.
///
/// Built once at startup; immutable for the rest of the process lifetime.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, CommandRegistration>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one command, keyed by its lowercase descriptor name.
    pub fn register(&mut self, registration: CommandRegistration) {
        self.commands
            .insert(registration.descriptor.name.clone(), registration);
    }

    /// Registered command names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    /// Descriptor for `name`, if registered.
    pub fn descriptor(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.get(name).map(|registration| &registration.descriptor)
    }

    /// All descriptors in name order.
    pub fn descriptors(&self) -> Vec<&CommandDescriptor> {
        self.commands
            .values()
            .map(|registration| &registration.descriptor)
            .collect()
    }

    fn get(&self, name: &str) -> Option<&CommandRegistration> {
        self.commands.get(name)
    }
}

/// Host collaborators shared by every handler invocation.
#[derive(Clone)]
pub struct CommandEnv {
    /// Static site content.
    pub config: Rc<SiteConfig>,
    /// Host theme port.
    pub theme: Rc<dyn ThemePort>,
    /// Host export port.
    pub exporter: Rc<dyn ExportPort>,
}

/// Resolves parsed commands against the registry and normalizes every outcome
/// into a [`CommandResult`].
pub struct Dispatcher {
    registry: Rc<CommandRegistry>,
    env: CommandEnv,
}

impl Dispatcher {
    /// Creates a dispatcher over `registry` with the host environment `env`.
    pub fn new(registry: Rc<CommandRegistry>, env: CommandEnv) -> Self {
        Self { registry, env }
    }

    /// The registry this dispatcher resolves against.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Executes one already-parsed command.
    ///
    /// Resolution failures, domain rejections, and handler failures are all
    /// converted into error-typed results here; nothing propagates to the
    /// session layer. Arguments containing `-h`/`--help` short-circuit into the
    /// uniform help block rendered from the descriptor.
    pub async fn execute(&self, name: &str, args: &[String], history: &[String]) -> CommandResult {
        let Some(registration) = self.registry.get(name) else {
            let error = CommandError::NotFound {
                name: name.to_string(),
            };
            return CommandResult::error(format!(
                "{error}\nType `help` for available commands."
            ));
        };

        if parser::has_help_flag(args) {
            return CommandResult {
                output: Some(render_help(&registration.descriptor)),
                ..CommandResult::default()
            };
        }

        tracing::debug!(command = name, "dispatching");
        let handler = registration.handler.clone();
        let context = CommandContext {
            args: args.to_vec(),
            history: history.to_vec(),
            config: self.env.config.clone(),
            theme: self.env.theme.clone(),
            exporter: self.env.exporter.clone(),
        };
        match handler(context).await {
            Ok(result) => result,
            Err(error) => CommandResult::error(error.to_string()),
        }
    }
}

/// Renders the uniform NAME/SYNOPSIS/OPTIONS help block for a descriptor.
pub fn render_help(descriptor: &CommandDescriptor) -> Renderable {
    let mut lines = vec![
        TextLine::styled(TextStyle::Prompt, "NAME"),
        TextLine::new(vec![
            TextSpan::plain(format!("    {}", descriptor.name)),
            TextSpan::styled(TextStyle::Muted, format!(" - {}", descriptor.description)),
        ]),
        TextLine::blank(),
        TextLine::styled(TextStyle::Prompt, "SYNOPSIS"),
        TextLine::plain(format!("    {}", descriptor.usage)),
    ];
    if !descriptor.options.is_empty() {
        lines.push(TextLine::blank());
        lines.push(TextLine::styled(TextStyle::Prompt, "OPTIONS"));
        for option in &descriptor.options {
            lines.push(TextLine::new(vec![
                TextSpan::styled(TextStyle::Link, format!("    {:<16}", option.flag)),
                TextSpan::styled(TextStyle::Muted, option.description.clone()),
            ]));
        }
    }
    Renderable::rich(lines)
}
