//! Terminal host for the portfolio console: a plain stdin/stdout REPL.

mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use console_runtime::{ConsoleSession, HistoryStore, JsonFileHistoryStore};
use console_shell::ports::{ExportPort, MemoryThemePort, ThemePort};
use console_shell::CommandEnv;
use directories::BaseDirs;
use futures::executor::block_on;
use site_content::themes::{find_theme, Theme, DEFAULT_THEME};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "console-portfolio", about = "Interactive terminal portfolio")]
struct Cli {
    /// Theme to start with.
    #[arg(long)]
    theme: Option<String>,

    /// History file path; defaults to the platform data directory.
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Skip the welcome banner.
    #[arg(long)]
    no_welcome: bool,

    /// Run one command line and exit.
    #[arg(short = 'c', long)]
    command: Option<String>,
}

/// Export port that only records the request; a terminal host has nothing to
/// download into.
struct ReplExportPort;

impl ExportPort for ReplExportPort {
    fn request_download(&self, filename: &str) -> Result<(), String> {
        tracing::info!("download requested: {filename}");
        Ok(())
    }
}

fn history_store(cli_path: Option<PathBuf>) -> Result<JsonFileHistoryStore> {
    if let Some(path) = cli_path {
        return Ok(JsonFileHistoryStore::new(path));
    }
    let base = BaseDirs::new().context("no home directory available")?;
    let dir = base.data_local_dir().join("console-portfolio");
    Ok(JsonFileHistoryStore::in_dir(&dir))
}

fn active_theme(port: &MemoryThemePort) -> Result<&'static Theme> {
    find_theme(&port.current())
        .or_else(|| find_theme(DEFAULT_THEME))
        .context("theme registry is empty")
}

fn flush_transcript(
    session: &ConsoleSession,
    port: &MemoryThemePort,
    rendered: &mut usize,
) -> Result<()> {
    let theme = active_theme(port)?;
    let lines = &session.state().lines;
    if lines.len() < *rendered {
        // The transcript shrank: a clear happened.
        print!("\x1b[2J\x1b[H");
        *rendered = 0;
    }
    for line in &lines[*rendered..] {
        // The terminal already echoes what the user typed at the live prompt.
        if line.kind == console_shell_contract::OutputKind::Command {
            continue;
        }
        println!("{}", render::render_line(theme, line));
    }
    *rendered = lines.len();
    io::stdout().flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let initial_theme = match cli.theme {
        Some(id) => {
            find_theme(&id).with_context(|| format!("unknown theme `{id}`"))?;
            id
        }
        None => DEFAULT_THEME.to_string(),
    };
    let theme_port = Rc::new(MemoryThemePort::new(initial_theme));
    let store: Rc<dyn HistoryStore> = Rc::new(history_store(cli.history_file)?);

    let env = CommandEnv {
        config: Rc::new(site_content::default_site()),
        theme: theme_port.clone(),
        exporter: Rc::new(ReplExportPort),
    };
    let mut session = ConsoleSession::new(env, store);
    let mut rendered = 0usize;

    if !cli.no_welcome {
        block_on(session.initialize());
        flush_transcript(&session, &theme_port, &mut rendered)?;
    }

    if let Some(line) = cli.command {
        block_on(session.submit(&line));
        return flush_transcript(&session, &theme_port, &mut rendered);
    }

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        let theme = active_theme(&theme_port)?;
        print!("{} ", render::prompt_text(theme, session.prompt()));
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            println!();
            break;
        }
        let line = input.trim_end_matches(&['\n', '\r'][..]);
        if matches!(line.trim(), "exit" | "logout") {
            println!("logout");
            break;
        }
        block_on(session.submit(line));
        flush_transcript(&session, &theme_port, &mut rendered)?;
    }
    Ok(())
}
