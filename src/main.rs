mod cli;
mod shell;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use key_notes::config::{self, NotesConfig};
use key_notes::server;

#[derive(Parser)]
#[command(name = "key-notes", version, about = "Local Markdown notes with a native window UI")]
struct Cli {
    /// Config file to use instead of ~/.key-notes/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the server and open the notes window (default)
    Run,
    /// Start the server only, until Ctrl-C
    Serve,
    /// List notes and their titles
    List,
    /// Print a note's content
    Show {
        /// Note id, e.g. note-03
        id: String,
    },
    /// Check the notes directory, static directory, and port
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config::default_config_path);
    let config = NotesConfig::load_from(&config_path)?;

    // Log to stderr so `list` and `show` output stays clean.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if !config_path.exists() {
        tracing::info!("no config file at {}, using defaults", config_path.display());
    }

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => shell::run(config)?,
        Command::Serve => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve_headless(config))?;
        }
        Command::List => cli::list::list(&config)?,
        Command::Show { id } => cli::show::show(&config, &id)?,
        Command::Doctor => cli::doctor::doctor(&config, &config_path)?,
    }

    Ok(())
}
