//! Command-line interface
//!
//! Running without a subcommand generates the static site with default options.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "claude_chat_viewer=info";

#[derive(Parser)]
#[command(name = "claude-chat-viewer")]
#[command(version = "0.1.0")]
#[command(about = "View Claude Code chat history as readable HTML", long_about = None)]
pub struct Cli {
    /// Claude Code data directory (default: ~/.claude)
    #[arg(long, global = true, value_name = "DIR")]
    pub claude_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate static HTML pages for recent sessions (default)
    Generate {
        /// Output directory (default: ~/claude-chat-history)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Maximum number of sessions
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Only sessions whose project path contains this text
        #[arg(short, long)]
        project: Option<String>,
        /// Open the index in a browser after generating
        #[arg(long)]
        open: bool,
    },
    /// Generate the page for one session (partial id match)
    Session {
        query: String,
        /// Output directory (default: ~/claude-chat-history)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Open the page in a browser after generating
        #[arg(long)]
        open: bool,
    },
    /// List sessions in the terminal
    List {
        /// Maximum number of sessions
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Only sessions whose project path contains this text
        #[arg(short, long)]
        project: Option<String>,
    },
    /// Start the live server; pages refresh automatically
    Serve {
        #[arg(short = 'P', long)]
        port: Option<u16>,
        /// Do not open a browser when the server starts
        #[arg(long)]
        no_open: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // Logs go to stderr so that `list` output stays clean
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = Config::load()?.with_claude_dir(cli.claude_dir);
    config.validate()?;

    match cli.command {
        Some(Commands::Generate { output, limit, project, open }) => {
            let config = commands::apply_overrides(config, output, limit, None);
            commands::generate(&config, project.as_deref(), open)
        }
        Some(Commands::Session { query, output, open }) => {
            let config = commands::apply_overrides(config, output, None, None);
            commands::session(&config, &query, open)
        }
        Some(Commands::List { limit, project }) => {
            let config = commands::apply_overrides(config, None, limit, None);
            commands::list(&config, project.as_deref())
        }
        Some(Commands::Serve { port, no_open }) => {
            let config = commands::apply_overrides(config, None, None, port);
            commands::serve(&config, !no_open)
        }
        None => commands::generate(&config, None, false),
    }
}
