//! CLI implementation for mdsplit

mod commands;
mod config;

use config::apply_config_defaults;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use mdsplit::config::Config;

#[derive(Parser)]
#[command(name = "mdsplit")]
#[command(about = "Split a Markdown document into one cleaned file per ## section")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress per-file output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Default log level to debug (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a Markdown document into one file per ## section
    Split {
        /// Source Markdown document
        source: String,
        /// Output directory (default: split_md/ next to the source)
        #[arg(short, long, env = "MDSPLIT_OUTPUT")]
        output: Option<String>,
        /// Show which files would be written, don't write
        #[arg(long)]
        dry_run: bool,
    },
    /// Print a Markdown file with cleaning rules applied
    Clean {
        /// Markdown file to clean
        file: String,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Parse arguments and layer config file defaults underneath them.
///
/// Done before tracing init so `verbose = true` in a config file takes effect.
pub fn parse_with_config() -> (Cli, Config) {
    let mut cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load(&cwd);
    apply_config_defaults(&mut cli, &config);
    (cli, config)
}

/// Run CLI with pre-parsed arguments and loaded config
pub fn run_with(cli: Cli, config: Config) -> Result<()> {
    match &cli.command {
        Commands::Split {
            source,
            output,
            dry_run,
        } => commands::cmd_split(&cli, &config, source, output.as_deref(), *dry_run),
        Commands::Clean { file } => commands::cmd_clean(file),
        Commands::Completions { shell } => {
            cmd_completions(*shell);
            Ok(())
        }
    }
}

fn cmd_completions(shell: clap_complete::Shell) {
    clap_complete::generate(shell, &mut Cli::command(), "mdsplit", &mut std::io::stdout());
}
