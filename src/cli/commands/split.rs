//! CLI handler for `mdsplit split`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use mdsplit::config::Config;
use mdsplit::split::{split_file, SplitOptions};

use super::super::Cli;

pub fn cmd_split(
    cli: &Cli,
    config: &Config,
    source: &str,
    output: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let _span = tracing::info_span!("cmd_split").entered();

    let source = PathBuf::from(source);
    if !source.is_file() {
        anyhow::bail!("Source document not found: {}", source.display());
    }

    let output_dir = match output {
        Some(dir) => PathBuf::from(dir),
        None => config.output_dir_for(&source),
    };

    let opts = SplitOptions {
        output_dir,
        dry_run,
    };

    let label = if dry_run { "would write:" } else { "written:" };
    let summary = split_file(&source, &opts, |w| {
        if !cli.quiet {
            println!("{} {}", label.green(), w.path.display());
        }
    })
    .with_context(|| format!("Failed to split {}", source.display()))?;

    if summary.sections.is_empty() {
        if !cli.quiet {
            println!("No ## sections found in {}.", source.display());
        }
        return Ok(());
    }

    if !cli.quiet {
        let verb = if dry_run { "Would write" } else { "Wrote" };
        println!(
            "{} {} section(s) to {}",
            verb,
            summary.sections.len(),
            summary.output_dir.display()
        );
    }

    Ok(())
}
