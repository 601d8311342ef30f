use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<()> {
    let (cli, config) = cli::parse_with_config();

    let default_level = if cli.verbose { "debug" } else { "warn" };

    // Log to stderr to keep stdout for written-file reports and `clean` output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::run_with(cli, config)
}
