//! Config file application for CLI options

use super::Cli;

/// Apply config file defaults to CLI options
/// CLI flags always override config values
pub(super) fn apply_config_defaults(cli: &mut Cli, config: &mdsplit::config::Config) {
    if !cli.quiet && config.quiet_or_default() {
        cli.quiet = true;
    }
    if !cli.verbose && config.verbose_or_default() {
        cli.verbose = true;
    }
}
