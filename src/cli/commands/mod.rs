//! CLI command handlers
//!
//! Each submodule handles one CLI subcommand.

mod clean;
mod split;

pub(crate) use clean::cmd_clean;
pub(crate) use split::cmd_split;
