//! CLI handler for `mdsplit clean`.

use anyhow::{Context, Result};

pub fn cmd_clean(file: &str) -> Result<()> {
    let _span = tracing::info_span!("cmd_clean", file).entered();

    let text = std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?;
    let text = mdsplit::split::cleaning::normalize_line_endings(&text);
    println!("{}", mdsplit::clean_content(&text));
    Ok(())
}
