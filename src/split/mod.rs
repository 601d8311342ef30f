//! Section splitting pipeline for converted Markdown documents.
//!
//! Splits one Markdown document into one cleaned file per `##` section.
//!
//! ## Pipeline
//!
//! 1. Read the whole document (UTF-8)
//! 2. Walk its lines once, tracking the current `#` / `##` headings
//! 3. For each completed section, derive `{h1}（{h2}）.md`
//! 4. Clean the section text (images, HTML tables, tags, escapes, blank lines)
//! 5. Overwrite the target file in the output directory
//!
//! A failed write aborts the pass. Files written before the failure stay on disk.

pub mod cleaning;
pub mod naming;
pub mod sections;
pub mod table;
pub mod writer;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use sections::Section;
pub use writer::{SectionWriter, WrittenSection};

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Section output would overwrite the source document: {}", path.display())]
    OverwritesSource { path: PathBuf },
}

/// Options controlling a split pass.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    pub output_dir: PathBuf,
    /// Parse and clean every section but write nothing.
    pub dry_run: bool,
}

impl SplitOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            dry_run: false,
        }
    }
}

/// Result of a completed split pass.
#[derive(Debug)]
pub struct SplitSummary {
    pub output_dir: PathBuf,
    /// Sections in encounter order. Filename collisions appear more than once.
    pub sections: Vec<WrittenSection>,
}

/// Split a Markdown file on disk.
///
/// `on_written` is called right after each section is written, so progress
/// is visible even if a later section fails.
pub fn split_file<F>(
    source: &Path,
    opts: &SplitOptions,
    on_written: F,
) -> Result<SplitSummary, SplitError>
where
    F: FnMut(&WrittenSection),
{
    let _span = tracing::info_span!("split_file", source = %source.display()).entered();

    let text = std::fs::read_to_string(source).map_err(|e| SplitError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(bytes = text.len(), lines = text.lines().count(), "Loaded document");

    let writer = SectionWriter::new(&opts.output_dir)
        .guard_source(source)
        .dry_run(opts.dry_run);
    run(&text, &writer, on_written)
}

/// Split Markdown text already held in memory.
pub fn split_text<F>(
    text: &str,
    opts: &SplitOptions,
    on_written: F,
) -> Result<SplitSummary, SplitError>
where
    F: FnMut(&WrittenSection),
{
    let _span = tracing::info_span!("split_text", bytes = text.len()).entered();
    let writer = SectionWriter::new(&opts.output_dir).dry_run(opts.dry_run);
    run(text, &writer, on_written)
}

fn run<F>(text: &str, writer: &SectionWriter, mut on_written: F) -> Result<SplitSummary, SplitError>
where
    F: FnMut(&WrittenSection),
{
    let output_dir = writer.output_dir().to_path_buf();
    let mut dir_ready = false;
    let mut written = Vec::new();

    let count = sections::for_each_section::<SplitError, _>(text, |section| {
        // Only create the directory once there is something to put in it
        if !dir_ready && !writer.is_dry_run() {
            std::fs::create_dir_all(&output_dir).map_err(|e| SplitError::CreateDir {
                path: output_dir.clone(),
                source: e,
            })?;
            dir_ready = true;
        }
        let result = writer.write(&section)?;
        on_written(&result);
        written.push(result);
        Ok(())
    })?;

    if count == 0 {
        tracing::info!("No second-level headings found, nothing written");
    } else {
        tracing::info!(sections = count, output = %output_dir.display(), "Split complete");
    }

    Ok(SplitSummary {
        output_dir,
        sections: written,
    })
}
