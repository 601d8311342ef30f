//! # mdsplit - Markdown section splitter
//!
//! Post-processes one large Markdown document (typically produced by a
//! document-to-Markdown converter) into one file per `##` section, cleaning
//! conversion artifacts along the way.
//!
//! ## Features
//!
//! - **Section splitting**: one file per `##` heading, named `{h1}（{h2}）.md`
//! - **HTML tables**: `<table>` fragments become Markdown pipe-tables
//! - **Cleanup**: images, stray tags, backslash escapes, blank-line runs
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdsplit::split::{split_file, SplitOptions};
//!
//! # fn main() -> anyhow::Result<()> {
//! let opts = SplitOptions::new("split_md");
//! let summary = split_file(std::path::Path::new("manual.md"), &opts, |w| {
//!     println!("written: {}", w.path.display());
//! })?;
//! println!("{} sections", summary.sections.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod split;

pub use split::cleaning::clean_content;
pub use split::table::html_table_to_markdown;
pub use split::{split_file, split_text, SplitError, SplitOptions, SplitSummary};
