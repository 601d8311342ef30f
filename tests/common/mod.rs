//! Common test fixtures and helpers
//!
//! Usage in test files:
//! ```ignore
//! mod common;
//! use common::TestDoc;
//! ```

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Source document plus output directory inside a temp dir
///
/// The `TempDir` is kept alive for as long as the paths are in use.
pub struct TestDoc {
    pub source: PathBuf,
    pub output: PathBuf,
    _dir: TempDir,
}

impl TestDoc {
    /// Write `content` to `source.md` in a fresh temp dir
    pub fn new(content: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let source = dir.path().join("source.md");
        std::fs::write(&source, content).expect("Failed to write source document");
        let output = dir.path().join("out");
        Self {
            source,
            output,
            _dir: dir,
        }
    }

    /// Copy a file from `tests/fixtures/` into a fresh temp dir
    pub fn fixture(name: &str) -> Self {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name);
        let content = std::fs::read_to_string(&path).expect("Failed to read fixture");
        Self::new(&content)
    }

    pub fn dir(&self) -> &Path {
        self._dir.path()
    }

    /// Read one output file by name
    pub fn read_output(&self, name: &str) -> String {
        std::fs::read_to_string(self.output.join(name))
            .unwrap_or_else(|e| panic!("Failed to read output {}: {}", name, e))
    }

    /// Sorted names of all output files
    pub fn output_names(&self) -> Vec<String> {
        let mut names: Vec<String> = match std::fs::read_dir(&self.output) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }
}
