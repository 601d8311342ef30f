//! Section writer: filename, content assembly, cleaning, and persistence.

use std::path::{Path, PathBuf};

use super::cleaning::clean_content;
use super::naming::{extract_title, section_filename, NO_TITLE};
use super::sections::Section;
use super::SplitError;

/// Record of one section file written (or planned, in dry-run mode).
#[derive(Debug, Clone)]
pub struct WrittenSection {
    pub path: PathBuf,
    /// Top-level title, or [`NO_TITLE`]
    pub title: String,
    /// Second-level title
    pub heading: String,
    /// Size of the cleaned content in bytes
    pub bytes: usize,
}

/// Assemble raw section text: `h1`, blank line, `h2`, then body lines.
///
/// ```
/// use mdsplit::split::writer::compose_content;
/// let body = vec!["line".to_string()];
/// assert_eq!(compose_content(Some("# A"), "## B", &body), "# A\n\n## B\nline");
/// assert_eq!(compose_content(None, "## B", &[]), "## B");
/// ```
pub fn compose_content(h1: Option<&str>, h2: &str, body: &[String]) -> String {
    let mut lines: Vec<&str> = Vec::with_capacity(body.len() + 3);
    if let Some(h1) = h1 {
        lines.push(h1);
        lines.push("");
    }
    lines.push(h2);
    lines.extend(body.iter().map(String::as_str));
    lines.join("\n")
}

/// Writes cleaned sections into an output directory.
///
/// Existing files are overwritten. Two sections that map to the same filename
/// resolve last-write-wins.
pub struct SectionWriter {
    output_dir: PathBuf,
    /// Canonical source path, so a section can never overwrite its input
    source: Option<PathBuf>,
    dry_run: bool,
}

impl SectionWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            source: None,
            dry_run: false,
        }
    }

    /// Refuse to write any section onto `source`.
    pub fn guard_source(mut self, source: &Path) -> Self {
        self.source = dunce::canonicalize(source).ok();
        self
    }

    /// Compute and clean, but do not touch the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Write one parsed section.
    pub fn write(&self, section: &Section) -> Result<WrittenSection, SplitError> {
        self.write_parts(section.h1.as_deref(), &section.h2, &section.body)
    }

    /// Write a section given its heading lines and body.
    pub fn write_parts(
        &self,
        h1: Option<&str>,
        h2: &str,
        body: &[String],
    ) -> Result<WrittenSection, SplitError> {
        let filename = section_filename(h1, h2);
        let content = clean_content(&compose_content(h1, h2, body));
        let path = self.output_dir.join(&filename);

        let written = WrittenSection {
            title: h1.map(extract_title).unwrap_or(NO_TITLE).to_string(),
            heading: extract_title(h2).to_string(),
            bytes: content.len(),
            path,
        };

        self.check_not_source(&written.path, &filename)?;

        if self.dry_run {
            tracing::debug!(path = %written.path.display(), "Dry run: section not written");
            return Ok(written);
        }

        std::fs::write(&written.path, content.as_bytes()).map_err(|e| SplitError::Write {
            path: written.path.clone(),
            source: e,
        })?;

        tracing::info!(
            path = %written.path.display(),
            title = %written.title,
            heading = %written.heading,
            bytes = written.bytes,
            "Wrote section"
        );
        Ok(written)
    }

    fn check_not_source(&self, output_path: &Path, filename: &str) -> Result<(), SplitError> {
        let Some(src) = &self.source else {
            return Ok(());
        };
        let dst = dunce::canonicalize(output_path).or_else(|_| {
            // Output doesn't exist yet: canonicalize the directory + filename
            dunce::canonicalize(&self.output_dir).map(|d| d.join(filename))
        });
        if let Ok(dst) = dst {
            if *src == dst {
                tracing::warn!(path = %src.display(), "Section would overwrite source document");
                return Err(SplitError::OverwritesSource { path: dst });
            }
        }
        Ok(())
    }
}

/// Write a section from possibly-missing headings.
///
/// Returns `Ok(None)` without touching the filesystem when `h2` is absent.
pub fn write_section(
    output_dir: &Path,
    h1: Option<&str>,
    h2: Option<&str>,
    body: &[String],
) -> Result<Option<WrittenSection>, SplitError> {
    let Some(h2) = h2 else {
        return Ok(None);
    };
    SectionWriter::new(output_dir)
        .write_parts(h1, h2, body)
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compose_content_with_h1() {
        assert_eq!(
            compose_content(Some("# T"), "## S", &body(&["a", "", "b"])),
            "# T\n\n## S\na\n\nb"
        );
    }

    #[test]
    fn test_compose_content_without_h1() {
        assert_eq!(compose_content(None, "## S", &body(&["a"])), "## S\na");
    }

    #[test]
    fn test_write_creates_cleaned_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SectionWriter::new(dir.path());
        let section = Section {
            h1: Some("# Intro".into()),
            h2: "## Setup".into(),
            body: body(&["Hello \\(world\\).", "", "", ""]),
        };
        let written = writer.write(&section).unwrap();

        assert_eq!(written.path, dir.path().join("Intro（Setup）.md"));
        assert_eq!(written.title, "Intro");
        assert_eq!(written.heading, "Setup");
        let content = std::fs::read_to_string(&written.path).unwrap();
        assert_eq!(content, "# Intro\n\n## Setup\nHello (world).");
        assert_eq!(written.bytes, content.len());
    }

    #[test]
    fn test_write_without_h1_uses_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let written = SectionWriter::new(dir.path())
            .write_parts(None, "## Orphan", &[])
            .unwrap();
        assert_eq!(written.title, NO_TITLE);
        assert_eq!(written.path, dir.path().join("no-title（Orphan）.md"));
        assert_eq!(std::fs::read_to_string(&written.path).unwrap(), "## Orphan");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SectionWriter::new(dir.path());
        writer.write_parts(Some("# A"), "## B", &body(&["first"])).unwrap();
        let second = writer.write_parts(Some("# A"), "## B", &body(&["second"])).unwrap();
        assert_eq!(
            std::fs::read_to_string(second.path).unwrap(),
            "# A\n\n## B\nsecond"
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let written = SectionWriter::new(dir.path())
            .dry_run(true)
            .write_parts(Some("# A"), "## B", &[])
            .unwrap();
        assert!(!written.path.exists());
    }

    #[test]
    fn test_write_missing_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does/not/exist");
        let err = SectionWriter::new(&missing)
            .write_parts(None, "## S", &[])
            .unwrap_err();
        assert!(matches!(err, SplitError::Write { .. }));
    }

    #[test]
    fn test_guard_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("A（B）.md");
        std::fs::write(&source, "# A\n## B\n").unwrap();
        let err = SectionWriter::new(dir.path())
            .guard_source(&source)
            .write_parts(Some("# A"), "## B", &[])
            .unwrap_err();
        assert!(matches!(err, SplitError::OverwritesSource { .. }));
        assert_eq!(std::fs::read_to_string(&source).unwrap(), "# A\n## B\n");
    }

    #[test]
    fn test_guard_source_applies_in_dry_run() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("A（B）.md");
        std::fs::write(&source, "# A\n## B\n").unwrap();
        let err = SectionWriter::new(dir.path())
            .guard_source(&source)
            .dry_run(true)
            .write_parts(Some("# A"), "## B", &[])
            .unwrap_err();
        assert!(matches!(err, SplitError::OverwritesSource { .. }));
    }

    #[test]
    fn test_write_section_without_h2_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_section(dir.path(), Some("# A"), None, &body(&["x"])).unwrap();
        assert!(result.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_write_section_with_h2() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_section(dir.path(), Some("# A"), Some("## B"), &[]).unwrap();
        assert!(result.unwrap().path.exists());
    }
}
