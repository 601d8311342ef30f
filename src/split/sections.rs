//! Single-pass heading parser that partitions a document into `##` sections.
//!
//! The parser state is an explicit [`Accumulator`] value: each line is fed to
//! [`Accumulator::step`], which returns the next accumulator together with any
//! section completed by that line. Nothing is held outside the value being
//! threaded through the pass.

/// Classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `# ` top-level heading
    Title,
    /// `## ` second-level heading
    Section,
    /// Anything else, including `###` and deeper headings
    Body,
}

/// Classify a line by its heading marker.
pub fn classify_line(line: &str) -> LineKind {
    if line.starts_with("## ") {
        LineKind::Section
    } else if line.starts_with("# ") {
        LineKind::Title
    } else {
        LineKind::Body
    }
}

/// A completed `##` section ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Governing `#` heading line, trimmed
    pub h1: Option<String>,
    /// The `##` heading line, trimmed
    pub h2: String,
    /// Raw body lines between this heading and the next one
    pub body: Vec<String>,
}

/// Second-level heading state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum State {
    /// Before the first `##`, or right after a `#` heading
    #[default]
    NoSection,
    /// Collecting body lines under a `##` heading
    InSection { h2: String, body: Vec<String> },
}

/// Parser state threaded through the line-by-line pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    h1: Option<String>,
    state: State,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current top-level heading, if any.
    pub fn h1(&self) -> Option<&str> {
        self.h1.as_deref()
    }

    /// Whether a `##` section is currently open.
    pub fn in_section(&self) -> bool {
        matches!(self.state, State::InSection { .. })
    }

    /// Consume one line, returning the next state and any section it closed.
    pub fn step(self, line: &str) -> (Self, Option<Section>) {
        match classify_line(line) {
            LineKind::Title => {
                let flushed = self.flush();
                tracing::debug!(heading = line.trim(), "Top-level heading");
                let next = Self {
                    h1: Some(line.trim().to_string()),
                    state: State::NoSection,
                };
                (next, flushed)
            }
            LineKind::Section => {
                let h1 = self.h1.clone();
                let flushed = self.flush();
                tracing::debug!(heading = line.trim(), "Section heading");
                let next = Self {
                    h1,
                    state: State::InSection {
                        h2: line.trim().to_string(),
                        body: Vec::new(),
                    },
                };
                (next, flushed)
            }
            LineKind::Body => match self.state {
                State::InSection { h2, mut body } => {
                    body.push(line.to_string());
                    let next = Self {
                        h1: self.h1,
                        state: State::InSection { h2, body },
                    };
                    (next, None)
                }
                // Preamble before any `##` is dropped
                State::NoSection => (self, None),
            },
        }
    }

    /// End of input: close the open section, if any.
    pub fn finish(self) -> Option<Section> {
        self.flush()
    }

    fn flush(self) -> Option<Section> {
        match self.state {
            State::InSection { h2, body } => Some(Section {
                h1: self.h1,
                h2,
                body,
            }),
            State::NoSection => None,
        }
    }
}

/// Drive the pass over `text`, handing each completed section to `emit`.
///
/// Stops at the first error returned by `emit`; sections already emitted are
/// not revisited. Returns the number of sections emitted.
pub fn for_each_section<E, F>(text: &str, mut emit: F) -> Result<usize, E>
where
    F: FnMut(Section) -> Result<(), E>,
{
    let mut acc = Accumulator::new();
    let mut count = 0usize;

    for line in text.lines() {
        let (next, flushed) = acc.step(line);
        acc = next;
        if let Some(section) = flushed {
            emit(section)?;
            count += 1;
        }
    }

    if let Some(section) = acc.finish() {
        emit(section)?;
        count += 1;
    }

    Ok(count)
}

/// Collect all sections of `text` in encounter order.
pub fn parse_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let _ = for_each_section::<std::convert::Infallible, _>(text, |s| {
        sections.push(s);
        Ok(())
    });
    sections
}
