//! Heading title extraction and section filename generation.

/// Label used in place of the top-level title when a section has no `#` heading.
pub const NO_TITLE: &str = "no-title";

/// Characters that are unsafe in filenames on common filesystems.
const FORBIDDEN_CHARS: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Full-width low line substituted for each forbidden character.
const REPLACEMENT: char = '＿';

/// Strip leading `#` markers and surrounding whitespace from a heading line.
///
/// ```
/// use mdsplit::split::naming::extract_title;
/// assert_eq!(extract_title("# 4 Checklist management"), "4 Checklist management");
/// assert_eq!(extract_title("  ## Setup  "), "Setup");
/// ```
pub fn extract_title(heading: &str) -> &str {
    heading.trim_start_matches('#').trim()
}

/// Build the sanitized output filename for a section.
///
/// The pattern is `{h1}（{h2}）.md` with full-width parentheses. A missing
/// top-level heading is replaced by [`NO_TITLE`].
///
/// ```
/// use mdsplit::split::naming::section_filename;
/// assert_eq!(section_filename(Some("# Intro"), "## Setup"), "Intro（Setup）.md");
/// assert_eq!(section_filename(None, "## A/B"), "no-title（A＿B）.md");
/// ```
pub fn section_filename(h1: Option<&str>, h2: &str) -> String {
    let h1_title = h1.map(extract_title).unwrap_or(NO_TITLE);
    let h2_title = extract_title(h2);
    sanitize_filename(&format!("{}（{}）.md", h1_title, h2_title))
}

/// Replace every `\ / * ? : " < > |` with a full-width underscore.
///
/// All other characters, including non-ASCII text, pass through unchanged.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if FORBIDDEN_CHARS.contains(&c) {
                REPLACEMENT
            } else {
                c
            }
        })
        .collect()
}
