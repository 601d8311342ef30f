//! Ordered cleaning rules for converter artifacts in section text.
//!
//! Each rule is a named, pure `&str -> String` transformation. Rules run in
//! the order of [`ALL_RULES`] and later rules assume earlier ones already ran:
//! tables must be converted before generic tag stripping, and blank-line
//! collapsing must follow every rule that can leave empty lines behind.
//!
//! ## Adding new rules
//!
//! 1. Write a `pub fn rule_xxx(text: &str) -> String`
//! 2. Add a `CleaningRule` entry to `ALL_RULES` at the position it must run

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::table::html_table_to_markdown;

// ============ Compiled Regexes (LazyLock) ============

/// Matches inline image references `![alt](path)` on a single line.
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\(.*?\)").expect("hardcoded image regex"));

/// Matches `<table ...> ... </table>` lazily, across lines.
static TABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<table.*?</table>").expect("hardcoded table regex"));

/// Matches any opening or closing tag.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[^>]+>").expect("hardcoded tag regex"));

/// Matches a line holding nothing but a backslash.
static LONE_BACKSLASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\\\s*$").expect("hardcoded backslash regex"));

/// Matches three or more consecutive newlines.
static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("hardcoded blank run regex"));

/// Escaped punctuation and its literal replacement, applied in this order.
const UNESCAPE_RULES: &[(&str, &str)] = &[
    (r"\/", "/"),
    (r"\(", "("),
    (r"\)", ")"),
    (r"\[", "["),
    (r"\]", "]"),
    (r"\*", "*"),
    (r"\_", "_"),
    (r"\#", "#"),
    (r"\.", "."),
    (r"\:", ":"),
];

/// A cleaning rule that transforms the whole section text.
pub struct CleaningRule {
    pub name: &'static str,
    pub description: &'static str,
    pub apply: fn(&str) -> String,
}

/// All cleaning rules, applied in order.
pub static ALL_RULES: &[CleaningRule] = &[
    CleaningRule {
        name: "images",
        description: "Remove inline image references",
        apply: rule_images,
    },
    CleaningRule {
        name: "html_tables",
        description: "Replace HTML tables with Markdown pipe-tables",
        apply: rule_html_tables,
    },
    CleaningRule {
        name: "html_tags",
        description: "Strip remaining HTML tags, keeping their text",
        apply: rule_html_tags,
    },
    CleaningRule {
        name: "unescape",
        description: r"Turn \( \) \[ \] \* \_ \# \. \: \/ back into literals",
        apply: rule_unescape,
    },
    CleaningRule {
        name: "lone_backslash",
        description: r"Empty out lines containing only '\'",
        apply: rule_lone_backslash,
    },
    CleaningRule {
        name: "blank_lines",
        description: "Collapse 3+ consecutive newlines to 2",
        apply: rule_blank_lines,
    },
    CleaningRule {
        name: "trim",
        description: "Trim leading and trailing whitespace",
        apply: rule_trim,
    },
];

/// Run every cleaning rule over `text` in order.
///
/// Deterministic and side-effect free apart from debug logging of which
/// rules changed something.
pub fn clean_content(text: &str) -> String {
    let _span = tracing::debug_span!("clean_content", bytes = text.len()).entered();

    let mut current = text.to_string();
    for rule in ALL_RULES {
        let next = (rule.apply)(&current);
        if next != current {
            tracing::debug!(rule = rule.name, before = current.len(), after = next.len(), "Cleaning rule applied");
        }
        current = next;
    }
    current
}

/// Rejoin `text` with `\n` line endings so CRLF input cleans like LF input.
///
/// Section text is already assembled from split lines; whole files are not.
pub fn normalize_line_endings(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join("\n")
}

// ============ Rule Implementations ============

/// Rule 1: Remove `![alt](path)` entirely.
pub fn rule_images(text: &str) -> String {
    IMAGE_RE.replace_all(text, "").into_owned()
}

/// Rule 2: Convert each HTML table to a pipe-table on its own lines.
///
/// A table without usable rows still leaves its surrounding newlines.
pub fn rule_html_tables(text: &str) -> String {
    TABLE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            format!("\n{}\n", html_table_to_markdown(&caps[0]))
        })
        .into_owned()
}

/// Rule 3: Strip all remaining tags.
pub fn rule_html_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

/// Rule 4: Plain substring un-escaping of converter backslash escapes.
pub fn rule_unescape(text: &str) -> String {
    UNESCAPE_RULES
        .iter()
        .fold(text.to_string(), |acc, (escaped, literal)| {
            acc.replace(escaped, literal)
        })
}

/// Rule 5: Blank out lines whose trimmed content is a single `\`.
pub fn rule_lone_backslash(text: &str) -> String {
    LONE_BACKSLASH_RE.replace_all(text, "").into_owned()
}

/// Rule 6: Cap blank-line runs at one blank line.
pub fn rule_blank_lines(text: &str) -> String {
    BLANK_RUN_RE.replace_all(text, "\n\n").into_owned()
}

/// Rule 7: Trim the whole text.
pub fn rule_trim(text: &str) -> String {
    text.trim().to_string()
}
