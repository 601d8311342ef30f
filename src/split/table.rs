//! HTML table fragment to Markdown pipe-table conversion.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("hardcoded table selector"));

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("hardcoded row selector"));

static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td, th").expect("hardcoded cell selector"));

/// Convert the first `<table>` in an HTML fragment to a Markdown pipe-table.
///
/// The first row with any non-empty cell becomes the header, followed by a
/// `| --- |` separator sized to the header. Remaining rows are emitted as-is,
/// so ragged rows keep their own cell count.
///
/// Returns an empty string when the fragment has no table or no usable rows.
///
/// # Examples
///
/// ```
/// use mdsplit::split::table::html_table_to_markdown;
/// let html = "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>";
/// assert_eq!(html_table_to_markdown(html), "| A | B |\n| --- | --- |\n| 1 | 2 |");
/// ```
pub fn html_table_to_markdown(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let Some(table) = fragment.select(&TABLE_SELECTOR).next() else {
        tracing::debug!("No <table> element in fragment");
        return String::new();
    };

    let rows = collect_rows(table);
    let Some((header, body)) = rows.split_first() else {
        tracing::debug!("Table has no non-empty rows");
        return String::new();
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(pipe_row(header));
    lines.push(pipe_row(&vec!["---"; header.len()]));
    lines.extend(body.iter().map(|row| pipe_row(row)));
    lines.join("\n")
}

/// Trimmed cell text for every row, in document order, skipping rows whose
/// cells are all empty.
fn collect_rows(table: ElementRef<'_>) -> Vec<Vec<String>> {
    table
        .select(&ROW_SELECTOR)
        .map(|tr| {
            tr.select(&CELL_SELECTOR)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect::<Vec<_>>()
        })
        .filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .collect()
}

fn pipe_row<S: AsRef<str>>(cells: &[S]) -> String {
    let joined: Vec<&str> = cells.iter().map(|c| c.as_ref()).collect();
    format!("| {} |", joined.join(" | "))
}
