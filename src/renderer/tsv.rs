//! Tab-separated export for spreadsheet paste targets

use regex::Regex;
use std::sync::LazyLock;

use super::grid::TableGrid;

static DELIMITER_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\t\r\n]+").expect("DELIMITER_RUN: hardcoded regex is valid")
});

/// Header row plus one row per item
///
/// Trailing spaces and line breaks are trimmed. Trailing tabs are kept so the
/// last row still has one field per column when its final cells are empty.
pub(super) fn render(grid: &TableGrid) -> String {
    let mut lines = Vec::with_capacity(grid.rows.len() + 1);
    lines.push(join_row(grid.labels()));
    for row in &grid.rows {
        lines.push(join_row(row.iter().map(String::as_str)));
    }
    lines
        .join("\n")
        .trim_end_matches(['\n', '\r', ' '])
        .to_string()
}

fn join_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells.map(sanitize_cell).collect::<Vec<_>>().join("\t")
}

/// Tabs and line breaks would break the row/column structure
fn sanitize_cell(cell: &str) -> String {
    DELIMITER_RUN.replace_all(cell, " ").into_owned()
}
