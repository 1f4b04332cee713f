//! Self-contained HTML table for rich-text paste targets
//!
//! Styles are inline on each element because paste targets drop external
//! stylesheets.

use crate::utils::EMBEDDED_JSON_SCRIPT_ID;
use crate::xhtml::encode_url_for_attribute;

use super::grid::TableGrid;

const TABLE_STYLE: &str = "border-collapse: collapse; width: 100%;";
const TH_STYLE: &str = "border: 1px solid #d0d7de; padding: 6px 8px; \
    background-color: #f6f8fa; text-align: left; font-weight: 600;";
const TD_STYLE: &str = "border: 1px solid #d0d7de; padding: 6px 8px; vertical-align: top;";

/// Column path whose cells may be rendered as links
const NODE_URL_PATH: &str = "nodeUrl";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Append the full table as a JSON `<script>` block
    pub embed_json: bool,
    /// Wrap non-empty `nodeUrl` cells in `<a href>`; visible text is unchanged
    pub link_node_urls: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            embed_json: true,
            link_node_urls: false,
        }
    }
}

pub(super) fn render_table(grid: &TableGrid, options: &HtmlOptions) -> String {
    let mut out = format!("<table style=\"{TABLE_STYLE}\"><thead><tr>");
    for label in grid.labels() {
        out.push_str(&format!("<th style=\"{TH_STYLE}\">{}</th>", escape_cell(label)));
    }
    out.push_str("</tr></thead><tbody>");

    for row in &grid.rows {
        out.push_str("<tr>");
        for (column, cell) in grid.columns.iter().zip(row) {
            let text = escape_cell(cell);
            let body = if options.link_node_urls && column.path == NODE_URL_PATH && !cell.is_empty() {
                format!("<a href=\"{}\">{text}</a>", encode_url_for_attribute(cell))
            } else {
                text
            };
            out.push_str(&format!("<td style=\"{TD_STYLE}\">{body}</td>"));
        }
        out.push_str("</tr>");
    }

    out.push_str("</tbody></table>");
    out
}

/// Every `<` is written as `\u003c` (same JSON string) so no value, such as
/// `</script>` or `<!--<script>`, can end the element or hide its real close
pub(super) fn render_embedded_json(json: &str) -> String {
    format!(
        "<script type=\"application/json\" id=\"{EMBEDDED_JSON_SCRIPT_ID}\">{}</script>",
        json.replace('<', "\\u003c")
    )
}

/// Escape `& < > " '` and turn line breaks into `<br>`
fn escape_cell(text: &str) -> String {
    let escaped = html_escape::encode_quoted_attribute(text);
    escaped
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "<br>")
}
