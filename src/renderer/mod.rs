//! Deterministic projections of a content table
//!
//! HTML and TSV are both built from one [`TableGrid`] per `(table, preset)`,
//! so they always agree on column count, order and cell text. JSON is the
//! preset-independent full-fidelity export.

mod embedded;
mod grid;
mod html;
mod json;
mod tsv;

pub use embedded::extract_from_html;
pub use grid::TableGrid;
pub use html::HtmlOptions;
pub use json::to_json;

use crate::presets::PresetCatalogue;
use crate::schema::ContentTable;

/// Renders tables using an injected preset catalogue
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    catalogue: &'a PresetCatalogue,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub fn new(catalogue: &'a PresetCatalogue) -> Self {
        Self { catalogue }
    }

    #[must_use]
    pub fn catalogue(&self) -> &'a PresetCatalogue {
        self.catalogue
    }

    /// Header labels and resolved cells for `preset`
    #[must_use]
    pub fn grid(&self, table: &ContentTable, preset: &str) -> TableGrid {
        TableGrid::build(table, self.catalogue.columns_for(preset))
    }

    /// Clipboard/view HTML: inline-styled table plus the embedded JSON block
    #[must_use]
    pub fn to_html(&self, table: &ContentTable, preset: &str) -> String {
        self.to_html_with(table, preset, &HtmlOptions::default())
    }

    #[must_use]
    pub fn to_html_with(&self, table: &ContentTable, preset: &str, options: &HtmlOptions) -> String {
        let grid = self.grid(table, preset);
        let mut out = html::render_table(&grid, options);
        if options.embed_json {
            out.push_str(&html::render_embedded_json(&json::to_json(table)));
        }
        out
    }

    #[must_use]
    pub fn to_tsv(&self, table: &ContentTable, preset: &str) -> String {
        tsv::render(&self.grid(table, preset))
    }

    /// Pretty-printed JSON of the whole table (two-space indent)
    #[must_use]
    pub fn to_json(&self, table: &ContentTable) -> String {
        json::to_json(table)
    }
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Self::new(PresetCatalogue::builtin())
    }
}
