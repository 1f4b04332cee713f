//! Column resolution shared by every tabular format

use serde::Serialize;

use crate::presets::{ColumnDef, resolve_value_path};
use crate::schema::ContentTable;

/// Rendered text of a table for one preset, before format-specific escaping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableGrid {
    pub columns: Vec<ColumnDef>,
    /// One row per item, one cell per column, in item order
    pub rows: Vec<Vec<String>>,
}

impl TableGrid {
    #[must_use]
    pub fn build(table: &ContentTable, columns: &[ColumnDef]) -> Self {
        let rows = table
            .items
            .iter()
            .map(|item| {
                let value = serde_json::to_value(item).unwrap_or_default();
                columns
                    .iter()
                    .map(|column| resolve_value_path(&value, &column.path))
                    .collect()
            })
            .collect();
        Self {
            columns: columns.to_vec(),
            rows,
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.label.as_str())
    }
}
