use serde::{Deserialize, Serialize};

use crate::schema::ContentTable;

/// Where on the canvas a table came from, as handed to hooks and to the
/// document API consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionContext {
    pub page_id: String,
    pub page_name: String,
    pub selection_node_id: String,
    pub selection_name: String,
}

impl SelectionContext {
    #[must_use]
    pub fn from_table(table: &ContentTable) -> Self {
        Self {
            page_id: table.source.page_id.clone(),
            page_name: table.source.page_name.clone(),
            selection_node_id: table.source.selection_node_id.clone(),
            selection_name: table.source.selection_name.clone(),
        }
    }
}
