//! Canonical JSON export

use crate::schema::ContentTable;

/// Serialize the full table with two-space indentation
///
/// Struct fields serialize in declaration order and maps by key, so equal
/// tables always produce identical bytes.
#[must_use]
pub fn to_json(table: &ContentTable) -> String {
    match serde_json::to_string_pretty(table) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Content table serialization failed: {e}");
            String::from("{}")
        }
    }
}
