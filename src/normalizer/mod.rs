//! Normalization of partial or malformed content tables
//!
//! `normalize` is total: any JSON value yields a table that passes the
//! validator. It never mutates its input and only fills gaps. Values that
//! cannot be repaired are replaced by defaults: a `designSystemByNodeId` that
//! is not a mapping, an array or object where text belongs, and a non-object
//! entry in `items` (which still keeps its slot).
//!
//! Normalization is idempotent: feeding a normalized table back in returns
//! an identical table.

pub mod builders;

use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use serde_json::{Map, Value};

use crate::schema::keys::TABLE_KEYS;
use crate::schema::ContentTable;
use crate::utils::{CONTENT_TABLE_TYPE, CONTENT_TABLE_VERSION};

use builders::{
    build_design_system, build_item, build_source, build_table_meta, text_at, unknown_keys,
};

/// Normalize a raw table using the current time for synthesized timestamps
#[must_use]
pub fn normalize(raw: &Value) -> ContentTable {
    normalize_at(raw, Utc::now())
}

/// Normalize a raw table, stamping synthesized timestamps with `now`
#[must_use]
pub fn normalize_at(raw: &Value, now: DateTime<Utc>) -> ContentTable {
    let now_iso = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let table = raw.as_object();

    let source = build_source(table.and_then(|t| t.get("source")));
    let meta = build_table_meta(table.and_then(|t| t.get("meta")), &source, &now_iso);

    let items = match table.and_then(|t| t.get("items")).and_then(Value::as_array) {
        Some(raw_items) => raw_items
            .iter()
            .enumerate()
            .map(|(index, item)| match item.as_object() {
                Some(record) => build_item(record, index),
                None => {
                    debug!("Replacing non-object entry at items[{index}] with a default item");
                    build_item(&Map::new(), index)
                }
            })
            .collect(),
        None => Vec::new(),
    };

    let design_system_raw = table
        .and_then(|t| t.get("designSystemByNodeId"))
        .filter(|v| !v.is_null());
    let design_system_by_node_id = build_design_system(design_system_raw);
    if design_system_raw.is_some() && design_system_by_node_id.is_none() {
        debug!("Dropping designSystemByNodeId: not a mapping");
    }

    ContentTable {
        table_type: CONTENT_TABLE_TYPE.to_string(),
        version: CONTENT_TABLE_VERSION,
        generated_at_iso: text_at(table, "generatedAtISO").unwrap_or(now_iso),
        source,
        meta,
        items,
        design_system_by_node_id,
        extra: table
            .map(|t| unknown_keys(t, TABLE_KEYS))
            .unwrap_or_default(),
    }
}

impl ContentTable {
    /// Re-establish schema invariants on a typed table
    ///
    /// Typed tables already satisfy the structural rules, but a hook or a
    /// hand-built table may still carry empty identities.
    #[must_use]
    pub fn normalized(&self) -> ContentTable {
        normalize(&self.to_value())
    }
}
