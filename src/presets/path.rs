//! Path-expression evaluation against table items
//!
//! Paths use the wire (camelCase) names of the schema:
//! - `variantProperties.<Name>` looks `<Name>` up in
//!   `component.variantProperties`; the remainder is a single key and may
//!   itself contain dots
//! - anything else is a dot-separated member chain such as `field.path`
//!
//! Missing or null links anywhere in the chain yield an empty string.

use serde_json::Value;

use crate::schema::ContentItem;
use crate::utils::{NO, YES};

const VARIANT_PREFIX: &str = "variantProperties.";

/// Resolve `path` against a typed item
#[must_use]
pub fn resolve_path(item: &ContentItem, path: &str) -> String {
    match serde_json::to_value(item) {
        Ok(value) => resolve_value_path(&value, path),
        Err(_) => String::new(),
    }
}

/// Resolve `path` against an item already converted to JSON
///
/// Renderers convert each item once and call this per column.
#[must_use]
pub fn resolve_value_path(item: &Value, path: &str) -> String {
    if let Some(name) = path.strip_prefix(VARIANT_PREFIX) {
        return item
            .get("component")
            .and_then(|c| c.get("variantProperties"))
            .and_then(|props| props.get(name))
            .map(render_leaf)
            .unwrap_or_default();
    }

    let mut current = item;
    for segment in path.split('.') {
        match current.get(segment) {
            Some(next) if !next.is_null() => current = next,
            _ => return String::new(),
        }
    }
    render_leaf(current)
}

/// Generic string coercion for a resolved value
fn render_leaf(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => YES.to_string(),
        Value::Bool(false) => NO.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Array(values) => values
            .iter()
            .map(render_leaf)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}
