//! Structural validation of content tables
//!
//! Validation is a reporting function: it never panics and never rejects.
//! Callers decide whether an invalid table is refused, logged, or repaired
//! with the normalizer.

use log::debug;
use serde_json::{Map, Value};

use crate::config::ExportConfig;
use crate::schema::keys::{
    COMPONENT_KINDS, ITEM_REQUIRED_KEYS, META_REQUIRED_KEYS, SOURCE_KEYS,
};
use crate::utils::{CONTENT_TABLE_TYPE, CONTENT_TABLE_VERSION, TEXT_CONTENT_TYPE};

/// Outcome of validating a value against the content-table schema
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// True iff `errors` is empty
    pub ok: bool,
    pub errors: Vec<String>,
    /// Reserved for non-fatal diagnostics; nothing populates it yet
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            ok: errors.is_empty(),
            errors,
            warnings: Vec::new(),
        }
    }
}

/// Schema validator carrying its diagnostic settings
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    dev_logging: bool,
}

impl Validator {
    #[must_use]
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            dev_logging: config.dev_logging(),
        }
    }

    #[must_use]
    pub fn with_dev_logging(dev_logging: bool) -> Self {
        Self { dev_logging }
    }

    /// Check `value` against the content-table schema
    #[must_use]
    pub fn validate(&self, value: &Value) -> ValidationReport {
        let report = ValidationReport::from_errors(collect_errors(value));
        if self.dev_logging && !report.ok {
            debug!("Content table failed validation with {} error(s)", report.errors.len());
            for error in &report.errors {
                debug!("  - {error}");
            }
        }
        report
    }
}

/// Validate with default settings (no diagnostic logging)
#[must_use]
pub fn validate(value: &Value) -> ValidationReport {
    Validator::default().validate(value)
}

fn collect_errors(value: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(table) = value.as_object() else {
        errors.push("table must be an object".to_string());
        return errors;
    };

    if table.get("type").and_then(Value::as_str) != Some(CONTENT_TABLE_TYPE) {
        errors.push(format!("type must be \"{CONTENT_TABLE_TYPE}\""));
    }

    if table.get("version").and_then(Value::as_u64) != Some(CONTENT_TABLE_VERSION) {
        errors.push(format!("version must be {CONTENT_TABLE_VERSION}"));
    }

    match table.get("source").and_then(Value::as_object) {
        Some(source) => require_strings(source, SOURCE_KEYS, "source", &mut errors),
        None => errors.push("source must be an object".to_string()),
    }

    match table.get("meta").and_then(Value::as_object) {
        Some(meta) => require_strings(meta, META_REQUIRED_KEYS, "meta", &mut errors),
        None => errors.push("meta must be an object".to_string()),
    }

    let Some(items) = table.get("items").and_then(Value::as_array) else {
        errors.push("items must be an array".to_string());
        return errors;
    };

    for (index, item) in items.iter().enumerate() {
        check_item(index, item, &mut errors);
    }

    if let Some(design_system) = table.get("designSystemByNodeId")
        && !design_system.is_null()
        && !design_system.is_object()
    {
        errors.push("designSystemByNodeId must be an object keyed by node id".to_string());
    }

    errors
}

fn require_strings(record: &Map<String, Value>, keys: &[&str], prefix: &str, errors: &mut Vec<String>) {
    for key in keys {
        if !record.get(*key).is_some_and(Value::is_string) {
            errors.push(format!("{prefix}.{key} must be a string"));
        }
    }
}

fn require_bools(record: &Map<String, Value>, keys: &[&str], prefix: &str, errors: &mut Vec<String>) {
    for key in keys {
        if !record.get(*key).is_some_and(Value::is_boolean) {
            errors.push(format!("{prefix}.{key} must be a boolean"));
        }
    }
}

fn check_item(index: usize, item: &Value, errors: &mut Vec<String>) {
    let prefix = format!("items[{index}]");
    let Some(item) = item.as_object() else {
        errors.push(format!("{prefix} must be an object"));
        return;
    };

    for key in ITEM_REQUIRED_KEYS {
        if !item.contains_key(*key) {
            errors.push(format!("{prefix} is missing required key '{key}'"));
        }
    }

    if let Some(component) = sub_record(item, "component", &prefix, errors) {
        match component.get("kind").and_then(Value::as_str) {
            Some(kind) if COMPONENT_KINDS.contains(&kind) => {}
            _ => errors.push(format!(
                "{prefix}.component.kind must be one of {}",
                COMPONENT_KINDS.join(", ")
            )),
        }
        require_strings(component, &["name"], &format!("{prefix}.component"), errors);
    }

    if let Some(field) = sub_record(item, "field", &prefix, errors) {
        require_strings(field, &["label", "path"], &format!("{prefix}.field"), errors);
    }

    if let Some(content) = sub_record(item, "content", &prefix, errors) {
        if content.get("type").and_then(Value::as_str) != Some(TEXT_CONTENT_TYPE) {
            errors.push(format!("{prefix}.content.type must be \"{TEXT_CONTENT_TYPE}\""));
        }
        require_strings(content, &["value"], &format!("{prefix}.content"), errors);
    }

    if let Some(meta) = sub_record(item, "meta", &prefix, errors) {
        require_bools(meta, &["visible", "locked"], &format!("{prefix}.meta"), errors);
    }
}

/// Present sub-records must be objects; absent ones were already reported
fn sub_record<'a>(
    item: &'a Map<String, Value>,
    key: &str,
    prefix: &str,
    errors: &mut Vec<String>,
) -> Option<&'a Map<String, Value>> {
    let value = item.get(key)?;
    let record = value.as_object();
    if record.is_none() {
        errors.push(format!("{prefix}.{key} must be an object"));
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_table() -> Value {
        json!({
            "type": "universal-content-table",
            "version": 1,
            "generatedAtISO": "2025-03-01T10:00:00.000Z",
            "source": {"pageId": "0:1", "pageName": "Home", "selectionNodeId": "1:1", "selectionName": "Hero"},
            "meta": {
                "contentModel": "Universal", "contentStage": "Draft",
                "adaStatus": "⏳", "legalStatus": "⏳",
                "lastUpdated": "2025-03-01T10:00:00.000Z", "version": "1",
                "rootNodeId": "1:1", "rootNodeName": "Hero", "rootNodeUrl": ""
            },
            "items": [{
                "id": "a", "nodeId": "1:2", "nodeUrl": "",
                "component": {"kind": "instance", "name": "Button"},
                "field": {"label": "CTA", "path": "Hero/Button"},
                "content": {"type": "text", "value": "Buy"},
                "meta": {"visible": true, "locked": false}
            }]
        })
    }

    #[test]
    fn test_valid_table_passes() {
        let report = validate(&valid_table());
        assert!(report.ok, "{:?}", report.errors);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_non_object_stops_immediately() {
        let report = validate(&json!([1, 2, 3]));
        assert!(!report.ok);
        assert_eq!(report.errors, vec!["table must be an object".to_string()]);
    }

    #[test]
    fn test_wrong_version_reported() {
        let mut table = valid_table();
        table["version"] = json!(2);
        let report = validate(&table);
        assert_eq!(report.errors, vec!["version must be 1".to_string()]);
    }

    #[test]
    fn test_items_not_array_short_circuits() {
        let mut table = valid_table();
        table["items"] = json!({"0": {}});
        table["designSystemByNodeId"] = json!([]);
        let report = validate(&table);
        assert_eq!(report.errors, vec!["items must be an array".to_string()]);
    }

    #[test]
    fn test_missing_item_keys_and_inner_fields() {
        let mut table = valid_table();
        table["items"] = json!([{
            "id": "a",
            "component": {"kind": "frame"},
            "content": {"type": "image", "value": 3},
            "meta": {"visible": "yes", "locked": false}
        }]);
        let errors = validate(&table).errors;

        assert!(errors.contains(&"items[0] is missing required key 'nodeId'".to_string()));
        assert!(errors.contains(&"items[0] is missing required key 'field'".to_string()));
        assert!(errors.iter().any(|e| e.starts_with("items[0].component.kind must be one of")));
        assert!(errors.contains(&"items[0].component.name must be a string".to_string()));
        assert!(errors.contains(&"items[0].content.type must be \"text\"".to_string()));
        assert!(errors.contains(&"items[0].content.value must be a string".to_string()));
        assert!(errors.contains(&"items[0].meta.visible must be a boolean".to_string()));
        assert!(!errors.iter().any(|e| e.contains("meta.locked")));
    }

    #[test]
    fn test_design_system_must_be_mapping() {
        let mut table = valid_table();
        table["designSystemByNodeId"] = json!({"1:2": {"matched": true}});
        assert!(validate(&table).ok);

        table["designSystemByNodeId"] = json!(["1:2"]);
        let report = validate(&table);
        assert!(!report.ok);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_dev_logging_does_not_change_result() {
        let mut table = valid_table();
        table["type"] = json!("other");
        let quiet = Validator::with_dev_logging(false).validate(&table);
        let loud = Validator::with_dev_logging(true).validate(&table);
        assert_eq!(quiet, loud);
    }
}
