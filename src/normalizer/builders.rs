//! One small pure builder per sub-record
//!
//! Each builder takes whatever the input held for its record (possibly
//! nothing, possibly the wrong type) and returns a fully populated record.
//! Values the input supplied are always kept: scalars in text fields become
//! text, and keys a record does not model move to its `extra` map.

use serde_json::{Map, Value};

use crate::schema::keys::{
    COMPONENT_KEYS, CONTENT_KEYS, FIELD_KEYS, ITEM_ANNOTATION_KEYS, ITEM_META_KEYS,
    ITEM_REQUIRED_KEYS, META_KEYS, SOURCE_KEYS,
};
use crate::schema::{
    ComponentKind, ComponentRef, ContentItem, ContentType, FieldRef, ItemContent, ItemMeta,
    TableMeta, TableSource,
};
use crate::utils::{
    DEFAULT_COMPONENT_NAME, DEFAULT_CONTENT_MODEL, DEFAULT_CONTENT_STAGE, DEFAULT_FIELD_LABEL,
    DEFAULT_META_VERSION, DEFAULT_PAGE_NAME, DEFAULT_SELECTION_NAME, PENDING_STATUS,
};

/// Text of `key`, if present and a scalar
pub(crate) fn text_at(record: Option<&Map<String, Value>>, key: &str) -> Option<String> {
    scalar_text(record?.get(key))
}

/// Scalar coercion for free-text values: strings, numbers and booleans
/// survive as text, anything else counts as absent
pub(crate) fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Copy every key not in `known`
pub(crate) fn unknown_keys(record: &Map<String, Value>, known: &[&str]) -> Map<String, Value> {
    record
        .iter()
        .filter(|(key, _)| !known.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn extra_of(record: Option<&Map<String, Value>>, known: &[&str]) -> Map<String, Value> {
    record.map(|r| unknown_keys(r, known)).unwrap_or_default()
}

pub fn build_source(raw: Option<&Value>) -> TableSource {
    let source = raw.and_then(Value::as_object);
    TableSource {
        page_id: text_at(source, "pageId").unwrap_or_default(),
        page_name: text_at(source, "pageName").unwrap_or_else(|| DEFAULT_PAGE_NAME.to_string()),
        selection_node_id: text_at(source, "selectionNodeId").unwrap_or_default(),
        selection_name: text_at(source, "selectionName")
            .unwrap_or_else(|| DEFAULT_SELECTION_NAME.to_string()),
        extra: extra_of(source, SOURCE_KEYS),
    }
}

/// Table metadata; missing fields are derived from `source` and `now`
pub fn build_table_meta(raw: Option<&Value>, source: &TableSource, now: &str) -> TableMeta {
    let meta = raw.and_then(Value::as_object);
    let or = |key: &str, fallback: &str| text_at(meta, key).unwrap_or_else(|| fallback.to_string());
    TableMeta {
        content_model: or("contentModel", DEFAULT_CONTENT_MODEL),
        content_stage: or("contentStage", DEFAULT_CONTENT_STAGE),
        ada_status: or("adaStatus", PENDING_STATUS),
        legal_status: or("legalStatus", PENDING_STATUS),
        last_updated: or("lastUpdated", now),
        version: or("version", DEFAULT_META_VERSION),
        root_node_id: or("rootNodeId", source.selection_node_id.as_str()),
        root_node_name: or("rootNodeName", source.selection_name.as_str()),
        root_node_url: or("rootNodeUrl", ""),
        thumbnail_url: text_at(meta, "thumbnailUrl"),
        extra: extra_of(meta, META_KEYS),
    }
}

pub fn build_component(raw: Option<&Value>) -> ComponentRef {
    let component = raw.and_then(Value::as_object);
    ComponentRef {
        kind: component
            .and_then(|c| c.get("kind"))
            .and_then(Value::as_str)
            .and_then(ComponentKind::from_wire)
            .unwrap_or_default(),
        name: text_at(component, "name").unwrap_or_else(|| DEFAULT_COMPONENT_NAME.to_string()),
        key: text_at(component, "key"),
        variant_properties: component
            .and_then(|c| c.get("variantProperties"))
            .and_then(Value::as_object)
            .cloned(),
        extra: extra_of(component, COMPONENT_KEYS),
    }
}

pub fn build_field(raw: Option<&Value>) -> FieldRef {
    let field = raw.and_then(Value::as_object);
    FieldRef {
        label: text_at(field, "label").unwrap_or_else(|| DEFAULT_FIELD_LABEL.to_string()),
        path: text_at(field, "path").unwrap_or_default(),
        role: text_at(field, "role"),
        extra: extra_of(field, FIELD_KEYS),
    }
}

pub fn build_content(raw: Option<&Value>) -> ItemContent {
    let content = raw.and_then(Value::as_object);
    ItemContent {
        content_type: ContentType::Text,
        value: text_at(content, "value").unwrap_or_default(),
        extra: extra_of(content, CONTENT_KEYS),
    }
}

pub fn build_item_meta(raw: Option<&Value>) -> ItemMeta {
    let meta = raw.and_then(Value::as_object);
    let flag = |key: &str| meta.and_then(|m| m.get(key)).and_then(Value::as_bool);
    let defaults = ItemMeta::default();
    ItemMeta {
        visible: flag("visible").unwrap_or(defaults.visible),
        locked: flag("locked").unwrap_or(defaults.locked),
        extra: extra_of(meta, ITEM_META_KEYS),
    }
}

/// Build an item from its raw record; `index` feeds the positional id
pub fn build_item(item: &Map<String, Value>, index: usize) -> ContentItem {
    let non_empty = |key: &str| text_at(Some(item), key).filter(|s| !s.is_empty());

    let id = non_empty("id")
        .or_else(|| non_empty("nodeId"))
        .unwrap_or_else(|| format!("item_{index}"));
    let node_id = non_empty("nodeId").unwrap_or_else(|| id.clone());

    let mut known: Vec<&str> = ITEM_REQUIRED_KEYS.to_vec();
    known.extend_from_slice(ITEM_ANNOTATION_KEYS);

    ContentItem {
        node_url: text_at(Some(item), "nodeUrl").unwrap_or_default(),
        component: build_component(item.get("component")),
        field: build_field(item.get("field")),
        content: build_content(item.get("content")),
        meta: build_item_meta(item.get("meta")),
        notes: scalar_text(item.get("notes")),
        content_key: scalar_text(item.get("contentKey")),
        jira_ticket: scalar_text(item.get("jiraTicket")),
        ada_notes: scalar_text(item.get("adaNotes")),
        error_message: scalar_text(item.get("errorMessage")),
        extra: unknown_keys(item, &known),
        id,
        node_id,
    }
}

/// Design-system results pass through only when they are a plain mapping
pub fn build_design_system(raw: Option<&Value>) -> Option<Map<String, Value>> {
    raw.and_then(Value::as_object).cloned()
}
