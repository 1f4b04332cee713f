//! Record types for the canonical content table
//!
//! Field names serialize in camelCase to match the wire format produced by
//! the canvas scanner. Maps are `serde_json::Map`, which is ordered by key,
//! so serializing the same table always yields the same bytes. Every record
//! keeps the keys it does not model in a flattened `extra` map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::{CONTENT_TABLE_TYPE, CONTENT_TABLE_VERSION};

/// Top-level content inventory extracted from a canvas selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTable {
    /// Schema discriminator, always `universal-content-table`
    #[serde(rename = "type")]
    pub table_type: String,
    pub version: u64,
    #[serde(rename = "generatedAtISO")]
    pub generated_at_iso: String,
    pub source: TableSource,
    pub meta: TableMeta,
    /// Display order is significant
    pub items: Vec<ContentItem>,
    /// Opaque design-system detection results keyed by node id
    #[serde(
        rename = "designSystemByNodeId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub design_system_by_node_id: Option<Map<String, Value>>,
    /// Keys this crate does not model, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentTable {
    /// Create an empty table for the given provenance and metadata
    #[must_use]
    pub fn new(generated_at_iso: impl Into<String>, source: TableSource, meta: TableMeta) -> Self {
        Self {
            table_type: CONTENT_TABLE_TYPE.to_string(),
            version: CONTENT_TABLE_VERSION,
            generated_at_iso: generated_at_iso.into(),
            source,
            meta,
            items: Vec::new(),
            design_system_by_node_id: None,
            extra: Map::new(),
        }
    }

    /// Untyped view of the table, as the validator and normalizer see it
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Provenance of the extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSource {
    pub page_id: String,
    pub page_name: String,
    pub selection_node_id: String,
    pub selection_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Table-level review metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMeta {
    pub content_model: String,
    pub content_stage: String,
    pub ada_status: String,
    pub legal_status: String,
    pub last_updated: String,
    /// Schema version tag, distinct from the numeric `ContentTable.version`
    pub version: String,
    pub root_node_id: String,
    pub root_node_name: String,
    pub root_node_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One extracted piece of content and the canvas node it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    /// Weak back-reference; the table does not own the canvas node
    pub node_id: String,
    pub node_url: String,
    pub component: ComponentRef,
    pub field: FieldRef,
    pub content: ItemContent,
    pub meta: ItemMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// CMS key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira_ticket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ada_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Kind of design component an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Component,
    ComponentSet,
    Instance,
    #[default]
    Custom,
}

impl ComponentKind {
    /// Parse a wire name, returning `None` for anything unrecognised
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "component" => Some(Self::Component),
            "componentSet" => Some(Self::ComponentSet),
            "instance" => Some(Self::Instance),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::ComponentSet => "componentSet",
            Self::Instance => "instance",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRef {
    pub kind: ComponentKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_properties: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    pub label: String,
    /// Breadcrumb of layer names leading to the text node
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Only plain text content is extracted today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemContent {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub value: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMeta {
    pub visible: bool,
    pub locked: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ItemMeta {
    fn default() -> Self {
        Self {
            visible: true,
            locked: false,
            extra: Map::new(),
        }
    }
}
