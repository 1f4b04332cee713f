//! Wire-level key names shared by the validator and the normalizer

/// Top-level keys of a content table with a dedicated struct field
pub const TABLE_KEYS: &[&str] = &[
    "type",
    "version",
    "generatedAtISO",
    "source",
    "meta",
    "items",
    "designSystemByNodeId",
];

/// String fields of `source`
pub const SOURCE_KEYS: &[&str] = &["pageId", "pageName", "selectionNodeId", "selectionName"];

/// Required string fields of the table-level `meta` record
pub const META_REQUIRED_KEYS: &[&str] = &[
    "contentModel",
    "contentStage",
    "adaStatus",
    "legalStatus",
    "lastUpdated",
    "version",
    "rootNodeId",
    "rootNodeName",
    "rootNodeUrl",
];

/// Keys of the table-level `meta` record with a dedicated struct field
pub const META_KEYS: &[&str] = &[
    "contentModel",
    "contentStage",
    "adaStatus",
    "legalStatus",
    "lastUpdated",
    "version",
    "rootNodeId",
    "rootNodeName",
    "rootNodeUrl",
    "thumbnailUrl",
];

/// Keys every item must carry
pub const ITEM_REQUIRED_KEYS: &[&str] = &[
    "id",
    "nodeId",
    "nodeUrl",
    "component",
    "field",
    "content",
    "meta",
];

/// Free-text annotations an item may carry
pub const ITEM_ANNOTATION_KEYS: &[&str] =
    &["notes", "contentKey", "jiraTicket", "adaNotes", "errorMessage"];

/// Wire names accepted for `component.kind`
pub const COMPONENT_KINDS: &[&str] = &["component", "componentSet", "instance", "custom"];

/// Modelled keys of the item sub-records
pub const COMPONENT_KEYS: &[&str] = &["kind", "name", "key", "variantProperties"];
pub const FIELD_KEYS: &[&str] = &["label", "path", "role"];
pub const CONTENT_KEYS: &[&str] = &["type", "value"];
pub const ITEM_META_KEYS: &[&str] = &["visible", "locked"];
