//! Shared constants for the content-table pipeline
//!
//! This module contains schema literals and default values used
//! throughout the codebase to ensure consistency and avoid magic strings.

/// Discriminator stored in `ContentTable.type`
pub const CONTENT_TABLE_TYPE: &str = "universal-content-table";

/// The only schema version this crate reads or writes
pub const CONTENT_TABLE_VERSION: u64 = 1;

/// Element id of the `<script type="application/json">` block that carries
/// the full table inside rendered HTML
pub const EMBEDDED_JSON_SCRIPT_ID: &str = "universal-content-json";

/// Preset used whenever a requested preset is unknown, disabled or empty
pub const UNIVERSAL_PRESET: &str = "universal";

/// Glyph used for compliance statuses that have not been reviewed yet
pub const PENDING_STATUS: &str = "⏳";

/// Review stage assigned to freshly synthesized table metadata
pub const DEFAULT_CONTENT_STAGE: &str = "Draft";

/// Content model name assigned when the scanner did not supply one
pub const DEFAULT_CONTENT_MODEL: &str = "Universal";

/// Schema version tag written into synthesized `meta.version`
pub const DEFAULT_META_VERSION: &str = "1";

pub const DEFAULT_PAGE_NAME: &str = "Unknown Page";
pub const DEFAULT_SELECTION_NAME: &str = "Unknown Selection";
pub const DEFAULT_COMPONENT_NAME: &str = "Unknown Component";
pub const DEFAULT_FIELD_LABEL: &str = "Unknown Field";

/// Content type literal; text is the only kind of content the scanner emits
pub const TEXT_CONTENT_TYPE: &str = "text";

/// Rendered value for `true` leaves in column paths
pub const YES: &str = "Yes";

/// Rendered value for `false` leaves in column paths
pub const NO: &str = "No";
