//! Preset catalogue and column resolution
//!
//! A preset is a named, ordered list of columns. Each column pairs a header
//! label with a path expression evaluated against one table item. Every
//! renderer resolves cells through this module so the formats cannot drift
//! apart.

mod catalogue;
mod error;
mod markdown;
pub mod path;

pub use catalogue::{ColumnDef, PresetCatalogue, PresetDefinition};
pub use error::PresetError;
pub use path::{resolve_path, resolve_value_path};
