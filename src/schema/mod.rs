//! Canonical content-table schema
//!
//! A `ContentTable` is the versioned record of design-content items extracted
//! from a canvas selection. Every projection (HTML, TSV, JSON, XHTML) is
//! derived from this one model.

pub mod keys;
mod types;

pub use types::{
    ComponentKind, ComponentRef, ContentItem, ContentTable, ContentType, FieldRef, ItemContent,
    ItemMeta, TableMeta, TableSource,
};
