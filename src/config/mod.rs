//! Configuration module for content-table rendering and export
//!
//! This module provides the `ExportConfig` struct, its builder, and loading
//! from TOML files. The configuration is threaded explicitly into the
//! validator and the export orchestrator instead of living in global state.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::ExportConfigBuilder;
pub use types::{ConfigError, ExportConfig};
