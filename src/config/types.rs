//! Core configuration types
//!
//! This module contains the main `ExportConfig` struct and the error type
//! returned when a configuration cannot be loaded or built.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::presets::PresetError;
use crate::utils::UNIVERSAL_PRESET;

/// Runtime configuration for the content-table pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Emit diagnostic logging from the validator and the exporter.
    ///
    /// Validation never changes behaviour based on this flag; it only
    /// controls whether each reported problem is also logged.
    ///
    /// Default: false
    pub(crate) dev_logging: bool,

    /// Preset used when a caller does not name one
    ///
    /// Default: "universal"
    pub(crate) default_preset: String,

    /// Embed the full table as JSON inside clipboard/view HTML so it can be
    /// recovered with `extract_from_html`
    ///
    /// Default: true
    pub(crate) embed_json: bool,

    /// Render `nodeUrl` cells as links in exported documents
    ///
    /// Default: true
    pub(crate) link_node_urls: bool,

    /// Optional preset document replacing the built-in catalogue
    pub(crate) presets_path: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dev_logging: false,
            default_preset: UNIVERSAL_PRESET.to_string(),
            embed_json: true,
            link_node_urls: true,
            presets_path: None,
        }
    }
}

/// Errors raised while loading or building configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config or preset file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `ExportConfig`
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Preset document referenced by the config is malformed
    #[error("Invalid preset document: {0}")]
    Presets(#[from] PresetError),

    /// A field value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
