//! Loading and derived values for `ExportConfig`

use log::debug;
use std::path::Path;

use super::types::{ConfigError, ExportConfig};
use crate::presets::PresetCatalogue;
use crate::renderer::HtmlOptions;

impl ExportConfig {
    /// Parse a configuration from TOML text; absent keys keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this struct or a
    /// value is out of range.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    /// Load a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Build the preset catalogue this configuration points at
    ///
    /// Uses the built-in catalogue unless `presets_path` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the preset document cannot be read or parsed.
    pub fn load_catalogue(&self) -> Result<PresetCatalogue, ConfigError> {
        let Some(path) = self.presets_path.as_deref() else {
            return Ok(PresetCatalogue::builtin().clone());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalogue = PresetCatalogue::from_markdown(&text)?;
        debug!(
            "Loaded {} presets from {}",
            catalogue.len(),
            path.display()
        );
        Ok(catalogue)
    }

    /// HTML options for clipboard/view rendering
    #[must_use]
    pub fn view_html_options(&self) -> HtmlOptions {
        HtmlOptions {
            embed_json: self.embed_json,
            link_node_urls: false,
        }
    }

    /// HTML options for documents sent to the document API
    ///
    /// The embedded JSON block is never part of an export document.
    #[must_use]
    pub fn export_html_options(&self) -> HtmlOptions {
        HtmlOptions {
            embed_json: false,
            link_node_urls: self.link_node_urls,
        }
    }

    pub(crate) fn check(&self) -> Result<(), ConfigError> {
        if self.default_preset.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_preset must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
