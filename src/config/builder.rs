//! Fluent builder for `ExportConfig`

use std::path::PathBuf;

use super::types::{ConfigError, ExportConfig};

#[derive(Debug, Clone, Default)]
pub struct ExportConfigBuilder {
    config: ExportConfig,
}

impl ExportConfig {
    /// Create a builder for configuring an `ExportConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }
}

impl ExportConfigBuilder {
    #[must_use]
    pub fn dev_logging(mut self, enabled: bool) -> Self {
        self.config.dev_logging = enabled;
        self
    }

    #[must_use]
    pub fn default_preset(mut self, preset: impl Into<String>) -> Self {
        self.config.default_preset = preset.into();
        self
    }

    #[must_use]
    pub fn embed_json(mut self, enabled: bool) -> Self {
        self.config.embed_json = enabled;
        self
    }

    #[must_use]
    pub fn link_node_urls(mut self, enabled: bool) -> Self {
        self.config.link_node_urls = enabled;
        self
    }

    #[must_use]
    pub fn presets_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.presets_path = Some(path.into());
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the default preset name is blank.
    pub fn build(self) -> Result<ExportConfig, ConfigError> {
        self.config.check()?;
        Ok(self.config)
    }
}
