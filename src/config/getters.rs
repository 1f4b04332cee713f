//! Getter methods for `ExportConfig`

use std::path::Path;

use super::types::ExportConfig;

impl ExportConfig {
    #[must_use]
    pub fn dev_logging(&self) -> bool {
        self.dev_logging
    }

    #[must_use]
    pub fn default_preset(&self) -> &str {
        &self.default_preset
    }

    #[must_use]
    pub fn embed_json(&self) -> bool {
        self.embed_json
    }

    #[must_use]
    pub fn link_node_urls(&self) -> bool {
        self.link_node_urls
    }

    #[must_use]
    pub fn presets_path(&self) -> Option<&Path> {
        self.presets_path.as_deref()
    }
}
