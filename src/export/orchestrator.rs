//! The export pipeline: hook, normalize, render, encode

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::context::SelectionContext;
use super::hook::{HookRequest, PostProcessHook};
use crate::config::ExportConfig;
use crate::presets::PresetCatalogue;
use crate::renderer::Renderer;
use crate::runtime::{HookTask, panic_message};
use crate::schema::ContentTable;
use crate::validator::Validator;
use crate::xhtml::encode_document;

/// What happened to the optional hook during an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    NotConfigured,
    /// The hook's table replaced the original
    Applied,
    /// The hook failed; the original table was exported
    Failed(String),
}

/// One export call
pub struct ExportRequest<'a> {
    pub table: ContentTable,
    /// Preset to render; the configured default when `None`
    pub preset: Option<String>,
    pub hook: Option<&'a dyn PostProcessHook>,
}

impl<'a> ExportRequest<'a> {
    #[must_use]
    pub fn new(table: ContentTable) -> Self {
        Self {
            table,
            preset: None,
            hook: None,
        }
    }

    #[must_use]
    pub fn preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    #[must_use]
    pub fn hook(mut self, hook: &'a dyn PostProcessHook) -> Self {
        self.hook = Some(hook);
        self
    }
}

/// XHTML payload ready for the document API, plus what produced it
#[derive(Debug, Clone)]
pub struct ExportDocument {
    pub document: String,
    /// The normalized table that was rendered
    pub table_used: ContentTable,
    pub selection_context: SelectionContext,
    /// Preset whose columns were rendered, after fallback
    pub preset_used: String,
    pub hook_outcome: HookOutcome,
}

/// Builds export documents with an injected configuration and catalogue
#[derive(Debug, Clone)]
pub struct Exporter {
    config: ExportConfig,
    catalogue: Arc<PresetCatalogue>,
    validator: Validator,
}

impl Exporter {
    #[must_use]
    pub fn new(config: ExportConfig, catalogue: Arc<PresetCatalogue>) -> Self {
        let validator = Validator::new(&config);
        Self {
            config,
            catalogue,
            validator,
        }
    }

    /// Exporter over the built-in preset catalogue
    #[must_use]
    pub fn with_builtin_presets(config: ExportConfig) -> Self {
        Self::new(config, Arc::new(PresetCatalogue::builtin().clone()))
    }

    #[must_use]
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Run the export pipeline
    ///
    /// 1. run the hook, if any; on failure keep the original table
    /// 2. normalize, re-establishing invariants the hook may have broken
    /// 3. render HTML for the preset (no embedded JSON)
    /// 4. XHTML-encode the HTML
    pub async fn build_export_document(&self, request: ExportRequest<'_>) -> ExportDocument {
        let selection_context = SelectionContext::from_table(&request.table);

        let (table, hook_outcome) = match request.hook {
            Some(hook) => {
                self.apply_hook(hook, request.table, selection_context.clone())
                    .await
            }
            None => (request.table, HookOutcome::NotConfigured),
        };

        let table_used = table.normalized();

        let preset = request
            .preset
            .unwrap_or_else(|| self.config.default_preset().to_string());
        let preset_used = self.catalogue.resolve(&preset).id.clone();
        if preset_used != preset {
            debug!(requested = %preset, used = %preset_used, "Preset fell back");
        }

        let renderer = Renderer::new(&self.catalogue);
        let html = renderer.to_html_with(&table_used, &preset_used, &self.config.export_html_options());
        let document = encode_document(&html);

        info!(
            items = table_used.items.len(),
            preset = %preset_used,
            bytes = document.len(),
            "Built export document"
        );

        ExportDocument {
            document,
            table_used,
            selection_context,
            preset_used,
            hook_outcome,
        }
    }

    async fn apply_hook(
        &self,
        hook: &dyn PostProcessHook,
        table: ContentTable,
        selection_context: SelectionContext,
    ) -> (ContentTable, HookOutcome) {
        let request = HookRequest {
            table: table.clone(),
            selection_context,
        };

        // The hook may panic before it even returns a future
        let future = match std::panic::catch_unwind(AssertUnwindSafe(|| hook.post_process(request))) {
            Ok(future) => future,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(error = %message, "Post-process hook panicked; exporting original table");
                return (table, HookOutcome::Failed(message));
            }
        };

        match HookTask::new(future).await {
            Ok(modified) => {
                if self.config.dev_logging() {
                    let report = self.validator.validate(&modified.to_value());
                    if !report.ok {
                        debug!(
                            errors = report.errors.len(),
                            "Hook returned a table that needs normalization"
                        );
                    }
                }
                (modified, HookOutcome::Applied)
            }
            Err(e) => {
                warn!(error = %e, "Post-process hook failed; exporting original table");
                (table, HookOutcome::Failed(e.to_string()))
            }
        }
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::with_builtin_presets(ExportConfig::default())
    }
}
