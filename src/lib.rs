pub mod config;
pub mod export;
pub mod normalizer;
pub mod presets;
pub mod renderer;
pub mod runtime;
pub mod schema;
pub mod utils;
pub mod validator;
pub mod xhtml;

pub use config::{ConfigError, ExportConfig, ExportConfigBuilder};
pub use export::{
    ExportDocument, ExportRequest, Exporter, HookError, HookOutcome, HookRequest, PostProcessHook,
    SelectionContext,
};
pub use normalizer::{normalize, normalize_at};
pub use presets::{ColumnDef, PresetCatalogue, PresetDefinition, PresetError};
pub use renderer::{HtmlOptions, Renderer, TableGrid, extract_from_html};
pub use schema::*;
pub use validator::{ValidationReport, Validator, validate};
pub use xhtml::encode_document;

/// Normalize and export `table` with the configured default preset and no hook
///
/// Convenience for callers that do not need a long-lived [`Exporter`].
pub async fn export_document(table: ContentTable, config: ExportConfig) -> ExportDocument {
    Exporter::with_builtin_presets(config)
        .build_export_document(ExportRequest::new(table))
        .await
}
