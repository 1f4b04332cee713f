//! Export pipeline: hook isolation, normalization and XHTML output

use futures::FutureExt;
use kodegen_tools_content_table::export::HookFuture;
use kodegen_tools_content_table::{
    ContentTable, ExportConfig, ExportRequest, Exporter, HookError, HookOutcome, HookRequest,
    PostProcessHook, PresetCatalogue, validate,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

mod common;
use common::{button_table, rich_table};

/// Adds a CMS key to every item and counts invocations
struct KeyAssigner {
    calls: AtomicUsize,
}

impl PostProcessHook for KeyAssigner {
    fn post_process(&self, request: HookRequest) -> HookFuture {
        self.calls.fetch_add(1, Ordering::SeqCst);
        async move {
            let mut table = request.table;
            for item in &mut table.items {
                item.content_key = Some(format!(
                    "{}.{}",
                    request.selection_context.selection_name.to_lowercase().replace(' ', "-"),
                    item.id
                ));
            }
            Ok(table)
        }
        .boxed()
    }
}

#[tokio::test]
async fn test_hook_output_is_rendered() {
    let hook = KeyAssigner {
        calls: AtomicUsize::new(0),
    };
    let exporter = Exporter::default();
    let out = exporter
        .build_export_document(ExportRequest::new(rich_table()).preset("localization").hook(&hook))
        .await;

    assert_eq!(hook.calls.load(Ordering::SeqCst), 1);
    assert_eq!(out.hook_outcome, HookOutcome::Applied);
    assert_eq!(out.preset_used, "localization");
    assert_eq!(out.table_used.items[0].content_key.as_deref(), Some("cart-summary.a"));
    assert!(out.document.contains("<td style='"));
    assert!(out.document.contains("cart-summary.b"));
}

#[tokio::test]
async fn test_hook_error_falls_back_to_original() {
    let hook = |_request: HookRequest| async {
        Err::<ContentTable, _>(HookError::Other(anyhow::anyhow!("lookup timed out")))
    };
    let original = rich_table();
    let exporter = Exporter::default();
    let out = exporter
        .build_export_document(ExportRequest::new(original.clone()).hook(&hook))
        .await;

    assert!(matches!(out.hook_outcome, HookOutcome::Failed(ref m) if m.contains("lookup timed out")));
    assert_eq!(out.table_used, original);
}

#[tokio::test]
async fn test_hook_panic_inside_future_is_isolated() {
    let hook = |request: HookRequest| async move {
        if !request.table.items.is_empty() {
            panic!("hook exploded");
        }
        Ok::<_, HookError>(request.table)
    };
    let exporter = Exporter::default();
    let out = exporter
        .build_export_document(ExportRequest::new(button_table()).hook(&hook))
        .await;

    assert!(matches!(out.hook_outcome, HookOutcome::Failed(ref m) if m.contains("hook exploded")));
    assert!(out.document.contains("Buy Now"));
}

struct EagerPanic;

impl PostProcessHook for EagerPanic {
    fn post_process(&self, _request: HookRequest) -> HookFuture {
        panic!("failed before returning a future");
    }
}

#[tokio::test]
async fn test_hook_panic_before_future_is_isolated() {
    let exporter = Exporter::default();
    let out = exporter
        .build_export_document(ExportRequest::new(button_table()).hook(&EagerPanic))
        .await;

    assert!(matches!(out.hook_outcome, HookOutcome::Failed(ref m) if m.contains("before returning")));
    assert_eq!(out.table_used, button_table());
}

#[tokio::test]
async fn test_hook_output_is_renormalized() {
    let hook = |request: HookRequest| async move {
        let mut table = request.table;
        table.table_type = "something-else".to_string();
        table.version = 9;
        table.items[0].id = String::new();
        Ok::<_, HookError>(table)
    };
    let config = ExportConfig::builder().dev_logging(true).build().unwrap();
    let exporter = Exporter::with_builtin_presets(config);
    let out = exporter
        .build_export_document(ExportRequest::new(button_table()).hook(&hook))
        .await;

    assert_eq!(out.hook_outcome, HookOutcome::Applied);
    assert_eq!(out.table_used.table_type, "universal-content-table");
    assert_eq!(out.table_used.version, 1);
    assert_eq!(out.table_used.items[0].id, "1:a");
    assert!(validate(&out.table_used.to_value()).ok);
}

#[tokio::test]
async fn test_document_is_strict_and_has_no_embedded_json() {
    let exporter = Exporter::default();
    let out = exporter.build_export_document(ExportRequest::new(rich_table())).await;

    assert!(!out.document.contains("<script"));
    assert!(!out.document.contains('"'));
    assert!(out.document.contains("Line one<br />Line two"));
    assert!(out.document.contains("Check &quot;tone&quot; with legal"));
    assert!(out.document.starts_with("<table style='"));
    assert!(out.document.ends_with("</table>"));
}

#[tokio::test]
async fn test_default_preset_comes_from_config() {
    let config = ExportConfig::builder()
        .default_preset("content-only")
        .build()
        .unwrap();
    let exporter = Exporter::new(config, Arc::new(PresetCatalogue::builtin().clone()));
    let out = exporter.build_export_document(ExportRequest::new(button_table())).await;

    assert_eq!(out.preset_used, "content-only");
    assert!(out.document.contains(">Field</th>"));
    assert!(!out.document.contains(">Kind</th>"));
}

#[tokio::test]
async fn test_selection_context_reflects_source() {
    let out = kodegen_tools_content_table::export_document(rich_table(), ExportConfig::default()).await;
    assert_eq!(out.selection_context.page_name, "Checkout");
    assert_eq!(out.selection_context.selection_node_id, "12:34");
    assert_eq!(out.hook_outcome, HookOutcome::NotConfigured);
}
