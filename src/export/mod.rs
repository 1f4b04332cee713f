//! Export orchestration for the Confluence document path
//!
//! Composes the optional post-process hook, the normalizer, the HTML
//! renderer and the XHTML encoder into one pipeline. Every step is total:
//! a failing hook is logged and skipped, never propagated.

mod context;
mod hook;
mod orchestrator;

pub use context::SelectionContext;
pub use hook::{HookError, HookFuture, HookRequest, PostProcessHook};
pub use orchestrator::{ExportDocument, ExportRequest, Exporter, HookOutcome};
