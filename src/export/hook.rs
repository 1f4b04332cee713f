//! Post-process hook contract
//!
//! A hook is owned by an integration layer and may do its own async work
//! (network calls, lookups). It receives a copy of the table and returns a
//! replacement. Any closure `Fn(HookRequest) -> impl Future<Output =
//! Result<ContentTable, HookError>>` is a hook.

use futures::future::{BoxFuture, FutureExt};
use std::future::Future;

use super::context::SelectionContext;
use crate::schema::ContentTable;

/// Boxed future returned by a hook
pub type HookFuture = BoxFuture<'static, Result<ContentTable, HookError>>;

/// Input handed to a hook
#[derive(Debug, Clone)]
pub struct HookRequest {
    pub table: ContentTable,
    pub selection_context: SelectionContext,
}

/// Why a hook produced no table
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// The hook reported a failure
    #[error("Post-process hook failed: {0}")]
    Failed(String),

    /// The hook panicked
    #[error("Post-process hook panicked: {0}")]
    Panicked(String),

    /// Error propagated from the hook's own dependencies
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub trait PostProcessHook: Send + Sync {
    fn post_process(&self, request: HookRequest) -> HookFuture;
}

impl<F, Fut> PostProcessHook for F
where
    F: Fn(HookRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<ContentTable, HookError>> + Send + 'static,
{
    fn post_process(&self, request: HookRequest) -> HookFuture {
        self(request).boxed()
    }
}
