//! Future wrapper around a hook invocation

use futures::future::{BoxFuture, FutureExt};
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::export::HookError;

/// A hook invocation polled in place on the caller's executor.
/// Implements Future so it can simply be awaited; a panic while polling
/// resolves to [`HookError::Panicked`] instead of unwinding into the caller.
pub struct HookTask<'a, T> {
    inner: BoxFuture<'a, std::thread::Result<Result<T, HookError>>>,
}

impl<'a, T> HookTask<'a, T>
where
    T: Send + 'a,
{
    /// Wrap `future`; no runtime is required to drive it
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, HookError>> + Send + 'a,
    {
        Self {
            inner: AssertUnwindSafe(future).catch_unwind().boxed(),
        }
    }
}

impl<T> Future for HookTask<'_, T> {
    type Output = Result<T, HookError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.inner.poll_unpin(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(payload)) => {
                Poll::Ready(Err(HookError::Panicked(panic_message(payload.as_ref()))))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Best-effort text of a panic payload
#[must_use]
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
