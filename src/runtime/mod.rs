//! Async isolation for external collaborators
//!
//! The export orchestrator's only suspension point is the optional
//! post-process hook. This module polls that hook inside a panic boundary so
//! a panic surfaces as a typed error instead of unwinding into the caller.
//! It needs no particular runtime.

pub mod async_wrappers;

pub use async_wrappers::{HookTask, panic_message};
