//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! async adapters.
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`fail!`], [`details!`]
//! - **Types**: [`Outcome`], [`ErrorDetails`], [`ErrorItem`], [`Details`], [`DetailValue`], [`Fault`]
//! - **Traits**: [`IntoErrorDetails`], [`FaultMessage`], [`OptionExt`], [`ResultExt`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`FutureOutcomeExt`](crate::async_ext::FutureOutcomeExt)
//! - **Types / functions**: [`Lift`](crate::async_ext::Lift), [`lift`](crate::async_ext::lift)
//! - **Modules**: `async_ensure`, the already-completed precondition helpers

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
#[cfg(feature = "async")]
pub use crate::async_ext::{ensure as async_ensure, lift, FutureOutcomeExt, Lift};

#[cfg(feature = "async-tokio")]
pub use crate::async_ext::with_timeout;

#[cfg(feature = "tracing")]
pub use crate::async_ext::{FutureSpanExt, OutcomeTraceExt};
