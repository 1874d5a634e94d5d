//! Async extensions for outcome-rail.
//!
//! One combinator set, lifted: every adapter here awaits the previous stage
//! and then applies the same synchronous combinator [`Outcome`](crate::Outcome)
//! exposes, so semantics are identical whichever side is asynchronous.
//!
//! - [`lift`] / [`Lift`]: await-then-apply for any combinator
//! - [`FutureOutcomeExt`]: `map_valid`, `bind_valid`, `try_map_valid`, ... on
//!   futures resolving to an outcome
//! - `Outcome::bind_async` and friends: async continuations on a ready outcome
//! - [`ensure`]: already-completed versions of the precondition helpers
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome_rail::prelude_async::*;
//!
//! async fn find(pk: &str) -> Outcome<Option<String>> {
//!     Outcome::valid(Some(format!("row {pk}")))
//! }
//!
//! async fn example(pk: &str) -> Outcome<String> {
//!     async_ensure::not_blank(pk, "pk empty")
//!         .bind_valid_async(find)
//!         .await
//!         .null_to_failed("not found")
//! }
//! ```

pub mod ensure;
mod future_ext;
mod lift;
mod outcome_async;

#[cfg(feature = "async-tokio")]
mod tokio_ext;
#[cfg(feature = "tracing")]
mod tracing_ext;

pub use future_ext::FutureOutcomeExt;
pub use lift::{lift, Lift};

#[cfg(feature = "async-tokio")]
pub use tokio_ext::{with_timeout, TIMEOUT_KEY};
#[cfg(feature = "tracing")]
pub use tracing_ext::{FutureSpanExt, OutcomeTraceExt, SpanDetailsFuture, SPAN_KEY};
