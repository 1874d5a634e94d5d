//! Async forms of the [`ensure`](crate::ensure) helpers.
//!
//! Each helper resolves immediately to the same outcome as its synchronous
//! counterpart. No work is deferred; the future type only lets callers chain
//! the check uniformly with other async stages.
//!
//! ```rust
//! use outcome_rail::async_ext::{ensure, FutureOutcomeExt};
//!
//! async fn example(pk: &str) {
//!     let outcome = ensure::not_blank(pk, "pk empty")
//!         .map_valid(|pk| pk.len())
//!         .await;
//!     assert!(outcome.is_valid() || pk.trim().is_empty());
//! }
//! ```

use core::future::{ready, Ready};

use crate::ensure::{self as sync, Blankable, Emptiable};
use crate::outcome::Outcome;
use crate::traits::IntoErrorDetails;

/// Async form of [`ensure::that`](crate::ensure::that).
#[inline]
pub fn that<T, E>(value: T, predicate: bool, error: E) -> Ready<Outcome<T>>
where
    E: IntoErrorDetails,
{
    ready(sync::that(value, predicate, error))
}

/// Async form of [`ensure::that_with`](crate::ensure::that_with).
#[inline]
pub fn that_with<T, E, F>(value: T, predicate: bool, error: F) -> Ready<Outcome<T>>
where
    E: IntoErrorDetails,
    F: FnOnce() -> E,
{
    ready(sync::that_with(value, predicate, error))
}

/// Async form of [`ensure::that_by`](crate::ensure::that_by).
#[inline]
pub fn that_by<T, P, E>(value: T, predicate: P, error: E) -> Ready<Outcome<T>>
where
    P: FnOnce(&T) -> bool,
    E: IntoErrorDetails,
{
    ready(sync::that_by(value, predicate, error))
}

/// Async form of [`ensure::not_null`](crate::ensure::not_null).
#[inline]
pub fn not_null<T, E>(value: Option<T>, error: E) -> Ready<Outcome<T>>
where
    E: IntoErrorDetails,
{
    ready(sync::not_null(value, error))
}

/// Async form of [`ensure::not_empty`](crate::ensure::not_empty).
#[inline]
pub fn not_empty<C, E>(value: C, error: E) -> Ready<Outcome<C::Output>>
where
    C: Emptiable,
    E: IntoErrorDetails,
{
    ready(sync::not_empty(value, error))
}

/// Async form of [`ensure::not_blank`](crate::ensure::not_blank).
#[inline]
pub fn not_blank<S, E>(value: S, error: E) -> Ready<Outcome<S::Output>>
where
    S: Blankable,
    E: IntoErrorDetails,
{
    ready(sync::not_blank(value, error))
}
