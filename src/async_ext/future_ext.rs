//! Extension trait for `Future<Output = Outcome<T>>`.
//!
//! Mirrors the synchronous combinators on [`Outcome`] so a pipeline can keep
//! chaining after an async stage without awaiting by hand.

use core::future::Future;

use crate::outcome::Outcome;
use crate::traits::FaultMessage;
use crate::types::{ErrorDetails, Fault};

use super::lift::Lift;

/// Combinators for futures that resolve to an [`Outcome`].
///
/// Every method awaits the receiver first and only then applies the
/// corresponding synchronous combinator; stages never run concurrently.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::prelude_async::*;
///
/// async fn load(id: u32) -> Outcome<String> {
///     Outcome::valid(format!("user-{id}"))
/// }
///
/// async fn example() {
///     let name = load(7)
///         .map_valid(|name| name.to_uppercase())
///         .bind_valid(|name| ensure::not_blank(name, "empty name"))
///         .await;
///     assert_eq!(name.into_value(), Some("USER-7".to_string()));
/// }
/// ```
pub trait FutureOutcomeExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Applies an arbitrary synchronous combinator once the outcome is ready.
    fn lift<U, F>(self, combinator: F) -> Lift<Self, F>
    where
        F: FnOnce(Outcome<T>) -> U;

    /// Async counterpart of [`Outcome::map`].
    fn map_valid<U, F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        self.lift(move |outcome| outcome.map(f))
    }

    /// Async counterpart of [`Outcome::bind`] with a synchronous continuation.
    fn bind_valid<U, F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        self.lift(move |outcome| outcome.bind(f))
    }

    /// Async counterpart of [`Outcome::bind`] with an asynchronous continuation.
    ///
    /// The continuation future is only created when the receiver is valid.
    fn bind_valid_async<U, F, Next>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Next,
        Next: Future<Output = Outcome<U>>,
    {
        async move { self.await.bind_async(f).await }
    }

    /// Async counterpart of [`Outcome::try_map`].
    fn try_map_valid<U, E, F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<U>>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<Fault>,
    {
        self.lift(move |outcome| outcome.try_map(f))
    }

    /// Async counterpart of [`Outcome::try_map_with_message`].
    fn try_map_valid_with_message<U, E, F, M>(
        self,
        f: F,
        message: M,
    ) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<U>>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<Fault>,
        M: FaultMessage,
    {
        self.lift(move |outcome| outcome.try_map_with_message(f, message))
    }

    /// Async counterpart of [`Outcome::try_bind`].
    fn try_bind_valid<U, E, F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<U>>
    where
        F: FnOnce(T) -> Result<Outcome<U>, E>,
        E: Into<Fault>,
    {
        self.lift(move |outcome| outcome.try_bind(f))
    }

    /// Async counterpart of [`Outcome::match_with`].
    fn match_outcome<R, V, F>(self, valid: V, fail: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> R>
    where
        V: FnOnce(T) -> R,
        F: FnOnce(ErrorDetails) -> R,
    {
        self.lift(move |outcome| outcome.match_with(valid, fail))
    }

    /// Async counterpart of [`Outcome::map_fail`].
    fn map_fail<F>(self, f: F) -> Lift<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        F: FnOnce(ErrorDetails) -> ErrorDetails,
    {
        self.lift(move |outcome| outcome.map_fail(f))
    }

    /// Async counterpart of [`Outcome::merge_errors_details_if_fail`].
    ///
    /// `other` is awaited after the receiver.
    fn merge_errors_details_if_fail<Other>(self, other: Other) -> impl Future<Output = Outcome<T>>
    where
        Other: Future<Output = Outcome<T>>,
    {
        async move {
            let left = self.await;
            let right = other.await;
            left.merge_errors_details_if_fail(right)
        }
    }

    /// Async counterpart of
    /// [`Outcome::merge_errors_details_if_fail_different_types`].
    fn merge_errors_details_if_fail_different_types<U, Other>(
        self,
        other: Other,
    ) -> impl Future<Output = Outcome<T>>
    where
        Other: Future<Output = Outcome<U>>,
    {
        async move {
            let left = self.await;
            let right = other.await;
            left.merge_errors_details_if_fail_different_types(right)
        }
    }
}

impl<Fut, T> FutureOutcomeExt<T> for Fut
where
    Fut: Future<Output = Outcome<T>>,
{
    #[inline]
    fn lift<U, F>(self, combinator: F) -> Lift<Self, F>
    where
        F: FnOnce(Outcome<T>) -> U,
    {
        Lift::new(self, combinator)
    }
}
