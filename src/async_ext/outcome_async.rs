//! Async continuations on an already available [`Outcome`].

use core::future::{ready, Future, Ready};

use crate::outcome::Outcome;
use crate::types::Fault;

impl<T> Outcome<T> {
    /// Wraps the outcome in an already completed future.
    ///
    /// Lets a synchronous stage start a chain of
    /// [`FutureOutcomeExt`](super::FutureOutcomeExt) combinators.
    #[inline]
    pub fn into_ready(self) -> Ready<Self> {
        ready(self)
    }

    /// Sequences an asynchronous stage; `f` is only called when valid.
    ///
    /// ```rust
    /// use outcome_rail::Outcome;
    ///
    /// async fn fetch(id: u32) -> Outcome<String> {
    ///     Outcome::valid(format!("row {id}"))
    /// }
    ///
    /// async fn example() {
    ///     let row = Outcome::valid(3).bind_async(fetch).await;
    ///     assert_eq!(row.into_value(), Some("row 3".to_string()));
    /// }
    /// ```
    pub async fn bind_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self {
            Self::Valid(value) => f(value).await,
            Self::Fail(errors) => Outcome::Fail(errors),
        }
    }

    /// Maps the success value through an asynchronous function.
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Valid(value) => Outcome::Valid(f(value).await),
            Self::Fail(errors) => Outcome::Fail(errors),
        }
    }

    /// Async counterpart of [`try_map`](Self::try_map): an `Err` resolved by
    /// `f` is captured as a fault.
    pub async fn try_map_async<U, E, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
        E: Into<Fault>,
    {
        match self {
            Self::Valid(value) => {
                let result = f(value).await;
                Outcome::Valid(()).try_map(move |()| result)
            },
            Self::Fail(errors) => Outcome::Fail(errors),
        }
    }

    /// Async counterpart of [`try_bind`](Self::try_bind).
    pub async fn try_bind_async<U, E, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<Outcome<U>, E>>,
        E: Into<Fault>,
    {
        match self {
            Self::Valid(value) => {
                let result = f(value).await;
                Outcome::Valid(()).try_bind(move |()| result)
            },
            Self::Fail(errors) => Outcome::Fail(errors),
        }
    }
}
