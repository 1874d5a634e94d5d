//! Await-then-apply adapter.
//!
//! [`Lift`] turns any synchronous combinator into an asynchronous one: it
//! waits for the inner future and then applies the combinator to its output,
//! so the sync and async surfaces share one implementation.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

pin_project! {
    /// A future that applies a combinator to the output of another future.
    ///
    /// The combinator runs exactly once, after the inner future completes.
    ///
    /// # Cancel Safety
    ///
    /// `Lift` is cancel-safe if the inner future is cancel-safe; dropping it
    /// before completion never runs the combinator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::async_ext::lift;
    /// use outcome_rail::Outcome;
    ///
    /// async fn example() {
    ///     let doubled = lift(async { Outcome::valid(21) }, |o| o.map(|x| x * 2)).await;
    ///     assert_eq!(doubled.into_value(), Some(42));
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct Lift<Fut, F> {
        #[pin]
        future: Fut,
        combinator: Option<F>,
    }
}

impl<Fut, F> Lift<Fut, F> {
    /// Creates a new `Lift` from a future and the combinator to apply.
    #[inline]
    pub fn new(future: Fut, combinator: F) -> Self {
        Self { future, combinator: Some(combinator) }
    }
}

impl<Fut, F, U> Future for Lift<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> U,
{
    type Output = U;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|output| {
            let combinator = this
                .combinator
                .take()
                .expect("Lift polled after completion; this is a bug");
            combinator(output)
        })
    }
}

impl<Fut, F, U> FusedFuture for Lift<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> U,
{
    fn is_terminated(&self) -> bool {
        self.combinator.is_none()
    }
}

/// Awaits `future`, then applies `combinator` to its output.
#[inline]
pub fn lift<Fut, F, U>(future: Fut, combinator: F) -> Lift<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> U,
{
    Lift::new(future, combinator)
}
