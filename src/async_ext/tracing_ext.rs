//! Tracing integration.
//!
//! The core never logs on its own. These adapters let the logging side of a
//! pipeline report a failure as a tracing event, or record the active span
//! on the failure payload.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::outcome::Outcome;
use crate::types::ErrorDetails;

/// Detail key holding the name of the span a failure happened in.
pub const SPAN_KEY: &str = "span";

/// Tracing helpers for [`Outcome`].
pub trait OutcomeTraceExt<T>: Sized {
    /// Emits a `WARN` event describing the failure, if any, and passes the
    /// outcome on unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use outcome_rail::async_ext::OutcomeTraceExt;
    ///
    /// let user = repository.find(pk).trace_fail("load user");
    /// ```
    fn trace_fail(self, operation: &str) -> Self;

    /// Records the current span's name under [`SPAN_KEY`] on failure.
    fn with_span_details(self) -> Self {
        self.with_span(&Span::current())
    }

    /// Records the given span's name under [`SPAN_KEY`] on failure.
    fn with_span(self, span: &Span) -> Self;
}

impl<T> OutcomeTraceExt<T> for Outcome<T> {
    fn trace_fail(self, operation: &str) -> Self {
        if let Outcome::Fail(errors) = &self {
            tracing::warn!(
                operation = operation,
                errors = %errors.to_errors_description(),
                details = %errors.to_details_description(),
                not_found = errors.is_not_found(),
                "operation failed"
            );
        }
        self
    }

    fn with_span(self, span: &Span) -> Self {
        self.map_fail(|errors| attach_span(errors, span))
    }
}

/// Extension trait for futures that records the span on failure.
pub trait FutureSpanExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Records the span current at call time once the future fails.
    fn with_span_details(self) -> SpanDetailsFuture<Self> {
        SpanDetailsFuture { inner: self, span: Span::current() }
    }

    /// Records the given span once the future fails.
    fn with_span(self, span: Span) -> SpanDetailsFuture<Self> {
        SpanDetailsFuture { inner: self, span }
    }
}

impl<F, T> FutureSpanExt<T> for F where F: Future<Output = Outcome<T>> {}

pin_project! {
    /// Future wrapper that records span details on failure.
    ///
    /// Created by [`FutureSpanExt::with_span_details`] or [`FutureSpanExt::with_span`].
    #[must_use = "futures do nothing unless polled"]
    pub struct SpanDetailsFuture<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

impl<F, T> Future for SpanDetailsFuture<F>
where
    F: Future<Output = Outcome<T>>,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(outcome) => {
                let span = &*this.span;
                Poll::Ready(outcome.map_fail(|errors| attach_span(errors, span)))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Name of the span, or `"unknown"` when the span is disabled.
fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}

fn attach_span(errors: ErrorDetails, span: &Span) -> ErrorDetails {
    errors.add_detail(SPAN_KEY, span_name(span))
}
