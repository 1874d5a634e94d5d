//! Tokio-specific async extensions.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async-tokio"] }
//! ```

use core::future::Future;
use core::time::Duration;

use crate::outcome::Outcome;
use crate::types::{ErrorDetails, Fault};

/// Detail key recording the elapsed budget, in milliseconds.
pub const TIMEOUT_KEY: &str = "timeout_ms";

/// Runs `future` with a time budget.
///
/// If the budget elapses first, the result is a failure carrying the timer
/// error as a fault and the budget under [`TIMEOUT_KEY`]. The inner future is
/// dropped at that point; anything it would have produced is lost.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use outcome_rail::async_ext::with_timeout;
/// use outcome_rail::Outcome;
///
/// #[tokio::main]
/// async fn main() {
///     let outcome = with_timeout(Duration::from_millis(10), std::future::pending::<Outcome<u8>>()).await;
///     assert!(outcome.secure_fail_errors_details().has_key_details("timeout_ms"));
/// }
/// ```
pub async fn with_timeout<Fut, T>(duration: Duration, future: Fut) -> Outcome<T>
where
    Fut: Future<Output = Outcome<T>>,
{
    match tokio::time::timeout(duration, future).await {
        Ok(outcome) => outcome,
        Err(elapsed) => {
            let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
            let message = alloc::format!("operation timed out after {} ms", millis);
            Outcome::Fail(
                ErrorDetails::from_fault_with_message(Fault::from(elapsed), message)
                    .add_detail(TIMEOUT_KEY, millis),
            )
        },
    }
}
