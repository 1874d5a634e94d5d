//! Extension traits bridging `Option` and `Result` into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{OptionExt, ResultExt};
//!
//! let found = Some(7).null_to_failed("not found");
//! assert_eq!(found.into_value(), Some(7));
//!
//! let parsed = "x1".parse::<i32>().into_outcome();
//! assert!(parsed.is_fail());
//! assert!(parsed.secure_fail_errors_details().has_exception_details());
//! ```

use crate::outcome::Outcome;
use crate::traits::{FaultMessage, IntoErrorDetails};
use crate::types::{ErrorDetails, Fault};

/// Lifts an `Option` into an [`Outcome`], treating `None` as a failure.
pub trait OptionExt<T> {
    /// Returns `Valid(value)` for `Some`, otherwise `Fail(error)`.
    fn null_to_failed<E: IntoErrorDetails>(self, error: E) -> Outcome<T>;

    /// Like [`null_to_failed`](OptionExt::null_to_failed) but builds the
    /// error only when the value is missing.
    fn null_to_failed_with<E, F>(self, error: F) -> Outcome<T>
    where
        E: IntoErrorDetails,
        F: FnOnce() -> E;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn null_to_failed<E: IntoErrorDetails>(self, error: E) -> Outcome<T> {
        match self {
            Some(value) => Outcome::Valid(value),
            None => Outcome::fail(error),
        }
    }

    #[inline]
    fn null_to_failed_with<E, F>(self, error: F) -> Outcome<T>
    where
        E: IntoErrorDetails,
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Outcome::Valid(value),
            None => Outcome::fail(error()),
        }
    }
}

/// Converts a fallible `Result` into an [`Outcome`], capturing the error as a
/// [`Fault`] under the exception key.
pub trait ResultExt<T, E> {
    /// Captures `Err` as a fault whose message becomes the error message.
    fn into_outcome(self) -> Outcome<T>;

    /// Captures `Err` as a fault with an explicit or derived message.
    fn into_outcome_with_message<M: FaultMessage>(self, message: M) -> Outcome<T>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<Fault>,
{
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Valid(value),
            Err(error) => Outcome::Fail(ErrorDetails::from_fault(error.into())),
        }
    }

    #[inline]
    fn into_outcome_with_message<M: FaultMessage>(self, message: M) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Valid(value),
            Err(error) => {
                Outcome::Fail(ErrorDetails::from_fault_with_message(error.into(), message))
            },
        }
    }
}
