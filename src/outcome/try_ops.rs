//! Try-wrapping combinators: the seam where faults become data.
//!
//! A function that returns `Err(e)` (or, with `std`, panics inside the
//! `catch_*` variants) produces a [`Outcome::Fail`] that records the fault
//! under the exception key plus an error message. Every other combinator lets
//! faults propagate as they are.

use crate::traits::FaultMessage;
use crate::types::{ErrorDetails, Fault, DEFAULT_FAULT_MESSAGE};

use super::core::Outcome;

impl<T> Outcome<T> {
    /// Like [`map`](Self::map), but an `Err` from `f` becomes a failure
    /// carrying the fault and [`DEFAULT_FAULT_MESSAGE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, DEFAULT_FAULT_MESSAGE};
    ///
    /// let parsed = Outcome::valid("12").try_map(|s| s.parse::<i32>());
    /// assert_eq!(parsed.into_value(), Some(12));
    ///
    /// let broken = Outcome::valid("x").try_map(|s| s.parse::<i32>());
    /// let errors = broken.secure_fail_errors_details();
    /// assert_eq!(errors.to_errors_description(), DEFAULT_FAULT_MESSAGE);
    /// assert!(errors.get_detail_exception_as::<std::num::ParseIntError>().is_valid());
    /// ```
    #[inline]
    pub fn try_map<U, E, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<Fault>,
    {
        self.try_map_with_message(f, DEFAULT_FAULT_MESSAGE)
    }

    /// [`try_map`](Self::try_map) with an explicit message or a message
    /// builder `|fault: &Fault| -> String`.
    pub fn try_map_with_message<U, E, F, M>(self, f: F, message: M) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<Fault>,
        M: FaultMessage,
    {
        match self {
            Self::Valid(value) => match f(value) {
                Ok(mapped) => Outcome::Valid(mapped),
                Err(error) => capture(error.into(), message),
            },
            Self::Fail(errors) => Outcome::Fail(errors),
        }
    }

    /// Like [`bind`](Self::bind), but an `Err` from `f` becomes a failure
    /// carrying the fault and [`DEFAULT_FAULT_MESSAGE`].
    #[inline]
    pub fn try_bind<U, E, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<Outcome<U>, E>,
        E: Into<Fault>,
    {
        self.try_bind_with_message(f, DEFAULT_FAULT_MESSAGE)
    }

    /// [`try_bind`](Self::try_bind) with an explicit or derived message.
    pub fn try_bind_with_message<U, E, F, M>(self, f: F, message: M) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<Outcome<U>, E>,
        E: Into<Fault>,
        M: FaultMessage,
    {
        match self {
            Self::Valid(value) => match f(value) {
                Ok(next) => next,
                Err(error) => capture(error.into(), message),
            },
            Self::Fail(errors) => Outcome::Fail(errors),
        }
    }

    /// Like [`map`](Self::map), but a panic inside `f` is caught and recorded
    /// as a [`Fault`] of kind [`Panic`](crate::FaultKind::Panic).
    ///
    /// The panic hook still runs, so the panic message is printed as usual.
    #[cfg(feature = "std")]
    #[inline]
    pub fn catch_map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        self.catch_map_with_message(f, DEFAULT_FAULT_MESSAGE)
    }

    /// [`catch_map`](Self::catch_map) with an explicit or derived message.
    #[cfg(feature = "std")]
    pub fn catch_map_with_message<U, F, M>(self, f: F, message: M) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
        M: FaultMessage,
    {
        self.catch_bind_with_message(move |value| Outcome::Valid(f(value)), message)
    }

    /// Like [`bind`](Self::bind), but a panic inside `f` is caught and
    /// recorded as a fault.
    #[cfg(feature = "std")]
    #[inline]
    pub fn catch_bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        self.catch_bind_with_message(f, DEFAULT_FAULT_MESSAGE)
    }

    /// [`catch_bind`](Self::catch_bind) with an explicit or derived message.
    #[cfg(feature = "std")]
    pub fn catch_bind_with_message<U, F, M>(self, f: F, message: M) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
        M: FaultMessage,
    {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        match self {
            Self::Valid(value) => match catch_unwind(AssertUnwindSafe(move || f(value))) {
                Ok(next) => next,
                Err(payload) => capture(Fault::from_panic(payload), message),
            },
            Self::Fail(errors) => Outcome::Fail(errors),
        }
    }
}

fn capture<U, M: FaultMessage>(fault: Fault, message: M) -> Outcome<U> {
    Outcome::Fail(ErrorDetails::from_fault_with_message(fault, message))
}
