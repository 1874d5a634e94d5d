//! Precondition helpers that turn a check into an [`Outcome`].
//!
//! Every helper takes the error as anything implementing
//! [`IntoErrorDetails`], so a plain message and a prepared [`ErrorDetails`](crate::ErrorDetails)
//! are accepted alike. Asynchronous counterparts live in
//! [`async_ext::ensure`](crate::async_ext::ensure) (requires `async`).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::ensure;
//!
//! let missing: Option<&str> = None;
//! let outcome = ensure::not_null(missing, "cannot be null");
//! let errors = outcome.secure_fail_errors_details();
//!
//! assert_eq!(errors.to_errors_description(), "cannot be null");
//! assert!(errors.details().is_empty());
//! ```

use crate::outcome::Outcome;
use crate::traits::IntoErrorDetails;

pub mod traits;

pub use traits::{Blankable, Emptiable};

/// Keeps `value` when `predicate` holds, otherwise fails with `error`.
///
/// The other helpers are specializations of this check.
///
/// ```
/// use outcome_rail::ensure;
///
/// let age = 17;
/// assert!(ensure::that(age, age >= 18, "must be an adult").is_fail());
/// ```
#[inline]
pub fn that<T, E>(value: T, predicate: bool, error: E) -> Outcome<T>
where
    E: IntoErrorDetails,
{
    if predicate {
        Outcome::Valid(value)
    } else {
        Outcome::fail(error)
    }
}

/// Like [`that`], but the error is only built when the check fails.
#[inline]
pub fn that_with<T, E, F>(value: T, predicate: bool, error: F) -> Outcome<T>
where
    E: IntoErrorDetails,
    F: FnOnce() -> E,
{
    if predicate {
        Outcome::Valid(value)
    } else {
        Outcome::fail(error())
    }
}

/// Like [`that`], with the predicate evaluated against the value.
///
/// ```
/// use outcome_rail::ensure;
///
/// let port = ensure::that_by(8080_u16, |p| *p >= 1024, "privileged port");
/// assert_eq!(port.into_value(), Some(8080));
/// ```
#[inline]
pub fn that_by<T, P, E>(value: T, predicate: P, error: E) -> Outcome<T>
where
    P: FnOnce(&T) -> bool,
    E: IntoErrorDetails,
{
    let holds = predicate(&value);
    that(value, holds, error)
}

/// Fails when `value` is `None`.
#[inline]
pub fn not_null<T, E>(value: Option<T>, error: E) -> Outcome<T>
where
    E: IntoErrorDetails,
{
    narrow(value, error)
}

/// Fails when `value` is `None` or has no elements.
///
/// ```
/// use outcome_rail::ensure;
///
/// assert!(ensure::not_empty(Vec::<u8>::new(), "no items").is_fail());
/// assert!(ensure::not_empty(None::<Vec<u8>>, "no items").is_fail());
/// assert_eq!(ensure::not_empty(Some(vec![1]), "no items").into_value(), Some(vec![1]));
/// ```
#[inline]
pub fn not_empty<C, E>(value: C, error: E) -> Outcome<C::Output>
where
    C: Emptiable,
    E: IntoErrorDetails,
{
    narrow(value.into_non_empty(), error)
}

/// Fails when `value` is `None`, empty, or whitespace only.
///
/// ```
/// use outcome_rail::ensure;
///
/// assert!(ensure::not_blank(" \t", "name required").is_fail());
/// assert_eq!(ensure::not_blank("ada", "name required").into_value(), Some("ada"));
/// ```
#[inline]
pub fn not_blank<S, E>(value: S, error: E) -> Outcome<S::Output>
where
    S: Blankable,
    E: IntoErrorDetails,
{
    narrow(value.into_non_blank(), error)
}

fn narrow<T, E>(candidate: Option<T>, error: E) -> Outcome<T>
where
    E: IntoErrorDetails,
{
    match candidate {
        Some(value) => that(value, true, error),
        None => Outcome::fail(error),
    }
}
