//! Trait for converting types into a structured failure payload.
//!
//! Every constructor that accepts "a message or an error payload" takes an
//! [`IntoErrorDetails`], so call sites can pass a literal, a list of messages,
//! or a fully built [`ErrorDetails`] interchangeably.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ErrorDetails, ErrorItem, IntoErrorDetails};
//!
//! let a = "simple message".into_error_details();
//! let b = vec!["first", "second"].into_error_details();
//! let c = ErrorItem::new("item").into_error_details();
//!
//! assert_eq!(a.errors().len(), 1);
//! assert_eq!(b.errors().len(), 2);
//! assert_eq!(c.to_errors_description(), "item");
//! ```
use crate::types::alloc_type::{Cow, String, Vec};
use crate::types::{Details, ErrorDetails, ErrorItem, Fault};

/// Converts a type into an [`ErrorDetails`] payload.
///
/// Implement it for domain error types to pass them straight to
/// [`Outcome::fail`](crate::Outcome::fail) or the [`ensure`](crate::ensure)
/// helpers:
///
/// ```
/// use outcome_rail::{ErrorDetails, IntoErrorDetails, Outcome};
///
/// struct MissingUser { id: u64 }
///
/// impl IntoErrorDetails for MissingUser {
///     fn into_error_details(self) -> ErrorDetails {
///         ErrorDetails::not_found("user not found").add_detail("user_id", self.id as i64)
///     }
/// }
///
/// let outcome: Outcome<()> = Outcome::fail(MissingUser { id: 7 });
/// assert!(outcome.is_not_found());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an error payload",
    label = "this type does not implement `IntoErrorDetails`",
    note = "pass a message, an `ErrorItem`, a list of either, or an `ErrorDetails`"
)]
pub trait IntoErrorDetails {
    /// Converts `self` into an [`ErrorDetails`].
    fn into_error_details(self) -> ErrorDetails;
}

impl IntoErrorDetails for ErrorDetails {
    #[inline]
    fn into_error_details(self) -> ErrorDetails {
        self
    }
}

impl IntoErrorDetails for &str {
    #[inline]
    fn into_error_details(self) -> ErrorDetails {
        ErrorDetails::from_message(self)
    }
}

impl IntoErrorDetails for String {
    #[inline]
    fn into_error_details(self) -> ErrorDetails {
        ErrorDetails::from_message(self)
    }
}

impl IntoErrorDetails for Cow<'_, str> {
    #[inline]
    fn into_error_details(self) -> ErrorDetails {
        ErrorDetails::from_message(self.into_owned())
    }
}

impl IntoErrorDetails for ErrorItem {
    #[inline]
    fn into_error_details(self) -> ErrorDetails {
        ErrorDetails::from_error(self)
    }
}

impl IntoErrorDetails for Vec<ErrorItem> {
    #[inline]
    fn into_error_details(self) -> ErrorDetails {
        ErrorDetails::from_errors(self)
    }
}

impl IntoErrorDetails for Vec<String> {
    #[inline]
    fn into_error_details(self) -> ErrorDetails {
        ErrorDetails::from_messages(self)
    }
}

impl IntoErrorDetails for Vec<&str> {
    #[inline]
    fn into_error_details(self) -> ErrorDetails {
        ErrorDetails::from_messages(self)
    }
}

impl<const N: usize> IntoErrorDetails for [&str; N] {
    #[inline]
    fn into_error_details(self) -> ErrorDetails {
        ErrorDetails::from_messages(self)
    }
}

impl IntoErrorDetails for (&str, Details) {
    #[inline]
    fn into_error_details(self) -> ErrorDetails {
        ErrorDetails::from_message_details(self.0, self.1)
    }
}

impl IntoErrorDetails for (String, Details) {
    #[inline]
    fn into_error_details(self) -> ErrorDetails {
        ErrorDetails::from_message_details(self.0, self.1)
    }
}

impl IntoErrorDetails for Fault {
    /// Records the fault under the exception key with its own message.
    #[inline]
    fn into_error_details(self) -> ErrorDetails {
        ErrorDetails::from_fault(self)
    }
}

impl From<ErrorItem> for ErrorDetails {
    #[inline]
    fn from(item: ErrorItem) -> Self {
        item.into_error_details()
    }
}

impl From<&str> for ErrorDetails {
    #[inline]
    fn from(message: &str) -> Self {
        message.into_error_details()
    }
}

impl From<String> for ErrorDetails {
    #[inline]
    fn from(message: String) -> Self {
        message.into_error_details()
    }
}
