//! Shorthand macros for building failures and detail bags.
//!
//! - [`macro@crate::fail`] - Builds an [`Outcome::Fail`](crate::Outcome::Fail)
//!   from a formatted message.
//! - [`macro@crate::details`] - Builds a [`Details`](crate::Details) map from
//!   `key => value` pairs, keeping their order.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{details, fail, ErrorDetails, Outcome};
//!
//! fn load(id: u32) -> Outcome<String> {
//!     fail!("record {} not found", id)
//! }
//!
//! let errors = load(7).secure_fail_errors_details();
//! assert_eq!(errors.to_errors_description(), "record 7 not found");
//!
//! let extra = details! { "table" => "users", "id" => 7 };
//! let enriched = ErrorDetails::from_message_details("lookup failed", extra);
//! assert!(enriched.has_key_details("table"));
//! ```

/// Creates an [`Outcome::Fail`](crate::Outcome::Fail) from `format!`-style
/// arguments.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Outcome};
///
/// let outcome: Outcome<()> = fail!("quota exceeded for {}", "alice");
/// assert!(outcome.is_fail());
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Outcome::fail($crate::__private::format!($($arg)*))
    };
}

/// Creates a [`Details`](crate::Details) map from `key => value` pairs.
///
/// Keys convert with `Into<String>` and values with
/// [`Into<DetailValue>`](crate::DetailValue). Repeated keys keep their first
/// position and take the last value.
///
/// # Examples
///
/// ```
/// use outcome_rail::details;
///
/// let details = details! { "user" => "alice", "attempts" => 3, "locked" => true };
/// assert_eq!(details.len(), 3);
///
/// let empty = details! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! details {
    () => {
        $crate::Details::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut details = $crate::Details::new();
        $(
            details.insert($key, $value);
        )+
        details
    }};
}
