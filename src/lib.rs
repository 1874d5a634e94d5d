//! Railway-oriented outcomes with structured, mergeable error details.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building a Pipeline
//!
//! ```
//! use outcome_rail::{ensure, Outcome, OptionExt};
//!
//! fn repo_find(pk: &str) -> Outcome<Option<String>> {
//!     Outcome::valid((pk == "42").then(|| "alice".to_string()))
//! }
//!
//! let found = ensure::not_blank("42", "pk empty")
//!     .bind(repo_find)
//!     .bind(|row| row.null_to_failed("not found"));
//! assert_eq!(found.into_value(), Some("alice".to_string()));
//!
//! let missing = ensure::not_blank("7", "pk empty")
//!     .bind(repo_find)
//!     .bind(|row| row.null_to_failed("not found"));
//! assert!(missing.is_not_found());
//! ```
//!
//! ## Capturing Faults
//!
//! ```
//! use outcome_rail::{Outcome, EXCEPTION_KEY};
//!
//! let outcome = Outcome::valid("x").try_map(|s| s.parse::<u32>());
//! let errors = outcome.secure_fail_errors_details();
//!
//! assert!(errors.has_key_details(EXCEPTION_KEY));
//! assert!(errors.get_detail_exception().is_valid());
//! ```
//!
//! ## Merging Failures
//!
//! ```
//! use outcome_rail::{details, ErrorDetails};
//!
//! let merged = ErrorDetails::from_message_details("E1", details! { "k" => "v" })
//!     .merge(ErrorDetails::from_message_details("E2", details! { "k2" => "v2" }));
//!
//! assert_eq!(merged.to_errors_description(), "\nE1\nE2\n");
//! assert_eq!(merged.to_details_description(), "\nk: v\nk2: v2\n");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Precondition helpers producing outcomes
pub mod ensure;
/// Shorthand macros for failures and detail bags
pub mod macros;
/// The `Outcome` sum type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion traits at the seams with plain Rust values
pub mod traits;
/// Error items, faults, detail values and `ErrorDetails`
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use outcome::Outcome;
pub use traits::*;
pub use types::{
    DetailType, DetailValue, Details, ErrorDetails, ErrorItem, ErrorVec, Fault, FaultKind,
    OpaqueValue, SharedError, DEFAULT_ERROR_MESSAGE, DEFAULT_FAULT_MESSAGE, EXCEPTION_KEY,
    NOT_FOUND_KEY, NOT_FOUND_SYNONYMS, VALUE_KEY,
};

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}
