//! Data model for failures.
//!
//! - [`ErrorItem`]: a single non-blank message
//! - [`Fault`]: an error or panic captured as data
//! - [`DetailValue`] / [`Details`]: the keyed detail bag
//! - [`ErrorDetails`]: errors plus details, with merge and rendering
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ErrorDetails, Fault};
//!
//! let details = ErrorDetails::from_message("could not load profile")
//!     .add_detail("user_id", 42)
//!     .add_detail_value("alice")
//!     .append_ex_error_detail(Fault::new("connection reset"));
//!
//! assert_eq!(details.errors().len(), 2);
//! assert!(details.has_value_details());
//! assert!(details.has_exception_details());
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod detail_value;
pub mod details;
pub mod error_details;
pub mod error_item;
pub mod fault;
#[cfg(feature = "serde")]
mod serialize;

pub use detail_value::{DetailType, DetailValue, OpaqueValue};
pub use details::Details;
pub use error_details::{
    ErrorDetails, EXCEPTION_KEY, NOT_FOUND_KEY, NOT_FOUND_SYNONYMS, VALUE_KEY,
};
pub use error_item::{ErrorItem, DEFAULT_ERROR_MESSAGE};
pub use fault::{Fault, FaultKind, SharedError, DEFAULT_FAULT_MESSAGE};

/// SmallVec-backed collection used for error lists.
///
/// Most failures carry one or two messages, so these stay inline.
pub type ErrorVec<E> = SmallVec<[E; 2]>;
