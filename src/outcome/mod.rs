//! The [`Outcome`] sum type and its combinators.
//!
//! This module provides:
//!
//! - [`Outcome`] - `Valid(T)` or `Fail(ErrorDetails)`
//! - `map` / `bind` / `match_with` - the sequencing surface
//! - `try_map` / `try_bind` / `catch_map` / `catch_bind` - fault capture
//! - `merge_errors_details_if_fail` - combining parallel failures
//! - Iterator support, including collecting many outcomes into one
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ensure, Outcome};
//!
//! fn find_user(pk: &str) -> Outcome<Option<String>> {
//!     Outcome::valid(Some(format!("user-{pk}")))
//! }
//!
//! let user = ensure::not_blank("42", "pk empty")
//!     .bind(find_user)
//!     .bind(|found| found.map(Outcome::valid).unwrap_or_else(|| Outcome::fail("not found")));
//!
//! assert_eq!(user.into_value(), Some("user-42".to_string()));
//! ```
pub mod core;
pub mod iter;
pub mod try_ops;

pub use self::core::*;
