//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`], [`details!`]
//! - **Types**: [`Outcome`], [`ErrorDetails`], [`ErrorItem`], [`Details`], [`DetailValue`], [`Fault`]
//! - **Traits**: [`IntoErrorDetails`], [`FaultMessage`], [`OptionExt`], [`ResultExt`]
//! - **Modules**: [`ensure`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(raw: Option<&str>) -> Outcome<u16> {
//!     ensure::not_blank(raw, "port is required")
//!         .try_map(|text| text.trim().parse::<u16>())
//!         .bind(|port| ensure::that(port, port >= 1024, "privileged port"))
//! }
//!
//! assert_eq!(parse_port(Some("8080")).into_value(), Some(8080));
//! assert!(parse_port(Some("80")).is_fail());
//! assert!(parse_port(None).is_fail());
//! ```

// Macros
pub use crate::{details, fail};

// Core types
pub use crate::outcome::Outcome;
pub use crate::types::{DetailValue, Details, ErrorDetails, ErrorItem, Fault};

// Traits
pub use crate::traits::{FaultMessage, IntoErrorDetails, OptionExt, ResultExt};

// Precondition helpers
pub use crate::ensure;
