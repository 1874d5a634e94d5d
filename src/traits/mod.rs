//! Conversion traits at the seams between plain Rust values and [`Outcome`](crate::Outcome).
//!
//! - [`IntoErrorDetails`]: anything usable as a failure payload
//! - [`FaultMessage`]: fixed or derived messages for captured faults
//! - [`OptionExt`] / [`ResultExt`]: lift `Option` and `Result` into an outcome
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoErrorDetails, OptionExt};
//!
//! let details = "name is required".into_error_details();
//! assert_eq!(details.to_errors_description(), "name is required");
//!
//! let missing: Option<u32> = None;
//! assert!(missing.null_to_failed(details).is_fail());
//! ```

pub mod fault_message;
pub mod into_error_details;
pub mod result_ext;

pub use fault_message::FaultMessage;
pub use into_error_details::IntoErrorDetails;
pub use result_ext::{OptionExt, ResultExt};
