//! Single, non-blank error message.

use core::fmt::{self, Display};

use crate::types::alloc_type::{Cow, String};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Message used whenever an error is created from a blank string.
pub const DEFAULT_ERROR_MESSAGE: &str = "no custom error message; see exception details";

/// An immutable error message that is never blank.
///
/// Blank input (empty or whitespace only) is replaced with
/// [`DEFAULT_ERROR_MESSAGE`], so every failure carries something readable.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ErrorItem, DEFAULT_ERROR_MESSAGE};
///
/// assert_eq!(ErrorItem::new("disk full").message(), "disk full");
/// assert_eq!(ErrorItem::new("  ").message(), DEFAULT_ERROR_MESSAGE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct ErrorItem {
    message: String,
}

impl ErrorItem {
    /// Creates an error item, normalizing blank messages to the default.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::default()
        } else {
            Self { message }
        }
    }

    /// Returns the stored message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the item and returns the owned message.
    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Default for ErrorItem {
    fn default() -> Self {
        Self { message: DEFAULT_ERROR_MESSAGE.into() }
    }
}

impl Display for ErrorItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&str> for ErrorItem {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorItem {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Cow<'_, str>> for ErrorItem {
    #[inline]
    fn from(message: Cow<'_, str>) -> Self {
        Self::new(message.into_owned())
    }
}

impl From<ErrorItem> for String {
    #[inline]
    fn from(item: ErrorItem) -> Self {
        item.message
    }
}
