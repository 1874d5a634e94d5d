//! Captured faults: errors or panics converted into plain data.
//!
//! A [`Fault`] is what the try-wrapping combinators store under the reserved
//! exception key. It keeps a rendered message, the kind of fault, and (for
//! returned errors) the original error behind an [`Arc`] so the whole
//! [`ErrorDetails`](crate::ErrorDetails) stays cheaply cloneable.

use core::any::Any;
use core::error::Error;
use core::fmt::{self, Debug, Display};

use crate::types::alloc_type::{Arc, Box, String};

/// Message recorded when a try-wrapped function fails and the caller supplied
/// no message of their own.
pub const DEFAULT_FAULT_MESSAGE: &str =
    "an error occurred while executing the function; see exception details";

/// Shared, type-erased error stored inside a [`Fault`].
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// How a [`Fault`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// A function returned `Err`.
    Error,
    /// A function panicked and the panic was caught.
    Panic,
}

/// A fault captured at a try-wrapping seam.
///
/// `Fault` intentionally does not implement [`core::error::Error`] so that any
/// error type converts into it through `From`/`?`. The original error stays
/// reachable through [`Fault::source_error`] and [`Fault::downcast_ref`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{Fault, FaultKind};
///
/// let parse_err = "abc".parse::<i32>().unwrap_err();
/// let fault = Fault::from(parse_err.clone());
///
/// assert_eq!(fault.kind(), FaultKind::Error);
/// assert_eq!(fault.message(), parse_err.to_string());
/// assert_eq!(fault.downcast_ref::<std::num::ParseIntError>(), Some(&parse_err));
/// ```
#[derive(Clone)]
pub struct Fault {
    message: String,
    kind: FaultKind,
    source: Option<SharedError>,
}

impl Fault {
    /// Creates an error fault carrying only a message.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into(), kind: FaultKind::Error, source: None }
    }

    /// Wraps a concrete error, keeping it for later downcasting.
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            message: alloc::format!("{}", error),
            kind: FaultKind::Error,
            source: Some(Arc::new(error)),
        }
    }

    /// Wraps an already boxed error.
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self {
            message: alloc::format!("{}", error),
            kind: FaultKind::Error,
            source: Some(Arc::from(error)),
        }
    }

    /// Builds a fault from a caught panic payload.
    ///
    /// `&str` and `String` payloads (what `panic!` produces) keep their text;
    /// anything else is reported as an opaque panic.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            String::from(*text)
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            String::from("panic with a non-string payload")
        };
        Self { message, kind: FaultKind::Panic, source: None }
    }

    /// Returns the rendered fault message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns how this fault was produced.
    #[inline]
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    /// Returns `true` if the fault came from a caught panic.
    #[inline]
    pub fn is_panic(&self) -> bool {
        self.kind == FaultKind::Panic
    }

    /// Returns the original error, if one was captured.
    #[inline]
    pub fn source_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Attempts to view the captured error as a concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.source.as_deref().and_then(|err| {
            let err: &(dyn Error + 'static) = err;
            err.downcast_ref::<E>()
        })
    }

    /// Returns `true` if both faults share the same captured error instance.
    pub fn same_source(&self, other: &Fault) -> bool {
        match (&self.source, &other.source) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<E> From<E> for Fault
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::from_error(error)
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FaultKind::Error => f.write_str(&self.message),
            FaultKind::Panic => write!(f, "panic: {}", self.message),
        }
    }
}

impl Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("message", &self.message)
            .field("kind", &self.kind)
            .field("has_source", &self.source.is_some())
            .finish()
    }
}

impl PartialEq for Fault {
    /// Faults compare by message and kind; captured sources are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}
