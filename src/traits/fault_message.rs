//! Message sources for try-wrapping combinators.

use crate::types::alloc_type::{Cow, String};
use crate::types::Fault;

/// Produces the error message recorded next to a captured [`Fault`].
///
/// Implemented for fixed messages (`&str`, `String`) and for builders
/// `FnOnce(&Fault) -> String` that derive the message from the fault.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Fault, FaultMessage};
///
/// let fault = Fault::new("timeout");
/// assert_eq!("lookup failed".fault_message(&fault), "lookup failed");
/// assert_eq!(
///     (|f: &Fault| format!("lookup failed: {}", f)).fault_message(&fault),
///     "lookup failed: timeout"
/// );
/// ```
pub trait FaultMessage {
    fn fault_message(self, fault: &Fault) -> String;
}

impl FaultMessage for &str {
    #[inline]
    fn fault_message(self, _fault: &Fault) -> String {
        String::from(self)
    }
}

impl FaultMessage for String {
    #[inline]
    fn fault_message(self, _fault: &Fault) -> String {
        self
    }
}

impl FaultMessage for Cow<'_, str> {
    #[inline]
    fn fault_message(self, _fault: &Fault) -> String {
        self.into_owned()
    }
}

impl<F> FaultMessage for F
where
    F: FnOnce(&Fault) -> String,
{
    #[inline]
    fn fault_message(self, fault: &Fault) -> String {
        self(fault)
    }
}
