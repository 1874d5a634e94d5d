//! Structured failure payload: ordered error messages plus a keyed detail bag.
//!
//! [`ErrorDetails`] is what every [`Outcome::Fail`](crate::Outcome::Fail)
//! carries. All `add_*` and `merge` operations consume `self` and hand back
//! the updated value, so a payload is never mutated behind a caller's back.

use core::any::Any;
use core::error::Error;

use crate::outcome::Outcome;
use crate::traits::FaultMessage;
use crate::types::alloc_type::{Arc, String, Vec};
use crate::types::detail_value::{DetailType, DetailValue};
use crate::types::details::Details;
use crate::types::error_item::ErrorItem;
use crate::types::fault::Fault;
use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::Serialize;

mod merge;
mod render;

pub(crate) use merge::exception_key;

/// Reserved key holding the attempted value. At most one entry exists.
pub const VALUE_KEY: &str = "Value";

/// Reserved base key for captured faults. Later faults use `"Exception2"`,
/// `"Exception3"`, and so on.
pub const EXCEPTION_KEY: &str = "Exception";

/// Conventional key marking a "not found" failure.
pub const NOT_FOUND_KEY: &str = "NotFound";

/// Case-insensitive fragments that mark rendered error text as "not found".
pub const NOT_FOUND_SYNONYMS: &[&str] = &[
    "notfound",
    "not found",
    "no encontrado",
    "não encontrado",
    "nao encontrado",
    "introuvable",
    "nicht gefunden",
];

/// Ordered error messages plus an insertion-ordered detail bag.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Details, ErrorDetails};
///
/// let left = ErrorDetails::from_message_details("E1", Details::from([("k", "v")]));
/// let right = ErrorDetails::from_message_details("E2", Details::from([("k2", "v2")]));
/// let merged = left.merge(right);
///
/// let messages: Vec<&str> = merged.error_messages().collect();
/// assert_eq!(messages, ["E1", "E2"]);
/// let keys: Vec<&str> = merged.details().keys().collect();
/// assert_eq!(keys, ["k", "k2"]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorDetails {
    errors: ErrorVec<ErrorItem>,
    details: Details,
}

impl ErrorDetails {
    /// Creates an empty payload with no errors and no details.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_message<S: Into<String>>(message: S) -> Self {
        Self::from_error(ErrorItem::new(message))
    }

    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_errors(messages.into_iter().map(ErrorItem::new))
    }

    #[inline]
    pub fn from_error(error: ErrorItem) -> Self {
        let mut errors = ErrorVec::new();
        errors.push(error);
        Self { errors, details: Details::new() }
    }

    #[inline]
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = ErrorItem>,
    {
        Self { errors: errors.into_iter().collect(), details: Details::new() }
    }

    #[inline]
    pub fn from_message_details<S: Into<String>>(message: S, details: Details) -> Self {
        Self { details, ..Self::from_message(message) }
    }

    pub fn from_messages_details<I, S>(messages: I, details: Details) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { details, ..Self::from_messages(messages) }
    }

    #[inline]
    pub fn from_error_details(error: ErrorItem, details: Details) -> Self {
        Self { details, ..Self::from_error(error) }
    }

    pub fn from_errors_details<I>(errors: I, details: Details) -> Self
    where
        I: IntoIterator<Item = ErrorItem>,
    {
        Self { details, ..Self::from_errors(errors) }
    }

    /// Builds a payload for a captured fault, using the fault's own message.
    #[inline]
    pub fn from_fault(fault: Fault) -> Self {
        Self::new().append_ex_error_detail(fault)
    }

    /// Builds a payload for a captured fault with an explicit or derived message.
    #[inline]
    pub fn from_fault_with_message<M: FaultMessage>(fault: Fault, message: M) -> Self {
        Self::new().append_ex_error_detail_with(fault, message)
    }

    /// Builds a "not found" failure tagged with [`NOT_FOUND_KEY`].
    ///
    /// ```
    /// use outcome_rail::ErrorDetails;
    ///
    /// assert!(ErrorDetails::not_found("user 42").is_not_found());
    /// ```
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::from_message(message).add_detail(NOT_FOUND_KEY, true)
    }

    /// Returns the error items in order.
    #[inline]
    pub fn errors(&self) -> &[ErrorItem] {
        &self.errors
    }

    /// Iterates over the error messages in order.
    #[inline]
    pub fn error_messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.errors.iter().map(ErrorItem::message)
    }

    /// Returns the detail bag.
    #[inline]
    pub fn details(&self) -> &Details {
        &self.details
    }

    /// Returns `true` when there are neither errors nor details.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.details.is_empty()
    }

    /// Splits the payload into its error list and detail bag.
    pub fn into_parts(self) -> (Vec<ErrorItem>, Details) {
        (self.errors.into_vec(), self.details)
    }

    /// Appends one error.
    pub fn add_error<E: Into<ErrorItem>>(mut self, error: E) -> Self {
        self.errors.push(error.into());
        self
    }

    /// Appends many errors, keeping their order.
    pub fn add_errors<I, E>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<ErrorItem>,
    {
        self.errors.extend(errors.into_iter().map(Into::into));
        self
    }

    /// Inserts or overwrites a keyed detail.
    pub fn add_detail<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<DetailValue>,
    {
        self.details.insert(key, value);
        self
    }

    /// Inserts or overwrites many keyed details.
    pub fn add_details<I, K, V>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DetailValue>,
    {
        self.details.extend(details);
        self
    }

    /// Replaces the attempted value stored under [`VALUE_KEY`].
    ///
    /// The previous entry is removed before the new one is appended, so the
    /// bag never holds more than one value entry.
    pub fn add_detail_value<V: Into<DetailValue>>(mut self, value: V) -> Self {
        self.details.remove(VALUE_KEY);
        self.details.insert(VALUE_KEY, value);
        self
    }

    /// Looks up a keyed detail as `T`.
    ///
    /// Fails when the key is absent or holds a different variant.
    ///
    /// ```
    /// use outcome_rail::ErrorDetails;
    ///
    /// let details = ErrorDetails::from_message("bad input").add_detail("attempts", 3);
    /// assert_eq!(details.get_detail::<i64>("attempts").into_value(), Some(3));
    /// assert!(details.get_detail::<bool>("attempts").is_fail());
    /// assert!(details.get_detail::<i64>("missing").is_fail());
    /// ```
    pub fn get_detail<T: DetailType>(&self, key: &str) -> Outcome<T> {
        match self.details.get(key) {
            None => Outcome::fail(missing_key(key)),
            Some(value) => match T::from_detail(value) {
                Some(typed) => Outcome::Valid(typed),
                None => Outcome::fail(wrong_type(key, T::TYPE_NAME)),
            },
        }
    }

    /// Looks up an opaque detail, sharing the stored allocation.
    pub fn get_detail_any<T>(&self, key: &str) -> Outcome<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        match self.details.get(key) {
            None => Outcome::fail(missing_key(key)),
            Some(DetailValue::Opaque(opaque)) => match opaque.downcast_arc::<T>() {
                Some(value) => Outcome::Valid(value),
                None => Outcome::fail(wrong_type(key, core::any::type_name::<T>())),
            },
            Some(_) => Outcome::fail(wrong_type(key, core::any::type_name::<T>())),
        }
    }

    /// Looks up the attempted value stored under [`VALUE_KEY`].
    #[inline]
    pub fn get_detail_value<T: DetailType>(&self) -> Outcome<T> {
        self.get_detail(VALUE_KEY)
    }

    /// Returns the first captured fault, stored under [`EXCEPTION_KEY`].
    #[inline]
    pub fn get_detail_exception(&self) -> Outcome<Fault> {
        self.get_detail(EXCEPTION_KEY)
    }

    /// Returns the first captured fault's source error as a concrete type.
    pub fn get_detail_exception_as<E>(&self) -> Outcome<E>
    where
        E: Error + Clone + 'static,
    {
        self.get_detail_exception().bind(|fault| match fault.downcast_ref::<E>() {
            Some(error) => Outcome::Valid(error.clone()),
            None => Outcome::fail(wrong_type(EXCEPTION_KEY, core::any::type_name::<E>())),
        })
    }

    /// Returns every captured fault in key order.
    pub fn faults(&self) -> impl Iterator<Item = &Fault> + '_ {
        self.details.values().filter_map(DetailValue::as_fault)
    }

    #[inline]
    pub fn has_value_details(&self) -> bool {
        self.details.contains_key(VALUE_KEY)
    }

    #[inline]
    pub fn has_exception_details(&self) -> bool {
        self.details.values().any(DetailValue::is_fault)
    }

    #[inline]
    pub fn has_key_details(&self, key: &str) -> bool {
        self.details.contains_key(key)
    }

    /// Returns a copy of the detail bag with `fault` under the next free
    /// exception key: the bare base key when no fault is recorded yet,
    /// otherwise the base key suffixed with the new fault count.
    pub fn append_ex_details(&self, fault: Fault) -> Details {
        let mut details = self.details.clone();
        let recorded = details.values().filter(|value| value.is_fault()).count();
        let mut slot = recorded;
        let mut key = exception_key(slot);
        while details.contains_key(&key) {
            slot += 1;
            key = exception_key(slot);
        }
        details.insert(key, fault);
        details
    }

    /// Records a fault together with an error derived from its message.
    pub fn append_ex_error_detail(self, fault: Fault) -> Self {
        let message = String::from(fault.message());
        self.append_ex_error_detail_with(fault, message)
    }

    /// Records a fault together with an explicit or derived error message.
    pub fn append_ex_error_detail_with<M: FaultMessage>(self, fault: Fault, message: M) -> Self {
        let message = message.fault_message(&fault);
        let details = self.append_ex_details(fault);
        Self { details, ..self.add_error(message) }
    }

    /// Returns `true` when this payload follows the not-found convention.
    ///
    /// Either the [`NOT_FOUND_KEY`] detail is present or the rendered errors
    /// contain one of [`NOT_FOUND_SYNONYMS`], ignoring case.
    pub fn is_not_found(&self) -> bool {
        if self.has_key_details(NOT_FOUND_KEY) {
            return true;
        }
        let text = self.to_errors_description().to_lowercase();
        NOT_FOUND_SYNONYMS.iter().any(|synonym| text.contains(synonym))
    }
}

fn missing_key(key: &str) -> String {
    alloc::format!("the key '{}' does not exist", key)
}

fn wrong_type(key: &str, type_name: &str) -> String {
    alloc::format!("the key '{}' does not contain a value of type {}", key, type_name)
}
