//! Tagged values stored in the detail bag of an [`ErrorDetails`](crate::ErrorDetails).

use core::any::{type_name, Any};
use core::fmt::{self, Debug, Display};

use crate::types::alloc_type::{Arc, Cow, String};
use crate::types::fault::Fault;

/// A value attached to an error under a string key.
///
/// Keeping the bag as a closed set of variants turns typed lookups into a plain
/// variant match (see [`DetailType`]). Anything that does not fit the
/// primitive variants can still be stored as an [`OpaqueValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum DetailValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Fault(Fault),
    Opaque(OpaqueValue),
}

impl DetailValue {
    /// Wraps an arbitrary shared value.
    #[inline]
    pub fn opaque<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self::Opaque(OpaqueValue::new(value))
    }

    /// Returns `true` if the value is a captured fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// Returns the fault, if the value holds one.
    #[inline]
    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            Self::Fault(fault) => Some(fault),
            _ => None,
        }
    }

    /// Human readable name of the variant, used in lookup failures.
    pub fn type_label(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Fault(_) => "fault",
            Self::Opaque(opaque) => opaque.type_name(),
        }
    }
}

impl Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Bool(value) => write!(f, "{}", value),
            Self::Fault(fault) => write!(f, "{}", fault),
            Self::Opaque(opaque) => write!(f, "<{}>", opaque.type_name()),
        }
    }
}

/// A type-erased, shared value that does not fit the primitive variants.
///
/// Equality is identity: two opaque values are equal only when they point at
/// the same allocation.
#[derive(Clone)]
pub struct OpaqueValue {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

impl OpaqueValue {
    /// Wraps `value`, remembering its type name for diagnostics.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self { type_name: type_name::<T>(), value: Arc::new(value) }
    }

    /// Returns the Rust type name of the wrapped value.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrows the wrapped value as `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Returns a shared handle to the wrapped value as `T`.
    pub fn downcast_arc<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        Arc::clone(&self.value).downcast::<T>().ok()
    }
}

impl Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpaqueValue").field(&self.type_name).finish()
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

/// Types that can be read back out of a [`DetailValue`].
///
/// Implemented for the primitive variants and for [`Fault`]. Lookups through
/// [`ErrorDetails::get_detail`](crate::ErrorDetails::get_detail) fail with a
/// descriptive message when the stored variant does not match.
pub trait DetailType: Sized {
    /// Name used in "does not contain a value of type" messages.
    const TYPE_NAME: &'static str;

    /// Extracts an owned value when the variant matches.
    fn from_detail(value: &DetailValue) -> Option<Self>;
}

impl DetailType for String {
    const TYPE_NAME: &'static str = "text";

    fn from_detail(value: &DetailValue) -> Option<Self> {
        match value {
            DetailValue::Text(text) => Some(text.clone()),
            _ => None,
        }
    }
}

impl DetailType for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn from_detail(value: &DetailValue) -> Option<Self> {
        match value {
            DetailValue::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl DetailType for f64 {
    const TYPE_NAME: &'static str = "float";

    fn from_detail(value: &DetailValue) -> Option<Self> {
        match value {
            DetailValue::Float(value) => Some(*value),
            _ => None,
        }
    }
}

impl DetailType for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_detail(value: &DetailValue) -> Option<Self> {
        match value {
            DetailValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl DetailType for Fault {
    const TYPE_NAME: &'static str = "fault";

    fn from_detail(value: &DetailValue) -> Option<Self> {
        value.as_fault().cloned()
    }
}

impl DetailType for DetailValue {
    const TYPE_NAME: &'static str = "any";

    #[inline]
    fn from_detail(value: &DetailValue) -> Option<Self> {
        Some(value.clone())
    }
}

impl From<String> for DetailValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for DetailValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<Cow<'_, str>> for DetailValue {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

macro_rules! impl_int_detail {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DetailValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_int_detail!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_saturating_int_detail {
    ($($ty:ty),*) => {
        $(
            /// Values above `i64::MAX` saturate.
            impl From<$ty> for DetailValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

impl_saturating_int_detail!(u64, usize);

impl From<f32> for DetailValue {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for DetailValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for DetailValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Fault> for DetailValue {
    #[inline]
    fn from(fault: Fault) -> Self {
        Self::Fault(fault)
    }
}

impl From<OpaqueValue> for DetailValue {
    #[inline]
    fn from(value: OpaqueValue) -> Self {
        Self::Opaque(value)
    }
}
