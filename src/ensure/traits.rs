//! Emptiness and blankness checks used by [`not_empty`](super::not_empty) and
//! [`not_blank`](super::not_blank).
//!
//! Both traits consume the value and hand it back only when it passes, so an
//! `Option<Vec<T>>` narrows to a `Vec<T>` in one step.

use alloc::collections::{BTreeMap, BTreeSet, VecDeque};

use smallvec::{Array, SmallVec};

use crate::types::alloc_type::{Cow, String, Vec};
use crate::types::Details;

/// Collections that can be checked for "null or zero elements".
pub trait Emptiable {
    /// What a non-empty value narrows to.
    type Output;

    /// Returns the value when it holds at least one element.
    fn into_non_empty(self) -> Option<Self::Output>;
}

macro_rules! impl_emptiable {
    ($(impl[$($gen:tt)*] $ty:ty;)*) => {
        $(
            impl<$($gen)*> Emptiable for $ty {
                type Output = Self;

                #[inline]
                fn into_non_empty(self) -> Option<Self> {
                    if self.is_empty() { None } else { Some(self) }
                }
            }
        )*
    };
}

impl_emptiable! {
    impl[T] Vec<T>;
    impl['a, T] &'a [T];
    impl['a, T] &'a Vec<T>;
    impl[T] VecDeque<T>;
    impl[K, V] BTreeMap<K, V>;
    impl[T] BTreeSet<T>;
    impl[] String;
    impl['a] &'a str;
    impl[] Details;
    impl[A: Array] SmallVec<A>;
}

#[cfg(feature = "std")]
impl_emptiable! {
    impl[K, V, S] std::collections::HashMap<K, V, S>;
    impl[T, S] std::collections::HashSet<T, S>;
}

impl<T, const N: usize> Emptiable for [T; N] {
    type Output = Self;

    #[inline]
    fn into_non_empty(self) -> Option<Self> {
        if N == 0 {
            None
        } else {
            Some(self)
        }
    }
}

impl<C: Emptiable> Emptiable for Option<C> {
    type Output = C::Output;

    /// `None` counts as empty.
    #[inline]
    fn into_non_empty(self) -> Option<C::Output> {
        self.and_then(Emptiable::into_non_empty)
    }
}

/// Text that can be checked for "null, empty, or whitespace only".
pub trait Blankable {
    /// What non-blank text narrows to.
    type Output;

    /// Returns the text when it contains a non-whitespace character.
    fn into_non_blank(self) -> Option<Self::Output>;
}

macro_rules! impl_blankable {
    ($(impl[$($gen:tt)*] $ty:ty;)*) => {
        $(
            impl<$($gen)*> Blankable for $ty {
                type Output = Self;

                #[inline]
                fn into_non_blank(self) -> Option<Self> {
                    if self.trim().is_empty() { None } else { Some(self) }
                }
            }
        )*
    };
}

impl_blankable! {
    impl['a] &'a str;
    impl[] String;
    impl['a] &'a String;
    impl['a] Cow<'a, str>;
}

impl<S: Blankable> Blankable for Option<S> {
    type Output = S::Output;

    /// `None` counts as blank.
    #[inline]
    fn into_non_blank(self) -> Option<S::Output> {
        self.and_then(Blankable::into_non_blank)
    }
}
