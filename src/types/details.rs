//! Insertion-ordered, key-unique detail map.

use core::slice;

use smallvec::SmallVec;

use crate::types::alloc_type::String;
use crate::types::detail_value::DetailValue;

/// Insertion-ordered map from string keys to [`DetailValue`]s.
///
/// Detail bags are small, so entries live in a `SmallVec` and lookups are
/// linear. Inserting an existing key overwrites the value in place and keeps
/// the key's original position (last writer wins).
///
/// # Examples
///
/// ```
/// use outcome_rail::Details;
///
/// let details = Details::new()
///     .with("user", "alice")
///     .with("attempts", 3)
///     .with("user", "bob");
///
/// let keys: Vec<&str> = details.keys().collect();
/// assert_eq!(keys, ["user", "attempts"]);
/// assert_eq!(details.get("user").map(|v| v.to_string()), Some("bob".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Details {
    entries: SmallVec<[(String, DetailValue); 2]>,
}

impl Details {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self { entries: SmallVec::new() }
    }

    /// Builder form of [`Details::insert`].
    #[inline]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<DetailValue>,
    {
        self.insert(key, value);
        self
    }

    /// Inserts or overwrites a value, returning the previous one.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<DetailValue>
    where
        K: Into<String>,
        V: Into<DetailValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => Some(core::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            },
        }
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<DetailValue> {
        self.position(key).map(|index| self.entries.remove(index).1)
    }

    /// Returns the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&DetailValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.entries.iter() }
    }

    /// Iterates over keys in insertion order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over values in insertion order.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &DetailValue> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Keeps only the entries for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &DetailValue) -> bool,
    {
        self.entries.retain(|(key, value)| keep(key, value));
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == key)
    }
}

/// Borrowing iterator over a [`Details`] map.
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, DetailValue)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a DetailValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Details {
    type Item = (&'a str, &'a DetailValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Details {
    type Item = (String, DetailValue);
    type IntoIter = smallvec::IntoIter<[(String, DetailValue); 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> Extend<(K, V)> for Details
where
    K: Into<String>,
    V: Into<DetailValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Details
where
    K: Into<String>,
    V: Into<DetailValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut details = Self::new();
        details.extend(iter);
        details
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Details
where
    K: Into<String>,
    V: Into<DetailValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
