use crate::types::alloc_type::Vec;
use crate::types::ErrorDetails;

use super::core::Outcome;

impl<T> Outcome<T> {
    /// Iterates over the success value (zero or one item).
    #[inline]
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        self.as_valid().into_iter()
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects outcomes into a collection, merging every failure.
///
/// Unlike `Result`'s collection, this does not stop at the first failure:
/// all payloads are merged in order so nothing is dropped.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>> = vec![Outcome::valid(1), Outcome::valid(2)].into_iter().collect();
/// assert_eq!(all.into_value(), Some(vec![1, 2]));
///
/// let mixed: Outcome<Vec<i32>> =
///     vec![Outcome::valid(1), Outcome::fail("a"), Outcome::fail("b")].into_iter().collect();
/// assert_eq!(mixed.secure_fail_errors_details().errors().len(), 2);
/// ```
impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut failure: Option<ErrorDetails> = None;

        for outcome in iter {
            match outcome {
                Outcome::Valid(value) => {
                    if failure.is_none() {
                        values.push(value);
                    }
                },
                Outcome::Fail(errors) => {
                    failure = Some(match failure {
                        Some(existing) => existing.merge(errors),
                        None => errors,
                    });
                },
            }
        }

        match failure {
            Some(errors) => Outcome::Fail(errors),
            None => Outcome::Valid(values.into_iter().collect()),
        }
    }
}
