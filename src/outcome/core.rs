use crate::traits::IntoErrorDetails;
use crate::types::{ErrorDetails, ErrorItem};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Railway-oriented result: either a success value or a structured failure.
///
/// `Outcome<T>` is the value every pipeline stage produces and consumes.
/// Combinators never mutate an outcome; they consume it and return a new one.
///
/// # Type Parameters
///
/// * `T` - The success value type
///
/// # Variants
///
/// * `Valid(T)` - Contains a successful value
/// * `Fail(ErrorDetails)` - Contains the failure payload
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let valid = Outcome::valid(21).map(|x| x * 2);
/// assert_eq!(valid.into_value(), Some(42));
///
/// let fail: Outcome<i32> = Outcome::fail("cannot be null");
/// assert!(fail.map(|x| x * 2).is_fail());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Valid(T),
    Fail(ErrorDetails),
}

impl<T> Outcome<T> {
    /// Creates a successful outcome.
    #[inline]
    pub fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates a failed outcome from anything convertible into [`ErrorDetails`].
    ///
    /// A payload without errors gets the default error item, so every failure
    /// carries at least one message.
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<()>::fail(["name is required", "age is required"]);
    /// assert_eq!(outcome.secure_fail_errors_details().errors().len(), 2);
    /// ```
    #[inline]
    pub fn fail<E: IntoErrorDetails>(error: E) -> Self {
        let errors = error.into_error_details();
        if errors.errors().is_empty() {
            Self::Fail(errors.add_error(ErrorItem::default()))
        } else {
            Self::Fail(errors)
        }
    }

    /// Converts a standard `Result` whose error side is already a payload.
    #[inline]
    pub fn from_result<E: IntoErrorDetails>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::fail(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        !self.is_valid()
    }

    /// Borrows the success value, if any.
    #[must_use]
    #[inline]
    pub fn as_valid(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Fail(_) => None,
        }
    }

    /// Borrows the failure payload, if any.
    #[must_use]
    #[inline]
    pub fn as_fail(&self) -> Option<&ErrorDetails> {
        match self {
            Self::Valid(_) => None,
            Self::Fail(errors) => Some(errors),
        }
    }

    /// Converts `&Outcome<T>` into `Outcome<&T>`, cloning the payload on failure.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Valid(value) => Outcome::Valid(value),
            Self::Fail(errors) => Outcome::Fail(errors.clone()),
        }
    }

    /// Applies `f` to a success value; failures pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let len = Outcome::valid("rail").map(str::len);
    /// assert_eq!(len.into_value(), Some(4));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Outcome::Valid(f(value)),
            Self::Fail(errors) => Outcome::Fail(errors),
        }
    }

    /// Sequences a stage that may itself fail.
    ///
    /// `f` runs only for a success value and its outcome is returned as is;
    /// a failure short-circuits without calling `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn parse_even(input: i32) -> Outcome<i32> {
    ///     if input % 2 == 0 {
    ///         Outcome::valid(input)
    ///     } else {
    ///         Outcome::fail("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::valid(4).bind(parse_even).into_value(), Some(4));
    /// assert!(Outcome::valid(3).bind(parse_even).is_fail());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Fail(errors) => Outcome::Fail(errors),
        }
    }

    /// Eliminates the outcome; exactly one of the branches runs.
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let text = Outcome::<u8>::fail("boom").match_with(
    ///     |value| format!("got {value}"),
    ///     |errors| format!("failed: {}", errors.to_errors_description()),
    /// );
    /// assert_eq!(text, "failed: boom");
    /// ```
    #[inline]
    pub fn match_with<R, V, F>(self, valid: V, fail: F) -> R
    where
        V: FnOnce(T) -> R,
        F: FnOnce(ErrorDetails) -> R,
    {
        match self {
            Self::Valid(value) => valid(value),
            Self::Fail(errors) => fail(errors),
        }
    }

    /// Transforms the failure payload, for example to attach more details.
    #[inline]
    pub fn map_fail<F>(self, f: F) -> Self
    where
        F: FnOnce(ErrorDetails) -> ErrorDetails,
    {
        match self {
            Self::Valid(value) => Self::Valid(value),
            Self::Fail(errors) => Self::Fail(f(errors)),
        }
    }

    /// Calls `op` on failure, letting it recover or fail differently.
    #[inline]
    pub fn or_else<F>(self, op: F) -> Self
    where
        F: FnOnce(ErrorDetails) -> Self,
    {
        match self {
            Self::Valid(value) => Self::Valid(value),
            Self::Fail(errors) => op(errors),
        }
    }

    /// Runs a side effect on the success value and passes the outcome on.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Valid(value) = &self {
            f(value);
        }
        self
    }

    /// Runs a side effect on the failure payload and passes the outcome on.
    #[inline]
    pub fn tap_fail<F>(self, f: F) -> Self
    where
        F: FnOnce(&ErrorDetails),
    {
        if let Self::Fail(errors) = &self {
            f(errors);
        }
        self
    }

    /// Merges payloads only when both outcomes failed.
    ///
    /// When `self` is valid it is returned unchanged; when `self` failed but
    /// `other` is valid, `self` is still returned unchanged (nothing merged).
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let merged = Outcome::<i32>::fail("a").merge_errors_details_if_fail(Outcome::fail("b"));
    /// assert_eq!(merged.secure_fail_errors_details().to_errors_description(), "\na\nb\n");
    ///
    /// let kept = Outcome::valid(1).merge_errors_details_if_fail(Outcome::fail("b"));
    /// assert_eq!(kept.into_value(), Some(1));
    /// ```
    #[inline]
    pub fn merge_errors_details_if_fail(self, other: Outcome<T>) -> Self {
        self.merge_errors_details_if_fail_different_types(other)
    }

    /// Same policy as [`merge_errors_details_if_fail`](Self::merge_errors_details_if_fail)
    /// across success types; only `other`'s payload is ever inspected.
    pub fn merge_errors_details_if_fail_different_types<U>(self, other: Outcome<U>) -> Self {
        match (self, other) {
            (Self::Fail(left), Outcome::Fail(right)) => Self::Fail(left.merge(right)),
            (this, _) => this,
        }
    }

    /// Returns a clone of the success value, or `T::default()` on failure.
    #[must_use]
    #[inline]
    pub fn secure_valid_value(&self) -> T
    where
        T: Default + Clone,
    {
        match self {
            Self::Valid(value) => value.clone(),
            Self::Fail(_) => T::default(),
        }
    }

    /// Returns a clone of the failure payload, or an empty payload on success.
    #[inline]
    pub fn secure_fail_errors_details(&self) -> ErrorDetails {
        match self {
            Self::Valid(_) => ErrorDetails::new(),
            Self::Fail(errors) => errors.clone(),
        }
    }

    /// Extracts the success value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Fail(_) => None,
        }
    }

    /// Extracts the failure payload, if any.
    #[must_use]
    #[inline]
    pub fn into_errors_details(self) -> Option<ErrorDetails> {
        match self {
            Self::Valid(_) => None,
            Self::Fail(errors) => Some(errors),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn to_result(self) -> Result<T, ErrorDetails> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Fail(errors) => Err(errors),
        }
    }

    /// Returns `true` when this is a failure following the not-found convention.
    #[must_use]
    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.as_fail().is_some_and(ErrorDetails::is_not_found)
    }
}

impl<T> Outcome<Option<T>> {
    /// Turns a valid `None` into a failure, leaving other states as they are.
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let lookup: Outcome<Option<u32>> = Outcome::valid(None);
    /// assert!(lookup.null_to_failed("not found").is_not_found());
    /// ```
    pub fn null_to_failed<E: IntoErrorDetails>(self, error: E) -> Outcome<T> {
        match self {
            Self::Valid(Some(value)) => Outcome::Valid(value),
            Self::Valid(None) => Outcome::fail(error),
            Self::Fail(errors) => Outcome::Fail(errors),
        }
    }
}

impl<T> From<T> for Outcome<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Valid(value)
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorDetails> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.to_result()
    }
}
