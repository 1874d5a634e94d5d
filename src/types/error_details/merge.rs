use crate::types::alloc_type::{String, Vec};
use crate::types::detail_value::DetailValue;
use crate::types::details::Details;

use super::{ErrorDetails, EXCEPTION_KEY};

/// Key for the fault at zero-based position `slot`: the bare base key first,
/// then the base key suffixed with the one-based position.
pub(crate) fn exception_key(slot: usize) -> String {
    if slot == 0 {
        String::from(EXCEPTION_KEY)
    } else {
        alloc::format!("{}{}", EXCEPTION_KEY, slot + 1)
    }
}

impl ErrorDetails {
    /// Combines two payloads.
    ///
    /// - errors: `self` then `other`
    /// - non-fault details: `self`'s keys first, then `other`'s; a repeated key
    ///   keeps its first position and takes the later value
    /// - faults: collected from both sides (`self` first) and renumbered from
    ///   scratch under the exception key family, after the other details;
    ///   a slot already taken by a plain detail is skipped, and a fault kept
    ///   under a custom key moves into the family
    ///
    /// ```
    /// use outcome_rail::{ErrorDetails, Fault};
    ///
    /// let left = ErrorDetails::from_fault(Fault::new("a")).append_ex_error_detail(Fault::new("b"));
    /// let right = ErrorDetails::from_fault(Fault::new("c"));
    /// let merged = left.merge(right);
    ///
    /// let keys: Vec<&str> = merged.details().keys().collect();
    /// assert_eq!(keys, ["Exception", "Exception2", "Exception3"]);
    /// ```
    pub fn merge(self, other: ErrorDetails) -> ErrorDetails {
        let mut errors = self.errors;
        errors.extend(other.errors);

        let mut details = Details::new();
        let mut faults: Vec<DetailValue> = Vec::new();
        for (key, value) in self.details.into_iter().chain(other.details) {
            if value.is_fault() {
                faults.push(value);
            } else {
                details.insert(key, value);
            }
        }
        let mut slot = 0;
        for fault in faults {
            while details.contains_key(&exception_key(slot)) {
                slot += 1;
            }
            details.insert(exception_key(slot), fault);
            slot += 1;
        }

        ErrorDetails { errors, details }
    }

    /// Left fold of [`merge`](Self::merge) over `others`, starting from `self`.
    pub fn merge_all<I>(self, others: I) -> ErrorDetails
    where
        I: IntoIterator<Item = ErrorDetails>,
    {
        others.into_iter().fold(self, ErrorDetails::merge)
    }
}
