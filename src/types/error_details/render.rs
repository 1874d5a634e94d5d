use core::fmt::{self, Display};

use crate::types::alloc_type::{String, Vec};

use super::ErrorDetails;

const LINE_SEPARATOR: &str = "\n";

/// Renders a sequence of lines: a single line as-is, several lines wrapped in
/// a leading and trailing separator. Downstream consumers parse this shape.
fn describe<I>(lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let lines: Vec<String> = lines.into_iter().collect();
    match lines.len() {
        0 => String::new(),
        1 => lines.into_iter().next().unwrap_or_default(),
        _ => {
            let mut text = String::from(LINE_SEPARATOR);
            text.push_str(&lines.join(LINE_SEPARATOR));
            text.push_str(LINE_SEPARATOR);
            text
        },
    }
}

impl ErrorDetails {
    /// Renders the error messages.
    ///
    /// ```
    /// use outcome_rail::ErrorDetails;
    ///
    /// assert_eq!(ErrorDetails::from_message("E1").to_errors_description(), "E1");
    /// assert_eq!(
    ///     ErrorDetails::from_messages(["E1", "E2"]).to_errors_description(),
    ///     "\nE1\nE2\n"
    /// );
    /// ```
    pub fn to_errors_description(&self) -> String {
        describe(self.error_messages().map(String::from))
    }

    /// Renders the details as `key: value` lines.
    pub fn to_details_description(&self) -> String {
        describe(
            self.details()
                .iter()
                .map(|(key, value)| alloc::format!("{}: {}", key, value)),
        )
    }

    /// Renders errors, followed by details when there are any.
    pub fn to_errors_details_description(&self) -> String {
        let mut text = alloc::format!("Errors: {}", self.to_errors_description());
        if !self.details().is_empty() {
            text.push_str(LINE_SEPARATOR);
            text.push_str("Details: ");
            text.push_str(&self.to_details_description());
        }
        text
    }
}

impl Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_errors_details_description())
    }
}
