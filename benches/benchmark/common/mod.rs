use criterion::Criterion;
use outcome_rail::{Details, ErrorDetails, Fault};
use std::time::Duration;

// ============================================================================
// Test Data
// ============================================================================

#[derive(Debug, Clone)]
pub struct UserData {
    pub user_id: u64,
    pub username: String,
    pub email: String,
}

impl UserData {
    pub fn new(id: u64) -> Self {
        Self { user_id: id, username: format!("user_{id}"), email: format!("user{id}@company.com") }
    }
}

/// Failure payload with `errors` messages, as many plain details and one fault.
pub fn sample_errors(errors: usize) -> ErrorDetails {
    let details: Details = (0..errors).map(|i| (format!("field_{i}"), i as i64)).collect();
    ErrorDetails::from_messages_details((0..errors).map(|i| format!("error {i}")), details)
        .append_ex_error_detail(Fault::new("connection reset"))
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
