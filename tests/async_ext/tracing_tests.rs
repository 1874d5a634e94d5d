//! Tests for tracing integration.

use outcome_rail::async_ext::SPAN_KEY;
use outcome_rail::prelude_async::*;
use tracing::Span;

#[test]
fn trace_fail_passes_outcome_through() {
    let valid = Outcome::valid(1).trace_fail("load");
    let failed = Outcome::<u8>::fail("E").trace_fail("load");

    assert_eq!(valid.into_value(), Some(1));
    assert_eq!(failed.secure_fail_errors_details().to_errors_description(), "E");
}

#[test]
fn with_span_details_records_span_name_on_failure() {
    let failed = Outcome::<u8>::fail("E").with_span(&Span::none());
    let errors = failed.secure_fail_errors_details();

    assert_eq!(errors.get_detail::<String>(SPAN_KEY).into_value(), Some("unknown".to_string()));
}

#[test]
fn with_span_details_leaves_valid_outcome_alone() {
    let valid = Outcome::valid(1).with_span_details();
    assert_eq!(valid, Outcome::valid(1));
}

#[tokio::test]
async fn future_span_ext_records_on_failure() {
    let failed = async { Outcome::<u8>::fail("E") }.with_span(Span::none()).await;
    assert!(failed.secure_fail_errors_details().has_key_details(SPAN_KEY));

    let valid = async { Outcome::valid(3) }.with_span_details().await;
    assert_eq!(valid.into_value(), Some(3));
}
