use std::num::ParseIntError;

use outcome_rail::prelude_async::*;

async fn fetch(id: u32) -> Outcome<String> {
    Outcome::valid(format!("row {id}"))
}

async fn parse(input: &str) -> Result<u32, ParseIntError> {
    input.parse()
}

#[tokio::test]
async fn bind_async_runs_only_when_valid() {
    let row = Outcome::valid(3).bind_async(fetch).await;
    assert_eq!(row.into_value(), Some("row 3".to_string()));

    let skipped = Outcome::<u32>::fail("E").bind_async(fetch).await;
    assert!(skipped.is_fail());
}

#[tokio::test]
async fn map_async_wraps_result() {
    let doubled = Outcome::valid(4).map_async(|x| async move { x * 2 }).await;
    assert_eq!(doubled.into_value(), Some(8));
}

#[tokio::test]
async fn try_async_variants_capture_errors() {
    let ok = Outcome::valid("12").try_map_async(parse).await;
    assert_eq!(ok.into_value(), Some(12));

    let failed = Outcome::valid("x").try_map_async(parse).await;
    let errors = failed.secure_fail_errors_details();
    assert_eq!(errors.to_errors_description(), outcome_rail::DEFAULT_FAULT_MESSAGE);
    assert!(errors.get_detail_exception_as::<ParseIntError>().is_valid());

    let bound = Outcome::valid("7")
        .try_bind_async(|s| async move { parse(s).await.map(|n| Outcome::valid(n + 1)) })
        .await;
    assert_eq!(bound.into_value(), Some(8));
}

#[tokio::test]
async fn into_ready_starts_an_async_chain() {
    let outcome = Outcome::valid(2).into_ready().map_valid(|x| x * 5).await;
    assert_eq!(outcome.into_value(), Some(10));
}
