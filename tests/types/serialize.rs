use outcome_rail::{DetailValue, Details, ErrorDetails, ErrorItem, Fault, Outcome};
use serde_json::json;

#[test]
fn error_details_serialize_as_errors_and_ordered_details() {
    let details = ErrorDetails::from_messages(["E1", "E2"])
        .add_detail("attempts", 3)
        .add_detail("user", "alice")
        .append_ex_error_detail(Fault::new("boom"));

    let value = serde_json::to_value(&details).unwrap();
    assert_eq!(
        value,
        json!({
            "errors": ["E1", "E2", "boom"],
            "details": { "attempts": 3, "user": "alice", "Exception": "boom" }
        })
    );
}

#[test]
fn outcome_serializes_by_variant() {
    let valid = serde_json::to_value(Outcome::valid(5)).unwrap();
    assert_eq!(valid, json!({ "Valid": 5 }));

    let fail = serde_json::to_value(Outcome::<u8>::fail("E1")).unwrap();
    assert_eq!(fail, json!({ "Fail": { "errors": ["E1"], "details": {} } }));
}

#[test]
fn error_item_round_trips_through_normalization() {
    let item: ErrorItem = serde_json::from_str("\"  \"").unwrap();
    assert_eq!(item, ErrorItem::default());
    assert_eq!(serde_json::to_string(&ErrorItem::new("x")).unwrap(), "\"x\"");
}

#[test]
fn opaque_values_serialize_as_type_name() {
    let details = Details::new().with("blob", DetailValue::opaque(vec![1_u8]));
    let value = serde_json::to_value(&details).unwrap();
    assert!(value["blob"].as_str().unwrap().contains("Vec"));
}
