use std::num::ParseIntError;

use outcome_rail::{
    DetailValue, Details, ErrorDetails, ErrorItem, Fault, DEFAULT_ERROR_MESSAGE, EXCEPTION_KEY,
    NOT_FOUND_KEY, VALUE_KEY,
};

#[derive(Debug)]
struct Ticket {
    id: u32,
}

#[test]
fn constructors_populate_errors_and_details() {
    let single = ErrorDetails::from_message("E1");
    let many = ErrorDetails::from_messages(["E1", "E2"]);
    let with_details = ErrorDetails::from_message_details("E1", Details::from([("k", "v")]));
    let items = ErrorDetails::from_errors_details(
        vec![ErrorItem::new("a"), ErrorItem::new("b")],
        Details::from([("k", 1)]),
    );

    assert_eq!(single.error_messages().collect::<Vec<_>>(), ["E1"]);
    assert_eq!(many.errors().len(), 2);
    assert!(with_details.has_key_details("k"));
    assert_eq!(items.details().len(), 1);
    assert!(ErrorDetails::new().is_empty());
}

#[test]
fn blank_messages_use_default() {
    let details = ErrorDetails::from_message("   ");
    assert_eq!(details.error_messages().next(), Some(DEFAULT_ERROR_MESSAGE));
}

#[test]
fn add_operations_return_updated_payload() {
    let base = ErrorDetails::from_message("E1");
    let grown = base
        .clone()
        .add_error("E2")
        .add_errors(["E3", "E4"])
        .add_detail("k", "v")
        .add_details([("n", 1), ("m", 2)]);

    assert_eq!(base.errors().len(), 1);
    assert_eq!(grown.errors().len(), 4);
    assert_eq!(grown.details().keys().collect::<Vec<_>>(), ["k", "n", "m"]);
}

#[test]
fn add_detail_value_keeps_single_value_entry() {
    let details = ErrorDetails::from_message("bad value")
        .add_detail("other", 1)
        .add_detail_value("first")
        .add_detail_value("second");

    let value_entries = details.details().keys().filter(|key| *key == VALUE_KEY).count();
    assert_eq!(value_entries, 1);
    assert_eq!(details.get_detail_value::<String>().into_value(), Some("second".to_string()));
    assert!(details.has_value_details());
}

#[test]
fn get_detail_reports_missing_and_mismatched_keys() {
    let details = ErrorDetails::from_message("E").add_detail("attempts", 3);

    assert_eq!(details.get_detail::<i64>("attempts").into_value(), Some(3));

    let missing = details.get_detail::<i64>("nope").secure_fail_errors_details();
    assert_eq!(missing.to_errors_description(), "the key 'nope' does not exist");

    let mismatch = details.get_detail::<String>("attempts").secure_fail_errors_details();
    assert_eq!(
        mismatch.to_errors_description(),
        "the key 'attempts' does not contain a value of type text"
    );
}

#[test]
fn get_detail_any_shares_opaque_values() {
    let details = ErrorDetails::from_message("E")
        .add_detail("ticket", DetailValue::opaque(Ticket { id: 7 }))
        .add_detail("plain", 1);

    let ticket = details.get_detail_any::<Ticket>("ticket").into_value();
    assert_eq!(ticket.map(|t| t.id), Some(7));
    assert!(details.get_detail_any::<String>("ticket").is_fail());
    assert!(details.get_detail_any::<Ticket>("plain").is_fail());
    assert!(details.get_detail_any::<Ticket>("missing").is_fail());
}

#[test]
fn exception_lookups() {
    let parse_error = "x".parse::<u8>().unwrap_err();
    let details = ErrorDetails::from_fault(Fault::from(parse_error.clone()));

    assert!(details.has_exception_details());
    let fault = details.get_detail_exception().into_value();
    assert_eq!(fault.map(|f| f.message().to_string()), Some(parse_error.to_string()));
    assert_eq!(details.get_detail_exception_as::<ParseIntError>().into_value(), Some(parse_error));
    assert!(details.get_detail_exception_as::<std::fmt::Error>().is_fail());

    assert!(ErrorDetails::from_message("no fault").get_detail_exception().is_fail());
}

#[test]
fn append_ex_details_uses_next_free_key() {
    let details = ErrorDetails::from_message("E");
    let once = details.append_ex_details(Fault::new("a"));
    assert_eq!(once.keys().collect::<Vec<_>>(), [EXCEPTION_KEY]);

    let twice = ErrorDetails::from_errors_details(vec![], once).append_ex_details(Fault::new("b"));
    assert_eq!(twice.keys().collect::<Vec<_>>(), ["Exception", "Exception2"]);

    // the receiver is left untouched
    assert!(details.details().is_empty());
}

#[test]
fn append_ex_error_detail_adds_error_and_fault() {
    let details = ErrorDetails::from_message("E1")
        .append_ex_error_detail(Fault::new("first"))
        .append_ex_error_detail_with(Fault::new("second"), "custom");

    assert_eq!(details.error_messages().collect::<Vec<_>>(), ["E1", "first", "custom"]);
    let faults: Vec<&str> = details.faults().map(Fault::message).collect();
    assert_eq!(faults, ["first", "second"]);
}

#[test]
fn not_found_convention() {
    assert!(ErrorDetails::not_found("user 42").has_key_details(NOT_FOUND_KEY));
    assert!(ErrorDetails::not_found("user 42").is_not_found());
    assert!(ErrorDetails::from_message("Record NOT FOUND").is_not_found());
    assert!(ErrorDetails::from_message("usuario no encontrado").is_not_found());
    assert!(ErrorDetails::from_message("Datei nicht gefunden").is_not_found());
    assert!(!ErrorDetails::from_message("permission denied").is_not_found());
}

#[test]
fn into_parts_splits_payload() {
    let (errors, details) = ErrorDetails::from_message_details("E", Details::from([("k", 1)]))
        .into_parts();
    assert_eq!(errors, vec![ErrorItem::new("E")]);
    assert!(details.contains_key("k"));
}
