use outcome_rail::{Details, ErrorDetails, Fault};

#[test]
fn single_error_renders_bare() {
    assert_eq!(ErrorDetails::from_message("E1").to_errors_description(), "E1");
}

#[test]
fn several_errors_render_wrapped_in_newlines() {
    let details = ErrorDetails::from_messages(["E1", "E2", "E3"]);
    assert_eq!(details.to_errors_description(), "\nE1\nE2\nE3\n");
}

#[test]
fn empty_payload_renders_empty() {
    let empty = ErrorDetails::new();
    assert_eq!(empty.to_errors_description(), "");
    assert_eq!(empty.to_details_description(), "");
    assert_eq!(empty.to_errors_details_description(), "Errors: ");
}

#[test]
fn details_render_as_key_value_lines() {
    let one = ErrorDetails::from_message_details("E", Details::from([("k", "v")]));
    let two = ErrorDetails::from_message_details("E", Details::from([("k", 1), ("ok", 2)]));

    assert_eq!(one.to_details_description(), "k: v");
    assert_eq!(two.to_details_description(), "\nk: 1\nok: 2\n");
}

#[test]
fn combined_description_and_display() {
    let plain = ErrorDetails::from_message("E1");
    let with_details = ErrorDetails::from_message("E1").add_detail("k", true);

    assert_eq!(plain.to_errors_details_description(), "Errors: E1");
    assert_eq!(with_details.to_errors_details_description(), "Errors: E1\nDetails: k: true");
    assert_eq!(with_details.to_string(), with_details.to_errors_details_description());
}

#[test]
fn faults_render_with_their_message() {
    let details = ErrorDetails::from_fault(Fault::new("boom"));
    assert_eq!(details.to_details_description(), "Exception: boom");
}
