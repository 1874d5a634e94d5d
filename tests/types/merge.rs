use outcome_rail::{Details, ErrorDetails, Fault};

#[test]
fn merge_concatenates_errors_and_details() {
    let left = ErrorDetails::from_message_details("E1", Details::from([("k", "v")]));
    let right = ErrorDetails::from_message_details("E2", Details::from([("k2", "v2")]));

    let merged = left.merge(right);

    assert_eq!(merged.error_messages().collect::<Vec<_>>(), ["E1", "E2"]);
    assert_eq!(merged.details().keys().collect::<Vec<_>>(), ["k", "k2"]);
}

#[test]
fn merge_later_value_wins_for_duplicate_keys() {
    let left = ErrorDetails::from_message_details("E1", Details::from([("k", 1), ("a", 0)]));
    let right = ErrorDetails::from_message_details("E2", Details::from([("k", 2)]));

    let merged = left.merge(right);

    assert_eq!(merged.details().keys().collect::<Vec<_>>(), ["k", "a"]);
    assert_eq!(merged.get_detail::<i64>("k").into_value(), Some(2));
}

#[test]
fn merge_renumbers_faults_from_both_sides() {
    let left = ErrorDetails::from_fault(Fault::new("a")).add_detail("ctx", "left");
    let right = ErrorDetails::from_fault(Fault::new("b"))
        .append_ex_error_detail(Fault::new("c"));

    let merged = left.merge(right);

    assert_eq!(
        merged.details().keys().collect::<Vec<_>>(),
        ["ctx", "Exception", "Exception2", "Exception3"]
    );
    let faults: Vec<&str> = merged.faults().map(Fault::message).collect();
    assert_eq!(faults, ["a", "b", "c"]);
    assert_eq!(merged.errors().len(), 3);
}

#[test]
fn merge_with_empty_is_identity() {
    let payload = ErrorDetails::from_message_details("E1", Details::from([("k", 1)]));

    assert_eq!(payload.clone().merge(ErrorDetails::new()), payload);
    assert_eq!(ErrorDetails::new().merge(payload.clone()), payload);
}

#[test]
fn merge_is_associative() {
    let a = ErrorDetails::from_message_details("A", Details::from([("x", 1)]))
        .append_ex_error_detail(Fault::new("fa"));
    let b = ErrorDetails::from_message_details("B", Details::from([("x", 2), ("y", 3)]));
    let c = ErrorDetails::from_fault(Fault::new("fc"));

    let left_first = a.clone().merge(b.clone()).merge(c.clone());
    let right_first = a.merge(b.merge(c));

    assert_eq!(left_first, right_first);
}

#[test]
fn merge_all_folds_in_order() {
    let merged = ErrorDetails::from_message("1").merge_all(vec![
        ErrorDetails::from_message("2"),
        ErrorDetails::from_message("3"),
    ]);

    assert_eq!(merged.error_messages().collect::<Vec<_>>(), ["1", "2", "3"]);
}

#[test]
fn merge_keeps_plain_details_under_exception_keys() {
    let left = ErrorDetails::from_message("E1").add_detail("Exception", "user text");
    let right = ErrorDetails::from_fault(Fault::new("boom"));

    let merged = left.merge(right);

    assert_eq!(merged.details().len(), 2);
    assert_eq!(merged.get_detail::<String>("Exception").into_value(), Some("user text".into()));
    assert_eq!(merged.details().keys().collect::<Vec<_>>(), ["Exception", "Exception2"]);
    let faults: Vec<&str> = merged.faults().map(Fault::message).collect();
    assert_eq!(faults, ["boom"]);
}

#[test]
fn merge_skips_every_taken_exception_slot() {
    let left = ErrorDetails::from_fault(Fault::new("a")).add_detail("Exception2", 7);
    let right = ErrorDetails::from_fault(Fault::new("b"));

    let merged = left.merge(right);

    assert_eq!(
        merged.details().keys().collect::<Vec<_>>(),
        ["Exception2", "Exception", "Exception3"]
    );
    assert_eq!(merged.get_detail::<i64>("Exception2").into_value(), Some(7));
    assert_eq!(merged.faults().count(), 2);
}

#[test]
fn merge_moves_custom_keyed_faults_into_exception_family() {
    let payload = ErrorDetails::from_message("E").add_detail("db", Fault::new("x"));

    let merged = payload.merge(ErrorDetails::new());

    assert_eq!(merged.details().keys().collect::<Vec<_>>(), ["Exception"]);
    assert_eq!(merged.get_detail_exception().into_value(), Some(Fault::new("x")));
}
