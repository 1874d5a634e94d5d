use std::borrow::Cow;

use outcome_rail::{Details, ErrorDetails, ErrorItem, Fault, IntoErrorDetails, Outcome};

struct MissingUser {
    id: i64,
}

impl IntoErrorDetails for MissingUser {
    fn into_error_details(self) -> ErrorDetails {
        ErrorDetails::not_found("user not found").add_detail("user_id", self.id)
    }
}

#[test]
fn strings_and_items_become_single_errors() {
    assert_eq!("a".into_error_details(), ErrorDetails::from_message("a"));
    assert_eq!(String::from("b").into_error_details(), ErrorDetails::from_message("b"));
    assert_eq!(Cow::Borrowed("c").into_error_details(), ErrorDetails::from_message("c"));
    assert_eq!(ErrorItem::new("d").into_error_details(), ErrorDetails::from_message("d"));
}

#[test]
fn lists_keep_their_order() {
    let from_vec = vec![String::from("x"), String::from("y")].into_error_details();
    let from_items = vec![ErrorItem::new("x"), ErrorItem::new("y")].into_error_details();
    let from_array = ["x", "y"].into_error_details();

    assert_eq!(from_vec, from_items);
    assert_eq!(from_items, from_array);
    assert_eq!(from_array.to_errors_description(), "\nx\ny\n");
}

#[test]
fn tuples_attach_details() {
    let payload = ("E", Details::from([("k", "v")])).into_error_details();
    assert!(payload.has_key_details("k"));

    let owned = (String::from("E"), Details::new()).into_error_details();
    assert!(owned.details().is_empty());
}

#[test]
fn faults_record_exception_entry() {
    let payload = Fault::new("boom").into_error_details();
    assert!(payload.has_exception_details());
    assert_eq!(payload.to_errors_description(), "boom");
}

#[test]
fn custom_types_plug_into_outcome_fail() {
    let outcome: Outcome<()> = Outcome::fail(MissingUser { id: 7 });

    assert!(outcome.is_not_found());
    assert_eq!(
        outcome.secure_fail_errors_details().get_detail::<i64>("user_id").into_value(),
        Some(7)
    );
}

#[test]
fn from_impls_for_error_details() {
    let a: ErrorDetails = "a".into();
    let b: ErrorDetails = String::from("b").into();
    let c: ErrorDetails = ErrorItem::new("c").into();

    assert_eq!(a.merge(b).merge(c).errors().len(), 3);
}
