use std::borrow::Cow;

use outcome_rail::{Fault, FaultMessage};

#[test]
fn literal_messages_ignore_the_fault() {
    let fault = Fault::new("boom");

    assert_eq!("fixed".fault_message(&fault), "fixed");
    assert_eq!(String::from("owned").fault_message(&fault), "owned");
    assert_eq!(Cow::Borrowed("cow").fault_message(&fault), "cow");
}

#[test]
fn closures_derive_from_the_fault() {
    let fault = Fault::new("boom");
    let message = (|f: &Fault| format!("failed: {}", f.message())).fault_message(&fault);

    assert_eq!(message, "failed: boom");
}
