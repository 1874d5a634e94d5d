use outcome_rail::{fail, Outcome};

fn lookup(id: u32) -> Outcome<String> {
    if id == 0 {
        return fail!("id {} is reserved", id);
    }
    Outcome::valid(format!("user-{id}"))
}

#[test]
fn fail_formats_the_message() {
    let outcome = lookup(0);
    assert_eq!(outcome.secure_fail_errors_details().to_errors_description(), "id 0 is reserved");
    assert!(lookup(3).is_valid());
}

#[test]
fn fail_accepts_a_plain_literal() {
    let outcome: Outcome<()> = fail!("not found");
    assert!(outcome.is_not_found());
}

#[test]
fn fail_with_blank_text_uses_default_message() {
    let outcome: Outcome<()> = fail!("{}", "  ");
    assert_eq!(
        outcome.secure_fail_errors_details().to_errors_description(),
        outcome_rail::DEFAULT_ERROR_MESSAGE
    );
}
