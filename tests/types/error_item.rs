use outcome_rail::{ErrorItem, DEFAULT_ERROR_MESSAGE};

#[test]
fn keeps_non_blank_message() {
    let item = ErrorItem::new("disk full");
    assert_eq!(item.message(), "disk full");
    assert_eq!(item.to_string(), "disk full");
}

#[test]
fn blank_messages_become_default() {
    for blank in ["", " ", "\t\n  "] {
        assert_eq!(ErrorItem::new(blank).message(), DEFAULT_ERROR_MESSAGE);
    }
    assert_eq!(ErrorItem::default().message(), DEFAULT_ERROR_MESSAGE);
}

#[test]
fn conversions_go_through_normalization() {
    let from_str: ErrorItem = "".into();
    let from_string: ErrorItem = String::from("timeout").into();

    assert_eq!(from_str.message(), DEFAULT_ERROR_MESSAGE);
    assert_eq!(from_string.into_message(), "timeout");
}

#[test]
fn message_is_not_trimmed_when_non_blank() {
    assert_eq!(ErrorItem::new("  padded ").message(), "  padded ");
}
