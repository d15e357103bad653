use super::*;

#[test]
fn email_requires_at_and_dot() {
    assert!(is_valid_email("ops@example.com"));
    assert!(!is_valid_email("ops@example"));
    assert!(!is_valid_email("ops.example.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn phone_accepts_digits_spaces_dashes_and_leading_plus() {
    assert!(is_valid_phone("+1 555-010-9999"));
    assert!(is_valid_phone("5550109999"));
    assert!(!is_valid_phone("555-CALL-NOW"));
    assert!(!is_valid_phone("1+555"));
    assert!(!is_valid_phone(""));
}

#[test]
fn pin_and_password_minimum_lengths() {
    assert!(!is_valid_pin("123"));
    assert!(is_valid_pin("1234"));
    assert!(!is_valid_password("short"));
    assert!(is_valid_password("long enough"));
}

#[test]
fn digits_only_strips_everything_else() {
    assert_eq!(digits_only("a1b2-3 "), "123");
    assert_eq!(digits_only("abc"), "");
}
