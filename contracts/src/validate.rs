//! Field-format checks shared by the dashboard forms and the CLI.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

/// Minimum length of an operator security PIN.
pub const MIN_PIN_LEN: usize = 4;

/// Minimum length of an account password.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("static pattern compiles"));
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[\d\s-]+$").expect("static pattern compiles"));

/// Loose email shape check: something, `@`, something, `.`, something.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Digits, spaces and dashes with an optional leading `+`.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

#[must_use]
pub fn is_valid_pin(value: &str) -> bool {
    value.chars().count() >= MIN_PIN_LEN
}

#[must_use]
pub fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LEN
}

/// Keep only ASCII digits; used to mask the alert-id search input.
#[must_use]
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
