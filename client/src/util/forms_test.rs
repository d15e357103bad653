use super::*;
use serde_json::json;

fn filled_new_form() -> NewOperatorForm {
    let mut form = NewOperatorForm::default();
    form.set(FormField::FullName, "Dana Reyes".to_owned());
    form.set(FormField::Phone, "+1 555-0100".to_owned());
    form.set(FormField::Email, "dana@example.com".to_owned());
    form.set(FormField::Pin, "1234".to_owned());
    form.set(FormField::ConfirmPin, "1234".to_owned());
    form.set(FormField::Permission, "ADMIN".to_owned());
    form
}

fn account() -> OperatorAccount {
    OperatorAccount {
        id: 7,
        full_name: "Sam Ortiz".to_owned(),
        email: "sam@example.com".to_owned(),
        phone_number: "555-0101".to_owned(),
        security_pin: "9999".to_owned(),
        permission: Some(Permission::Sales),
        ..OperatorAccount::default()
    }
}

// =============================================================
// Add operator
// =============================================================

#[test]
fn valid_new_operator_yields_one_payload() {
    let mut form = filled_new_form();
    let payload = form.validate().unwrap();
    assert!(form.errors.is_empty());
    assert_eq!(payload.permission, Permission::Admin);
    assert_eq!(payload.security_pin, "1234");
}

#[test]
fn mismatched_confirm_pin_blocks_submit() {
    let mut form = filled_new_form();
    form.set(FormField::ConfirmPin, "4321".to_owned());
    assert!(form.validate().is_none());
    assert_eq!(form.errors.get(FormField::ConfirmPin), Some("PINs do not match"));
    assert_eq!(form.errors.get(FormField::Pin), None);
}

#[test]
fn empty_new_form_reports_every_required_field() {
    let mut form = NewOperatorForm::default();
    assert!(form.validate().is_none());
    assert_eq!(form.errors.get(FormField::FullName), Some("Full Name is required"));
    assert_eq!(form.errors.get(FormField::Phone), Some("Phone number is required"));
    assert_eq!(form.errors.get(FormField::Email), Some("Email is required"));
    assert_eq!(form.errors.get(FormField::Pin), Some("PIN is required"));
    assert_eq!(form.errors.get(FormField::ConfirmPin), Some("Confirm PIN is required"));
    assert_eq!(form.errors.get(FormField::Permission), Some("Permission is required"));
}

#[test]
fn short_pin_and_bad_formats_are_reported() {
    let mut form = filled_new_form();
    form.set(FormField::Pin, "12".to_owned());
    form.set(FormField::ConfirmPin, "12".to_owned());
    form.set(FormField::Email, "dana@example".to_owned());
    form.set(FormField::Phone, "call me".to_owned());
    assert!(form.validate().is_none());
    assert_eq!(form.errors.get(FormField::Pin), Some("PIN must be at least 4 characters"));
    assert_eq!(form.errors.get(FormField::Email), Some("Invalid email format"));
    assert_eq!(form.errors.get(FormField::Phone), Some("Invalid phone number format"));
}

#[test]
fn editing_a_field_clears_its_error() {
    let mut form = NewOperatorForm::default();
    form.validate();
    form.set(FormField::Email, "x".to_owned());
    assert_eq!(form.errors.get(FormField::Email), None);
    assert!(form.errors.get(FormField::FullName).is_some());
}

#[test]
fn unknown_permission_text_leaves_permission_unset() {
    let mut form = filled_new_form();
    form.set(FormField::Permission, "ROOT".to_owned());
    assert_eq!(form.permission, None);
}

#[test]
fn reset_clears_inputs_and_errors() {
    let mut form = filled_new_form();
    form.set(FormField::Pin, String::new());
    form.validate();
    form.reset();
    assert_eq!(form, NewOperatorForm::default());
}

// =============================================================
// Edit operator
// =============================================================

#[test]
fn edit_form_prefills_without_pin() {
    let form = EditOperatorForm::from_account(&account());
    assert_eq!(form.id, 7);
    assert_eq!(form.email, "sam@example.com");
    assert_eq!(form.permission, Some(Permission::Sales));
    assert!(form.security_pin.is_empty());
}

#[test]
fn empty_pin_update_has_no_security_pin_key() {
    let mut form = EditOperatorForm::from_account(&account());
    let payload = form.validate().unwrap();
    let body = serde_json::to_value(&payload).unwrap();
    assert!(body.get("security_pin").is_none());
    assert_eq!(body["permission"], json!("SALES"));
}

#[test]
fn new_pin_requires_matching_confirmation() {
    let mut form = EditOperatorForm::from_account(&account());
    form.set(FormField::Pin, "5678".to_owned());
    assert!(form.validate().is_none());
    assert_eq!(form.errors.get(FormField::ConfirmPin), Some("Confirm PIN is required"));

    form.set(FormField::ConfirmPin, "5679".to_owned());
    assert!(form.validate().is_none());
    assert_eq!(form.errors.get(FormField::ConfirmPin), Some("PINs do not match"));

    form.set(FormField::ConfirmPin, "5678".to_owned());
    let payload = form.validate().unwrap();
    assert_eq!(payload.security_pin.as_deref(), Some("5678"));
}

#[test]
fn edit_rejects_bad_phone() {
    let mut form = EditOperatorForm::from_account(&account());
    form.set(FormField::Phone, "555x".to_owned());
    assert!(form.validate().is_none());
    assert_eq!(form.errors.get(FormField::Phone), Some("Invalid phone number format"));
}

#[test]
fn edit_ignores_email_input() {
    let mut form = EditOperatorForm::from_account(&account());
    form.set(FormField::Email, "other@example.com".to_owned());
    assert_eq!(form.email, "sam@example.com");
}

// =============================================================
// Auth
// =============================================================

#[test]
fn login_requires_valid_email_and_long_password() {
    let device = DeviceFingerprint::from_user_agent("");
    let mut form = LoginForm::default();
    form.set(FormField::Email, "nobody".to_owned());
    form.set(FormField::Password, "short".to_owned());
    assert!(form.validate(&device, None).is_none());
    assert_eq!(form.errors.get(FormField::Email), Some("Please provide a valid email"));
    assert_eq!(form.errors.get(FormField::Password), Some("Password must be at least 8 characters long"));
}

#[test]
fn login_request_carries_fingerprint() {
    let device = DeviceFingerprint { device: "Desktop".into(), browser: "Firefox".into(), os: "Linux".into() };
    let mut form = LoginForm::default();
    form.set(FormField::Email, " ops@example.com ".to_owned());
    form.set(FormField::Password, "hunter2hunter2".to_owned());
    let request = form.validate(&device, Some("10.0.0.1".to_owned())).unwrap();
    assert_eq!(request.email, "ops@example.com");
    assert_eq!(request.browser, "Firefox");
    assert_eq!(request.ipaddress.as_deref(), Some("10.0.0.1"));
}

#[test]
fn signup_requires_matching_passwords() {
    let mut form = SignupForm::default();
    form.set(FormField::Email, "new@example.com".to_owned());
    form.set(FormField::FirstName, "New".to_owned());
    form.set(FormField::LastName, "User".to_owned());
    form.set(FormField::Password, "password123".to_owned());
    form.set(FormField::PasswordConfirm, "password124".to_owned());
    assert!(form.validate().is_none());
    assert_eq!(form.errors.get(FormField::PasswordConfirm), Some("Passwords must match"));

    form.set(FormField::PasswordConfirm, "password123".to_owned());
    let request = form.validate().unwrap();
    assert_eq!(request.first_name, "New");
}

#[test]
fn signup_requires_names() {
    let mut form = SignupForm::default();
    form.validate();
    assert_eq!(form.errors.get(FormField::FirstName), Some("Field is required"));
    assert_eq!(form.errors.get(FormField::LastName), Some("Field is required"));
}
