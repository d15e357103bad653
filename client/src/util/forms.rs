//! Form state and validation for the operator modals and auth pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each form keeps its raw input strings plus a per-field error map. Editing
//! a field clears that field's error; `validate` recomputes every error and
//! only yields a request payload when none remain, so a submit produces at
//! most one backend call.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;

use contracts::validate::{is_valid_email, is_valid_password, is_valid_phone, is_valid_pin};
use contracts::{LoginRequest, NewOperator, OperatorAccount, OperatorUpdate, Permission, SignupRequest};

use super::device::DeviceFingerprint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FullName,
    FirstName,
    LastName,
    Email,
    Phone,
    Pin,
    ConfirmPin,
    Permission,
    Password,
    PasswordConfirm,
}

impl FormField {
    /// Stable identifier used for input `name` attributes.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone_number",
            Self::Pin => "security_pin",
            Self::ConfirmPin => "confirm_pin",
            Self::Permission => "permission",
            Self::Password => "password",
            Self::PasswordConfirm => "password2",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn set(&mut self, field: FormField, message: &str) {
        self.0.insert(field, message.to_owned());
    }

    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn check_email(errors: &mut FieldErrors, email: &str, invalid: &str) {
    if email.is_empty() {
        errors.set(FormField::Email, "Email is required");
    } else if !is_valid_email(email) {
        errors.set(FormField::Email, invalid);
    }
}

fn check_phone(errors: &mut FieldErrors, phone: &str) {
    if phone.is_empty() {
        errors.set(FormField::Phone, "Phone number is required");
    } else if !is_valid_phone(phone) {
        errors.set(FormField::Phone, "Invalid phone number format");
    }
}

// =============================================================================
// ADD OPERATOR
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewOperatorForm {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub security_pin: String,
    pub confirm_pin: String,
    pub permission: Option<Permission>,
    pub errors: FieldErrors,
}

impl NewOperatorForm {
    /// Update `field` from raw input and clear its error.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FullName => self.full_name = value,
            FormField::Phone => self.phone_number = value,
            FormField::Email => self.email = value,
            FormField::Pin => self.security_pin = value,
            FormField::ConfirmPin => self.confirm_pin = value,
            FormField::Permission => self.permission = value.parse().ok(),
            _ => return,
        }
        self.errors.clear(field);
    }

    /// Validate every field; returns the create payload when all pass.
    pub fn validate(&mut self) -> Option<NewOperator> {
        let mut errors = FieldErrors::default();
        if self.full_name.is_empty() {
            errors.set(FormField::FullName, "Full Name is required");
        }
        check_phone(&mut errors, &self.phone_number);
        check_email(&mut errors, &self.email, "Invalid email format");
        if self.security_pin.is_empty() {
            errors.set(FormField::Pin, "PIN is required");
        } else if !is_valid_pin(&self.security_pin) {
            errors.set(FormField::Pin, "PIN must be at least 4 characters");
        }
        if self.confirm_pin.is_empty() {
            errors.set(FormField::ConfirmPin, "Confirm PIN is required");
        } else if self.confirm_pin != self.security_pin {
            errors.set(FormField::ConfirmPin, "PINs do not match");
        }
        if self.permission.is_none() {
            errors.set(FormField::Permission, "Permission is required");
        }
        self.errors = errors;

        let permission = self.permission.filter(|_| self.errors.is_empty())?;
        Some(NewOperator {
            full_name: self.full_name.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            security_pin: self.security_pin.clone(),
            permission,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// EDIT OPERATOR
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditOperatorForm {
    pub id: i64,
    pub full_name: String,
    /// Displayed read-only.
    pub email: String,
    pub phone_number: String,
    /// Empty means "keep the current PIN".
    pub security_pin: String,
    pub confirm_pin: String,
    pub permission: Option<Permission>,
    pub errors: FieldErrors,
}

impl EditOperatorForm {
    /// Pre-fill from `account`; PIN fields always start empty.
    #[must_use]
    pub fn from_account(account: &OperatorAccount) -> Self {
        Self {
            id: account.id,
            full_name: account.full_name.clone(),
            email: account.email.clone(),
            phone_number: account.phone_number.clone(),
            permission: account.permission,
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FullName => self.full_name = value,
            FormField::Phone => self.phone_number = value,
            FormField::Pin => self.security_pin = value,
            FormField::ConfirmPin => self.confirm_pin = value,
            FormField::Permission => self.permission = value.parse().ok(),
            _ => return,
        }
        self.errors.clear(field);
    }

    /// Validate; the payload omits `security_pin` when the PIN is blank.
    pub fn validate(&mut self) -> Option<OperatorUpdate> {
        let mut errors = FieldErrors::default();
        if self.full_name.is_empty() {
            errors.set(FormField::FullName, "Full Name is required");
        }
        check_email(&mut errors, &self.email, "Invalid email format");
        check_phone(&mut errors, &self.phone_number);
        if !self.security_pin.is_empty() {
            if !is_valid_pin(&self.security_pin) {
                errors.set(FormField::Pin, "PIN must be at least 4 characters");
            }
            if self.confirm_pin.is_empty() {
                errors.set(FormField::ConfirmPin, "Confirm PIN is required");
            } else if self.confirm_pin != self.security_pin {
                errors.set(FormField::ConfirmPin, "PINs do not match");
            }
        }
        if self.permission.is_none() {
            errors.set(FormField::Permission, "Permission is required");
        }
        self.errors = errors;

        let permission = self.permission.filter(|_| self.errors.is_empty())?;
        Some(OperatorUpdate {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            security_pin: (!self.security_pin.is_empty()).then(|| self.security_pin.clone()),
            permission,
        })
    }
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
}

impl LoginForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            _ => return,
        }
        self.errors.clear(field);
    }

    /// Validate and tag the request with the caller's fingerprint.
    pub fn validate(&mut self, device: &DeviceFingerprint, ipaddress: Option<String>) -> Option<LoginRequest> {
        let mut errors = FieldErrors::default();
        if !is_valid_email(&self.email) {
            errors.set(FormField::Email, "Please provide a valid email");
        }
        if !is_valid_password(&self.password) {
            errors.set(FormField::Password, "Password must be at least 8 characters long");
        }
        self.errors = errors;
        if !self.errors.is_empty() {
            return None;
        }
        Some(LoginRequest {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            device: device.device.clone(),
            browser: device.browser.clone(),
            os: device.os.clone(),
            ipaddress,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password2: String,
    pub errors: FieldErrors,
}

impl SignupForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Email => self.email = value,
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Password => self.password = value,
            FormField::PasswordConfirm => self.password2 = value,
            _ => return,
        }
        self.errors.clear(field);
    }

    pub fn validate(&mut self) -> Option<SignupRequest> {
        let mut errors = FieldErrors::default();
        if !is_valid_email(&self.email) {
            errors.set(FormField::Email, "Please provide a valid email");
        }
        if self.first_name.trim().is_empty() {
            errors.set(FormField::FirstName, "Field is required");
        }
        if self.last_name.trim().is_empty() {
            errors.set(FormField::LastName, "Field is required");
        }
        if !is_valid_password(&self.password) {
            errors.set(FormField::Password, "Password must be at least 8 characters long");
        }
        if self.password2.is_empty() || self.password2 != self.password {
            errors.set(FormField::PasswordConfirm, "Passwords must match");
        }
        self.errors = errors;
        if !self.errors.is_empty() {
            return None;
        }
        Some(SignupRequest {
            email: self.email.trim().to_owned(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            password: self.password.clone(),
            password2: self.password2.clone(),
        })
    }
}
