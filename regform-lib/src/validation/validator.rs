//! Rule-table validator for the registration form

use email_address::EmailAddress;
use regex::Regex;

use crate::error::{FieldValidationError, ValidationErrors};
use crate::model::{Field, Registration, RegistrationForm};

/// Validates a [`RegistrationForm`] against the per-field rule table.
///
/// Patterns are compiled once at construction; the validator is cheap to
/// reuse across submission attempts.
#[derive(Debug)]
pub struct Validator {
    phone: Regex,
    pan: Regex,
    aadhar: Regex,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            phone: Regex::new(r"^[6-9]\d{9}$").expect("valid phone pattern"),
            // Deliberately unanchored: the upstream schema matches a PAN
            // anywhere in the value, and that is observable behavior.
            pan: Regex::new(r"[A-Z]{5}[0-9]{4}[A-Z]").expect("valid PAN pattern"),
            aadhar: Regex::new(r"^\d{12}$").expect("valid Aadhar pattern"),
        }
    }

    /// Run every field rule and collect all failures.
    ///
    /// On success the returned [`Registration`] carries the form's values
    /// with defaults already applied and the display toggle dropped. On
    /// failure the returned collection holds the first failing message for
    /// each bad field, in field declaration order.
    pub fn validate(&self, form: &RegistrationForm) -> Result<Registration, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for field in Field::ALL {
            if let Some(message) = self.check(field, form.get(field)) {
                errors.push(FieldValidationError::new(field, message));
            }
        }

        if errors.is_empty() {
            Ok(form.to_registration())
        } else {
            Err(errors)
        }
    }

    /// The rule table: one pure check per field.
    ///
    /// `phoneCountryCode` and `country` carry defaults and no rule. City
    /// membership in the fixed set is a UI constraint, not a validator rule.
    fn check(&self, field: Field, value: &str) -> Option<&'static str> {
        match field {
            Field::FirstName => required(value, "First name is required"),
            Field::LastName => required(value, "Last name is required"),
            Field::Username => required(value, "Username is required"),
            Field::Email => (!EmailAddress::is_valid(value)).then_some("Invalid email"),
            Field::Password => required(value, "Password is required"),
            Field::PhoneCountryCode => None,
            Field::PhoneNumber => {
                (!self.phone.is_match(value)).then_some("Invalid Indian phone number")
            }
            Field::Country => None,
            Field::City => required(value, "City is required"),
            Field::Pan => (!self.pan.is_match(value)).then_some("Invalid PAN format"),
            Field::Aadhar => (!self.aadhar.is_match(value)).then_some("Invalid Aadhar number"),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Require the field to be non-empty. No trimming: a lone space passes, as in
/// the upstream schema.
fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.is_empty().then_some(message)
}
