//! Live field store for the active form session

use serde::{Deserialize, Serialize};

use super::{Field, Registration};

/// Dial code pre-filled into the phone country code field.
pub const DEFAULT_DIAL_CODE: &str = "+91";

/// The only country the form offers.
pub const DEFAULT_COUNTRY: &str = "India";

/// Fixed city set offered by the city select.
pub const CITIES: [&str; 7] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Hyderabad",
    "Pune",
    "Kolkata",
];

/// Current values of all form fields, mutated field-by-field on input events.
///
/// `show_password` only controls masked-vs-plain rendering of the password
/// field; it is excluded from the validated output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub phone_country_code: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    pub pan: String,
    pub aadhar: String,
}

impl RegistrationForm {
    /// Create an empty form with the dial code and country defaults applied.
    pub fn new() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            username: String::new(),
            email: String::new(),
            password: String::new(),
            show_password: false,
            phone_country_code: DEFAULT_DIAL_CODE.to_string(),
            phone_number: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            city: String::new(),
            pan: String::new(),
            aadhar: String::new(),
        }
    }

    /// Get the current text of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PhoneCountryCode => &self.phone_country_code,
            Field::PhoneNumber => &self.phone_number,
            Field::Country => &self.country,
            Field::City => &self.city,
            Field::Pan => &self.pan,
            Field::Aadhar => &self.aadhar,
        }
    }

    /// Replace one field's value, preserving all others.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::PhoneCountryCode => self.phone_country_code = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::Country => self.country = value,
            Field::City => self.city = value,
            Field::Pan => self.pan = value,
            Field::Aadhar => self.aadhar = value,
        }
    }

    /// Flip the masked-vs-plain password rendering toggle.
    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Build the normalized output record, dropping the display toggle.
    pub fn to_registration(&self) -> Registration {
        Registration {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            phone_country_code: self.phone_country_code.clone(),
            phone_number: self.phone_number.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
            pan: self.pan.clone(),
            aadhar: self.aadhar.clone(),
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}
