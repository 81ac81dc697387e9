//! Normalized output record handed across the navigation boundary

use serde::{Deserialize, Serialize};

use super::Field;

/// A fully validated registration: exactly the schema fields, no UI state.
///
/// Held by the success view as immutable display state for that view's
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_country_code: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    pub pan: String,
    pub aadhar: String,
}

impl Registration {
    /// Get one field's value.
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

    /// Key/value pairs in declaration order, for summary rendering.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        Field::ALL.into_iter().map(|f| (f.name(), self.get(f)))
    }
}
