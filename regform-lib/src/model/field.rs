//! Schema field identifiers

use serde::{Deserialize, Serialize};

/// One of the eleven registration schema fields.
///
/// The password display toggle is UI state, not a schema field, and has no
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    PhoneCountryCode,
    PhoneNumber,
    Country,
    City,
    Pan,
    Aadhar,
}

impl Field {
    /// All schema fields in declaration order.
    pub const ALL: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::Username,
        Field::Email,
        Field::Password,
        Field::PhoneCountryCode,
        Field::PhoneNumber,
        Field::Country,
        Field::City,
        Field::Pan,
        Field::Aadhar,
    ];

    /// The wire-style camelCase name, as echoed on the summary view.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::PhoneCountryCode => "phoneCountryCode",
            Field::PhoneNumber => "phoneNumber",
            Field::Country => "country",
            Field::City => "city",
            Field::Pan => "pan",
            Field::Aadhar => "aadhar",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
