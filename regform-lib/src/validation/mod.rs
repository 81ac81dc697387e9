//! Field validation
//!
//! One pure rule per field, evaluated independently so a single pass collects
//! every failure. See [`Validator::validate`].

mod validator;

pub use validator::Validator;
