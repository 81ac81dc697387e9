//! Form data model

mod field;
mod form;
mod registration;

pub use field::*;
pub use form::*;
pub use registration::*;
