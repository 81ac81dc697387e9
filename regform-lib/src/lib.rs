//! Registration form domain library
//!
//! Field store, India-specific validation (phone, PAN, Aadhar), and the
//! submission flow for a single registration session. No I/O and no terminal
//! knowledge; the front end drives this through [`FormSession`].

pub mod error;
pub mod flow;
pub mod model;
pub mod validation;

pub use error::{FieldValidationError, ValidationErrors};
pub use flow::{FormSession, Navigator, SessionState, ViewId};
pub use model::{CITIES, Field, Registration, RegistrationForm};
pub use validation::Validator;
