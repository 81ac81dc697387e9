//! Error types

mod validation;

pub use validation::*;
