//! Per-field edit state

mod checkbox;
mod select;
mod text_input;

pub use checkbox::Checkbox;
pub use select::Select;
pub use text_input::{InputOutcome, TextInput};
