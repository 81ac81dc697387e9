//! Checkbox state

use crate::event::Key;

/// A labelled checkbox. Space or Enter toggles when focused.
#[derive(Debug, Clone)]
pub struct Checkbox {
    checked: bool,
    label: String,
    checked_char: char,
    unchecked_char: char,
}

impl Checkbox {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            checked: false,
            label: label.into(),
            checked_char: '■',
            unchecked_char: '□',
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The indicator character for the current state.
    pub fn indicator(&self) -> char {
        if self.checked {
            self.checked_char
        } else {
            self.unchecked_char
        }
    }

    /// Handle a key press. Returns true if the state flipped.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Char(' ') | Key::Enter => {
                self.toggle();
                true
            }
            _ => false,
        }
    }
}
