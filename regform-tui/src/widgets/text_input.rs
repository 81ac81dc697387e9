//! Single-line text input state

use unicode_width::UnicodeWidthStr;

use crate::event::{Key, Modifiers};

/// Result of handling a key on a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (cursor movement).
    Handled,
    /// Key was not handled, pass it on.
    Ignored,
}

/// Edit state for one text field: value, char-indexed cursor, and optional
/// masked display for the password field.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    /// Cursor position as a character index.
    cursor: usize,
    masked: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            value,
            cursor,
            masked: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
    }

    /// The text to render: asterisks when masked.
    pub fn display_value(&self) -> String {
        if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Cursor offset in display columns, for terminal cursor placement.
    pub fn cursor_col(&self) -> usize {
        if self.masked {
            self.cursor
        } else {
            let byte = char_to_byte_index(&self.value, self.cursor);
            self.value[..byte].width()
        }
    }

    /// Handle a key press. Plain characters insert; Enter submits.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> InputOutcome {
        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.insert_char(c);
                InputOutcome::Changed
            }
            Key::Backspace if modifiers.none() => {
                if self.delete_back() {
                    InputOutcome::Changed
                } else {
                    InputOutcome::Handled
                }
            }
            Key::Delete if modifiers.none() => {
                if self.delete_forward() {
                    InputOutcome::Changed
                } else {
                    InputOutcome::Handled
                }
            }
            Key::Left if !modifiers.ctrl => {
                self.cursor = self.cursor.saturating_sub(1);
                InputOutcome::Handled
            }
            Key::Right if !modifiers.ctrl => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                InputOutcome::Handled
            }
            Key::Home => {
                self.cursor = 0;
                InputOutcome::Handled
            }
            Key::End => {
                self.cursor = self.value.chars().count();
                InputOutcome::Handled
            }
            Key::Enter => InputOutcome::Submitted,
            _ => InputOutcome::Ignored,
        }
    }

    fn insert_char(&mut self, c: char) {
        let byte = char_to_byte_index(&self.value, self.cursor);
        self.value.insert(byte, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte = char_to_byte_index(&self.value, self.cursor - 1);
        self.value.remove(byte);
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.value.chars().count() {
            return false;
        }
        let byte = char_to_byte_index(&self.value, self.cursor);
        self.value.remove(byte);
        true
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
