//! Fixed-option select state

use crate::event::Key;

/// Selection over a fixed option list. Up/Down cycles through options when
/// the select is focused; the selected label is the field's value.
#[derive(Debug, Clone, Default)]
pub struct Select {
    options: Vec<String>,
    selected: Option<usize>,
    placeholder: String,
}

impl Select {
    pub fn new(options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected: None,
            placeholder: String::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Select an option by index; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = Some(index);
        }
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].as_str())
    }

    /// The field value this select contributes: selected label or empty.
    pub fn value(&self) -> &str {
        self.selected_label().unwrap_or("")
    }

    /// The text to render: selected label, or the placeholder.
    pub fn display(&self) -> &str {
        self.selected_label().unwrap_or(&self.placeholder)
    }

    pub fn is_placeholder(&self) -> bool {
        self.selected.is_none()
    }

    /// Move to the next option, wrapping. From no selection, lands on the
    /// first option.
    pub fn next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
    }

    /// Move to the previous option, wrapping. From no selection, lands on
    /// the last option.
    pub fn prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.options.len() - 1,
            Some(i) => i - 1,
        });
    }

    /// Handle a key press. Returns true if the selection changed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let before = self.selected;
        match key {
            Key::Up => self.prev(),
            Key::Down => self.next(),
            _ => return false,
        }
        self.selected != before
    }
}
