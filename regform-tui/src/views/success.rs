//! The submission summary view

use crossterm::style::Color;
use regform_lib::Registration;

use crate::event::{Key, KeyEvent};
use crate::screen::{Line, Span, Style};

/// Echoes the submitted record, one `key: value` line per field. Holds the
/// record as immutable display state for the view's lifetime.
#[derive(Debug)]
pub struct SuccessView {
    registration: Registration,
}

impl SuccessView {
    pub fn new(registration: Registration) -> Self {
        Self { registration }
    }

    /// Handle a key press. Returns true when the user asks for a fresh form.
    pub fn handle_key(&self, event: KeyEvent) -> bool {
        event.key == Key::Char('n') && event.modifiers.none()
    }

    pub fn render(&self) -> Vec<Line> {
        let header = Style::new().fg(Color::Green).bold();
        let key_style = Style::new().bold();
        let muted = Style::new().dim();

        let mut lines = vec![
            Line::styled("Form Submitted Successfully!", header),
            Line::empty(),
        ];

        for (key, value) in self.registration.entries() {
            let mut line = Line::empty();
            line.push(Span::styled(format!("{key}: "), key_style));
            line.push(Span::raw(value));
            lines.push(line);
        }

        lines.push(Line::empty());
        lines.push(Line::styled("n new registration · Ctrl+Q quit", muted));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Modifiers;
    use regform_lib::{Field, FormSession, Navigator, ViewId};

    fn submitted_registration() -> Registration {
        struct Capture(Option<Registration>);
        impl Navigator for Capture {
            fn navigate(&mut self, _view: ViewId, payload: Registration) {
                self.0 = Some(payload);
            }
        }

        let mut session = FormSession::new();
        session.set(Field::FirstName, "Asha");
        session.set(Field::LastName, "Patel");
        session.set(Field::Username, "asha.p");
        session.set(Field::Email, "asha@example.com");
        session.set(Field::Password, "hunter2");
        session.set(Field::PhoneNumber, "9123456789");
        session.set(Field::City, "Mumbai");
        session.set(Field::Pan, "ABCDE1234F");
        session.set(Field::Aadhar, "123456789012");

        let mut capture = Capture(None);
        assert!(session.submit(&mut capture));
        capture.0.expect("payload delivered")
    }

    #[test]
    fn test_renders_one_line_per_submitted_key() {
        let view = SuccessView::new(submitted_registration());
        let text: Vec<String> = view.render().iter().map(Line::text).collect();

        assert!(text[0].contains("Form Submitted Successfully!"));
        assert!(text.iter().any(|l| l == "firstName: Asha"));
        assert!(text.iter().any(|l| l == "phoneCountryCode: +91"));
        assert!(text.iter().any(|l| l == "country: India"));
        assert!(text.iter().any(|l| l == "aadhar: 123456789012"));

        let field_lines = text.iter().filter(|l| l.contains(": ")).count();
        assert_eq!(field_lines, 11);
        assert!(!text.iter().any(|l| l.contains("showPassword")));
    }

    #[test]
    fn test_n_requests_fresh_form() {
        let view = SuccessView::new(submitted_registration());
        assert!(view.handle_key(KeyEvent::new(Key::Char('n'))));
        assert!(!view.handle_key(KeyEvent::new(Key::Char('x'))));
        assert!(!view.handle_key(KeyEvent {
            key: Key::Char('n'),
            modifiers: Modifiers::ctrl(),
        }));
    }
}
