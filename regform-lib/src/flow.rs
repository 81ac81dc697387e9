//! Submission flow for one form session
//!
//! A session is a two-state machine: *Editing* until a submission validates,
//! then *Submitted*, which is terminal. Returning to the form means starting
//! a fresh session.

use crate::error::ValidationErrors;
use crate::model::{Field, Registration, RegistrationForm};
use crate::validation::Validator;

/// Navigation target identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Form,
    Success,
}

/// External navigation sink. On successful validation the session hands the
/// normalized record here; the payload must reach the new view exactly once.
pub trait Navigator {
    fn navigate(&mut self, view: ViewId, payload: Registration);
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Editing,
    Submitted,
}

/// One registration attempt: the live field store, the current error store,
/// and the submission state machine.
#[derive(Debug, Default)]
pub struct FormSession {
    form: RegistrationForm,
    errors: ValidationErrors,
    state: SessionState,
    validator: Validator,
}

impl FormSession {
    /// Start a fresh session: empty form with defaults, no errors, editing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The live field store.
    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// Current text of one field.
    pub fn get(&self, field: Field) -> &str {
        self.form.get(field)
    }

    /// Replace one field's value. Ignored once submitted.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if self.state == SessionState::Editing {
            self.form.set(field, value);
        }
    }

    /// Flip the password display toggle.
    pub fn toggle_show_password(&mut self) {
        self.form.toggle_show_password();
    }

    /// Whether the password field renders plain.
    pub fn show_password(&self) -> bool {
        self.form.show_password
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SessionState::Submitted
    }

    /// The error store from the most recent failed validation attempt.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The current message for one field, if its last validation failed.
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.message_for(field)
    }

    /// Run validation against the current field store.
    ///
    /// On success the session transitions to *Submitted*, the error store is
    /// cleared, and the normalized record goes to the navigator. On failure
    /// the session stays in *Editing* and the error store is replaced
    /// wholesale with this attempt's failures. A submitted session never
    /// submits again; the call is a no-op returning false.
    pub fn submit(&mut self, nav: &mut dyn Navigator) -> bool {
        if self.state == SessionState::Submitted {
            return false;
        }

        match self.validator.validate(&self.form) {
            Ok(registration) => {
                self.errors = ValidationErrors::new();
                self.state = SessionState::Submitted;
                nav.navigate(ViewId::Success, registration);
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records navigations for assertions.
    #[derive(Default)]
    struct RecordingNavigator {
        calls: Vec<(ViewId, Registration)>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, view: ViewId, payload: Registration) {
            self.calls.push((view, payload));
        }
    }

    fn fill_valid(session: &mut FormSession) {
        session.set(Field::FirstName, "Ravi");
        session.set(Field::LastName, "Iyer");
        session.set(Field::Username, "ravi");
        session.set(Field::Email, "ravi@example.in");
        session.set(Field::Password, "secret");
        session.set(Field::PhoneNumber, "7000000000");
        session.set(Field::City, "Pune");
        session.set(Field::Pan, "ABCDE1234F");
        session.set(Field::Aadhar, "999988887777");
    }

    #[test]
    fn test_submit_valid_navigates_once() {
        let mut session = FormSession::new();
        let mut nav = RecordingNavigator::default();
        fill_valid(&mut session);

        assert!(session.submit(&mut nav));
        assert!(session.is_submitted());
        assert!(session.errors().is_empty());
        assert_eq!(nav.calls.len(), 1);

        let (view, payload) = &nav.calls[0];
        assert_eq!(*view, ViewId::Success);
        assert_eq!(payload.username, "ravi");
        assert_eq!(payload.country, "India");
    }

    #[test]
    fn test_submit_invalid_stays_editing() {
        let mut session = FormSession::new();
        let mut nav = RecordingNavigator::default();

        assert!(!session.submit(&mut nav));
        assert_eq!(session.state(), SessionState::Editing);
        assert!(nav.calls.is_empty());
        assert_eq!(
            session.error_for(Field::FirstName),
            Some("First name is required")
        );
    }

    #[test]
    fn test_errors_replaced_wholesale_between_attempts() {
        let mut session = FormSession::new();
        let mut nav = RecordingNavigator::default();
        fill_valid(&mut session);
        session.set(Field::Email, "bad");
        session.set(Field::City, "");

        assert!(!session.submit(&mut nav));
        assert_eq!(session.errors().len(), 2);

        // Fix one field; the next attempt's store must not keep its stale entry.
        session.set(Field::City, "Delhi");
        assert!(!session.submit(&mut nav));
        assert_eq!(session.errors().len(), 1);
        assert!(session.error_for(Field::City).is_none());
        assert_eq!(session.error_for(Field::Email), Some("Invalid email"));
    }

    #[test]
    fn test_errors_persist_while_editing() {
        let mut session = FormSession::new();
        let mut nav = RecordingNavigator::default();

        session.submit(&mut nav);
        assert!(!session.errors().is_empty());

        // Typing does not clear the store; only the next attempt rebuilds it.
        session.set(Field::FirstName, "A");
        assert_eq!(
            session.error_for(Field::FirstName),
            Some("First name is required")
        );
    }

    #[test]
    fn test_submitted_is_terminal() {
        let mut session = FormSession::new();
        let mut nav = RecordingNavigator::default();
        fill_valid(&mut session);

        assert!(session.submit(&mut nav));
        assert!(!session.submit(&mut nav));
        assert_eq!(nav.calls.len(), 1);

        // Edits after submission are ignored.
        session.set(Field::Username, "other");
        assert_eq!(session.get(Field::Username), "ravi");
    }
}
