//! End-to-end tests for the registration domain: field store defaults,
//! validation outcomes, and the shape of the record that crosses the
//! navigation boundary.

use regform_lib::{
    CITIES, Field, FormSession, Navigator, Registration, RegistrationForm, ViewId,
};

struct LastNavigation {
    last: Option<(ViewId, Registration)>,
}

impl Navigator for LastNavigation {
    fn navigate(&mut self, view: ViewId, payload: Registration) {
        self.last = Some((view, payload));
    }
}

fn filled_session() -> FormSession {
    let mut session = FormSession::new();
    session.set(Field::FirstName, "Meera");
    session.set(Field::LastName, "Shah");
    session.set(Field::Username, "meera_s");
    session.set(Field::Email, "meera@example.com");
    session.set(Field::Password, "pa55word");
    session.set(Field::PhoneNumber, "8123456789");
    session.set(Field::City, "Hyderabad");
    session.set(Field::Pan, "QWERT5678Y");
    session.set(Field::Aadhar, "111122223333");
    session
}

#[test]
fn test_defaults_applied_on_fresh_form() {
    let form = RegistrationForm::new();
    assert_eq!(form.get(Field::PhoneCountryCode), "+91");
    assert_eq!(form.get(Field::Country), "India");
    assert!(!form.show_password);
    for field in [Field::FirstName, Field::Email, Field::Pan, Field::Aadhar] {
        assert_eq!(form.get(field), "");
    }
}

#[test]
fn test_set_preserves_other_fields() {
    let mut form = RegistrationForm::new();
    form.set(Field::FirstName, "Meera");
    form.set(Field::City, "Chennai");
    assert_eq!(form.get(Field::FirstName), "Meera");
    assert_eq!(form.get(Field::City), "Chennai");
    assert_eq!(form.get(Field::Country), "India");
    assert_eq!(form.get(Field::LastName), "");
}

#[test]
fn test_city_set_has_seven_fixed_options() {
    assert_eq!(CITIES.len(), 7);
    assert!(CITIES.contains(&"Mumbai"));
    assert!(CITIES.contains(&"Kolkata"));
}

#[test]
fn test_submit_payload_echoes_input_with_defaults() {
    let mut session = filled_session();
    let mut nav = LastNavigation { last: None };

    assert!(session.submit(&mut nav));
    let (view, payload) = nav.last.expect("navigation happened");
    assert_eq!(view, ViewId::Success);

    assert_eq!(payload.get(Field::FirstName), "Meera");
    assert_eq!(payload.get(Field::PhoneNumber), "8123456789");
    assert_eq!(payload.get(Field::PhoneCountryCode), "+91");
    assert_eq!(payload.get(Field::Country), "India");
}

#[test]
fn test_payload_has_exactly_the_schema_fields() {
    let mut session = filled_session();
    session.toggle_show_password();
    let mut nav = LastNavigation { last: None };
    assert!(session.submit(&mut nav));
    let (_, payload) = nav.last.unwrap();

    let entries: Vec<_> = payload.entries().collect();
    assert_eq!(entries.len(), 11);

    let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        [
            "firstName",
            "lastName",
            "username",
            "email",
            "password",
            "phoneCountryCode",
            "phoneNumber",
            "country",
            "city",
            "pan",
            "aadhar",
        ]
    );
    assert!(!keys.contains(&"showPassword"));
}

#[test]
fn test_payload_serializes_camel_case_without_toggle() {
    let mut session = filled_session();
    let mut nav = LastNavigation { last: None };
    assert!(session.submit(&mut nav));
    let (_, payload) = nav.last.unwrap();

    let json = serde_json::to_value(&payload).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 11);
    assert_eq!(object["firstName"], "Meera");
    assert_eq!(object["phoneCountryCode"], "+91");
    assert!(!object.contains_key("showPassword"));
}

#[test]
fn test_missing_required_fields_each_surface_a_message() {
    let mut session = FormSession::new();
    let mut nav = LastNavigation { last: None };
    assert!(!session.submit(&mut nav));

    let expected = [
        (Field::FirstName, "First name is required"),
        (Field::LastName, "Last name is required"),
        (Field::Username, "Username is required"),
        (Field::Email, "Invalid email"),
        (Field::Password, "Password is required"),
        (Field::PhoneNumber, "Invalid Indian phone number"),
        (Field::City, "City is required"),
        (Field::Pan, "Invalid PAN format"),
        (Field::Aadhar, "Invalid Aadhar number"),
    ];
    for (field, message) in expected {
        assert_eq!(session.error_for(field), Some(message), "{field}");
    }
}

#[test]
fn test_pan_substring_accepted_end_to_end() {
    let mut session = filled_session();
    session.set(Field::Pan, "ZZZZZ9999Zxyz");
    let mut nav = LastNavigation { last: None };
    assert!(session.submit(&mut nav));
    let (_, payload) = nav.last.unwrap();
    assert_eq!(payload.get(Field::Pan), "ZZZZZ9999Zxyz");
}
