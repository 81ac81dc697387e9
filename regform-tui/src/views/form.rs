//! The registration form view

use crossterm::style::Color;
use regform_lib::model::{CITIES, DEFAULT_COUNTRY, DEFAULT_DIAL_CODE};
use regform_lib::{Field, FormSession, Navigator};

use crate::event::{Key, KeyEvent};
use crate::screen::{Line, Span, Style};
use crate::widgets::{Checkbox, InputOutcome, Select, TextInput};

/// One focusable control on the form, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    FirstName,
    LastName,
    Username,
    Email,
    Pan,
    Aadhar,
    Password,
    ShowPassword,
    PhoneCountryCode,
    PhoneNumber,
    Country,
    City,
}

const FOCUS_ORDER: [Control; 12] = [
    Control::FirstName,
    Control::LastName,
    Control::Username,
    Control::Email,
    Control::Pan,
    Control::Aadhar,
    Control::Password,
    Control::ShowPassword,
    Control::PhoneCountryCode,
    Control::PhoneNumber,
    Control::Country,
    Control::City,
];

impl Control {
    /// The schema field this control edits; the show-password toggle has none.
    fn field(self) -> Option<Field> {
        match self {
            Control::FirstName => Some(Field::FirstName),
            Control::LastName => Some(Field::LastName),
            Control::Username => Some(Field::Username),
            Control::Email => Some(Field::Email),
            Control::Pan => Some(Field::Pan),
            Control::Aadhar => Some(Field::Aadhar),
            Control::Password => Some(Field::Password),
            Control::ShowPassword => None,
            Control::PhoneCountryCode => Some(Field::PhoneCountryCode),
            Control::PhoneNumber => Some(Field::PhoneNumber),
            Control::Country => Some(Field::Country),
            Control::City => Some(Field::City),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Control::FirstName => "First Name",
            Control::LastName => "Last Name",
            Control::Username => "Username",
            Control::Email => "Email ID",
            Control::Pan => "PAN Number",
            Control::Aadhar => "Aadhar Number",
            Control::Password => "Password",
            Control::ShowPassword => "Show Password",
            Control::PhoneCountryCode => "Country Code",
            Control::PhoneNumber => "Phone Number",
            Control::Country => "Country",
            Control::City => "City",
        }
    }
}

/// Label column width; values start right after it.
const LABEL_WIDTH: usize = 15;
/// Focus marker column width.
const MARKER_WIDTH: usize = 2;

/// The form view: field widgets, focus traversal, and write-through to the
/// session's field store on every edit.
#[derive(Debug)]
pub struct FormView {
    session: FormSession,
    first_name: TextInput,
    last_name: TextInput,
    username: TextInput,
    email: TextInput,
    pan: TextInput,
    aadhar: TextInput,
    password: TextInput,
    phone_country_code: TextInput,
    phone_number: TextInput,
    show_password: Checkbox,
    country: Select,
    city: Select,
    focus: usize,
}

impl FormView {
    pub fn new() -> Self {
        let mut password = TextInput::new();
        password.set_masked(true);

        let mut country = Select::new([DEFAULT_COUNTRY]);
        country.select(0);

        Self {
            session: FormSession::new(),
            first_name: TextInput::new(),
            last_name: TextInput::new(),
            username: TextInput::new(),
            email: TextInput::new(),
            pan: TextInput::new(),
            aadhar: TextInput::new(),
            password,
            phone_country_code: TextInput::with_value(DEFAULT_DIAL_CODE),
            phone_number: TextInput::new(),
            show_password: Checkbox::new("Show Password"),
            country,
            city: Select::new(CITIES).with_placeholder("-- Select City --"),
            focus: 0,
        }
    }

    fn focused(&self) -> Control {
        FOCUS_ORDER[self.focus]
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FOCUS_ORDER.len();
    }

    fn focus_prev(&mut self) {
        self.focus = self.focus.checked_sub(1).unwrap_or(FOCUS_ORDER.len() - 1);
    }

    fn input(&self, control: Control) -> Option<&TextInput> {
        match control {
            Control::FirstName => Some(&self.first_name),
            Control::LastName => Some(&self.last_name),
            Control::Username => Some(&self.username),
            Control::Email => Some(&self.email),
            Control::Pan => Some(&self.pan),
            Control::Aadhar => Some(&self.aadhar),
            Control::Password => Some(&self.password),
            Control::PhoneCountryCode => Some(&self.phone_country_code),
            Control::PhoneNumber => Some(&self.phone_number),
            _ => None,
        }
    }

    fn input_mut(&mut self, control: Control) -> Option<&mut TextInput> {
        match control {
            Control::FirstName => Some(&mut self.first_name),
            Control::LastName => Some(&mut self.last_name),
            Control::Username => Some(&mut self.username),
            Control::Email => Some(&mut self.email),
            Control::Pan => Some(&mut self.pan),
            Control::Aadhar => Some(&mut self.aadhar),
            Control::Password => Some(&mut self.password),
            Control::PhoneCountryCode => Some(&mut self.phone_country_code),
            Control::PhoneNumber => Some(&mut self.phone_number),
            _ => None,
        }
    }

    /// Route a key press to the focused control. Tab/BackTab move focus,
    /// Ctrl+S submits from anywhere, Enter submits from text inputs and
    /// selects.
    pub fn handle_key(&mut self, event: KeyEvent, nav: &mut dyn Navigator) {
        if event.modifiers.ctrl && event.key == Key::Char('s') {
            self.submit(nav);
            return;
        }

        match event.key {
            Key::Tab => self.focus_next(),
            Key::BackTab => self.focus_prev(),
            _ => self.dispatch(event, nav),
        }
    }

    fn dispatch(&mut self, event: KeyEvent, nav: &mut dyn Navigator) {
        match self.focused() {
            Control::ShowPassword => {
                if self.show_password.handle_key(event.key) {
                    self.session.toggle_show_password();
                    self.password.set_masked(!self.session.show_password());
                }
            }
            Control::Country => {
                if self.country.handle_key(event.key) {
                    let value = self.country.value().to_string();
                    self.session.set(Field::Country, value);
                } else if event.key == Key::Enter {
                    self.submit(nav);
                }
            }
            Control::City => {
                if self.city.handle_key(event.key) {
                    let value = self.city.value().to_string();
                    self.session.set(Field::City, value);
                } else if event.key == Key::Enter {
                    self.submit(nav);
                }
            }
            control => self.handle_input(control, event, nav),
        }
    }

    fn handle_input(&mut self, control: Control, event: KeyEvent, nav: &mut dyn Navigator) {
        let Some(field) = control.field() else {
            return;
        };
        let outcome = match self.input_mut(control) {
            Some(input) => input.handle_key(event.key, event.modifiers),
            None => return,
        };
        match outcome {
            InputOutcome::Changed => {
                let value = self
                    .input(control)
                    .map(|i| i.value().to_string())
                    .unwrap_or_default();
                self.session.set(field, value);
            }
            InputOutcome::Submitted => self.submit(nav),
            InputOutcome::Handled | InputOutcome::Ignored => {}
        }
    }

    fn submit(&mut self, nav: &mut dyn Navigator) {
        if self.session.submit(nav) {
            log::debug!("submission accepted, navigating to summary");
        } else {
            log::debug!(
                "submission rejected: {} field error(s)",
                self.session.errors().len()
            );
        }
    }

    /// Build the frame. Also returns the terminal cursor position when a
    /// text input is focused.
    pub fn render(&self) -> (Vec<Line>, Option<(u16, u16)>) {
        let title = Style::new().fg(Color::Cyan).bold();
        let muted = Style::new().dim();
        let error = Style::new().fg(Color::Red);
        let focus_marker = Style::new().fg(Color::Cyan);

        let mut lines = vec![
            Line::styled("Indian Registration Form", title),
            Line::styled(
                "Tab next field · Shift+Tab previous · Enter or Ctrl+S submit · Ctrl+Q quit",
                muted,
            ),
            Line::empty(),
        ];
        let mut cursor = None;

        for (index, control) in FOCUS_ORDER.into_iter().enumerate() {
            let is_focused = index == self.focus;
            let mut line = Line::empty();
            line.push(if is_focused {
                Span::styled("› ", focus_marker)
            } else {
                Span::raw("  ")
            });

            match control {
                Control::ShowPassword => {
                    line.push(Span::raw(format!(
                        "{} {}",
                        self.show_password.indicator(),
                        self.show_password.label()
                    )));
                }
                Control::Country | Control::City => {
                    let select = if control == Control::Country {
                        &self.country
                    } else {
                        &self.city
                    };
                    line.push(Span::raw(format!(
                        "{:<width$}",
                        control.label(),
                        width = LABEL_WIDTH
                    )));
                    if select.is_placeholder() {
                        line.push(Span::styled(select.display(), muted));
                    } else {
                        line.push(Span::raw(select.display()));
                    }
                    if is_focused {
                        line.push(Span::styled("  ↑/↓", muted));
                    }
                }
                control => {
                    line.push(Span::raw(format!(
                        "{:<width$}",
                        control.label(),
                        width = LABEL_WIDTH
                    )));
                    if let Some(input) = self.input(control) {
                        line.push(Span::raw(input.display_value()));
                        if is_focused {
                            let col = (MARKER_WIDTH + LABEL_WIDTH + input.cursor_col()) as u16;
                            cursor = Some((col, lines.len() as u16));
                        }
                    }
                }
            }
            lines.push(line);

            // Error message below the field it belongs to.
            if let Some(field) = control.field()
                && let Some(message) = self.session.error_for(field)
            {
                let mut error_line = Line::empty();
                error_line.push(Span::raw(" ".repeat(MARKER_WIDTH + LABEL_WIDTH)));
                error_line.push(Span::styled(message, error));
                lines.push(error_line);
            }
        }

        (lines, cursor)
    }
}

impl Default for FormView {
    fn default() -> Self {
        Self::new()
    }
}
