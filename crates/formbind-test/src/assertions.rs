//! Assertion helpers for control and form state.
//!
//! Each helper panics with a message naming the field or control state it
//! inspected, which reads better in test output than a bare `assert_eq!`
//! on nested options.

use formbind_forms::control::SharedControl;
use formbind_forms::errors::ErrorKind;
use formbind_forms::form::ConfiguredForm;

/// Asserts that a control reports exactly `expected` failure kinds, in
/// precedence order.
///
/// # Panics
///
/// Panics if the reported kinds differ.
pub fn assert_error_kinds(control: &SharedControl, expected: &[ErrorKind]) {
    let actual: Vec<ErrorKind> = control
        .borrow()
        .errors()
        .map(|errors| errors.kinds().collect())
        .unwrap_or_default();
    assert_eq!(
        actual, expected,
        "expected error kinds {expected:?}, got {actual:?}"
    );
}

/// Asserts that a control has no errors.
///
/// # Panics
///
/// Panics if the control reports any failure.
pub fn assert_valid(control: &SharedControl) {
    let c = control.borrow();
    assert!(
        c.errors().is_none(),
        "expected a valid control, got errors {:?}",
        c.errors()
    );
}

/// Asserts the message a form field currently displays.
///
/// `None` means the field shows no message (untouched or valid).
///
/// # Panics
///
/// Panics if the displayed message differs.
pub fn assert_field_message(form: &ConfiguredForm, field: &str, expected: Option<&str>) {
    let messages = form.error_messages();
    let actual = messages.get(field).map(String::as_str);
    assert_eq!(
        actual, expected,
        "field '{field}' displays {actual:?}, expected {expected:?}"
    );
}
