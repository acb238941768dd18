//! Integration tests for the control <-> widget pipeline.
//!
//! These tests drive a widget the way a host view would (edits and blurs)
//! and check what the bound control and the widget's rendering state
//! report back:
//! 1. Validation determinism and collection of every failure
//! 2. Touch semantics and styling
//! 3. Message precedence
//! 4. Notifier replacement and event ordering

use std::cell::RefCell;
use std::rc::Rc;

use formbind_core::settings::InputType;
use formbind_forms::accessor::ValueAccessor;
use formbind_forms::control::{FormControl, SharedControl};
use formbind_forms::directive::bind_control;
use formbind_forms::errors::{ErrorKind, ValidationErrors, ValidationFailure};
use formbind_forms::validators::{self, boxed, run_validators, Validator};
use formbind_forms::value::Value;
use formbind_forms::widget::{BoundInput, WidgetConfig};

// ============================================================================
// Shared helpers
// ============================================================================

/// The validator chain of the first name form: present, at most two
/// characters, numerically between 2 and 20.
fn legacy_chain() -> Vec<Box<dyn Validator>> {
    boxed([
        validators::required(),
        validators::max_length(2),
        validators::min(2.0),
        validators::max(20.0),
    ])
}

/// The validator chain of the second name form: 2 to 20 characters.
fn name_chain() -> Vec<Box<dyn Validator>> {
    boxed([validators::min_length(2), validators::max_length(20)])
}

fn bound(chain: Vec<Box<dyn Validator>>) -> (SharedControl, BoundInput) {
    let control = FormControl::new("", chain).into_shared();
    let mut widget = BoundInput::new(WidgetConfig::new(InputType::Text, "Name"));
    bind_control(&mut widget, &control);
    (control, widget)
}

fn kinds(control: &SharedControl) -> Vec<ErrorKind> {
    control
        .borrow()
        .errors()
        .map(|e| e.kinds().collect())
        .unwrap_or_default()
}

// ============================================================================
// 1. Validation
// ============================================================================

#[test]
fn test_errors_match_direct_recompute_for_many_inputs() {
    let (control, mut widget) = bound(legacy_chain());
    let inputs = [
        "", "1", "2", "20", "21", "ab", "abc", " 5 ", "-3", "1e1", "١٢",
    ];
    for input in inputs {
        widget.on_edit(input);
        let direct = run_validators(&Value::from(input), &legacy_chain());
        assert_eq!(
            control.borrow().errors(),
            direct.as_ref(),
            "mismatch for input {input:?}"
        );
    }
}

#[test]
fn test_every_failure_is_collected() {
    let (control, mut widget) = bound(legacy_chain());

    widget.on_edit("1");
    assert_eq!(kinds(&control), vec![ErrorKind::Min]);

    widget.on_edit("100");
    assert_eq!(kinds(&control), vec![ErrorKind::MaxLength, ErrorKind::Max]);

    widget.on_edit("");
    assert_eq!(kinds(&control), vec![ErrorKind::Required]);

    widget.on_edit("5");
    assert!(kinds(&control).is_empty());
}

#[test]
fn test_numeric_prefix_counts_for_range_rules() {
    let (control, mut widget) = bound(legacy_chain());

    widget.on_edit("1a");
    assert_eq!(kinds(&control), vec![ErrorKind::Min]);
    assert_eq!(
        control.borrow().get_error(ErrorKind::Min),
        Some(&ValidationFailure::Min {
            min: 2.0,
            actual: Value::from("1a")
        })
    );
    widget.on_focus_lost("1a");
    assert_eq!(widget.error_message(), "Value shouldn't be lower than 2");

    widget.on_edit("9x");
    assert!(control.borrow().valid());
}

#[test]
fn test_name_chain_bounds() {
    let (control, mut widget) = bound(name_chain());

    widget.on_edit("A");
    assert_eq!(
        control.borrow().get_error(ErrorKind::MinLength),
        Some(&ValidationFailure::MinLength {
            required_length: 2,
            actual_length: 1
        })
    );

    widget.on_edit("x".repeat(21));
    assert_eq!(
        control.borrow().get_error(ErrorKind::MaxLength),
        Some(&ValidationFailure::MaxLength {
            required_length: 20,
            actual_length: 21
        })
    );

    widget.on_edit("Ada Lovelace");
    assert!(control.borrow().valid());
}

#[test]
fn test_errors_serialize_as_keyed_map() {
    let (control, mut widget) = bound(name_chain());
    widget.on_edit("x".repeat(25));
    let json = serde_json::to_value(control.borrow().errors().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"maxlength": {"requiredLength": 20, "actualLength": 25}})
    );
}

// ============================================================================
// 2. Touch semantics and styling
// ============================================================================

#[test]
fn test_show_error_false_while_untouched() {
    let (control, mut widget) = bound(legacy_chain());
    for input in ["", "1", "100", "abc"] {
        widget.on_edit(input);
        assert!(control.borrow().invalid());
        assert!(!widget.compute_styles().show_error);
    }
}

#[test]
fn test_mark_touched_idempotent_keeps_errors_and_value() {
    let (control, mut widget) = bound(legacy_chain());
    widget.on_edit("100");
    let before: Option<ValidationErrors> = control.borrow().errors().cloned();

    widget.on_focus_lost("100");
    widget.on_focus_lost("100");
    control.borrow_mut().mark_touched();

    let c = control.borrow();
    assert!(c.touched());
    assert_eq!(c.errors().cloned(), before);
    assert_eq!(c.value(), &Value::from("100"));
}

#[test]
fn test_blur_does_not_change_control_value() {
    let (control, mut widget) = bound(name_chain());
    widget.on_edit("Ada");
    widget.on_focus_lost("Ada (unsent)");
    assert_eq!(control.borrow().value(), &Value::from("Ada"));
    assert_eq!(widget.value(), &Value::from("Ada (unsent)"));
}

#[test]
fn test_has_value_follows_local_value() {
    let (_control, mut widget) = bound(name_chain());
    assert!(!widget.compute_styles().has_value);
    widget.on_edit("A");
    assert!(widget.compute_styles().has_value);
    widget.on_edit("");
    assert!(!widget.compute_styles().has_value);
}

#[test]
fn test_classes_after_touch() {
    let (_control, mut widget) = bound(legacy_chain());
    widget.on_edit("abc");
    widget.on_focus_lost("abc");
    let classes = widget.compute_styles().classes();
    assert!(classes["has-value"]);
    assert!(classes["border-danger"]);
}

// ============================================================================
// 3. Message precedence
// ============================================================================

#[test]
fn test_required_wins_over_max_length() {
    let control = FormControl::new("", Vec::new()).into_shared();
    control.borrow_mut().set_errors(Some(
        [
            ValidationFailure::MaxLength {
                required_length: 2,
                actual_length: 3,
            },
            ValidationFailure::Required,
        ]
        .into_iter()
        .collect(),
    ));
    let mut widget = BoundInput::new(WidgetConfig::default());
    widget.bind_validation_source(Rc::clone(&control));
    assert_eq!(widget.error_message(), "Field is required");
}

#[test]
fn test_exact_message_texts() {
    let (control, mut widget) = bound(legacy_chain());

    widget.on_edit("1");
    assert_eq!(widget.error_message(), "Value shouldn't be lower than 2");

    widget.on_edit("99");
    assert_eq!(widget.error_message(), "Value shouldn't be larger than 20");

    widget.on_edit("999");
    assert_eq!(widget.error_message(), "Should be max 2 symbols");

    widget.on_edit("5");
    assert!(control.borrow().valid());
    assert_eq!(widget.error_message(), "No validator");
}

#[test]
fn test_max_length_message_with_twenty() {
    let (_control, mut widget) = bound(name_chain());
    widget.on_edit("abcdefghijklmnopqrstu");
    assert_eq!(widget.error_message(), "Should be max 20 symbols");
}

// ============================================================================
// 4. Notifiers and ordering
// ============================================================================

#[test]
fn test_new_change_notifier_replaces_binding() {
    let (control, mut widget) = bound(name_chain());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    widget.register_change_notifier(move |v| sink.borrow_mut().push(v.clone()));

    widget.on_edit("Grace");
    assert_eq!(*seen.borrow(), vec![Value::from("Grace")]);
    // The control's notifier was replaced and no longer fires.
    assert_eq!(control.borrow().value(), &Value::from(""));
}

#[test]
fn test_events_are_delivered_in_order() {
    let log = Rc::new(RefCell::new(Vec::<String>::new()));
    let mut widget = BoundInput::new(WidgetConfig::default());

    let change_log = Rc::clone(&log);
    widget.register_change_notifier(move |v| change_log.borrow_mut().push(format!("change:{v}")));
    let touch_log = Rc::clone(&log);
    widget.register_touch_notifier(move || touch_log.borrow_mut().push("touch".to_string()));

    widget.on_edit("a");
    widget.on_focus_lost("a");
    widget.on_edit("ab");

    assert_eq!(*log.borrow(), vec!["change:a", "touch", "change:ab"]);
}

#[test]
fn test_write_value_does_not_notify() {
    let (control, mut widget) = bound(name_chain());
    widget.write_value(Value::from("shown only"));
    assert_eq!(widget.value(), &Value::from("shown only"));
    assert_eq!(control.borrow().value(), &Value::from(""));
    assert!(control.borrow().pristine());
}

#[test]
fn test_disable_and_enable_round() {
    let (control, mut widget) = bound(legacy_chain());
    control.borrow_mut().disable();
    assert!(widget.is_disabled());

    widget.on_edit("999");
    assert!(!control.borrow().invalid());
    assert!(control.borrow().pristine());
    assert_eq!(control.borrow().value(), &Value::from(""));

    control.borrow_mut().enable();
    assert!(!widget.is_disabled());
    widget.on_edit("999");
    assert!(control.borrow().invalid());
}
