//! Form controls: a value, its validator chain, and derived status.
//!
//! A [`FormControl`] recomputes its errors every time its value changes, by
//! running the whole chain (see [`run_validators`]). Interaction state is
//! tracked separately: `touched` flips once the user leaves the input and
//! never flips back; `dirty` flips once the user edits the value.
//!
//! Controls are shared between a host form and a bound widget as a
//! [`SharedControl`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::accessor::DisabledNotifier;
use crate::errors::{ErrorKind, ValidationErrors, ValidationFailure};
use crate::validators::{run_validators, Validator};
use crate::value::Value;

/// A control shared between a host form and the widget bound to it.
pub type SharedControl = Rc<RefCell<FormControl>>;

/// The validation status of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStatus {
    /// Every rule passed.
    Valid,
    /// At least one rule failed.
    Invalid,
    /// The control is disabled and exempt from validation.
    Disabled,
}

impl fmt::Display for ControlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Valid => "VALID",
            Self::Invalid => "INVALID",
            Self::Disabled => "DISABLED",
        };
        f.write_str(name)
    }
}

/// A single form field's value and validation state.
///
/// # Examples
///
/// ```
/// use formbind_forms::control::FormControl;
/// use formbind_forms::errors::ErrorKind;
/// use formbind_forms::validators;
///
/// let mut control = FormControl::new(
///     "",
///     validators::boxed([validators::required(), validators::max_length(3)]),
/// );
/// assert!(control.has_error(ErrorKind::Required));
///
/// control.set_value("abcd");
/// assert!(control.has_error(ErrorKind::MaxLength));
///
/// control.set_value("abc");
/// assert!(control.valid());
/// ```
pub struct FormControl {
    value: Value,
    validators: Vec<Box<dyn Validator>>,
    errors: Option<ValidationErrors>,
    touched: bool,
    dirty: bool,
    disabled: bool,
    on_disabled_change: Vec<DisabledNotifier>,
}

impl FormControl {
    /// Creates a control and computes its initial errors.
    pub fn new(value: impl Into<Value>, validators: Vec<Box<dyn Validator>>) -> Self {
        let mut control = Self {
            value: value.into(),
            validators,
            errors: None,
            touched: false,
            dirty: false,
            disabled: false,
            on_disabled_change: Vec::new(),
        };
        control.update_value_and_validity();
        control
    }

    /// Wraps the control for sharing with a widget.
    pub fn into_shared(self) -> SharedControl {
        Rc::new(RefCell::new(self))
    }

    // ── Value ────────────────────────────────────────────────────────

    /// Returns the current value.
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Stores a new value and recomputes errors from the whole chain.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
        self.update_value_and_validity();
        tracing::debug!(
            value = %self.value,
            status = %self.status(),
            "control value set"
        );
    }

    // ── Validators ───────────────────────────────────────────────────

    /// Returns the validator chain.
    pub fn validators(&self) -> &[Box<dyn Validator>] {
        &self.validators
    }

    /// Replaces the validator chain.
    ///
    /// Errors are not recomputed until the next value change or an explicit
    /// [`update_value_and_validity`](Self::update_value_and_validity).
    pub fn set_validators(&mut self, validators: Vec<Box<dyn Validator>>) {
        tracing::trace!(count = validators.len(), "validators replaced");
        self.validators = validators;
    }

    /// Appends a validator to the chain. Errors are not recomputed.
    pub fn add_validator(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Removes every validator. Errors are not recomputed.
    pub fn clear_validators(&mut self) {
        self.validators.clear();
    }

    /// Recomputes errors from the current value and chain.
    ///
    /// Disabled controls always end up with no errors.
    pub fn update_value_and_validity(&mut self) {
        self.errors = if self.disabled {
            None
        } else {
            run_validators(&self.value, &self.validators)
        };
    }

    // ── Errors ───────────────────────────────────────────────────────

    /// Returns the current failures, or `None` when valid.
    pub const fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    /// Overrides the current errors.
    ///
    /// The override lasts until the next recomputation. Empty sets are
    /// stored as `None`.
    pub fn set_errors(&mut self, errors: Option<ValidationErrors>) {
        self.errors = errors.and_then(ValidationErrors::into_option);
    }

    /// Returns `true` if a failure of the given kind is present.
    pub fn has_error(&self, kind: ErrorKind) -> bool {
        self.errors.as_ref().is_some_and(|e| e.contains(kind))
    }

    /// Returns the failure of the given kind, if present.
    pub fn get_error(&self, kind: ErrorKind) -> Option<&ValidationFailure> {
        self.errors.as_ref().and_then(|e| e.get(kind))
    }

    // ── Status ───────────────────────────────────────────────────────

    /// Returns the validation status.
    pub const fn status(&self) -> ControlStatus {
        if self.disabled {
            ControlStatus::Disabled
        } else if self.errors.is_some() {
            ControlStatus::Invalid
        } else {
            ControlStatus::Valid
        }
    }

    /// Returns `true` when the status is [`ControlStatus::Valid`].
    pub const fn valid(&self) -> bool {
        matches!(self.status(), ControlStatus::Valid)
    }

    /// Returns `true` when at least one rule failed.
    pub const fn invalid(&self) -> bool {
        matches!(self.status(), ControlStatus::Invalid)
    }

    // ── Interaction state ────────────────────────────────────────────

    /// Marks the control as touched. Idempotent; errors and value are kept.
    pub fn mark_touched(&mut self) {
        if !self.touched {
            tracing::debug!("control touched");
        }
        self.touched = true;
    }

    /// Returns `true` once the user has left the input.
    pub const fn touched(&self) -> bool {
        self.touched
    }

    /// Returns `true` until the user has left the input.
    pub const fn untouched(&self) -> bool {
        !self.touched
    }

    /// Marks the value as changed from the view.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns `true` once the user has edited the value.
    pub const fn dirty(&self) -> bool {
        self.dirty
    }

    /// Returns `true` until the user has edited the value.
    pub const fn pristine(&self) -> bool {
        !self.dirty
    }

    // ── Enabled state ────────────────────────────────────────────────

    /// Disables the control, exempting it from validation.
    ///
    /// Every disabled-change notifier is called with `true`.
    pub fn disable(&mut self) {
        self.disabled = true;
        self.update_value_and_validity();
        self.notify_disabled_change();
        tracing::debug!("control disabled");
    }

    /// Enables the control and recomputes its errors.
    ///
    /// Every disabled-change notifier is called with `false`.
    pub fn enable(&mut self) {
        self.disabled = false;
        self.update_value_and_validity();
        self.notify_disabled_change();
        tracing::debug!(status = %self.status(), "control enabled");
    }

    /// Adds a notifier called on every later `disable` or `enable`.
    ///
    /// Notifiers accumulate: several views may mirror one control.
    pub fn register_on_disabled_change(&mut self, notifier: DisabledNotifier) {
        self.on_disabled_change.push(notifier);
    }

    fn notify_disabled_change(&mut self) {
        let disabled = self.disabled;
        for notify in &mut self.on_disabled_change {
            notify(disabled);
        }
    }

    /// Returns `true` while the control is disabled.
    pub const fn disabled(&self) -> bool {
        self.disabled
    }
}

impl fmt::Debug for FormControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormControl")
            .field("value", &self.value)
            .field("validators", &self.validators)
            .field("errors", &self.errors)
            .field("touched", &self.touched)
            .field("dirty", &self.dirty)
            .field("disabled", &self.disabled)
            .field("on_disabled_change", &self.on_disabled_change.len())
            .finish()
    }
}
