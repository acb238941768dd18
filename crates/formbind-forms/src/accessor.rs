//! The contracts a custom widget implements to act like a native input.
//!
//! A widget that implements [`ValueAccessor`] can receive values from a
//! control and push edits and touches back through registered notifiers.
//! A widget that implements [`ValidatorSource`] takes part in its control's
//! validation. [`bind_control`](crate::directive::bind_control) wires both.

use crate::control::SharedControl;
use crate::errors::ValidationErrors;
use crate::value::Value;

/// Callback invoked with the new value after every edit.
pub type ChangeNotifier = Box<dyn FnMut(&Value)>;

/// Callback invoked after the user leaves the input.
pub type TouchNotifier = Box<dyn FnMut()>;

/// Callback invoked with a control's new disabled state.
pub type DisabledNotifier = Box<dyn FnMut(bool)>;

/// Reads and writes a control's value from the view side.
pub trait ValueAccessor {
    /// Displays `value` without notifying anyone.
    fn write_value(&mut self, value: Value);

    /// Installs the change notifier, replacing any previous one.
    fn register_on_change(&mut self, notifier: ChangeNotifier);

    /// Installs the touch notifier, replacing any previous one.
    fn register_on_touched(&mut self, notifier: TouchNotifier);

    /// Mirrors the control's disabled state. The default ignores it.
    fn set_disabled_state(&mut self, _disabled: bool) {}

    /// Returns a notifier that applies later disabled-state changes.
    ///
    /// Binding registers it with the control, so `disable` and `enable`
    /// reach the accessor after bind time. Accessors returning `None` (the
    /// default) only see the state the control had when they were bound.
    fn disabled_state_notifier(&self) -> Option<DisabledNotifier> {
        None
    }
}

/// Contributes validation results to a bound control.
pub trait ValidatorSource {
    /// Receives the control being validated and returns any errors the
    /// source itself detects.
    fn validate(&mut self, control: &SharedControl) -> Option<ValidationErrors>;
}
