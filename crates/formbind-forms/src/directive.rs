//! Wiring between a control and the widget that edits it.
//!
//! [`bind_control`] plays the part a host framework's form directive would:
//! it seeds the widget with the control's value, registers notifiers that
//! feed view events back into the control, keeps the widget's disabled state
//! in step with the control, and lets the widget take part in validation.

use std::rc::Rc;

use crate::accessor::{ValidatorSource, ValueAccessor};
use crate::control::SharedControl;
use crate::value::Value;

/// Binds `widget` to `control`.
///
/// After binding:
/// - an edit in the widget marks the control dirty and sets its value;
/// - a blur in the widget marks the control touched;
/// - the widget shows the control's current value and disabled state;
/// - later `disable`/`enable` calls on the control reach the widget, when
///   the widget provides a disabled-state notifier;
/// - errors reported by the widget itself are merged into the control's
///   errors until the next recomputation.
pub fn bind_control<W>(widget: &mut W, control: &SharedControl)
where
    W: ValueAccessor + ValidatorSource,
{
    let (value, disabled) = {
        let c = control.borrow();
        (c.value().clone(), c.disabled())
    };
    widget.write_value(value);

    let on_change = Rc::clone(control);
    widget.register_on_change(Box::new(move |value: &Value| {
        let mut c = on_change.borrow_mut();
        c.mark_dirty();
        c.set_value(value.clone());
    }));

    let on_touched = Rc::clone(control);
    widget.register_on_touched(Box::new(move || on_touched.borrow_mut().mark_touched()));

    widget.set_disabled_state(disabled);
    if let Some(notifier) = widget.disabled_state_notifier() {
        control.borrow_mut().register_on_disabled_change(notifier);
    }

    if let Some(local) = widget.validate(control) {
        let mut c = control.borrow_mut();
        let mut errors = c.errors().cloned().unwrap_or_default();
        errors.merge(local);
        c.set_errors(Some(errors));
    }

    tracing::debug!(disabled, "control bound");
}
