//! A reusable input widget that plugs into a form control.
//!
//! [`BoundInput`] keeps its own copy of the displayed value, forwards edits
//! and blurs to whichever notifiers the host registered, and reads the bound
//! control back to decide how to style itself and which message to show.
//!
//! The widget never owns validation: it reports no errors of its own and
//! only mirrors the control's `touched` and `errors` state.
//!
//! This mirrors a custom form element that implements both the value
//! accessor and validator contracts of a host form.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use formbind_core::settings::{FieldSettings, InputType, Settings, DEFAULT_PLACEHOLDER};

use crate::accessor::{
    ChangeNotifier, DisabledNotifier, TouchNotifier, ValidatorSource, ValueAccessor,
};
use crate::control::SharedControl;
use crate::errors::ValidationErrors;
use crate::messages::{MessageTemplates, FALLBACK_MESSAGE};
use crate::value::Value;

/// CSS class set when the widget holds a value.
pub const HAS_VALUE_CLASS: &str = "has-value";

/// CSS class set when the widget should display its error.
pub const ERROR_CLASS: &str = "border-danger";

/// Presentation settings for a widget, fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// The kind of input presented.
    pub input_type: InputType,
    /// Human-readable label.
    pub label: String,
    /// Placeholder shown while empty.
    pub placeholder: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            input_type: InputType::Text,
            label: String::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Creates a config with the default placeholder.
    pub fn new(input_type: InputType, label: impl Into<String>) -> Self {
        Self {
            input_type,
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Builds the config for a configured field.
    pub fn from_field(settings: &Settings, field: &FieldSettings) -> Self {
        Self {
            input_type: field.input_type,
            label: field.label.clone(),
            placeholder: settings.placeholder_for(field).to_string(),
        }
    }
}

/// Styling flags derived from the widget and its control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetStyles {
    /// The widget holds a non-empty value.
    pub has_value: bool,
    /// The control is touched and invalid.
    pub show_error: bool,
}

impl WidgetStyles {
    /// Maps the flags onto CSS class names.
    pub fn classes(&self) -> BTreeMap<&'static str, bool> {
        BTreeMap::from([
            (HAS_VALUE_CLASS, self.has_value),
            (ERROR_CLASS, self.show_error),
        ])
    }
}

/// An input widget bound to a [`FormControl`](crate::control::FormControl).
pub struct BoundInput {
    config: WidgetConfig,
    value: Value,
    disabled: Rc<Cell<bool>>,
    on_change: Option<ChangeNotifier>,
    on_touched: Option<TouchNotifier>,
    control: Option<SharedControl>,
    messages: MessageTemplates,
}

impl BoundInput {
    /// Creates an unbound widget.
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            value: Value::Null,
            disabled: Rc::new(Cell::new(false)),
            on_change: None,
            on_touched: None,
            control: None,
            messages: MessageTemplates::new(),
        }
    }

    /// Uses custom message templates.
    #[must_use]
    pub fn with_messages(mut self, messages: MessageTemplates) -> Self {
        self.messages = messages;
        self
    }

    /// Returns the widget's configuration.
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Returns the locally displayed value.
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns `true` while the widget is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Returns the control the widget reads its state from, if bound.
    pub const fn control(&self) -> Option<&SharedControl> {
        self.control.as_ref()
    }

    // ── View events ──────────────────────────────────────────────────

    /// Handles an edit: stores the value, then notifies the change listener.
    ///
    /// Disabled widgets ignore edits.
    pub fn on_edit(&mut self, value: impl Into<Value>) {
        if self.disabled.get() {
            tracing::trace!("edit ignored on disabled widget");
            return;
        }
        self.value = value.into();
        if let Some(notify) = self.on_change.as_mut() {
            notify(&self.value);
        }
    }

    /// Handles focus loss: stores the value, then notifies the touch listener.
    ///
    /// Disabled widgets ignore focus loss.
    pub fn on_focus_lost(&mut self, value: impl Into<Value>) {
        if self.disabled.get() {
            tracing::trace!("blur ignored on disabled widget");
            return;
        }
        self.value = value.into();
        if let Some(notify) = self.on_touched.as_mut() {
            notify();
        }
    }

    // ── Notifier registration ────────────────────────────────────────

    /// Installs the change notifier. Only the latest registration fires.
    pub fn register_change_notifier(&mut self, notifier: impl FnMut(&Value) + 'static) {
        self.register_on_change(Box::new(notifier));
    }

    /// Installs the touch notifier. Only the latest registration fires.
    pub fn register_touch_notifier(&mut self, notifier: impl FnMut() + 'static) {
        self.register_on_touched(Box::new(notifier));
    }

    // ── Control state ────────────────────────────────────────────────

    /// Records the control whose state the widget renders.
    ///
    /// The widget adds no checks of its own, so this always returns `None`.
    pub fn bind_validation_source(&mut self, control: SharedControl) -> Option<ValidationErrors> {
        tracing::debug!(label = %self.config.label, "widget bound to control");
        self.control = Some(control);
        None
    }

    /// Derives the styling flags.
    pub fn compute_styles(&self) -> WidgetStyles {
        let show_error = self
            .control
            .as_ref()
            .and_then(|c| c.try_borrow().ok())
            .is_some_and(|c| c.touched() && c.invalid());
        WidgetStyles {
            has_value: !self.value.is_empty(),
            show_error,
        }
    }

    /// Returns the message for the control's highest-precedence failure.
    ///
    /// Falls back to [`FALLBACK_MESSAGE`] when unbound or valid.
    pub fn error_message(&self) -> String {
        let Some(control) = self.control.as_ref() else {
            return FALLBACK_MESSAGE.to_string();
        };
        control.try_borrow().map_or_else(
            |_| FALLBACK_MESSAGE.to_string(),
            |c| self.messages.message_for(c.errors()),
        )
    }
}

impl ValueAccessor for BoundInput {
    fn write_value(&mut self, value: Value) {
        self.value = value;
    }

    fn register_on_change(&mut self, notifier: ChangeNotifier) {
        if self.on_change.replace(notifier).is_some() {
            tracing::debug!("change notifier replaced");
        }
    }

    fn register_on_touched(&mut self, notifier: TouchNotifier) {
        if self.on_touched.replace(notifier).is_some() {
            tracing::debug!("touch notifier replaced");
        }
    }

    fn set_disabled_state(&mut self, disabled: bool) {
        self.disabled.set(disabled);
    }

    fn disabled_state_notifier(&self) -> Option<DisabledNotifier> {
        let disabled = Rc::clone(&self.disabled);
        Some(Box::new(move |state: bool| {
            tracing::debug!(disabled = state, "widget disabled state changed");
            disabled.set(state);
        }))
    }
}

impl ValidatorSource for BoundInput {
    fn validate(&mut self, control: &SharedControl) -> Option<ValidationErrors> {
        self.bind_validation_source(Rc::clone(control))
    }
}

impl fmt::Debug for BoundInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundInput")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("disabled", &self.disabled.get())
            .field("on_change", &self.on_change.is_some())
            .field("on_touched", &self.on_touched.is_some())
            .field("bound", &self.control.is_some())
            .finish_non_exhaustive()
    }
}
