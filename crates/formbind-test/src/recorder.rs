//! Notifier capture for testing widgets.
//!
//! [`NotifierRecorder`] hands out change and touch notifiers that append to a
//! shared event log instead of updating a control. Register them on a widget,
//! drive the widget, then inspect what it reported and in which order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use formbind_forms::accessor::ValueAccessor;
//! use formbind_forms::value::Value;
//! use formbind_forms::widget::{BoundInput, WidgetConfig};
//! use formbind_test::recorder::{NotifierEvent, NotifierRecorder};
//!
//! let recorder = NotifierRecorder::new();
//! let mut widget = BoundInput::new(WidgetConfig::default());
//! widget.register_on_change(recorder.change_notifier());
//! widget.register_on_touched(recorder.touch_notifier());
//!
//! widget.on_edit("a");
//! widget.on_focus_lost("a");
//!
//! assert_eq!(
//!     recorder.events(),
//!     vec![NotifierEvent::Change(Value::from("a")), NotifierEvent::Touch]
//! );
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use formbind_forms::accessor::{ChangeNotifier, TouchNotifier};
use formbind_forms::value::Value;

/// One notification delivered by a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum NotifierEvent {
    /// The change notifier was called with this value.
    Change(Value),
    /// The touch notifier was called.
    Touch,
}

/// Records notifier calls in delivery order.
///
/// Cloning shares the underlying log, so notifiers handed out by one clone
/// are visible through every other.
#[derive(Debug, Clone, Default)]
pub struct NotifierRecorder {
    events: Rc<RefCell<Vec<NotifierEvent>>>,
}

impl NotifierRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a change notifier that records into this recorder.
    pub fn change_notifier(&self) -> ChangeNotifier {
        let events = Rc::clone(&self.events);
        Box::new(move |value: &Value| {
            events
                .borrow_mut()
                .push(NotifierEvent::Change(value.clone()));
        })
    }

    /// Returns a touch notifier that records into this recorder.
    pub fn touch_notifier(&self) -> TouchNotifier {
        let events = Rc::clone(&self.events);
        Box::new(move || events.borrow_mut().push(NotifierEvent::Touch))
    }

    /// Returns a snapshot of every recorded event.
    pub fn events(&self) -> Vec<NotifierEvent> {
        self.events.borrow().clone()
    }

    /// Returns the values passed to change notifiers, in order.
    pub fn changes(&self) -> Vec<Value> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                NotifierEvent::Change(value) => Some(value.clone()),
                NotifierEvent::Touch => None,
            })
            .collect()
    }

    /// Returns how many times a touch notifier fired.
    pub fn touch_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, NotifierEvent::Touch))
            .count()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Clears the log.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
