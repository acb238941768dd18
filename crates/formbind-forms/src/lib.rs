//! # formbind-forms
//!
//! Form controls and bound input widgets. A [`control::FormControl`] holds a
//! value and a validator chain and keeps its errors in step with the value;
//! a [`widget::BoundInput`] edits a control through the value-accessor
//! contract and derives styling and a display message from it.
//!
//! ## Modules
//!
//! - [`value`] - Dynamic control values
//! - [`errors`] - Structured validation failures
//! - [`validators`] - The validator trait and built-in rules
//! - [`control`] - Form controls and their status
//! - [`accessor`] - Value-accessor and validator-source contracts
//! - [`widget`] - The bound input widget
//! - [`messages`] - Error message derivation
//! - [`directive`] - Wiring a widget to a control
//! - [`form`] - Forms built from configuration

pub mod accessor;
pub mod control;
pub mod directive;
pub mod errors;
pub mod form;
pub mod messages;
pub mod validators;
pub mod value;
pub mod widget;

pub use control::{ControlStatus, FormControl, SharedControl};
pub use errors::{ErrorKind, ValidationErrors, ValidationFailure};
pub use value::Value;
pub use widget::{BoundInput, WidgetConfig, WidgetStyles};
