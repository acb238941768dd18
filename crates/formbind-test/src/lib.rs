//! # formbind-test
//!
//! Testing utilities for formbind. Provides notifier recorders that capture
//! the events a widget emits, settings fixtures for the bundled form
//! configurations, and assertion helpers for control state.

pub mod assertions;
pub mod fixtures;
pub mod recorder;

pub use recorder::{NotifierEvent, NotifierRecorder};
