//! # formbind-core
//!
//! Core types, settings, and error types for the formbind workspace.
//! This crate has no dependency on the other formbind crates and provides
//! the foundation they build on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Library settings, field configuration, and validator rules
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{FormbindError, FormbindResult};
pub use settings::{FieldSettings, InputType, Settings, ValidatorRule};
