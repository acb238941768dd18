//! # formbind
//!
//! Reactive form controls with validators, bound to reusable input widgets.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `formbind` to get everything, or on individual crates
//! for finer-grained control.
//!
//! ## Example
//!
//! ```rust,no_run
//! use formbind::core::settings_loader;
//! use formbind::forms::form::ConfiguredForm;
//!
//! let settings = settings_loader::from_toml_file_with_env("config/name_form.toml").unwrap();
//! formbind::core::logging::setup_logging(&settings);
//!
//! let mut form = ConfiguredForm::from_settings(&settings).unwrap();
//! form.edit("name", "A").unwrap();
//! form.blur("name", "A").unwrap();
//! assert_eq!(form.error_messages()["name"], "Should be min 2 symbols");
//! ```

/// Settings, configuration loading, error types, and logging setup.
pub use formbind_core as core;

/// Form controls, validators, and bound input widgets.
#[cfg(feature = "forms")]
pub use formbind_forms as forms;

/// Testing utilities: notifier recorders, fixtures, and assertions.
#[cfg(feature = "testing")]
pub use formbind_test as test;

/// Commonly used types, importable with `use formbind::prelude::*`.
pub mod prelude {
    pub use formbind_core::{FormbindError, FormbindResult, Settings};

    #[cfg(feature = "forms")]
    pub use formbind_forms::{
        accessor::{ValidatorSource, ValueAccessor},
        directive::bind_control,
        form::ConfiguredForm,
        validators::{self, Validator},
        BoundInput, ControlStatus, ErrorKind, FormControl, SharedControl, ValidationErrors,
        ValidationFailure, Value, WidgetConfig, WidgetStyles,
    };
}

// Third-party re-exports
pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;
