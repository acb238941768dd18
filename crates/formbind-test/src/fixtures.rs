//! Settings fixtures for the bundled form configurations.
//!
//! The TOML files under `config/` are compiled into this crate so tests can
//! build forms without touching the filesystem.

use formbind_core::settings::{FieldSettings, InputType, ValidatorRule};
use formbind_core::settings_loader;
use formbind_core::{FormbindResult, Settings};

/// Configuration of the name form: a single `name` field of 2 to 20
/// characters.
pub const NAME_FORM_TOML: &str = include_str!("../../../config/name_form.toml");

/// Configuration of the earlier name form: `name` is required, at most two
/// characters, and numerically between 2 and 20.
pub const NAME_FORM_LEGACY_TOML: &str = include_str!("../../../config/name_form_legacy.toml");

/// Name of the field both bundled configurations define.
pub const NAME_FIELD: &str = "name";

/// Loads the name form settings.
///
/// # Errors
///
/// Returns an error if the bundled configuration fails to parse.
pub fn name_form() -> FormbindResult<Settings> {
    settings_loader::from_toml_str(NAME_FORM_TOML)
}

/// Loads the earlier name form settings.
///
/// # Errors
///
/// Returns an error if the bundled configuration fails to parse.
pub fn name_form_legacy() -> FormbindResult<Settings> {
    settings_loader::from_toml_str(NAME_FORM_LEGACY_TOML)
}

/// Builds settings holding one text field with the given rules.
pub fn single_field(name: &str, validators: Vec<ValidatorRule>) -> Settings {
    let mut settings = Settings::default();
    settings.fields.insert(
        name.to_string(),
        FieldSettings {
            input_type: InputType::Text,
            label: name.to_string(),
            validators,
            ..FieldSettings::default()
        },
    );
    settings
}
