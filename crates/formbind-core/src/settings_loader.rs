//! Settings loading from configuration files.
//!
//! This module provides functions to load [`Settings`] from TOML files, JSON
//! files, and to apply environment variable overrides.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! Loaded settings are checked with [`Settings::check`] before being returned.
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `FORMBIND_DEBUG` | `debug` |
//! | `FORMBIND_LOG_LEVEL` | `log_level` |
//! | `FORMBIND_DEFAULT_PLACEHOLDER` | `default_placeholder` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use formbind_core::settings_loader;
//!
//! // Load from TOML
//! let settings = settings_loader::from_toml_file("config/name_form.toml").unwrap();
//!
//! // Load from TOML with environment overrides
//! let settings = settings_loader::from_toml_file_with_env("config/name_form.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::FormbindError;
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// Any settings not present in the TOML keep their default values.
///
/// # Errors
///
/// Returns an error if the TOML is malformed, cannot be deserialized, or
/// describes an inconsistent field.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, FormbindError> {
    // TOML goes through serde_json::Value so it can be deep-merged over the
    // serialized defaults.
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| FormbindError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

    let json_value = toml_to_json(toml_value);
    let default_json = serde_json::to_value(Settings::default())?;

    let merged = merge_json(default_json, json_value);
    let settings: Settings = serde_json::from_value(merged).map_err(|e| {
        FormbindError::ConfigurationError(format!("Failed to deserialize settings from TOML: {e}"))
    })?;
    settings.check()?;
    tracing::debug!(fields = settings.fields.len(), "loaded settings from TOML");
    Ok(settings)
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns [`FormbindError::IoError`] if the file cannot be read, or a
/// configuration error if the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, FormbindError> {
    let content = read_settings_file(path.as_ref())?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, FormbindError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
///
/// # Errors
///
/// Returns [`FormbindError::SerializationError`] if the JSON is malformed,
/// and a configuration error if it cannot be deserialized into settings or
/// describes an inconsistent field.
pub fn from_json_str(json_str: &str) -> Result<Settings, FormbindError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)?;
    let default_json = serde_json::to_value(Settings::default())?;

    let merged = merge_json(default_json, json_value);
    let settings: Settings = serde_json::from_value(merged).map_err(|e| {
        FormbindError::ConfigurationError(format!("Failed to deserialize settings from JSON: {e}"))
    })?;
    settings.check()?;
    tracing::debug!(fields = settings.fields.len(), "loaded settings from JSON");
    Ok(settings)
}

/// Loads settings from a JSON file.
///
/// # Errors
///
/// Returns [`FormbindError::IoError`] if the file cannot be read, or
/// [`FormbindError::SerializationError`] if the JSON is malformed.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, FormbindError> {
    let content = read_settings_file(path.as_ref())?;
    from_json_str(&content)
}

/// Loads settings from a JSON file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> Result<Settings, FormbindError> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies environment variable overrides to a settings struct.
///
/// Supported environment variables:
///
/// - `FORMBIND_DEBUG` -> `debug` (values: "true"/"1"/"yes" => true, anything else => false)
/// - `FORMBIND_LOG_LEVEL` -> `log_level`
/// - `FORMBIND_DEFAULT_PLACEHOLDER` -> `default_placeholder`
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var("FORMBIND_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var("FORMBIND_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Ok(val) = std::env::var("FORMBIND_DEFAULT_PLACEHOLDER") {
        settings.default_placeholder = val;
    }
}

// ============================================================
// Helpers
// ============================================================

/// Reads a settings file, logging the path when it cannot be read.
fn read_settings_file(path: &Path) -> Result<String, FormbindError> {
    std::fs::read_to_string(path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "failed to read settings file");
        FormbindError::from(e)
    })
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}
