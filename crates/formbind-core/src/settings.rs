//! Settings for formbind.
//!
//! This module provides the [`Settings`] struct, which holds logging options,
//! message overrides, and the per-field configuration a form is built from.
//! Validator chains live here as plain data ([`ValidatorRule`]) so that they
//! can be supplied from configuration files instead of being hardcoded.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormbindError, FormbindResult};

/// The placeholder shown by an input when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "Enter value...";

/// The kinds of input a bound widget can present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Free text.
    #[default]
    Text,
    /// Numeric entry.
    Number,
    /// Date picker.
    Calendar,
    /// Color picker.
    Color,
}

impl InputType {
    /// Returns the lowercase name used in configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Calendar => "calendar",
            Self::Color => "color",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = FormbindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "number" => Ok(Self::Number),
            "calendar" => Ok(Self::Calendar),
            "color" => Ok(Self::Color),
            other => Err(FormbindError::ConfigurationError(format!(
                "Unknown input type '{other}' (expected text, number, calendar or color)"
            ))),
        }
    }
}

/// A single built-in validation rule, as written in configuration.
///
/// In TOML a rule is a table tagged by `rule`:
///
/// ```toml
/// [[fields.name.validators]]
/// rule = "max_length"
/// length = 20
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidatorRule {
    /// The value must not be empty.
    Required,
    /// Non-empty strings must have at least `length` characters.
    MinLength {
        /// Minimum number of characters.
        length: usize,
    },
    /// Strings must have at most `length` characters.
    MaxLength {
        /// Maximum number of characters.
        length: usize,
    },
    /// Numeric values must not be lower than `value`.
    Min {
        /// Lower bound (inclusive).
        value: f64,
    },
    /// Numeric values must not be larger than `value`.
    Max {
        /// Upper bound (inclusive).
        value: f64,
    },
}

/// Configuration for one form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// The kind of input the widget presents.
    pub input_type: InputType,
    /// Human-readable label.
    pub label: String,
    /// Placeholder text. Falls back to [`Settings::default_placeholder`].
    pub placeholder: Option<String>,
    /// The value the control starts with.
    pub initial: serde_json::Value,
    /// The validator chain, evaluated in order.
    pub validators: Vec<ValidatorRule>,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            input_type: InputType::Text,
            label: String::new(),
            placeholder: None,
            initial: serde_json::Value::String(String::new()),
            validators: Vec::new(),
        }
    }
}

impl FieldSettings {
    /// Checks the validator chain for contradictory bounds.
    ///
    /// Every rule of a chain applies, so the tightest bounds decide: the
    /// largest `min_length` against the smallest `max_length`, and likewise
    /// for `min` and `max`.
    pub fn check(&self, name: &str) -> FormbindResult<()> {
        let mut min_length: Option<usize> = None;
        let mut max_length: Option<usize> = None;
        let mut min: Option<f64> = None;
        let mut max: Option<f64> = None;

        for rule in &self.validators {
            match *rule {
                ValidatorRule::Required => {}
                ValidatorRule::MinLength { length } => {
                    min_length = Some(min_length.map_or(length, |lo| lo.max(length)));
                }
                ValidatorRule::MaxLength { length } => {
                    max_length = Some(max_length.map_or(length, |hi| hi.min(length)));
                }
                ValidatorRule::Min { value } | ValidatorRule::Max { value }
                    if !value.is_finite() =>
                {
                    return Err(FormbindError::ImproperlyConfigured(format!(
                        "field '{name}': numeric bound {value} is not finite"
                    )));
                }
                ValidatorRule::Min { value } => {
                    min = Some(min.map_or(value, |lo| lo.max(value)));
                }
                ValidatorRule::Max { value } => {
                    max = Some(max.map_or(value, |hi| hi.min(value)));
                }
            }
        }

        if let (Some(lo), Some(hi)) = (min_length, max_length) {
            if lo > hi {
                return Err(FormbindError::ImproperlyConfigured(format!(
                    "field '{name}': min_length {lo} exceeds max_length {hi}"
                )));
            }
        }
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(FormbindError::ImproperlyConfigured(format!(
                    "field '{name}': min {lo} exceeds max {hi}"
                )));
            }
        }
        Ok(())
    }
}

/// The complete set of formbind settings.
///
/// # Examples
///
/// ```
/// use formbind_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.default_placeholder, "Enter value...");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled (pretty logs instead of JSON).
    pub debug: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log filter (e.g. "info", "formbind_forms=debug").
    pub log_level: String,

    // ── Widgets ──────────────────────────────────────────────────────

    /// Placeholder used by fields that do not set their own.
    pub default_placeholder: String,
    /// Error message templates keyed by error kind
    /// (`required`, `maxlength`, `minlength`, `max`, `min`).
    /// `{n}` is replaced by the rule's parameter.
    pub messages: HashMap<String, String>,

    // ── Fields ───────────────────────────────────────────────────────

    /// Field configurations keyed by field name.
    pub fields: BTreeMap<String, FieldSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            default_placeholder: DEFAULT_PLACEHOLDER.to_string(),
            messages: HashMap::new(),
            fields: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Checks every configured field, returning the first problem found.
    pub fn check(&self) -> FormbindResult<()> {
        for (name, field) in &self.fields {
            field.check(name)?;
        }
        Ok(())
    }

    /// Returns the placeholder a field should display.
    pub fn placeholder_for<'a>(&'a self, field: &'a FieldSettings) -> &'a str {
        field
            .placeholder
            .as_deref()
            .unwrap_or(&self.default_placeholder)
    }
}
