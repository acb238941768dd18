//! Validator rules for form controls.
//!
//! [`Validator`] is the seam every rule goes through. The built-in rules are
//! the configuration enum [`ValidatorRule`], re-exported from
//! `formbind-core`, and are constructed with the free functions in this
//! module:
//!
//! ```
//! use formbind_forms::validators::{self, Validator};
//! use formbind_forms::value::Value;
//!
//! let rule = validators::max_length(3);
//! assert!(rule.validate(&Value::from("abcd")).is_err());
//! ```
//!
//! All rules are independent: [`run_validators`] evaluates every rule of a
//! chain and collects all failures.

use std::fmt;

pub use formbind_core::settings::ValidatorRule;

use crate::errors::{ValidationErrors, ValidationFailure};
use crate::value::Value;

/// A pure check of a control value.
///
/// Implementations must be side-effect free: the same value always yields the
/// same result.
pub trait Validator: Send + Sync + fmt::Debug {
    /// Validates the given value, returning the failure if it does not pass.
    fn validate(&self, value: &Value) -> Result<(), ValidationFailure>;

    /// Returns a human-readable name for this validator.
    fn name(&self) -> &str;
}

impl Validator for ValidatorRule {
    fn validate(&self, value: &Value) -> Result<(), ValidationFailure> {
        match *self {
            Self::Required => {
                if value.is_empty() {
                    return Err(ValidationFailure::Required);
                }
            }
            Self::MinLength { length } => {
                if value.is_empty() {
                    return Ok(());
                }
                if let Some(actual_length) = value.char_len() {
                    if actual_length < length {
                        return Err(ValidationFailure::MinLength {
                            required_length: length,
                            actual_length,
                        });
                    }
                }
            }
            Self::MaxLength { length } => {
                if let Some(actual_length) = value.char_len() {
                    if actual_length > length {
                        return Err(ValidationFailure::MaxLength {
                            required_length: length,
                            actual_length,
                        });
                    }
                }
            }
            Self::Min { value: min } => {
                if value.as_number().is_some_and(|n| n < min) {
                    return Err(ValidationFailure::Min {
                        min,
                        actual: value.clone(),
                    });
                }
            }
            Self::Max { value: max } => {
                if value.as_number().is_some_and(|n| n > max) {
                    return Err(ValidationFailure::Max {
                        max,
                        actual: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self {
            Self::Required => "RequiredValidator",
            Self::MinLength { .. } => "MinLengthValidator",
            Self::MaxLength { .. } => "MaxLengthValidator",
            Self::Min { .. } => "MinValidator",
            Self::Max { .. } => "MaxValidator",
        }
    }
}

/// The value must not be empty.
pub const fn required() -> ValidatorRule {
    ValidatorRule::Required
}

/// Non-empty strings must have at least `length` characters.
pub const fn min_length(length: usize) -> ValidatorRule {
    ValidatorRule::MinLength { length }
}

/// Strings must have at most `length` characters.
pub const fn max_length(length: usize) -> ValidatorRule {
    ValidatorRule::MaxLength { length }
}

/// Numeric values must not be lower than `value`.
pub fn min(value: f64) -> ValidatorRule {
    ValidatorRule::Min { value }
}

/// Numeric values must not be larger than `value`.
pub fn max(value: f64) -> ValidatorRule {
    ValidatorRule::Max { value }
}

/// Boxes a list of rules into a validator chain.
pub fn boxed<I>(rules: I) -> Vec<Box<dyn Validator>>
where
    I: IntoIterator<Item = ValidatorRule>,
{
    rules
        .into_iter()
        .map(|rule| Box::new(rule) as Box<dyn Validator>)
        .collect()
}

/// Runs every validator against `value` and collects all failures.
///
/// Returns `None` when every rule passes.
pub fn run_validators(value: &Value, validators: &[Box<dyn Validator>]) -> Option<ValidationErrors> {
    validators
        .iter()
        .filter_map(|v| v.validate(value).err())
        .collect::<ValidationErrors>()
        .into_option()
}
