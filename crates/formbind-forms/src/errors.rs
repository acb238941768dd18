//! Structured validation failures.
//!
//! A failing rule produces a [`ValidationFailure`]; a control collects every
//! failure of its chain into [`ValidationErrors`], keyed by [`ErrorKind`].
//! These are plain data. Nothing here is ever raised as an error.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::value::Value;

/// The kind of a validation failure.
///
/// Variants are declared in message precedence order, so the derived `Ord`
/// (and therefore iteration over [`ValidationErrors`]) follows
/// [`ErrorKind::PRECEDENCE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// The value was empty.
    Required,
    /// The string was too long.
    MaxLength,
    /// The string was too short.
    MinLength,
    /// The number was too large.
    Max,
    /// The number was too small.
    Min,
}

impl ErrorKind {
    /// The order in which kinds are considered when choosing a message.
    pub const PRECEDENCE: [Self; 5] = [
        Self::Required,
        Self::MaxLength,
        Self::MinLength,
        Self::Max,
        Self::Min,
    ];

    /// Returns the error code used as a key in serialized error maps.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MaxLength => "maxlength",
            Self::MinLength => "minlength",
            Self::Max => "max",
            Self::Min => "min",
        }
    }

    /// Looks up a kind by its error code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::PRECEDENCE.into_iter().find(|k| k.code() == code)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single rule failure with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationFailure {
    /// The value was empty.
    Required,
    /// The string had fewer characters than required.
    MinLength {
        /// The configured minimum.
        required_length: usize,
        /// The length that was found.
        actual_length: usize,
    },
    /// The string had more characters than allowed.
    MaxLength {
        /// The configured maximum.
        required_length: usize,
        /// The length that was found.
        actual_length: usize,
    },
    /// The number was below the minimum.
    Min {
        /// The configured minimum.
        min: f64,
        /// The control value, as entered.
        actual: Value,
    },
    /// The number was above the maximum.
    Max {
        /// The configured maximum.
        max: f64,
        /// The control value, as entered.
        actual: Value,
    },
}

impl ValidationFailure {
    /// Returns the kind of this failure.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Required => ErrorKind::Required,
            Self::MinLength { .. } => ErrorKind::MinLength,
            Self::MaxLength { .. } => ErrorKind::MaxLength,
            Self::Min { .. } => ErrorKind::Min,
            Self::Max { .. } => ErrorKind::Max,
        }
    }

    /// Returns the rule's configured bound, formatted for messages.
    ///
    /// `Required` has no parameter.
    pub fn parameter(&self) -> Option<String> {
        match self {
            Self::Required => None,
            Self::MinLength {
                required_length, ..
            }
            | Self::MaxLength {
                required_length, ..
            } => Some(required_length.to_string()),
            Self::Min { min, .. } => Some(min.to_string()),
            Self::Max { max, .. } => Some(max.to_string()),
        }
    }

    /// Returns the failure parameters in their JSON form.
    pub fn params(&self) -> serde_json::Value {
        match self {
            Self::Required => serde_json::Value::Bool(true),
            Self::MinLength {
                required_length,
                actual_length,
            }
            | Self::MaxLength {
                required_length,
                actual_length,
            } => serde_json::json!({
                "requiredLength": required_length,
                "actualLength": actual_length,
            }),
            Self::Min { min, actual } => serde_json::json!({ "min": min, "actual": actual }),
            Self::Max { max, actual } => serde_json::json!({ "max": max, "actual": actual }),
        }
    }
}

/// All failures of a control's validator chain, keyed by kind.
///
/// When two rules of the same kind fail, the later one is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    failures: BTreeMap<ErrorKind, ValidationFailure>,
}

impl ValidationErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure, replacing any earlier failure of the same kind.
    pub fn insert(&mut self, failure: ValidationFailure) {
        self.failures.insert(failure.kind(), failure);
    }

    /// Adds every failure from `other`.
    pub fn merge(&mut self, other: Self) {
        self.failures.extend(other.failures);
    }

    /// Returns the failure of the given kind, if present.
    pub fn get(&self, kind: ErrorKind) -> Option<&ValidationFailure> {
        self.failures.get(&kind)
    }

    /// Returns `true` if a failure of the given kind is present.
    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.failures.contains_key(&kind)
    }

    /// Returns the failure that wins under [`ErrorKind::PRECEDENCE`].
    pub fn first(&self) -> Option<&ValidationFailure> {
        ErrorKind::PRECEDENCE
            .iter()
            .find_map(|kind| self.failures.get(kind))
    }

    /// Iterates over the present kinds in precedence order.
    pub fn kinds(&self) -> impl Iterator<Item = ErrorKind> + '_ {
        self.failures.keys().copied()
    }

    /// Iterates over the failures in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationFailure> {
        self.failures.values()
    }

    /// Returns the number of failing kinds.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns `true` if no rule failed.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Converts an empty set to `None`, the form a control stores.
    pub fn into_option(self) -> Option<Self> {
        (!self.is_empty()).then_some(self)
    }
}

impl FromIterator<ValidationFailure> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(iter: I) -> Self {
        let mut errors = Self::new();
        for failure in iter {
            errors.insert(failure);
        }
        errors
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.failures.len()))?;
        for (kind, failure) in &self.failures {
            map.serialize_entry(kind.code(), &failure.params())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_round_trip() {
        for kind in ErrorKind::PRECEDENCE {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ErrorKind::from_code("pattern"), None);
    }

    #[test]
    fn test_ord_matches_precedence() {
        let mut sorted = ErrorKind::PRECEDENCE;
        sorted.sort();
        assert_eq!(sorted, ErrorKind::PRECEDENCE);
    }

    #[test]
    fn test_first_uses_precedence() {
        let errors: ValidationErrors = [
            ValidationFailure::Min {
                min: 2.0,
                actual: Value::from("1"),
            },
            ValidationFailure::MaxLength {
                required_length: 2,
                actual_length: 3,
            },
            ValidationFailure::Required,
        ]
        .into_iter()
        .collect();

        assert_eq!(errors.first(), Some(&ValidationFailure::Required));
        assert_eq!(
            errors.kinds().collect::<Vec<_>>(),
            vec![ErrorKind::Required, ErrorKind::MaxLength, ErrorKind::Min]
        );
    }

    #[test]
    fn test_parameter_formatting() {
        assert_eq!(ValidationFailure::Required.parameter(), None);
        let f = ValidationFailure::MinLength {
            required_length: 2,
            actual_length: 1,
        };
        assert_eq!(f.parameter().as_deref(), Some("2"));
        let f = ValidationFailure::Max {
            max: 20.0,
            actual: Value::from("21"),
        };
        assert_eq!(f.parameter().as_deref(), Some("20"));
        let f = ValidationFailure::Min {
            min: 0.5,
            actual: Value::Float(0.0),
        };
        assert_eq!(f.parameter().as_deref(), Some("0.5"));
    }

    #[test]
    fn test_into_option() {
        assert!(ValidationErrors::new().into_option().is_none());
        let errors: ValidationErrors = std::iter::once(ValidationFailure::Required).collect();
        assert!(errors.into_option().is_some());
    }

    #[test]
    fn test_merge_keeps_both_sides() {
        let mut a: ValidationErrors = std::iter::once(ValidationFailure::Required).collect();
        let b: ValidationErrors = std::iter::once(ValidationFailure::Max {
            max: 1.0,
            actual: Value::Int(2),
        })
        .collect();
        a.merge(b);
        assert_eq!(a.len(), 2);
        assert!(a.contains(ErrorKind::Max));
    }

    #[test]
    fn test_serialize_shape() {
        let errors: ValidationErrors = [
            ValidationFailure::Required,
            ValidationFailure::MaxLength {
                required_length: 20,
                actual_length: 25,
            },
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "required": true,
                "maxlength": { "requiredLength": 20, "actualLength": 25 }
            })
        );
    }

    #[test]
    fn test_serialize_range_failures_keep_raw_value() {
        let errors: ValidationErrors = [
            ValidationFailure::Min {
                min: 2.0,
                actual: Value::from("1"),
            },
            ValidationFailure::Max {
                max: 20.0,
                actual: Value::Int(30),
            },
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "max": { "max": 20.0, "actual": 30 },
                "min": { "min": 2.0, "actual": "1" }
            })
        );
    }
}
