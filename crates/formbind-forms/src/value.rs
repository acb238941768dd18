//! Dynamic values held by form controls.
//!
//! The [`Value`] enum is what flows between a widget and the control it is
//! bound to. A text input produces strings, a number input may produce
//! numbers, and a freshly created control may hold nothing at all.

use std::fmt;

use formbind_core::FormbindError;

/// A dynamically typed control value.
///
/// # Examples
///
/// ```
/// use formbind_forms::value::Value;
///
/// let v = Value::from("hello");
/// assert_eq!(v, Value::String("hello".to_string()));
/// assert!(!v.is_empty());
/// assert!(Value::from("").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value.
    #[default]
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A UTF-8 string.
    String(String),
}

impl Value {
    /// Returns `true` for `Null` and for the empty string.
    ///
    /// Emptiness is what `required` checks and what length and range rules
    /// skip.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            Self::Bool(_) | Self::Int(_) | Self::Float(_) => false,
        }
    }

    /// Returns the length in characters for strings, `None` otherwise.
    pub fn char_len(&self) -> Option<usize> {
        match self {
            Self::String(s) => Some(s.chars().count()),
            _ => None,
        }
    }

    /// Coerces the value to a number the way range rules read it.
    ///
    /// Integers and floats convert directly. Strings yield their longest
    /// numeric prefix after leading whitespace, so `"1a"` reads as `1` and
    /// `"abc"` as nothing. `NaN` is never returned.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Self::Int(i) => *i as f64,
            Self::Float(f) => *f,
            Self::String(s) => leading_number(s)?,
            Self::Null | Self::Bool(_) => return None,
        };
        (!n.is_nan()).then_some(n)
    }

    /// Returns the string slice for string values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// Parses the longest numeric prefix of `s`, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// exponent only when digits follow the `e`. `Infinity` is recognised.
fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

// ── From implementations ───────────────────────────────────────────────

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = FormbindError;

    /// Converts a scalar JSON value. Arrays and objects are rejected.
    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        match json {
            serde_json::Value::Null => Ok(Self::Null),
            serde_json::Value::Bool(b) => Ok(Self::Bool(b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .ok_or_else(|| {
                    FormbindError::ConfigurationError(format!("Unsupported number: {n}"))
                }),
            serde_json::Value::String(s) => Ok(Self::String(s)),
            other => Err(FormbindError::ConfigurationError(format!(
                "Control values must be scalars, got {other}"
            ))),
        }
    }
}
