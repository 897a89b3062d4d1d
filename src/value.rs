use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Numeral shape the translator coerces: optional sign, digits, optional
/// decimal part. Anchored on both ends so `12abc` stays textual.
static NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("numeral pattern is valid"));

/// A scalar value carried by a filter predicate.
///
/// The distinction between integers and floats is preserved so descriptors
/// round-trip through JSON without turning `2` into `2.0`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer number
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// UTF-8 string
    String(String),
}

impl Value {
    /// Coerce raw literal text into a value.
    ///
    /// Text matching the numeral pattern becomes [`Value::Integer`], or
    /// [`Value::Float`] when it carries a decimal part or overflows `i64`;
    /// everything else stays a string. The heuristic is lossy and
    /// locale-naive on purpose, and it lives here so the tokeniser and
    /// parser stay format-agnostic.
    pub fn from_literal_text(text: &str) -> Self {
        if NUMERAL.is_match(text) {
            if text.contains('.') {
                if let Ok(float) = text.parse::<f64>() {
                    return Value::Float(float);
                }
            } else if let Ok(int) = text.parse::<i64>() {
                return Value::Integer(int);
            } else if let Ok(float) = text.parse::<f64>() {
                // digits past i64 range keep their numeric reading
                return Value::Float(float);
            }
        }

        Value::String(text.to_string())
    }

    /// Check if the value is numeric (integer or float)
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}
