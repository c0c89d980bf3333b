//! # Typed scalar values.
//!
//! [`Value`] is shared by parameter parsing and the change-detection cache.
//! Equality is type-sensitive: `Value::Int(10)` and `Value::Str("10")` are
//! different values even though they print the same.

use std::fmt;

/// A typed scalar decoded from a parameter string or read from a device.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Anything that is neither.
    Str(String),
}

impl Value {
    /// Coerces a raw string: try integer first, then float, else keep the
    /// string. The first successful parse wins.
    ///
    /// # Example
    /// ```
    /// use pollvisor::Value;
    ///
    /// assert_eq!(Value::coerce("9600"), Value::Int(9600));
    /// assert_eq!(Value::coerce("2.5"), Value::Float(2.5));
    /// assert_eq!(Value::coerce("N"), Value::Str("N".into()));
    /// ```
    pub fn coerce(raw: &str) -> Self {
        if let Ok(i) = raw.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(f) = raw.parse::<f64>() {
            return Value::Float(f);
        }
        Value::Str(raw.to_string())
    }

    /// Returns the integer value, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float value. Integers widen to float; strings do not.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coercion_order_int_first() {
        assert_eq!(Value::coerce("9600"), Value::Int(9600));
        assert_eq!(Value::coerce("-3"), Value::Int(-3));
        assert_eq!(Value::coerce("2.5"), Value::Float(2.5));
        assert_eq!(Value::coerce("1e3"), Value::Float(1000.0));
        assert_eq!(Value::coerce("N"), Value::Str("N".into()));
        assert_eq!(Value::coerce(""), Value::Str(String::new()));
    }

    #[test]
    fn test_equality_is_type_sensitive() {
        assert_ne!(Value::Int(10), Value::Str("10".into()));
        assert_ne!(Value::Int(10), Value::Float(10.0));
        assert_eq!(Value::Int(10), Value::Int(10));
        assert_eq!(Value::Str("10".into()), Value::Str("10".into()));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Int(7).as_float(), Some(7.0));
        assert_eq!(Value::Float(0.5).as_float(), Some(0.5));
        assert_eq!(Value::Str("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Str("8".into()).as_int(), None);
    }
}
