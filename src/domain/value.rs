//! Coerced configuration values.
//!
//! The backing file stores every value as text. A [`Value`] is the read-time
//! interpretation of that text: the first of boolean token, integer, float
//! that matches wins, and anything else stays a string.

use std::fmt;

const TRUE_TOKENS: [&str; 3] = ["yes", "true", "on"];
const FALSE_TOKENS: [&str; 3] = ["no", "false", "off"];

/// A raw configuration value after type inference.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Infer the type of `raw`.
    ///
    /// Boolean tokens are matched case-insensitively. Surrounding whitespace is
    /// ignored for numbers but a string result keeps `raw` unchanged.
    pub fn coerce(raw: &str) -> Self {
        if let Some(b) = parse_bool(raw) {
            return Value::Bool(b);
        }
        if let Ok(n) = raw.trim().parse::<i64>() {
            return Value::Int(n);
        }
        if let Ok(f) = raw.trim().parse::<f64>() {
            return Value::Float(f);
        }
        Value::Str(raw.to_string())
    }

    /// Name of the inferred type.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Integers widen to `f64`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// True for the sentinel returned when a key is missing.
    pub fn is_empty_str(&self) -> bool {
        matches!(self, Value::Str(s) if s.is_empty())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

/// Parse one of the boolean tokens `yes/no/true/false/on/off`, ignoring case.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let lowered = raw.to_ascii_lowercase();
    if TRUE_TOKENS.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_TOKENS.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

pub fn is_int(raw: &str) -> bool {
    raw.trim().parse::<i64>().is_ok()
}

pub fn is_float(raw: &str) -> bool {
    raw.trim().parse::<f64>().is_ok()
}
