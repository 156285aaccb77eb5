use std::fmt;

/// A loosely typed value stored in a [`crate::RecordHolder`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl RecordValue {
    /// Infer a value from its written form: integer, then float, then
    /// boolean, falling back to text.
    pub fn infer(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            return RecordValue::Int(n);
        }
        if let Ok(f) = raw.parse::<f64>() {
            if f.is_finite() {
                return RecordValue::Float(f);
            }
        }
        match raw {
            "true" => RecordValue::Bool(true),
            "false" => RecordValue::Bool(false),
            _ => RecordValue::Text(raw.to_string()),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            RecordValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RecordValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Int(n) => write!(f, "{n}"),
            RecordValue::Float(x) => write!(f, "{x}"),
            RecordValue::Bool(b) => write!(f, "{b}"),
            RecordValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordValue {
    fn from(value: i64) -> Self {
        RecordValue::Int(value)
    }
}

impl From<i32> for RecordValue {
    fn from(value: i32) -> Self {
        RecordValue::Int(value.into())
    }
}

impl From<u32> for RecordValue {
    fn from(value: u32) -> Self {
        RecordValue::Int(value.into())
    }
}

impl From<f64> for RecordValue {
    fn from(value: f64) -> Self {
        RecordValue::Float(value)
    }
}

impl From<bool> for RecordValue {
    fn from(value: bool) -> Self {
        RecordValue::Bool(value)
    }
}

impl From<&str> for RecordValue {
    fn from(value: &str) -> Self {
        RecordValue::Text(value.to_string())
    }
}

impl From<String> for RecordValue {
    fn from(value: String) -> Self {
        RecordValue::Text(value)
    }
}
