//! Scalar values stored in cookie metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single scalar cookie attribute value.
///
/// Serialized untagged, so a metadata map round-trips through JSON as plain
/// `null`, booleans, numbers and strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Explicit null. Reads as "not set" through the typed getters.
    Null,
    /// Boolean flag (e.g., `secure`, `http_only`).
    Bool(bool),
    /// Integer value (e.g., `duration` in seconds).
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value (e.g., `domain`, `path`, `samesite`).
    Str(String),
}

impl AttributeValue {
    /// Converts a dynamic JSON value into a scalar attribute value.
    ///
    /// Returns `None` for arrays and objects, which cannot be stored.
    #[must_use]
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::Null => Some(Self::Null),
            Value::Bool(b) => Some(Self::Bool(b)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float)),
            Value::String(s) => Some(Self::Str(s)),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Returns `true` for an explicit null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string slice if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the flag if this is a boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number as a float for integer and float values.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(AttributeValue::from_json(json!(null)), Some(AttributeValue::Null));
        assert_eq!(
            AttributeValue::from_json(json!(true)),
            Some(AttributeValue::Bool(true))
        );
        assert_eq!(
            AttributeValue::from_json(json!(3600)),
            Some(AttributeValue::Int(3600))
        );
        assert_eq!(
            AttributeValue::from_json(json!(1.5)),
            Some(AttributeValue::Float(1.5))
        );
        assert_eq!(
            AttributeValue::from_json(json!("example.com")),
            Some(AttributeValue::Str("example.com".to_string()))
        );
    }

    #[test]
    fn test_from_json_rejects_containers() {
        assert_eq!(AttributeValue::from_json(json!([1, 2])), None);
        assert_eq!(AttributeValue::from_json(json!({"a": 1})), None);
    }

    #[test]
    fn test_serde_untagged_round_trip_shape() {
        let values = vec![
            AttributeValue::Null,
            AttributeValue::Bool(false),
            AttributeValue::Int(-7),
            AttributeValue::Float(0.25),
            AttributeValue::Str("/".to_string()),
        ];
        let encoded = serde_json::to_string(&values).unwrap();
        assert_eq!(encoded, r#"[null,false,-7,0.25,"/"]"#);

        let decoded: Vec<AttributeValue> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn test_typed_views() {
        let s = AttributeValue::from("Lax");
        assert_eq!(s.as_str(), Some("Lax"));
        assert_eq!(s.as_bool(), None);

        let b = AttributeValue::from(true);
        assert_eq!(b.as_bool(), Some(true));
        assert_eq!(b.as_str(), None);

        let n = AttributeValue::from(86_400_i64);
        assert_eq!(n.as_int(), Some(86_400));
        assert_eq!(n.as_float(), Some(86_400.0));
        assert_eq!(AttributeValue::Float(2.5).as_int(), None);
    }

    #[test]
    fn test_option_conversion_maps_none_to_null() {
        assert!(AttributeValue::from(None::<&str>).is_null());
        assert_eq!(
            AttributeValue::from(Some("x")),
            AttributeValue::Str("x".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(AttributeValue::Null.to_string(), "null");
        assert_eq!(AttributeValue::Bool(true).to_string(), "true");
        assert_eq!(AttributeValue::Int(42).to_string(), "42");
        assert_eq!(AttributeValue::from("Strict").to_string(), "Strict");
    }
}
