//! JSON type tags recognized by the `type` keyword.

use serde_json::Value;
use std::{convert::TryFrom, fmt};

/// For faster handling in the `type` keyword validator we have this enum, to
/// match with it instead of a string.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[allow(missing_docs)]
pub enum PrimitiveType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
}

impl PrimitiveType {
    /// Whether `instance` is of this type. `integer` accepts any integral
    /// numeric value regardless of its representation width.
    pub(crate) fn matches(self, instance: &Value) -> bool {
        match self {
            PrimitiveType::Array => instance.is_array(),
            PrimitiveType::Boolean => instance.is_boolean(),
            PrimitiveType::Integer => is_integer(instance),
            PrimitiveType::Null => instance.is_null(),
            PrimitiveType::Number => instance.is_number(),
            PrimitiveType::Object => instance.is_object(),
            PrimitiveType::String => instance.is_string(),
        }
    }
}

pub(crate) fn is_integer(instance: &Value) -> bool {
    instance.is_u64()
        || instance.is_i64()
        || instance.as_f64().map(|f| f.fract() == 0.).unwrap_or(false)
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveType::Array => write!(f, "array"),
            PrimitiveType::Boolean => write!(f, "boolean"),
            PrimitiveType::Integer => write!(f, "integer"),
            PrimitiveType::Null => write!(f, "null"),
            PrimitiveType::Number => write!(f, "number"),
            PrimitiveType::Object => write!(f, "object"),
            PrimitiveType::String => write!(f, "string"),
        }
    }
}

impl TryFrom<&str> for PrimitiveType {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "array" => Ok(PrimitiveType::Array),
            "boolean" => Ok(PrimitiveType::Boolean),
            "integer" => Ok(PrimitiveType::Integer),
            "null" => Ok(PrimitiveType::Null),
            "number" => Ok(PrimitiveType::Number),
            "object" => Ok(PrimitiveType::Object),
            "string" => Ok(PrimitiveType::String),
            _ => Err(()),
        }
    }
}
