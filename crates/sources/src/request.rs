//! The request accepted at the engine boundary.
//!
//! Requests arrive as JSON objects with optional string fields `need`,
//! `budget`, `audience` and `priority`. A missing field and an explicit
//! `null` mean the same thing; unknown fields are ignored. The only way
//! a request is rejected is when it is not an object, or when one of the
//! known fields holds something other than a string.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// The request payload could not be read as a `RecommendationRequest`.
///
/// Messages are safe to return to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("request body is not valid JSON: {0}")]
    Malformed(String),

    #[error("request must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("field `{field}` must be a string, got {found}")]
    InvalidField {
        field: &'static str,
        found: &'static str,
    },
}

/// A recommendation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl RecommendationRequest {
    /// Request with only a need
    pub fn with_need(need: impl Into<String>) -> Self {
        Self {
            need: Some(need.into()),
            ..Self::default()
        }
    }

    /// Parse a raw JSON body
    pub fn from_json(body: &str) -> Result<Self, InputError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| InputError::Malformed(e.to_string()))?;
        Self::from_value(value)
    }

    /// Read a request out of an already-parsed JSON value.
    ///
    /// Checked field by field so the error names the offending field.
    pub fn from_value(value: Value) -> Result<Self, InputError> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(InputError::NotAnObject {
                    found: json_kind(&other),
                });
            }
        };

        Ok(Self {
            need: string_field(&map, "need")?,
            budget: string_field(&map, "budget")?,
            audience: string_field(&map, "audience")?,
            priority: string_field(&map, "priority")?,
        })
    }
}

fn string_field(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, InputError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(InputError::InvalidField {
            field,
            found: json_kind(other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
