use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Parse a command-line value: JSON when it parses, otherwise a plain string.
///
/// `42` becomes a number, `true` a boolean, `"x"` the string `x`, and
/// `hello world` the string `hello world`.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parse a command-line argument that must be a JSON object.
pub fn parse_object(raw: &str) -> Result<Map<String, Value>> {
    let value = serde_json::from_str::<Value>(raw).map_err(|source| StoreError::Parse {
        path: PathBuf::from("<argument>"),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject { found: "a non-object value" }),
    }
}

/// Short single-line rendering for tables.
pub fn preview(value: &Value, max: usize) -> String {
    let s = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if s.chars().count() <= max {
        return s;
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
