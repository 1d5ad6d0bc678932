use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, StoreError};

/// Read and parse the file at `path` as `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), "reading config");
    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the file at `path` as a top-level JSON object.
pub fn read_object(path: &Path) -> Result<Map<String, Value>> {
    let value: Value = read_json(path)?;
    into_object(value)
}

/// Serialize `value` and overwrite the file at `path` in place.
///
/// Serialization happens before the file is opened, so a value that cannot be
/// encoded leaves the file untouched.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    debug!(path = %path.display(), bytes = json.len(), "writing config");
    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert any serializable value to a JSON object.
pub fn to_object<T: Serialize + ?Sized>(value: &T) -> Result<Map<String, Value>> {
    into_object(serde_json::to_value(value)?)
}

fn into_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::NotAnObject { found: kind_of(&other) }),
    }
}

/// Top-level key replacement. Nested objects are replaced, not merged.
pub fn shallow_merge(base: &mut Map<String, Value>, partial: Map<String, Value>) {
    for (k, v) in partial {
        base.insert(k, v);
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
