use serde_json::Value;
use std::fmt::Display;

/// JavaScript truthiness of a JSON value, which is what the API's `error` and `found` flags rely on.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A TruckersMP response counts as successful unless its `error` field is truthy.
pub fn api_succeeded(response: &Value) -> bool {
    !is_truthy(&response["error"])
}

/// Renders a JSON scalar the way it should appear in a query string.
/// Strings are used as-is (no surrounding quotes), null yields `None`.
pub fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Clones a field out of a response, treating a missing key and JSON null the same.
pub fn field(value: &Value, key: &str) -> Option<Value> {
    match value.get(key) {
        None | Some(Value::Null) => None,
        Some(v) => Some(v.clone()),
    }
}

pub fn join_ids<T: Display>(ids: &[T]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
