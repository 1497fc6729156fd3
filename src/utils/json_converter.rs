use serde_json::Value;

/// Placeholder shown for a field the record did not contain
pub const ABSENT_PLACEHOLDER: &str = "—";

/// Convert a JSON value to a short string representation.
/// Strings lose their quotes; `null` is kept visible as `null`.
pub fn value_to_short_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(value_to_short_string)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{}: {}", key, value_to_short_string(val)))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null => "null".to_string(),
    }
}

pub fn field_display(value: Option<&Value>) -> String {
    value
        .map(value_to_short_string)
        .unwrap_or_else(|| ABSENT_PLACEHOLDER.to_string())
}
