//! JSON → value-tree mapping for the CLI.

use crate::value::Value;

/// Map a parsed JSON document onto the value model.
///
/// Objects become mappings in insertion order, arrays become sequences,
/// `null` stays null, and every other scalar is stringified (`true`/`false`
/// for booleans, the literal digits for numbers).
pub fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::from(*b),
        serde_json::Value::Number(n) => Value::Scalar(n.to_string()),
        serde_json::Value::String(s) => Value::Scalar(s.clone()),
        serde_json::Value::Array(items) => Value::Sequence(items.iter().map(from_json).collect()),
        serde_json::Value::Object(map) => Value::Mapping(
            map.iter()
                .map(|(key, value)| (key.clone(), from_json(value)))
                .collect(),
        ),
    }
}
