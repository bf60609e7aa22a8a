use serde_json::{Map as JsonMap, Number, Value as JsonValue};
use ubjson::codec::{Map, Value};

use crate::cmd::{CliError, Result};

/// Deepest container nesting rendered as JSON; matches serde_json's own parse limit.
pub const MAX_JSON_DEPTH: usize = 128;

/// Convert a decoded value into JSON.
///
/// Precision numbers keep their exact text as a JSON string. Characters
/// become one-character strings. Non-finite floats become `null`.
/// Trees nested deeper than [`MAX_JSON_DEPTH`] are rejected up front.
pub fn value_to_json_value(value: &Value) -> Result<JsonValue> {
	let depth = value.depth();
	if depth > MAX_JSON_DEPTH {
		return Err(CliError::TooDeepForJson { depth, max: MAX_JSON_DEPTH });
	}
	Ok(to_json(value))
}

fn to_json(value: &Value) -> JsonValue {
	match value {
		Value::Null => JsonValue::Null,
		Value::Bool(v) => serde_json::json!(v),
		Value::Int8(v) => serde_json::json!(v),
		Value::UInt8(v) => serde_json::json!(v),
		Value::Int16(v) => serde_json::json!(v),
		Value::Int32(v) => serde_json::json!(v),
		Value::Int64(v) => serde_json::json!(v),
		Value::Float32(v) => serde_json::json!(v),
		Value::Float64(v) => serde_json::json!(v),
		Value::Precision(v) => serde_json::json!(v.as_str()),
		Value::Str(v) => serde_json::json!(v),
		Value::Char(v) => serde_json::json!(v.to_string()),
		Value::List(items) => JsonValue::Array(items.iter().map(to_json).collect()),
		Value::Map(entries) => {
			let fields: JsonMap<String, JsonValue> = entries.iter().map(|(key, item)| (key.clone(), to_json(item))).collect();
			JsonValue::Object(fields)
		}
	}
}

/// Convert a JSON document into a value tree ready for encoding.
///
/// Integers take the narrowest variant that holds them; other numbers
/// become double-precision floats.
pub fn json_to_value(json: &JsonValue) -> Value {
	match json {
		JsonValue::Null => Value::Null,
		JsonValue::Bool(v) => Value::Bool(*v),
		JsonValue::Number(v) => number_to_value(v),
		JsonValue::String(v) => Value::Str(v.clone()),
		JsonValue::Array(items) => items.iter().map(json_to_value).collect(),
		JsonValue::Object(fields) => Value::Map(fields.iter().map(|(key, item)| (key.clone(), json_to_value(item))).collect::<Map>()),
	}
}

fn number_to_value(number: &Number) -> Value {
	if let Some(v) = number.as_i64() {
		Value::integer(i128::from(v))
	} else if let Some(v) = number.as_u64() {
		Value::integer(i128::from(v))
	} else {
		Value::Float64(number.as_f64().unwrap_or(f64::NAN))
	}
}
