//! JSON ↔ `google.protobuf.Struct` conversions
//!
//! Metadata attached to vectors and texts travels as a protobuf `Struct`.
//! These helpers let callers work with `serde_json` values instead.
//!
//! Protobuf `Value` has a single `number_value: f64`, so every JSON number
//! becomes a double on the wire. Going back, whole doubles inside the `i64`
//! range come out as JSON integers; anything else stays a float. Non-finite
//! doubles have no JSON form and become `null`.
//!
//! ## Usage
//!
//! ```ignore
//! use grpc_client::conversions::{json_to_struct, struct_to_json};
//! use serde_json::json;
//!
//! let meta = json!({ "title": "Document 1", "rank": 3 });
//! let proto = json_to_struct(meta.as_object().cloned().unwrap_or_default());
//! let back = struct_to_json(&proto);
//! ```

use prost_types::{value::Kind, ListValue, Struct, Value};
use serde_json::{Map, Number, Value as JsonValue};

/// Convert a JSON object into a protobuf `Struct`
pub fn json_to_struct(object: Map<String, JsonValue>) -> Struct {
  Struct {
    fields: object
      .into_iter()
      .map(|(key, value)| (key, json_to_value(value)))
      .collect(),
  }
}

/// Convert a protobuf `Struct` into a JSON object
pub fn struct_to_json(proto: &Struct) -> Map<String, JsonValue> {
  proto
    .fields
    .iter()
    .map(|(key, value)| (key.clone(), value_to_json(value)))
    .collect()
}

/// Convert any JSON value into a protobuf `Value`
pub fn json_to_value(value: JsonValue) -> Value {
  let kind = match value {
    JsonValue::Null => Kind::NullValue(0),
    JsonValue::Bool(b) => Kind::BoolValue(b),
    JsonValue::Number(n) => Kind::NumberValue(n.as_f64().unwrap_or_default()),
    JsonValue::String(s) => Kind::StringValue(s),
    JsonValue::Array(items) => Kind::ListValue(ListValue {
      values: items.into_iter().map(json_to_value).collect(),
    }),
    JsonValue::Object(object) => Kind::StructValue(json_to_struct(object)),
  };
  Value { kind: Some(kind) }
}

/// Convert a protobuf `Value` into JSON; an unset kind is `null`
pub fn value_to_json(value: &Value) -> JsonValue {
  match &value.kind {
    None | Some(Kind::NullValue(_)) => JsonValue::Null,
    Some(Kind::BoolValue(b)) => JsonValue::Bool(*b),
    Some(Kind::NumberValue(n)) => number_to_json(*n),
    Some(Kind::StringValue(s)) => JsonValue::String(s.clone()),
    Some(Kind::ListValue(list)) => {
      JsonValue::Array(list.values.iter().map(value_to_json).collect())
    }
    Some(Kind::StructValue(s)) => JsonValue::Object(struct_to_json(s)),
  }
}

fn number_to_json(n: f64) -> JsonValue {
  // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
  if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
    return JsonValue::Number(Number::from(n as i64));
  }
  Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
}

/// Convert optional protobuf metadata into JSON, treating absence as empty
pub fn opt_struct_to_json(proto: Option<&Struct>) -> Map<String, JsonValue> {
  proto.map(struct_to_json).unwrap_or_default()
}
