//! # JSON Bridge
//!
//! Lossless-enough conversion from `serde_json::Value` into [`Value`]:
//! `null` → `Null`, numbers → `Number`, arrays → `Array`, objects → plain
//! `Object` with key order preserved (the workspace enables serde_json's
//! `preserve_order` feature). JSON has no `undefined`, dates, or errors, so
//! the conversion is total.

use crate::value::{Array, Object, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(Array::new(items.into_iter().map(Value::from).collect()))
            }
            serde_json::Value::Object(map) => Value::Object(Object::plain(map)),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Value::from(json.clone())
    }
}
