//! # Value Classifier
//!
//! Maps every [`Value`] to a canonical [`ValueTag`]. The classification is
//! total and drives both matcher decisions ("is this a string?") and the
//! `[object <Name>]` fragments that appear in mismatch messages.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Canonical type tag of a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueTag {
    String,
    Number,
    Boolean,
    BigInt,
    Symbol,
    Null,
    Undefined,
    Date,
    RegExp,
    Array,
    Object,
    Error,
    Function,
}

impl ValueTag {
    /// The bare tag name, e.g. `"Number"`.
    pub fn name(&self) -> &'static str {
        match self {
            ValueTag::String => "String",
            ValueTag::Number => "Number",
            ValueTag::Boolean => "Boolean",
            ValueTag::BigInt => "BigInt",
            ValueTag::Symbol => "Symbol",
            ValueTag::Null => "Null",
            ValueTag::Undefined => "Undefined",
            ValueTag::Date => "Date",
            ValueTag::RegExp => "RegExp",
            ValueTag::Array => "Array",
            ValueTag::Object => "Object",
            ValueTag::Error => "Error",
            ValueTag::Function => "Function",
        }
    }
}

/// Renders as `[object <Name>]`.
impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[object {}]", self.name())
    }
}

/// Classify a value. Never fails.
pub fn classify(value: &Value) -> ValueTag {
    match value {
        Value::Undefined => ValueTag::Undefined,
        Value::Null => ValueTag::Null,
        Value::Bool(_) => ValueTag::Boolean,
        Value::Number(_) => ValueTag::Number,
        Value::BigInt(_) => ValueTag::BigInt,
        Value::String(_) => ValueTag::String,
        Value::Symbol(_) => ValueTag::Symbol,
        Value::Date(_) => ValueTag::Date,
        Value::RegExp(_) => ValueTag::RegExp,
        Value::Array(_) => ValueTag::Array,
        Value::Object(_) => ValueTag::Object,
        Value::Error(_) => ValueTag::Error,
        Value::Function(_) => ValueTag::Function,
    }
}
