//! # Schema Normalizer
//!
//! Compiles any [`Schema`] into a [`Rule`]. Resolution order:
//!
//! 1. a rule is used as is;
//! 2. a literal value (string, number, boolean, bigint, symbol, null,
//!    undefined, date) becomes a [`literal`];
//! 3. a sequence (a `Schema::Tuple` or an array value) becomes a [`tuple`];
//! 4. an error value becomes an [`instance_of_with`] of its class, requiring
//!    its message and every own property;
//! 5. a mapping (a [`Shape`] or an object value) becomes an [`object_shape`];
//! 6. anything else (regular expressions, functions) is rejected with
//!    [`SchemaError::UnsupportedSchema`].
//!
//! Nested schemas are compiled eagerly, so a malformed schema fails when it
//! is built rather than when it is first applied.

use conform_core::{ErrorValue, Value};
use tracing::trace;

use crate::error::SchemaError;
use crate::literal::literal;
use crate::reference::instance_of_with;
use crate::rule::Rule;
use crate::schema::{Schema, Shape};
use crate::structural::{object_shape, tuple};

/// Compile `schema` into a rule.
///
/// # Errors
///
/// Returns `SchemaError` if the schema, or any schema nested in it, is
/// malformed.
pub fn normalize(schema: impl Into<Schema>) -> Result<Rule, SchemaError> {
    let schema = schema.into();
    trace!(kind = schema.kind(), "normalizing schema");
    match schema {
        Schema::Rule(rule) => Ok(rule),
        Schema::Tuple(items) => tuple(items),
        Schema::Shape(shape) => object_shape(shape),
        Schema::Value(value) => normalize_value(value),
    }
}

fn normalize_value(value: Value) -> Result<Rule, SchemaError> {
    let tag = value.tag();
    trace!(%tag, "normalizing value schema");
    match value {
        Value::Array(items) => tuple(items.iter().map(Schema::from)),
        Value::Error(error) => error_pattern(&error),
        Value::Object(object) => object_shape(Shape::from_object(&object)),
        Value::RegExp(_) | Value::Function(_) => Err(SchemaError::UnsupportedSchema { tag }),
        literal_value => Ok(literal(literal_value)),
    }
}

/// `message` and every own property of `error`, on an instance of its class.
fn error_pattern(error: &ErrorValue) -> Result<Rule, SchemaError> {
    let mut shape = Shape::new().with("message", error.message());
    for (key, value) in error.props() {
        shape.insert(key.as_str(), value);
    }
    instance_of_with(error.class(), shape)
}
