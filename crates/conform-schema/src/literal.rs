//! # Literal Matcher
//!
//! Exact-value schemas. Equality is checked in this order:
//!
//! 1. strict equality (`+0` and `-0` are equal, references by identity);
//! 2. both values are `NaN`;
//! 3. both are dates denoting the same millisecond;
//! 4. both are regular expressions with identical `/source/flags` text.
//!
//! Anything else is unequal.

use conform_core::Value;

use crate::outcome::invalid;
use crate::rule::Rule;

/// Literal equality as used by [`literal`].
pub fn literal_eq(expected: &Value, actual: &Value) -> bool {
    if expected.strict_eq(actual) {
        return true;
    }
    match (expected, actual) {
        (Value::Number(a), Value::Number(b)) => a.is_nan() && b.is_nan(),
        (Value::Date(a), Value::Date(b)) => a.same_instant(b),
        (Value::RegExp(a), Value::RegExp(b)) => a.same_text(b),
        _ => false,
    }
}

/// Rule matching exactly `expected`.
pub fn literal(expected: impl Into<Value>) -> Rule {
    let expected = expected.into();
    Rule::new("literal", move |value| {
        if literal_eq(&expected, value) {
            return Ok(());
        }
        invalid(format!(
            "expected {}, got {}",
            expected.render(),
            value.render()
        ))
    })
}

/// Alias of [`literal`].
pub fn exact(expected: impl Into<Value>) -> Rule {
    literal(expected)
}
