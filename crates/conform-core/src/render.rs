//! # Message Rendering
//!
//! Produces the short, self-describing fragments that mismatch messages are
//! built from: `String foo`, `Number 5`, `Date 1970-01-01T00:00:00.000Z`,
//! `TypeError bad input`. Values without a useful scalar rendering (plain
//! objects, arrays) fall back to their tag, e.g. `[object Object]`.

use crate::value::Value;

/// Render a value for inclusion in a message.
pub fn render(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("Boolean {b}"),
        Value::Number(n) => format!("Number {}", format_number(*n)),
        Value::BigInt(n) => format!("BigInt {n}"),
        Value::String(s) => format!("String {s}"),
        Value::Symbol(s) => format!("Symbol {s}"),
        Value::Date(d) => format!("Date {}", d.to_iso8601()),
        Value::RegExp(r) => format!("RegExp {r}"),
        Value::Error(e) => format!("{} {}", e.name(), e.message()),
        Value::Function(f) if f.name().is_empty() => "function <anonymous>".to_string(),
        Value::Function(f) => format!("function {}", f.name()),
        Value::Array(_) | Value::Object(_) => value.tag().to_string(),
    }
}

/// Format a number the way the host prints it.
///
/// Numbers print with the shortest digits that round-trip, so integers past
/// 2^53 end in zeros (`1152921504606847000`). `-0` prints as `0`, and very
/// large or very small magnitudes use exponent notation with an explicit
/// sign (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }
    format!("{n}")
}
