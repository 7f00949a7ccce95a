//! # Structural Matchers
//!
//! Object-shape, object-like, fixed-length tuple, homogeneous array and
//! `length` rules. Sub-schemas are compiled when the rule is built; validation then
//! walks the value one level at a time and stops at the first failing
//! property or index, prefixing its message with `[key]` / `[index]`.
//! Multiple simultaneous failures are never aggregated.

use conform_core::{format_number, Value, ValueTag};

use crate::error::SchemaError;
use crate::normalize::normalize;
use crate::outcome::{invalid, Outcome};
use crate::rule::Rule;
use crate::schema::{Schema, Shape};

/// Compiled per-property rules, in declaration order.
#[derive(Debug, Clone)]
struct Props(Vec<(String, Rule)>);

impl Props {
    fn compile(shape: Shape) -> Result<Self, SchemaError> {
        shape
            .into_iter()
            .map(|(key, schema)| Ok((key, normalize(schema)?)))
            .collect::<Result<Vec<_>, SchemaError>>()
            .map(Self)
    }

    fn check(&self, value: &Value) -> Outcome {
        for (key, rule) in &self.0 {
            rule.check(&value.get(key)).map_err(|m| m.at(key))?;
        }
        Ok(())
    }
}

/// An object (tag `Object`) whose listed properties match. Extra
/// properties are ignored; missing ones read as `undefined`.
///
/// # Errors
///
/// Returns `SchemaError` if a property schema cannot be compiled.
pub fn object_shape(shape: Shape) -> Result<Rule, SchemaError> {
    let props = Props::compile(shape)?;
    Ok(Rule::new("object_shape", move |value| {
        if value.tag() != ValueTag::Object {
            return invalid(format!("expected object, got {}", value.render()));
        }
        props.check(value)
    }))
}

/// Any non-null value whose listed properties match: arrays, functions,
/// errors, dates, strings and other boxed primitives included.
///
/// # Errors
///
/// Returns `SchemaError` if a property schema cannot be compiled.
pub fn object_like(shape: Shape) -> Result<Rule, SchemaError> {
    let props = Props::compile(shape)?;
    Ok(Rule::new("object_like", move |value| {
        if value.is_nullish() {
            return invalid(format!("expected non null value, got {}", value.render()));
        }
        props.check(value)
    }))
}

/// An array of exactly `items.len()` elements, element `i` matching
/// `items[i]`. The length is checked before any element.
///
/// # Errors
///
/// Returns `SchemaError` if an item schema cannot be compiled.
pub fn tuple<I, S>(items: I) -> Result<Rule, SchemaError>
where
    I: IntoIterator<Item = S>,
    S: Into<Schema>,
{
    let rules = items
        .into_iter()
        .map(normalize)
        .collect::<Result<Vec<Rule>, SchemaError>>()?;

    Ok(Rule::new("tuple", move |value| {
        let Value::Array(array) = value else {
            return invalid(format!("expected tuple, got {}", value.tag()));
        };
        if array.len() != rules.len() {
            return invalid(format!(
                "expected tuple of {} items, got {}",
                rules.len(),
                array.len()
            ));
        }
        for (i, (rule, item)) in rules.iter().zip(array.iter()).enumerate() {
            rule.check(item).map_err(|m| m.at(i))?;
        }
        Ok(())
    }))
}

/// An array of any length whose every element matches `item`.
///
/// # Errors
///
/// Returns `SchemaError` if the item schema cannot be compiled.
pub fn array_of(item: impl Into<Schema>) -> Result<Rule, SchemaError> {
    let rule = normalize(item)?;
    Ok(Rule::new("array_of", move |value| {
        let Value::Array(array) = value else {
            return invalid(format!("expected array, got {}", value.tag()));
        };
        for (i, item) in array.iter().enumerate() {
            rule.check(item).map_err(|m| m.at(i))?;
        }
        Ok(())
    }))
}

/// Any value whose `length` property is the number `n`: arrays, strings,
/// functions by arity, and objects with an own `length`.
pub fn length(n: usize) -> Rule {
    let expected = n as f64;
    Rule::new("length", move |value| {
        let actual = value.get("length");
        if actual.as_f64() == Some(expected) {
            return Ok(());
        }
        let shown = match &actual {
            Value::Number(len) => format_number(*len),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::BigInt(i) => i.to_string(),
            other => other.render(),
        };
        invalid(format!("expected length to be {n}, got {shown}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{a_string, anything, nullable, schemas, shape, strict_equal};
    use conform_core::{Class, Date, Function, Object};
    use serde_json::json;

    fn message(rule: &Rule, value: impl Into<Value>) -> String {
        rule.check(&value.into()).unwrap_err().into_message()
    }

    #[test]
    fn test_object_shape_null_property() {
        let rule = object_shape(shape! { "test" => Value::Null }).unwrap();
        assert!(rule.matches(&json!({"test": null}).into()));
        assert_eq!(message(&rule, json!({})), "[test] expected null, got undefined");
    }

    #[test]
    fn test_object_shape_undefined_property() {
        let rule = object_shape(shape! { "test" => Value::Undefined }).unwrap();
        assert!(rule.matches(&json!({}).into()));
        assert_eq!(message(&rule, json!({"test": null})), "[test] expected undefined, got null");
    }

    #[test]
    fn test_object_shape_rejects_non_objects() {
        let rule = object_shape(shape! { "test" => "value" }).unwrap();
        assert_eq!(message(&rule, Value::Null), "expected object, got null");
        assert_eq!(message(&rule, Value::Undefined), "expected object, got undefined");
        assert_eq!(message(&rule, "string"), "expected object, got String string");
        assert_eq!(message(&rule, 123), "expected object, got Number 123");
        assert_eq!(message(&rule, json!([])), "expected object, got [object Array]");
    }

    #[test]
    fn test_object_shape_ignores_extra_keys() {
        let rule = object_shape(shape! { "id" => 9 }).unwrap();
        assert!(rule.matches(&json!({"id": 9, "extra": true}).into()));
    }

    #[test]
    fn test_object_shape_accepts_class_instances() {
        let a = Class::new("A");
        let inst = Object::instance(&a, [("name", "x")]);
        let rule = object_shape(shape! { "name" => "x" }).unwrap();
        assert!(rule.matches(&inst.into()));
    }

    #[test]
    fn test_nested_path() {
        let rule = object_shape(shape! {
            "id" => 9,
            "title" => nullable(tuple(schemas![a_string()]).unwrap()).unwrap(),
            "items" => json!([1, 2, 3, "4"]),
        })
        .unwrap();
        assert!(rule.matches(&json!({"id": 9, "title": null, "items": [1, 2, 3, "4"]}).into()));
        assert_eq!(
            message(&rule, json!({"id": 9, "title": [1], "items": [1, 2, 3, "4"]})),
            "[title] [0] expected a string, got [object Number]"
        );
    }

    #[test]
    fn test_object_like_strings_and_functions() {
        let rule = object_like(shape! { "length" => 2 }).unwrap();
        assert!(rule.matches(&"xe".into()));
        assert!(rule.matches(&Function::new("f", 2).into()));
        assert!(rule.matches(&json!(["1", "2"]).into()));
        assert!(rule.matches(&json!({"length": 2}).into()));
        assert_eq!(message(&rule, "xexe"), "[length] expected Number 2, got Number 4");
        assert_eq!(message(&rule, 5), "[length] expected Number 2, got undefined");
        assert_eq!(message(&rule, json!([])), "[length] expected Number 2, got Number 0");
        assert_eq!(message(&rule, Value::Null), "expected non null value, got null");
        assert_eq!(message(&rule, Value::Undefined), "expected non null value, got undefined");
    }

    #[test]
    fn test_object_like_dates_have_no_props() {
        let rule = object_like(shape! { "x" => anything() }).unwrap();
        assert!(rule.matches(&Date::now().into()));
    }

    #[test]
    fn test_object_like_identity_property() {
        let ctor = Function::new("Array", 0);
        let holder = Value::object([("constructor", ctor.clone())]);
        let rule = object_like(shape! { "constructor" => strict_equal(ctor) }).unwrap();
        assert!(rule.matches(&holder));
        let other = Value::object([("constructor", Function::new("Function", 0))]);
        assert_eq!(
            message(&rule, other),
            "[constructor] expected strict equals function Array, got function Function"
        );
    }

    #[test]
    fn test_tuple_length_and_items() {
        let rule = tuple(schemas!["first", 42, true]).unwrap();
        assert!(rule.matches(&json!(["first", 42, true]).into()));
        assert_eq!(message(&rule, json!(["wrong", 42, true])), "[0] expected String first, got String wrong");
        assert_eq!(message(&rule, json!(["first", 42, false])), "[2] expected Boolean true, got Boolean false");
        assert_eq!(message(&rule, json!(["first", 42])), "expected tuple of 3 items, got 2");
        assert_eq!(message(&rule, json!(["first", 42, true, "x"])), "expected tuple of 3 items, got 4");
    }

    #[test]
    fn test_tuple_length_reported_before_content() {
        let rule = tuple(["a", "b"]).unwrap();
        assert_eq!(message(&rule, json!(["x", "y", "z"])), "expected tuple of 2 items, got 3");
    }

    #[test]
    fn test_tuple_non_array() {
        let rule = tuple(["test"]).unwrap();
        assert_eq!(message(&rule, "test"), "expected tuple, got [object String]");
        assert_eq!(message(&rule, Value::Null), "expected tuple, got [object Null]");
        assert_eq!(message(&rule, Value::Undefined), "expected tuple, got [object Undefined]");
        assert_eq!(message(&rule, json!({})), "expected tuple, got [object Object]");
    }

    #[test]
    fn test_empty_tuple() {
        let rule = tuple(Vec::<Schema>::new()).unwrap();
        assert!(rule.matches(&json!([]).into()));
        assert_eq!(message(&rule, json!(["anything"])), "expected tuple of 0 items, got 1");
    }

    #[test]
    fn test_nested_tuples() {
        let rule = tuple(schemas![tuple(["x"]).unwrap(), tuple([1, 2]).unwrap()]).unwrap();
        assert!(rule.matches(&json!([["x"], [1, 2]]).into()));
        assert_eq!(message(&rule, json!([["y"], [1, 2]])), "[0] [0] expected String x, got String y");
        assert_eq!(message(&rule, json!([["x"], [1]])), "[1] expected tuple of 2 items, got 1");
    }

    #[test]
    fn test_array_of() {
        let rule = array_of("x").unwrap();
        assert!(rule.matches(&json!([]).into()));
        assert!(rule.matches(&json!(["x", "x", "x"]).into()));
        assert_eq!(message(&rule, json!(["x", "y"])), "[1] expected String x, got String y");
    }

    #[test]
    fn test_array_of_non_array() {
        let rule = array_of(anything()).unwrap();
        assert_eq!(message(&rule, "xe"), "expected array, got [object String]");
        assert_eq!(message(&rule, json!({"length": 2})), "expected array, got [object Object]");
        assert_eq!(message(&rule, Value::Null), "expected array, got [object Null]");
    }

    #[test]
    fn test_array_of_nested() {
        let rule = array_of(array_of(a_string()).unwrap()).unwrap();
        assert!(rule.matches(&json!([["1"], ["2"]]).into()));
        assert_eq!(message(&rule, json!([[1, 2, 3]])), "[0] [0] expected a string, got [object Number]");
    }

    #[test]
    fn test_length() {
        let rule = length(2);
        assert!(rule.matches(&json!(["1", "2"]).into()));
        assert!(rule.matches(&"xe".into()));
        assert!(rule.matches(&json!({"length": 2}).into()));
        assert!(rule.matches(&Function::new("f", 2).into()));
        assert_eq!(message(&rule, json!([])), "expected length to be 2, got 0");
        assert_eq!(message(&rule, Value::Null), "expected length to be 2, got undefined");
        assert_eq!(message(&rule, Value::Undefined), "expected length to be 2, got undefined");
        assert_eq!(message(&rule, json!({"length": 4})), "expected length to be 2, got 4");
        assert_eq!(message(&rule, json!({})), "expected length to be 2, got undefined");
    }

    #[test]
    fn test_length_is_strict() {
        let rule = length(2);
        assert_eq!(message(&rule, json!({"length": "2"})), "expected length to be 2, got 2");
        assert_eq!(message(&rule, json!({"length": null})), "expected length to be 2, got null");
        assert!(length(0).matches(&"".into()));
    }

    #[test]
    fn test_length_inside_shape() {
        let rule = object_shape(shape! { "tags" => length(1) }).unwrap();
        assert!(rule.matches(&json!({"tags": ["a"]}).into()));
        assert_eq!(message(&rule, json!({"tags": []})), "[tags] expected length to be 1, got 0");
    }

    #[test]
    fn test_array_of_null_items() {
        let rule = array_of(Value::Null).unwrap();
        assert!(rule.matches(&json!([null]).into()));
        assert_eq!(message(&rule, Value::array([Value::Undefined])), "[0] expected null, got undefined");
    }
}
