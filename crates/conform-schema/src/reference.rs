//! # Reference-Type Matchers
//!
//! Class membership and identity checks, resolved against the explicit
//! [`Class`] registry of `conform-core`:
//!
//! - [`instance_of`] asks whether the value's class *is a* given class
//!   (inclusive of the class itself);
//! - [`is_prototyped_by`] does the same for ordinary values, but for a
//!   constructor function asks whether the class it constructs *strictly*
//!   descends from the given class;
//! - [`strict_equal`] compares by identity.

use conform_core::{Class, Value};

use crate::error::SchemaError;
use crate::outcome::invalid;
use crate::rule::Rule;
use crate::schema::Shape;
use crate::structural::object_like;

/// Name used in messages for the class of `value`, or `null` / `undefined`.
fn class_label(value: &Value) -> String {
    match value.class() {
        Some(class) => class.name().to_string(),
        None => value.render(),
    }
}

/// A non-nullish value whose class is `class` or one of its descendants.
pub fn instance_of(class: &Class) -> Rule {
    let class = class.clone();
    Rule::new("instance_of", move |value| {
        if value.class().is_some_and(|c| c.is_a(&class)) {
            return Ok(());
        }
        invalid(format!(
            "expected instanceof {class} got instanceof {}",
            class_label(value)
        ))
    })
}

/// [`instance_of`] whose listed properties also match `shape`, as with
/// [`object_like`].
///
/// # Errors
///
/// Returns `SchemaError` if a property schema cannot be compiled.
pub fn instance_of_with(class: &Class, shape: Shape) -> Result<Rule, SchemaError> {
    let membership = instance_of(class);
    let props = object_like(shape)?;
    Ok(Rule::new("instance_of_with", move |value| {
        membership.check(value)?;
        props.check(value)
    }))
}

/// An error of `class` (or a descendant) whose properties match `shape`.
///
/// # Errors
///
/// Returns `SchemaError` if a property schema cannot be compiled.
pub fn error_with(shape: Shape, class: &Class) -> Result<Rule, SchemaError> {
    instance_of_with(class, shape)
}

/// A constructor whose class strictly descends from `class`, or any other
/// value whose class is `class` or a descendant.
pub fn is_prototyped_by(class: &Class) -> Rule {
    let class = class.clone();
    Rule::new("is_prototyped_by", move |value| {
        let passed = match value {
            Value::Function(f) => f.constructs().is_some_and(|c| c.descends_from(&class)),
            _ => value.class().is_some_and(|c| c.is_a(&class)),
        };
        if passed {
            return Ok(());
        }
        invalid(format!(
            "expected object prototyped by {class} got {}",
            class_label(value)
        ))
    })
}

/// The very same value: primitives by content, references by identity.
pub fn strict_equal(expected: impl Into<Value>) -> Rule {
    let expected = expected.into();
    Rule::new("strict_equal", move |value| {
        if expected.strict_eq(value) {
            return Ok(());
        }
        invalid(format!(
            "expected strict equals {}, got {}",
            expected.render(),
            value.render()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape;
    use conform_core::{Date, ErrorValue, Function, Object};

    fn message(rule: &Rule, value: impl Into<Value>) -> String {
        rule.check(&value.into()).unwrap_err().into_message()
    }

    #[test]
    fn test_instance_of_builtins() {
        assert!(instance_of(Class::date()).matches(&Date::now().into()));
        assert!(instance_of(Class::object()).matches(&Date::now().into()));
        assert!(instance_of(Class::error()).matches(&ErrorValue::of(Class::type_error(), "x").into()));
        assert!(instance_of(Class::string()).matches(&"boxed".into()));
    }

    #[test]
    fn test_instance_of_negative() {
        assert_eq!(
            message(&instance_of(Class::type_error()), ErrorValue::new("x")),
            "expected instanceof TypeError got instanceof Error"
        );
        assert_eq!(
            message(&instance_of(Class::date()), Value::Null),
            "expected instanceof Date got instanceof null"
        );
        assert_eq!(
            message(&instance_of(Class::date()), Value::Undefined),
            "expected instanceof Date got instanceof undefined"
        );
    }

    #[test]
    fn test_instance_of_user_classes() {
        let a = Class::new("A");
        let b = Class::extends("B", &a);
        let inst_b: Value = Object::instance(&b, [("x", 1)]).into();
        assert!(instance_of(&a).matches(&inst_b));
        assert!(instance_of(&b).matches(&inst_b));
        let inst_a: Value = Object::instance(&a, Vec::<(&str, Value)>::new()).into();
        assert_eq!(message(&instance_of(&b), inst_a), "expected instanceof B got instanceof A");
    }

    #[test]
    fn test_instance_of_with_shape() {
        let rule = instance_of_with(Class::error(), shape! { "message" => "boom" }).unwrap();
        assert!(rule.matches(&ErrorValue::new("boom").into()));
        assert_eq!(
            message(&rule, ErrorValue::new("bang")),
            "[message] expected String boom, got String bang"
        );
        assert_eq!(
            message(&rule, Value::object([("message", "boom")])),
            "expected instanceof Error got instanceof Object"
        );
    }

    #[test]
    fn test_error_with_argument_order() {
        let rule = error_with(shape! { "code" => 7 }, Class::range_error()).unwrap();
        let err = ErrorValue::with_props(Class::range_error(), "r", [("code", 7)]);
        assert!(rule.matches(&err.into()));
    }

    #[test]
    fn test_is_prototyped_by_constructors() {
        let a = Class::new("A");
        let b = Class::extends("B", &a);
        let rule = is_prototyped_by(&a);
        assert!(rule.matches(&Function::constructor(&b).into()));
        assert_eq!(
            message(&rule, Function::constructor(&a)),
            "expected object prototyped by A got Function"
        );
        assert_eq!(
            message(&rule, Function::new("plain", 0)),
            "expected object prototyped by A got Function"
        );
    }

    #[test]
    fn test_is_prototyped_by_instances() {
        let a = Class::new("A");
        let rule = is_prototyped_by(&a);
        assert!(rule.matches(&Object::instance(&a, [("k", 1)]).into()));
        assert_eq!(
            message(&rule, Value::object([("k", 1)])),
            "expected object prototyped by A got Object"
        );
        assert_eq!(message(&rule, Value::Null), "expected object prototyped by A got null");
        assert_eq!(message(&rule, Value::Undefined), "expected object prototyped by A got undefined");
    }

    #[test]
    fn test_strict_equal() {
        let o = Value::object([("a", 1)]);
        assert!(strict_equal(o.clone()).matches(&o));
        assert_eq!(
            message(&strict_equal(o), Value::object([("a", 1)])),
            "expected strict equals [object Object], got [object Object]"
        );
        assert!(strict_equal(1).matches(&1.into()));
        assert!(!strict_equal(f64::NAN).matches(&f64::NAN.into()));
        assert_eq!(message(&strict_equal("a"), "b"), "expected strict equals String a, got String b");
    }
}
