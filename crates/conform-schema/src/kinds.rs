//! # Primitive-Kind, Pattern and Predicate Matchers
//!
//! "Is a value of kind K" rules. Each kind rule succeeds iff the value's
//! [`ValueTag`] equals the expected tag and otherwise reports
//! `expected a <kind>, got [object <Tag>]`.
//!
//! [`predicate`] wraps caller code. Whether a panic inside that code unwinds
//! to the caller or becomes a mismatch is chosen explicitly with
//! [`OnPanic`]; the default lets it propagate.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use conform_core::{RegExp, Value, ValueTag};

use crate::error::SchemaError;
use crate::outcome::invalid;
use crate::rule::Rule;

fn kind(name: &'static str, tag: ValueTag, noun: &'static str) -> Rule {
    Rule::new(name, move |value| {
        let actual = value.tag();
        if actual == tag {
            return Ok(());
        }
        invalid(format!("expected {noun}, got {actual}"))
    })
}

/// Any value. Always succeeds.
pub fn anything() -> Rule {
    Rule::new("anything", |_| Ok(()))
}

/// Any string.
pub fn a_string() -> Rule {
    kind("a_string", ValueTag::String, "a string")
}

/// Any number, including `NaN` and the infinities.
pub fn a_number() -> Rule {
    kind("a_number", ValueTag::Number, "a number")
}

/// Any boolean.
pub fn a_boolean() -> Rule {
    kind("a_boolean", ValueTag::Boolean, "a boolean")
}

/// Any bigint.
pub fn a_bigint() -> Rule {
    kind("a_bigint", ValueTag::BigInt, "a bigint")
}

/// Any date.
pub fn a_date() -> Rule {
    kind("a_date", ValueTag::Date, "a date")
}

/// Any regular expression.
pub fn a_regexp() -> Rule {
    kind("a_regexp", ValueTag::RegExp, "a regexp")
}

/// Exactly `null`.
pub fn a_null() -> Rule {
    kind("a_null", ValueTag::Null, "null")
}

/// Exactly `undefined`.
pub fn an_undefined() -> Rule {
    kind("an_undefined", ValueTag::Undefined, "undefined")
}

/// `null` or `undefined`.
pub fn a_nullish() -> Rule {
    Rule::new("a_nullish", |value| {
        if value.is_nullish() {
            return Ok(());
        }
        invalid(format!("expected null or undefined, got {}", value.tag()))
    })
}

/// A string matched by `pattern`.
pub fn re(pattern: RegExp) -> Rule {
    Rule::new("re", move |value| {
        let Value::String(s) = value else {
            return invalid(format!("expected string, got {}", value.tag()));
        };
        if !pattern.is_match(s) {
            return invalid(format!("expected {pattern}, got {}", value.render()));
        }
        Ok(())
    })
}

/// [`re`] over a pattern source compiled now.
///
/// # Errors
///
/// Returns `SchemaError::Core` if the pattern does not compile.
pub fn re_str(source: &str) -> Result<Rule, SchemaError> {
    Ok(re(RegExp::new(source)?))
}

/// What a predicate rule does when the caller's function panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnPanic {
    /// Let the panic unwind to whoever applied the rule.
    #[default]
    Propagate,
    /// Catch the panic and report it as a mismatch.
    Fail,
}

/// Options for [`predicate_with`].
#[derive(Debug, Clone, Default)]
pub struct PredicateOptions {
    /// Mismatch message; defaults to `predicate failed for <value>`.
    pub message: Option<String>,
    /// Panic policy.
    pub on_panic: OnPanic,
}

impl PredicateOptions {
    /// Options with a custom failure message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Set the panic policy.
    pub fn on_panic(mut self, on_panic: OnPanic) -> Self {
        self.on_panic = on_panic;
        self
    }
}

/// A rule backed by a caller-supplied boolean function.
pub fn predicate<F>(f: F) -> Rule
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    predicate_with(f, PredicateOptions::default())
}

/// [`predicate`] with an explicit message and panic policy.
pub fn predicate_with<F>(f: F, options: PredicateOptions) -> Rule
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    // An empty custom message would violate the non-empty message rule.
    let message = options.message.filter(|m| !m.is_empty());
    let on_panic = options.on_panic;

    Rule::new("predicate", move |value| {
        let passed = match on_panic {
            OnPanic::Propagate => f(value),
            OnPanic::Fail => match panic::catch_unwind(AssertUnwindSafe(|| f(value))) {
                Ok(passed) => passed,
                Err(payload) => {
                    return invalid(format!("predicate panicked: {}", panic_text(&*payload)));
                }
            },
        };
        if passed {
            return Ok(());
        }
        match &message {
            Some(m) => invalid(m.clone()),
            None => invalid(format!("predicate failed for {}", value.render())),
        }
    })
}

fn panic_text(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        return (*s).to_string();
    }
    if let Some(s) = payload.downcast_ref::<String>() {
        return s.clone();
    }
    "non-string panic payload".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use conform_core::{Date, ErrorValue};

    fn message(rule: &Rule, value: impl Into<Value>) -> String {
        rule.check(&value.into()).unwrap_err().into_message()
    }

    #[test]
    fn test_kinds_accept_their_tag() {
        assert!(a_string().matches(&"x".into()));
        assert!(a_number().matches(&1.5.into()));
        assert!(a_number().matches(&f64::NAN.into()));
        assert!(a_boolean().matches(&true.into()));
        assert!(a_bigint().matches(&Value::BigInt(1)));
        assert!(a_date().matches(&Date::now().into()));
        assert!(a_regexp().matches(&RegExp::new("x").unwrap().into()));
        assert!(a_null().matches(&Value::Null));
        assert!(an_undefined().matches(&Value::Undefined));
    }

    #[test]
    fn test_kind_messages() {
        assert_eq!(message(&a_string(), 1), "expected a string, got [object Number]");
        assert_eq!(message(&a_number(), "1"), "expected a number, got [object String]");
        assert_eq!(message(&a_boolean(), 1), "expected a boolean, got [object Number]");
        assert_eq!(message(&a_bigint(), 1), "expected a bigint, got [object Number]");
        assert_eq!(message(&a_date(), 1), "expected a date, got [object Number]");
        assert_eq!(
            message(&a_regexp(), Date::now()),
            "expected a regexp, got [object Date]"
        );
        assert_eq!(message(&a_null(), Value::Undefined), "expected null, got [object Undefined]");
        assert_eq!(message(&an_undefined(), Value::Null), "expected undefined, got [object Null]");
    }

    #[test]
    fn test_nullish() {
        assert!(a_nullish().matches(&Value::Null));
        assert!(a_nullish().matches(&Value::Undefined));
        assert_eq!(
            message(&a_nullish(), Value::object([("a", 1)])),
            "expected null or undefined, got [object Object]"
        );
    }

    #[test]
    fn test_anything() {
        for v in [Value::Null, Value::Undefined, 1.into(), ErrorValue::new("e").into()] {
            assert!(anything().matches(&v));
        }
    }

    #[test]
    fn test_re() {
        let rule = re_str("test").unwrap();
        assert!(rule.matches(&"test".into()));
        assert_eq!(message(&rule, "to fail"), "expected /test/, got String to fail");
        assert_eq!(message(&rule, 5), "expected string, got [object Number]");
    }

    #[test]
    fn test_re_str_bad_pattern() {
        assert!(matches!(re_str("(open"), Err(SchemaError::Core(_))));
    }

    #[test]
    fn test_predicate_default_message() {
        let positive = predicate(|v| v.as_f64().is_some_and(|n| n > 0.0));
        assert!(positive.matches(&5.into()));
        assert_eq!(message(&positive, -1), "predicate failed for Number -1");
    }

    #[test]
    fn test_predicate_custom_message() {
        let rule = predicate_with(|_| false, PredicateOptions::message("nope"));
        assert_eq!(message(&rule, 1), "nope");
        let rule = predicate_with(|_| false, PredicateOptions::message(""));
        assert_eq!(message(&rule, 1), "predicate failed for Number 1");
    }

    #[test]
    fn test_predicate_panic_fails_when_configured() {
        let rule = predicate_with(
            |_| panic!("exploded"),
            PredicateOptions::default().on_panic(OnPanic::Fail),
        );
        assert_eq!(message(&rule, 1), "predicate panicked: exploded");
    }

    #[test]
    #[should_panic(expected = "exploded")]
    fn test_predicate_panic_propagates_by_default() {
        let rule = predicate(|_| panic!("exploded"));
        let _ = rule.check(&1.into());
    }
}
