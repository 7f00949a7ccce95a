//! # Facade: Validation Entry Points
//!
//! Two ways to apply a schema to a value:
//!
//! - [`validate`] returns the [`Outcome`] as data;
//! - [`match_value`] turns a mismatch into an [`AssertionError`], or into a
//!   caller-built error via [`Match::with_error`], for callers that treat
//!   non-conformance as an error.
//!
//! Both compile the schema first, so a malformed schema is reported as a
//! [`SchemaError`] and never as a mismatch.

use std::sync::OnceLock;

use conform_core::{Class, ErrorValue, Value};
use thiserror::Error;
use tracing::debug;

use crate::error::{MatchError, SchemaError};
use crate::normalize::normalize;
use crate::outcome::Outcome;
use crate::rule::Rule;
use crate::schema::Schema;

fn apply(rule: &Rule, value: &Value) -> Outcome {
    let outcome = rule.check(value);
    if let Err(mismatch) = &outcome {
        debug!(rule = rule.name(), message = mismatch.message(), "value did not conform");
    }
    outcome
}

/// Compile `schema` and apply it to `value`.
///
/// # Errors
///
/// Returns `SchemaError` if the schema is malformed. A value that does not
/// conform is reported in the returned `Outcome`, not as an error.
pub fn validate(schema: impl Into<Schema>, value: &Value) -> Result<Outcome, SchemaError> {
    let rule = normalize(schema)?;
    Ok(apply(&rule, value))
}

/// Start an assertion on `value`.
pub fn match_value(value: &Value) -> Match<'_> {
    Match { value }
}

/// A pending assertion, completed by [`Match::with`] or
/// [`Match::with_error`].
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    value: &'a Value,
}

impl Match<'_> {
    /// Assert that the value conforms to `schema`.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::Schema` if the schema is malformed and
    /// `MatchError::Assertion` if the value does not conform.
    pub fn with(self, schema: impl Into<Schema>) -> Result<(), MatchError> {
        self.with_error(schema, |_| None)
    }

    /// Assert that the value conforms to `schema`, letting `on_mismatch`
    /// build the error. When it returns `None` the usual
    /// [`AssertionError`] is raised instead.
    ///
    /// # Errors
    ///
    /// Returns the error built by `on_mismatch` if the value does not
    /// conform, otherwise a converted [`MatchError`].
    pub fn with_error<E, F>(self, schema: impl Into<Schema>, on_mismatch: F) -> Result<(), E>
    where
        E: From<MatchError>,
        F: FnOnce(MismatchContext<'_>) -> Option<E>,
    {
        let schema = schema.into();
        let rule = normalize(schema.clone()).map_err(MatchError::from)?;
        let Err(mismatch) = apply(&rule, self.value) else {
            return Ok(());
        };

        let message = mismatch.into_message();
        let context = MismatchContext {
            message: &message,
            actual: self.value,
            schema: &schema,
        };
        if let Some(err) = on_mismatch(context) {
            return Err(err);
        }
        Err(MatchError::Assertion(AssertionError {
            expected: message.clone(),
            actual: self.value.clone(),
            message,
        })
        .into())
    }
}

/// What a failed assertion saw.
#[derive(Debug, Clone, Copy)]
pub struct MismatchContext<'a> {
    /// The mismatch message.
    pub message: &'a str,
    /// The value that was checked.
    pub actual: &'a Value,
    /// The schema it was checked against.
    pub schema: &'a Schema,
}

/// A value failed an assertion.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct AssertionError {
    /// The mismatch message.
    pub message: String,
    /// The value that was checked.
    pub actual: Value,
    /// Same text as `message`.
    pub expected: String,
}

impl AssertionError {
    /// The `AssertionError` class, a subclass of `Error`.
    pub fn class() -> &'static Class {
        static CLASS: OnceLock<Class> = OnceLock::new();
        CLASS.get_or_init(|| Class::extends("AssertionError", Class::error()))
    }

    /// This error as an error [`Value`] with `actual`, `expected` and `name`
    /// properties, so it can be checked against error schemas.
    pub fn to_value(&self) -> Value {
        ErrorValue::with_props(
            Self::class(),
            self.message.clone(),
            [
                ("actual", self.actual.clone()),
                ("expected", Value::from(self.expected.as_str())),
                ("name", Value::from("AssertionError")),
            ],
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{a_number, a_string, instance_of, shape};
    use serde_json::json;

    #[test]
    fn test_validate_ok() {
        let value = Value::from(json!({"id": "x"}));
        assert_eq!(validate(shape! { "id" => a_string() }, &value).unwrap(), Ok(()));
    }

    #[test]
    fn test_validate_mismatch_is_data() {
        let outcome = validate(1, &Value::from(2)).unwrap();
        assert_eq!(outcome.unwrap_err().message(), "expected Number 1, got Number 2");
    }

    #[test]
    fn test_validate_bad_schema_is_error() {
        let bad = conform_core::Function::new("f", 0);
        assert!(matches!(
            validate(bad, &Value::Null),
            Err(SchemaError::UnsupportedSchema { .. })
        ));
    }

    #[test]
    fn test_match_value_success() {
        assert!(match_value(&"x".into()).with(a_string()).is_ok());
    }

    #[test]
    fn test_match_value_assertion() {
        let value = Value::from(5);
        let err = match_value(&value).with(a_string()).unwrap_err();
        let MatchError::Assertion(assertion) = err else {
            panic!("expected an assertion error");
        };
        assert_eq!(assertion.message, "expected a string, got [object Number]");
        assert_eq!(assertion.expected, assertion.message);
        assert!(assertion.actual.strict_eq(&value));
        assert_eq!(assertion.to_string(), assertion.message);
    }

    #[test]
    fn test_assertion_as_error_value() {
        let value = Value::from(5);
        let Err(MatchError::Assertion(assertion)) = match_value(&value).with("x") else {
            panic!("expected an assertion error");
        };
        let as_value = assertion.to_value();
        assert!(instance_of(Class::error()).matches(&as_value));
        assert!(instance_of(AssertionError::class()).matches(&as_value));
        assert_eq!(as_value.get("name").as_str(), Some("AssertionError"));
        assert_eq!(as_value.get("expected").as_str(), Some("expected String x, got Number 5"));

        let pattern = ErrorValue::with_props(
            AssertionError::class(),
            "expected String x, got Number 5",
            [("actual", 5)],
        );
        assert!(validate(pattern, &as_value).unwrap().is_ok());
    }

    #[test]
    fn test_assertion_value_requires_name() {
        let value = Value::from(5);
        let Err(MatchError::Assertion(assertion)) = match_value(&value).with("x") else {
            panic!("expected an assertion error");
        };
        let pattern = assertion.to_value();
        let renamed = ErrorValue::with_props(
            AssertionError::class(),
            assertion.message.clone(),
            [
                ("actual", Value::from(5)),
                ("expected", Value::from(assertion.expected.as_str())),
                ("name", Value::from("Renamed")),
            ],
        );
        assert_eq!(
            validate(&pattern, &renamed.into()).unwrap().unwrap_err().message(),
            "[name] expected String AssertionError, got String Renamed"
        );
        assert!(validate(&pattern, &pattern).unwrap().is_ok());
    }

    #[derive(Debug, PartialEq)]
    enum AppError {
        Invalid { field: String, reason: String },
        Match(String),
    }

    impl From<MatchError> for AppError {
        fn from(err: MatchError) -> Self {
            AppError::Match(err.to_string())
        }
    }

    #[test]
    fn test_with_error_builds_caller_error() {
        let value = Value::from(json!({"age": "ten"}));
        let err = match_value(&value)
            .with_error(shape! { "age" => a_number() }, |ctx| {
                assert!(ctx.actual.strict_eq(&value));
                assert!(matches!(ctx.schema, Schema::Shape(_)));
                Some(AppError::Invalid {
                    field: "age".to_string(),
                    reason: ctx.message.to_string(),
                })
            })
            .unwrap_err();
        assert_eq!(
            err,
            AppError::Invalid {
                field: "age".to_string(),
                reason: "[age] expected a number, got [object String]".to_string(),
            }
        );
    }

    #[test]
    fn test_with_error_falls_back_to_assertion() {
        let value = Value::from(5);
        let err: AppError = match_value(&value).with_error(a_string(), |_| None).unwrap_err();
        assert_eq!(err, AppError::Match("expected a string, got [object Number]".to_string()));
    }

    #[test]
    fn test_with_error_not_called_on_success() {
        let value = Value::from("x");
        let result: Result<(), AppError> = match_value(&value).with_error(a_string(), |_| panic!("the factory runs only on a mismatch"));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_with_error_reports_bad_schema() {
        let bad = conform_core::Function::new("f", 0);
        let result: Result<(), MatchError> =
            match_value(&Value::Null).with_error(bad, |_| panic!("not a mismatch"));
        assert!(matches!(result, Err(MatchError::Schema(SchemaError::UnsupportedSchema { .. }))));
    }
}
