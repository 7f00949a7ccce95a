//! # Combinators
//!
//! Schemas built from other schemas. The n-ary combinators ([`all_of`],
//! [`one_of`], [`any_of`], [`none_of`]) need at least two sub-schemas and
//! report [`SchemaError::TooFewRules`] otherwise. Sub-schemas are always
//! evaluated in declared order.

use crate::error::SchemaError;
use crate::normalize::normalize;
use crate::outcome::invalid;
use crate::rule::Rule;
use crate::schema::Schema;

fn compile_many<I, S>(combinator: &'static str, schemas: I) -> Result<Vec<Rule>, SchemaError>
where
    I: IntoIterator<Item = S>,
    S: Into<Schema>,
{
    let rules = schemas
        .into_iter()
        .map(normalize)
        .collect::<Result<Vec<Rule>, SchemaError>>()?;
    if rules.len() < 2 {
        return Err(SchemaError::TooFewRules {
            combinator,
            given: rules.len(),
        });
    }
    Ok(rules)
}

/// Every sub-schema matches. The first failure is reported verbatim.
///
/// # Errors
///
/// Returns `SchemaError::TooFewRules` for fewer than two sub-schemas.
pub fn all_of<I, S>(schemas: I) -> Result<Rule, SchemaError>
where
    I: IntoIterator<Item = S>,
    S: Into<Schema>,
{
    let rules = compile_many("all_of", schemas)?;
    Ok(Rule::new("all_of", move |value| {
        for rule in &rules {
            rule.check(value)?;
        }
        Ok(())
    }))
}

/// Exactly one sub-schema matches.
///
/// # Errors
///
/// Returns `SchemaError::TooFewRules` for fewer than two sub-schemas.
pub fn one_of<I, S>(schemas: I) -> Result<Rule, SchemaError>
where
    I: IntoIterator<Item = S>,
    S: Into<Schema>,
{
    let rules = compile_many("one_of", schemas)?;
    Ok(Rule::new("one_of", move |value| {
        let total = rules.len();
        let mut matched = false;
        for (i, rule) in rules.iter().enumerate() {
            if !rule.matches(value) {
                continue;
            }
            if matched {
                return invalid(format!(
                    "expected one of {total} rules, got multiple matches at index {i}"
                ));
            }
            matched = true;
        }
        if !matched {
            return invalid(format!("expected one of {total} rules, got 0 matches"));
        }
        Ok(())
    }))
}

/// At least one sub-schema matches. When none does, the sub-failure
/// messages are joined with `,` in declared order.
///
/// # Errors
///
/// Returns `SchemaError::TooFewRules` for fewer than two sub-schemas.
pub fn any_of<I, S>(schemas: I) -> Result<Rule, SchemaError>
where
    I: IntoIterator<Item = S>,
    S: Into<Schema>,
{
    let rules = compile_many("any_of", schemas)?;
    Ok(Rule::new("any_of", move |value| {
        let mut messages = Vec::with_capacity(rules.len());
        for rule in &rules {
            match rule.check(value) {
                Ok(()) => return Ok(()),
                Err(mismatch) => messages.push(mismatch.into_message()),
            }
        }
        invalid(messages.join(","))
    }))
}

/// No sub-schema matches.
///
/// # Errors
///
/// Returns `SchemaError::TooFewRules` for fewer than two sub-schemas.
pub fn none_of<I, S>(schemas: I) -> Result<Rule, SchemaError>
where
    I: IntoIterator<Item = S>,
    S: Into<Schema>,
{
    let rules = compile_many("none_of", schemas)?;
    Ok(Rule::new("none_of", move |value| {
        match rules.iter().position(|rule| rule.matches(value)) {
            Some(i) => invalid(format!(
                "expected none of {} rules, got a match at index {i}",
                rules.len()
            )),
            None => Ok(()),
        }
    }))
}

/// The wrapped schema does not match.
///
/// # Errors
///
/// Returns `SchemaError` if the wrapped schema cannot be compiled.
pub fn not(schema: impl Into<Schema>) -> Result<Rule, SchemaError> {
    let rule = normalize(schema)?;
    Ok(Rule::new("not", move |value| {
        if rule.matches(value) {
            return invalid("expected not to match, but got a match");
        }
        Ok(())
    }))
}

/// `null`, or a value matching the wrapped schema.
///
/// # Errors
///
/// Returns `SchemaError` if the wrapped schema cannot be compiled.
pub fn nullable(schema: impl Into<Schema>) -> Result<Rule, SchemaError> {
    let rule = normalize(schema)?;
    Ok(Rule::new("nullable", move |value| {
        if value.is_null() {
            return Ok(());
        }
        rule.check(value)
    }))
}

/// `null`, `undefined`, or a value matching the wrapped schema.
///
/// # Errors
///
/// Returns `SchemaError` if the wrapped schema cannot be compiled.
pub fn nullish(schema: impl Into<Schema>) -> Result<Rule, SchemaError> {
    let rule = normalize(schema)?;
    Ok(Rule::new("nullish", move |value| {
        if value.is_nullish() {
            return Ok(());
        }
        rule.check(value)
    }))
}

/// `undefined` (an absent property), or a value matching the wrapped schema.
///
/// # Errors
///
/// Returns `SchemaError` if the wrapped schema cannot be compiled.
pub fn optional(schema: impl Into<Schema>) -> Result<Rule, SchemaError> {
    let rule = normalize(schema)?;
    Ok(Rule::new("optional", move |value| {
        if value.is_undefined() {
            return Ok(());
        }
        rule.check(value)
    }))
}
