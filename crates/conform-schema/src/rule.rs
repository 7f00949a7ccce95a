//! # Rules: Compiled Validating Functions
//!
//! A [`Rule`] is the callable form of a schema. It is produced once, by a
//! matcher or combinator constructor, and may then be applied any number of
//! times, from any number of threads: it only closes over immutable data and
//! other rules.

use std::fmt;
use std::sync::Arc;

use conform_core::Value;

use crate::outcome::Outcome;

type CheckFn = dyn Fn(&Value) -> Outcome + Send + Sync;

/// A compiled, reusable validating function.
#[derive(Clone)]
pub struct Rule {
    name: &'static str,
    check: Arc<CheckFn>,
}

impl Rule {
    /// Wrap a checking closure. `name` only appears in `Debug` output.
    pub fn new<F>(name: &'static str, check: F) -> Self
    where
        F: Fn(&Value) -> Outcome + Send + Sync + 'static,
    {
        Self {
            name,
            check: Arc::new(check),
        }
    }

    /// The constructor name this rule was built by.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the rule.
    pub fn check(&self, value: &Value) -> Outcome {
        (self.check)(value)
    }

    /// Apply the rule, discarding the message.
    pub fn matches(&self, value: &Value) -> bool {
        self.check(value).is_ok()
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule({})", self.name)
    }
}
