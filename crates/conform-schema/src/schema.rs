//! # Schemas: Declarative Inputs
//!
//! A [`Schema`] is anything the normalizer knows how to compile into a
//! [`Rule`]: an existing rule, a plain value, an ordered sequence of
//! sub-schemas, or an ordered key → sub-schema mapping ([`Shape`]).
//!
//! Schemas are immutable descriptions. Building one never validates
//! anything and never fails; problems (an unsupported value, a bad
//! combinator arity) are reported when the schema is compiled.
//!
//! ```
//! use conform_schema::{a_string, array_of, shape, validate};
//! use conform_core::Value;
//!
//! let user = shape! {
//!     "id" => a_string(),
//!     "tags" => array_of(a_string()).unwrap(),
//! };
//! let value = Value::from(serde_json::json!({"id": "u1", "tags": ["a", 2]}));
//! let outcome = validate(user, &value).unwrap();
//! assert_eq!(
//!     outcome.unwrap_err().message(),
//!     "[tags] [1] expected a string, got [object Number]"
//! );
//! ```

use conform_core::{Array, Date, ErrorValue, Function, Object, RegExp, Symbol, Value};

use crate::rule::Rule;

/// A declarative schema.
#[derive(Debug, Clone)]
pub enum Schema {
    /// An already compiled rule; used as is.
    Rule(Rule),
    /// A plain value, interpreted by kind: literal, tuple (arrays),
    /// error pattern (errors) or object shape (objects).
    Value(Value),
    /// Positional sub-schemas.
    Tuple(Vec<Schema>),
    /// Keyed sub-schemas.
    Shape(Shape),
}

impl Schema {
    /// Short description of the variant, used in trace output.
    pub fn kind(&self) -> &'static str {
        match self {
            Schema::Rule(_) => "rule",
            Schema::Value(_) => "value",
            Schema::Tuple(_) => "tuple",
            Schema::Shape(_) => "shape",
        }
    }

    /// Positional schema from anything convertible into schemas.
    pub fn tuple<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Schema>,
    {
        Schema::Tuple(items.into_iter().map(Into::into).collect())
    }
}

/// An ordered key → sub-schema mapping.
///
/// Keys are checked in declaration order; a key declared twice keeps its
/// first position and its last schema.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    entries: Vec<(String, Schema)>,
}

impl Shape {
    /// An empty shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the schema for `key`.
    pub fn insert(&mut self, key: impl Into<String>, schema: impl Into<Schema>) {
        let key = key.into();
        let schema = schema.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = schema,
            None => self.entries.push((key, schema)),
        }
    }

    /// Builder form of [`Shape::insert`].
    pub fn with(mut self, key: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.insert(key, schema);
        self
    }

    /// A shape whose sub-schemas are the own properties of `object`, each
    /// interpreted as a value schema.
    pub fn from_object(object: &Object) -> Self {
        object
            .entries()
            .iter()
            .map(|(k, v)| (k.clone(), Schema::Value(v.clone())))
            .collect()
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[(String, Schema)] {
        &self.entries
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the shape has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, S> FromIterator<(K, S)> for Shape
where
    K: Into<String>,
    S: Into<Schema>,
{
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        let mut shape = Shape::new();
        for (key, schema) in iter {
            shape.insert(key, schema);
        }
        shape
    }
}

impl IntoIterator for Shape {
    type Item = (String, Schema);
    type IntoIter = std::vec::IntoIter<(String, Schema)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Build a [`Shape`] from `key => schema` pairs.
///
/// Each schema expression goes through `Schema::from`, so literals, values,
/// rules and nested shapes can be mixed freely.
#[macro_export]
macro_rules! shape {
    ($($key:expr => $schema:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut shape = $crate::Shape::new();
        $( shape.insert($key, $crate::Schema::from($schema)); )*
        shape
    }};
}

/// Build a `Vec<Schema>` from heterogeneous schema expressions.
#[macro_export]
macro_rules! schemas {
    ($($schema:expr),* $(,)?) => {
        vec![$($crate::Schema::from($schema)),*]
    };
}

impl From<Rule> for Schema {
    fn from(rule: Rule) -> Self {
        Schema::Rule(rule)
    }
}

impl From<Shape> for Schema {
    fn from(shape: Shape) -> Self {
        Schema::Shape(shape)
    }
}

impl From<Vec<Schema>> for Schema {
    fn from(items: Vec<Schema>) -> Self {
        Schema::Tuple(items)
    }
}

impl From<Value> for Schema {
    fn from(value: Value) -> Self {
        Schema::Value(value)
    }
}

impl From<&Value> for Schema {
    fn from(value: &Value) -> Self {
        Schema::Value(value.clone())
    }
}

impl From<serde_json::Value> for Schema {
    fn from(json: serde_json::Value) -> Self {
        Schema::Value(Value::from(json))
    }
}

macro_rules! value_schema_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Schema {
                fn from(v: $t) -> Self {
                    Schema::Value(Value::from(v))
                }
            }
        )*
    };
}

value_schema_from!(
    bool, &str, String, f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, i128,
    Symbol, Date, RegExp, Array, Object, ErrorValue, Function, Vec<Value>
);
