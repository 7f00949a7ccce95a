//! # Dynamic Values
//!
//! [`Value`] is the closed runtime value tree validated by `conform-schema`.
//! It models a dynamically typed host: primitives compare by content, while
//! reference values (`Array`, `Object`, `Error`, `Function`, `Date`,
//! `RegExp`, `Symbol`) share their payload through `Arc` so that
//! [`Value::strict_eq`] can answer identity questions.
//!
//! ## Property Access
//!
//! [`Value::get`] reads a named property the way the host would after
//! boxing the receiver. Missing properties, and every property of `null` and
//! `undefined`, read as [`Value::Undefined`]. No getter can fail.

use std::fmt;
use std::sync::Arc;

use crate::class::Class;
use crate::pattern::RegExp;
use crate::render::render;
use crate::tag::{classify, ValueTag};
use crate::temporal::Date;

/// A dynamically typed runtime value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The explicit null value.
    Null,
    /// A boolean primitive.
    Bool(bool),
    /// A double-precision number primitive.
    Number(f64),
    /// An integer primitive of the bigint family.
    BigInt(i128),
    /// A string primitive.
    String(String),
    /// A unique symbol.
    Symbol(Symbol),
    /// A millisecond instant.
    Date(Date),
    /// A regular expression.
    RegExp(RegExp),
    /// An ordered sequence.
    Array(Array),
    /// An object with ordered own properties.
    Object(Object),
    /// An error object.
    Error(ErrorValue),
    /// A function, possibly a class constructor.
    Function(Function),
}

impl Value {
    /// Build an array value from anything convertible into values.
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Array(Array::new(items.into_iter().map(Into::into).collect()))
    }

    /// Build a plain object value from key/value pairs.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(Object::plain(entries))
    }

    /// Classify the value.
    pub fn tag(&self) -> ValueTag {
        classify(self)
    }

    /// Human-readable rendering used in messages.
    pub fn render(&self) -> String {
        render(self)
    }

    /// True for `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for `undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// True for `null` or `undefined`.
    pub fn is_nullish(&self) -> bool {
        self.is_null() || self.is_undefined()
    }

    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The number payload, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The array payload, if this is an array.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The class this value is an instance of once boxed.
    ///
    /// `None` for `null` and `undefined`.
    pub fn class(&self) -> Option<Class> {
        let class = match self {
            Value::Undefined | Value::Null => return None,
            Value::Bool(_) => Class::boolean(),
            Value::Number(_) => Class::number(),
            Value::BigInt(_) => Class::bigint(),
            Value::String(_) => Class::string(),
            Value::Symbol(_) => Class::symbol(),
            Value::Date(_) => Class::date(),
            Value::RegExp(_) => Class::regexp(),
            Value::Array(_) => Class::array(),
            Value::Function(_) => Class::function(),
            Value::Object(o) => o.class(),
            Value::Error(e) => e.class(),
        };
        Some(class.clone())
    }

    /// Read a property. Misses read as `Undefined`.
    pub fn get(&self, key: &str) -> Value {
        match self {
            Value::Object(o) => o.get(key).cloned().unwrap_or_default(),
            Value::Error(e) => e.get(key),
            Value::Array(a) => match key {
                "length" => Value::Number(a.len() as f64),
                _ => index_of(key)
                    .and_then(|i| a.get(i))
                    .cloned()
                    .unwrap_or_default(),
            },
            Value::String(s) => match key {
                "length" => Value::Number(s.encode_utf16().count() as f64),
                _ => index_of(key)
                    .and_then(|i| s.encode_utf16().nth(i))
                    .map(|unit| Value::String(String::from_utf16_lossy(&[unit])))
                    .unwrap_or_default(),
            },
            Value::Function(f) => match key {
                "name" => Value::String(f.name().to_string()),
                "length" => Value::Number(f.arity() as f64),
                _ => Value::Undefined,
            },
            Value::RegExp(r) => match key {
                "source" => Value::String(r.source().to_string()),
                "flags" => Value::String(r.flags().to_string()),
                _ => Value::Undefined,
            },
            _ => Value::Undefined,
        }
    }

    /// Strict equality: primitives by content (`+0 == -0`, `NaN != NaN`),
    /// reference values by identity.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a.ptr_eq(b),
            (Value::Date(a), Value::Date(b)) => a.ptr_eq(b),
            (Value::RegExp(a), Value::RegExp(b)) => a.ptr_eq(b),
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Error(a), Value::Error(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// Canonical array index: decimal digits without leading zeros.
fn index_of(key: &str) -> Option<usize> {
    let index: usize = key.parse().ok()?;
    (index.to_string() == key).then_some(index)
}

/// A unique symbol with an optional description.
#[derive(Debug, Clone)]
pub struct Symbol(Arc<Option<String>>);

impl Symbol {
    /// A new symbol with a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self(Arc::new(Some(description.into())))
    }

    /// A new symbol without a description.
    pub fn anonymous() -> Self {
        Self(Arc::new(None))
    }

    /// The description, if any.
    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Symbol) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// An ordered sequence of values.
#[derive(Debug, Clone, Default)]
pub struct Array(Arc<Vec<Value>>);

impl Array {
    /// Wrap a vector of values.
    pub fn new(items: Vec<Value>) -> Self {
        Self(Arc::new(items))
    }

    /// The items in order.
    pub fn items(&self) -> &[Value] {
        &self.0
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no items.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the items.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Array) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Ordered own properties. A repeated key replaces the earlier value in place.
fn collect_props<I, K, V>(entries: I) -> Vec<(String, Value)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    let mut props: Vec<(String, Value)> = Vec::new();
    for (key, value) in entries {
        let key = key.into();
        let value = value.into();
        match props.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => props.push((key, value)),
        }
    }
    props
}

/// An object: a class plus insertion-ordered own properties.
#[derive(Debug, Clone)]
pub struct Object(Arc<ObjectInner>);

#[derive(Debug)]
struct ObjectInner {
    class: Class,
    props: Vec<(String, Value)>,
}

impl Object {
    /// A plain object (class `Object`).
    pub fn plain<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::instance(Class::object(), entries)
    }

    /// An instance of `class` with the given own properties.
    pub fn instance<I, K, V>(class: &Class, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self(Arc::new(ObjectInner {
            class: class.clone(),
            props: collect_props(entries),
        }))
    }

    /// The class this object was created from.
    pub fn class(&self) -> &Class {
        &self.0.class
    }

    /// True if the class is exactly `Object`.
    pub fn is_plain(&self) -> bool {
        self.0.class.ptr_eq(Class::object())
    }

    /// Own property lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.props.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Own properties in insertion order.
    pub fn entries(&self) -> &[(String, Value)] {
        &self.0.props
    }

    /// Own property names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.props.iter().map(|(k, _)| k.as_str())
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// An error object: a class descending from `Error`, a message, and
/// extra own properties.
#[derive(Debug, Clone)]
pub struct ErrorValue(Arc<ErrorInner>);

#[derive(Debug)]
struct ErrorInner {
    class: Class,
    message: String,
    props: Vec<(String, Value)>,
}

impl ErrorValue {
    /// A plain `Error` with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::of(Class::error(), message)
    }

    /// An error of the given class with a message.
    pub fn of(class: &Class, message: impl Into<String>) -> Self {
        Self::with_props(class, message, Vec::<(String, Value)>::new())
    }

    /// An error of the given class with a message and extra own properties.
    pub fn with_props<I, K, V>(class: &Class, message: impl Into<String>, props: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self(Arc::new(ErrorInner {
            class: class.clone(),
            message: message.into(),
            props: collect_props(props),
        }))
    }

    /// The error class.
    pub fn class(&self) -> &Class {
        &self.0.class
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.0.message
    }

    /// The error name: an own string `name` property, else the class name.
    pub fn name(&self) -> &str {
        match self.prop("name") {
            Some(Value::String(name)) => name.as_str(),
            _ => self.0.class.name(),
        }
    }

    /// Extra own properties, in insertion order. Does not include `message`.
    pub fn props(&self) -> &[(String, Value)] {
        &self.0.props
    }

    fn prop(&self, key: &str) -> Option<&Value> {
        self.0.props.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Property read: `message`, then own properties, then `name`.
    pub fn get(&self, key: &str) -> Value {
        if key == "message" {
            return Value::String(self.0.message.clone());
        }
        if let Some(value) = self.prop(key) {
            return value.clone();
        }
        if key == "name" {
            return Value::String(self.0.class.name().to_string());
        }
        Value::Undefined
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &ErrorValue) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A function placeholder: name, declared arity and, for constructors, the
/// class it constructs.
#[derive(Debug, Clone)]
pub struct Function(Arc<FunctionInner>);

#[derive(Debug)]
struct FunctionInner {
    name: String,
    arity: usize,
    constructs: Option<Class>,
}

impl Function {
    /// A named function with `arity` declared parameters.
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self(Arc::new(FunctionInner {
            name: name.into(),
            arity,
            constructs: None,
        }))
    }

    /// An anonymous function.
    pub fn anonymous(arity: usize) -> Self {
        Self::new("", arity)
    }

    /// The constructor function of `class`.
    pub fn constructor(class: &Class) -> Self {
        Self(Arc::new(FunctionInner {
            name: class.name().to_string(),
            arity: 0,
            constructs: Some(class.clone()),
        }))
    }

    /// The function name; empty when anonymous.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Declared parameter count.
    pub fn arity(&self) -> usize {
        self.0.arity
    }

    /// The class this function constructs, if it is a constructor.
    pub fn constructs(&self) -> Option<&Class> {
        self.0.constructs.as_ref()
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

number_from!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Array::new(items))
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(Array::new(iter.into_iter().collect()))
    }
}

macro_rules! variant_from {
    ($($t:ident => $variant:ident),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

variant_from!(
    Symbol => Symbol,
    Date => Date,
    RegExp => RegExp,
    Array => Array,
    Object => Object,
    ErrorValue => Error,
    Function => Function
);
