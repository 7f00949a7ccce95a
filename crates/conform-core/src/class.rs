//! # Runtime Classes: Explicit Is-A Registry
//!
//! A [`Class`] is a named runtime type with at most one parent. Values that
//! are "instances" (objects, errors, boxed primitives) report their class
//! through [`Value::class`](crate::Value::class), and reference-type matchers
//! answer "is this value an instance of X" by walking the parent chain.
//!
//! Classes compare by identity: two classes declared with the same name are
//! still different classes, exactly like two separately declared host
//! classes.
//!
//! ## Built-ins
//!
//! The host's standard classes are available as shared singletons
//! (`Class::object()`, `Class::error()`, `Class::type_error()`, ...). Every
//! built-in except `Object` has `Object` as its parent; the standard error
//! sub-classes extend `Error`.

use std::fmt;
use std::sync::{Arc, OnceLock};

/// A runtime class: a name plus an optional parent class.
#[derive(Clone)]
pub struct Class(Arc<ClassInfo>);

struct ClassInfo {
    name: String,
    parent: Option<Class>,
}

macro_rules! builtin {
    ($(#[$doc:meta])* $fn_name:ident => $name:literal extends $parent:ident) => {
        $(#[$doc])*
        pub fn $fn_name() -> &'static Class {
            static CLASS: OnceLock<Class> = OnceLock::new();
            CLASS.get_or_init(|| Class::with_parent($name, Some(Class::$parent().clone())))
        }
    };
}

impl Class {
    /// Declare a new class extending `Object`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_parent(name, Some(Self::object().clone()))
    }

    /// Declare a new class extending `parent`.
    pub fn extends(name: impl Into<String>, parent: &Class) -> Self {
        Self::with_parent(name, Some(parent.clone()))
    }

    fn with_parent(name: impl Into<String>, parent: Option<Class>) -> Self {
        Self(Arc::new(ClassInfo {
            name: name.into(),
            parent,
        }))
    }

    /// The root class. Has no parent.
    pub fn object() -> &'static Class {
        static CLASS: OnceLock<Class> = OnceLock::new();
        CLASS.get_or_init(|| Class::with_parent("Object", None))
    }

    builtin!(
        /// Class of every array.
        array => "Array" extends object
    );
    builtin!(
        /// Class of every function.
        function => "Function" extends object
    );
    builtin!(
        /// Boxed class of string primitives.
        string => "String" extends object
    );
    builtin!(
        /// Boxed class of number primitives.
        number => "Number" extends object
    );
    builtin!(
        /// Boxed class of boolean primitives.
        boolean => "Boolean" extends object
    );
    builtin!(
        /// Boxed class of bigint primitives.
        bigint => "BigInt" extends object
    );
    builtin!(
        /// Boxed class of symbols.
        symbol => "Symbol" extends object
    );
    builtin!(
        /// Class of every date.
        date => "Date" extends object
    );
    builtin!(
        /// Class of every regular expression.
        regexp => "RegExp" extends object
    );
    builtin!(
        /// Base class of all errors.
        error => "Error" extends object
    );
    builtin!(type_error => "TypeError" extends error);
    builtin!(range_error => "RangeError" extends error);
    builtin!(syntax_error => "SyntaxError" extends error);
    builtin!(reference_error => "ReferenceError" extends error);

    /// The class name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The direct parent, `None` only for `Object`.
    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Class) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Iterate this class and then each ancestor up to `Object`.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// True if `self` is `other` or inherits from it.
    pub fn is_a(&self, other: &Class) -> bool {
        self.ancestors().any(|c| c.ptr_eq(other))
    }

    /// True if `self` inherits from `other`, excluding `self == other`.
    pub fn descends_from(&self, other: &Class) -> bool {
        self.parent().is_some_and(|p| p.is_a(other))
    }

    /// True for `Error` and every class extending it.
    pub fn is_error(&self) -> bool {
        self.is_a(Self::error())
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.name())
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Iterator over a class and its ancestors, nearest first.
pub struct Ancestors<'a> {
    next: Option<&'a Class>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Class;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}
