//! The tagged host value a BigInt operation consumes and produces.

use std::sync::Arc;

use bignum::BigInt;

use crate::primitive::ToPrimitive;

/// A host value, dispatched on by exhaustive pattern matching.
#[derive(Clone, Debug)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Arc<str>),
    BigInt(BigInt),
    Object(Object),
}

/// Object values. Identity is the allocation, so clones of one `Object`
/// are the same object.
#[derive(Clone, Debug)]
pub enum Object {
    /// A boxed BigInt, as produced by explicit boxing.
    BigInt(Arc<BigInt>),
    /// Any other host object, seen only through its conversion protocol.
    Host(Arc<dyn ToPrimitive>),
}

impl Object {
    /// Object identity.
    pub fn same(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::BigInt(a), Object::BigInt(b)) => Arc::ptr_eq(a, b),
            (Object::Host(a), Object::Host(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::String(s.into())
    }

    /// Wrap a host object.
    pub fn host(obj: impl ToPrimitive + 'static) -> Self {
        Value::Object(Object::Host(Arc::new(obj)))
    }

    /// The `typeof` tag.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Object(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::BigInt(_) => "bigint",
        }
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<BigInt> for Value {
    fn from(b: BigInt) -> Self {
        Value::BigInt(b)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}
