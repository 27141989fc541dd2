//! The ToPrimitive capability host objects expose to the engine.
//!
//! The engine never inspects an object's properties. It only asks the
//! object for a primitive under a preferred type and acts on the answer.

use std::fmt;

use crate::error::RuntimeError;
use crate::value::{Object, Value};

/// Conversion hint passed to [`ToPrimitive::to_primitive`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferredType {
    Default,
    Number,
    String,
}

/// Primitive conversion for host objects.
///
/// `Ok(None)` means the object has no primitive to offer; callers turn that
/// into a TypeError. An `Err` is an exception thrown by the conversion
/// itself and propagates unchanged.
pub trait ToPrimitive: Send + Sync + fmt::Debug {
    fn to_primitive(&self, hint: PreferredType) -> Result<Option<Value>, RuntimeError>;
}

/// One conversion method slot (`valueOf` or `toString`) of an ordinary object.
#[derive(Clone, Debug)]
pub enum Method {
    /// Not callable; skipped.
    Absent,
    /// Returns the receiver itself, which is not a primitive; skipped.
    ReturnsThis,
    /// Returns a fixed value. Object results are skipped like `ReturnsThis`.
    Returns(Value),
    /// Throws.
    Throws(RuntimeError),
}

impl Method {
    fn call(&self) -> Result<Option<Value>, RuntimeError> {
        match self {
            Method::Absent | Method::ReturnsThis => Ok(None),
            Method::Returns(v) if v.is_object() => Ok(None),
            Method::Returns(v) => Ok(Some(v.clone())),
            Method::Throws(e) => Err(e.clone()),
        }
    }
}

/// An ordinary object described by its two conversion methods.
///
/// Number and Default hints try `valueOf` first, then `toString`; the String
/// hint tries them in the opposite order.
#[derive(Clone, Debug)]
pub struct ConversionObject {
    pub value_of: Method,
    pub to_string: Method,
}

impl ConversionObject {
    /// `{}`: the inherited `valueOf` returns the object and `toString`
    /// yields `"[object Object]"`.
    pub fn plain() -> Self {
        Self {
            value_of: Method::ReturnsThis,
            to_string: Method::Returns(Value::from("[object Object]")),
        }
    }

    /// `Object.create(null)`: neither method exists.
    pub fn bare() -> Self {
        Self {
            value_of: Method::Absent,
            to_string: Method::Absent,
        }
    }

    pub fn with_value_of(mut self, method: Method) -> Self {
        self.value_of = method;
        self
    }

    pub fn with_to_string(mut self, method: Method) -> Self {
        self.to_string = method;
        self
    }
}

impl ToPrimitive for ConversionObject {
    fn to_primitive(&self, hint: PreferredType) -> Result<Option<Value>, RuntimeError> {
        let order = match hint {
            PreferredType::String => [&self.to_string, &self.value_of],
            PreferredType::Number | PreferredType::Default => [&self.value_of, &self.to_string],
        };
        for method in order {
            if let Some(prim) = method.call()? {
                return Ok(Some(prim));
            }
        }
        Ok(None)
    }
}

/// ToPrimitive on any value. Primitives are returned as they are.
pub fn to_primitive(value: &Value, hint: PreferredType) -> Result<Value, RuntimeError> {
    match value {
        Value::Object(Object::BigInt(boxed)) => Ok(match hint {
            PreferredType::String => Value::from(boxed.to_string()),
            PreferredType::Number | PreferredType::Default => Value::BigInt((**boxed).clone()),
        }),
        Value::Object(Object::Host(obj)) => match obj.to_primitive(hint)? {
            Some(prim) if !prim.is_object() => Ok(prim),
            _ => Err(RuntimeError::type_error(
                "Cannot convert object to primitive value",
            )),
        },
        prim => Ok(prim.clone()),
    }
}
