//! Strict, loose and relational comparison.

use std::cmp::Ordering;
use std::fmt;

use crate::coerce::{string_to_bigint, string_to_number, to_numeric, Numeric};
use crate::error::RuntimeError;
use crate::primitive::{to_primitive, PreferredType};
use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelOp {
    Lt,
    Le,
    Gt,
    Ge,
}

impl RelOp {
    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Lt => "<",
            RelOp::Le => "<=",
            RelOp::Gt => ">",
            RelOp::Ge => ">=",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "<" => Some(RelOp::Lt),
            "<=" => Some(RelOp::Le),
            ">" => Some(RelOp::Gt),
            ">=" => Some(RelOp::Ge),
            _ => None,
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Equality
// ============================================================================

/// `===`. Never fails; values of different kinds are unequal.
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (Value::Object(x), Value::Object(y)) => x.same(y),
        _ => false,
    }
}

fn same_kind(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

/// `==`. Fails only when an object's primitive conversion fails.
///
/// ```
/// use runtime::compare::loose_equals;
/// use runtime::{BigInt, Value};
///
/// let zero = Value::from(BigInt::zero());
/// assert!(loose_equals(&zero, &Value::Number(-0.0)).unwrap());
/// assert!(loose_equals(&zero, &Value::from("")).unwrap());
/// assert!(!loose_equals(&zero, &Value::Number(f64::NAN)).unwrap());
/// ```
pub fn loose_equals(a: &Value, b: &Value) -> Result<bool, RuntimeError> {
    if same_kind(a, b) {
        return Ok(strict_equals(a, b));
    }
    match (a, b) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => Ok(true),
        (Value::Number(x), Value::String(s)) => Ok(*x == string_to_number(s)),
        (Value::String(s), Value::Number(y)) => Ok(string_to_number(s) == *y),
        (Value::BigInt(x), Value::String(s)) | (Value::String(s), Value::BigInt(x)) => {
            Ok(string_to_bigint(s).is_ok_and(|y| *x == y))
        }
        (Value::Bool(x), other) => loose_equals(&Value::Number(bool_to_number(*x)), other),
        (other, Value::Bool(y)) => loose_equals(other, &Value::Number(bool_to_number(*y))),
        (
            Value::Number(_) | Value::String(_) | Value::BigInt(_),
            Value::Object(_),
        ) => loose_equals(a, &to_primitive(b, PreferredType::Default)?),
        (
            Value::Object(_),
            Value::Number(_) | Value::String(_) | Value::BigInt(_),
        ) => loose_equals(&to_primitive(a, PreferredType::Default)?, b),
        (Value::BigInt(x), Value::Number(y)) | (Value::Number(y), Value::BigInt(x)) => {
            Ok(x.cmp_f64(*y) == Some(Ordering::Equal))
        }
        _ => Ok(false),
    }
}

fn bool_to_number(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

// ============================================================================
// Relational comparison
// ============================================================================

/// `<`, `<=`, `>` and `>=`. Operands are converted left to right.
pub fn relational(op: RelOp, lhs: &Value, rhs: &Value) -> Result<bool, RuntimeError> {
    let l = to_primitive(lhs, PreferredType::Number)?;
    let r = to_primitive(rhs, PreferredType::Number)?;
    // An undefined comparison (NaN, or an unparsable string against a
    // BigInt) is false for every operator.
    Ok(match op {
        RelOp::Lt => less_than(&l, &r)? == Some(true),
        RelOp::Gt => less_than(&r, &l)? == Some(true),
        RelOp::Le => less_than(&r, &l)? == Some(false),
        RelOp::Ge => less_than(&l, &r)? == Some(false),
    })
}

/// IsLessThan on primitives. `None` is the undefined result.
fn less_than(x: &Value, y: &Value) -> Result<Option<bool>, RuntimeError> {
    match (x, y) {
        (Value::String(a), Value::String(b)) => {
            Ok(Some(a.encode_utf16().lt(b.encode_utf16())))
        }
        (Value::BigInt(a), Value::String(b)) => {
            Ok(string_to_bigint(b).ok().map(|b| *a < b))
        }
        (Value::String(a), Value::BigInt(b)) => {
            Ok(string_to_bigint(a).ok().map(|a| a < *b))
        }
        _ => {
            let nx = to_numeric(x)?;
            let ny = to_numeric(y)?;
            Ok(match (nx, ny) {
                (Numeric::Number(a), Numeric::Number(b)) => {
                    a.partial_cmp(&b).map(|o| o == Ordering::Less)
                }
                (Numeric::BigInt(a), Numeric::BigInt(b)) => Some(a < b),
                (Numeric::BigInt(a), Numeric::Number(b)) => {
                    a.cmp_f64(b).map(|o| o == Ordering::Less)
                }
                (Numeric::Number(a), Numeric::BigInt(b)) => {
                    b.cmp_f64(a).map(|o| o == Ordering::Greater)
                }
            })
        }
    }
}
