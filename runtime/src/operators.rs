//! Operator dispatch by operand kind.
//!
//! BigInt operands only combine with BigInt operands. Number operands keep
//! IEEE-754 semantics so every operator is defined on every pair of
//! primitives, and a mixed pair is a TypeError.

use std::fmt;

use bignum::BigInt;

use crate::coerce::{to_boolean, to_int32, to_number, to_numeric, to_string, to_uint32, Numeric};
use crate::error::RuntimeError;
use crate::primitive::{to_primitive, PreferredType};
use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Exp,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    /// Signed right shift `>>`.
    Sar,
    /// Unsigned right shift `>>>`.
    Shr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Plus,
    BitNot,
    Not,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpdateOp {
    Increment,
    Decrement,
}

/// Outcome of `++`/`--`: `old` is what the postfix form evaluates to, `new`
/// is the prefix result and the value written back.
#[derive(Clone, Debug)]
pub struct Update {
    pub old: Value,
    pub new: Value,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 12] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Rem,
        BinaryOp::Exp,
        BinaryOp::BitAnd,
        BinaryOp::BitOr,
        BinaryOp::BitXor,
        BinaryOp::Shl,
        BinaryOp::Sar,
        BinaryOp::Shr,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Exp => "**",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Sar => ">>",
            BinaryOp::Shr => ">>>",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == s)
    }
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Plus => "+",
            UnaryOp::BitNot => "~",
            UnaryOp::Not => "!",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        [UnaryOp::Neg, UnaryOp::Plus, UnaryOp::BitNot, UnaryOp::Not]
            .into_iter()
            .find(|op| op.symbol() == s)
    }
}

impl UpdateOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UpdateOp::Increment => "++",
            UpdateOp::Decrement => "--",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "++" => Some(UpdateOp::Increment),
            "--" => Some(UpdateOp::Decrement),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UpdateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Binary operators
// ============================================================================

/// Evaluate `lhs op rhs`.
///
/// ```
/// use runtime::operators::{binary_op, BinaryOp};
/// use runtime::{BigInt, ErrorKind, Value};
///
/// let a = Value::from(BigInt::from_i64(-7));
/// let b = Value::from(BigInt::from_i64(2));
/// let q = binary_op(BinaryOp::Div, &a, &b).unwrap();
/// assert_eq!(q.as_bigint(), Some(&BigInt::from_i64(-3)));
///
/// let mixed = binary_op(BinaryOp::Add, &b, &Value::Number(2.0)).unwrap_err();
/// assert_eq!(mixed.kind(), ErrorKind::Type);
/// ```
pub fn binary_op(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value, RuntimeError> {
    if op == BinaryOp::Add {
        let l = to_primitive(lhs, PreferredType::Default)?;
        let r = to_primitive(rhs, PreferredType::Default)?;
        if matches!(l, Value::String(_)) || matches!(r, Value::String(_)) {
            let mut text = to_string(&l)?;
            text.push_str(&to_string(&r)?);
            return Ok(Value::from(text));
        }
        return numeric_op(op, &l, &r);
    }
    numeric_op(op, lhs, rhs)
}

fn numeric_op(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value, RuntimeError> {
    let l = to_numeric(lhs)?;
    let r = to_numeric(rhs)?;
    match (l, r) {
        (Numeric::BigInt(a), Numeric::BigInt(b)) => bigint_op(op, &a, &b).map(Value::BigInt),
        (Numeric::Number(a), Numeric::Number(b)) => Ok(Value::Number(number_op(op, a, b))),
        _ => Err(RuntimeError::type_error(
            "Cannot mix BigInt and other types, use explicit conversions",
        )),
    }
}

fn bigint_op(op: BinaryOp, a: &BigInt, b: &BigInt) -> Result<BigInt, RuntimeError> {
    Ok(match op {
        BinaryOp::Add => a.add(b),
        BinaryOp::Sub => a.sub(b),
        BinaryOp::Mul => a.mul(b),
        BinaryOp::Div => a.div(b)?,
        BinaryOp::Rem => a.rem(b)?,
        BinaryOp::Exp => a.pow(b)?,
        BinaryOp::BitAnd => a.bit_and(b),
        BinaryOp::BitOr => a.bit_or(b),
        BinaryOp::BitXor => a.bit_xor(b),
        BinaryOp::Shl => a.shl(b)?,
        BinaryOp::Sar => a.shr(b)?,
        BinaryOp::Shr => {
            return Err(RuntimeError::type_error(
                "BigInts have no unsigned right shift, use >> instead",
            ))
        }
    })
}

fn number_op(op: BinaryOp, a: f64, b: f64) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        // Rust's float remainder truncates like C's fmod.
        BinaryOp::Rem => a % b,
        BinaryOp::Exp => number_pow(a, b),
        BinaryOp::BitAnd => (to_int32(a) & to_int32(b)) as f64,
        BinaryOp::BitOr => (to_int32(a) | to_int32(b)) as f64,
        BinaryOp::BitXor => (to_int32(a) ^ to_int32(b)) as f64,
        BinaryOp::Shl => to_int32(a).wrapping_shl(to_uint32(b) & 31) as f64,
        BinaryOp::Sar => (to_int32(a) >> (to_uint32(b) & 31)) as f64,
        BinaryOp::Shr => (to_uint32(a) >> (to_uint32(b) & 31)) as f64,
    }
}

/// Number `**`. Differs from `powf` for NaN and ±1 bases with infinite or
/// NaN exponents.
fn number_pow(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() {
        return f64::NAN;
    }
    if exponent == 0.0 {
        return 1.0;
    }
    if base.abs() == 1.0 && exponent.is_infinite() {
        return f64::NAN;
    }
    base.powf(exponent)
}

// ============================================================================
// Unary operators
// ============================================================================

pub fn unary_op(op: UnaryOp, operand: &Value) -> Result<Value, RuntimeError> {
    match op {
        UnaryOp::Neg => Ok(match to_numeric(operand)? {
            Numeric::BigInt(b) => Value::BigInt(b.neg()),
            Numeric::Number(n) => Value::Number(-n),
        }),
        UnaryOp::BitNot => Ok(match to_numeric(operand)? {
            Numeric::BigInt(b) => Value::BigInt(b.bit_not()),
            Numeric::Number(n) => Value::Number(!to_int32(n) as f64),
        }),
        UnaryOp::Plus => to_number(operand).map(Value::Number),
        UnaryOp::Not => Ok(Value::Bool(!to_boolean(operand))),
    }
}

/// `++x` / `x++` / `--x` / `x--`. The operand is converted exactly once.
pub fn update(op: UpdateOp, operand: &Value) -> Result<Update, RuntimeError> {
    let old = to_numeric(operand)?;
    let new = match (&old, op) {
        (Numeric::BigInt(b), UpdateOp::Increment) => Value::BigInt(b.add(&BigInt::one())),
        (Numeric::BigInt(b), UpdateOp::Decrement) => Value::BigInt(b.sub(&BigInt::one())),
        (Numeric::Number(n), UpdateOp::Increment) => Value::Number(n + 1.0),
        (Numeric::Number(n), UpdateOp::Decrement) => Value::Number(n - 1.0),
    };
    Ok(Update {
        old: old.into(),
        new,
    })
}
