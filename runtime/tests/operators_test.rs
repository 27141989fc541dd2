use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use runtime::boxing::box_bigint;
use runtime::operators::{binary_op, unary_op, update, BinaryOp, UnaryOp, UpdateOp};
use runtime::primitive::{ConversionObject, Method, PreferredType, ToPrimitive};
use runtime::{BigInt, ErrorKind, Object, RuntimeError, Value};

fn big(v: i128) -> Value {
    Value::from(BigInt::from_i128(v))
}

fn eval(op: BinaryOp, a: &Value, b: &Value) -> BigInt {
    binary_op(op, a, b)
        .expect("operator should succeed")
        .as_bigint()
        .cloned()
        .expect("BigInt result")
}

fn error_kind(op: BinaryOp, a: &Value, b: &Value) -> ErrorKind {
    binary_op(op, a, b).expect_err("operator should fail").kind()
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(eval(BinaryOp::Div, &big(-7), &big(2)), BigInt::from_i64(-3));
    assert_eq!(eval(BinaryOp::Rem, &big(-7), &big(2)), BigInt::from_i64(-1));
    assert_eq!(eval(BinaryOp::Div, &big(7), &big(-2)), BigInt::from_i64(-3));
    assert_eq!(eval(BinaryOp::Rem, &big(7), &big(-2)), BigInt::from_i64(1));
}

#[test]
fn truncating_division_law_holds() {
    let values = [
        -(1i128 << 100) - 17,
        -12345,
        -1,
        0,
        1,
        99,
        (1i128 << 90) + 3,
    ];
    for &a in &values {
        for &b in values.iter().filter(|&&b| b != 0) {
            let q = eval(BinaryOp::Div, &big(a), &big(b));
            let r = eval(BinaryOp::Rem, &big(a), &big(b));
            let back = BigInt::from_i128(b).mul(&q).add(&r);
            assert_eq!(back, BigInt::from_i128(a), "{a} / {b}");
        }
    }
}

#[test]
fn division_by_zero_is_range_error() {
    for a in [big(0), big(1), big(-5), big(1i128 << 100)] {
        assert_eq!(error_kind(BinaryOp::Div, &a, &big(0)), ErrorKind::Range);
        assert_eq!(error_kind(BinaryOp::Rem, &a, &big(0)), ErrorKind::Range);
    }
}

#[test]
fn results_grow_without_overflow() {
    let x = big(i64::MAX as i128);
    let square = eval(BinaryOp::Mul, &x, &x);
    assert_eq!(square.to_string(), "85070591730234615847396907784232501249");
    let power = eval(BinaryOp::Exp, &big(2), &big(200));
    assert_eq!(power.bit_length(), 201);
}

#[test]
fn exponent_size_ceiling_is_range_error() {
    assert_eq!(error_kind(BinaryOp::Exp, &big(2), &big(1i128 << 40)), ErrorKind::Range);
    assert_eq!(error_kind(BinaryOp::Shl, &big(1), &big(1i128 << 40)), ErrorKind::Range);
}

// ============================================================================
// Mixing kinds
// ============================================================================

#[test]
fn mixing_bigint_and_number_is_type_error() {
    let one = big(1);
    let two = Value::Number(2.0);
    for op in BinaryOp::ALL {
        assert_eq!(error_kind(op, &one, &two), ErrorKind::Type, "1n {op} 2");
        assert_eq!(error_kind(op, &two, &one), ErrorKind::Type, "2 {op} 1n");
    }
    assert_eq!(error_kind(BinaryOp::Sub, &Value::Number(2.0), &big(1)), ErrorKind::Type);
    assert_eq!(error_kind(BinaryOp::BitAnd, &big(1), &Value::Number(1.0)), ErrorKind::Type);
}

#[test]
fn booleans_and_nullish_do_not_promote() {
    assert_eq!(error_kind(BinaryOp::Add, &big(1), &Value::Bool(true)), ErrorKind::Type);
    assert_eq!(error_kind(BinaryOp::Mul, &big(1), &Value::Undefined), ErrorKind::Type);
    assert_eq!(error_kind(BinaryOp::BitOr, &Value::Null, &big(1)), ErrorKind::Type);
}

#[test]
fn objects_converting_to_bigint_are_accepted() {
    let obj = Value::host(
        ConversionObject::plain().with_value_of(Method::Returns(big(6))),
    );
    assert_eq!(eval(BinaryOp::BitAnd, &obj, &big(3)), BigInt::from_i64(2));
    assert_eq!(eval(BinaryOp::Mul, &box_bigint(BigInt::from_i64(7)), &obj), BigInt::from_i64(42));
}

#[test]
fn string_operand_concatenates() {
    let r = binary_op(BinaryOp::Add, &big(-12), &Value::from("px")).unwrap();
    assert_eq!(r.as_str(), Some("-12px"));
    let r = binary_op(BinaryOp::Add, &Value::from(""), &big(1i128 << 64)).unwrap();
    assert_eq!(r.as_str(), Some("18446744073709551616"));
    // Only `+` concatenates.
    assert_eq!(error_kind(BinaryOp::Sub, &big(1), &Value::from("1")), ErrorKind::Type);
}

// ============================================================================
// Bitwise and shifts
// ============================================================================

#[test]
fn bitwise_on_negative_operands() {
    assert_eq!(eval(BinaryOp::BitAnd, &big(-1), &big(0xff)), BigInt::from_i64(0xff));
    assert_eq!(eval(BinaryOp::BitOr, &big(-256), &big(0xff)), BigInt::from_i64(-1));
    assert_eq!(eval(BinaryOp::BitXor, &big(-1), &big(5)), BigInt::from_i64(-6));
    let r = unary_op(UnaryOp::BitNot, &big(-(1i128 << 70))).unwrap();
    assert_eq!(r.as_bigint(), Some(&BigInt::from_i128((1i128 << 70) - 1)));
}

#[test]
fn negative_shift_amount_reverses_direction() {
    let xs = [big(0), big(5), big(-5), big(0x1234_5678_9abc), big(-(1i128 << 100))];
    let ns = [big(1), big(7), big(64), big(130)];
    for x in &xs {
        for n in &ns {
            let neg_n = unary_op(UnaryOp::Neg, n).unwrap();
            assert_eq!(eval(BinaryOp::Shl, x, &neg_n), eval(BinaryOp::Sar, x, n));
            assert_eq!(eval(BinaryOp::Sar, x, &neg_n), eval(BinaryOp::Shl, x, n));
        }
    }
}

#[test]
fn huge_right_shift_collapses() {
    let huge = big(1i128 << 100);
    assert_eq!(eval(BinaryOp::Sar, &big(123), &huge), BigInt::zero());
    assert_eq!(eval(BinaryOp::Sar, &big(-123), &huge), BigInt::from_i64(-1));
}

#[test]
fn unsigned_right_shift_always_rejected() {
    let values = [big(0), big(1), big(-1), big(1i128 << 80), big(-(1i128 << 80))];
    for a in &values {
        for b in &values {
            assert_eq!(error_kind(BinaryOp::Shr, a, b), ErrorKind::Type);
        }
    }
}

// ============================================================================
// Unary and update
// ============================================================================

#[test]
fn logical_not_on_bigints() {
    let not = |v: Value| unary_op(UnaryOp::Not, &v).unwrap();
    assert!(matches!(not(big(0)), Value::Bool(true)));
    assert!(matches!(not(Value::from(BigInt::zero().neg())), Value::Bool(true)));
    assert!(matches!(not(big(1)), Value::Bool(false)));
    assert!(matches!(not(big(-1)), Value::Bool(false)));
}

#[test]
fn unary_plus_rejects_bigint() {
    let err = unary_op(UnaryOp::Plus, &big(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

/// Host object that counts how often it is asked for a primitive.
#[derive(Debug)]
struct Counting {
    value: i64,
    calls: AtomicUsize,
}

impl ToPrimitive for Counting {
    fn to_primitive(&self, _hint: PreferredType) -> Result<Option<Value>, RuntimeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(Value::from(BigInt::from_i64(self.value))))
    }
}

#[test]
fn update_converts_once_and_keeps_old_value() {
    let counting = Arc::new(Counting {
        value: -1,
        calls: AtomicUsize::new(0),
    });
    let obj = Value::Object(Object::Host(counting.clone()));
    let inc = update(UpdateOp::Increment, &obj).unwrap();
    assert_eq!(inc.old.as_bigint(), Some(&BigInt::from_i64(-1)));
    assert_eq!(inc.new.as_bigint(), Some(&BigInt::zero()));
    assert_eq!(counting.calls.load(Ordering::SeqCst), 1);

    let dec = update(UpdateOp::Decrement, &big(0)).unwrap();
    assert_eq!(dec.old.as_bigint(), Some(&BigInt::zero()));
    assert_eq!(dec.new.as_bigint(), Some(&BigInt::from_i64(-1)));
}
