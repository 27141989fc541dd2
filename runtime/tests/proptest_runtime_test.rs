//! Property-based tests for the host-facing operations.

use proptest::prelude::*;
use runtime::builtins::lookup;
use runtime::coerce::construct;
use runtime::compare::{loose_equals, relational, RelOp};
use runtime::operators::{binary_op, BinaryOp};
use runtime::parse::parse_bigint;
use runtime::{BigInt, ErrorKind, Value};

fn multi_limb() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), prop::collection::vec(any::<u64>(), 0..5))
        .prop_map(|(negative, limbs)| BigInt::from_limbs(negative, limbs))
}

fn to_string_radix(x: &BigInt, radix: u32) -> String {
    let native = lookup("BigInt.prototype.toString").expect("registered");
    let text = (native.func)(&Value::from(x.clone()), &[Value::Number(radix as f64)])
        .expect("radix in range");
    text.as_str().expect("string result").to_string()
}

proptest! {
    #[test]
    fn to_string_then_parse_round_trips(x in multi_limb(), radix in 2u32..=36) {
        let text = to_string_radix(&x, radix);
        prop_assert_eq!(parse_bigint(&text, Some(radix)).unwrap(), x);
    }

    #[test]
    fn division_law_through_operators(a in multi_limb(), b in multi_limb()) {
        let (va, vb) = (Value::from(a.clone()), Value::from(b.clone()));
        if b.is_zero() {
            let err = binary_op(BinaryOp::Div, &va, &vb).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::Range);
        } else {
            let q = binary_op(BinaryOp::Div, &va, &vb).unwrap();
            let r = binary_op(BinaryOp::Rem, &va, &vb).unwrap();
            let back = binary_op(
                BinaryOp::Add,
                &binary_op(BinaryOp::Mul, &vb, &q).unwrap(),
                &r,
            )
            .unwrap();
            prop_assert_eq!(back.as_bigint(), Some(&a));
        }
    }

    #[test]
    fn mixed_operands_always_rejected(a in multi_limb(), n in any::<f64>()) {
        for op in BinaryOp::ALL {
            let err = binary_op(op, &Value::from(a.clone()), &Value::Number(n)).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::Type);
        }
    }

    #[test]
    fn integral_numbers_construct_exactly(m in -(1i64 << 53)..(1i64 << 53)) {
        let n = m as f64;
        let x = construct(&Value::Number(n)).unwrap();
        prop_assert_eq!(x.to_i64(), Some(m));
        prop_assert!(loose_equals(&Value::from(x.clone()), &Value::Number(n)).unwrap());
        prop_assert!(!relational(RelOp::Lt, &Value::from(x), &Value::Number(n)).unwrap());
    }
}
