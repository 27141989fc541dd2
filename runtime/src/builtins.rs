use crate::boxing::this_bigint_value;
use crate::coerce::{construct, to_bigint, to_index, to_int32, to_integer_or_infinity, to_number, to_string};
use crate::error::RuntimeError;
use crate::parse::parse_bigint;
use crate::value::Value;

// The unified signature for every builtin.
// this: the receiver (undefined for plain calls).
// args: the call arguments; missing ones read as undefined.
pub type NativeFn = fn(this: &Value, args: &[Value]) -> Result<Value, RuntimeError>;

#[derive(Clone, Copy)]
pub struct NativeObj {
    pub name: &'static str,
    pub func: NativeFn,
    pub arity: usize,
}

static UNDEFINED: Value = Value::Undefined;

fn arg(args: &[Value], index: usize) -> &Value {
    args.get(index).unwrap_or(&UNDEFINED)
}

/// `BigInt(value)`
pub fn native_bigint(_this: &Value, args: &[Value]) -> Result<Value, RuntimeError> {
    construct(arg(args, 0)).map(Value::BigInt)
}

/// `BigInt.asIntN(bits, bigint)`
pub fn native_as_int_n(_this: &Value, args: &[Value]) -> Result<Value, RuntimeError> {
    let bits = to_index(arg(args, 0))?;
    let value = to_bigint(arg(args, 1))?;
    Ok(Value::BigInt(value.as_int_n(bits)))
}

/// `BigInt.asUintN(bits, bigint)`
pub fn native_as_uint_n(_this: &Value, args: &[Value]) -> Result<Value, RuntimeError> {
    let bits = to_index(arg(args, 0))?;
    let value = to_bigint(arg(args, 1))?;
    Ok(Value::BigInt(value.as_uint_n(bits)?))
}

/// `BigInt.prototype.toString(radix)`
pub fn native_to_string(this: &Value, args: &[Value]) -> Result<Value, RuntimeError> {
    let value = this_bigint_value(this)?;
    let radix = match arg(args, 0) {
        Value::Undefined => 10,
        r => {
            let r = to_integer_or_infinity(to_number(r)?);
            if !(2.0..=36.0).contains(&r) {
                return Err(RuntimeError::range_error(
                    "toString() radix must be between 2 and 36",
                ));
            }
            r as u32
        }
    };
    Ok(Value::from(value.to_str_radix(radix)?))
}

/// `BigInt.prototype.valueOf()`
pub fn native_value_of(this: &Value, _args: &[Value]) -> Result<Value, RuntimeError> {
    this_bigint_value(this).map(Value::BigInt)
}

/// `BigInt.prototype.toLocaleString()`: plain decimal, no grouping.
pub fn native_to_locale_string(this: &Value, _args: &[Value]) -> Result<Value, RuntimeError> {
    let value = this_bigint_value(this)?;
    Ok(Value::from(value.to_string()))
}

/// `parseBigInt(text, radix)`. A radix of 0 or undefined means "detect".
pub fn native_parse_bigint(_this: &Value, args: &[Value]) -> Result<Value, RuntimeError> {
    let text = to_string(arg(args, 0))?;
    let radix = match arg(args, 1) {
        Value::Undefined => None,
        r => match to_int32(to_number(r)?) {
            0 => None,
            r => Some(u32::try_from(r).map_err(|_| {
                RuntimeError::range_error(format!("radix must be between 2 and 36, got {r}"))
            })?),
        },
    };
    parse_bigint(&text, radix).map(Value::BigInt)
}

pub static BUILTINS: &[NativeObj] = &[
    NativeObj {
        name: "BigInt",
        func: native_bigint,
        arity: 1,
    },
    NativeObj {
        name: "BigInt.asIntN",
        func: native_as_int_n,
        arity: 2,
    },
    NativeObj {
        name: "BigInt.asUintN",
        func: native_as_uint_n,
        arity: 2,
    },
    NativeObj {
        name: "BigInt.prototype.toString",
        func: native_to_string,
        arity: 0,
    },
    NativeObj {
        name: "BigInt.prototype.valueOf",
        func: native_value_of,
        arity: 0,
    },
    NativeObj {
        name: "BigInt.prototype.toLocaleString",
        func: native_to_locale_string,
        arity: 0,
    },
    NativeObj {
        name: "parseBigInt",
        func: native_parse_bigint,
        arity: 2,
    },
];

pub fn lookup(name: &str) -> Option<&'static NativeObj> {
    BUILTINS.iter().find(|b| b.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxing::box_bigint;
    use bignum::BigInt;

    fn call(name: &str, this: &Value, args: &[Value]) -> Result<Value, RuntimeError> {
        let native = lookup(name).expect("builtin registered");
        (native.func)(this, args)
    }

    fn big(v: i64) -> Value {
        Value::from(BigInt::from_i64(v))
    }

    #[test]
    fn test_table_names_are_unique() {
        for (i, a) in BUILTINS.iter().enumerate() {
            assert!(BUILTINS[i + 1..].iter().all(|b| b.name != a.name), "{}", a.name);
        }
        assert!(lookup("BigInt.prototype.toJSON").is_none());
    }

    #[test]
    fn test_missing_arguments_read_as_undefined() {
        let err = call("BigInt", &Value::Undefined, &[]).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeError(_)));
    }

    #[test]
    fn test_to_string_radix() {
        let r = call("BigInt.prototype.toString", &big(255), &[Value::Number(16.0)]).unwrap();
        assert_eq!(r.as_str(), Some("ff"));
        let r = call("BigInt.prototype.toString", &big(-255), &[]).unwrap();
        assert_eq!(r.as_str(), Some("-255"));
        let r = call("BigInt.prototype.toString", &big(35), &[Value::from("36")]).unwrap();
        assert_eq!(r.as_str(), Some("z"));
        let err = call("BigInt.prototype.toString", &big(1), &[Value::Number(37.0)]).unwrap_err();
        assert!(matches!(err, RuntimeError::RangeError(_)));
        let err = call("BigInt.prototype.toString", &Value::Number(1.0), &[]).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeError(_)));
    }

    #[test]
    fn test_value_of_unboxes() {
        let boxed = box_bigint(BigInt::from_i64(9));
        let r = call("BigInt.prototype.valueOf", &boxed, &[]).unwrap();
        assert_eq!(r.as_bigint(), Some(&BigInt::from_i64(9)));
        let r = call("BigInt.prototype.toLocaleString", &boxed, &[]).unwrap();
        assert_eq!(r.as_str(), Some("9"));
    }

    #[test]
    fn test_as_int_n_and_as_uint_n() {
        let r = call("BigInt.asIntN", &Value::Undefined, &[Value::Number(8.0), big(255)]).unwrap();
        assert_eq!(r.as_bigint(), Some(&BigInt::from_i64(-1)));
        let r = call("BigInt.asUintN", &Value::Undefined, &[Value::Number(8.0), big(-1)]).unwrap();
        assert_eq!(r.as_bigint(), Some(&BigInt::from_i64(255)));
        // The value argument goes through ToBigInt, which rejects numbers.
        let err = call("BigInt.asIntN", &Value::Undefined, &[Value::Number(8.0), Value::Number(1.0)])
            .unwrap_err();
        assert!(matches!(err, RuntimeError::TypeError(_)));
        let err = call("BigInt.asUintN", &Value::Undefined, &[Value::Number(-1.0), big(1)])
            .unwrap_err();
        assert!(matches!(err, RuntimeError::RangeError(_)));
    }

    #[test]
    fn test_parse_bigint() {
        let r = call("parseBigInt", &Value::Undefined, &[Value::from("ff"), Value::Number(16.0)]).unwrap();
        assert_eq!(r.as_bigint(), Some(&BigInt::from_i64(255)));
        let r = call("parseBigInt", &Value::Undefined, &[Value::from("0x10"), Value::Number(0.0)]).unwrap();
        assert_eq!(r.as_bigint(), Some(&BigInt::from_i64(16)));
        let err = call("parseBigInt", &Value::Undefined, &[Value::from("1"), Value::Number(-2.0)])
            .unwrap_err();
        assert!(matches!(err, RuntimeError::RangeError(_)));
    }
}
