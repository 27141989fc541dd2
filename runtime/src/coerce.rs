//! Type conversions: ToBigInt, ToNumber, ToNumeric, ToString, ToBoolean,
//! ToIndex, and the callable `BigInt(value)` entry point.

use bignum::BigInt;

use crate::error::RuntimeError;
use crate::primitive::{to_primitive, PreferredType};
use crate::value::Value;

/// 2^53 - 1.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Result of ToNumeric.
#[derive(Clone, Debug, PartialEq)]
pub enum Numeric {
    Number(f64),
    BigInt(BigInt),
}

impl From<Numeric> for Value {
    fn from(n: Numeric) -> Self {
        match n {
            Numeric::Number(n) => Value::Number(n),
            Numeric::BigInt(b) => Value::BigInt(b),
        }
    }
}

// ============================================================================
// String grammar helpers
// ============================================================================

/// WhiteSpace and LineTerminator code points.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn trim(s: &str) -> &str {
    s.trim_matches(is_whitespace)
}

/// Split a `0b`/`0o`/`0x` prefix (either case) off `s`.
pub fn split_radix_prefix(s: &str) -> Option<(u32, &str)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'b' | b'B' => 2,
        b'o' | b'O' => 8,
        b'x' | b'X' => 16,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

/// StringToBigInt: surrounding whitespace, an optional radix prefix and a
/// non-empty digit run. No sign, separators, fraction or exponent.
/// The empty (or all-whitespace) string is zero.
///
/// ```
/// use runtime::coerce::string_to_bigint;
/// use runtime::BigInt;
///
/// assert_eq!(string_to_bigint("  0b101010").unwrap(), BigInt::from_i64(42));
/// assert_eq!(string_to_bigint("0x2a  ").unwrap(), BigInt::from_i64(42));
/// assert!(string_to_bigint("-1").is_err());
/// assert!(string_to_bigint("1.0").is_err());
/// ```
pub fn string_to_bigint(s: &str) -> Result<BigInt, RuntimeError> {
    let text = trim(s);
    if text.is_empty() {
        return Ok(BigInt::zero());
    }
    let (radix, digits) = split_radix_prefix(text).unwrap_or((10, text));
    BigInt::from_str_radix(digits, radix)
        .map_err(|_| RuntimeError::syntax_error(format!("Cannot convert {s} to a BigInt")))
}

/// StringToNumber. Anything outside the numeric literal grammar is NaN.
pub fn string_to_number(s: &str) -> f64 {
    let text = trim(s);
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some((radix, digits)) = split_radix_prefix(text) {
        return BigInt::from_str_radix(digits, radix).map_or(f64::NAN, |b| b.to_f64());
    }
    if is_decimal_literal(text) {
        text.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let frac_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }
    if mantissa_digits == 0 {
        return false;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}

/// Number::toString(10): shortest round-trip digits, exponent form outside
/// `1e-7 < |x| < 1e21`.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n < 0.0 {
        return format!("-{}", number_to_string(-n));
    }

    // `{:e}` yields the shortest digits that round-trip, as "d.ddde[-]x".
    let sci = format!("{n:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let point = exp.parse::<i32>().unwrap_or(0) + 1;

    if k <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let e = point - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", e.abs())
        } else {
            format!("{first}.{rest}e{sign}{}", e.abs())
        }
    }
}

// ============================================================================
// Integer conversions on numbers
// ============================================================================

/// ToIntegerOrInfinity on a number.
pub fn to_integer_or_infinity(n: f64) -> f64 {
    if n.is_nan() || n == 0.0 {
        0.0
    } else {
        n.trunc()
    }
}

fn modulo_2_32(n: f64) -> u32 {
    if !n.is_finite() {
        return 0;
    }
    n.trunc().rem_euclid(4_294_967_296.0) as u32
}

pub fn to_int32(n: f64) -> i32 {
    modulo_2_32(n) as i32
}

pub fn to_uint32(n: f64) -> u32 {
    modulo_2_32(n)
}

// ============================================================================
// Abstract conversions
// ============================================================================

/// ToBigInt. Numbers are rejected; only the callable `BigInt(value)`
/// converts them.
pub fn to_bigint(value: &Value) -> Result<BigInt, RuntimeError> {
    let prim = to_primitive(value, PreferredType::Number)?;
    match prim {
        Value::BigInt(b) => Ok(b),
        Value::Bool(b) => Ok(BigInt::from(b)),
        Value::String(s) => string_to_bigint(&s),
        Value::Number(n) => Err(RuntimeError::type_error(format!(
            "Cannot convert {} to a BigInt",
            number_to_string(n)
        ))),
        Value::Undefined => Err(RuntimeError::type_error(
            "Cannot convert undefined to a BigInt",
        )),
        Value::Null => Err(RuntimeError::type_error("Cannot convert null to a BigInt")),
        Value::Object(_) => Err(RuntimeError::type_error(
            "Cannot convert object to a BigInt",
        )),
    }
}

/// NumberToBigInt: exact, RangeError unless the number is integral.
pub fn number_to_bigint(n: f64) -> Result<BigInt, RuntimeError> {
    BigInt::from_f64(n).map_err(|_| {
        RuntimeError::range_error(format!(
            "The number {} cannot be converted to a BigInt because it is not an integer",
            number_to_string(n)
        ))
    })
}

/// The callable `BigInt(value)`.
///
/// ```
/// use runtime::coerce::construct;
/// use runtime::{BigInt, ErrorKind, Value};
///
/// assert_eq!(construct(&Value::Number(-0.0)).unwrap(), BigInt::zero());
/// assert_eq!(construct(&Value::Bool(true)).unwrap(), BigInt::one());
/// assert_eq!(construct(&Value::Number(4.5)).unwrap_err().kind(), ErrorKind::Range);
/// assert_eq!(construct(&Value::Undefined).unwrap_err().kind(), ErrorKind::Type);
/// ```
pub fn construct(value: &Value) -> Result<BigInt, RuntimeError> {
    let prim = to_primitive(value, PreferredType::Number)?;
    match prim {
        Value::Number(n) => number_to_bigint(n),
        other => to_bigint(&other),
    }
}

/// `new BigInt(value)`: BigInt has no constructor behavior.
pub fn construct_new(_value: &Value) -> Result<Value, RuntimeError> {
    Err(RuntimeError::type_error("BigInt is not a constructor"))
}

pub fn to_number(value: &Value) -> Result<f64, RuntimeError> {
    let prim = to_primitive(value, PreferredType::Number)?;
    match prim {
        Value::Undefined => Ok(f64::NAN),
        Value::Null => Ok(0.0),
        Value::Bool(b) => Ok(if b { 1.0 } else { 0.0 }),
        Value::Number(n) => Ok(n),
        Value::String(s) => Ok(string_to_number(&s)),
        Value::BigInt(_) => Err(RuntimeError::type_error(
            "Cannot convert a BigInt value to a number",
        )),
        Value::Object(_) => Err(RuntimeError::type_error(
            "Cannot convert object to a number",
        )),
    }
}

pub fn to_numeric(value: &Value) -> Result<Numeric, RuntimeError> {
    let prim = to_primitive(value, PreferredType::Number)?;
    match prim {
        Value::BigInt(b) => Ok(Numeric::BigInt(b)),
        other => to_number(&other).map(Numeric::Number),
    }
}

pub fn to_string(value: &Value) -> Result<String, RuntimeError> {
    let prim = to_primitive(value, PreferredType::String)?;
    Ok(match prim {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.to_string(),
        Value::BigInt(b) => b.to_string(),
        Value::Object(_) => {
            return Err(RuntimeError::type_error(
                "Cannot convert object to a string",
            ))
        }
    })
}

/// ToBoolean. A BigInt is falsy exactly when it is zero.
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => !(n.is_nan() || *n == 0.0),
        Value::String(s) => !s.is_empty(),
        Value::BigInt(b) => !b.is_zero(),
        Value::Object(_) => true,
    }
}

/// ToIndex: an integer in `0 ..= 2^53 - 1`, undefined reading as 0.
pub fn to_index(value: &Value) -> Result<u64, RuntimeError> {
    if matches!(value, Value::Undefined) {
        return Ok(0);
    }
    let integer = to_integer_or_infinity(to_number(value)?);
    if !(0.0..=MAX_SAFE_INTEGER).contains(&integer) {
        return Err(RuntimeError::range_error("Invalid value: not (convertible to) a safe integer"));
    }
    Ok(integer as u64)
}
