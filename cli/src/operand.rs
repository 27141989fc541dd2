//! Operand syntax for the command line.
//!
//! ```text
//! 42n  -0x2an  0b101n        BigInt literals
//! 4.5  -1e3  NaN  Infinity   numbers
//! "text"  'text'             strings (no escapes)
//! true  false  null  undefined
//! {}                         a plain object
//! box(42n)                   a boxed BigInt
//! ```

use anyhow::{anyhow, bail, Result};
use bignum::BigInt;
use runtime::boxing::box_bigint;
use runtime::coerce::{split_radix_prefix, string_to_number};
use runtime::primitive::ConversionObject;
use runtime::Value;

pub fn parse_operand(text: &str) -> Result<Value> {
    let text = text.trim();
    match text {
        "" => bail!("empty operand"),
        "undefined" => return Ok(Value::Undefined),
        "null" => return Ok(Value::Null),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        "NaN" => return Ok(Value::Number(f64::NAN)),
        "{}" => return Ok(Value::host(ConversionObject::plain())),
        _ => {}
    }

    if let Some(inner) = text.strip_prefix("box(").and_then(|rest| rest.strip_suffix(')')) {
        let literal = inner
            .trim()
            .strip_suffix('n')
            .ok_or_else(|| anyhow!("box() takes a BigInt literal, got {inner}"))?;
        return Ok(box_bigint(parse_bigint_literal(literal)?));
    }

    if let Some(s) = quoted(text) {
        return Ok(Value::from(s));
    }

    if let Some(literal) = text.strip_suffix('n') {
        return parse_bigint_literal(literal).map(Value::BigInt);
    }

    let n = string_to_number(text);
    if n.is_nan() {
        bail!("unrecognized operand: {text}");
    }
    Ok(Value::Number(n))
}

fn quoted(text: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|q| {
        text.strip_prefix(q)
            .and_then(|rest| rest.strip_suffix(q))
    })
}

/// The part of a BigInt literal before its `n` suffix, with an optional
/// leading `-`.
fn parse_bigint_literal(body: &str) -> Result<BigInt> {
    let (negative, digits) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    let (radix, digits) = split_radix_prefix(digits).unwrap_or((10, digits));
    if radix == 10 && digits.len() > 1 && digits.starts_with('0') {
        bail!("BigInt literal cannot have a leading zero: {body}n");
    }
    let magnitude = BigInt::from_str_radix(digits, radix)
        .map_err(|e| anyhow!("invalid BigInt literal {body}n: {e}"))?;
    Ok(if negative { magnitude.neg() } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bigint(text: &str) -> BigInt {
        parse_operand(text).unwrap().as_bigint().cloned().unwrap()
    }

    #[test]
    fn test_bigint_literals() {
        assert_eq!(bigint("42n"), BigInt::from_i64(42));
        assert_eq!(bigint("-0x2an"), BigInt::from_i64(-42));
        assert_eq!(bigint("0b101n"), BigInt::from_i64(5));
        assert_eq!(bigint("0O17n"), BigInt::from_i64(15));
        assert_eq!(bigint("0n"), BigInt::zero());
        assert_eq!(bigint("-0n"), BigInt::zero());
    }

    #[test]
    fn test_bad_bigint_literals() {
        assert!(parse_operand("1.5n").is_err());
        assert!(parse_operand("007n").is_err());
        assert!(parse_operand("n").is_err());
        assert!(parse_operand("0xn").is_err());
    }

    #[test]
    fn test_other_kinds() {
        assert_eq!(parse_operand("4.5").unwrap().as_number(), Some(4.5));
        assert_eq!(parse_operand("-Infinity").unwrap().as_number(), Some(f64::NEG_INFINITY));
        assert!(parse_operand("NaN").unwrap().as_number().is_some_and(f64::is_nan));
        assert_eq!(parse_operand("\"0x2a\"").unwrap().as_str(), Some("0x2a"));
        assert_eq!(parse_operand("''").unwrap().as_str(), Some(""));
        assert!(matches!(parse_operand("null").unwrap(), Value::Null));
        assert_eq!(parse_operand("{}").unwrap().type_of(), "object");
        assert_eq!(parse_operand("box(7n)").unwrap().type_of(), "object");
        assert!(parse_operand("box(7)").is_err());
        assert!(parse_operand("hello").is_err());
        assert!(parse_operand("").is_err());
    }
}
