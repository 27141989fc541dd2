//! Lenient, `parseInt`-style BigInt parsing.

use bignum::BigInt;

use crate::coerce::is_whitespace;
use crate::error::RuntimeError;

/// Parse the longest valid digit prefix of `text`.
///
/// Leading whitespace and a `+`/`-` sign are accepted. A `0x`/`0X` prefix is
/// recognized when `radix` is absent (which otherwise means 10) or 16.
/// Trailing characters that are not digits of the radix end the number
/// instead of failing it.
///
/// ```
/// use runtime::parse::parse_bigint;
/// use runtime::BigInt;
///
/// assert_eq!(parse_bigint("2748junk", None).unwrap(), BigInt::from_i64(2748));
/// assert_eq!(parse_bigint("-0x2a", None).unwrap(), BigInt::from_i64(-42));
/// assert_eq!(parse_bigint("zz", Some(36)).unwrap(), BigInt::from_i64(1295));
/// assert!(parse_bigint("junk", None).is_err());
/// ```
pub fn parse_bigint(text: &str, radix: Option<u32>) -> Result<BigInt, RuntimeError> {
    if let Some(r) = radix {
        if !(2..=36).contains(&r) {
            return Err(RuntimeError::range_error(format!(
                "radix must be between 2 and 36, got {r}"
            )));
        }
    }

    let radix_absent = radix.is_none();
    let mut rest = text.trim_start_matches(is_whitespace);
    let negative = match rest.as_bytes().first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let mut radix = radix.unwrap_or(10);
    if radix == 16 || radix_absent {
        if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            rest = hex;
            radix = 16;
        }
    }

    let (value, consumed) = BigInt::parse_prefix(rest, radix)?;
    if consumed == 0 {
        return Err(RuntimeError::syntax_error(format!(
            "Cannot parse {text} as a BigInt"
        )));
    }
    Ok(if negative { value.neg() } else { value })
}
