//! Radix text conversion (bases 2 through 36).
//!
//! Formatting divides the magnitude by the largest power of the radix that
//! fits in one limb and emits that many digits per step; parsing runs the
//! same chunking in reverse. Both are exact integer algorithms.

use std::str::FromStr;

use crate::bigint::BigInt;
use crate::error::BigIntError;
use crate::limbs;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn check_radix(radix: u32) -> Result<(), BigIntError> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(BigIntError::InvalidRadix(radix))
    }
}

/// Largest power of `radix` that fits in a limb, and how many digits it spans.
fn chunk(radix: u32) -> (u64, usize) {
    let radix = radix as u64;
    let mut power = radix;
    let mut digits = 1;
    while let Some(next) = power.checked_mul(radix) {
        power = next;
        digits += 1;
    }
    (power, digits)
}

impl BigInt {
    /// ASCII digits of the magnitude, most significant first. `radix` must
    /// already be validated.
    pub(crate) fn magnitude_digits(&self, radix: u32) -> Vec<u8> {
        if self.mag.is_empty() {
            return vec![b'0'];
        }
        let (power, width) = chunk(radix);
        let radix = radix as u64;
        let mut rest = self.mag.clone();
        let mut out = Vec::with_capacity(self.bit_length() as usize / 3 + 1);
        while !rest.is_empty() {
            let (quotient, mut chunk_value) = limbs::div_rem_small(&rest, power);
            rest = quotient;
            for _ in 0..width {
                // Only the most significant chunk stops early.
                if rest.is_empty() && chunk_value == 0 {
                    break;
                }
                out.push(DIGITS[(chunk_value % radix) as usize]);
                chunk_value /= radix;
            }
        }
        out.reverse();
        out
    }

    /// Format in `radix` with lowercase letters and a leading `-` for
    /// negative values.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// assert_eq!(BigInt::from_i64(-255).to_str_radix(16).unwrap(), "-ff");
    /// assert_eq!(BigInt::zero().to_str_radix(2).unwrap(), "0");
    /// assert!(BigInt::one().to_str_radix(37).is_err());
    /// ```
    pub fn to_str_radix(&self, radix: u32) -> Result<String, BigIntError> {
        check_radix(radix)?;
        let mut out = String::with_capacity(self.mag.len() * 20 + 1);
        if self.negative {
            out.push('-');
        }
        out.extend(self.magnitude_digits(radix).into_iter().map(char::from));
        Ok(out)
    }

    /// Parse the longest leading run of `radix` digits.
    ///
    /// Returns the value and the number of bytes consumed; consuming zero
    /// bytes yields zero. No sign, prefix or whitespace is recognized.
    pub fn parse_prefix(src: &str, radix: u32) -> Result<(Self, usize), BigIntError> {
        check_radix(radix)?;
        let (power, width) = chunk(radix);
        let mut mag = Vec::new();
        let mut acc = 0u64;
        let mut acc_digits = 0usize;
        let mut consumed = 0usize;
        for byte in src.bytes() {
            let Some(digit) = (byte as char).to_digit(radix) else {
                break;
            };
            acc = acc * radix as u64 + digit as u64;
            acc_digits += 1;
            consumed += 1;
            if acc_digits == width {
                limbs::mul_small_add_in_place(&mut mag, power, acc);
                acc = 0;
                acc_digits = 0;
            }
        }
        if acc_digits > 0 {
            let scale = (radix as u64).pow(acc_digits as u32);
            limbs::mul_small_add_in_place(&mut mag, scale, acc);
        }
        Ok((Self::from_parts(false, mag), consumed))
    }

    /// Parse a complete, non-empty run of `radix` digits.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let x = BigInt::from_str_radix("2a", 16).unwrap();
    /// assert_eq!(x, BigInt::from_i64(42));
    /// assert!(BigInt::from_str_radix("2g", 16).is_err());
    /// assert!(BigInt::from_str_radix("-1", 10).is_err());
    /// ```
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, BigIntError> {
        check_radix(radix)?;
        if src.is_empty() {
            return Err(BigIntError::Empty);
        }
        let (value, consumed) = Self::parse_prefix(src, radix)?;
        if consumed != src.len() {
            return Err(BigIntError::InvalidDigit);
        }
        Ok(value)
    }
}

/// Decimal with an optional leading `-`.
impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('-') {
            Some(digits) => Self::from_str_radix(digits, 10).map(|v| v.neg()),
            None => Self::from_str_radix(s, 10),
        }
    }
}
