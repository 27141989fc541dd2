//! Exact conversions and comparisons between BigInt and IEEE-754 doubles.

use std::cmp::Ordering;

use crate::bigint::BigInt;
use crate::error::BigIntError;
use crate::limbs;

const MANTISSA_BITS: u64 = 52;
const EXP_BIAS: i64 = 1023;

impl BigInt {
    /// Exact conversion from an integral double.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// assert_eq!(BigInt::from_f64(-1e20).unwrap().to_string(), "-100000000000000000000");
    /// assert!(BigInt::from_f64(1.5).is_err());
    /// assert!(BigInt::from_f64(f64::NAN).is_err());
    /// ```
    pub fn from_f64(value: f64) -> Result<Self, BigIntError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(BigIntError::NotAnInteger);
        }
        if value == 0.0 {
            return Ok(Self::zero());
        }
        let bits = value.to_bits();
        let biased = ((bits >> MANTISSA_BITS) & 0x7ff) as i64;
        // Integral nonzero doubles are never subnormal.
        let mantissa = (bits & ((1u64 << MANTISSA_BITS) - 1)) | (1u64 << MANTISSA_BITS);
        let shift = biased - EXP_BIAS - MANTISSA_BITS as i64;
        let mag = if shift >= 0 {
            limbs::shl(&[mantissa], shift as u64)
        } else {
            vec![mantissa >> -shift]
        };
        Ok(Self::from_parts(value < 0.0, mag))
    }

    /// Nearest double, ties to even. Values beyond the double range become
    /// an infinity of the same sign.
    pub fn to_f64(&self) -> f64 {
        let bits = self.bit_length();
        let magnitude = if bits <= 64 {
            limbs::to_u64(&self.mag).map_or(0.0, |m| m as f64)
        } else {
            let shift = bits - 64;
            let top = limbs::to_u64(&limbs::shr(&self.mag, shift)).unwrap_or(u64::MAX);
            // Fold the discarded bits into a sticky bit so the u64 -> f64
            // rounding sees exact halfway cases correctly.
            let sticky = limbs::has_low_bits(&self.mag, shift) as u64;
            let head = (top | sticky) as f64;
            if shift > EXP_BIAS as u64 {
                f64::INFINITY
            } else {
                head * f64::from_bits((shift + EXP_BIAS as u64) << MANTISSA_BITS)
            }
        };
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Compare against a double by exact mathematical value.
    ///
    /// Returns `None` only for NaN.
    pub fn cmp_f64(&self, other: f64) -> Option<Ordering> {
        if other.is_nan() {
            return None;
        }
        if other.is_infinite() {
            return Some(if other > 0.0 {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }
        let whole = other.trunc();
        let truncated = Self::from_f64(whole).ok()?;
        match self.cmp(&truncated) {
            Ordering::Equal => {
                let frac = other - whole;
                Some(if frac > 0.0 {
                    Ordering::Less
                } else if frac < 0.0 {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                })
            }
            ord => Some(ord),
        }
    }
}
