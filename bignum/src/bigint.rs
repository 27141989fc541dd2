//! Arbitrary-precision signed integers in sign-and-magnitude form.
//!
//! The magnitude is a little-endian vector of 64-bit limbs with no
//! most-significant zero limbs. Zero is the empty vector and is never
//! negative, so `-0` and `0` share one representation.

use std::cmp::Ordering;
use std::fmt;
use std::ops;

use crate::error::BigIntError;
use crate::limbs;

/// Largest bit length a BigInt may reach through shifts or exponentiation.
pub const MAX_BITS: u64 = 1 << 30;

/// Immutable arbitrary-precision signed integer.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) negative: bool,
    pub(crate) mag: Vec<u64>,
}

// ============================================================================
// Construction
// ============================================================================

impl BigInt {
    /// The single normalizing constructor every other constructor goes through.
    pub(crate) fn from_parts(negative: bool, mut mag: Vec<u64>) -> Self {
        limbs::trim(&mut mag);
        let negative = negative && !mag.is_empty();
        Self { negative, mag }
    }

    /// Construct from a sign and raw little-endian limbs.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let x = BigInt::from_limbs(true, vec![0, 1, 0, 0]);
    /// assert_eq!(x.limbs(), &[0, 1]);
    /// assert_eq!(BigInt::from_limbs(true, vec![0, 0]), BigInt::zero());
    /// ```
    pub fn from_limbs(negative: bool, limbs: Vec<u64>) -> Self {
        Self::from_parts(negative, limbs)
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn one() -> Self {
        Self::from_u64(1)
    }

    pub fn from_u64(val: u64) -> Self {
        Self::from_parts(false, vec![val])
    }

    pub fn from_i64(val: i64) -> Self {
        Self::from_parts(val < 0, vec![val.unsigned_abs()])
    }

    pub fn from_u128(val: u128) -> Self {
        Self::from_parts(false, vec![val as u64, (val >> 64) as u64])
    }

    pub fn from_i128(val: i128) -> Self {
        let abs = val.unsigned_abs();
        Self::from_parts(val < 0, vec![abs as u64, (abs >> 64) as u64])
    }

    /// 2^exp.
    pub(crate) fn pow2(exp: u64) -> Self {
        Self::from_parts(false, limbs::shl(&[1], exp))
    }
}

// ============================================================================
// Queries
// ============================================================================

impl BigInt {
    /// Magnitude limbs, little-endian. Empty for zero.
    #[inline]
    pub fn limbs(&self) -> &[u64] {
        &self.mag
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mag.is_empty()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        if self.negative {
            -1
        } else if self.mag.is_empty() {
            0
        } else {
            1
        }
    }

    /// Number of significant bits in the magnitude.
    pub fn bit_length(&self) -> u64 {
        limbs::bit_length(&self.mag)
    }

    pub fn is_odd(&self) -> bool {
        self.mag.first().is_some_and(|&low| low & 1 == 1)
    }

    pub fn to_u64(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        limbs::to_u64(&self.mag)
    }

    pub fn to_i64(&self) -> Option<i64> {
        let abs = limbs::to_u64(&self.mag)?;
        if self.negative {
            if abs <= i64::MAX as u64 + 1 {
                Some((abs as i64).wrapping_neg())
            } else {
                None
            }
        } else {
            i64::try_from(abs).ok()
        }
    }

    pub fn to_i128(&self) -> Option<i128> {
        let abs = match self.mag.as_slice() {
            [] => 0u128,
            [lo] => *lo as u128,
            [lo, hi] => (*hi as u128) << 64 | *lo as u128,
            _ => return None,
        };
        if self.negative {
            if abs <= i128::MAX as u128 + 1 {
                Some((abs as i128).wrapping_neg())
            } else {
                None
            }
        } else {
            i128::try_from(abs).ok()
        }
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl BigInt {
    pub fn neg(&self) -> Self {
        Self::from_parts(!self.negative, self.mag.clone())
    }

    pub fn abs(&self) -> Self {
        Self::from_parts(false, self.mag.clone())
    }

    fn add_signed(&self, rhs_negative: bool, rhs_mag: &[u64]) -> Self {
        if self.negative == rhs_negative {
            return Self::from_parts(self.negative, limbs::add(&self.mag, rhs_mag));
        }
        match limbs::cmp(&self.mag, rhs_mag) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::from_parts(self.negative, limbs::sub(&self.mag, rhs_mag)),
            Ordering::Less => Self::from_parts(rhs_negative, limbs::sub(rhs_mag, &self.mag)),
        }
    }

    /// ```
    /// use bignum::BigInt;
    ///
    /// let a = BigInt::from_i64(100);
    /// let b = BigInt::from_i64(-300);
    /// assert_eq!(a.add(&b), BigInt::from_i64(-200));
    /// ```
    pub fn add(&self, other: &Self) -> Self {
        self.add_signed(other.negative, &other.mag)
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add_signed(!other.negative, &other.mag)
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self::from_parts(
            self.negative != other.negative,
            limbs::mul(&self.mag, &other.mag),
        )
    }

    /// Truncating division returning (quotient, remainder).
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of
    /// the dividend, so `self == divisor * q + r`.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let (q, r) = BigInt::from_i64(-7).div_rem(&BigInt::from_i64(2)).unwrap();
    /// assert_eq!(q, BigInt::from_i64(-3));
    /// assert_eq!(r, BigInt::from_i64(-1));
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), BigIntError> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let (q, r) = limbs::div_rem(&self.mag, &divisor.mag);
        Ok((
            Self::from_parts(self.negative != divisor.negative, q),
            Self::from_parts(self.negative, r),
        ))
    }

    pub fn div(&self, divisor: &Self) -> Result<Self, BigIntError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    pub fn rem(&self, divisor: &Self) -> Result<Self, BigIntError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Exponentiation by squaring.
    ///
    /// `0 ** 0` is 1. Negative exponents are rejected, as is any result whose
    /// bit length would exceed [`MAX_BITS`].
    pub fn pow(&self, exponent: &Self) -> Result<Self, BigIntError> {
        if exponent.negative {
            return Err(BigIntError::NegativeExponent);
        }
        if exponent.is_zero() {
            return Ok(Self::one());
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        if self.mag == [1] {
            let negative = self.negative && exponent.is_odd();
            return Ok(Self::from_parts(negative, vec![1]));
        }

        let exp = exponent.to_u64().ok_or(BigIntError::TooLarge)?;
        // |self| >= 2, so the result has at least (bits - 1) * exp + 1 bits.
        let lower_bound = (self.bit_length() - 1)
            .checked_mul(exp)
            .ok_or(BigIntError::TooLarge)?;
        if lower_bound >= MAX_BITS {
            return Err(BigIntError::TooLarge);
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut remaining = exp;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.mul(&base);
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.mul(&base);
            }
        }
        if result.bit_length() > MAX_BITS {
            return Err(BigIntError::TooLarge);
        }
        Ok(result)
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => limbs::cmp(&self.mag, &other.mag),
            (true, true) => limbs::cmp(&other.mag, &self.mag),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.magnitude_digits(10);
        // Digits are ASCII by construction.
        f.pad_integral(!self.negative, "", std::str::from_utf8(&digits).unwrap_or("0"))
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty => $ctor:ident as $wide:ty),* $(,)?) => {
        $(
            impl From<$t> for BigInt {
                fn from(val: $t) -> Self {
                    BigInt::$ctor(val as $wide)
                }
            }
        )*
    };
}

impl_from_primitive! {
    u8 => from_u64 as u64,
    u16 => from_u64 as u64,
    u32 => from_u64 as u64,
    u64 => from_u64 as u64,
    usize => from_u64 as u64,
    i8 => from_i64 as i64,
    i16 => from_i64 as i64,
    i32 => from_i64 as i64,
    i64 => from_i64 as i64,
    isize => from_i64 as i64,
    u128 => from_u128 as u128,
    i128 => from_i128 as i128,
}

impl From<bool> for BigInt {
    fn from(val: bool) -> Self {
        Self::from_u64(val as u64)
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $inherent:ident) => {
        impl ops::$imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$inherent(self, rhs)
            }
        }

        impl ops::$imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$inherent(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, sub);
forward_binop!(Mul, mul, mul);
forward_binop!(BitAnd, bitand, bit_and);
forward_binop!(BitOr, bitor, bit_or);
forward_binop!(BitXor, bitxor, bit_xor);

impl ops::Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::neg(self)
    }
}

impl ops::Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(!self.negative, self.mag)
    }
}

impl ops::Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        self.bit_not()
    }
}

impl ops::Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        self.bit_not()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i128) -> BigInt {
        BigInt::from_i128(v)
    }

    // --- Constructors ---

    #[test]
    fn test_zero_is_canonical() {
        let z = BigInt::zero();
        assert!(z.is_zero());
        assert!(!z.is_negative());
        assert!(z.limbs().is_empty());
        assert_eq!(BigInt::from_i64(0), z);
        assert_eq!(BigInt::from_limbs(true, vec![0, 0, 0]), z);
        assert_eq!(z.neg(), z);
    }

    #[test]
    fn test_from_i64_extremes() {
        let min = BigInt::from_i64(i64::MIN);
        assert!(min.is_negative());
        assert_eq!(min.limbs(), &[1u64 << 63]);
        assert_eq!(min.to_i64(), Some(i64::MIN));
        assert_eq!(BigInt::from_i64(i64::MAX).to_i64(), Some(i64::MAX));
    }

    #[test]
    fn test_from_i128_two_limbs() {
        let v = big(-(1i128 << 100));
        assert_eq!(v.limbs(), &[0, 1u64 << 36]);
        assert_eq!(v.to_i128(), Some(-(1i128 << 100)));
        assert_eq!(v.to_i64(), None);
    }

    #[test]
    fn test_signum_and_bit_length() {
        assert_eq!(big(-5).signum(), -1);
        assert_eq!(big(0).signum(), 0);
        assert_eq!(big(5).signum(), 1);
        assert_eq!(big(255).bit_length(), 8);
        assert_eq!(big(-256).bit_length(), 9);
    }

    // --- Arithmetic ---

    #[test]
    fn test_add_mixed_signs() {
        assert_eq!(big(5).add(&big(-8)), big(-3));
        assert_eq!(big(-5).add(&big(8)), big(3));
        assert_eq!(big(-5).add(&big(5)), BigInt::zero());
        assert_eq!(big(-5).add(&big(-5)), big(-10));
    }

    #[test]
    fn test_add_carry_across_limb() {
        let a = BigInt::from_u64(u64::MAX);
        let c = a.add(&BigInt::one());
        assert_eq!(c.limbs(), &[0, 1]);
    }

    #[test]
    fn test_sub_grows_negative() {
        assert_eq!(big(3).sub(&big(10)), big(-7));
        assert_eq!(big(-3).sub(&big(-10)), big(7));
        let min = BigInt::from_i64(i64::MIN);
        assert_eq!(min.sub(&BigInt::one()).to_i128(), Some(i64::MIN as i128 - 1));
    }

    #[test]
    fn test_mul_signs() {
        assert_eq!(big(-6).mul(&big(7)), big(-42));
        assert_eq!(big(-6).mul(&big(-7)), big(42));
        assert_eq!(big(-6).mul(&big(0)), BigInt::zero());
        assert!(!big(-6).mul(&big(0)).is_negative());
    }

    #[test]
    fn test_mul_large() {
        let a = BigInt::from_u64(u64::MAX);
        let c = a.mul(&a);
        assert_eq!(c.limbs(), &[1, 0xffff_ffff_ffff_fffe]);
    }

    #[test]
    fn test_div_truncates_toward_zero() {
        assert_eq!(big(7).div(&big(2)).unwrap(), big(3));
        assert_eq!(big(-7).div(&big(2)).unwrap(), big(-3));
        assert_eq!(big(7).div(&big(-2)).unwrap(), big(-3));
        assert_eq!(big(-7).div(&big(-2)).unwrap(), big(3));
    }

    #[test]
    fn test_rem_sign_follows_dividend() {
        assert_eq!(big(7).rem(&big(2)).unwrap(), big(1));
        assert_eq!(big(-7).rem(&big(2)).unwrap(), big(-1));
        assert_eq!(big(7).rem(&big(-2)).unwrap(), big(1));
        assert_eq!(big(-6).rem(&big(2)).unwrap(), BigInt::zero());
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(big(42).div(&BigInt::zero()), Err(BigIntError::DivisionByZero));
        assert_eq!(big(0).rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    }

    #[test]
    fn test_div_multi_limb() {
        let a = big(-(1i128 << 120) - 12345);
        let b = big(1i128 << 70);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, big(-(1i128 << 50)));
        assert_eq!(r, big(-12345));
        assert_eq!(b.mul(&q).add(&r), a);
    }

    #[test]
    fn test_pow() {
        assert_eq!(big(2).pow(&big(10)).unwrap(), big(1024));
        assert_eq!(big(-3).pow(&big(3)).unwrap(), big(-27));
        assert_eq!(big(0).pow(&big(0)).unwrap(), big(1));
        assert_eq!(big(-1).pow(&big(1i128 << 100)).unwrap(), big(1));
        assert_eq!(big(-1).pow(&big((1i128 << 100) + 1)).unwrap(), big(-1));
        assert_eq!(big(2).pow(&big(200)).unwrap().bit_length(), 201);
    }

    #[test]
    fn test_pow_errors() {
        assert_eq!(big(2).pow(&big(-1)), Err(BigIntError::NegativeExponent));
        assert_eq!(big(2).pow(&big(1i128 << 40)), Err(BigIntError::TooLarge));
    }

    // --- Ordering ---

    #[test]
    fn test_ordering_signed() {
        assert!(big(-10) < big(-2));
        assert!(big(-2) < big(0));
        assert!(big(0) < big(3));
        assert!(big(1i128 << 80) > big(1i128 << 70));
        assert!(big(-(1i128 << 80)) < big(-(1i128 << 70)));
    }

    // --- Display / ops ---

    #[test]
    fn test_display() {
        assert_eq!(big(-42).to_string(), "-42");
        assert_eq!(big(0).to_string(), "0");
        assert_eq!(format!("{:>6}", big(42)), "    42");
        assert_eq!(format!("{:+}", big(42)), "+42");
        assert_eq!(format!("{:?}", big(-7)), "BigInt(-7)");
    }

    #[test]
    fn test_operator_traits() {
        let a = big(12);
        let b = big(-5);
        assert_eq!(&a + &b, big(7));
        assert_eq!(&a - &b, big(17));
        assert_eq!(&a * &b, big(-60));
        assert_eq!(-&a, big(-12));
        assert_eq!(!big(0), big(-1));
        assert_eq!(a.clone() & b.clone(), big(12 & -5));
        assert_eq!(a.clone() | b.clone(), big(12 | -5));
        assert_eq!(a ^ b, big(12 ^ -5));
    }
}
