//! Bitwise operations and shifts on the infinite two's-complement view.
//!
//! A negative value behaves as if sign-extended with infinitely many one
//! bits, so `-1 & x == x` and `-1 >> n == -1` for any shift amount.

use crate::bigint::{BigInt, MAX_BITS};
use crate::error::BigIntError;
use crate::limbs;

/// In-place two's-complement negation of a fixed-width limb buffer.
fn negate_in_place(buf: &mut [u64]) {
    let mut carry = 1u64;
    for limb in buf.iter_mut() {
        let (r, c) = (!*limb).overflowing_add(carry);
        *limb = r;
        carry = c as u64;
    }
}

impl BigInt {
    /// The value as `len` two's-complement limbs. `len` must exceed the
    /// magnitude length so the top limb carries the sign.
    fn to_twos_complement(&self, len: usize) -> Vec<u64> {
        let mut out = self.mag.clone();
        out.resize(len, 0);
        if self.negative {
            negate_in_place(&mut out);
        }
        out
    }

    fn from_twos_complement(mut buf: Vec<u64>) -> Self {
        let negative = buf.last().is_some_and(|&top| top >> 63 == 1);
        if negative {
            negate_in_place(&mut buf);
        }
        Self::from_parts(negative, buf)
    }

    fn bitwise(&self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Self {
        let len = self.mag.len().max(other.mag.len()) + 1;
        let a = self.to_twos_complement(len);
        let b = other.to_twos_complement(len);
        let buf = a.iter().zip(b.iter()).map(|(&x, &y)| op(x, y)).collect();
        Self::from_twos_complement(buf)
    }

    // ========================================================================
    // Bitwise operations
    // ========================================================================

    /// Bitwise NOT: `-x - 1`.
    pub fn bit_not(&self) -> Self {
        self.neg().sub(&Self::one())
    }

    pub fn bit_and(&self, other: &Self) -> Self {
        self.bitwise(other, |a, b| a & b)
    }

    pub fn bit_or(&self, other: &Self) -> Self {
        self.bitwise(other, |a, b| a | b)
    }

    pub fn bit_xor(&self, other: &Self) -> Self {
        self.bitwise(other, |a, b| a ^ b)
    }

    // ========================================================================
    // Shifts
    // ========================================================================

    /// Shift left by a fixed bit count.
    ///
    /// Fails when the result would be longer than [`MAX_BITS`].
    pub fn shl_bits(&self, n: u64) -> Result<Self, BigIntError> {
        if self.is_zero() || n == 0 {
            return Ok(self.clone());
        }
        if self.bit_length().saturating_add(n) > MAX_BITS {
            return Err(BigIntError::TooLarge);
        }
        Ok(Self::from_parts(self.negative, limbs::shl(&self.mag, n)))
    }

    /// Arithmetic shift right by a fixed bit count (rounds toward -inf).
    pub fn shr_bits(&self, n: u64) -> Self {
        if !self.negative {
            return Self::from_parts(false, limbs::shr(&self.mag, n));
        }
        // floor(x / 2^n) for x < 0 is -((|x| - 1) >> n) - 1
        let reduced = limbs::sub(&self.mag, &[1]);
        let shifted = limbs::shr(&reduced, n);
        Self::from_parts(true, limbs::add(&shifted, &[1]))
    }

    /// Shift left by a signed amount; a negative amount shifts right.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let x = BigInt::from_i64(-9);
    /// assert_eq!(x.shl(&BigInt::from_i64(2)).unwrap(), BigInt::from_i64(-36));
    /// assert_eq!(x.shl(&BigInt::from_i64(-2)).unwrap(), BigInt::from_i64(-3));
    /// ```
    pub fn shl(&self, amount: &BigInt) -> Result<Self, BigIntError> {
        if amount.negative {
            Ok(self.shr_by_magnitude(&amount.mag))
        } else {
            self.shl_by_magnitude(&amount.mag)
        }
    }

    /// Arithmetic shift right by a signed amount; a negative amount shifts left.
    pub fn shr(&self, amount: &BigInt) -> Result<Self, BigIntError> {
        if amount.negative {
            self.shl_by_magnitude(&amount.mag)
        } else {
            Ok(self.shr_by_magnitude(&amount.mag))
        }
    }

    fn shl_by_magnitude(&self, amount: &[u64]) -> Result<Self, BigIntError> {
        match limbs::to_u64(amount) {
            Some(n) => self.shl_bits(n),
            None if self.is_zero() => Ok(Self::zero()),
            None => Err(BigIntError::TooLarge),
        }
    }

    fn shr_by_magnitude(&self, amount: &[u64]) -> Self {
        match limbs::to_u64(amount) {
            Some(n) => self.shr_bits(n),
            None if self.negative => Self::from_i64(-1),
            None => Self::zero(),
        }
    }

    // ========================================================================
    // Width wrapping
    // ========================================================================

    /// The `bits` least significant two's-complement bits, as a non-negative value.
    fn low_bits(&self, bits: u64) -> Self {
        let len = bits.div_ceil(limbs::LIMB_BITS) as usize;
        let mut buf = self.to_twos_complement(len.max(self.mag.len()) + 1);
        buf.truncate(len);
        let unused = len as u64 * limbs::LIMB_BITS - bits;
        if unused > 0 {
            if let Some(top) = buf.last_mut() {
                *top &= u64::MAX >> unused;
            }
        }
        Self::from_parts(false, buf)
    }

    /// Wrap to the unsigned range `0 ..= 2^bits - 1`.
    ///
    /// Negative inputs need a `bits`-wide result, so they fail with
    /// `TooLarge` when `bits` exceeds [`MAX_BITS`].
    pub fn as_uint_n(&self, bits: u64) -> Result<Self, BigIntError> {
        if bits == 0 {
            return Ok(Self::zero());
        }
        if !self.negative && self.bit_length() <= bits {
            return Ok(self.clone());
        }
        if bits > MAX_BITS {
            return Err(BigIntError::TooLarge);
        }
        Ok(self.low_bits(bits))
    }

    /// Wrap to the signed range `-2^(bits-1) ..= 2^(bits-1) - 1`.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let x = BigInt::from_i64(255);
    /// assert_eq!(x.as_int_n(8), BigInt::from_i64(-1));
    /// assert_eq!(x.as_int_n(9), BigInt::from_i64(255));
    /// ```
    pub fn as_int_n(&self, bits: u64) -> Self {
        if bits == 0 {
            return Self::zero();
        }
        if self.bit_length() < bits {
            return self.clone();
        }
        let unsigned = self.low_bits(bits);
        if unsigned.bit_length() == bits {
            unsigned.sub(&Self::pow2(bits))
        } else {
            unsigned
        }
    }
}
