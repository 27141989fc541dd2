//! Unsigned magnitude arithmetic on little-endian `u64` limb slices.
//!
//! Inputs are assumed trimmed (no most-significant zero limbs); every
//! function that returns a vector returns it trimmed as well.

use std::cmp::Ordering;

pub(crate) const LIMB_BITS: u64 = 64;

// ============================================================================
// Low-level helpers
// ============================================================================

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let tmp = a as u128 + b as u128 + carry as u128;
    (tmp as u64, (tmp >> 64) as u64)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let tmp = (a as u128)
        .wrapping_sub(b as u128)
        .wrapping_sub(borrow as u128);
    (tmp as u64, (tmp >> 127) as u64)
}

/// Multiply-accumulate: (lo, carry) = a * b + c + carry_in
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let tmp = a as u128 * b as u128 + c as u128 + carry as u128;
    (tmp as u64, (tmp >> 64) as u64)
}

/// Drop most-significant zero limbs.
#[inline]
pub(crate) fn trim(limbs: &mut Vec<u64>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

// ============================================================================
// Queries
// ============================================================================

pub(crate) fn cmp(a: &[u64], b: &[u64]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

pub(crate) fn bit_length(a: &[u64]) -> u64 {
    match a.last() {
        None => 0,
        Some(&top) => (a.len() as u64 - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as u64),
    }
}

#[inline]
pub(crate) fn bit(a: &[u64], index: u64) -> bool {
    let limb = (index / LIMB_BITS) as usize;
    a.get(limb)
        .is_some_and(|&l| (l >> (index % LIMB_BITS)) & 1 == 1)
}

/// Whether any of the `n` least significant bits is set.
pub(crate) fn has_low_bits(a: &[u64], n: u64) -> bool {
    let full = (n / LIMB_BITS) as usize;
    let rest = n % LIMB_BITS;
    a.iter().take(full).any(|&l| l != 0)
        || (rest > 0 && a.get(full).is_some_and(|&l| l & ((1u64 << rest) - 1) != 0))
}

/// The magnitude as a single `u64`, if it fits.
pub(crate) fn to_u64(a: &[u64]) -> Option<u64> {
    match a {
        [] => Some(0),
        [only] => Some(*only),
        _ => None,
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

pub(crate) fn add(a: &[u64], b: &[u64]) -> Vec<u64> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for (i, &l) in long.iter().enumerate() {
        let (r, c) = adc(l, short.get(i).copied().unwrap_or(0), carry);
        out.push(r);
        carry = c;
    }
    if carry != 0 {
        out.push(carry);
    }
    out
}

/// a - b. Requires a >= b.
pub(crate) fn sub(a: &[u64], b: &[u64]) -> Vec<u64> {
    debug_assert!(cmp(a, b) != Ordering::Less, "magnitude underflow");
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0u64;
    for (i, &l) in a.iter().enumerate() {
        let (r, bo) = sbb(l, b.get(i).copied().unwrap_or(0), borrow);
        out.push(r);
        borrow = bo;
    }
    debug_assert_eq!(borrow, 0);
    trim(&mut out);
    out
}

/// Schoolbook multiplication producing len(a) + len(b) limbs before trimming.
pub(crate) fn mul(a: &[u64], b: &[u64]) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut wide = vec![0u64; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            let (lo, hi) = mac(x, y, wide[i + j], carry);
            wide[i + j] = lo;
            carry = hi;
        }
        wide[i + b.len()] = carry;
    }
    trim(&mut wide);
    wide
}

/// limbs = limbs * m + add, on a private accumulator.
pub(crate) fn mul_small_add_in_place(limbs: &mut Vec<u64>, m: u64, add: u64) {
    let mut carry = add;
    for limb in limbs.iter_mut() {
        let (lo, hi) = mac(*limb, m, 0, carry);
        *limb = lo;
        carry = hi;
    }
    if carry != 0 {
        limbs.push(carry);
    }
}

/// Division by a single nonzero limb: returns (quotient, remainder).
pub(crate) fn div_rem_small(a: &[u64], d: u64) -> (Vec<u64>, u64) {
    debug_assert!(d != 0);
    let mut quotient = vec![0u64; a.len()];
    let mut rem = 0u128;
    for i in (0..a.len()).rev() {
        let cur = (rem << 64) | a[i] as u128;
        quotient[i] = (cur / d as u128) as u64;
        rem = cur % d as u128;
    }
    trim(&mut quotient);
    (quotient, rem as u64)
}

/// Truncating division of magnitudes: returns (quotient, remainder).
/// `b` must be nonzero.
pub(crate) fn div_rem(a: &[u64], b: &[u64]) -> (Vec<u64>, Vec<u64>) {
    debug_assert!(!b.is_empty());
    if cmp(a, b) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }
    if let [d] = b {
        let (q, r) = div_rem_small(a, *d);
        let rem = if r == 0 { Vec::new() } else { vec![r] };
        return (q, rem);
    }

    // Bit-by-bit long division, MSB first
    let mut quotient = vec![0u64; a.len()];
    let mut remainder: Vec<u64> = Vec::with_capacity(b.len() + 1);
    for i in (0..bit_length(a)).rev() {
        shl1_in_place(&mut remainder);
        if bit(a, i) {
            match remainder.first_mut() {
                Some(low) => *low |= 1,
                None => remainder.push(1),
            }
        }
        if cmp(&remainder, b) != Ordering::Less {
            remainder = sub(&remainder, b);
            quotient[(i / LIMB_BITS) as usize] |= 1u64 << (i % LIMB_BITS);
        }
    }
    trim(&mut quotient);
    (quotient, remainder)
}

fn shl1_in_place(limbs: &mut Vec<u64>) {
    let mut carry = 0u64;
    for limb in limbs.iter_mut() {
        let next = *limb >> 63;
        *limb = (*limb << 1) | carry;
        carry = next;
    }
    if carry != 0 {
        limbs.push(carry);
    }
}

// ============================================================================
// Shifts
// ============================================================================

pub(crate) fn shl(a: &[u64], n: u64) -> Vec<u64> {
    if a.is_empty() {
        return Vec::new();
    }
    let limb_shift = (n / LIMB_BITS) as usize;
    let bit_shift = (n % LIMB_BITS) as u32;
    let mut out = vec![0u64; limb_shift];
    out.reserve(a.len() + 1);
    if bit_shift == 0 {
        out.extend_from_slice(a);
    } else {
        let mut carry = 0u64;
        for &x in a {
            out.push((x << bit_shift) | carry);
            carry = x >> (64 - bit_shift);
        }
        if carry != 0 {
            out.push(carry);
        }
    }
    out
}

pub(crate) fn shr(a: &[u64], n: u64) -> Vec<u64> {
    let limb_shift = n / LIMB_BITS;
    if limb_shift >= a.len() as u64 {
        return Vec::new();
    }
    let src = &a[limb_shift as usize..];
    let bit_shift = (n % LIMB_BITS) as u32;
    let mut out = Vec::with_capacity(src.len());
    if bit_shift == 0 {
        out.extend_from_slice(src);
    } else {
        for (i, &x) in src.iter().enumerate() {
            let high = src.get(i + 1).map_or(0, |&h| h << (64 - bit_shift));
            out.push((x >> bit_shift) | high);
        }
    }
    trim(&mut out);
    out
}
