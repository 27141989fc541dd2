//! Arbitrary-precision signed integers.
//!
//! [`BigInt`] is an immutable sign-and-magnitude integer. Every operation
//! returns a freshly allocated, normalized value; operands are never mutated.

pub mod bigint;
pub mod bitwise;
pub mod error;
pub mod float;
pub mod radix;

mod limbs;

pub use bigint::{BigInt, MAX_BITS};
pub use error::BigIntError;
