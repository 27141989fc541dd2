//! BigInt semantics as a dynamically typed host sees them.
//!
//! Host values are a tagged [`Value`]; host objects take part only through
//! the [`primitive::ToPrimitive`] capability. The arithmetic itself lives in
//! the `bignum` crate.

pub mod boxing;
pub mod builtins;
pub mod coerce;
pub mod compare;
pub mod error;
pub mod operators;
pub mod parse;
pub mod primitive;
pub mod value;

pub use bignum::BigInt;
pub use error::{ErrorKind, RuntimeError};
pub use value::{Object, Value};
