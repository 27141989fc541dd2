use std::fmt;

/// Errors from BigInt arithmetic, conversion and parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BigIntError {
    DivisionByZero,
    NegativeExponent,
    /// The result would exceed [`crate::MAX_BITS`].
    TooLarge,
    InvalidRadix(u32),
    InvalidDigit,
    Empty,
    /// NaN, an infinity, or a float with a fractional part.
    NotAnInteger,
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigIntError::DivisionByZero => write!(f, "Division by zero"),
            BigIntError::NegativeExponent => write!(f, "Exponent must be non-negative"),
            BigIntError::TooLarge => write!(f, "Maximum BigInt size exceeded"),
            BigIntError::InvalidRadix(radix) => {
                write!(f, "radix must be between 2 and 36, got {radix}")
            }
            BigIntError::InvalidDigit => write!(f, "invalid digit found in string"),
            BigIntError::Empty => write!(f, "cannot parse integer from empty string"),
            BigIntError::NotAnInteger => write!(f, "value is not an integer"),
        }
    }
}

impl std::error::Error for BigIntError {}
