use bignum::BigIntError;
use thiserror::Error;

/// A thrown host error. Each variant is one of the three error kinds a
/// BigInt operation can raise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("TypeError: {0}")]
    TypeError(String),
    #[error("RangeError: {0}")]
    RangeError(String),
    #[error("SyntaxError: {0}")]
    SyntaxError(String),
}

/// The kind of a [`RuntimeError`], without its message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Range,
    Syntax,
}

impl RuntimeError {
    pub fn type_error(msg: impl Into<String>) -> Self {
        RuntimeError::TypeError(msg.into())
    }

    pub fn range_error(msg: impl Into<String>) -> Self {
        RuntimeError::RangeError(msg.into())
    }

    pub fn syntax_error(msg: impl Into<String>) -> Self {
        RuntimeError::SyntaxError(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::TypeError(_) => ErrorKind::Type,
            RuntimeError::RangeError(_) => ErrorKind::Range,
            RuntimeError::SyntaxError(_) => ErrorKind::Syntax,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RuntimeError::TypeError(msg)
            | RuntimeError::RangeError(msg)
            | RuntimeError::SyntaxError(msg) => msg,
        }
    }
}

impl From<BigIntError> for RuntimeError {
    fn from(e: BigIntError) -> Self {
        match e {
            BigIntError::DivisionByZero
            | BigIntError::NegativeExponent
            | BigIntError::TooLarge
            | BigIntError::InvalidRadix(_)
            | BigIntError::NotAnInteger => RuntimeError::RangeError(e.to_string()),
            BigIntError::InvalidDigit | BigIntError::Empty => {
                RuntimeError::SyntaxError(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_kind() {
        let e = RuntimeError::type_error("BigInt is not a constructor");
        assert_eq!(e.to_string(), "TypeError: BigInt is not a constructor");
        assert_eq!(e.kind(), ErrorKind::Type);
        assert_eq!(e.message(), "BigInt is not a constructor");
    }

    #[test]
    fn test_from_bigint_error() {
        let e: RuntimeError = BigIntError::DivisionByZero.into();
        assert_eq!(e, RuntimeError::RangeError("Division by zero".into()));
        let e: RuntimeError = BigIntError::TooLarge.into();
        assert_eq!(e.kind(), ErrorKind::Range);
        let e: RuntimeError = BigIntError::InvalidDigit.into();
        assert_eq!(e.kind(), ErrorKind::Syntax);
    }
}
