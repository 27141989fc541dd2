//! BigInt wrapper objects.

use std::sync::Arc;

use bignum::BigInt;

use crate::error::RuntimeError;
use crate::value::{Object, Value};

/// Box a BigInt primitive into a wrapper object, as `Object(x)` does.
///
/// ```
/// use runtime::boxing::{box_bigint, this_bigint_value};
/// use runtime::BigInt;
///
/// let boxed = box_bigint(BigInt::from_i64(42));
/// assert_eq!(boxed.type_of(), "object");
/// assert_eq!(this_bigint_value(&boxed).unwrap(), BigInt::from_i64(42));
/// ```
pub fn box_bigint(value: BigInt) -> Value {
    Value::Object(Object::BigInt(Arc::new(value)))
}

/// thisBigIntValue: the BigInt behind a primitive or a BigInt box.
pub fn this_bigint_value(value: &Value) -> Result<BigInt, RuntimeError> {
    match value {
        Value::BigInt(b) => Ok(b.clone()),
        Value::Object(Object::BigInt(b)) => Ok((**b).clone()),
        other => Err(RuntimeError::type_error(format!(
            "BigInt.prototype.valueOf requires that 'this' be a BigInt, got {}",
            other.type_of()
        ))),
    }
}
