use anyhow::{bail, Result};
use runtime::compare::{loose_equals, relational, strict_equals, RelOp};
use runtime::operators::{binary_op, unary_op, update, BinaryOp, UnaryOp, UpdateOp};
use runtime::Value;

use crate::config::Settings;
use crate::operand::parse_operand;
use crate::output::{render, render_update};

pub fn unary_command(op: &str, operand: &str, settings: &Settings) -> Result<String> {
    let value = parse_operand(operand)?;
    if let Some(op) = UpdateOp::from_symbol(op) {
        let result = update(op, &value)?;
        return render_update(&result.old, &result.new, settings);
    }
    let Some(op) = UnaryOp::from_symbol(op) else {
        bail!("unknown unary operator: {op}");
    };
    render(&unary_op(op, &value)?, settings)
}

pub fn binary_command(lhs: &str, op: &str, rhs: &str, settings: &Settings) -> Result<String> {
    let lhs = parse_operand(lhs)?;
    let rhs = parse_operand(rhs)?;
    let result = match op {
        "==" => Value::Bool(loose_equals(&lhs, &rhs)?),
        "!=" => Value::Bool(!loose_equals(&lhs, &rhs)?),
        "===" => Value::Bool(strict_equals(&lhs, &rhs)),
        "!==" => Value::Bool(!strict_equals(&lhs, &rhs)),
        _ => {
            if let Some(op) = RelOp::from_symbol(op) {
                Value::Bool(relational(op, &lhs, &rhs)?)
            } else if let Some(op) = BinaryOp::from_symbol(op) {
                binary_op(op, &lhs, &rhs)?
            } else {
                bail!("unknown binary operator: {op}");
            }
        }
    };
    render(&result, settings)
}
