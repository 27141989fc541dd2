use anyhow::{Context, Result};
use runtime::builtins::native_to_string;
use runtime::coerce::construct;
use runtime::parse::parse_bigint;
use runtime::Value;

use crate::config::Settings;
use crate::operand::parse_operand;
use crate::output::{render, render_text};

/// `BigInt(operand)`
pub fn construct_command(operand: &str, settings: &Settings) -> Result<String> {
    let value = parse_operand(operand)?;
    let result = construct(&value).with_context(|| format!("BigInt({operand})"))?;
    render(&Value::BigInt(result), settings)
}

/// Lenient parse of raw text. Unlike the other commands, `text` is not an
/// operand: it is used exactly as given.
pub fn parse_command(text: &str, radix: Option<u32>, settings: &Settings) -> Result<String> {
    let result = parse_bigint(text, radix).with_context(|| format!("parseBigInt({text:?})"))?;
    render(&Value::BigInt(result), settings)
}

/// `BigInt(operand).toString(radix)`, printed without quotes or suffix.
pub fn format_command(operand: &str, radix: Option<u32>, settings: &Settings) -> Result<String> {
    let value = parse_operand(operand)?;
    let bigint = construct(&value).with_context(|| format!("BigInt({operand})"))?;
    let radix = radix.unwrap_or(settings.radix);
    let text = native_to_string(&Value::BigInt(bigint), &[Value::Number(radix as f64)])?;
    render_text(text.as_str().unwrap_or_default().to_string(), settings)
}
