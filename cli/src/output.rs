use anyhow::Result;
use runtime::coerce::number_to_string;
use runtime::{Object, Value};
use serde::Serialize;

use crate::config::{OutputFormat, Settings};

/// JSON shape of a result.
#[derive(Debug, Serialize)]
pub struct Rendered {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub value: String,
    /// The operand before an update operator, for `++`/`--`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old: Option<String>,
}

/// Plain text of a value: BigInts in `radix` without a suffix, strings
/// unquoted.
fn plain(value: &Value, radix: u32) -> Result<String> {
    Ok(match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(*n),
        Value::String(s) => s.to_string(),
        Value::BigInt(b) => b.to_str_radix(radix)?,
        Value::Object(Object::BigInt(b)) => b.to_str_radix(radix)?,
        Value::Object(Object::Host(_)) => "[object Object]".to_string(),
    })
}

/// Text of a value as a literal: `42n`, `"text"`, `[BigInt: 42n]`.
fn literal(value: &Value, radix: u32) -> Result<String> {
    Ok(match value {
        Value::String(s) => format!("{s:?}"),
        Value::BigInt(_) => format!("{}n", plain(value, radix)?),
        Value::Object(Object::BigInt(_)) => format!("[BigInt: {}n]", plain(value, radix)?),
        other => plain(other, radix)?,
    })
}

pub fn render(value: &Value, settings: &Settings) -> Result<String> {
    match settings.format {
        OutputFormat::Text => literal(value, settings.radix),
        OutputFormat::Json => to_json(Rendered {
            kind: value.type_of(),
            value: plain(value, settings.radix)?,
            old: None,
        }),
    }
}

/// A string result printed as-is in text mode.
pub fn render_text(text: String, settings: &Settings) -> Result<String> {
    match settings.format {
        OutputFormat::Text => Ok(text),
        OutputFormat::Json => to_json(Rendered {
            kind: "string",
            value: text,
            old: None,
        }),
    }
}

/// The result of an update operator, with the value it replaced.
pub fn render_update(old: &Value, new: &Value, settings: &Settings) -> Result<String> {
    match settings.format {
        OutputFormat::Text => Ok(format!(
            "{} -> {}",
            literal(old, settings.radix)?,
            literal(new, settings.radix)?
        )),
        OutputFormat::Json => to_json(Rendered {
            kind: new.type_of(),
            value: plain(new, settings.radix)?,
            old: Some(plain(old, settings.radix)?),
        }),
    }
}

fn to_json(rendered: Rendered) -> Result<String> {
    Ok(serde_json::to_string(&rendered)?)
}
