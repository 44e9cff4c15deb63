//! String-to-value conversion for declared attribute types

use crate::value::{DeclaredType, Kind, Value};

/// Spellings accepted as boolean environment values, compared
/// case-insensitively.
const TRUTHY: [&str; 4] = ["1", "true", "yes", "on"];
const FALSY: [&str; 4] = ["0", "false", "no", "off"];

/// A raw string could not be parsed as its declared kind.
///
/// Carries the offending string and a converter-supplied detail message.
/// The resolver wraps this with schema and attribute context.
#[derive(Debug, Clone, thiserror::Error)]
#[error("cannot convert '{value}': {message}")]
pub struct ConvertError {
    /// The raw string that failed to convert
    pub value: String,
    /// Detail message from the underlying parser
    pub message: String,
}

impl ConvertError {
    fn new(value: &str, message: impl std::fmt::Display) -> Self {
        Self {
            value: value.to_string(),
            message: message.to_string(),
        }
    }
}

/// Convert a raw environment string to a [`Value`] of the declared type.
///
/// An optional declared type converts exactly like its inner kind; the
/// optional marker only affects defaulting, never parsing.
pub fn convert(raw: &str, declared: &DeclaredType) -> Result<Value, ConvertError> {
    match declared.kind() {
        Kind::Str => Ok(Value::Str(raw.to_string())),
        Kind::Int => raw
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| ConvertError::new(raw, e)),
        Kind::Float => raw
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| ConvertError::new(raw, e)),
        Kind::Bool => convert_bool(raw),
        Kind::Enum(en) => en
            .member(raw)
            .map(|member| Value::Enum {
                ty: en.name().to_string(),
                member: member.to_string(),
            })
            .ok_or_else(|| {
                ConvertError::new(raw, format!("no member '{}' in enum '{}'", raw, en.name()))
            }),
        Kind::Custom(ct) => (ct.parse())(raw).map_err(|message| ConvertError {
            value: raw.to_string(),
            message,
        }),
    }
}

fn convert_bool(raw: &str) -> Result<Value, ConvertError> {
    let lowered = raw.to_ascii_lowercase();
    if TRUTHY.contains(&lowered.as_str()) {
        Ok(Value::Bool(true))
    } else if FALSY.contains(&lowered.as_str()) {
        Ok(Value::Bool(false))
    } else {
        Err(ConvertError::new(raw, format!("cannot convert to bool: {raw}")))
    }
}
