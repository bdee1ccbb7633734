// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Typed, null-aware field accessors over a JSON object
//!
//! Two families of accessors implement the field rules once for every
//! decoder: `required_*` fails with [`DecodeError::MissingField`] when the
//! key is absent or null and [`DecodeError::WrongFieldType`] on a kind
//! mismatch; `nullable_*` collapses absent, null, and wrong-kind into
//! `None`. The asymmetry is deliberate: decoders rely on wrong-kind
//! nullable reads falling back to the empty channel.
//!
//! Monetary fields arrive as numeric strings to avoid floating-point
//! loss; the decimal accessors parse the textual form into an
//! arbitrary-precision [`BigDecimal`].

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde_json::Value;

use crate::error::DecodeError;

/// A JSON object as produced by `serde_json`
pub type JsonObject = serde_json::Map<String, Value>;

fn present<'a>(obj: &'a JsonObject, field: &'static str) -> Result<&'a Value, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(DecodeError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

/// Reads a required string field.
pub fn required_str(obj: &JsonObject, field: &'static str) -> Result<String, DecodeError> {
    match present(obj, field)? {
        Value::String(s) => Ok(s.clone()),
        _ => Err(DecodeError::WrongFieldType(field)),
    }
}

/// Reads a required integer field.
pub fn required_int(obj: &JsonObject, field: &'static str) -> Result<i64, DecodeError> {
    present(obj, field)?
        .as_i64()
        .ok_or(DecodeError::WrongFieldType(field))
}

/// Reads a required boolean field.
pub fn required_bool(obj: &JsonObject, field: &'static str) -> Result<bool, DecodeError> {
    match present(obj, field)? {
        Value::Bool(b) => Ok(*b),
        _ => Err(DecodeError::WrongFieldType(field)),
    }
}

/// Reads a required nested object field.
pub fn required_object<'a>(
    obj: &'a JsonObject,
    field: &'static str,
) -> Result<&'a JsonObject, DecodeError> {
    match present(obj, field)? {
        Value::Object(map) => Ok(map),
        _ => Err(DecodeError::WrongFieldType(field)),
    }
}

/// Reads a required array field.
pub fn required_array<'a>(
    obj: &'a JsonObject,
    field: &'static str,
) -> Result<&'a Vec<Value>, DecodeError> {
    match present(obj, field)? {
        Value::Array(items) => Ok(items),
        _ => Err(DecodeError::WrongFieldType(field)),
    }
}

/// Reads a required arbitrary-precision decimal field. The provider emits
/// monetary values as strings; a bare JSON number is accepted through its
/// textual form.
pub fn required_decimal(obj: &JsonObject, field: &'static str) -> Result<BigDecimal, DecodeError> {
    match present(obj, field)? {
        Value::String(s) => parse_decimal(field, s),
        Value::Number(n) => parse_decimal(field, &n.to_string()),
        _ => Err(DecodeError::WrongFieldType(field)),
    }
}

/// Reads a nullable string field; absent, null, and wrong-kind all map
/// to `None`.
pub fn nullable_str(obj: &JsonObject, field: &str) -> Option<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Reads a nullable integer field.
pub fn nullable_int(obj: &JsonObject, field: &str) -> Option<i64> {
    obj.get(field).and_then(Value::as_i64)
}

/// Reads a nullable boolean field.
pub fn nullable_bool(obj: &JsonObject, field: &str) -> Option<bool> {
    match obj.get(field) {
        Some(Value::Bool(b)) => Some(*b),
        _ => None,
    }
}

/// Reads a nullable nested object field.
pub fn nullable_object<'a>(obj: &'a JsonObject, field: &str) -> Option<&'a JsonObject> {
    match obj.get(field) {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Reads a nullable array field.
pub fn nullable_array<'a>(obj: &'a JsonObject, field: &str) -> Option<&'a Vec<Value>> {
    match obj.get(field) {
        Some(Value::Array(items)) => Some(items),
        _ => None,
    }
}

/// Reads a nullable decimal field. A present value that fails to parse is
/// still an error; only absence, null, and wrong-kind map to `None`.
pub fn nullable_decimal(
    obj: &JsonObject,
    field: &'static str,
) -> Result<Option<BigDecimal>, DecodeError> {
    match obj.get(field) {
        Some(Value::String(s)) => parse_decimal(field, s).map(Some),
        Some(Value::Number(n)) => parse_decimal(field, &n.to_string()).map(Some),
        _ => Ok(None),
    }
}

fn parse_decimal(field: &'static str, literal: &str) -> Result<BigDecimal, DecodeError> {
    BigDecimal::from_str(literal).map_err(|_| DecodeError::InvalidNumericLiteral {
        field,
        literal: literal.to_string(),
    })
}
