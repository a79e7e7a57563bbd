use std::num::IntErrorKind;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bytes::Bytes;
use nsmessaging_schema::{FieldKind, ScalarRef, ScalarValue};
use serde_json::{Number, Value};

use crate::encode::record_value;
use crate::error::{CodecError, Result};
use crate::path::FieldPath;
use crate::wire::{INFINITY, NAN, NEG_INFINITY};

/// JSON kind name used in `TypeMismatch` errors.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn mismatch(path: &FieldPath, expected: &'static str, found: &Value) -> CodecError {
    CodecError::TypeMismatch {
        path: path.clone(),
        expected,
        found: json_kind(found),
    }
}

pub(crate) fn encode_scalar(value: ScalarRef<'_>) -> Value {
    match value {
        ScalarRef::String(text) => Value::String(text.to_string()),
        ScalarRef::Double(number) => float_value(number),
        ScalarRef::Float(number) => float_value(widen_f32(number)),
        ScalarRef::Int32(number) => Value::from(number),
        ScalarRef::UInt32(number) => Value::from(number),
        ScalarRef::Int64(number) => Value::String(number.to_string()),
        ScalarRef::UInt64(number) => Value::String(number.to_string()),
        ScalarRef::Bool(flag) => Value::Bool(flag),
        ScalarRef::Bytes(bytes) => Value::String(STANDARD.encode(bytes)),
        ScalarRef::Enum(wire) => Value::String(wire.to_string()),
        ScalarRef::Message(record) => record_value(record),
    }
}

/// Widen through the shortest decimal form, so `13.3f32` prints as `13.3`
/// rather than `13.300000190734863`.
fn widen_f32(number: f32) -> f64 {
    if !number.is_finite() {
        return f64::from(number);
    }
    number
        .to_string()
        .parse()
        .unwrap_or_else(|_| f64::from(number))
}

/// Nearest `f32`, unless a neighbour widens back to exactly `number`.
fn narrow_f64(number: f64) -> f32 {
    let nearest = number as f32;
    if !nearest.is_finite() || widen_f32(nearest) == number {
        return nearest;
    }
    let bits = nearest.to_bits();
    [bits.wrapping_add(1), bits.wrapping_sub(1)]
        .into_iter()
        .map(f32::from_bits)
        .find(|candidate| candidate.is_finite() && widen_f32(*candidate) == number)
        .unwrap_or(nearest)
}

fn float_value(number: f64) -> Value {
    match Number::from_f64(number) {
        Some(number) => Value::Number(number),
        None if number.is_nan() => Value::String(NAN.to_string()),
        None if number > 0.0 => Value::String(INFINITY.to_string()),
        None => Value::String(NEG_INFINITY.to_string()),
    }
}

/// Decode one element value of a non-message field.
pub(crate) fn decode_scalar(kind: FieldKind, value: &Value, path: &FieldPath) -> Result<ScalarValue> {
    match kind {
        FieldKind::String => match value {
            Value::String(text) => Ok(ScalarValue::String(text.clone())),
            other => Err(mismatch(path, "string", other)),
        },
        FieldKind::Bool => match value {
            Value::Bool(flag) => Ok(ScalarValue::Bool(*flag)),
            other => Err(mismatch(path, "bool", other)),
        },
        FieldKind::Double => parse_float(value, path).map(ScalarValue::Double),
        FieldKind::Float => {
            let number = parse_float(value, path)?;
            let narrowed = narrow_f64(number);
            if number.is_finite() && narrowed.is_infinite() {
                return Err(CodecError::NumberOutOfRange {
                    path: path.clone(),
                    value: number.to_string(),
                });
            }
            Ok(ScalarValue::Float(narrowed))
        }
        FieldKind::Int32 => parse_int(value, path).map(ScalarValue::Int32),
        FieldKind::UInt32 => parse_int(value, path).map(ScalarValue::UInt32),
        FieldKind::Int64 => parse_int(value, path).map(ScalarValue::Int64),
        FieldKind::UInt64 => parse_int(value, path).map(ScalarValue::UInt64),
        FieldKind::Bytes => match value {
            Value::String(text) => STANDARD
                .decode(text)
                .map(|bytes| ScalarValue::Bytes(Bytes::from(bytes)))
                .map_err(|source| CodecError::InvalidBinaryEncoding {
                    path: path.clone(),
                    source,
                }),
            other => Err(mismatch(path, "base64 string", other)),
        },
        FieldKind::Enum(descriptor) => match value {
            Value::String(wire) => {
                let descriptor = descriptor();
                if descriptor.contains(wire) {
                    Ok(ScalarValue::Enum(wire.clone()))
                } else {
                    Err(CodecError::UnknownEnumVariant {
                        path: path.clone(),
                        enum_name: descriptor.name,
                        value: wire.clone(),
                    })
                }
            }
            other => Err(mismatch(path, "enum string", other)),
        },
        FieldKind::Message(_) => Err(mismatch(path, "object", value)),
    }
}

/// Accepts bare numbers, integral floats (`5.0`, `1e3`) and quoted decimal
/// strings; range is checked against the target width.
fn parse_int<T: TryFrom<i128>>(value: &Value, path: &FieldPath) -> Result<T> {
    let wide = match value {
        Value::Number(number) => {
            if let Some(signed) = number.as_i64() {
                i128::from(signed)
            } else if let Some(unsigned) = number.as_u64() {
                i128::from(unsigned)
            } else {
                match number.as_f64() {
                    Some(float) if float.fract() == 0.0 => float as i128,
                    _ => {
                        return Err(CodecError::TypeMismatch {
                            path: path.clone(),
                            expected: "integer",
                            found: "fractional number",
                        })
                    }
                }
            }
        }
        Value::String(text) => match text.parse::<i128>() {
            Ok(parsed) => parsed,
            Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                return Err(CodecError::NumberOutOfRange {
                    path: path.clone(),
                    value: text.clone(),
                })
            }
            Err(_) => {
                return Err(CodecError::TypeMismatch {
                    path: path.clone(),
                    expected: "integer",
                    found: "non-numeric string",
                })
            }
        },
        other => return Err(mismatch(path, "integer", other)),
    };

    T::try_from(wide).map_err(|_| CodecError::NumberOutOfRange {
        path: path.clone(),
        value: wide.to_string(),
    })
}

/// Accepts bare numbers, numeric strings and the `NaN`/`Infinity`/`-Infinity`
/// spellings.
fn parse_float(value: &Value, path: &FieldPath) -> Result<f64> {
    match value {
        Value::Number(number) => number.as_f64().ok_or_else(|| mismatch(path, "number", value)),
        Value::String(text) => match text.as_str() {
            NAN => Ok(f64::NAN),
            INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            other => other
                .parse::<f64>()
                .ok()
                .filter(|number| number.is_finite())
                .ok_or_else(|| CodecError::TypeMismatch {
                    path: path.clone(),
                    expected: "number",
                    found: "non-numeric string",
                }),
        },
        other => Err(mismatch(path, "number", other)),
    }
}
