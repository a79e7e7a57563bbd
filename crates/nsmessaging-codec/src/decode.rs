use nsmessaging_schema::{Cardinality, Field, FieldKind, Record};
use serde_json::{Map, Value};

use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::path::FieldPath;
use crate::scalar::{decode_scalar, mismatch};

/// Parse text that must hold a single JSON object.
pub(crate) fn parse_object(text: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(object) => Ok(object),
        other => Err(mismatch(&FieldPath::root(), "object", &other)),
    }
}

/// Top-level members of a message envelope.
#[derive(Debug, Default)]
pub(crate) struct Envelope<'a> {
    pub version: String,
    pub message_type: Option<String>,
    pub data: Option<&'a Map<String, Value>>,
}

pub(crate) fn read_envelope<'a>(
    root: &'a Map<String, Value>,
    config: &CodecConfig,
) -> Result<Envelope<'a>> {
    let mut envelope = Envelope::default();

    for (key, value) in root {
        if value.is_null() {
            continue;
        }
        match key.as_str() {
            "version" => {
                envelope.version = expect_string(value, &FieldPath::root().child("version"))?;
            }
            "messageType" | "message_type" => {
                envelope.message_type =
                    Some(expect_string(value, &FieldPath::root().child("messageType"))?);
            }
            "data" => match value {
                Value::Object(object) => envelope.data = Some(object),
                other => {
                    return Err(mismatch(&FieldPath::root().child("data"), "object", other));
                }
            },
            _ if config.strict_mode => {
                return Err(CodecError::UnknownField {
                    path: FieldPath::root().child(key),
                });
            }
            _ => tracing::trace!(field = %key, "skipping unknown envelope field"),
        }
    }

    Ok(envelope)
}

fn expect_string(value: &Value, path: &FieldPath) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => Err(mismatch(path, "string", other)),
    }
}

/// Merge a JSON object into `record` through its field table.
///
/// Keys are matched by wire name, then by snake_case schema name. Keys
/// holding `null` leave the field untouched.
pub(crate) fn decode_into(
    record: &mut dyn Record,
    object: &Map<String, Value>,
    path: &FieldPath,
    config: &CodecConfig,
) -> Result<()> {
    let descriptor = record.descriptor();

    for (key, value) in object {
        let Some(field_descriptor) = descriptor.field(key) else {
            if config.strict_mode {
                return Err(CodecError::UnknownField {
                    path: path.child(key),
                });
            }
            tracing::trace!(record = descriptor.name, field = %key, "skipping unknown field");
            continue;
        };
        if value.is_null() {
            continue;
        }

        let field_path = path.child(field_descriptor.name);
        let Some(field) = record.field_mut(field_descriptor.name) else {
            continue;
        };

        if field_descriptor.cardinality == Cardinality::Repeated {
            let Value::Array(items) = value else {
                return Err(mismatch(&field_path, "array", value));
            };
            field.clear();
            for (index, item) in items.iter().enumerate() {
                decode_element(
                    field,
                    field_descriptor.kind,
                    item,
                    &field_path.index(index),
                    config,
                )?;
            }
        } else {
            decode_element(field, field_descriptor.kind, value, &field_path, config)?;
        }
    }

    Ok(())
}

fn decode_element(
    field: &mut (dyn Field + '_),
    kind: FieldKind,
    value: &Value,
    path: &FieldPath,
    config: &CodecConfig,
) -> Result<()> {
    if let FieldKind::Message(_) = kind {
        let Value::Object(object) = value else {
            return Err(mismatch(path, "object", value));
        };
        return match field.message_mut() {
            Some(nested) => decode_into(nested, object, path, config),
            None => Err(mismatch(path, kind.name(), value)),
        };
    }

    let scalar = decode_scalar(kind, value, path)?;
    field
        .assign(scalar)
        .map_err(|err| CodecError::TypeMismatch {
            path: path.clone(),
            expected: err.expected,
            found: err.found,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nsmessaging_schema::{CellIdentityLte, NetworkRegistrationInfo, PhoneStateData};

    fn object(text: &str) -> Map<String, Value> {
        parse_object(text).unwrap()
    }

    #[test]
    fn root_must_be_object() {
        let err = parse_object("[1,2]").unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { expected: "object", found: "array", .. }));
        assert!(matches!(parse_object("{"), Err(CodecError::MalformedJson(_))));
    }

    #[test]
    fn envelope_accepts_proto_name_and_skips_nulls() {
        let root = object(r#"{"version":"0.7.0","message_type":"GsmRecord","data":null}"#);
        let envelope = read_envelope(&root, &CodecConfig::default()).unwrap();
        assert_eq!(envelope.version, "0.7.0");
        assert_eq!(envelope.message_type.as_deref(), Some("GsmRecord"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn envelope_strict_mode_rejects_extra_keys() {
        let root = object(r#"{"version":"0.7.0","extra":1}"#);
        assert!(read_envelope(&root, &CodecConfig::default()).is_ok());

        let strict = CodecConfig {
            strict_mode: true,
            ..Default::default()
        };
        let err = read_envelope(&root, &strict).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "extra");
    }

    #[test]
    fn nested_repeated_records_decode_with_paths() {
        let root = object(
            r#"{"networkRegistrationInfo":[
                {"domain":"CS","cellIdentityLte":{"pci":250}},
                {"domain":"PS","cellIdentityLte":{"mcc":"abc"}}
            ]}"#,
        );
        let mut state = PhoneStateData::default();
        let err = decode_into(&mut state, &root, &FieldPath::root().child("data"), &CodecConfig::default())
            .unwrap_err();
        assert_eq!(
            err.path().unwrap().to_string(),
            "data.networkRegistrationInfo[1].cellIdentityLte.mcc"
        );

        let root = object(r#"{"networkRegistrationInfo":[{"cellIdentityLte":{"pci":250}}]}"#);
        let mut state = PhoneStateData::default();
        decode_into(&mut state, &root, &FieldPath::root(), &CodecConfig::default()).unwrap();
        assert_eq!(
            state.network_registration_info,
            vec![NetworkRegistrationInfo {
                cell_identity_lte: Some(CellIdentityLte {
                    pci: Some(250),
                    ..Default::default()
                }),
                ..Default::default()
            }]
        );
    }

    #[test]
    fn repeated_field_requires_array() {
        let root = object(r#"{"networkRegistrationInfo":{"domain":"CS"}}"#);
        let mut state = PhoneStateData::default();
        let err = decode_into(&mut state, &root, &FieldPath::root(), &CodecConfig::default())
            .unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { expected: "array", found: "object", .. }));
    }
}
