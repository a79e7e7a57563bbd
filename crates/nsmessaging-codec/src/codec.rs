use nsmessaging_schema::{DynMessage, Message, MessageType, Payload, Record};
use serde_json::Value;

use crate::config::CodecConfig;
use crate::decode::{decode_into, parse_object, read_envelope};
use crate::encode::{envelope_value, record_value, render};
use crate::error::{CodecError, Result};
use crate::path::FieldPath;

/// JSON codec with explicit configuration.
///
/// The free functions at the crate root use `Codec::new()`, which
/// produces canonical text and skips unknown fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with default config.
    pub fn new() -> Self {
        Self::with_config(CodecConfig::default())
    }

    /// Create a codec with explicit config.
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encode_message<P: Payload>(&self, message: &Message<P>) -> String {
        let data = message.data.as_ref().map(|data| data as &dyn Record);
        render(
            &envelope_value(&message.version, &message.message_type, data),
            self.config.pretty,
        )
    }

    pub fn encode_dyn(&self, message: &DynMessage) -> String {
        render(
            &envelope_value(
                &message.version,
                message.message_type.as_str(),
                message.data.as_deref(),
            ),
            self.config.pretty,
        )
    }

    /// Encode a bare record, without an envelope.
    pub fn encode_record(&self, record: &dyn Record) -> String {
        render(&record_value(record), self.config.pretty)
    }

    /// Decode an envelope whose payload type is known.
    ///
    /// A `messageType` naming a different registered type fails with
    /// `MessageTypeMismatch`; an unregistered one with `UnknownMessageType`.
    /// A missing `messageType` is accepted.
    pub fn decode_message<P: Payload>(&self, text: &str) -> Result<Message<P>> {
        let root = parse_object(text)?;
        let envelope = read_envelope(&root, &self.config)?;

        if let Some(found) = envelope.message_type {
            if found != P::MESSAGE_TYPE {
                return Err(match found.parse::<MessageType>() {
                    Ok(_) => CodecError::MessageTypeMismatch {
                        expected: P::MESSAGE_TYPE,
                        found,
                    },
                    Err(_) => CodecError::UnknownMessageType(found),
                });
            }
        }

        let data = match envelope.data {
            Some(object) => {
                let mut payload = P::default();
                decode_into(
                    &mut payload,
                    object,
                    &FieldPath::root().child("data"),
                    &self.config,
                )?;
                Some(payload)
            }
            None => None,
        };

        Ok(Message {
            version: envelope.version,
            message_type: P::MESSAGE_TYPE.to_string(),
            data,
        })
    }

    /// Decode an envelope, choosing the payload type from `messageType`.
    pub fn decode_dyn(&self, text: &str) -> Result<DynMessage> {
        let root = parse_object(text)?;
        let envelope = read_envelope(&root, &self.config)?;

        let message_type: MessageType = envelope
            .message_type
            .unwrap_or_default()
            .parse()?;

        let data = match envelope.data {
            Some(object) => {
                let mut payload = message_type.new_payload();
                decode_into(
                    payload.as_mut(),
                    object,
                    &FieldPath::root().child("data"),
                    &self.config,
                )?;
                Some(payload)
            }
            None => None,
        };

        Ok(DynMessage {
            version: envelope.version,
            message_type,
            data,
        })
    }

    /// Decode a bare record, without an envelope.
    pub fn decode_record<R: Record + Default>(&self, text: &str) -> Result<R> {
        let root = parse_object(text)?;
        let mut record = R::default();
        decode_into(&mut record, &root, &FieldPath::root(), &self.config)?;
        Ok(record)
    }

    /// Decode a bare record from an already parsed JSON value.
    pub fn decode_value<R: Record + Default>(&self, value: &Value) -> Result<R> {
        match value {
            Value::Object(object) => {
                let mut record = R::default();
                decode_into(&mut record, object, &FieldPath::root(), &self.config)?;
                Ok(record)
            }
            other => Err(crate::scalar::mismatch(&FieldPath::root(), "object", other)),
        }
    }

    /// The JSON value a record encodes to.
    pub fn to_value(&self, record: &dyn Record) -> Value {
        record_value(record)
    }
}
