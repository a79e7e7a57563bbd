use nsmessaging_schema::SchemaError;

use crate::path::FieldPath;

/// Errors that can occur while encoding or decoding a message.
///
/// Every variant is terminal for the call that produced it; no partially
/// decoded value is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The input is not syntactically valid JSON.
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// `messageType` names no registered message type.
    #[error("unknown message type: {0:?}")]
    UnknownMessageType(String),

    /// `messageType` names a registered type other than the one requested.
    #[error("message type mismatch: expected {expected}, found {found}")]
    MessageTypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// An enum field holds a string outside its closed set.
    #[error("unknown {enum_name} variant {value:?} at {path}")]
    UnknownEnumVariant {
        path: FieldPath,
        enum_name: &'static str,
        value: String,
    },

    /// A binary field is not valid padded standard base64.
    #[error("invalid base64 at {path}: {source}")]
    InvalidBinaryEncoding {
        path: FieldPath,
        source: base64::DecodeError,
    },

    /// A value is present but has the wrong JSON kind.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: FieldPath,
        expected: &'static str,
        found: &'static str,
    },

    /// A numeric value does not fit the field's integer or float width.
    #[error("number out of range at {path}: {value}")]
    NumberOutOfRange { path: FieldPath, value: String },

    /// A key outside the field table, rejected in strict mode.
    #[error("unknown field at {path}")]
    UnknownField { path: FieldPath },
}

impl CodecError {
    /// Location of the offending value, for errors tied to one field.
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            CodecError::UnknownEnumVariant { path, .. }
            | CodecError::InvalidBinaryEncoding { path, .. }
            | CodecError::TypeMismatch { path, .. }
            | CodecError::NumberOutOfRange { path, .. }
            | CodecError::UnknownField { path } => Some(path),
            CodecError::MalformedJson(_)
            | CodecError::UnknownMessageType(_)
            | CodecError::MessageTypeMismatch { .. } => None,
        }
    }
}

impl From<SchemaError> for CodecError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::UnknownMessageType(name) => CodecError::UnknownMessageType(name),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
