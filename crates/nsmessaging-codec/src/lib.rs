//! nsmessaging-codec: canonical JSON for Network Survey messages.
//!
//! One engine serves every message type by walking the static field tables
//! from `nsmessaging-schema`:
//!
//! - required fields are always written, zero values included
//! - absent optional fields and empty sequences are omitted
//! - 64-bit integers are written as quoted decimal strings
//! - binary fields are padded standard base64
//! - enum fields are their wire strings; unknown strings fail decoding
//!
//! Canonical output has no insignificant whitespace, and equal values
//! always encode to identical text.
//!
//! ```
//! use nsmessaging_codec::{decode_message, encode_message};
//! use nsmessaging_schema::{GsmRecordData, Message};
//!
//! let message = Message::new("0.7.0").with_data(GsmRecordData {
//!     mcc: Some(310),
//!     serving_cell: Some(false),
//!     ..Default::default()
//! });
//! let text = encode_message(&message);
//! assert!(text.contains(r#""mcc":310"#));
//! assert!(text.contains(r#""servingCell":false"#));
//! assert!(!text.contains("lac"));
//!
//! let decoded: Message<GsmRecordData> = decode_message(&text).unwrap();
//! assert_eq!(decoded, message);
//! ```

pub mod codec;
pub mod config;
mod decode;
mod encode;
pub mod error;
pub mod path;
mod scalar;
pub mod wire;

pub use codec::Codec;
pub use config::CodecConfig;
pub use error::{CodecError, Result};
pub use path::FieldPath;

use nsmessaging_schema::{DynMessage, Message, Payload, Record};

/// Encode a message as canonical JSON.
pub fn encode_message<P: Payload>(message: &Message<P>) -> String {
    Codec::new().encode_message(message)
}

/// Encode a type-erased message as canonical JSON.
pub fn encode_dyn(message: &DynMessage) -> String {
    Codec::new().encode_dyn(message)
}

/// Encode a bare record as canonical JSON.
pub fn encode_record(record: &dyn Record) -> String {
    Codec::new().encode_record(record)
}

/// Decode a message whose payload type is known.
pub fn decode_message<P: Payload>(text: &str) -> Result<Message<P>> {
    Codec::new().decode_message(text)
}

/// Decode a message, dispatching on its `messageType`.
pub fn decode_dyn(text: &str) -> Result<DynMessage> {
    Codec::new().decode_dyn(text)
}

/// Decode a bare record.
pub fn decode_record<R: Record + Default>(text: &str) -> Result<R> {
    Codec::new().decode_record(text)
}
