//! Network Survey messaging: typed survey records and their canonical JSON form.
//!
//! # Crate Structure
//!
//! - [`schema`]: message envelope, payload records, enums and field tables
//! - [`codec`]: canonical JSON encode/decode for any registered message type
//!
//! ```
//! use nsmessaging::codec::{decode_dyn, encode_message};
//! use nsmessaging::schema::{GsmRecordData, Message, MessageType};
//!
//! let message = Message::new("0.7.0").with_data(GsmRecordData {
//!     mcc: Some(310),
//!     ..Default::default()
//! });
//! let decoded = decode_dyn(&encode_message(&message)).unwrap();
//! assert_eq!(decoded.message_type, MessageType::GsmRecord);
//! ```

/// Re-export schema types.
pub mod schema {
    pub use nsmessaging_schema::*;
}

/// Re-export codec types.
pub mod codec {
    pub use nsmessaging_codec::*;
}
