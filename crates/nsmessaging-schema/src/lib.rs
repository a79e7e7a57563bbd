//! nsmessaging-schema: Network Survey message model.
//!
//! Every record type carries a static field table ([`MessageDescriptor`])
//! listing its wire names, kinds and presence rules in canonical encode
//! order. Codecs walk those tables through the [`Record`] and [`Field`]
//! traits instead of hand-writing per-type code.
//!
//! ```
//! use nsmessaging_schema::{GsmRecordData, Message, Record};
//!
//! let message = Message::new("0.7.0").with_data(GsmRecordData {
//!     mcc: Some(310),
//!     serving_cell: Some(false),
//!     ..Default::default()
//! });
//! assert_eq!(message.message_type, "GsmRecord");
//! assert_eq!(GsmRecordData::static_descriptor().fields[10].name, "mcc");
//! ```

#[macro_use]
mod macros;

pub mod descriptor;
pub mod enums;
pub mod error;
pub mod message;
pub mod record;
pub mod records;
pub mod registry;

pub use descriptor::{Cardinality, EnumDescriptor, FieldDescriptor, FieldKind, MessageDescriptor};
pub use enums::*;
pub use error::{Result, SchemaError, ValueError};
pub use message::{DynMessage, Message};
pub use record::{
    Field, FieldRef, FieldShape, Payload, Record, Scalar, ScalarRef, ScalarValue, WireEnum,
};
pub use records::*;
pub use registry::{descriptor_for, MessageType};

pub use bytes::Bytes;
