use crate::error::Result;
use crate::record::{Payload, Record};
use crate::registry::MessageType;

/// Envelope around one payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Message<P> {
    /// Schema version of the producer, e.g. `"0.13.0"`.
    pub version: String,
    pub message_type: String,
    pub data: Option<P>,
}

impl<P: Payload> Message<P> {
    /// Envelope with `messageType` set from the payload type and no data.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            message_type: P::MESSAGE_TYPE.to_string(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: P) -> Self {
        self.data = Some(data);
        self
    }
}

/// Envelope whose payload type is only known at runtime.
#[derive(Debug)]
pub struct DynMessage {
    pub version: String,
    pub message_type: MessageType,
    pub data: Option<Box<dyn Record>>,
}

impl DynMessage {
    /// Recover the typed envelope. `None` if `P` is not this message's payload type.
    pub fn into_typed<P: Payload>(self) -> Option<Message<P>> {
        if self.message_type.as_str() != P::MESSAGE_TYPE {
            return None;
        }
        let data = match self.data {
            Some(record) => Some(*record.into_any().downcast::<P>().ok()?),
            None => None,
        };
        Some(Message {
            version: self.version,
            message_type: P::MESSAGE_TYPE.to_string(),
            data,
        })
    }

    /// Type-erase a typed envelope.
    ///
    /// Fails when `message_type` was overwritten with a name outside the registry.
    pub fn from_typed<P: Payload>(message: Message<P>) -> Result<Self> {
        Ok(Self {
            version: message.version,
            message_type: message.message_type.parse()?,
            data: message.data.map(|data| Box::new(data) as Box<dyn Record>),
        })
    }
}
