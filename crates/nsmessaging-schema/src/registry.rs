use std::fmt;
use std::str::FromStr;

use crate::descriptor::MessageDescriptor;
use crate::error::{Result, SchemaError};
use crate::record::{Payload, Record};
use crate::records::*;

macro_rules! message_types {
    ( $( $(#[$meta:meta])* $variant:ident => $data:ty ),+ $(,)? ) => {
        /// Every message type that can appear in an envelope's `messageType`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageType {
            $( $(#[$meta])* $variant, )+
        }

        impl MessageType {
            pub const ALL: &'static [MessageType] = &[ $( MessageType::$variant, )+ ];

            /// Wire identifier, as carried in `messageType`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( MessageType::$variant => stringify!($variant), )+
                }
            }

            /// Field table of the payload record.
            pub fn descriptor(&self) -> &'static MessageDescriptor {
                match self {
                    $( MessageType::$variant => <$data as Record>::static_descriptor(), )+
                }
            }

            /// Empty payload for this type, ready to be filled by a decoder.
            pub fn new_payload(&self) -> Box<dyn Record> {
                match self {
                    $( MessageType::$variant => Box::new(<$data>::default()), )+
                }
            }
        }

        impl FromStr for MessageType {
            type Err = SchemaError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $( stringify!($variant) => Ok(MessageType::$variant), )+
                    other => Err(SchemaError::UnknownMessageType(other.to_string())),
                }
            }
        }

        $(
            impl Payload for $data {
                const MESSAGE_TYPE: &'static str = stringify!($variant);
            }
        )+
    };
}

message_types! {
    GsmRecord => GsmRecordData,
    CdmaRecord => CdmaRecordData,
    UmtsRecord => UmtsRecordData,
    LteRecord => LteRecordData,
    NrRecord => NrRecordData,
    WifiBeaconRecord => WifiBeaconRecordData,
    WifiProbeRequestRecord => WifiProbeRequestRecordData,
    WifiDeauthenticationRecord => WifiDeauthenticationRecordData,
    WifiOtaRecord => WifiOtaRecordData,
    BluetoothRecord => BluetoothRecordData,
    GnssRecord => GnssRecordData,
    EnergyDetection => EnergyDetectionData,
    SignalDetection => SignalDetectionData,
    DeviceStatus => DeviceStatusData,
    PhoneState => PhoneStateData,
    GsmSignaling => GsmSignalingData,
    UmtsNas => UmtsNasData,
    WcdmaRrc => WcdmaRrcData,
    LteRrc => LteRrcData,
    LteNas => LteNasData,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records that only appear nested inside a payload.
const NESTED: &[fn() -> &'static MessageDescriptor] = &[
    <ErrorInfo as Record>::static_descriptor,
    <NetworkRegistrationInfo as Record>::static_descriptor,
    <CellIdentityGsm as Record>::static_descriptor,
    <CellIdentityCdma as Record>::static_descriptor,
    <CellIdentityUmts as Record>::static_descriptor,
    <CellIdentityLte as Record>::static_descriptor,
    <CellIdentityNr as Record>::static_descriptor,
];

/// Look up a field table by type identifier.
///
/// Accepts message type names (`"GsmRecord"`), payload record names
/// (`"GsmRecordData"`) and nested record names (`"CellIdentityLte"`).
pub fn descriptor_for(type_name: &str) -> Result<&'static MessageDescriptor> {
    if let Ok(message_type) = type_name.parse::<MessageType>() {
        return Ok(message_type.descriptor());
    }

    let payload = MessageType::ALL
        .iter()
        .map(MessageType::descriptor)
        .find(|descriptor| descriptor.name == type_name);
    if let Some(descriptor) = payload {
        tracing::trace!(type_name, "resolved payload record name");
        return Ok(descriptor);
    }

    NESTED
        .iter()
        .map(|descriptor| descriptor())
        .find(|descriptor| descriptor.name == type_name)
        .inspect(|_| tracing::trace!(type_name, "resolved nested record name"))
        .ok_or_else(|| SchemaError::UnknownMessageType(type_name.to_string()))
}
