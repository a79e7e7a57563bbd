//! Payload and nested record types.
//!
//! Every payload starts with the device/location prefix (`deviceSerialNumber`
//! through `altitude`) and ends with the optional orientation suffix
//! (`heading` through `receiverSensitivity`).

mod bluetooth;
mod cellular;
mod detection;
mod device;
mod gnss;
mod phone_state;
mod signaling;
mod wifi;

pub use bluetooth::BluetoothRecordData;
pub use cellular::{CdmaRecordData, GsmRecordData, LteRecordData, NrRecordData, UmtsRecordData};
pub use detection::{EnergyDetectionData, SignalDetectionData};
pub use device::{DeviceStatusData, ErrorInfo};
pub use gnss::GnssRecordData;
pub use phone_state::{
    CellIdentityCdma, CellIdentityGsm, CellIdentityLte, CellIdentityNr, CellIdentityUmts,
    NetworkRegistrationInfo, PhoneStateData,
};
pub use signaling::{GsmSignalingData, LteNasData, LteRrcData, UmtsNasData, WcdmaRrcData};
pub use wifi::{
    WifiBeaconRecordData, WifiDeauthenticationRecordData, WifiOtaRecordData,
    WifiProbeRequestRecordData,
};
