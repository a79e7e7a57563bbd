use crate::enums::{SupportedTechnologies, Technology};

record! {
    /// One Bluetooth advertisement or inquiry response.
    pub struct BluetoothRecordData: "BluetoothRecordData" {
        device_serial_number: String => "deviceSerialNumber",
        device_name: String => "deviceName",
        device_time: String => "deviceTime",
        latitude: f64 => "latitude",
        longitude: f64 => "longitude",
        altitude: f32 => "altitude",
        mission_id: String => "missionId",
        record_number: i32 => "recordNumber",
        accuracy: i32 => "accuracy",
        source_address: String => "sourceAddress",
        destination_address: String => "destinationAddress",
        signal_strength: Option<f32> => "signalStrength",
        tx_power: Option<f32> => "txPower",
        technology: Option<Technology> => "technology",
        supported_technologies: Option<SupportedTechnologies> => "supportedTechnologies",
        /// Name the remote device broadcasts over the air.
        ota_device_name: String => "otaDeviceName",
        channel: Option<i32> => "channel",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}
