use bytes::Bytes;

use crate::enums::{
    AkmSuite, CipherSuite, EncryptionType, NodeType, ServiceSetType, Standard, WifiBandwidth,
};

record! {
    /// An 802.11 beacon frame.
    pub struct WifiBeaconRecordData: "WifiBeaconRecordData" {
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
        bssid: Option<String> => "bssid",
        beacon_interval: Option<i32> => "beaconInterval",
        service_set_type: Option<ServiceSetType> => "serviceSetType",
        ssid: Option<String> => "ssid",
        supported_rates: Option<String> => "supportedRates",
        extended_supported_rates: Option<String> => "extendedSupportedRates",
        cipher_suites: Vec<CipherSuite> => "cipherSuites",
        akm_suites: Vec<AkmSuite> => "akmSuites",
        encryption_type: Option<EncryptionType> => "encryptionType",
        wps: Option<bool> => "wps",
        channel: Option<i32> => "channel",
        frequency_mhz: Option<i32> => "frequencyMhz",
        signal_strength: Option<f32> => "signalStrength",
        snr: Option<f32> => "snr",
        node_type: Option<NodeType> => "nodeType",
        standard: Option<Standard> => "standard",
        passpoint: Option<bool> => "passpoint",
        bandwidth: Option<WifiBandwidth> => "bandwidth",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}

record! {
    /// An 802.11 probe request frame.
    pub struct WifiProbeRequestRecordData: "WifiProbeRequestRecordData" {
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
        bssid: Option<String> => "bssid",
        ssid: Option<String> => "ssid",
        channel: Option<i32> => "channel",
        frequency_mhz: Option<i32> => "frequencyMhz",
        signal_strength: Option<f32> => "signalStrength",
        snr: Option<f32> => "snr",
        node_type: Option<NodeType> => "nodeType",
        standard: Option<Standard> => "standard",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}

record! {
    /// An 802.11 deauthentication frame.
    pub struct WifiDeauthenticationRecordData: "WifiDeauthenticationRecordData" {
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
        bssid: Option<String> => "bssid",
        ssid: Option<String> => "ssid",
        channel: Option<i32> => "channel",
        frequency_mhz: Option<i32> => "frequencyMhz",
        signal_strength: Option<f32> => "signalStrength",
        snr: Option<f32> => "snr",
        node_type: Option<NodeType> => "nodeType",
        standard: Option<Standard> => "standard",
        /// 802.11 reason code.
        reason: i32 => "reason",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}

record! {
    /// A raw 802.11 frame captured over the air.
    pub struct WifiOtaRecordData: "WifiOtaRecordData" {
        device_serial_number: String => "deviceSerialNumber",
        device_name: String => "deviceName",
        device_time: String => "deviceTime",
        latitude: f64 => "latitude",
        longitude: f64 => "longitude",
        altitude: f32 => "altitude",
        mission_id: String => "missionId",
        record_number: i32 => "recordNumber",
        accuracy: i32 => "accuracy",
        /// Frame bytes as captured, radiotap header included.
        pcap_record: Bytes => "pcapRecord",
        frame_type: i32 => "frameType",
        frame_subtype: i32 => "frameSubtype",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}
