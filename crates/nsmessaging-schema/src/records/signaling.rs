//! Raw protocol captures. `pcapRecord` carries the captured frame with its
//! GSMTAP header.

use bytes::Bytes;

use crate::enums::{GsmSignalingChannelType, LteNasChannelType, LteRrcChannelType, WcdmaRrcChannelType};

record! {
    pub struct GsmSignalingData: "GsmSignalingData" {
        device_serial_number: String => "deviceSerialNumber",
        device_name: String => "deviceName",
        device_time: String => "deviceTime",
        latitude: f64 => "latitude",
        longitude: f64 => "longitude",
        altitude: f32 => "altitude",
        mission_id: String => "missionId",
        accuracy: i32 => "accuracy",
        channel_type: Option<GsmSignalingChannelType> => "channelType",
        pcap_record: Bytes => "pcapRecord",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}

record! {
    pub struct UmtsNasData: "UmtsNasData" {
        device_serial_number: String => "deviceSerialNumber",
        device_name: String => "deviceName",
        device_time: String => "deviceTime",
        latitude: f64 => "latitude",
        longitude: f64 => "longitude",
        altitude: f32 => "altitude",
        mission_id: String => "missionId",
        accuracy: i32 => "accuracy",
        pcap_record: Bytes => "pcapRecord",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}

record! {
    pub struct WcdmaRrcData: "WcdmaRrcData" {
        device_serial_number: String => "deviceSerialNumber",
        device_name: String => "deviceName",
        device_time: String => "deviceTime",
        latitude: f64 => "latitude",
        longitude: f64 => "longitude",
        altitude: f32 => "altitude",
        mission_id: String => "missionId",
        accuracy: i32 => "accuracy",
        channel_type: Option<WcdmaRrcChannelType> => "channelType",
        pcap_record: Bytes => "pcapRecord",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}

record! {
    pub struct LteRrcData: "LteRrcData" {
        device_serial_number: String => "deviceSerialNumber",
        device_name: String => "deviceName",
        device_time: String => "deviceTime",
        latitude: f64 => "latitude",
        longitude: f64 => "longitude",
        altitude: f32 => "altitude",
        mission_id: String => "missionId",
        accuracy: i32 => "accuracy",
        channel_type: Option<LteRrcChannelType> => "channelType",
        pcap_record: Bytes => "pcapRecord",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}

record! {
    pub struct LteNasData: "LteNasData" {
        device_serial_number: String => "deviceSerialNumber",
        device_name: String => "deviceName",
        device_time: String => "deviceTime",
        latitude: f64 => "latitude",
        longitude: f64 => "longitude",
        altitude: f32 => "altitude",
        mission_id: String => "missionId",
        accuracy: i32 => "accuracy",
        channel_type: Option<LteNasChannelType> => "channelType",
        pcap_record: Bytes => "pcapRecord",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}
