record! {
    /// Wideband energy above the noise floor at one frequency.
    pub struct EnergyDetectionData: "EnergyDetectionData" {
        device_serial_number: String => "deviceSerialNumber",
        device_name: String => "deviceName",
        device_time: String => "deviceTime",
        latitude: f64 => "latitude",
        longitude: f64 => "longitude",
        altitude: f32 => "altitude",
        mission_id: String => "missionId",
        record_number: i32 => "recordNumber",
        group_number: i32 => "groupNumber",
        accuracy: i32 => "accuracy",
        frequency_hz: i64 => "frequencyHz",
        bandwidth_hz: Option<i32> => "bandwidthHz",
        signal_strength: f32 => "signalStrength",
        snr: Option<f32> => "snr",
        time_up: String => "timeUp",
        duration_sec: Option<f32> => "durationSec",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}

record! {
    /// An energy detection classified as a known signal.
    pub struct SignalDetectionData: "SignalDetectionData" {
        device_serial_number: String => "deviceSerialNumber",
        device_name: String => "deviceName",
        device_time: String => "deviceTime",
        latitude: f64 => "latitude",
        longitude: f64 => "longitude",
        altitude: f32 => "altitude",
        mission_id: String => "missionId",
        record_number: i32 => "recordNumber",
        group_number: i32 => "groupNumber",
        accuracy: i32 => "accuracy",
        frequency_hz: i64 => "frequencyHz",
        bandwidth_hz: Option<i32> => "bandwidthHz",
        signal_strength: f32 => "signalStrength",
        snr: Option<f32> => "snr",
        time_up: String => "timeUp",
        duration_sec: Option<f32> => "durationSec",
        modulation: String => "modulation",
        signal_name: String => "signalName",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}
