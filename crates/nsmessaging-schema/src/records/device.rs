record! {
    /// Error condition reported by a survey device.
    pub struct ErrorInfo: "Error" {
        error_message: String => "errorMessage",
    }
}

record! {
    /// Periodic health report from a survey device.
    pub struct DeviceStatusData: "DeviceStatusData" {
        device_serial_number: String => "deviceSerialNumber",
        device_name: String => "deviceName",
        device_time: String => "deviceTime",
        latitude: f64 => "latitude",
        longitude: f64 => "longitude",
        altitude: f32 => "altitude",
        battery_level_percent: Option<i32> => "batteryLevelPercent",
        device_model: String => "deviceModel",
        accuracy: i32 => "accuracy",
        error: Option<ErrorInfo> => "error",
        /// Set when device management forced the survey configuration.
        mdm_override: Option<bool> => "mdmOverride",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}
