use crate::enums::LteBandwidth;

record! {
    /// One GSM cell observation.
    pub struct GsmRecordData: "GsmRecordData" {
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
        mcc: Option<i32> => "mcc",
        mnc: Option<i32> => "mnc",
        lac: Option<i32> => "lac",
        ci: Option<i32> => "ci",
        arfcn: Option<i32> => "arfcn",
        bsic: Option<i32> => "bsic",
        signal_strength: Option<f32> => "signalStrength",
        ta: Option<i32> => "ta",
        serving_cell: Option<bool> => "servingCell",
        provider: String => "provider",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}

record! {
    /// One CDMA cell observation.
    pub struct CdmaRecordData: "CdmaRecordData" {
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
        sid: Option<i32> => "sid",
        nid: Option<i32> => "nid",
        zone: Option<i32> => "zone",
        bsid: Option<i32> => "bsid",
        channel: Option<i32> => "channel",
        pn_offset: Option<i32> => "pnOffset",
        signal_strength: Option<f32> => "signalStrength",
        ecio: Option<f32> => "ecio",
        serving_cell: Option<bool> => "servingCell",
        provider: String => "provider",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}

record! {
    /// One UMTS cell observation.
    pub struct UmtsRecordData: "UmtsRecordData" {
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
        mcc: Option<i32> => "mcc",
        mnc: Option<i32> => "mnc",
        lac: Option<i32> => "lac",
        cid: Option<i32> => "cid",
        uarfcn: Option<i32> => "uarfcn",
        psc: Option<i32> => "psc",
        rscp: Option<f32> => "rscp",
        signal_strength: Option<f32> => "signalStrength",
        ecno: Option<f32> => "ecno",
        serving_cell: Option<bool> => "servingCell",
        provider: String => "provider",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}

record! {
    /// One LTE cell observation.
    pub struct LteRecordData: "LteRecordData" {
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
        mcc: Option<i32> => "mcc",
        mnc: Option<i32> => "mnc",
        tac: Option<i32> => "tac",
        eci: Option<i32> => "eci",
        earfcn: Option<i32> => "earfcn",
        pci: Option<i32> => "pci",
        rsrp: Option<f32> => "rsrp",
        rsrq: Option<f32> => "rsrq",
        ta: Option<i32> => "ta",
        serving_cell: Option<bool> => "servingCell",
        lte_bandwidth: Option<LteBandwidth> => "lteBandwidth",
        provider: String => "provider",
        signal_strength: Option<f32> => "signalStrength",
        cqi: Option<i32> => "cqi",
        snr: Option<f32> => "snr",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}

record! {
    /// One 5G NR cell observation.
    pub struct NrRecordData: "NrRecordData" {
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
        mcc: Option<i32> => "mcc",
        mnc: Option<i32> => "mnc",
        tac: Option<i32> => "tac",
        /// 36-bit NR cell identity.
        nci: Option<i64> => "nci",
        narfcn: Option<i32> => "narfcn",
        pci: Option<i32> => "pci",
        ss_rsrp: Option<f32> => "ssRsrp",
        ss_rsrq: Option<f32> => "ssRsrq",
        ss_sinr: Option<f32> => "ssSinr",
        csi_rsrp: Option<f32> => "csiRsrp",
        csi_rsrq: Option<f32> => "csiRsrq",
        csi_sinr: Option<f32> => "csiSinr",
        ta: Option<i32> => "ta",
        serving_cell: Option<bool> => "servingCell",
        provider: String => "provider",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}
