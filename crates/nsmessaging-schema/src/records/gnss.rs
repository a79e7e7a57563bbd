use crate::enums::Constellation;

record! {
    /// Raw measurement for one GNSS space vehicle.
    pub struct GnssRecordData: "GnssRecordData" {
        device_serial_number: String => "deviceSerialNumber",
        device_name: String => "deviceName",
        device_time: String => "deviceTime",
        latitude: f64 => "latitude",
        longitude: f64 => "longitude",
        altitude: f32 => "altitude",
        mission_id: String => "missionId",
        record_number: i32 => "recordNumber",
        group_number: i32 => "groupNumber",
        device_model: String => "deviceModel",
        accuracy: i32 => "accuracy",
        constellation: Option<Constellation> => "constellation",
        space_vehicle_id: Option<u32> => "spaceVehicleId",
        carrier_freq_hz: Option<u64> => "carrierFreqHz",
        clock_offset: Option<f64> => "clockOffset",
        used_in_solution: Option<bool> => "usedInSolution",
        undulation_m: Option<f32> => "undulationM",
        latitude_std_dev_m: Option<f32> => "latitudeStdDevM",
        longitude_std_dev_m: Option<f32> => "longitudeStdDevM",
        altitude_std_dev_m: Option<f32> => "altitudeStdDevM",
        agc_db: Option<f32> => "agcDb",
        cn0_db_hz: Option<f32> => "cn0DbHz",
        hdop: Option<f32> => "hdop",
        vdop: Option<f32> => "vdop",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldKind, Record};

    #[test]
    fn carrier_frequency_is_unsigned_wide() {
        let table = GnssRecordData::static_descriptor();
        assert_eq!(table.field("carrierFreqHz").unwrap().kind, FieldKind::UInt64);
        assert_eq!(table.field("spaceVehicleId").unwrap().kind, FieldKind::UInt32);
        assert_eq!(table.field("clockOffset").unwrap().kind, FieldKind::Double);
        assert_eq!(table.field("cn0_db_hz").unwrap().name, "cn0DbHz");
    }
}
