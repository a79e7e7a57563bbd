use crate::enums::{Domain, NetworkType, SimState};

record! {
    pub struct CellIdentityGsm: "CellIdentityGsm" {
        mcc: Option<i32> => "mcc",
        mnc: Option<i32> => "mnc",
        lac: Option<i32> => "lac",
        ci: Option<i32> => "ci",
        arfcn: Option<i32> => "arfcn",
        bsic: Option<i32> => "bsic",
    }
}

record! {
    pub struct CellIdentityCdma: "CellIdentityCdma" {
        sid: Option<i32> => "sid",
        nid: Option<i32> => "nid",
        bsid: Option<i32> => "bsid",
    }
}

record! {
    pub struct CellIdentityUmts: "CellIdentityUmts" {
        mcc: Option<i32> => "mcc",
        mnc: Option<i32> => "mnc",
        lac: Option<i32> => "lac",
        cid: Option<i32> => "cid",
        uarfcn: Option<i32> => "uarfcn",
        psc: Option<i32> => "psc",
    }
}

record! {
    pub struct CellIdentityLte: "CellIdentityLte" {
        mcc: Option<i32> => "mcc",
        mnc: Option<i32> => "mnc",
        tac: Option<i32> => "tac",
        eci: Option<i32> => "eci",
        earfcn: Option<i32> => "earfcn",
        pci: Option<i32> => "pci",
    }
}

record! {
    pub struct CellIdentityNr: "CellIdentityNr" {
        mcc: Option<i32> => "mcc",
        mnc: Option<i32> => "mnc",
        tac: Option<i32> => "tac",
        nci: Option<i64> => "nci",
        narfcn: Option<i32> => "narfcn",
        pci: Option<i32> => "pci",
    }
}

record! {
    /// Registration of the modem in one domain, with the cell it camps on.
    ///
    /// At most one of the `cell_identity_*` fields is expected to be set.
    pub struct NetworkRegistrationInfo: "NetworkRegistrationInfo" {
        domain: Option<Domain> => "domain",
        access_network_technology: Option<NetworkType> => "accessNetworkTechnology",
        roaming: Option<bool> => "roaming",
        reject_cause: Option<i32> => "rejectCause",
        cell_identity_gsm: Option<CellIdentityGsm> => "cellIdentityGsm",
        cell_identity_cdma: Option<CellIdentityCdma> => "cellIdentityCdma",
        cell_identity_umts: Option<CellIdentityUmts> => "cellIdentityUmts",
        cell_identity_lte: Option<CellIdentityLte> => "cellIdentityLte",
        cell_identity_nr: Option<CellIdentityNr> => "cellIdentityNr",
    }
}

record! {
    /// SIM and registration state of one modem slot.
    pub struct PhoneStateData: "PhoneStateData" {
        device_serial_number: String => "deviceSerialNumber",
        device_name: String => "deviceName",
        device_time: String => "deviceTime",
        latitude: f64 => "latitude",
        longitude: f64 => "longitude",
        altitude: f32 => "altitude",
        sim_state: Option<SimState> => "simState",
        sim_operator: String => "simOperator",
        network_registration_info: Vec<NetworkRegistrationInfo> => "networkRegistrationInfo",
        accuracy: i32 => "accuracy",
        slot: Option<i32> => "slot",
        non_terrestrial_network: Option<bool> => "nonTerrestrialNetwork",
        heading: Option<f32> => "heading",
        pitch: Option<f32> => "pitch",
        roll: Option<f32> => "roll",
        field_of_view: Option<f32> => "fieldOfView",
        receiver_sensitivity: Option<f32> => "receiverSensitivity",
    }
}
