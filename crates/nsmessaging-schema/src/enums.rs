//! Closed enum sets carried by survey records.

wire_enum! {
    /// Channel bandwidth of an LTE carrier.
    pub enum LteBandwidth {
        Unknown => "UNKNOWN",
        Mhz1_4 => "MHZ_1_4",
        Mhz3 => "MHZ_3",
        Mhz5 => "MHZ_5",
        Mhz10 => "MHZ_10",
        Mhz15 => "MHZ_15",
        Mhz20 => "MHZ_20",
    }
}

wire_enum! {
    /// 802.11 service set type advertised in a beacon.
    pub enum ServiceSetType {
        Unknown => "UNKNOWN",
        Bss => "BSS",
        Ibss => "IBSS",
        Mbss => "MBSS",
    }
}

wire_enum! {
    /// RSN pairwise or group cipher suite.
    pub enum CipherSuite {
        Unknown => "UNKNOWN",
        Wep40 => "WEP_40",
        Tkip => "TKIP",
        Ccmp => "CCMP",
        Wep104 => "WEP_104",
        BipCmac128 => "BIP_CMAC_128",
        GroupAddressedTrafficNotAllowed => "GROUP_ADDRESSED_TRAFFIC_NOT_ALLOWED",
        Gcmp128 => "GCMP_128",
        Gcmp256 => "GCMP_256",
        Ccmp256 => "CCMP_256",
        BipGmac128 => "BIP_GMAC_128",
        BipGmac256 => "BIP_GMAC_256",
        BipCmac256 => "BIP_CMAC_256",
        Other => "OTHER",
    }
}

wire_enum! {
    /// RSN authentication and key management suite.
    pub enum AkmSuite {
        Unknown => "UNKNOWN",
        Open => "OPEN",
        Ieee8021x => "IEEE_8021X",
        Psk => "PSK",
        Ft8021x => "FT_8021X",
        FtPsk => "FT_PSK",
        Ieee8021xSha256 => "IEEE_8021X_SHA256",
        PskSha256 => "PSK_SHA256",
        Tdls => "TDLS",
        Sae => "SAE",
        FtSae => "FT_SAE",
        ApPeerKey => "AP_PEER_KEY",
        Ieee8021xSuiteB => "IEEE_8021X_SUITE_B",
        Ieee8021xSuiteB192 => "IEEE_8021X_SUITE_B_192",
        Ft8021xSha384 => "FT_8021X_SHA384",
        FilsSha256 => "FILS_SHA256",
        FilsSha384 => "FILS_SHA384",
        FtFilsSha256 => "FT_FILS_SHA256",
        FtFilsSha384 => "FT_FILS_SHA384",
        Owe => "OWE",
        Other => "OTHER",
    }
}

wire_enum! {
    /// Summary of the security a Wi-Fi network advertises.
    pub enum EncryptionType {
        Unknown => "UNKNOWN",
        Open => "OPEN",
        Wep => "WEP",
        Wpa => "WPA",
        WpaWpa2 => "WPA_WPA2",
        Wpa2 => "WPA2",
        Wpa3 => "WPA3",
        Wpa2Wpa3 => "WPA2_WPA3",
        Other => "OTHER",
    }
}

wire_enum! {
    /// Role of the transmitting 802.11 station.
    pub enum NodeType {
        Unknown => "UNKNOWN",
        Ap => "AP",
        NonApSta => "NON_AP_STA",
    }
}

wire_enum! {
    /// 802.11 amendment in use.
    pub enum Standard {
        Unknown => "UNKNOWN",
        Ieee80211 => "IEEE80211",
        Ieee80211a => "IEEE80211A",
        Ieee80211b => "IEEE80211B",
        Ieee80211g => "IEEE80211G",
        Ieee80211n => "IEEE80211N",
        Ieee80211ac => "IEEE80211AC",
        Ieee80211ax => "IEEE80211AX",
        Ieee80211be => "IEEE80211BE",
        Other => "OTHER",
    }
}

wire_enum! {
    /// Wi-Fi channel width.
    pub enum WifiBandwidth {
        Unknown => "UNKNOWN",
        Mhz20 => "MHZ_20",
        Mhz40 => "MHZ_40",
        Mhz80 => "MHZ_80",
        Mhz80Plus => "MHZ_80_PLUS",
        Mhz160 => "MHZ_160",
        Mhz320 => "MHZ_320",
    }
}

wire_enum! {
    /// Bluetooth radio technology a record was observed on.
    pub enum Technology {
        Unknown => "UNKNOWN",
        Le => "LE",
        BrEdr => "BR_EDR",
    }
}

wire_enum! {
    /// Bluetooth technologies a remote device supports.
    pub enum SupportedTechnologies {
        Unknown => "UNKNOWN",
        Le => "LE",
        BrEdr => "BR_EDR",
        Dual => "DUAL",
    }
}

wire_enum! {
    /// GNSS constellation of a space vehicle.
    pub enum Constellation {
        Unknown => "UNKNOWN",
        Gps => "GPS",
        Sbas => "SBAS",
        Glonass => "GLONASS",
        Qzss => "QZSS",
        Beidou => "BEIDOU",
        Galileo => "GALILEO",
        Irnss => "IRNSS",
    }
}

wire_enum! {
    /// State of a SIM slot.
    pub enum SimState {
        Unknown => "UNKNOWN",
        Absent => "ABSENT",
        PinRequired => "PIN_REQUIRED",
        PukRequired => "PUK_REQUIRED",
        NetworkLocked => "NETWORK_LOCKED",
        Ready => "READY",
        NotReady => "NOT_READY",
        PermDisabled => "PERM_DISABLED",
        CardIoError => "CARD_IO_ERROR",
        CardRestricted => "CARD_RESTRICTED",
    }
}

wire_enum! {
    /// Registration domain: circuit switched, packet switched, or both.
    pub enum Domain {
        Unknown => "UNKNOWN",
        Cs => "CS",
        Ps => "PS",
        CsPs => "CS_PS",
    }
}

wire_enum! {
    /// Radio access technology of a registration.
    pub enum NetworkType {
        Unknown => "UNKNOWN",
        Gprs => "GPRS",
        Edge => "EDGE",
        Umts => "UMTS",
        Cdma => "CDMA",
        Evdo0 => "EVDO_0",
        EvdoA => "EVDO_A",
        OneXRtt => "ONEXRTT",
        Hsdpa => "HSDPA",
        Hsupa => "HSUPA",
        Hspa => "HSPA",
        Iden => "IDEN",
        EvdoB => "EVDO_B",
        Lte => "LTE",
        Ehrpd => "EHRPD",
        Hspap => "HSPAP",
        Gsm => "GSM",
        TdScdma => "TD_SCDMA",
        Iwlan => "IWLAN",
        LteCa => "LTE_CA",
        Nr => "NR",
    }
}

wire_enum! {
    /// Logical channel of a captured GSM signaling message.
    pub enum GsmSignalingChannelType {
        Unknown => "UNKNOWN",
        Bcch => "BCCH",
        Ccch => "CCCH",
        Dcch => "DCCH",
        Sacch => "SACCH",
    }
}

wire_enum! {
    /// Logical channel of a captured WCDMA RRC message.
    pub enum WcdmaRrcChannelType {
        BcchBch => "BCCH_BCH",
        BcchFach => "BCCH_FACH",
        DlCcch => "DL_CCCH",
        DlDcch => "DL_DCCH",
        UlCcch => "UL_CCCH",
        UlDcch => "UL_DCCH",
        Pcch => "PCCH",
        Mcch => "MCCH",
        Msch => "MSCH",
    }
}

wire_enum! {
    /// Logical channel of a captured LTE RRC message.
    pub enum LteRrcChannelType {
        BcchBch => "BCCH_BCH",
        BcchDlSch => "BCCH_DL_SCH",
        Mcch => "MCCH",
        Pcch => "PCCH",
        DlCcch => "DL_CCCH",
        DlDcch => "DL_DCCH",
        UlCcch => "UL_CCCH",
        UlDcch => "UL_DCCH",
        ScMcch => "SC_MCCH",
    }
}

wire_enum! {
    /// Whether a captured LTE NAS message was integrity protected.
    pub enum LteNasChannelType {
        Plain => "PLAIN",
        Secure => "SECURE",
    }
}
