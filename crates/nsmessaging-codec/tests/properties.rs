use nsmessaging_codec::{
    decode_dyn, decode_message, decode_record, encode_dyn, encode_message, encode_record, Codec,
    CodecConfig, CodecError,
};
use nsmessaging_schema::*;

fn strict() -> Codec {
    Codec::with_config(CodecConfig {
        strict_mode: true,
        ..Default::default()
    })
}

#[test]
fn every_message_type_round_trips_its_default_payload() {
    for &message_type in MessageType::ALL {
        let message = DynMessage {
            version: "0.13.0".into(),
            message_type,
            data: Some(message_type.new_payload()),
        };
        let text = encode_dyn(&message);
        let decoded = decode_dyn(&text).unwrap();
        assert_eq!(decoded.message_type, message_type);
        assert_eq!(encode_dyn(&decoded), text, "{message_type}");
    }
}

#[test]
fn envelope_without_data_omits_the_key() {
    let message = Message::<GnssRecordData>::new("0.7.0");
    let text = encode_message(&message);
    assert_eq!(text, r#"{"version":"0.7.0","messageType":"GnssRecord"}"#);

    let decoded: Message<GnssRecordData> = decode_message(&text).unwrap();
    assert_eq!(decoded, message);
}

#[test]
fn absent_optional_differs_from_present_zero() {
    let absent = GsmRecordData::default();
    let zero = GsmRecordData {
        mcc: Some(0),
        signal_strength: Some(0.0),
        serving_cell: Some(false),
        ..Default::default()
    };

    let absent_text = encode_record(&absent);
    let zero_text = encode_record(&zero);
    assert!(!absent_text.contains("mcc"));
    assert!(zero_text.contains(r#""mcc":0"#));
    assert!(zero_text.contains(r#""signalStrength":0.0"#));
    assert!(zero_text.contains(r#""servingCell":false"#));

    assert_eq!(decode_record::<GsmRecordData>(&absent_text).unwrap(), absent);
    assert_eq!(decode_record::<GsmRecordData>(&zero_text).unwrap(), zero);
}

#[test]
fn required_fields_are_written_even_when_zero() {
    let text = encode_record(&EnergyDetectionData::default());
    assert!(text.contains(r#""deviceSerialNumber":"""#));
    assert!(text.contains(r#""latitude":0.0"#));
    assert!(text.contains(r#""frequencyHz":"0""#));
    assert!(text.contains(r#""signalStrength":0.0"#));
    assert!(!text.contains("bandwidthHz"));
    assert!(!text.contains("heading"));
}

#[test]
fn empty_repeated_field_is_omitted_and_order_is_kept() {
    let empty = WifiBeaconRecordData::default();
    assert!(!encode_record(&empty).contains("cipherSuites"));

    let beacon = WifiBeaconRecordData {
        cipher_suites: vec![CipherSuite::Ccmp, CipherSuite::Tkip, CipherSuite::Ccmp],
        ..Default::default()
    };
    let text = encode_record(&beacon);
    assert!(text.contains(r#""cipherSuites":["CCMP","TKIP","CCMP"]"#));
    assert_eq!(decode_record::<WifiBeaconRecordData>(&text).unwrap(), beacon);
}

#[test]
fn wide_integers_are_quoted_and_accept_either_form() {
    let nr = NrRecordData {
        nci: Some(68_719_476_735),
        ..Default::default()
    };
    let text = encode_record(&nr);
    assert!(text.contains(r#""nci":"68719476735""#));
    assert_eq!(decode_record::<NrRecordData>(&text).unwrap(), nr);

    let quoted: NrRecordData = decode_record(r#"{"nci":"52824577"}"#).unwrap();
    let bare: NrRecordData = decode_record(r#"{"nci":52824577}"#).unwrap();
    assert_eq!(quoted.nci, Some(52824577));
    assert_eq!(bare.nci, Some(52824577));

    let gnss: GnssRecordData = decode_record(r#"{"carrierFreqHz":"18446744073709551615"}"#).unwrap();
    assert_eq!(gnss.carrier_freq_hz, Some(u64::MAX));
}

#[test]
fn wide_integer_overflow_is_out_of_range() {
    let err = decode_record::<NrRecordData>(r#"{"nci":"9223372036854775808"}"#).unwrap_err();
    assert!(matches!(err, CodecError::NumberOutOfRange { ref value, .. } if value == "9223372036854775808"));
    assert_eq!(err.path().unwrap().to_string(), "nci");

    let err = decode_record::<GnssRecordData>(r#"{"carrierFreqHz":"-1"}"#).unwrap_err();
    assert!(matches!(err, CodecError::NumberOutOfRange { .. }));
}

#[test]
fn narrow_integers_reject_out_of_range_values() {
    let err = decode_record::<GsmRecordData>(r#"{"mcc":2147483648}"#).unwrap_err();
    assert!(matches!(err, CodecError::NumberOutOfRange { .. }));

    let err = decode_record::<GnssRecordData>(r#"{"spaceVehicleId":-1}"#).unwrap_err();
    assert!(matches!(err, CodecError::NumberOutOfRange { .. }));

    let err = decode_record::<GsmRecordData>(r#"{"mcc":310.5}"#).unwrap_err();
    assert!(matches!(err, CodecError::TypeMismatch { .. }));
}

#[test]
fn unknown_enum_string_fails_with_location() {
    let text = r#"{"version":"0.7.0","messageType":"LteRecord","data":{"lteBandwidth":"NOT_A_REAL_ENUM"}}"#;
    let err = decode_message::<LteRecordData>(text).unwrap_err();
    match &err {
        CodecError::UnknownEnumVariant {
            path,
            enum_name,
            value,
        } => {
            assert_eq!(path.to_string(), "data.lteBandwidth");
            assert_eq!(*enum_name, "LteBandwidth");
            assert_eq!(value, "NOT_A_REAL_ENUM");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn every_enum_variant_survives_a_round_trip() {
    for bandwidth in LteBandwidth::ALL {
        let lte = LteRecordData {
            lte_bandwidth: Some(*bandwidth),
            ..Default::default()
        };
        let text = encode_record(&lte);
        assert!(text.contains(bandwidth.as_wire()));
        assert_eq!(decode_record::<LteRecordData>(&text).unwrap(), lte);
    }
    for constellation in Constellation::ALL {
        let gnss = GnssRecordData {
            constellation: Some(*constellation),
            ..Default::default()
        };
        assert_eq!(
            decode_record::<GnssRecordData>(&encode_record(&gnss)).unwrap(),
            gnss
        );
    }
}

#[test]
fn binary_payloads_survive_every_length() {
    for len in 0..=64usize {
        let bytes: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
        let record = LteNasData {
            pcap_record: Bytes::from(bytes.clone()),
            ..Default::default()
        };
        let decoded: LteNasData = decode_record(&encode_record(&record)).unwrap();
        assert_eq!(decoded.pcap_record.as_ref(), bytes.as_slice());
    }
}

#[test]
fn bad_base64_is_rejected() {
    let err = decode_record::<WifiOtaRecordData>(r#"{"pcapRecord":"not base64!"}"#).unwrap_err();
    assert!(matches!(err, CodecError::InvalidBinaryEncoding { .. }));
    assert_eq!(err.path().unwrap().to_string(), "pcapRecord");
}

#[test]
fn encoding_is_deterministic() {
    let message = Message::new("0.13.0").with_data(WifiBeaconRecordData {
        ssid: Some("net".into()),
        akm_suites: vec![AkmSuite::Psk, AkmSuite::Sae],
        channel: Some(36),
        ..Default::default()
    });
    let first = encode_message(&message);
    let second = encode_message(&message.clone());
    assert_eq!(first, second);

    let decoded: Message<WifiBeaconRecordData> = decode_message(&first).unwrap();
    assert_eq!(encode_message(&decoded), first);
}

#[test]
fn reordered_input_encodes_to_canonical_order() {
    let reordered = r#"{"data":{"ci":47241,"mcc":310},"messageType":"GsmRecord","version":"0.7.0"}"#;
    let decoded: Message<GsmRecordData> = decode_message(reordered).unwrap();
    let text = encode_message(&decoded);
    assert!(text.starts_with(r#"{"version":"0.7.0","messageType":"GsmRecord","data":{"#));
    let mcc = text.find(r#""mcc""#).unwrap();
    let ci = text.find(r#""ci""#).unwrap();
    assert!(mcc < ci);
}

#[test]
fn unknown_fields_are_skipped_by_default() {
    let text = r#"{"version":"0.7.0","messageType":"GsmRecord","futureKey":[1,2],"data":{"mcc":310,"futureField":{"a":1}}}"#;
    let decoded: Message<GsmRecordData> = decode_message(text).unwrap();
    assert_eq!(decoded.data.unwrap().mcc, Some(310));
}

#[test]
fn strict_mode_rejects_unknown_fields() {
    let text = r#"{"version":"0.7.0","messageType":"GsmRecord","data":{"mcc":310,"futureField":1}}"#;
    let err = strict().decode_message::<GsmRecordData>(text).unwrap_err();
    assert!(matches!(err, CodecError::UnknownField { .. }));
    assert_eq!(err.path().unwrap().to_string(), "data.futureField");

    let known = r#"{"version":"0.7.0","messageType":"GsmRecord","data":{"mcc":310}}"#;
    assert!(strict().decode_message::<GsmRecordData>(known).is_ok());
}

#[test]
fn malformed_json_is_reported() {
    let err = decode_message::<GsmRecordData>(r#"{"version":"0.7.0","#).unwrap_err();
    assert!(matches!(err, CodecError::MalformedJson(_)));
    assert!(err.path().is_none());

    let err = decode_dyn("").unwrap_err();
    assert!(matches!(err, CodecError::MalformedJson(_)));
}

#[test]
fn wrong_json_kind_is_a_type_mismatch() {
    let err = decode_record::<GsmRecordData>(r#"{"servingCell":"yes"}"#).unwrap_err();
    assert!(matches!(err, CodecError::TypeMismatch { expected: "bool", found: "string", .. }));

    let err = decode_record::<DeviceStatusData>(r#"{"error":"boom"}"#).unwrap_err();
    assert!(matches!(err, CodecError::TypeMismatch { expected: "object", .. }));
    assert_eq!(err.path().unwrap().to_string(), "error");

    let err = decode_message::<GsmRecordData>(r#"{"data":[]}"#).unwrap_err();
    assert!(matches!(err, CodecError::TypeMismatch { expected: "object", found: "array", .. }));
}

#[test]
fn message_type_must_match_requested_payload() {
    let text = r#"{"version":"0.7.0","messageType":"LteRecord","data":{}}"#;
    let err = decode_message::<GsmRecordData>(text).unwrap_err();
    assert!(matches!(
        err,
        CodecError::MessageTypeMismatch { expected: "GsmRecord", ref found } if found == "LteRecord"
    ));

    let text = r#"{"version":"0.7.0","messageType":"FooRecord","data":{}}"#;
    let err = decode_message::<GsmRecordData>(text).unwrap_err();
    assert!(matches!(err, CodecError::UnknownMessageType(ref name) if name == "FooRecord"));

    let err = decode_dyn(text).unwrap_err();
    assert!(matches!(err, CodecError::UnknownMessageType(ref name) if name == "FooRecord"));
}

#[test]
fn typed_decode_tolerates_missing_message_type() {
    let decoded: Message<CdmaRecordData> = decode_message(r#"{"version":"0.7.0","data":{"sid":139}}"#).unwrap();
    assert_eq!(decoded.message_type, "CdmaRecord");
    assert_eq!(decoded.data.unwrap().sid, Some(139));
}

#[test]
fn dynamic_decode_downcasts_to_typed_message() {
    let text = r#"{"version":"0.9.0","messageType":"DeviceStatus","data":{"batteryLevelPercent":38}}"#;
    let message = decode_dyn(text).unwrap();
    assert_eq!(message.message_type, MessageType::DeviceStatus);

    let typed = message.into_typed::<DeviceStatusData>().unwrap();
    assert_eq!(typed.version, "0.9.0");
    assert_eq!(typed.data.unwrap().battery_level_percent, Some(38));

    let message = decode_dyn(text).unwrap();
    assert!(message.into_typed::<GsmRecordData>().is_none());
}

#[test]
fn null_means_absent() {
    let gsm: GsmRecordData = decode_record(r#"{"mcc":null,"provider":null,"servingCell":true}"#).unwrap();
    assert_eq!(gsm.mcc, None);
    assert_eq!(gsm.provider, "");
    assert_eq!(gsm.serving_cell, Some(true));

    let decoded: Message<GsmRecordData> =
        decode_message(r#"{"version":"0.7.0","messageType":"GsmRecord","data":null}"#).unwrap();
    assert!(decoded.data.is_none());
}

#[test]
fn snake_case_keys_are_accepted() {
    let text = r#"{"version":"0.7.0","message_type":"PhoneState","data":{"sim_state":"READY","network_registration_info":[{"reject_cause":2,"cell_identity_lte":{"pci":250}}]}}"#;
    let decoded: Message<PhoneStateData> = decode_message(text).unwrap();
    let data = decoded.data.unwrap();
    assert_eq!(data.sim_state, Some(SimState::Ready));
    assert_eq!(data.network_registration_info[0].reject_cause, Some(2));
    assert_eq!(
        data.network_registration_info[0]
            .cell_identity_lte
            .as_ref()
            .unwrap()
            .pci,
        Some(250)
    );

    let text = encode_message(&Message::new("0.7.0").with_data(data));
    assert!(text.contains("simState"));
    assert!(!text.contains("sim_state"));
}

#[test]
fn non_finite_floats_use_string_tokens() {
    let lte = LteRecordData {
        rsrp: Some(f32::NEG_INFINITY),
        rsrq: Some(f32::INFINITY),
        snr: Some(f32::NAN),
        ..Default::default()
    };
    let text = encode_record(&lte);
    assert!(text.contains(r#""rsrp":"-Infinity""#));
    assert!(text.contains(r#""rsrq":"Infinity""#));
    assert!(text.contains(r#""snr":"NaN""#));

    let decoded: LteRecordData = decode_record(&text).unwrap();
    assert_eq!(decoded.rsrp, Some(f32::NEG_INFINITY));
    assert_eq!(decoded.rsrq, Some(f32::INFINITY));
    assert!(decoded.snr.unwrap().is_nan());
}

#[test]
fn single_precision_values_keep_their_short_form() {
    let gsm = GsmRecordData {
        altitude: 13.3,
        signal_strength: Some(-73.0),
        ..Default::default()
    };
    let text = encode_record(&gsm);
    assert!(text.contains(r#""altitude":13.3"#));
    assert!(text.contains(r#""signalStrength":-73.0"#));

    let err = decode_record::<GsmRecordData>(r#"{"altitude":1e300}"#).unwrap_err();
    assert!(matches!(err, CodecError::NumberOutOfRange { .. }));
}

#[test]
fn pretty_output_is_equivalent() {
    let message = Message::new("0.7.0").with_data(BluetoothRecordData {
        technology: Some(Technology::Le),
        channel: Some(6),
        ..Default::default()
    });
    let codec = Codec::with_config(CodecConfig {
        pretty: true,
        ..Default::default()
    });
    let text = codec.encode_message(&message);
    assert!(text.contains("\n  \"version\": \"0.7.0\""));

    let decoded: Message<BluetoothRecordData> = decode_message(&text).unwrap();
    assert_eq!(encode_message(&decoded), encode_message(&message));
}
