use std::str::FromStr;

use crate::types::tests::*;

#[test]
fn encoding_bool() {
    serialize_test(true);
    serialize_test(false);
    serialize_and_compare(true, &[0x01]);
    serialize_and_compare(false, &[0x00]);
}

#[test]
fn decoding_bool_noncanonical() {
    // Any non-zero byte decodes as true even though the encoder only emits 1
    let (remainder, value) = bool::decode(&[0x02]).unwrap();
    assert!(remainder.is_empty());
    assert!(value);
    let (_, value) = bool::decode(&[0xff]).unwrap();
    assert!(value);
}

#[test]
fn encoding_sbyte() {
    serialize_test(0i8);
    serialize_test(100i8);
    serialize_test(-90i8);
}

#[test]
fn encoding_byte() {
    serialize_test(0u8);
    serialize_test(255u8);
    serialize_test(90u8);
}

#[test]
fn encoding_int16() {
    serialize_test(0i16);
    serialize_test(-17000i16);
    serialize_test(32000i16);
}

#[test]
fn encoding_uint16() {
    serialize_test(0u16);
    serialize_test(57000u16);
    serialize_test(32000u16);
}

#[test]
fn encoding_int32() {
    serialize_test(0i32);
    serialize_test(-17444000i32);
    serialize_test(32004440i32);
}

#[test]
fn encoding_uint32() {
    serialize_test(0u32);
    serialize_test(57055500u32);
    serialize_test(32555000u32);
}

#[test]
fn encoding_int64() {
    serialize_test(0i64);
    serialize_test(-17442224000i64);
    serialize_test(32022204440i64);
}

#[test]
fn encoding_uint64() {
    serialize_test(0u64);
    serialize_test(57054445500u64);
    serialize_test(34442555000u64);
}

#[test]
fn encoding_f32() {
    serialize_test(0f32);
    serialize_test(12.4342f32);
    serialize_test(5686.222f32);
}

#[test]
fn encoding_f64() {
    serialize_test(0f64);
    serialize_test(12.43424324234f64);
    serialize_test(5686.222342342f64);
}

#[test]
fn encoding_multibyte_values_are_little_endian() {
    serialize_and_compare(0x0102_0304u32, &[0x04, 0x03, 0x02, 0x01]);
    serialize_and_compare(-2i32, &[0xfe, 0xff, 0xff, 0xff]);
    serialize_and_compare(0x01020304_05060708u64, &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
}

#[test]
fn encoding_consumes_only_its_own_bytes() {
    // Encode leaves the unwritten remainder, decode leaves the unread remainder
    let mut buffer = [0u8; 5];
    let remainder = 0xabcdu16.encode(&mut buffer).unwrap();
    assert_eq!(remainder.len(), 3);
    let (remainder, value) = u16::decode(&buffer).unwrap();
    assert_eq!(value, 0xabcd);
    assert_eq!(remainder.len(), 3);
}

#[test]
fn encoding_string() {
    // Null
    serialize_test(UAString::null());
    // UTF-8 strings
    serialize_test(UAString::from(""));
    serialize_test(UAString::from("ショッピング"));
    serialize_test(UAString::from("This is a test"));
}

#[test]
fn encode_string_part_6_5224() {
    // Sample from OPCUA Part 6 - 5.2.2.4
    let expected = [0x06, 0x00, 0x00, 0x00, 0xE6, 0xB0, 0xB4, 0x42, 0x6F, 0x79];
    let input = UAString::from("水Boy");
    serialize_and_compare(input, &expected);
}

#[test]
fn encoding_string_null_and_empty_are_distinct() {
    serialize_and_compare(UAString::null(), &[0xff, 0xff, 0xff, 0xff]);
    serialize_and_compare(UAString::from(""), &[0x00, 0x00, 0x00, 0x00]);

    let (_, value) = UAString::decode(&[0xff, 0xff, 0xff, 0xff]).unwrap();
    assert!(value.is_null());
    let (_, value) = UAString::decode(&[0x00, 0x00, 0x00, 0x00]).unwrap();
    assert!(!value.is_null());
    assert!(value.is_empty());
}

#[test]
fn decode_string_malformed_utf8() {
    // Bytes below are a mangled 水Boy, missing a byte
    let bytes = [0x05, 0x00, 0x00, 0x00, 0xE6, 0xB0, 0x42, 0x6F, 0x79];
    assert_eq!(
        UAString::decode(&bytes).unwrap_err(),
        DecodingError::Malformed("string is not valid UTF-8")
    );
}

#[test]
fn decode_string_length_overruns_buffer() {
    // The declared length exceeds the remaining bytes, which is malformed rather than truncated
    let bytes = [0x06, 0x00, 0x00, 0x00, 0x41, 0x42];
    assert!(matches!(
        UAString::decode(&bytes).unwrap_err(),
        DecodingError::Malformed(_)
    ));
}

#[test]
fn decode_string_truncated_length_prefix() {
    let bytes = [0x06, 0x00];
    assert!(matches!(
        UAString::decode(&bytes).unwrap_err(),
        DecodingError::Truncated { .. }
    ));
}

#[test]
fn decode_string_negative_length() {
    let bytes = [0xfe, 0xff, 0xff, 0xff];
    assert!(matches!(
        UAString::decode(&bytes).unwrap_err(),
        DecodingError::Malformed(_)
    ));
}

#[test]
fn encoding_byte_string() {
    serialize_test(ByteString::null());
    serialize_test(ByteString::from(&[]));
    serialize_test(ByteString::from(b"this is a byte string"));
    serialize_and_compare(ByteString::null(), &[0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn decode_byte_string_length_overruns_buffer() {
    let bytes = [0x09, 0x00, 0x00, 0x00, 0x01, 0x02];
    assert!(matches!(
        ByteString::decode(&bytes).unwrap_err(),
        DecodingError::Malformed(_)
    ));
}

#[test]
fn encoding_datetime() {
    let now = DateTime::now();
    serialize_test(now);

    let date = DateTime::ymd_hms(2020, 5, 10, 12, 30, 30);
    serialize_test(date);

    // The epoch encodes as the 0 tick null time
    serialize_and_compare(DateTime::epoch(), &[0u8; 8]);

    // A date below Jan 1 1601 encodes as the null time and decodes as the epoch
    let before_epoch = DateTime::ymd_hms(1599, 1, 1, 0, 0, 0);
    serialize_test_expected(before_epoch, DateTime::epoch());

    // Dates at and after Dec 31 9999 23:59:59 also encode as the null time
    let after_endtimes = DateTime::ymd_hms(10000, 1, 1, 0, 0, 0);
    serialize_and_compare(after_endtimes, &[0u8; 8]);
    serialize_test_expected(after_endtimes, DateTime::epoch());
    serialize_test_expected(DateTime::endtimes(), DateTime::epoch());
}

#[test]
fn encoding_guid() {
    let guid = Guid::from_str("F0001234-FACE-BEEF-0102-030405060708").unwrap();
    assert_eq!(
        "f0001234-face-beef-0102-030405060708",
        format!("{:?}", guid)
    );
    let new_guid = serialize_test_and_return(guid.clone());
    assert_eq!(
        "f0001234-face-beef-0102-030405060708",
        format!("{:?}", new_guid)
    );
    serialize_test(guid);
}

#[test]
fn encode_guid_5226() {
    // Sample from OPCUA Part 6 - 5.2.2.6. The first three fields are written in little-endian
    // byte order, the last 8 bytes verbatim.
    let expected_bytes = [
        0x91, 0x2B, 0x96, 0x72, 0x75, 0xFA, 0xE6, 0x4A, 0x8D, 0x28, 0xB4, 0x04, 0xDC, 0x7D, 0xAF,
        0x63,
    ];
    let guid = Guid::from_str("72962B91-FA75-4AE6-8D28-B404DC7DAF63").unwrap();
    serialize_and_compare(guid, &expected_bytes);
}

#[test]
fn encoding_status_code() {
    serialize_test(StatusCode::Good);
    serialize_test(StatusCode::BadDecodingError);
    serialize_and_compare(StatusCode::BadUnexpectedError, &[0x00, 0x00, 0x01, 0x80]);
}

#[test]
fn node_id_2byte_numeric() {
    // Sample from OPCUA Part 6 - 5.2.2.9
    let node_id = NodeId::new(0, 0x72u32);
    let expected_bytes = [0x0, 0x72];
    serialize_and_compare(node_id.clone(), &expected_bytes);

    serialize_test(node_id);
}

#[test]
fn node_id_4byte_numeric() {
    // Sample from OPCUA Part 6 - 5.2.2.9
    let node_id = NodeId::new(5, 1025u32);
    assert!(node_id.is_numeric());
    let expected_bytes = [0x1, 0x5, 0x1, 0x4];
    serialize_and_compare(node_id.clone(), &expected_bytes);

    serialize_test(node_id);
}

#[test]
fn node_id_large_namespace() {
    let node_id = NodeId::new(0x100, 1u32);
    assert!(node_id.is_numeric());

    let expected_bytes = [0x2, 0x0, 0x1, 0x1, 0x0, 0x0, 0x0];
    serialize_and_compare(node_id.clone(), &expected_bytes);

    serialize_test(node_id);
}

#[test]
fn node_id_large_id() {
    let node_id = NodeId::new(1, 0xdeadbeefu32);
    assert!(node_id.is_numeric());

    let expected_bytes = [0x2, 0x1, 0x0, 0xef, 0xbe, 0xad, 0xde];
    serialize_and_compare(node_id.clone(), &expected_bytes);

    serialize_test(node_id);
}

#[test]
fn node_id_string_part_6_5229() {
    // Sample from OPCUA Part 6 - 5.2.2.9
    let node_id = NodeId::new(1, "Hot水");
    assert!(node_id.is_string());
    let expected_bytes = [
        0x03, 0x1, 0x0, 0x6, 0x0, 0x0, 0x0, 0x48, 0x6F, 0x74, 0xE6, 0xB0, 0xB4,
    ];
    serialize_and_compare(node_id.clone(), &expected_bytes);

    serialize_test(node_id);
}

#[test]
fn node_id_guid() {
    let guid = Guid::from_str("72962B91-FA75-4AE6-8D28-B404DC7DAF63").unwrap();
    let node_id = NodeId::new(1, guid);
    assert!(node_id.is_guid());
    serialize_test(node_id);
}

#[test]
fn node_id_byte_string() {
    let node_id = NodeId::new(30, ByteString::from(b"this is a byte string"));
    assert!(node_id.is_byte_string());
    serialize_test(node_id);
}

#[test]
fn node_id_size_parity() {
    // byte_len must agree with the bytes encode actually produces for every sub-format
    let node_ids = [
        NodeId::new(0, 0x72u32),
        NodeId::new(5, 1025u32),
        NodeId::new(5, 0x10000u32),
        NodeId::new(0x100, 1u32),
        NodeId::new(2, "MyTemperature"),
        NodeId::new(2, Guid::new()),
        NodeId::new(2, ByteString::from(b"opaque")),
    ];
    for node_id in &node_ids {
        let bytes = serialize_as_bytes(node_id);
        assert_eq!(node_id.byte_len(), bytes.len());
    }
}

#[test]
fn node_id_unknown_type() {
    let bytes = [0x6, 0x0, 0x0];
    assert!(matches!(
        NodeId::decode(&bytes).unwrap_err(),
        DecodingError::Malformed(_)
    ));
}

#[test]
fn expanded_node_id() {
    serialize_test(ExpandedNodeId::new(NodeId::new(200, 2000u32)));

    // Server index present iff non-zero
    let expanded = ExpandedNodeId {
        node_id: NodeId::new(2, 0x72u32),
        namespace_uri: UAString::null(),
        server_index: 5,
    };
    serialize_and_compare(
        expanded.clone(),
        &[0x41, 0x02, 0x72, 0x00, 0x05, 0x00, 0x00, 0x00],
    );
    serialize_test(expanded);
}

#[test]
fn expanded_node_id_namespace_uri_zeroes_index() {
    // When the namespace uri is present it supersedes the index, which goes onto the wire as 0.
    // That makes the two byte numeric form eligible here, flagged with the trailing uri bit.
    let expanded = ExpandedNodeId {
        node_id: NodeId::new(2, 0x72u32),
        namespace_uri: UAString::from("urn:foo"),
        server_index: 0,
    };
    let expected_bytes = [
        0x80, 0x72, 0x07, 0x00, 0x00, 0x00, b'u', b'r', b'n', b':', b'f', b'o', b'o',
    ];
    serialize_and_compare(expanded.clone(), &expected_bytes);

    let expected = ExpandedNodeId {
        node_id: NodeId::new(0, 0x72u32),
        namespace_uri: UAString::from("urn:foo"),
        server_index: 0,
    };
    serialize_test_expected(expanded, expected);
}

#[test]
fn expanded_node_id_empty_namespace_uri_is_absent() {
    let expanded = ExpandedNodeId {
        node_id: NodeId::new(2, 0x72u32),
        namespace_uri: UAString::from(""),
        server_index: 0,
    };
    // An empty uri is not present on the wire, so the namespace index survives
    let expected = ExpandedNodeId {
        node_id: NodeId::new(2, 0x72u32),
        namespace_uri: UAString::null(),
        server_index: 0,
    };
    serialize_and_compare(expanded.clone(), &[0x01, 0x02, 0x72, 0x00]);
    serialize_test_expected(expanded, expected);
}

#[test]
fn encoding_qualified_name() {
    serialize_test(QualifiedName::null());
    serialize_test(QualifiedName::new(2, "MyTemperature"));
    serialize_and_compare(
        QualifiedName::new(1, "AB"),
        &[0x01, 0x00, 0x02, 0x00, 0x00, 0x00, 0x41, 0x42],
    );
}

#[test]
fn encoding_localized_text() {
    // Both fields
    serialize_test(LocalizedText::new("en-US", "hello"));
    // Neither field - just the mask byte
    serialize_and_compare(LocalizedText::null(), &[0x00]);

    // Text only
    let text_only = LocalizedText::new("", "hello");
    serialize_and_compare(
        text_only.clone(),
        &[0x02, 0x05, 0x00, 0x00, 0x00, b'h', b'e', b'l', b'l', b'o'],
    );
    // An empty locale is absent from the wire so it comes back as null
    let expected = LocalizedText {
        locale: UAString::null(),
        text: UAString::from("hello"),
    };
    serialize_test_expected(text_only, expected);

    // Locale only
    let locale_only = LocalizedText {
        locale: UAString::from("en"),
        text: UAString::null(),
    };
    serialize_and_compare(locale_only.clone(), &[0x01, 0x02, 0x00, 0x00, 0x00, b'e', b'n']);
    serialize_test(locale_only);
}

#[test]
fn diagnostic_info_mask() {
    // Symbolic id and namespace present, everything else absent
    let diagnostic_info = DiagnosticInfo {
        symbolic_id: Some(3),
        namespace_uri: Some(12),
        ..DiagnosticInfo::null()
    };
    assert_eq!(diagnostic_info.byte_len(), 9);
    let expected_bytes = [
        0x03, 0x03, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00,
    ];
    serialize_and_compare(diagnostic_info.clone(), &expected_bytes);
    serialize_test(diagnostic_info);
}

#[test]
fn diagnostic_info_all_fields() {
    let diagnostic_info = DiagnosticInfo {
        symbolic_id: Some(1),
        namespace_uri: Some(2),
        locale: Some(3),
        localized_text: Some(4),
        additional_info: Some(UAString::from("a dog ate my packet")),
        inner_status_code: Some(StatusCode::BadDecodingError),
        inner_diagnostic_info: None,
    };
    assert_eq!(diagnostic_info.encoding_mask().bits(), 0x3f);
    serialize_test(diagnostic_info);
}

#[test]
fn diagnostic_info_nested() {
    // Each level of the chain carries its own mask derived from its own fields
    let diagnostic_info = DiagnosticInfo {
        symbolic_id: Some(1),
        inner_diagnostic_info: Some(Box::new(DiagnosticInfo {
            additional_info: Some(UAString::from("inner")),
            ..DiagnosticInfo::null()
        })),
        ..DiagnosticInfo::null()
    };
    let expected_bytes = [
        0x41, 0x01, 0x00, 0x00, 0x00, 0x10, 0x05, 0x00, 0x00, 0x00, b'i', b'n', b'n', b'e', b'r',
    ];
    serialize_and_compare(diagnostic_info.clone(), &expected_bytes);
    serialize_test(diagnostic_info);
}

#[test]
fn diagnostic_info_deep_chain() {
    let mut diagnostic_info = DiagnosticInfo {
        symbolic_id: Some(0),
        ..DiagnosticInfo::null()
    };
    for i in 1..10 {
        diagnostic_info = DiagnosticInfo {
            symbolic_id: Some(i),
            inner_diagnostic_info: Some(Box::new(diagnostic_info)),
            ..DiagnosticInfo::null()
        };
    }
    serialize_test(diagnostic_info);
}

#[test]
fn encoding_capacity_failures() {
    ensure_capacity_error(&true);
    ensure_capacity_error(&0x12345678u32);
    ensure_capacity_error(&UAString::from("water"));
    ensure_capacity_error(&ByteString::from(b"water"));
    ensure_capacity_error(&Guid::new());
    ensure_capacity_error(&DateTime::now());
    ensure_capacity_error(&NodeId::new(2, "MyTemperature"));
    ensure_capacity_error(&ExpandedNodeId {
        node_id: NodeId::new(2, 0x72u32),
        namespace_uri: UAString::from("urn:foo"),
        server_index: 5,
    });
    ensure_capacity_error(&QualifiedName::new(2, "MyTemperature"));
    ensure_capacity_error(&LocalizedText::new("en", "hello"));
    ensure_capacity_error(&DiagnosticInfo {
        symbolic_id: Some(3),
        namespace_uri: Some(12),
        ..DiagnosticInfo::null()
    });
}

#[test]
fn decoding_truncation_failures() {
    ensure_decode_fails_truncated(&0x12345678u32);
    ensure_decode_fails_truncated(&UAString::from("water"));
    ensure_decode_fails_truncated(&Guid::new());
    ensure_decode_fails_truncated(&NodeId::new(2, "MyTemperature"));
    ensure_decode_fails_truncated(&QualifiedName::new(2, "MyTemperature"));
    ensure_decode_fails_truncated(&LocalizedText::new("en", "hello"));
    ensure_decode_fails_truncated(&DiagnosticInfo {
        symbolic_id: Some(3),
        inner_status_code: Some(StatusCode::BadTimeout),
        ..DiagnosticInfo::null()
    });
}
