use std::str::FromStr;

use serde_json::json;

use crate::types::*;

fn serde_round_trip<T>(value: T)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let s = serde_json::to_string(&value).unwrap();
    println!("json = {}", s);
    let new_value = serde_json::from_str::<T>(&s).unwrap();
    assert_eq!(value, new_value);
}

#[test]
fn serde_string() {
    serde_round_trip(UAString::null());
    serde_round_trip(UAString::from(""));
    serde_round_trip(UAString::from("Mary had a little lamb"));
}

#[test]
fn serde_byte_string() {
    serde_round_trip(ByteString::null());
    serde_round_trip(ByteString::from(b"hello world"));

    // Byte strings serialize as base64 text
    let v = serde_json::to_value(ByteString::from(b"hello world")).unwrap();
    assert_eq!(v, json!("aGVsbG8gd29ybGQ="));
}

#[test]
fn serde_guid() {
    serde_round_trip(Guid::null());
    serde_round_trip(Guid::new());

    // Guids serialize as hyphenated text
    let guid = Guid::from_str("72962b91-fa75-4ae6-8d28-b404dc7daf63").unwrap();
    let v = serde_json::to_value(guid).unwrap();
    assert_eq!(v, json!("72962b91-fa75-4ae6-8d28-b404dc7daf63"));
}

#[test]
fn serde_date_time() {
    serde_round_trip(DateTime::epoch());
    serde_round_trip(DateTime::ymd_hms(2020, 5, 10, 12, 30, 30));

    // Date times serialize as their tick count
    let date_time = DateTime::ymd_hms_nano(1601, 1, 1, 0, 0, 0, 100);
    let v = serde_json::to_value(date_time).unwrap();
    assert_eq!(v, json!(1));
}

#[test]
fn serde_status_code() {
    serde_round_trip(StatusCode::Good);
    serde_round_trip(StatusCode::BadDecodingError);

    let v = serde_json::to_value(StatusCode::BadUnexpectedError).unwrap();
    assert_eq!(v, json!(0x8001_0000u32));
}

#[test]
fn serde_node_id() {
    serde_round_trip(NodeId::new(0, 42u32));
    serde_round_trip(NodeId::new(2, "MyTemperature"));
    serde_round_trip(NodeId::new(2, Guid::new()));
    serde_round_trip(NodeId::new(30, ByteString::from(b"opaque")));
}

#[test]
fn serde_expanded_node_id() {
    serde_round_trip(ExpandedNodeId::new(NodeId::new(2, 1025u32)));
    serde_round_trip(ExpandedNodeId {
        node_id: NodeId::new(2, 1025u32),
        namespace_uri: UAString::from("urn:foo"),
        server_index: 5,
    });
}

#[test]
fn serde_qualified_name() {
    serde_round_trip(QualifiedName::null());
    serde_round_trip(QualifiedName::new(2, "MyTemperature"));
}

#[test]
fn serde_localized_text() {
    serde_round_trip(LocalizedText::null());
    serde_round_trip(LocalizedText::new("en-US", "hello"));
}

#[test]
fn serde_diagnostic_info() {
    serde_round_trip(DiagnosticInfo::null());
    serde_round_trip(DiagnosticInfo {
        symbolic_id: Some(3),
        namespace_uri: Some(12),
        additional_info: Some(UAString::from("info")),
        inner_status_code: Some(StatusCode::BadTimeout),
        inner_diagnostic_info: Some(Box::new(DiagnosticInfo {
            symbolic_id: Some(4),
            ..DiagnosticInfo::null()
        })),
        ..DiagnosticInfo::null()
    });
}
