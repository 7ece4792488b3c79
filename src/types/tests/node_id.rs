use std::str::FromStr;

use crate::types::*;

#[test]
fn node_id_is_null() {
    assert!(NodeId::null().is_null());
    assert!(NodeId::new(0, 0u32).is_null());
    assert!(!NodeId::new(1, 0u32).is_null());
    assert!(!NodeId::new(0, 1u32).is_null());
    assert!(!NodeId::new(0, "").is_null());
}

#[test]
fn node_id_to_string() {
    assert_eq!(
        NodeId::new(2, "MyTemperature").to_string(),
        "ns=2;s=MyTemperature"
    );
    // The ns= prefix is omitted entirely for namespace 0
    assert_eq!(NodeId::new(0, 2045u32).to_string(), "i=2045");
    assert_eq!(NodeId::new(1, 5001u32).to_string(), "ns=1;i=5001");

    let guid = Guid::from_str("72962b91-fa75-4ae6-8d28-b404dc7daf63").unwrap();
    assert_eq!(
        NodeId::new(2, guid).to_string(),
        "ns=2;g=72962b91-fa75-4ae6-8d28-b404dc7daf63"
    );
}

#[test]
fn node_id_from_str() {
    assert_eq!(
        NodeId::from_str("i=5001").unwrap(),
        NodeId::new(0, 5001u32)
    );
    assert_eq!(
        NodeId::from_str("ns=2;s=MyTemperature").unwrap(),
        NodeId::new(2, "MyTemperature")
    );
    assert_eq!(
        NodeId::from_str("ns=65535;i=1").unwrap(),
        NodeId::new(65535, 1u32)
    );

    let guid = Guid::from_str("72962b91-fa75-4ae6-8d28-b404dc7daf63").unwrap();
    assert_eq!(
        NodeId::from_str("ns=2;g=72962b91-fa75-4ae6-8d28-b404dc7daf63").unwrap(),
        NodeId::new(2, guid)
    );

    let byte_string = ByteString::from(b"hello world");
    let s = format!("ns=2;b={}", byte_string.as_base64());
    assert_eq!(NodeId::from_str(&s).unwrap(), NodeId::new(2, byte_string));
}

#[test]
fn node_id_string_round_trip() {
    let node_ids = [
        NodeId::new(0, 42u32),
        NodeId::new(2, 0xdeadbeefu32),
        NodeId::new(2, "MyTemperature"),
        NodeId::new(255, Guid::new()),
        NodeId::new(30, ByteString::from(b"opaque")),
    ];
    for node_id in &node_ids {
        assert_eq!(&NodeId::from_str(&node_id.to_string()).unwrap(), node_id);
    }
}

#[test]
fn node_id_from_str_errors() {
    // Non-numeric namespace
    assert!(NodeId::from_str("ns=NotNumeric;s=121212").is_err());
    // Explicit ns=0 is invalid, the prefix must be omitted instead
    assert!(NodeId::from_str("ns=0;i=1").is_err());
    // Namespace out of range
    assert!(NodeId::from_str("ns=65536;i=1").is_err());
    // Missing the ; separator
    assert!(NodeId::from_str("ns=2").is_err());
    assert!(NodeId::from_str("ns=2i=5").is_err());
    // Unknown identifier tag
    assert!(NodeId::from_str("ns=2;x=abc").is_err());
    // Payload fails to parse as its target type
    assert!(NodeId::from_str("i=NotNumeric").is_err());
    assert!(NodeId::from_str("i=4294967296").is_err());
    assert!(NodeId::from_str("g=not-a-guid").is_err());
    assert!(NodeId::from_str("b=!not base64!").is_err());
    // Empty / garbage
    assert!(NodeId::from_str("").is_err());
    assert!(NodeId::from_str("hello world").is_err());
}

#[test]
fn node_id_from_str_malformed_kind() {
    assert!(matches!(
        NodeId::from_str("ns=NotNumeric;s=121212").unwrap_err(),
        DecodingError::Malformed(_)
    ));
}

#[test]
fn node_id_ordering() {
    // Namespace compares first
    assert!(NodeId::new(3, 4224u32) < NodeId::new(12, 4224u32));
    // Then the identifier kind, numeric < string < guid < byte string
    assert!(NodeId::new(12, 4224u32) < NodeId::new(12, "MyTemperature"));
    assert!(NodeId::new(12, "MyTemperature") < NodeId::new(12, Guid::null()));
    assert!(NodeId::new(12, Guid::null()) < NodeId::new(12, ByteString::from(b"a")));
    // Then the value
    assert!(NodeId::new(12, 42u32) < NodeId::new(12, 4224u32));
    assert!(NodeId::new(12, "AAA") < NodeId::new(12, "AAB"));
    assert!(NodeId::new(12, ByteString::from(b"a")) < NodeId::new(12, ByteString::from(b"ab")));

    let node_id = NodeId::new(1, "same");
    assert_eq!(node_id.cmp(&node_id.clone()), std::cmp::Ordering::Equal);
}

#[test]
fn node_id_next_numeric() {
    let a = NodeId::next_numeric(2);
    let b = NodeId::next_numeric(2);
    assert!(a.is_numeric());
    assert_ne!(a, b);
}
