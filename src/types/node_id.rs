// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `NodeId`.

use std::{
    cmp::Ordering,
    fmt,
    str::FromStr,
    sync::atomic::{AtomicU32, Ordering as AtomicOrdering},
};

use regex::Regex;

use crate::types::{byte_string::ByteString, encoding::*, guid::Guid, string::UAString};

/// The kind of identifier, numeric, string, guid or byte string
#[derive(Eq, PartialEq, Clone, Debug, Hash, Serialize, Deserialize)]
pub enum Identifier {
    Numeric(u32),
    String(UAString),
    Guid(Guid),
    ByteString(ByteString),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Identifier::Numeric(v) => write!(f, "i={}", *v),
            Identifier::String(v) => write!(f, "s={}", v),
            Identifier::Guid(v) => write!(f, "g={:?}", v),
            Identifier::ByteString(v) => write!(f, "b={}", v.as_base64()),
        }
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::String(a), Identifier::String(b)) => a.as_ref().cmp(b.as_ref()),
            (Identifier::Guid(a), Identifier::Guid(b)) => a.cmp(b),
            (Identifier::ByteString(a), Identifier::ByteString(b)) => a.as_ref().cmp(b.as_ref()),
            // Mixed kinds order numeric < string < guid < byte string
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Identifier {
    type Err = DecodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 2 {
            return Err(DecodingError::Malformed("identifier text is too short"));
        }
        let k = &s[..2];
        let v = &s[2..];
        match k {
            "i=" => v
                .parse::<u32>()
                .map(|v| v.into())
                .map_err(|_| DecodingError::Malformed("numeric identifier is not a valid u32")),
            "s=" => Ok(UAString::from(v).into()),
            "g=" => Guid::from_str(v).map(|v| v.into()),
            "b=" => ByteString::from_base64(v)
                .map(|v| v.into())
                .ok_or(DecodingError::Malformed(
                    "byte string identifier is not valid base64",
                )),
            _ => Err(DecodingError::Malformed(
                "identifier tag is not one of i, s, g or b",
            )),
        }
    }
}

impl From<i32> for Identifier {
    fn from(v: i32) -> Self {
        Identifier::Numeric(v as u32)
    }
}

impl From<u32> for Identifier {
    fn from(v: u32) -> Self {
        Identifier::Numeric(v)
    }
}

impl<'a> From<&'a str> for Identifier {
    fn from(v: &'a str) -> Self {
        Identifier::from(UAString::from(v))
    }
}

impl From<String> for Identifier {
    fn from(v: String) -> Self {
        Identifier::from(UAString::from(v))
    }
}

impl From<UAString> for Identifier {
    fn from(v: UAString) -> Self {
        Identifier::String(v)
    }
}

impl From<Guid> for Identifier {
    fn from(v: Guid) -> Self {
        Identifier::Guid(v)
    }
}

impl From<ByteString> for Identifier {
    fn from(v: ByteString) -> Self {
        Identifier::ByteString(v)
    }
}

impl Identifier {
    fn kind_rank(&self) -> u8 {
        match self {
            Identifier::Numeric(_) => 0,
            Identifier::String(_) => 1,
            Identifier::Guid(_) => 2,
            Identifier::ByteString(_) => 3,
        }
    }
}

/// An identifier for a node in the address space of an OPC UA Server. Immutable once built;
/// ordered by namespace, then identifier kind, then identifier value.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Debug, Hash, Serialize, Deserialize)]
pub struct NodeId {
    /// The index for a namespace
    pub namespace: u16,
    /// The identifier for the node in the address space
    pub identifier: Identifier,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.namespace != 0 {
            write!(f, "ns={};{}", self.namespace, self.identifier)
        } else {
            write!(f, "{}", self.identifier)
        }
    }
}

/// Returns the number of bytes the node id occupies on the wire for the given namespace and
/// identifier. Numeric identifiers take the most compact of three sub-formats depending on
/// the range of the namespace and value.
pub(crate) fn node_id_byte_len(namespace: u16, identifier: &Identifier) -> usize {
    match identifier {
        Identifier::Numeric(value) => {
            if namespace == 0 && *value <= 255 {
                2
            } else if namespace <= 255 && *value <= 65535 {
                4
            } else {
                7
            }
        }
        Identifier::String(value) => 3 + value.byte_len(),
        Identifier::Guid(value) => 3 + value.byte_len(),
        Identifier::ByteString(value) => 3 + value.byte_len(),
    }
}

/// Writes the tag byte and body for the given namespace and identifier. The low 6 bits of the
/// tag byte hold the sub-format, the top two bits are the caller's `flags` - 0x80 signals a
/// trailing namespace uri, 0x40 a trailing server index; both are only meaningful inside an
/// `ExpandedNodeId`.
pub(crate) fn write_node_id<'a>(
    buf: &'a mut [u8],
    namespace: u16,
    identifier: &Identifier,
    flags: u8,
) -> EncodingResult<'a> {
    match identifier {
        Identifier::Numeric(value) => {
            if namespace == 0 && *value <= 255 {
                // node id fits into 2 bytes when the namespace is 0 and the value <= 255
                let buf = write_u8(buf, flags)?;
                write_u8(buf, *value as u8)
            } else if namespace <= 255 && *value <= 65535 {
                // node id fits into 4 bytes when namespace <= 255 and value <= 65535
                let buf = write_u8(buf, flags | 0x1)?;
                let buf = write_u8(buf, namespace as u8)?;
                write_u16(buf, *value as u16)
            } else {
                // full node id
                let buf = write_u8(buf, flags | 0x2)?;
                let buf = write_u16(buf, namespace)?;
                write_u32(buf, *value)
            }
        }
        Identifier::String(value) => {
            let buf = write_u8(buf, flags | 0x3)?;
            let buf = write_u16(buf, namespace)?;
            value.encode(buf)
        }
        Identifier::Guid(value) => {
            let buf = write_u8(buf, flags | 0x4)?;
            let buf = write_u16(buf, namespace)?;
            value.encode(buf)
        }
        Identifier::ByteString(value) => {
            let buf = write_u8(buf, flags | 0x5)?;
            let buf = write_u16(buf, namespace)?;
            value.encode(buf)
        }
    }
}

/// Reads the body of a node id whose tag byte has already been read. Only the low 6 bits of the
/// tag participate; the flag bits are the caller's concern.
pub(crate) fn read_node_id_body(buf: &[u8], tag: u8) -> DecodingResult<'_, NodeId> {
    match tag & 0x3f {
        0x0 => {
            let (buf, value) = read_u8(buf)?;
            Ok((buf, NodeId::new(0, u32::from(value))))
        }
        0x1 => {
            let (buf, namespace) = read_u8(buf)?;
            let (buf, value) = read_u16(buf)?;
            Ok((buf, NodeId::new(u16::from(namespace), u32::from(value))))
        }
        0x2 => {
            let (buf, namespace) = read_u16(buf)?;
            let (buf, value) = read_u32(buf)?;
            Ok((buf, NodeId::new(namespace, value)))
        }
        0x3 => {
            let (buf, namespace) = read_u16(buf)?;
            let (buf, value) = UAString::decode(buf)?;
            Ok((buf, NodeId::new(namespace, value)))
        }
        0x4 => {
            let (buf, namespace) = read_u16(buf)?;
            let (buf, value) = Guid::decode(buf)?;
            Ok((buf, NodeId::new(namespace, value)))
        }
        0x5 => {
            let (buf, namespace) = read_u16(buf)?;
            let (buf, value) = ByteString::decode(buf)?;
            Ok((buf, NodeId::new(namespace, value)))
        }
        tag => {
            error!("Unrecognized node id type {}", tag);
            Err(DecodingError::Malformed("node id tag byte is unrecognized"))
        }
    }
}

impl BinaryEncoder for NodeId {
    fn byte_len(&self) -> usize {
        node_id_byte_len(self.namespace, &self.identifier)
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        let remaining = buf.len();
        let buf = write_node_id(buf, self.namespace, &self.identifier, 0x0)?;
        assert_eq!(remaining - buf.len(), self.byte_len());
        Ok(buf)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        let (buf, tag) = read_u8(buf)?;
        read_node_id_body(buf, tag)
    }
}

impl FromStr for NodeId {
    type Err = DecodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Parses a node from a string using the format specified in 5.3.1.10 part 6
        //
        // ns=<namespaceindex>;<type>=<value>
        //
        // Where type:
        //   i = NUMERIC
        //   s = STRING
        //   g = GUID
        //   b = OPAQUE (ByteString)
        //
        // If the namespace is 0, the ns=0; is omitted, and an explicit ns=0 is rejected

        lazy_static! {
            // Contains capture groups "ns" and "t" for namespace and type respectively
            static ref RE: Regex = Regex::new(r"^(ns=(?P<ns>[0-9]+);)?(?P<t>[isgb]=.+)$").unwrap();
        }

        let captures = RE.captures(s).ok_or(DecodingError::Malformed(
            "node id text is not ns=<idx>;<type>=<value>",
        ))?;

        // Check namespace (optional)
        let namespace = if let Some(ns) = captures.name("ns") {
            let namespace = ns.as_str().parse::<u16>().map_err(|_| {
                DecodingError::Malformed("node id namespace index is not in [1, 65535]")
            })?;
            if namespace == 0 {
                return Err(DecodingError::Malformed(
                    "node id namespace index is not in [1, 65535]",
                ));
            }
            namespace
        } else {
            0
        };

        // Type identifier
        let t = captures.name("t").unwrap();
        Identifier::from_str(t.as_str()).map(|t| NodeId::new(namespace, t))
    }
}

impl From<&NodeId> for NodeId {
    fn from(v: &NodeId) -> Self {
        v.clone()
    }
}

impl Into<String> for NodeId {
    fn into(self) -> String {
        self.to_string()
    }
}

impl<'a> From<(u16, &'a str)> for NodeId {
    fn from(v: (u16, &'a str)) -> Self {
        Self::new(v.0, UAString::from(v.1))
    }
}

impl From<(u16, UAString)> for NodeId {
    fn from(v: (u16, UAString)) -> Self {
        Self::new(v.0, v.1)
    }
}

impl From<(u16, u32)> for NodeId {
    fn from(v: (u16, u32)) -> Self {
        Self::new(v.0, v.1)
    }
}

impl From<(u16, Guid)> for NodeId {
    fn from(v: (u16, Guid)) -> Self {
        Self::new(v.0, v.1)
    }
}

impl From<(u16, ByteString)> for NodeId {
    fn from(v: (u16, ByteString)) -> Self {
        Self::new(v.0, v.1)
    }
}

static NEXT_NODE_ID_NUMERIC: AtomicU32 = AtomicU32::new(1);

impl Default for NodeId {
    fn default() -> Self {
        NodeId::null()
    }
}

impl NodeId {
    /// Constructs a new NodeId from anything that can be turned into Identifier
    /// u32, Guid, ByteString or String
    pub fn new<T>(namespace: u16, value: T) -> NodeId
    where
        T: 'static + Into<Identifier>,
    {
        NodeId {
            namespace,
            identifier: value.into(),
        }
    }

    /// Test if the node id is null, i.e. 0 namespace and 0 identifier
    pub fn is_null(&self) -> bool {
        self.namespace == 0 && self.identifier == Identifier::Numeric(0)
    }

    /// Returns a null node id
    pub fn null() -> NodeId {
        NodeId::new(0, 0u32)
    }

    /// Creates a numeric node id from an incrementing counter
    pub fn next_numeric(namespace: u16) -> NodeId {
        NodeId::new(
            namespace,
            NEXT_NODE_ID_NUMERIC.fetch_add(1, AtomicOrdering::SeqCst),
        )
    }

    /// Test if the node id is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self.identifier, Identifier::Numeric(_))
    }

    /// Test if the node id is a string
    pub fn is_string(&self) -> bool {
        matches!(self.identifier, Identifier::String(_))
    }

    /// Test if the node id is a guid
    pub fn is_guid(&self) -> bool {
        matches!(self.identifier, Identifier::Guid(_))
    }

    /// Test if the node id is a byte string
    pub fn is_byte_string(&self) -> bool {
        matches!(self.identifier, Identifier::ByteString(_))
    }
}
