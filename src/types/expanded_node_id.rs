// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `ExpandedNodeId`.

use std::fmt;

use crate::types::{
    encoding::*,
    node_id::{node_id_byte_len, read_node_id_body, write_node_id, NodeId},
    string::UAString,
};

/// A NodeId that allows the namespace URI to be specified instead of an index. When a namespace
/// uri is present the uri is authoritative and the namespace index goes onto the wire as 0; a
/// server index of 0 means local and is omitted from the wire.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ExpandedNodeId {
    pub node_id: NodeId,
    pub namespace_uri: UAString,
    pub server_index: u32,
}

impl BinaryEncoder for ExpandedNodeId {
    fn byte_len(&self) -> usize {
        let mut size = node_id_byte_len(self.wire_namespace(), &self.node_id.identifier);
        if self.has_namespace_uri() {
            size += self.namespace_uri.byte_len();
        }
        if self.server_index != 0 {
            size += self.server_index.byte_len();
        }
        size
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        let mut data_encoding = 0u8;
        if self.has_namespace_uri() {
            data_encoding |= 0x80;
        }
        if self.server_index != 0 {
            data_encoding |= 0x40;
        }

        let remaining = buf.len();
        let mut buf = write_node_id(
            buf,
            self.wire_namespace(),
            &self.node_id.identifier,
            data_encoding,
        )?;
        if self.has_namespace_uri() {
            buf = self.namespace_uri.encode(buf)?;
        }
        if self.server_index != 0 {
            buf = self.server_index.encode(buf)?;
        }
        assert_eq!(remaining - buf.len(), self.byte_len());
        Ok(buf)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        let (buf, data_encoding) = read_u8(buf)?;
        let (buf, node_id) = read_node_id_body(buf, data_encoding)?;

        // Optional trailing fields signalled by the flag bits
        let (buf, namespace_uri) = if data_encoding & 0x80 != 0 {
            UAString::decode(buf)?
        } else {
            (buf, UAString::null())
        };
        let (buf, server_index) = if data_encoding & 0x40 != 0 {
            u32::decode(buf)?
        } else {
            (buf, 0)
        };

        Ok((
            buf,
            ExpandedNodeId {
                node_id,
                namespace_uri,
                server_index,
            },
        ))
    }
}

impl<'a> Into<ExpandedNodeId> for &'a NodeId {
    fn into(self) -> ExpandedNodeId {
        self.clone().into()
    }
}

impl From<NodeId> for ExpandedNodeId {
    fn from(v: NodeId) -> Self {
        ExpandedNodeId {
            node_id: v,
            namespace_uri: UAString::null(),
            server_index: 0,
        }
    }
}

impl fmt::Display for ExpandedNodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Formatted depending on the namespace uri being empty or not.
        if self.namespace_uri.is_empty() {
            // svr=<serverindex>;ns=<namespaceindex>;<type>=<value>
            write!(f, "svr={};{}", self.server_index, self.node_id)
        } else {
            // The % and ; chars have to be escaped out in the uri
            let namespace_uri = String::from(self.namespace_uri.as_ref())
                .replace('%', "%25")
                .replace(';', "%3b");
            // svr=<serverindex>;nsu=<uri>;<type>=<value>
            write!(
                f,
                "svr={};nsu={};{}",
                self.server_index, namespace_uri, self.node_id.identifier
            )
        }
    }
}

impl ExpandedNodeId {
    /// Creates an expanded node id from a node id
    pub fn new<T>(value: T) -> ExpandedNodeId
    where
        T: 'static + Into<ExpandedNodeId>,
    {
        value.into()
    }

    pub fn null() -> ExpandedNodeId {
        Self::new(NodeId::null())
    }

    pub fn is_null(&self) -> bool {
        self.node_id.is_null()
    }

    /// The namespace uri is present on the wire only when it is neither null nor empty
    fn has_namespace_uri(&self) -> bool {
        !self.namespace_uri.is_empty()
    }

    /// The namespace index as encoded - forced to 0 when the uri supersedes it
    fn wire_namespace(&self) -> u16 {
        if self.has_namespace_uri() {
            0
        } else {
            self.node_id.namespace
        }
    }
}
