// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Defines the value types of the protocol and the binary codec that reads and writes them.

pub use self::{
    byte_string::ByteString,
    date_time::{DateTime, DateTimeUtc},
    diagnostic_info::{DiagnosticInfo, DiagnosticInfoMask},
    encoding::{
        BinaryEncoder, DecodingError, DecodingResult, EncodingError, EncodingResult,
    },
    expanded_node_id::ExpandedNodeId,
    guid::Guid,
    localized_text::LocalizedText,
    node_id::{Identifier, NodeId},
    qualified_name::QualifiedName,
    status_code::StatusCode,
    string::UAString,
};

pub mod basic_types;
pub mod byte_string;
pub mod date_time;
pub mod diagnostic_info;
pub mod encoding;
pub mod expanded_node_id;
pub mod guid;
pub mod localized_text;
pub mod node_id;
pub mod qualified_name;
pub mod status_code;
pub mod string;

#[cfg(test)]
mod tests;
