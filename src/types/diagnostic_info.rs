// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `DiagnosticInfo`.

use crate::types::{encoding::*, status_code::StatusCode, string::UAString};

bitflags! {
    /// Presence bits for the optional fields of a `DiagnosticInfo`. The mask is derived from
    /// which fields are populated; a requested inner record that turns out to be absent simply
    /// never sets its bit.
    pub struct DiagnosticInfoMask: u8 {
        const HAS_SYMBOLIC_ID = 0x01;
        const HAS_NAMESPACE = 0x02;
        const HAS_LOCALIZED_TEXT = 0x04;
        const HAS_LOCALE = 0x08;
        const HAS_ADDITIONAL_INFO = 0x10;
        const HAS_INNER_STATUS_CODE = 0x20;
        const HAS_INNER_DIAGNOSTIC_INFO = 0x40;
    }
}

/// Diagnostic information attached to a status code. Every field is optional. The inner
/// diagnostic info forms an exclusively owned chain - each record holds at most one nested
/// record and the chain ends at the first absent one.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticInfo {
    /// A symbolic name for the status code.
    pub symbolic_id: Option<i32>,
    /// A namespace that qualifies the symbolic id.
    pub namespace_uri: Option<i32>,
    /// The locale used for the localized text.
    pub locale: Option<i32>,
    /// A human readable summary of the status code.
    pub localized_text: Option<i32>,
    /// Detailed application specific diagnostic information.
    pub additional_info: Option<UAString>,
    /// A status code provided by an underlying system.
    pub inner_status_code: Option<StatusCode>,
    /// Diagnostic info associated with the inner status code.
    pub inner_diagnostic_info: Option<Box<DiagnosticInfo>>,
}

impl BinaryEncoder for DiagnosticInfo {
    fn byte_len(&self) -> usize {
        let mut size: usize = 1;
        if let Some(ref symbolic_id) = self.symbolic_id {
            size += symbolic_id.byte_len();
        }
        if let Some(ref namespace_uri) = self.namespace_uri {
            size += namespace_uri.byte_len();
        }
        if let Some(ref locale) = self.locale {
            size += locale.byte_len();
        }
        if let Some(ref localized_text) = self.localized_text {
            size += localized_text.byte_len();
        }
        if let Some(ref additional_info) = self.additional_info {
            size += additional_info.byte_len();
        }
        if let Some(ref inner_status_code) = self.inner_status_code {
            size += inner_status_code.byte_len();
        }
        if let Some(ref inner_diagnostic_info) = self.inner_diagnostic_info {
            size += inner_diagnostic_info.byte_len();
        }
        size
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        let mut buf = write_u8(buf, self.encoding_mask().bits())?;
        if let Some(ref symbolic_id) = self.symbolic_id {
            // Write symbolic id
            buf = write_i32(buf, *symbolic_id)?;
        }
        if let Some(ref namespace_uri) = self.namespace_uri {
            // Write namespace
            buf = namespace_uri.encode(buf)?;
        }
        if let Some(ref locale) = self.locale {
            // Write locale
            buf = locale.encode(buf)?;
        }
        if let Some(ref localized_text) = self.localized_text {
            // Write localized text
            buf = localized_text.encode(buf)?;
        }
        if let Some(ref additional_info) = self.additional_info {
            // Write additional info
            buf = additional_info.encode(buf)?;
        }
        if let Some(ref inner_status_code) = self.inner_status_code {
            // Write inner status code
            buf = inner_status_code.encode(buf)?;
        }
        if let Some(ref inner_diagnostic_info) = self.inner_diagnostic_info {
            // Encode the nested record with its own fields and mask
            buf = inner_diagnostic_info.encode(buf)?;
        }
        Ok(buf)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        let (mut buf, mask) = read_u8(buf)?;
        let encoding_mask = DiagnosticInfoMask::from_bits_truncate(mask);
        let mut diagnostic_info = DiagnosticInfo::null();

        if encoding_mask.contains(DiagnosticInfoMask::HAS_SYMBOLIC_ID) {
            // Read symbolic id
            let (b, v) = read_i32(buf)?;
            diagnostic_info.symbolic_id = Some(v);
            buf = b;
        }
        if encoding_mask.contains(DiagnosticInfoMask::HAS_NAMESPACE) {
            // Read namespace
            let (b, v) = read_i32(buf)?;
            diagnostic_info.namespace_uri = Some(v);
            buf = b;
        }
        if encoding_mask.contains(DiagnosticInfoMask::HAS_LOCALE) {
            // Read locale
            let (b, v) = read_i32(buf)?;
            diagnostic_info.locale = Some(v);
            buf = b;
        }
        if encoding_mask.contains(DiagnosticInfoMask::HAS_LOCALIZED_TEXT) {
            // Read localized text
            let (b, v) = read_i32(buf)?;
            diagnostic_info.localized_text = Some(v);
            buf = b;
        }
        if encoding_mask.contains(DiagnosticInfoMask::HAS_ADDITIONAL_INFO) {
            // Read additional info
            let (b, v) = UAString::decode(buf)?;
            diagnostic_info.additional_info = Some(v);
            buf = b;
        }
        if encoding_mask.contains(DiagnosticInfoMask::HAS_INNER_STATUS_CODE) {
            // Read inner status code
            let (b, v) = StatusCode::decode(buf)?;
            diagnostic_info.inner_status_code = Some(v);
            buf = b;
        }
        if encoding_mask.contains(DiagnosticInfoMask::HAS_INNER_DIAGNOSTIC_INFO) {
            // Read inner diagnostic info
            let (b, v) = DiagnosticInfo::decode(buf)?;
            diagnostic_info.inner_diagnostic_info = Some(Box::new(v));
            buf = b;
        }
        Ok((buf, diagnostic_info))
    }
}

impl Default for DiagnosticInfo {
    fn default() -> Self {
        DiagnosticInfo::null()
    }
}

impl DiagnosticInfo {
    pub fn null() -> DiagnosticInfo {
        DiagnosticInfo {
            symbolic_id: None,
            namespace_uri: None,
            locale: None,
            localized_text: None,
            additional_info: None,
            inner_status_code: None,
            inner_diagnostic_info: None,
        }
    }

    pub fn encoding_mask(&self) -> DiagnosticInfoMask {
        let mut encoding_mask = DiagnosticInfoMask::empty();
        if self.symbolic_id.is_some() {
            encoding_mask |= DiagnosticInfoMask::HAS_SYMBOLIC_ID;
        }
        if self.namespace_uri.is_some() {
            encoding_mask |= DiagnosticInfoMask::HAS_NAMESPACE;
        }
        if self.locale.is_some() {
            encoding_mask |= DiagnosticInfoMask::HAS_LOCALE;
        }
        if self.localized_text.is_some() {
            encoding_mask |= DiagnosticInfoMask::HAS_LOCALIZED_TEXT;
        }
        if self.additional_info.is_some() {
            encoding_mask |= DiagnosticInfoMask::HAS_ADDITIONAL_INFO;
        }
        if self.inner_status_code.is_some() {
            encoding_mask |= DiagnosticInfoMask::HAS_INNER_STATUS_CODE;
        }
        if self.inner_diagnostic_info.is_some() {
            encoding_mask |= DiagnosticInfoMask::HAS_INNER_DIAGNOSTIC_INFO;
        }
        encoding_mask
    }
}
