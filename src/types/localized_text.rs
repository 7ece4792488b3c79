// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the definition of `LocalizedText`.

use std::fmt;

use crate::types::{encoding::*, string::UAString};

/// A human readable text with an optional locale identifier. Either, both or neither field may
/// be present; a field goes onto the wire only when it is neither null nor empty and presence is
/// carried by a bit mask, not a sentinel.
#[derive(PartialEq, Default, Debug, Clone, Hash, Serialize, Deserialize)]
pub struct LocalizedText {
    /// The locale. Omitted from the wire if null or empty
    pub locale: UAString,
    /// The text in the specified locale. Omitted from the wire if null or empty.
    pub text: UAString,
}

impl<'a> From<&'a str> for LocalizedText {
    fn from(value: &'a str) -> Self {
        Self {
            locale: UAString::from(""),
            text: UAString::from(value),
        }
    }
}

impl From<String> for LocalizedText {
    fn from(value: String) -> Self {
        Self {
            locale: UAString::from(""),
            text: UAString::from(value),
        }
    }
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl BinaryEncoder for LocalizedText {
    fn byte_len(&self) -> usize {
        let mut size = 1;
        if !self.locale.is_empty() {
            size += self.locale.byte_len();
        }
        if !self.text.is_empty() {
            size += self.text.byte_len();
        }
        size
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        // A bit mask that indicates which fields are present in the stream.
        // The mask has the following bits:
        // 0x01    Locale
        // 0x02    Text
        let mut encoding_mask: u8 = 0;
        if !self.locale.is_empty() {
            encoding_mask |= 0x1;
        }
        if !self.text.is_empty() {
            encoding_mask |= 0x2;
        }
        let mut buf = write_u8(buf, encoding_mask)?;
        if !self.locale.is_empty() {
            buf = self.locale.encode(buf)?;
        }
        if !self.text.is_empty() {
            buf = self.text.encode(buf)?;
        }
        Ok(buf)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        let (buf, encoding_mask) = read_u8(buf)?;
        let (buf, locale) = if encoding_mask & 0x1 != 0 {
            UAString::decode(buf)?
        } else {
            (buf, UAString::null())
        };
        let (buf, text) = if encoding_mask & 0x2 != 0 {
            UAString::decode(buf)?
        } else {
            (buf, UAString::null())
        };
        Ok((buf, LocalizedText { locale, text }))
    }
}

impl LocalizedText {
    pub fn new(locale: &str, text: &str) -> LocalizedText {
        LocalizedText {
            locale: UAString::from(locale),
            text: UAString::from(text),
        }
    }

    pub fn null() -> LocalizedText {
        LocalizedText {
            locale: UAString::null(),
            text: UAString::null(),
        }
    }
}
