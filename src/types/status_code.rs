// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `StatusCode`, the 32-bit code a server attaches to values and
//! operation results. Only the codes this crate can raise or report are defined here; the full
//! table runs to hundreds of entries.

#![allow(non_upper_case_globals)]

use std::fmt;
use std::fmt::Formatter;

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::types::encoding::*;

bitflags! {
    pub struct StatusCode: u32 {
        /// The operation succeeded.
        const Good = 0x0000_0000;
        /// An unexpected error occurred.
        const BadUnexpectedError = 0x8001_0000;
        /// A low level communication error occurred.
        const BadCommunicationError = 0x8005_0000;
        /// Encoding halted because of invalid data in the objects being serialized.
        const BadEncodingError = 0x8006_0000;
        /// Decoding halted because of invalid data in the stream.
        const BadDecodingError = 0x8007_0000;
        /// The operation timed out.
        const BadTimeout = 0x800A_0000;
        /// The syntax of the node id is not valid.
        const BadNodeIdInvalid = 0x8033_0000;
        /// The type of the message specified in the header is invalid.
        const BadTcpMessageTypeInvalid = 0x807E_0000;
        /// The size of the message specified in the header is too large.
        const BadTcpMessageTooLarge = 0x8080_0000;
        /// The server does not recognize the endpoint url.
        const BadTcpEndpointUrlInvalid = 0x8083_0000;

        /// Set on all bad codes
        const IS_ERROR = 0x8000_0000;
        /// Set on all uncertain codes
        const IS_UNCERTAIN = 0x4000_0000;
        /// Mask for the status portion of the code
        const STATUS_MASK = 0xFFFF_0000;
        /// Mask for the info bits that can accompany a code
        const BIT_MASK = 0x0000_FFFF;
    }
}

// The bitflags! macro implements Debug for StatusCode but it fouls the display because status
// codes are a combination of bits and unique values.

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        // Displays the StatusCode as its name, or its name+bitflags
        let bits = self.bitflags();
        if bits.is_empty() {
            write!(f, "{}", self.name())
        } else {
            write!(f, "{}+{:?}", self.name(), bits)
        }
    }
}

impl BinaryEncoder for StatusCode {
    fn byte_len(&self) -> usize {
        4
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        write_u32(buf, self.bits())
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        let (buf, bits) = read_u32(buf)?;
        Ok((buf, StatusCode::from_bits_truncate(bits)))
    }
}

impl Default for StatusCode {
    fn default() -> Self {
        StatusCode::Good
    }
}

impl StatusCode {
    /// Returns the bit flags of the status code, i.e. it masks out the actual status code value
    pub fn bitflags(&self) -> StatusCode {
        *self & StatusCode::BIT_MASK
    }

    /// Returns the status only, i.e. it masks out any bit flags that come with the status code
    pub fn status(&self) -> StatusCode {
        *self & StatusCode::STATUS_MASK
    }

    /// Tests if the status code is bad
    pub fn is_bad(&self) -> bool {
        self.contains(StatusCode::IS_ERROR)
    }

    /// Tests if the status code is uncertain
    pub fn is_uncertain(&self) -> bool {
        self.contains(StatusCode::IS_UNCERTAIN)
    }

    /// Tests if the status code is good (i.e. not bad or uncertain)
    pub fn is_good(&self) -> bool {
        !self.is_bad() && !self.is_uncertain()
    }

    /// The symbolic name of the status portion of the code
    pub fn name(&self) -> &'static str {
        let status = self.status();
        if status == StatusCode::Good {
            "Good"
        } else if status == StatusCode::BadUnexpectedError {
            "BadUnexpectedError"
        } else if status == StatusCode::BadCommunicationError {
            "BadCommunicationError"
        } else if status == StatusCode::BadEncodingError {
            "BadEncodingError"
        } else if status == StatusCode::BadDecodingError {
            "BadDecodingError"
        } else if status == StatusCode::BadTimeout {
            "BadTimeout"
        } else if status == StatusCode::BadNodeIdInvalid {
            "BadNodeIdInvalid"
        } else if status == StatusCode::BadTcpMessageTypeInvalid {
            "BadTcpMessageTypeInvalid"
        } else if status == StatusCode::BadTcpMessageTooLarge {
            "BadTcpMessageTooLarge"
        } else if status == StatusCode::BadTcpEndpointUrlInvalid {
            "BadTcpEndpointUrlInvalid"
        } else {
            "UnknownStatusCode"
        }
    }

    /// The description of the status portion of the code
    pub fn description(&self) -> &'static str {
        let status = self.status();
        if status == StatusCode::Good {
            "The operation succeeded"
        } else if status == StatusCode::BadUnexpectedError {
            "An unexpected error occurred"
        } else if status == StatusCode::BadCommunicationError {
            "A low level communication error occurred"
        } else if status == StatusCode::BadEncodingError {
            "Encoding halted because of invalid data in the objects being serialized"
        } else if status == StatusCode::BadDecodingError {
            "Decoding halted because of invalid data in the stream"
        } else if status == StatusCode::BadTimeout {
            "The operation timed out"
        } else if status == StatusCode::BadNodeIdInvalid {
            "The syntax of the node id is not valid"
        } else if status == StatusCode::BadTcpMessageTypeInvalid {
            "The type of the message specified in the header is invalid"
        } else if status == StatusCode::BadTcpMessageTooLarge {
            "The size of the message specified in the header is too large"
        } else if status == StatusCode::BadTcpEndpointUrlInvalid {
            "The server does not recognize the endpoint url"
        } else {
            "Unknown status code"
        }
    }
}

// Serialize / Deserialize are manually implemented because bitflags! doesn't do it.

impl Serialize for StatusCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

struct StatusCodeVisitor;

impl<'de> Visitor<'de> for StatusCodeVisitor {
    type Value = u32;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an unsigned 32-bit integer")
    }

    fn visit_u32<E>(self, value: u32) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value as u32)
    }
}

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D>(deserializer: D) -> Result<StatusCode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = deserializer.deserialize_u32(StatusCodeVisitor)?;
        Ok(StatusCode::from_bits_truncate(bits))
    }
}
