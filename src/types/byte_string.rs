// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `ByteString`.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::types::encoding::*;

/// A sequence of octets. Like `UAString`, a null byte string is distinct from an empty one.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct ByteString {
    pub value: Option<Vec<u8>>,
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        self.value.as_deref().unwrap_or(&[])
    }
}

impl Serialize for ByteString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.value.is_some() {
            serializer.serialize_str(&self.as_base64())
        } else {
            serializer.serialize_none()
        }
    }
}

struct ByteStringVisitor;

impl<'de> de::Visitor<'de> for ByteStringVisitor {
    type Value = ByteString;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a base64 encoded string value or null")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ByteString::null())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        ByteString::from_base64(v).ok_or_else(|| de::Error::custom("Cannot decode base64 bytestring"))
    }
}

impl<'de> Deserialize<'de> for ByteString {
    fn deserialize<D>(deserializer: D) -> Result<ByteString, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(ByteStringVisitor)
    }
}

impl BinaryEncoder for ByteString {
    fn byte_len(&self) -> usize {
        // Length prefix plus the actual length of bytes (if not null)
        4 + self.value.as_ref().map_or(0, |value| value.len())
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        // Byte strings are encoded as raw octets preceded by an Int32 length. A -1 indicates a
        // null byte string, 0 an empty one.
        match self.value {
            None => write_i32(buf, -1),
            Some(ref value) => {
                if value.len() > i32::MAX as usize {
                    return Err(EncodingError::LengthOverflow(value.len()));
                }
                let buf = write_i32(buf, value.len() as i32)?;
                write_bytes(buf, value)
            }
        }
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        let (buf, len) = read_i32(buf)?;
        // Null byte string?
        if len == -1 {
            Ok((buf, ByteString::null()))
        } else if len < -1 {
            error!("ByteString length {} is an invalid negative number", len);
            Err(DecodingError::Malformed(
                "byte string length prefix is negative",
            ))
        } else if len as usize > buf.len() {
            error!(
                "ByteString length {} exceeds the {} bytes remaining in the buffer",
                len,
                buf.len()
            );
            Err(DecodingError::Malformed(
                "byte string length prefix exceeds remaining buffer",
            ))
        } else {
            let (buf, bytes) = read_bytes(buf, len as usize)?;
            Ok((buf, ByteString::from(bytes.to_vec())))
        }
    }
}

impl<'a, T> From<&'a T> for ByteString
where
    T: AsRef<[u8]> + ?Sized,
{
    fn from(value: &'a T) -> Self {
        Self::from(value.as_ref().to_vec())
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(value: Vec<u8>) -> Self {
        // Empty bytes will be treated as Some([])
        ByteString { value: Some(value) }
    }
}

impl Default for ByteString {
    fn default() -> Self {
        ByteString::null()
    }
}

impl ByteString {
    /// Create a null byte string (not the same as an empty byte string)
    pub fn null() -> ByteString {
        ByteString { value: None }
    }

    /// Test if the byte string is null
    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    /// Test if the byte string has an empty value (not the same as null)
    pub fn is_empty(&self) -> bool {
        self.value.as_ref().map_or(false, |value| value.is_empty())
    }

    /// Test if the byte string is null or empty
    pub fn is_null_or_empty(&self) -> bool {
        self.is_null() || self.is_empty()
    }

    /// Creates a byte string from a Base64 encoded string
    pub fn from_base64(data: &str) -> Option<ByteString> {
        STANDARD.decode(data).map(Self::from).ok()
    }

    /// Encodes the byte string as a Base64 encoded string
    pub fn as_base64(&self) -> String {
        if let Some(ref value) = self.value {
            STANDARD.encode(value)
        } else {
            STANDARD.encode("")
        }
    }
}

#[test]
fn bytestring_null() {
    let v = ByteString::null();
    assert!(v.is_null());
    assert!(!v.is_empty());
    assert!(v.is_null_or_empty());
}

#[test]
fn bytestring_empty() {
    let v = ByteString::from(&[]);
    assert!(!v.is_null());
    assert!(v.is_empty());
    assert!(v.is_null_or_empty());
}

#[test]
fn bytestring_bytes() {
    let a = [0x1u8, 0x2u8, 0x3u8, 0x4u8];
    let v = ByteString::from(&a);
    assert!(!v.is_null());
    assert!(!v.is_empty());
    assert_eq!(v.value.as_ref().unwrap(), &a);
}

#[test]
fn bytestring_base64() {
    let v = ByteString::from(b"hello world");
    assert_eq!(
        ByteString::from_base64(&v.as_base64()).unwrap(),
        v
    );
    assert!(ByteString::from_base64("not%base64!").is_none());
}
