// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `UAString`.

use std::fmt;

use crate::types::encoding::*;

/// To avoid naming conflict hell, the OPC UA String type is typed `UAString` so it does not
/// collide with the Rust `String`.
///
/// A string contains UTF-8 encoded characters or a null value. A null value is distinct from
/// being an empty string so internally, the code maintains that distinction by holding the value
/// as an `Option<String>`.
#[derive(Eq, PartialEq, Debug, Clone, Hash, Serialize, Deserialize)]
pub struct UAString {
    value: Option<String>,
}

impl fmt::Display for UAString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref value) = self.value {
            write!(f, "{}", value)
        } else {
            write!(f, "[null]")
        }
    }
}

impl BinaryEncoder for UAString {
    fn byte_len(&self) -> usize {
        // Length prefix plus the actual string length in bytes for a non-null string.
        4 + self.value.as_ref().map_or(0, |value| value.len())
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        // Strings are encoded as UTF-8 chars preceded by an Int32 length. A -1 indicates a null
        // string, 0 an empty one.
        match self.value {
            None => write_i32(buf, -1),
            Some(ref value) => {
                if value.len() > i32::MAX as usize {
                    return Err(EncodingError::LengthOverflow(value.len()));
                }
                let buf = write_i32(buf, value.len() as i32)?;
                write_bytes(buf, value.as_bytes())
            }
        }
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        let (buf, len) = read_i32(buf)?;
        // Null string?
        if len == -1 {
            Ok((buf, UAString::null()))
        } else if len < -1 {
            error!("String length {} is an invalid negative number", len);
            Err(DecodingError::Malformed("string length prefix is negative"))
        } else if len as usize > buf.len() {
            error!(
                "String length {} exceeds the {} bytes remaining in the buffer",
                len,
                buf.len()
            );
            Err(DecodingError::Malformed(
                "string length prefix exceeds remaining buffer",
            ))
        } else {
            let (buf, bytes) = read_bytes(buf, len as usize)?;
            let value = std::str::from_utf8(bytes).map_err(|err| {
                trace!("Decoded string was not valid UTF-8 - {}", err);
                DecodingError::Malformed("string is not valid UTF-8")
            })?;
            Ok((buf, UAString::from(value)))
        }
    }
}

impl From<UAString> for String {
    fn from(value: UAString) -> Self {
        value.as_ref().to_string()
    }
}

impl AsRef<str> for UAString {
    fn as_ref(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

impl<'a> From<&'a str> for UAString {
    fn from(value: &'a str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<&String> for UAString {
    fn from(value: &String) -> Self {
        UAString {
            value: Some(value.clone()),
        }
    }
}

impl From<String> for UAString {
    fn from(value: String) -> Self {
        UAString { value: Some(value) }
    }
}

impl Default for UAString {
    fn default() -> Self {
        UAString::null()
    }
}

impl PartialEq<str> for UAString {
    fn eq(&self, other: &str) -> bool {
        match self.value {
            None => false,
            Some(ref v) => v.eq(other),
        }
    }
}

impl UAString {
    pub fn value(&self) -> &Option<String> {
        &self.value
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Returns true if the string is null or empty, false otherwise
    pub fn is_empty(&self) -> bool {
        self.value.as_ref().map_or(true, |value| value.is_empty())
    }

    /// Returns the length of the string in bytes or -1 for null.
    pub fn len(&self) -> isize {
        self.value.as_ref().map_or(-1, |value| value.len() as isize)
    }

    /// Create a null string (not the same as an empty string).
    pub fn null() -> UAString {
        UAString { value: None }
    }

    /// Test if the string is null.
    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }
}

#[test]
fn string_null() {
    let s = UAString::null();
    assert!(s.is_null());
    assert!(s.is_empty());
    assert_eq!(s.len(), -1);
}

#[test]
fn string_empty() {
    let s = UAString::from("");
    assert!(!s.is_null());
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
}

#[test]
fn string_value() {
    let v = "Mary had a little lamb";
    let s = UAString::from(v);
    assert!(!s.is_null());
    assert!(!s.is_empty());
    assert_eq!(s.as_ref(), v);
}

#[test]
fn string_eq() {
    let s = UAString::null();
    assert!(!s.eq(""));

    let s = UAString::from("");
    assert!(s.eq(""));

    let s = UAString::from("Sunshine");
    assert!(s.ne("Moonshine"));
    assert!(s.eq("Sunshine"));
    assert!(!s.eq("Sunshine "));
}
