// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the definition of `QualifiedName`.

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::types::{encoding::*, string::UAString};

/// A name qualified by a namespace.
///
/// Ordered by namespace index, then by name. The textual form is `<index>:<name>` with the
/// index omitted when it is 0.
#[derive(PartialEq, Eq, Debug, Clone, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
    /// The namespace index.
    pub namespace_index: u16,
    /// The name.
    pub name: UAString,
}

impl<'a> From<&'a str> for QualifiedName {
    fn from(value: &'a str) -> Self {
        Self {
            namespace_index: 0,
            name: UAString::from(value),
        }
    }
}

impl From<String> for QualifiedName {
    fn from(value: String) -> Self {
        Self {
            namespace_index: 0,
            name: UAString::from(value),
        }
    }
}

impl Ord for QualifiedName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.namespace_index
            .cmp(&other.namespace_index)
            .then_with(|| self.name.as_ref().cmp(other.name.as_ref()))
    }
}

impl PartialOrd for QualifiedName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.namespace_index != 0 {
            write!(f, "{}:{}", self.namespace_index, self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl FromStr for QualifiedName {
    type Err = DecodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A leading all-digit segment before the first : is the namespace index, anything
        // else is part of the name itself
        match s.split_once(':') {
            Some((index, name))
                if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) =>
            {
                let namespace_index = index.parse::<u16>().map_err(|_| {
                    DecodingError::Malformed("qualified name namespace index is out of range")
                })?;
                Ok(QualifiedName::new(namespace_index, name))
            }
            _ => Ok(QualifiedName::new(0, s)),
        }
    }
}

impl BinaryEncoder for QualifiedName {
    fn byte_len(&self) -> usize {
        self.namespace_index.byte_len() + self.name.byte_len()
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        let buf = self.namespace_index.encode(buf)?;
        self.name.encode(buf)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        let (buf, namespace_index) = u16::decode(buf)?;
        let (buf, name) = UAString::decode(buf)?;
        Ok((
            buf,
            QualifiedName {
                namespace_index,
                name,
            },
        ))
    }
}

impl Default for QualifiedName {
    fn default() -> Self {
        QualifiedName::null()
    }
}

impl QualifiedName {
    pub fn new<T>(namespace_index: u16, name: T) -> QualifiedName
    where
        T: Into<UAString>,
    {
        QualifiedName {
            namespace_index,
            name: name.into(),
        }
    }

    pub fn null() -> QualifiedName {
        QualifiedName {
            namespace_index: 0,
            name: UAString::null(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.namespace_index == 0 && self.name.is_null()
    }
}

#[test]
fn qualified_name_to_string() {
    // The index prefix is omitted when it is 0
    assert_eq!(QualifiedName::new(0, "Browse").to_string(), "Browse");
    assert_eq!(QualifiedName::new(2, "Browse").to_string(), "2:Browse");
}

#[test]
fn qualified_name_from_str() {
    assert_eq!(
        QualifiedName::from_str("2:Browse").unwrap(),
        QualifiedName::new(2, "Browse")
    );
    assert_eq!(
        QualifiedName::from_str("Browse").unwrap(),
        QualifiedName::new(0, "Browse")
    );
    // A non numeric leading segment belongs to the name
    assert_eq!(
        QualifiedName::from_str("urn:foo").unwrap(),
        QualifiedName::new(0, "urn:foo")
    );
    // Only the first : splits the index from the name
    assert_eq!(
        QualifiedName::from_str("2:a:b").unwrap(),
        QualifiedName::new(2, "a:b")
    );
    // An all digit index that does not fit in 16 bits is malformed
    assert!(QualifiedName::from_str("65536:Browse").is_err());
}

#[test]
fn qualified_name_ordering() {
    assert!(QualifiedName::new(1, "b") < QualifiedName::new(2, "a"));
    assert!(QualifiedName::new(2, "a") < QualifiedName::new(2, "b"));
    assert_eq!(
        QualifiedName::new(2, "a").cmp(&QualifiedName::new(2, "a")),
        Ordering::Equal
    );
}
