// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the namespace table, the registry that resolves namespace uris to the indices
//! carried inside node ids.

/// URI of the standard OPC UA namespace, always index 0 in every table.
pub const OPC_UA_NAMESPACE_URI: &str = "http://opcfoundation.org/UA/";

/// An insertion ordered registry of namespace uris. Index 0 is reserved for the standard
/// namespace and index 1 for the server's own application uri. Uris are unique; registering a
/// duplicate hands back the existing index. The codec itself only reads resolved indices, so a
/// table shared between threads needs external locking around registration.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceTable {
    namespaces: Vec<String>,
}

impl NamespaceTable {
    /// Creates a table seeded with the standard namespace and the server's application uri.
    pub fn new(application_uri: &str) -> NamespaceTable {
        NamespaceTable {
            namespaces: vec![
                OPC_UA_NAMESPACE_URI.to_string(),
                application_uri.to_string(),
            ],
        }
    }

    /// Registers a namespace uri, returning its index. Hands back the existing index if the
    /// uri is already registered. Fails on an empty uri or when the table is at its 65535
    /// entry capacity.
    pub fn register_namespace(&mut self, namespace: &str) -> Result<u16, ()> {
        if namespace.is_empty() || self.namespaces.len() == u16::MAX as usize {
            Err(())
        } else if let Some(i) = self.namespace_index(namespace) {
            // Existing namespace index
            Ok(i)
        } else {
            self.namespaces.push(namespace.to_string());
            Ok((self.namespaces.len() - 1) as u16)
        }
    }

    /// Finds the index of a given namespace uri
    pub fn namespace_index(&self, namespace: &str) -> Option<u16> {
        self.namespaces
            .iter()
            .position(|ns| ns == namespace)
            .map(|i| i as u16)
    }

    /// The uri registered at an index
    pub fn namespace_uri(&self, index: u16) -> Option<&str> {
        self.namespaces.get(index as usize).map(|ns| ns.as_str())
    }

    /// Number of registered namespaces
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}
