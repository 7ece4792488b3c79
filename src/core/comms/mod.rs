// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the types used to exchange handshake messages over a byte stream.

pub mod tcp_types;
