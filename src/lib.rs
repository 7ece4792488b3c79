// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! UAWire implements the OPC UA binary encoding - the symmetric encode / decode routines that
//! turn booleans, integers, floats, strings, timestamps, guids, node identifiers, diagnostic
//! records and the connection handshake messages into their compact wire representation and back.
//!
//! All codec operations are pure transformations over caller-owned byte slices. An encoder writes
//! a value at the front of a mutable buffer and hands back the unwritten remainder; a decoder
//! consumes prefix bytes and hands back the unread remainder together with the value. Buffers are
//! borrowed, never owned, so callers can encode into a reusable scratch region without any hidden
//! cursor state.
//!
//! The [`types`] module holds the value model and the codec itself. The [`core`] module holds the
//! protocol plumbing built on top of it - the namespace table and the `HEL` / `ACK` / `ERR` /
//! `RHE` handshake messages with their 8-byte framing header.

#![allow(clippy::from_over_into)]
#![allow(clippy::result_unit_err)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate serde_derive;

pub mod core;
pub mod types;
