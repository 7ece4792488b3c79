// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the codec implementations for the simple OPC UA scalar types.

use crate::types::encoding::*;

// Standard UA types onto Rust types:
//
// Boolean  -> bool
// SByte    -> i8
// Byte     -> u8
// Int16    -> i16
// UInt16   -> u16
// Int32    -> i32
// UInt32   -> u32
// Int64    -> i64
// UInt64   -> u64
// Float    -> f32
// Double   -> f64

impl BinaryEncoder for bool {
    fn byte_len(&self) -> usize {
        1
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        // Canonical 1 or 0 single byte
        write_u8(buf, u8::from(*self))
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        // Any non-zero byte is treated as true
        let (buf, value) = read_u8(buf)?;
        Ok((buf, value != 0))
    }
}

impl BinaryEncoder for i8 {
    fn byte_len(&self) -> usize {
        1
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        write_u8(buf, *self as u8)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        let (buf, value) = read_u8(buf)?;
        Ok((buf, value as i8))
    }
}

/// An unsigned byte integer value between 0 and 255.
impl BinaryEncoder for u8 {
    fn byte_len(&self) -> usize {
        1
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        write_u8(buf, *self)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        read_u8(buf)
    }
}

/// A signed integer value between -32768 and 32767.
impl BinaryEncoder for i16 {
    fn byte_len(&self) -> usize {
        2
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        write_i16(buf, *self)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        read_i16(buf)
    }
}

/// An unsigned integer value between 0 and 65535.
impl BinaryEncoder for u16 {
    fn byte_len(&self) -> usize {
        2
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        write_u16(buf, *self)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        read_u16(buf)
    }
}

/// A signed integer value between -2147483648 and 2147483647.
impl BinaryEncoder for i32 {
    fn byte_len(&self) -> usize {
        4
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        write_i32(buf, *self)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        read_i32(buf)
    }
}

/// An unsigned integer value between 0 and 4294967295.
impl BinaryEncoder for u32 {
    fn byte_len(&self) -> usize {
        4
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        write_u32(buf, *self)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        read_u32(buf)
    }
}

/// A signed integer value between -9223372036854775808 and 9223372036854775807.
impl BinaryEncoder for i64 {
    fn byte_len(&self) -> usize {
        8
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        write_i64(buf, *self)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        read_i64(buf)
    }
}

/// An unsigned integer value between 0 and 18446744073709551615.
impl BinaryEncoder for u64 {
    fn byte_len(&self) -> usize {
        8
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        write_u64(buf, *self)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        read_u64(buf)
    }
}

/// An IEEE single precision (32 bit) floating point value.
impl BinaryEncoder for f32 {
    fn byte_len(&self) -> usize {
        4
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        write_f32(buf, *self)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        read_f32(buf)
    }
}

/// An IEEE double precision (64 bit) floating point value.
impl BinaryEncoder for f64 {
    fn byte_len(&self) -> usize {
        8
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        write_f64(buf, *self)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        read_f64(buf)
    }
}
