// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the `BinaryEncoder` trait and helpers for reading and writing of scalar values and
//! other primitives at the front of a byte slice.

use byteorder::{ByteOrder, LittleEndian};
use thiserror::Error;

/// Raised when a value cannot be written because the destination buffer cannot hold it. Callers
/// are expected to pre-size buffers with [`BinaryEncoder::byte_len`], so hitting this is a caller
/// bug or a deliberately undersized scratch region. Never retryable at this layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The destination buffer has fewer bytes remaining than the value needs.
    #[error("destination buffer has {remaining} bytes remaining but the value needs {required}")]
    BufferTooSmall { required: usize, remaining: usize },
    /// A variable length payload exceeds the positive range of its Int32 length prefix.
    #[error("payload of {0} bytes exceeds the range of an Int32 length prefix")]
    LengthOverflow(usize),
}

/// Raised when a value cannot be read back from a byte slice. Truncation and malformed input are
/// kept apart so callers can tell "feed me more bytes" from "this stream is garbage", but both
/// abort the decode of the current value. Partially populated output must be discarded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    /// The source buffer ended before the required number of bytes could be read.
    #[error("source buffer ended early, needed {required} bytes but only {remaining} remain")]
    Truncated { required: usize, remaining: usize },
    /// The source bytes or text are structurally invalid for the target type.
    #[error("malformed value - {0}")]
    Malformed(&'static str),
}

/// Result of an encode - the unwritten remainder of the destination buffer.
pub type EncodingResult<'a> = std::result::Result<&'a mut [u8], EncodingError>;

/// Result of a decode - the unread remainder of the source buffer plus the value.
pub type DecodingResult<'a, T> = std::result::Result<(&'a [u8], T), DecodingError>;

/// OPC UA Binary Encoding interface. Anything that encodes to binary must implement this. It
/// provides a function to calculate the exact size in bytes of the value on the wire, a function
/// to encode the value at the front of a mutable buffer, and a function to decode it back from
/// the front of a byte slice.
///
/// `encode` consumes exactly `byte_len()` bytes of the buffer on success and returns the
/// unwritten remainder; `decode` mirrors it, returning the unread remainder together with the
/// value. Neither takes ownership of the buffer.
pub trait BinaryEncoder: Sized {
    /// Returns the exact byte length of the value as it would be if `encode` were called.
    /// This may be called prior to writing to ensure the correct amount of space is available.
    fn byte_len(&self) -> usize;

    /// Encodes the value at the front of `buf`, returning the unwritten remainder.
    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a>;

    /// Decodes a value from the front of `buf`, returning the unread remainder and the value.
    fn decode(buf: &[u8]) -> DecodingResult<'_, Self>;

    /// Convenience method for encoding a value straight into an exactly sized vector. It is
    /// preferable to reuse buffers than to call this, so it should be reserved for tests and
    /// trivial code.
    fn encode_to_vec(&self) -> Vec<u8> {
        let mut buffer = vec![0u8; self.byte_len()];
        let _ = self.encode(&mut buffer);
        buffer
    }
}

/// Writes a run of bytes to the front of the buffer, returning the unwritten remainder.
pub fn write_bytes<'a>(buf: &'a mut [u8], bytes: &[u8]) -> EncodingResult<'a> {
    if buf.len() < bytes.len() {
        trace!(
            "Encoding error - needed {} bytes but buffer has {}",
            bytes.len(),
            buf.len()
        );
        return Err(EncodingError::BufferTooSmall {
            required: bytes.len(),
            remaining: buf.len(),
        });
    }
    let (head, tail) = buf.split_at_mut(bytes.len());
    head.copy_from_slice(bytes);
    Ok(tail)
}

/// Writes an unsigned byte to the buffer
pub fn write_u8<'a, T>(buf: &'a mut [u8], value: T) -> EncodingResult<'a>
where
    T: Into<u8>,
{
    write_bytes(buf, &[value.into()])
}

/// Writes a signed 16-bit value to the buffer
pub fn write_i16<'a, T>(buf: &'a mut [u8], value: T) -> EncodingResult<'a>
where
    T: Into<i16>,
{
    let mut bytes = [0u8; 2];
    LittleEndian::write_i16(&mut bytes, value.into());
    write_bytes(buf, &bytes)
}

/// Writes an unsigned 16-bit value to the buffer
pub fn write_u16<'a, T>(buf: &'a mut [u8], value: T) -> EncodingResult<'a>
where
    T: Into<u16>,
{
    let mut bytes = [0u8; 2];
    LittleEndian::write_u16(&mut bytes, value.into());
    write_bytes(buf, &bytes)
}

/// Writes a signed 32-bit value to the buffer
pub fn write_i32<'a, T>(buf: &'a mut [u8], value: T) -> EncodingResult<'a>
where
    T: Into<i32>,
{
    let mut bytes = [0u8; 4];
    LittleEndian::write_i32(&mut bytes, value.into());
    write_bytes(buf, &bytes)
}

/// Writes an unsigned 32-bit value to the buffer
pub fn write_u32<'a, T>(buf: &'a mut [u8], value: T) -> EncodingResult<'a>
where
    T: Into<u32>,
{
    let mut bytes = [0u8; 4];
    LittleEndian::write_u32(&mut bytes, value.into());
    write_bytes(buf, &bytes)
}

/// Writes a signed 64-bit value to the buffer
pub fn write_i64<'a, T>(buf: &'a mut [u8], value: T) -> EncodingResult<'a>
where
    T: Into<i64>,
{
    let mut bytes = [0u8; 8];
    LittleEndian::write_i64(&mut bytes, value.into());
    write_bytes(buf, &bytes)
}

/// Writes an unsigned 64-bit value to the buffer
pub fn write_u64<'a, T>(buf: &'a mut [u8], value: T) -> EncodingResult<'a>
where
    T: Into<u64>,
{
    let mut bytes = [0u8; 8];
    LittleEndian::write_u64(&mut bytes, value.into());
    write_bytes(buf, &bytes)
}

/// Writes a 32-bit precision value to the buffer
pub fn write_f32<'a, T>(buf: &'a mut [u8], value: T) -> EncodingResult<'a>
where
    T: Into<f32>,
{
    let mut bytes = [0u8; 4];
    LittleEndian::write_f32(&mut bytes, value.into());
    write_bytes(buf, &bytes)
}

/// Writes a 64-bit precision value to the buffer
pub fn write_f64<'a, T>(buf: &'a mut [u8], value: T) -> EncodingResult<'a>
where
    T: Into<f64>,
{
    let mut bytes = [0u8; 8];
    LittleEndian::write_f64(&mut bytes, value.into());
    write_bytes(buf, &bytes)
}

/// Reads a run of bytes from the front of the buffer, returning the unread remainder and the run.
pub fn read_bytes(buf: &[u8], count: usize) -> DecodingResult<'_, &[u8]> {
    if buf.len() < count {
        trace!(
            "Decoding error - needed {} bytes but only {} remain",
            count,
            buf.len()
        );
        return Err(DecodingError::Truncated {
            required: count,
            remaining: buf.len(),
        });
    }
    let (head, tail) = buf.split_at(count);
    Ok((tail, head))
}

/// Read an unsigned byte from the buffer
pub fn read_u8(buf: &[u8]) -> DecodingResult<'_, u8> {
    let (buf, bytes) = read_bytes(buf, 1)?;
    Ok((buf, bytes[0]))
}

/// Read a signed 16-bit value from the buffer
pub fn read_i16(buf: &[u8]) -> DecodingResult<'_, i16> {
    let (buf, bytes) = read_bytes(buf, 2)?;
    Ok((buf, LittleEndian::read_i16(bytes)))
}

/// Read an unsigned 16-bit value from the buffer
pub fn read_u16(buf: &[u8]) -> DecodingResult<'_, u16> {
    let (buf, bytes) = read_bytes(buf, 2)?;
    Ok((buf, LittleEndian::read_u16(bytes)))
}

/// Read a signed 32-bit value from the buffer
pub fn read_i32(buf: &[u8]) -> DecodingResult<'_, i32> {
    let (buf, bytes) = read_bytes(buf, 4)?;
    Ok((buf, LittleEndian::read_i32(bytes)))
}

/// Read an unsigned 32-bit value from the buffer
pub fn read_u32(buf: &[u8]) -> DecodingResult<'_, u32> {
    let (buf, bytes) = read_bytes(buf, 4)?;
    Ok((buf, LittleEndian::read_u32(bytes)))
}

/// Read a signed 64-bit value from the buffer
pub fn read_i64(buf: &[u8]) -> DecodingResult<'_, i64> {
    let (buf, bytes) = read_bytes(buf, 8)?;
    Ok((buf, LittleEndian::read_i64(bytes)))
}

/// Read an unsigned 64-bit value from the buffer
pub fn read_u64(buf: &[u8]) -> DecodingResult<'_, u64> {
    let (buf, bytes) = read_bytes(buf, 8)?;
    Ok((buf, LittleEndian::read_u64(bytes)))
}

/// Read a 32-bit precision value from the buffer
pub fn read_f32(buf: &[u8]) -> DecodingResult<'_, f32> {
    let (buf, bytes) = read_bytes(buf, 4)?;
    Ok((buf, LittleEndian::read_f32(bytes)))
}

/// Read a 64-bit precision value from the buffer
pub fn read_f64(buf: &[u8]) -> DecodingResult<'_, f64> {
    let (buf, bytes) = read_bytes(buf, 8)?;
    Ok((buf, LittleEndian::read_f64(bytes)))
}
