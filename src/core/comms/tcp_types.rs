// UAWire for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of the connection handshake messages and their framing header.

use crate::types::{encoding::*, status_code::StatusCode, string::UAString};

const HELLO_MESSAGE: &[u8] = b"HEL";
const ACKNOWLEDGE_MESSAGE: &[u8] = b"ACK";
const REVERSE_HELLO_MESSAGE: &[u8] = b"RHE";
const ERROR_MESSAGE: &[u8] = b"ERR";

/// Fourth byte of every handshake type code
const MESSAGE_FINAL: u8 = b'F';

/// Size in bytes of the message header - 4 byte type code plus 4 byte total message size
pub const MESSAGE_HEADER_LEN: usize = 8;

/// Minimum size in bytes that either peer may advertise for its receive / send buffers
pub const MIN_BUFFER_SIZE: usize = 8192;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Invalid,
    Hello,
    Acknowledge,
    ReverseHello,
    Error,
}

/// Every handshake message starts with this header - a 4 byte ASCII type code (`HELF`, `ACKF`,
/// `RHEF` or `ERRF`) followed by the total message size including the header itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageHeader {
    pub message_type: MessageType,
    pub message_size: u32,
}

impl BinaryEncoder for MessageHeader {
    fn byte_len(&self) -> usize {
        MESSAGE_HEADER_LEN
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        let code = match self.message_type {
            MessageType::Hello => HELLO_MESSAGE,
            MessageType::Acknowledge => ACKNOWLEDGE_MESSAGE,
            MessageType::ReverseHello => REVERSE_HELLO_MESSAGE,
            MessageType::Error => ERROR_MESSAGE,
            MessageType::Invalid => {
                panic!("Don't write an invalid type to the stream");
            }
        };
        let buf = write_bytes(buf, code)?;
        let buf = write_u8(buf, MESSAGE_FINAL)?;
        write_u32(buf, self.message_size)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        let (buf, code) = read_bytes(buf, 4)?;
        let message_type = MessageHeader::message_type(code);
        if message_type == MessageType::Invalid {
            error!("Message header type code {:?} is not recognized", code);
            return Err(DecodingError::Malformed(
                "message type code is not recognized",
            ));
        }
        let (buf, message_size) = read_u32(buf)?;
        Ok((
            buf,
            MessageHeader {
                message_type,
                message_size,
            },
        ))
    }
}

impl MessageHeader {
    pub fn new(message_type: MessageType) -> MessageHeader {
        MessageHeader {
            message_type,
            message_size: 0,
        }
    }

    /// Classifies a 4 byte type code. Anything other than a known 3 byte code followed by the
    /// literal `F` is invalid.
    pub fn message_type(t: &[u8]) -> MessageType {
        if t.len() != 4 || t[3] != MESSAGE_FINAL {
            MessageType::Invalid
        } else {
            match &t[0..3] {
                HELLO_MESSAGE => MessageType::Hello,
                ACKNOWLEDGE_MESSAGE => MessageType::Acknowledge,
                REVERSE_HELLO_MESSAGE => MessageType::ReverseHello,
                ERROR_MESSAGE => MessageType::Error,
                _ => MessageType::Invalid,
            }
        }
    }
}

/// Implementation of the HEL message, sent by a client to open a connection.
#[derive(Debug, Clone, PartialEq)]
pub struct HelloMessage {
    pub message_header: MessageHeader,
    pub protocol_version: u32,
    pub receive_buffer_size: u32,
    pub send_buffer_size: u32,
    pub max_message_size: u32,
    pub max_chunk_count: u32,
    pub endpoint_url: UAString,
}

impl BinaryEncoder for HelloMessage {
    fn byte_len(&self) -> usize {
        // 5 * u32 = 20
        self.message_header.byte_len() + 20 + self.endpoint_url.byte_len()
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        let buf = self.message_header.encode(buf)?;
        let buf = self.protocol_version.encode(buf)?;
        let buf = self.receive_buffer_size.encode(buf)?;
        let buf = self.send_buffer_size.encode(buf)?;
        let buf = self.max_message_size.encode(buf)?;
        let buf = self.max_chunk_count.encode(buf)?;
        self.endpoint_url.encode(buf)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        let (buf, message_header) = MessageHeader::decode(buf)?;
        let (buf, protocol_version) = u32::decode(buf)?;
        let (buf, receive_buffer_size) = u32::decode(buf)?;
        let (buf, send_buffer_size) = u32::decode(buf)?;
        let (buf, max_message_size) = u32::decode(buf)?;
        let (buf, max_chunk_count) = u32::decode(buf)?;
        let (buf, endpoint_url) = UAString::decode(buf)?;
        Ok((
            buf,
            HelloMessage {
                message_header,
                protocol_version,
                receive_buffer_size,
                send_buffer_size,
                max_message_size,
                max_chunk_count,
                endpoint_url,
            },
        ))
    }
}

impl HelloMessage {
    const MAX_URL_LEN: usize = 4096;

    /// Creates a HEL message
    pub fn new(
        endpoint_url: &str,
        send_buffer_size: usize,
        receive_buffer_size: usize,
        max_message_size: usize,
        max_chunk_count: usize,
    ) -> HelloMessage {
        let mut msg = HelloMessage {
            message_header: MessageHeader::new(MessageType::Hello),
            protocol_version: 0,
            receive_buffer_size: receive_buffer_size as u32,
            send_buffer_size: send_buffer_size as u32,
            max_message_size: max_message_size as u32,
            max_chunk_count: max_chunk_count as u32,
            endpoint_url: UAString::from(endpoint_url),
        };
        msg.message_header.message_size = msg.byte_len() as u32;
        msg
    }

    pub fn is_endpoint_valid_length(&self) -> bool {
        if let Some(ref endpoint_url) = self.endpoint_url.value() {
            endpoint_url.len() <= HelloMessage::MAX_URL_LEN
        } else {
            error!("Hello message contains no endpoint url");
            false
        }
    }

    pub fn is_valid_buffer_sizes(&self) -> bool {
        // Set in part 6 as minimum transport buffer size
        self.receive_buffer_size >= MIN_BUFFER_SIZE as u32
            && self.send_buffer_size >= MIN_BUFFER_SIZE as u32
    }
}

/// Implementation of the ACK message, the server's answer to a HEL.
#[derive(Debug, Clone, PartialEq)]
pub struct AcknowledgeMessage {
    pub message_header: MessageHeader,
    pub protocol_version: u32,
    pub receive_buffer_size: u32,
    pub send_buffer_size: u32,
    pub max_message_size: u32,
    pub max_chunk_count: u32,
}

impl BinaryEncoder for AcknowledgeMessage {
    fn byte_len(&self) -> usize {
        self.message_header.byte_len() + 20
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        let buf = self.message_header.encode(buf)?;
        let buf = self.protocol_version.encode(buf)?;
        let buf = self.receive_buffer_size.encode(buf)?;
        let buf = self.send_buffer_size.encode(buf)?;
        let buf = self.max_message_size.encode(buf)?;
        self.max_chunk_count.encode(buf)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        let (buf, message_header) = MessageHeader::decode(buf)?;
        let (buf, protocol_version) = u32::decode(buf)?;
        let (buf, receive_buffer_size) = u32::decode(buf)?;
        let (buf, send_buffer_size) = u32::decode(buf)?;
        let (buf, max_message_size) = u32::decode(buf)?;
        let (buf, max_chunk_count) = u32::decode(buf)?;
        Ok((
            buf,
            AcknowledgeMessage {
                message_header,
                protocol_version,
                receive_buffer_size,
                send_buffer_size,
                max_message_size,
                max_chunk_count,
            },
        ))
    }
}

impl AcknowledgeMessage {
    /// Creates an ACK message
    pub fn new(
        protocol_version: u32,
        receive_buffer_size: u32,
        send_buffer_size: u32,
        max_message_size: u32,
        max_chunk_count: u32,
    ) -> AcknowledgeMessage {
        let mut msg = AcknowledgeMessage {
            message_header: MessageHeader::new(MessageType::Acknowledge),
            protocol_version,
            receive_buffer_size,
            send_buffer_size,
            max_message_size,
            max_chunk_count,
        };
        msg.message_header.message_size = msg.byte_len() as u32;
        msg
    }
}

/// Implementation of the ERR message, sent before the peer drops the connection.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorMessage {
    pub message_header: MessageHeader,
    pub error: u32,
    pub reason: UAString,
}

impl BinaryEncoder for ErrorMessage {
    fn byte_len(&self) -> usize {
        self.message_header.byte_len() + self.error.byte_len() + self.reason.byte_len()
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        let buf = self.message_header.encode(buf)?;
        let buf = self.error.encode(buf)?;
        self.reason.encode(buf)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        let (buf, message_header) = MessageHeader::decode(buf)?;
        let (buf, error) = u32::decode(buf)?;
        let (buf, reason) = UAString::decode(buf)?;
        Ok((
            buf,
            ErrorMessage {
                message_header,
                error,
                reason,
            },
        ))
    }
}

impl ErrorMessage {
    pub fn from_status_code(status_code: StatusCode) -> ErrorMessage {
        let mut error = ErrorMessage {
            message_header: MessageHeader::new(MessageType::Error),
            error: status_code.bits(),
            reason: UAString::from(status_code.description()),
        };
        error.message_header.message_size = error.byte_len() as u32;
        error
    }
}

/// Implementation of the RHE message, sent by a server to ask a client to connect back to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseHelloMessage {
    pub message_header: MessageHeader,
    pub server_uri: UAString,
    pub endpoint_url: UAString,
}

impl BinaryEncoder for ReverseHelloMessage {
    fn byte_len(&self) -> usize {
        self.message_header.byte_len() + self.server_uri.byte_len() + self.endpoint_url.byte_len()
    }

    fn encode<'a>(&self, buf: &'a mut [u8]) -> EncodingResult<'a> {
        let buf = self.message_header.encode(buf)?;
        let buf = self.server_uri.encode(buf)?;
        self.endpoint_url.encode(buf)
    }

    fn decode(buf: &[u8]) -> DecodingResult<'_, Self> {
        let (buf, message_header) = MessageHeader::decode(buf)?;
        let (buf, server_uri) = UAString::decode(buf)?;
        let (buf, endpoint_url) = UAString::decode(buf)?;
        Ok((
            buf,
            ReverseHelloMessage {
                message_header,
                server_uri,
                endpoint_url,
            },
        ))
    }
}

impl ReverseHelloMessage {
    /// Creates a RHE message
    pub fn new(server_uri: &str, endpoint_url: &str) -> ReverseHelloMessage {
        let mut msg = ReverseHelloMessage {
            message_header: MessageHeader::new(MessageType::ReverseHello),
            server_uri: UAString::from(server_uri),
            endpoint_url: UAString::from(endpoint_url),
        };
        msg.message_header.message_size = msg.byte_len() as u32;
        msg
    }
}
