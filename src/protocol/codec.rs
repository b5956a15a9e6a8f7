//! Protocol codec
//!
//! Encoding and decoding functions for the RCON wire protocol.
//!
//! ## Wire Format
//!
//! ```text
//! ┌──────────┬──────────┬──────────┬───────────┬────┬───────────┬────┐
//! │ Size (4) │  ID (4)  │ Type (4) │   Body    │ 00 │  (empty)  │ 00 │
//! └──────────┴──────────┴──────────┴───────────┴────┴───────────┴────┘
//! ```
//!
//! Integers are little-endian. `Size` counts everything after itself.

use std::io::Read;

use bytes::{BufMut, BytesMut};

use crate::error::{RconError, Result};
use super::Packet;

/// Maximum outgoing payload length in bytes
///
/// The practical command-length ceiling of srcds, well below the
/// theoretical 4096-byte string limit; replies may be far larger.
pub const MAX_COMMAND_LENGTH: usize = 510;

/// Minimum value of the size field: id (4) + type (4) + two terminators
pub const MIN_PACKET_SIZE: i32 = 4 + 4 + 1 + 1;

/// Maximum value of the size field: id (4) + one full 4096-byte string
/// + terminator
pub const MAX_PACKET_SIZE: i32 = 4 + 4096 + 1;

// =============================================================================
// Encoding
// =============================================================================

/// Encode a frame for the wire
///
/// Fails with [`RconError::CommandTooLong`] before any I/O if `payload`
/// exceeds [`MAX_COMMAND_LENGTH`] bytes.
pub fn encode_packet(request_id: i32, kind: i32, payload: &str) -> Result<Vec<u8>> {
    if payload.len() > MAX_COMMAND_LENGTH {
        return Err(RconError::CommandTooLong {
            len: payload.len(),
            max: MAX_COMMAND_LENGTH,
        });
    }

    // id (4) + type (4) + body + terminator + empty second string terminator
    let size = 4 + 4 + payload.len() + 2;

    let mut buf = BytesMut::with_capacity(4 + size);
    buf.put_i32_le(size as i32);
    buf.put_i32_le(request_id);
    buf.put_i32_le(kind);
    buf.put_slice(payload.as_bytes());
    buf.put_u8(0);
    buf.put_u8(0);

    Ok(buf.to_vec())
}

// =============================================================================
// Decoding
// =============================================================================

/// Read one frame from a stream
///
/// Reads the 4-byte size field, validates it against
/// [`MIN_PACKET_SIZE`]..=[`MAX_PACKET_SIZE`] before reading the declared
/// payload, then reads exactly `size` bytes and decodes them. A short
/// read at either step is [`RconError::ConnectionClosed`].
pub fn read_packet<R: Read>(reader: &mut R) -> Result<Packet> {
    let mut size_buf = [0u8; 4];
    reader
        .read_exact(&mut size_buf)
        .map_err(|_| RconError::ConnectionClosed)?;

    let size = i32::from_le_bytes(size_buf);
    if !(MIN_PACKET_SIZE..=MAX_PACKET_SIZE).contains(&size) {
        return Err(RconError::InvalidPacketSize(size));
    }

    let mut frame = vec![0u8; size as usize];
    reader
        .read_exact(&mut frame)
        .map_err(|_| RconError::ConnectionClosed)?;

    decode_frame(&frame)
}

/// Decode a frame body (everything after the size field)
///
/// Splits off the request id and type, then scans for the two
/// null-terminated strings. A missing terminator, or a second terminator
/// that does not land exactly on the last byte of the frame, is
/// [`RconError::CrapBytes`].
pub fn decode_frame(frame: &[u8]) -> Result<Packet> {
    let len = frame.len() as i32;
    if !(MIN_PACKET_SIZE..=MAX_PACKET_SIZE).contains(&len) {
        return Err(RconError::InvalidPacketSize(len));
    }

    let request_id = i32::from_le_bytes([frame[0], frame[1], frame[2], frame[3]]);
    let kind = i32::from_le_bytes([frame[4], frame[5], frame[6], frame[7]]);

    let strings = &frame[8..];
    let body_end = strings
        .iter()
        .position(|&b| b == 0)
        .ok_or(RconError::CrapBytes)?;
    let body = strings[..body_end].to_vec();

    let tail_start = body_end + 1;
    let tail_end = strings[tail_start..]
        .iter()
        .position(|&b| b == 0)
        .map(|i| tail_start + i)
        .ok_or(RconError::CrapBytes)?;

    // second terminator must be the last byte of the frame
    if tail_end != strings.len() - 1 {
        return Err(RconError::CrapBytes);
    }
    let tail = strings[tail_start..tail_end].to_vec();

    Ok(Packet {
        request_id,
        kind,
        body,
        tail,
    })
}
