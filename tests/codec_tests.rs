//! Codec Tests
//!
//! Tests for frame encoding/decoding.

use std::io::Cursor;

use rconsole::protocol::{
    decode_frame, encode_packet, read_packet, MAX_COMMAND_LENGTH, MAX_PACKET_SIZE, MIN_PACKET_SIZE,
    SERVERDATA_AUTH, SERVERDATA_EXEC_COMMAND, SERVERDATA_RESPONSE_VALUE,
};
use rconsole::RconError;

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_wire_format_auth() {
    let encoded = encode_packet(1, SERVERDATA_AUTH, "password123").unwrap();

    // Expected: [size(4)][id(4)][type(4)][p a s s w o r d 1 2 3][00][00]
    // size = 4 + 4 + 11 + 2 = 21
    assert_eq!(encoded.len(), 4 + 21);
    assert_eq!(&encoded[0..4], &21i32.to_le_bytes());
    assert_eq!(&encoded[4..8], &1i32.to_le_bytes());
    assert_eq!(&encoded[8..12], &SERVERDATA_AUTH.to_le_bytes());
    assert_eq!(&encoded[12..23], b"password123");
    assert_eq!(&encoded[23..25], &[0x00, 0x00]);
}

#[test]
fn test_wire_format_empty_payload() {
    let encoded = encode_packet(7, SERVERDATA_EXEC_COMMAND, "").unwrap();

    // Minimal frame: size = 10, body empty, both terminators present
    assert_eq!(encoded.len(), 4 + 10);
    assert_eq!(&encoded[0..4], &MIN_PACKET_SIZE.to_le_bytes());
    assert_eq!(&encoded[12..14], &[0x00, 0x00]);
}

#[test]
fn test_encode_negative_request_id() {
    let encoded = encode_packet(-1, SERVERDATA_EXEC_COMMAND, "x").unwrap();
    assert_eq!(&encoded[4..8], &(-1i32).to_le_bytes());
}

#[test]
fn test_encode_payload_at_limit() {
    let payload = "a".repeat(MAX_COMMAND_LENGTH);
    let encoded = encode_packet(1, SERVERDATA_EXEC_COMMAND, &payload).unwrap();
    assert_eq!(encoded.len(), 4 + 4 + 4 + MAX_COMMAND_LENGTH + 2);
}

#[test]
fn test_encode_payload_too_long() {
    let payload = "a".repeat(MAX_COMMAND_LENGTH + 1);
    let result = encode_packet(1, SERVERDATA_EXEC_COMMAND, &payload);

    assert!(matches!(
        result,
        Err(RconError::CommandTooLong { len: 511, max: 510 })
    ));
}

// =============================================================================
// Round-trip Tests
// =============================================================================

#[test]
fn test_encode_decode_roundtrip() {
    let encoded = encode_packet(42, SERVERDATA_EXEC_COMMAND, "status").unwrap();

    let mut cursor = Cursor::new(encoded);
    let packet = read_packet(&mut cursor).unwrap();

    assert_eq!(packet.request_id, 42);
    assert_eq!(packet.kind, SERVERDATA_EXEC_COMMAND);
    assert_eq!(packet.body, b"status");
    assert!(packet.tail.is_empty());
}

#[test]
fn test_encode_decode_empty_body() {
    let encoded = encode_packet(3, SERVERDATA_RESPONSE_VALUE, "").unwrap();

    let mut cursor = Cursor::new(encoded);
    let packet = read_packet(&mut cursor).unwrap();

    assert_eq!(packet.request_id, 3);
    assert!(packet.body.is_empty());
    assert!(packet.tail.is_empty());
}

#[test]
fn test_decode_body_text_lossy() {
    // 0xFF is not valid UTF-8; body_text must not reject it
    let mut frame = Vec::new();
    frame.extend_from_slice(&9i32.to_le_bytes());
    frame.extend_from_slice(&0i32.to_le_bytes());
    frame.push(0xFF);
    frame.push(0x00);
    frame.push(0x00);

    let packet = decode_frame(&frame).unwrap();
    assert_eq!(packet.body, vec![0xFF]);
    assert_eq!(packet.body_text(), "\u{FFFD}");
}

// =============================================================================
// Size Bound Tests
// =============================================================================

#[test]
fn test_read_size_below_minimum() {
    // Declared size 9 is under the 10-byte floor; the payload must not
    // be read, so none is provided
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&9i32.to_le_bytes());

    let mut cursor = Cursor::new(bytes);
    let result = read_packet(&mut cursor);

    assert!(matches!(result, Err(RconError::InvalidPacketSize(9))));
}

#[test]
fn test_read_size_above_maximum() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&(MAX_PACKET_SIZE + 1).to_le_bytes());

    let mut cursor = Cursor::new(bytes);
    let result = read_packet(&mut cursor);

    assert!(matches!(result, Err(RconError::InvalidPacketSize(4102))));
}

#[test]
fn test_read_negative_size() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&(-1i32).to_le_bytes());

    let mut cursor = Cursor::new(bytes);
    let result = read_packet(&mut cursor);

    assert!(matches!(result, Err(RconError::InvalidPacketSize(-1))));
}

#[test]
fn test_read_truncated_size_field() {
    let mut cursor = Cursor::new(vec![0x0A, 0x00]);
    let result = read_packet(&mut cursor);

    assert!(matches!(result, Err(RconError::ConnectionClosed)));
}

#[test]
fn test_read_truncated_frame() {
    // Size says 10 but only 4 bytes of frame follow
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&10i32.to_le_bytes());
    bytes.extend_from_slice(&1i32.to_le_bytes());

    let mut cursor = Cursor::new(bytes);
    let result = read_packet(&mut cursor);

    assert!(matches!(result, Err(RconError::ConnectionClosed)));
}

// =============================================================================
// Terminator Tests
// =============================================================================

/// Build a frame body by hand: id + type + raw string bytes
fn raw_frame(request_id: i32, kind: i32, strings: &[u8]) -> Vec<u8> {
    let mut frame = Vec::new();
    frame.extend_from_slice(&request_id.to_le_bytes());
    frame.extend_from_slice(&kind.to_le_bytes());
    frame.extend_from_slice(strings);
    frame
}

#[test]
fn test_decode_missing_first_terminator() {
    let frame = raw_frame(1, 0, b"ab");
    let result = decode_frame(&frame);

    assert!(matches!(result, Err(RconError::CrapBytes)));
}

#[test]
fn test_decode_missing_second_terminator() {
    let frame = raw_frame(1, 0, b"ab\x00");
    let result = decode_frame(&frame);

    assert!(matches!(result, Err(RconError::CrapBytes)));
}

#[test]
fn test_decode_bytes_after_second_terminator() {
    // Second terminator lands before the end of the frame
    let frame = raw_frame(1, 0, b"ab\x00\x00xy");
    let result = decode_frame(&frame);

    assert!(matches!(result, Err(RconError::CrapBytes)));
}

#[test]
fn test_decode_nonempty_second_string() {
    // Structurally valid: both terminators in place, tail carries bytes.
    // The codec preserves them; rejecting the frame is the reply
    // reader's job.
    let frame = raw_frame(1, 0, b"ab\x00crap\x00");
    let packet = decode_frame(&frame).unwrap();

    assert_eq!(packet.body, b"ab");
    assert_eq!(packet.tail, b"crap");
}

#[test]
fn test_decode_frame_length_bounds() {
    let result = decode_frame(&[0u8; 9]);
    assert!(matches!(result, Err(RconError::InvalidPacketSize(9))));
}
