//! Packet definitions
//!
//! The decoded wire frame and the protocol type codes.

use std::borrow::Cow;

/// Authenticate with the server, body carries the password
pub const SERVERDATA_AUTH: i32 = 3;

/// Reply to an authentication request
///
/// Shares its value with [`SERVERDATA_EXEC_COMMAND`]; the byte alone never
/// identifies a frame, the surrounding exchange does.
pub const SERVERDATA_AUTH_RESPONSE: i32 = 2;

/// Execute a console command, body carries the command text
pub const SERVERDATA_EXEC_COMMAND: i32 = 2;

/// Reply carrying command output
pub const SERVERDATA_RESPONSE_VALUE: i32 = 0;

/// Sentinel reply for a successful authentication exchange
pub const AUTH_SUCCESS: &str = "success";

/// A decoded wire frame
///
/// Transient: produced by the codec for one reply, consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Request id echoed by the server; -1 signals authentication failure
    pub request_id: i32,

    /// Packet type code (see the `SERVERDATA_*` constants)
    pub kind: i32,

    /// First null-terminated string: the payload
    pub body: Vec<u8>,

    /// Second null-terminated string; always empty on a well-behaved
    /// server, anything else is a protocol violation
    pub tail: Vec<u8>,
}

impl Packet {
    /// The payload as text
    ///
    /// Server output is not guaranteed to be valid UTF-8, so invalid
    /// sequences are replaced rather than rejected.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
