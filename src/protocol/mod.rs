//! Protocol Module
//!
//! Defines the Source RCON wire protocol.
//!
//! ## Frame Format
//!
//! ```text
//! ┌──────────┬──────────┬──────────┬───────────┬────┬───────────┬────┐
//! │ Size (4) │  ID (4)  │ Type (4) │   Body    │ 00 │  (empty)  │ 00 │
//! └──────────┴──────────┴──────────┴───────────┴────┴───────────┴────┘
//! ```
//!
//! All integers are 32-bit little-endian. `Size` counts everything after
//! itself: 10 bytes minimum (empty body), 4101 bytes maximum (one full
//! 4096-byte string). The second string is a protocol artifact and is
//! always empty in practice.
//!
//! ### Packet Types
//! - 3: SERVERDATA_AUTH           - outgoing, body = password
//! - 2: SERVERDATA_EXEC_COMMAND   - outgoing, body = command text
//! - 2: SERVERDATA_AUTH_RESPONSE  - incoming, shares the code with
//!      EXEC_COMMAND and is told apart only by exchange context
//! - 0: SERVERDATA_RESPONSE_VALUE - incoming, body = command output

mod packet;
mod codec;

pub use packet::{
    Packet, AUTH_SUCCESS, SERVERDATA_AUTH, SERVERDATA_AUTH_RESPONSE, SERVERDATA_EXEC_COMMAND,
    SERVERDATA_RESPONSE_VALUE,
};
pub use codec::{
    decode_frame, encode_packet, read_packet, MAX_COMMAND_LENGTH, MAX_PACKET_SIZE, MIN_PACKET_SIZE,
};
