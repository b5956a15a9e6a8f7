//! Command exchange
//!
//! One command, one reply: the send/await state machine with its single
//! silent retry, the authentication handshake, and the reply reader.

use crate::error::{RconError, Result};
use crate::network::Connection;
use crate::protocol::{
    encode_packet, read_packet, AUTH_SUCCESS, SERVERDATA_AUTH, SERVERDATA_AUTH_RESPONSE,
    SERVERDATA_EXEC_COMMAND, SERVERDATA_RESPONSE_VALUE,
};
use super::{Client, Inner};

/// Exchange state for a single command
///
/// `Sending` and `AwaitingReply` fall through to `Retrying` at most once
/// (`retried` flips on the way back to `Sending`); every later failure is
/// terminal.
enum Step {
    Sending { retried: bool },
    AwaitingReply { id: i32, retried: bool },
    Retrying,
}

/// Which exchange a reply belongs to
///
/// The auth-response type code collides with the exec-command code, so a
/// frame is interpreted by the exchange it arrives in, never by its type
/// byte alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Handshake,
    Command,
}

impl Client {
    /// Run a single command to completion
    ///
    /// On a transport failure the connection is rebuilt (dial +
    /// handshake) and the command is resent exactly once; the second
    /// attempt is never retried. Protocol violations, over-long input,
    /// and rejected authentication are terminal immediately. The
    /// connection is torn down on every terminal error.
    pub(crate) fn run_command(&self, inner: &mut Inner, cmd: &str) -> Result<String> {
        let mut step = Step::Sending { retried: false };

        loop {
            step = match step {
                Step::Sending { retried } => {
                    match send_frame(inner, SERVERDATA_EXEC_COMMAND, cmd) {
                        Ok(id) => Step::AwaitingReply { id, retried },
                        Err(err) if err.is_transport() && !retried => Step::Retrying,
                        Err(err) => {
                            inner.disconnect();
                            return Err(err);
                        }
                    }
                }

                Step::AwaitingReply { id, retried } => {
                    match read_reply(inner, id, Context::Command) {
                        Ok(reply) => return Ok(reply),
                        Err(err) if err.is_transport() && !retried => Step::Retrying,
                        Err(err) => {
                            inner.disconnect();
                            return Err(err);
                        }
                    }
                }

                Step::Retrying => {
                    if let Err(err) = self.reconnect(inner) {
                        inner.disconnect();
                        return Err(err);
                    }
                    Step::Sending { retried: true }
                }
            };
        }
    }

    /// Tear down and rebuild the connection, then authenticate
    fn reconnect(&self, inner: &mut Inner) -> Result<()> {
        inner.disconnect();
        tracing::warn!("Connection to {} lost, reconnecting", self.address);

        inner.conn = Some(Connection::dial(&self.address, self.timeout)?);
        self.handshake(inner)
    }

    /// Authenticate on a fresh connection
    ///
    /// Some server implementations emit an empty
    /// `SERVERDATA_RESPONSE_VALUE` before the real auth reply; an empty
    /// first reply means one more read. Rejection is signalled by a
    /// request id of -1 in either reply; anything else is success.
    fn handshake(&self, inner: &mut Inner) -> Result<()> {
        let id = send_frame(inner, SERVERDATA_AUTH, &self.password)?;

        let reply = read_reply(inner, id, Context::Handshake)?;
        if reply.is_empty() {
            read_reply(inner, id, Context::Handshake)?;
        }

        tracing::debug!("Authenticated with {}", self.address);
        Ok(())
    }
}

/// Issue the next request id, encode and send one frame
///
/// The id counter only advances once the frame actually encodes, so a
/// rejected payload consumes neither an id nor any I/O.
fn send_frame(inner: &mut Inner, kind: i32, payload: &str) -> Result<i32> {
    let id = inner.request_id.wrapping_add(1);
    let frame = encode_packet(id, kind, payload)?;
    inner.request_id = id;

    let conn = inner.conn.as_mut().ok_or(RconError::NoConnection)?;
    conn.send(&frame)?;

    tracing::debug!("Sent frame id={} kind={} ({} bytes)", id, kind, frame.len());
    Ok(id)
}

/// Read one frame and reduce it to a logical reply
///
/// A reply may legitimately span multiple frames for very large output;
/// this reads exactly one and returns whatever arrived.
/// TODO: stitch split replies once the split heuristic is validated
/// against a live server.
fn read_reply(inner: &mut Inner, expected_id: i32, ctx: Context) -> Result<String> {
    let conn = inner.conn.as_mut().ok_or(RconError::NoConnection)?;
    let packet = read_packet(conn)?;

    // -1 signals rejected authentication regardless of context
    if packet.request_id == -1 {
        inner.disconnect();
        return Err(RconError::BadPassword);
    }

    if packet.request_id != expected_id {
        return Err(RconError::InconsistentRequestId {
            got: packet.request_id,
            expected: expected_id,
        });
    }

    if !packet.tail.is_empty() {
        return Err(RconError::CrapBytes);
    }

    match (ctx, packet.kind) {
        (Context::Handshake, SERVERDATA_AUTH_RESPONSE) => Ok(AUTH_SUCCESS.to_string()),
        (_, SERVERDATA_RESPONSE_VALUE) => Ok(packet.body_text().into_owned()),
        _ => Err(RconError::InvalidResponse),
    }
}
