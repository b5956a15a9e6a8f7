//! Client Module
//!
//! The RCON client: construction, the exclusive lock, and script
//! orchestration. The per-command exchange lives in [`exchange`].
//!
//! ## Concurrency Model
//!
//! One lock, held for the full duration of every [`Client::execute`]
//! call. Concurrent callers are fully serialized: frames of two calls
//! never interleave on the wire, and a multi-line script or silent retry
//! is atomic with respect to other callers. A slow command therefore
//! blocks everyone else until the connection deadline expires.

mod exchange;

use std::time::Duration;

use parking_lot::Mutex;

use crate::config::{Config, DEFAULT_TIMEOUT};
use crate::error::ExecuteError;
use crate::network::Connection;

/// Script lines starting with this marker are skipped
const COMMENT_MARKER: &str = "//";

/// A Source RCON client
///
/// Holds the target address and credentials; the TCP connection is
/// dialed lazily on the first exchange and replaced transparently after
/// a transient transport failure. Safe to share across threads.
pub struct Client {
    /// Server RCON address (HOST:PORT)
    address: String,

    /// RCON password
    password: String,

    /// Hard per-connection deadline
    timeout: Duration,

    /// Connection state, serialized across callers
    inner: Mutex<Inner>,
}

/// Mutable client state guarded by the lock
pub(crate) struct Inner {
    /// Monotonically increasing request id; never reused, wraps only on
    /// i32 overflow
    request_id: i32,

    /// Live connection, if any
    conn: Option<Connection>,
}

impl Inner {
    /// Drop the live connection, if any; no-op when already closed
    fn disconnect(&mut self) {
        if let Some(mut conn) = self.conn.take() {
            conn.close();
        }
    }
}

impl Client {
    /// Create a new client
    ///
    /// A zero timeout is replaced with the 1-second default. The client
    /// does not dial until the first command is executed.
    pub fn new(
        address: impl Into<String>,
        password: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let timeout = if timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            timeout
        };

        Self {
            address: address.into(),
            password: password.into(),
            timeout,
            inner: Mutex::new(Inner {
                request_id: 0,
                conn: None,
            }),
        }
    }

    /// Create a client from a [`Config`]
    pub fn from_config(config: Config) -> Self {
        Self::new(config.address, config.password, config.timeout)
    }

    /// Execute a command, or a multi-line script of commands
    ///
    /// Each line is trimmed; blank lines and lines starting with `//`
    /// are skipped. Replies are concatenated in order. Execution stops
    /// at the first failing line, and the [`ExecuteError`] carries the
    /// output accumulated up to that point.
    ///
    /// An input with no effective commands returns an empty string
    /// without touching the network.
    pub fn execute(&self, cmd: &str) -> Result<String, ExecuteError> {
        let mut inner = self.inner.lock();

        let mut output = String::new();
        for line in cmd.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }

            match self.run_command(&mut inner, line) {
                Ok(reply) => output.push_str(&reply),
                Err(source) => return Err(ExecuteError::new(output, source)),
            }
        }

        Ok(output)
    }
}
