//! Error types for rconsole
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RconError
pub type Result<T> = std::result::Result<T, RconError>;

/// Unified error type for RCON operations
#[derive(Debug, Error)]
pub enum RconError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("dial {address} failed: {source}")]
    Dial {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("connection closed")]
    ConnectionClosed,

    #[error("no connection")]
    NoConnection,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("invalid packet size: {0}")]
    InvalidPacketSize(i32),

    #[error("response contains crap bytes")]
    CrapBytes,

    #[error("invalid response")]
    InvalidResponse,

    #[error("inconsistent request id: {got}, expected: {expected}")]
    InconsistentRequestId { got: i32, expected: i32 },

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("command length exceeded: {len}/{max}")]
    CommandTooLong { len: usize, max: usize },

    // -------------------------------------------------------------------------
    // Authentication Errors
    // -------------------------------------------------------------------------
    #[error("bad password")]
    BadPassword,
}

impl RconError {
    /// Whether reconnecting can plausibly fix this error.
    ///
    /// Transport-class failures get exactly one reconnect-and-resend
    /// attempt; protocol violations, rejected input, and failed
    /// authentication propagate immediately.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RconError::Dial { .. } | RconError::ConnectionClosed | RconError::NoConnection
        )
    }
}

/// Error returned by [`Client::execute`](crate::Client::execute).
///
/// A multi-line script stops at its first failing command; `output` holds
/// everything the preceding commands already produced, so partial results
/// are never discarded.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct ExecuteError {
    /// Output accumulated before the failure (possibly empty)
    pub output: String,

    /// The error that stopped execution
    #[source]
    pub source: RconError,
}

impl ExecuteError {
    pub(crate) fn new(output: String, source: RconError) -> Self {
        Self { output, source }
    }
}
