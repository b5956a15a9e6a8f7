//! # rconsole
//!
//! A Source RCON protocol client, for administering game server consoles
//! (srcds and compatible) over TCP:
//! - Binary length-prefixed packet codec
//! - Lazy connect with a single authentication handshake per connection
//! - One silent reconnect-and-resend on transient transport failure
//! - Multi-line script execution with `//` comments
//!
//! Protocol reference: <https://developer.valvesoftware.com/wiki/Source_RCON_Protocol>
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Client::execute                          │
//! │          (script splitting, exclusive lock)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ per command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Exchange State Machine                      │
//! │       (send → await reply → one retry on transport loss)     │
//! └──────────┬─────────────────────────────────┬────────────────┘
//!            │                                 │
//!            ▼                                 ▼
//!     ┌─────────────┐                  ┌─────────────┐
//!     │    Codec    │                  │  Connection │
//!     │ (LE frames) │                  │ (deadline)  │
//!     └─────────────┘                  └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//! use rconsole::Client;
//!
//! let client = Client::new("127.0.0.1:27015", "changeme", Duration::from_secs(1));
//! let status = client.execute("status")?;
//! println!("{}", status.trim());
//! # Ok::<(), rconsole::ExecuteError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ExecuteError, RconError, Result};
pub use config::{Config, DEFAULT_ADDRESS, DEFAULT_PASSWORD, DEFAULT_PORT, DEFAULT_TIMEOUT};
pub use client::Client;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rconsole
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
