//! Configuration for rconsole
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

/// Default RCON port of srcds
pub const DEFAULT_PORT: u16 = 27015;

/// Default server address
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:27015";

/// Default password is empty
pub const DEFAULT_PASSWORD: &str = "";

/// Default connection timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server RCON address, in the format HOST:PORT
    pub address: String,

    // -------------------------------------------------------------------------
    // Authentication Configuration
    // -------------------------------------------------------------------------
    /// RCON password
    pub password: String,

    // -------------------------------------------------------------------------
    // Timeout Configuration
    // -------------------------------------------------------------------------
    /// Hard deadline for a connection: dialing, and every read and write
    /// on the dialed socket, must complete within this window
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server address (HOST:PORT)
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.config.address = address.into();
        self
    }

    /// Set the RCON password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    /// Set the connection timeout
    ///
    /// A zero timeout is replaced with [`DEFAULT_TIMEOUT`]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
