//! Connection Manager
//!
//! Dials the RCON server and bounds all socket I/O with a hard deadline.

use std::io::{self, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

use crate::error::{RconError, Result};

/// A live TCP connection to the RCON server
///
/// The deadline is absolute: `now + timeout` is fixed once at dial time,
/// and every read and write on the connection must complete before it.
/// It is not a per-call sliding window, so an exchange started near the
/// end of the window can still time out mid-flight.
pub struct Connection {
    /// Underlying TCP stream
    stream: TcpStream,

    /// Hard deadline for all I/O on this connection
    deadline: Instant,
}

impl Connection {
    /// Dial `address` (HOST:PORT), bounded by `timeout`
    ///
    /// Fails with [`RconError::Dial`] if the address does not resolve or
    /// the connection cannot be established within the timeout.
    pub fn dial(address: &str, timeout: Duration) -> Result<Self> {
        let addr = resolve(address).map_err(|source| RconError::Dial {
            address: address.to_string(),
            source,
        })?;

        let stream = TcpStream::connect_timeout(&addr, timeout).map_err(|source| {
            RconError::Dial {
                address: address.to_string(),
                source,
            }
        })?;

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true).map_err(|source| RconError::Dial {
            address: address.to_string(),
            source,
        })?;

        tracing::debug!("Connected to {} (deadline in {:?})", address, timeout);

        Ok(Self {
            stream,
            deadline: Instant::now() + timeout,
        })
    }

    /// Time left before the connection deadline, if any
    fn remaining(&self) -> io::Result<Duration> {
        match self.deadline.checked_duration_since(Instant::now()) {
            Some(left) if !left.is_zero() => Ok(left),
            _ => Err(io::Error::new(
                io::ErrorKind::TimedOut,
                "connection deadline expired",
            )),
        }
    }

    /// Write a full frame to the server
    ///
    /// Any write failure, including deadline expiry, is reported as
    /// [`RconError::ConnectionClosed`]; the socket is not reusable after
    /// a partial write anyway.
    pub fn send(&mut self, frame: &[u8]) -> Result<()> {
        let send = |conn: &mut Self| -> io::Result<()> {
            let left = conn.remaining()?;
            conn.stream.set_write_timeout(Some(left))?;
            conn.stream.write_all(frame)?;
            conn.stream.flush()
        };

        send(self).map_err(|_| RconError::ConnectionClosed)
    }

    /// Close the connection
    ///
    /// Shutdown errors are ignored; the peer may already be gone.
    pub fn close(&mut self) {
        let _ = self.stream.shutdown(Shutdown::Both);
        tracing::debug!("Connection closed");
    }
}

impl Read for Connection {
    /// Read bounded by the remaining deadline window
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let left = self.remaining()?;
        self.stream.set_read_timeout(Some(left))?;
        self.stream.read(buf)
    }
}

/// Resolve HOST:PORT to a socket address
fn resolve(address: &str) -> io::Result<SocketAddr> {
    address.to_socket_addrs()?.next().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "address resolved to nothing")
    })
}
