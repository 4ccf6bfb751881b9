//! Retry and reconnect policy for database connections.
//!
//! Two behaviors, both bounded:
//!
//! - [`RetryPolicy::connect`] retries establishing a connection up to
//!   `max_attempts` times with a fixed delay in between.
//! - [`RetryPolicy::call`] runs an operation; on failure it asks the
//!   connection to revive itself (ping with reconnect), retries once, and if
//!   that fails too, re-dials from scratch and retries a final time.

use std::fmt::Display;
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::ConnectError;

/// Default number of connection attempts.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Default pause between connection attempts.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// A live connection that can try to recover after a failed call.
pub trait Reconnect {
    type Error: Display;

    /// Check the connection, reopening it in place if it dropped.
    fn ping(&mut self) -> Result<(), Self::Error>;

    /// Dial a brand new connection, replacing the current one.
    fn reconnect(&mut self) -> Result<(), Self::Error>;
}

/// Bounded retry settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: DEFAULT_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Policy that retries without sleeping.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            delay: Duration::ZERO,
        }
    }

    /// Run `dial` until it succeeds or attempts run out.
    ///
    /// `dial` receives the 1-based attempt number.
    ///
    /// # Errors
    ///
    /// Returns `ConnectError::Exhausted` carrying the last failure.
    pub fn connect<T, E, F>(&self, mut dial: F) -> Result<T, ConnectError>
    where
        E: Display,
        F: FnMut(u32) -> Result<T, E>,
    {
        let attempts = self.max_attempts.max(1);
        let mut last = String::new();

        for attempt in 1..=attempts {
            info!(attempt, "connecting");
            match dial(attempt) {
                Ok(conn) => {
                    info!(attempt, "connected");
                    return Ok(conn);
                }
                Err(e) => {
                    warn!(attempt, error = %e, "connection attempt failed");
                    last = e.to_string();
                    if attempt < attempts && !self.delay.is_zero() {
                        thread::sleep(self.delay);
                    }
                }
            }
        }

        Err(ConnectError::Exhausted { attempts, last })
    }

    /// Run `op` against `conn`, recovering the connection on failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt, or the reconnect error if the
    /// connection could not be re-dialed.
    pub fn call<C, T, F>(&self, conn: &mut C, mut op: F) -> Result<T, C::Error>
    where
        C: Reconnect,
        F: FnMut(&mut C) -> Result<T, C::Error>,
    {
        match op(conn) {
            Ok(value) => return Ok(value),
            Err(e) => warn!(error = %e, "operation failed, pinging connection"),
        }

        match conn.ping().and_then(|()| op(conn)) {
            Ok(value) => return Ok(value),
            Err(e) => warn!(error = %e, "ping retry failed, reconnecting"),
        }

        conn.reconnect()?;
        op(conn)
    }
}
