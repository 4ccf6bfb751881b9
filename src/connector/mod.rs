//! Glue for database connectors.
//!
//! dataxi does not ship database drivers. A connector built on top of it
//! looks up dial parameters by conn_id through [`ConnectParams::from_store`]
//! and wraps its driver calls in a [`RetryPolicy`].

mod retry;

pub use retry::{Reconnect, RetryPolicy, DEFAULT_DELAY, DEFAULT_MAX_ATTEMPTS};

use std::fmt;

use tracing::info;

use crate::core::domain::{Credential, DbType};
use crate::core::store::CredentialStore;
use crate::error::{ConnectError, Result};

/// Everything a driver needs to dial a database.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectParams {
    pub db_type: DbType,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: Option<String>,
}

impl ConnectParams {
    /// Read dial parameters for `conn_id` from the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `conn_id` is absent, or
    /// `ConnectError::NotDatabase` if it holds a secret or token.
    pub fn from_store(store: &CredentialStore, conn_id: &str) -> Result<Self> {
        info!(conn_id, "loading connection parameters");
        match store.get(conn_id)? {
            Credential::Database {
                db_type,
                host,
                port,
                user,
                password,
                database,
            } => Ok(Self {
                db_type,
                host,
                port,
                user,
                password,
                database,
            }),
            _ => Err(ConnectError::NotDatabase(conn_id.to_string()).into()),
        }
    }
}

impl fmt::Debug for ConnectParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectParams")
            .field("db_type", &self.db_type)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}
