//! Entry type.
//!
//! A credential together with the conn_id it is stored under.

use crate::core::domain::Credential;
use crate::core::types::ConnId;

/// A stored credential and its conn_id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    conn_id: ConnId,
    credential: Credential,
}

impl Entry {
    /// Create a new entry.
    pub fn new(conn_id: ConnId, credential: Credential) -> Self {
        Self {
            conn_id,
            credential,
        }
    }

    /// Identifier the credential is stored under.
    pub fn conn_id(&self) -> &str {
        &self.conn_id
    }

    /// Stored credential.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Consume the entry, returning the credential.
    pub fn into_credential(self) -> Credential {
        self.credential
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.conn_id, self.credential.kind())
    }
}
