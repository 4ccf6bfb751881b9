//! Type aliases for domain concepts.

/// Caller-chosen identifier of one stored credential (e.g. `prod_mysql`).
pub type ConnId = String;

/// Ordered map of every stored credential, in file order.
pub type CredentialMap = indexmap::IndexMap<ConnId, crate::core::domain::Credential>;

/// The credential file as written on disk: conn_id to undecoded record.
pub type RecordMap = indexmap::IndexMap<ConnId, serde_json::Value>;
