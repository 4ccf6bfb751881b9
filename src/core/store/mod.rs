//! Credential storage.
//!
//! A single JSON file (`creds.json`) under the storage directory maps each
//! conn_id to its [`Credential`]. Every mutation reads the whole file, edits
//! the in-memory map, rewrites the whole file and then forces mode `0600`.
//!
//! ## Limitations
//!
//! There is no file locking and no temp-file rename. Two processes racing on
//! `add`/`delete` can lose an update. The store assumes one interactive user
//! running one instance at a time.
//!
//! ## Example
//!
//! ```no_run
//! use dataxi::core::domain::Credential;
//! use dataxi::core::store::CredentialStore;
//!
//! let store = CredentialStore::open("/tmp/dataxi-demo")?;
//! store.add("api", Credential::Token { token: "t-123".into() })?;
//! assert_eq!(store.list_ids()?, vec!["api".to_string()]);
//! # Ok::<(), dataxi::error::Error>(())
//! ```

mod fs;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::constants;
use crate::core::domain::{Credential, Entry};
use crate::core::types::{CredentialMap, RecordMap};
use crate::error::{Result, StoreError, ValidationError};

/// Default storage directory (`~/.dataxi`).
///
/// # Errors
///
/// Returns `StoreError::NoHomeDir` if the home directory cannot be determined.
pub fn default_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    Ok(home.join(constants::CONFIG_DIR))
}

/// Resolve the storage directory from an optional override.
pub fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => default_dir(),
    }
}

/// File-backed credential store rooted at an explicit directory.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    dir: PathBuf,
    path: PathBuf,
}

impl CredentialStore {
    /// Create a handle without touching the filesystem.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let path = dir.join(constants::CREDS_FILE);
        Self { dir, path }
    }

    /// Create a handle and make sure the directory and file exist.
    ///
    /// # Errors
    ///
    /// Returns an io error if the directory or file cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(dir);
        store.ensure_initialized()?;
        Ok(store)
    }

    /// Storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Credential file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory and an empty `{}` credential file if missing.
    ///
    /// Does nothing when both already exist.
    pub fn ensure_initialized(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        if !self.path.exists() {
            std::fs::write(&self.path, "{}")?;
            fs::restrict_permissions(&self.path)?;
            info!(path = %self.path.display(), "created credential file");
        }

        Ok(())
    }

    /// Store a new credential.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyExists` if `conn_id` is taken; the existing
    /// record is left untouched.
    /// Returns `ValidationError::EmptyConnId` for an empty or blank id.
    pub fn add(&self, conn_id: &str, credential: Credential) -> Result<Entry> {
        if conn_id.trim().is_empty() {
            return Err(ValidationError::EmptyConnId.into());
        }

        let mut map = self.load()?;
        if map.contains_key(conn_id) {
            return Err(StoreError::AlreadyExists(conn_id.to_string()).into());
        }

        map.insert(conn_id.to_string(), serde_json::to_value(&credential)?);
        fs::write_map(&self.path, &map)?;

        info!(conn_id, kind = %credential.kind(), "added credential");
        Ok(Entry::new(conn_id.to_string(), credential))
    }

    /// All conn_ids in ascending lexical order.
    ///
    /// Record contents are not decoded, so a malformed record still lists.
    pub fn list_ids(&self) -> Result<Vec<String>> {
        let mut ids: Vec<String> = self.load()?.into_keys().collect();
        ids.sort();
        Ok(ids)
    }

    /// Remove a credential.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `conn_id` is absent; the file is not
    /// rewritten in that case. The other records are written back as read,
    /// so a malformed record can be deleted.
    pub fn delete(&self, conn_id: &str) -> Result<()> {
        let mut map = self.load()?;
        if map.shift_remove(conn_id).is_none() {
            return Err(StoreError::NotFound(conn_id.to_string()).into());
        }

        fs::write_map(&self.path, &map)?;

        info!(conn_id, "deleted credential");
        Ok(())
    }

    /// Fetch one credential in clear.
    ///
    /// This is the reveal path: the password is returned unmasked.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `conn_id` is absent and
    /// `StoreError::InvalidRecord` if its record has no known shape.
    pub fn get(&self, conn_id: &str) -> Result<Credential> {
        let mut map = self.load()?;
        debug!(conn_id, "loading credential");
        let record = map
            .shift_remove(conn_id)
            .ok_or_else(|| StoreError::NotFound(conn_id.to_string()))?;
        decode(conn_id, record)
    }

    /// Every credential in file order.
    ///
    /// Values are in clear; redact before display.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidRecord` naming the first record that has
    /// no known shape.
    pub fn get_all(&self) -> Result<CredentialMap> {
        self.load()?
            .into_iter()
            .map(|(conn_id, record)| {
                decode(&conn_id, record).map(|credential| (conn_id, credential))
            })
            .collect()
    }

    /// Delete the storage directory and start over with an empty store.
    ///
    /// Irreversible. Callers gate this behind confirmation.
    pub fn reset(&self) -> Result<()> {
        self.clean()?;
        self.ensure_initialized()?;
        info!(dir = %self.dir.display(), "credential storage reset");
        Ok(())
    }

    /// Delete the storage directory, including the region config.
    ///
    /// A missing directory is not an error.
    pub fn clean(&self) -> Result<()> {
        if self.dir.exists() {
            std::fs::remove_dir_all(&self.dir)?;
            info!(dir = %self.dir.display(), "storage directory deleted");
        }
        Ok(())
    }

    fn load(&self) -> Result<RecordMap> {
        fs::read_map(&self.path)
    }
}

/// Turn one on-disk record into a [`Credential`].
fn decode(conn_id: &str, record: serde_json::Value) -> Result<Credential> {
    serde_json::from_value(record)
        .map_err(|e| StoreError::InvalidRecord(format!("conn_id '{}': {}", conn_id, e)).into())
}
