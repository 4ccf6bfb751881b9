//! Error types for dataxi.
//!
//! Each concern gets its own enum; [`Error`] folds them together so library
//! callers can branch on the domain variant they care about.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Sender(#[from] SenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Connect(#[from] ConnectError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Credential store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("conn_id '{0}' does not exist")]
    NotFound(String),

    #[error("conn_id '{0}' already exists")]
    AlreadyExists(String),

    #[error("credential file {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid credential record: {0}")]
    InvalidRecord(String),

    #[error("unable to determine home directory")]
    NoHomeDir,
}

/// Password generator constraint violations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("password length must be between {min} and {max}, got {length}")]
    InvalidLength {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("no available characters to generate a password, check your settings")]
    EmptyPool,
}

/// One-time secret API failures.
#[derive(Error, Debug)]
pub enum SenderError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("secret service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response from secret service: {0}")]
    Api(String),
}

/// Region configuration file failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid secret_send_region '{0}' in config (expected 'us' or 'eu')")]
    InvalidRegion(String),
}

/// Input validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("conn_id cannot be empty")]
    EmptyConnId,

    #[error("{0} cannot be empty")]
    EmptyValue(&'static str),

    #[error(
        "unknown database type '{0}' (valid: mysql, mssql/sql_server, clickhouse/ch, postgresql/postgres)"
    )]
    UnknownDbType(String),

    #[error("invalid port '{0}' (expected 1-65535)")]
    InvalidPort(String),

    #[error("unknown region '{0}' (valid: us, eu)")]
    UnknownRegion(String),

    #[error("{0} requires confirmation: pass --yes when not running interactively")]
    ConfirmationRequired(&'static str),
}

/// Connection establishment failures from the retry policy.
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("unable to connect after {attempts} attempts: {last}")]
    Exhausted { attempts: u32, last: String },

    #[error("conn_id '{0}' does not hold database credentials")]
    NotDatabase(String),
}

/// Result type alias using dataxi's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
