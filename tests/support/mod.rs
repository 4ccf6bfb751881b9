//! Test support utilities for dataxi integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// Child processes get `HOME` pointed at the temp dir, so the default
/// storage directory is `<home>/.dataxi` and tests can run in parallel.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self { home }
    }

    /// Create a test environment with credentials already stored.
    pub fn with_credentials(records: &[(&str, serde_json::Value)]) -> Self {
        let t = Self::new();
        t.write_creds(&object(records));
        t
    }

    /// Default storage directory under the temp home.
    pub fn dir(&self) -> PathBuf {
        self.home.path().join(".dataxi")
    }

    /// Path of `creds.json`.
    pub fn creds_path(&self) -> PathBuf {
        self.dir().join("creds.json")
    }

    /// Raw contents of `creds.json`.
    pub fn creds_raw(&self) -> String {
        std::fs::read_to_string(self.creds_path()).expect("failed to read creds.json")
    }

    /// Parsed contents of `creds.json`.
    pub fn creds(&self) -> serde_json::Value {
        serde_json::from_str(&self.creds_raw()).expect("creds.json is not JSON")
    }

    /// Overwrite `creds.json`.
    pub fn write_creds(&self, value: &serde_json::Value) {
        std::fs::create_dir_all(self.dir()).expect("failed to create storage dir");
        let json = serde_json::to_string_pretty(value).expect("failed to encode");
        std::fs::write(self.creds_path(), json).expect("failed to write creds.json");
        restrict(&self.creds_path());
    }
}

#[cfg(unix)]
fn restrict(path: &std::path::Path) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .expect("failed to chmod");
}

#[cfg(not(unix))]
fn restrict(_path: &std::path::Path) {}
