//! Filesystem primitives for the credential file.
//!
//! Whole-file reads and writes of the JSON map, plus permission hardening.

use std::fs;
use std::path::Path;

use serde_json::error::Category;
use tracing::{debug, warn};

use crate::core::constants::CREDS_FILE_MODE;
use crate::core::types::RecordMap;
use crate::error::{Result, StoreError};

/// Read and parse the entire credential file.
///
/// Records are left undecoded so one bad record cannot hide the others.
pub(super) fn read_map(path: &Path) -> Result<RecordMap> {
    #[cfg(unix)]
    if let Err(actual) = check_mode(path, CREDS_FILE_MODE) {
        warn!(
            path = %path.display(),
            mode = %format!("{:o}", actual),
            "credential file is accessible by other users"
        );
    }

    let contents = fs::read_to_string(path)?;
    let map: RecordMap = serde_json::from_str(&contents).map_err(|source| {
        // Well-formed JSON that is not an object.
        if source.classify() == Category::Data {
            StoreError::InvalidRecord(format!("{}: {}", path.display(), source))
        } else {
            StoreError::Parse {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    debug!(path = %path.display(), records = map.len(), "credential file loaded");
    Ok(map)
}

/// Rewrite the entire credential file and restrict its permissions.
pub(super) fn write_map(path: &Path, map: &RecordMap) -> Result<()> {
    let contents = serde_json::to_string_pretty(map)?;
    fs::write(path, contents)?;
    restrict_permissions(path)?;

    debug!(path = %path.display(), records = map.len(), "credential file written");
    Ok(())
}

/// Set owner read/write only (Unix). No-op elsewhere.
pub(super) fn restrict_permissions(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(CREDS_FILE_MODE))?;
    }
    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}

/// Compare a file's mode with the expected one, returning the actual mode on mismatch.
#[cfg(unix)]
fn check_mode(path: &Path, expected: u32) -> std::result::Result<(), u32> {
    use std::os::unix::fs::PermissionsExt;

    match fs::metadata(path) {
        Ok(metadata) => {
            let actual = metadata.permissions().mode() & 0o777;
            if actual == expected {
                Ok(())
            } else {
                Err(actual)
            }
        }
        // A missing file surfaces as an io error from the read that follows.
        Err(_) => Ok(()),
    }
}
