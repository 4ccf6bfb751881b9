//! Constants used throughout dataxi.
//!
//! Centralizes file names and defaults.

/// Storage directory relative to HOME (~/.dataxi).
pub const CONFIG_DIR: &str = ".dataxi";

/// Credential file name inside the storage directory.
pub const CREDS_FILE: &str = "creds.json";

/// Region config file name inside the storage directory.
pub const CONFIG_FILE: &str = "config.ini";

/// Mode applied to the credential file after every write.
pub const CREDS_FILE_MODE: u32 = 0o600;

/// INI section holding sender settings.
pub const SENDER_SECTION: &str = "sender";

/// INI key for the preferred secret-sharing region.
pub const REGION_KEY: &str = "secret_send_region";

/// Default time-to-live for shared secrets, in seconds.
pub const DEFAULT_TTL: u64 = 3600;

/// Default network timeout for the secret service, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
