//! dataxi - A local credential vault for database logins, secrets and tokens.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── add           # Interactive credential entry
//! │   ├── credentials   # list, load, delete
//! │   ├── generate      # Password generation
//! │   ├── output        # Styled terminal output
//! │   ├── prompt        # Confirmation and input, with piped-stdin fallback
//! │   ├── send          # One-time secret links, region
//! │   └── storage       # path, clean, reset
//! ├── connector/        # Dial parameters and retry policy for drivers
//! └── core/             # Core library components
//!     ├── config        # config.ini (sender region)
//!     ├── domain/       # Credential record model
//!     ├── password      # Password generator
//!     ├── sender        # onetimesecret.com client
//!     ├── store/        # creds.json storage
//!     └── table         # Redacted table rendering
//! ```
//!
//! # Storage
//!
//! Credentials live in `~/.dataxi/creds.json` (mode `0600`), a JSON object
//! mapping each conn_id to its record. The directory can be overridden with
//! `--dir` or `DATAXI_DIR`.

pub mod cli;
pub mod connector;
pub mod core;
pub mod error;
