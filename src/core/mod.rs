//! Core library components.
//!
//! Credential storage, password generation, table rendering and one-time
//! secret sharing. Nothing here prompts or prints.

pub mod config;
pub mod constants;
pub mod domain;
pub mod password;
pub mod sender;
pub mod store;
pub mod table;
pub mod types;
