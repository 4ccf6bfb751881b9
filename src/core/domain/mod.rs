//! Domain types.

mod credential;
mod entry;

pub use credential::{Credential, DbType, Engine, Kind};
pub use entry::Entry;
