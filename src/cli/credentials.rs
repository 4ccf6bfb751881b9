//! List, load and delete commands.

use std::path::Path;

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{output, prompt};
use crate::core::store::CredentialStore;
use crate::core::table;
use crate::error::Result;

/// Print every conn_id, sorted.
pub fn list(dir: &Path, json: bool) -> Result<()> {
    let store = CredentialStore::open(dir)?;
    let ids = store.list_ids()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ids)?);
        return Ok(());
    }

    if ids.is_empty() {
        output::dimmed("no credentials stored");
        output::hint("run: dataxi add <conn_id>");
    } else {
        for id in &ids {
            println!("{}", output::key(id));
        }
    }
    output::records_retrieved(ids.len());
    Ok(())
}

/// Print one credential in clear, after confirmation.
pub fn reveal(dir: &Path, conn_id: &str, yes: bool) -> Result<()> {
    let store = CredentialStore::open(dir)?;
    let credential = store.get(conn_id)?;

    let question = format!("Show the password of {} in clear?", output::key(conn_id));
    if !prompt::confirm("revealing a credential", &question, yes)? {
        output::hint("cancelled");
        return Ok(());
    }

    info!(conn_id, "revealing credential");
    let json = Zeroizing::new(serde_json::to_string_pretty(&credential)?);
    println!("{}", json.as_str());
    Ok(())
}

/// Print the masked table of every credential.
pub fn show_all(dir: &Path) -> Result<()> {
    let store = CredentialStore::open(dir)?;
    let credentials = store.get_all()?;

    println!("{}", table::render(&credentials)?);
    output::records_retrieved(credentials.len());
    Ok(())
}

/// Delete one credential, after confirmation.
pub fn delete(dir: &Path, conn_id: &str, yes: bool) -> Result<()> {
    let store = CredentialStore::open(dir)?;
    // Fail on a missing id before asking anything.
    store.get(conn_id)?;

    let question = format!("Delete {}?", output::key(conn_id));
    if !prompt::confirm("deleting a credential", &question, yes)? {
        output::hint("cancelled");
        return Ok(());
    }

    store.delete(conn_id)?;
    output::success(&format!("deleted {}", output::key(conn_id)));
    Ok(())
}
