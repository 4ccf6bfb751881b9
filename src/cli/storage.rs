//! Path, clean and reset commands.

use std::path::Path;

use crate::cli::{output, prompt};
use crate::core::store::CredentialStore;
use crate::error::Result;

/// Print the storage directory.
pub fn path(dir: &Path) -> Result<()> {
    println!("{}", dir.display());
    Ok(())
}

/// Delete the storage directory and everything in it.
pub fn clean(dir: &Path, yes: bool) -> Result<()> {
    let question = format!(
        "Delete {} and every credential in it?",
        output::path(&dir.display().to_string())
    );
    if !prompt::confirm("clean", &question, yes)? {
        output::hint("cancelled");
        return Ok(());
    }

    CredentialStore::new(dir).clean()?;
    output::success(&format!("removed {}", output::path(&dir.display().to_string())));
    Ok(())
}

/// Delete every credential and start over with an empty store.
pub fn reset(dir: &Path, yes: bool) -> Result<()> {
    if !prompt::confirm("reset", "Delete every stored credential?", yes)? {
        output::hint("cancelled");
        return Ok(());
    }

    let store = CredentialStore::new(dir);
    store.reset()?;
    output::success(&format!(
        "reset {}",
        output::path(&store.path().display().to_string())
    ));
    Ok(())
}
