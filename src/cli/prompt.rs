//! Interactive input helpers.
//!
//! Every prompt degrades to a non-interactive path when stdin is piped, so
//! the binary can be scripted and tested.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::{Confirm, Input, Password};
use zeroize::Zeroizing;

use crate::error::{Result, ValidationError};

/// Whether stdin is attached to a terminal.
pub fn interactive() -> bool {
    io::stdin().is_terminal()
}

/// Ask before a destructive or revealing action.
///
/// `yes` skips the question. Without a terminal and without `yes` the action
/// is refused rather than silently performed.
pub fn confirm(action: &'static str, question: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if !interactive() {
        return Err(ValidationError::ConfirmationRequired(action).into());
    }
    Ok(Confirm::new()
        .with_prompt(question)
        .default(false)
        .interact()?)
}

/// Prompt for a visible value, or read one line from piped stdin.
pub fn text(label: &str) -> Result<String> {
    if !interactive() {
        return read_line();
    }
    Ok(Input::<String>::new().with_prompt(label).interact_text()?)
}

/// Prompt for a hidden value, or read one line from piped stdin.
pub fn secret(label: &str) -> Result<Zeroizing<String>> {
    let value = if interactive() {
        Password::new().with_prompt(label).interact()?
    } else {
        read_line()?
    };
    Ok(Zeroizing::new(value))
}

fn read_line() -> Result<String> {
    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}
