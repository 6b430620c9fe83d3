//! Reading plaintext from the user.
//!
//! Every reader has two sources: piped stdin (scripts and tests) or an
//! interactive prompt when stdin is a terminal.

use std::io::{self, IsTerminal, Read};

use dialoguer::{Confirm, Input, Password};
use zeroize::Zeroizing;

use crate::errors::{Result, SafeZoneError};

/// Read a user name, prompting when none was given on the command line.
pub fn read_user(user: Option<&str>) -> Result<String> {
    if let Some(u) = user {
        return Ok(u.to_string());
    }
    Input::<String>::new()
        .with_prompt("User")
        .interact_text()
        .map_err(|e| SafeZoneError::CommandFailed(format!("input prompt: {e}")))
}

/// Read a password from piped stdin (first line) or a hidden prompt with
/// confirmation.
pub fn read_password() -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        let first = buf.lines().next().unwrap_or_default();
        return Ok(Zeroizing::new(first.to_string()));
    }

    let pw = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match, try again")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| SafeZoneError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Read note lines from piped stdin, or prompt one line at a time until a
/// blank line.
pub fn read_note_lines() -> Result<Vec<String>> {
    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf.lines().map(str::to_string).collect());
    }

    crate::cli::output::info("Enter content (blank line ends):");
    let mut lines = Vec::new();
    loop {
        let line: String = Input::new()
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SafeZoneError::CommandFailed(format!("input prompt: {e}")))?;
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| SafeZoneError::CommandFailed(format!("confirm prompt: {e}")))
}
